//! Implementation Registry System
//!
//! Resolves implementation identifiers from the mapping to constructors.
//! Implementations are added either explicitly at startup or through the
//! `linkme` distributed slice [`IMPLEMENTATIONS`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Implementation Resolution Flow                 │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Implementation:  registry.register::<Circle>("Circle")      │
//! │                        .provides::<dyn Shape>(..)               │
//! │                              ↓                                  │
//! │  2. Mapping selects: "Shape = Circle"                           │
//! │                              ↓                                  │
//! │  3. Injector checks: entry.binding_for(TypeId of dyn Shape)     │
//! │                              ↓                                  │
//! │  4. Injector builds: entry.instantiate() → binding.upcast()     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod implementation;
pub mod linked;

pub use implementation::{Binding, ImplementationBuilder, ImplementationEntry, ImplementationRegistry};
pub use linked::{IMPLEMENTATIONS, LinkedImplementation, list_linked_implementations};
