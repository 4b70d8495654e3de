//! # Application Layer
//!
//! Wiring logic for autowire: the implementation registry, the declarative
//! field registry and the [`Injector`] that connects them through a
//! [`Mapping`](autowire_domain::Mapping).
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Implementation identifiers → constructors and provided abstractions |
//! | [`injectable`] | Per-type declarations of injectable fields |
//! | [`injector`] | Resolution, compatibility check, construction and assignment |
//! | [`events`] | Injection records and observers |

pub mod events;
pub mod injectable;
pub mod injector;
pub mod registry;

mod macros;

pub use autowire_domain::{Abstraction, AbstractionToken};
pub use events::{
    InjectionObserver, InjectionRecord, ObserverChain, RecordingObserver, TracingObserver,
};
pub use injectable::{
    FieldDescriptor, Injectable, InjectionPoint, InjectionPoints, Mutability, Storage,
};
pub use injector::Injector;
pub use registry::{
    IMPLEMENTATIONS, ImplementationEntry, ImplementationRegistry, LinkedImplementation,
    list_linked_implementations,
};

// Re-exported so implementations can submit to `IMPLEMENTATIONS` without a direct dependency
pub use linkme;
