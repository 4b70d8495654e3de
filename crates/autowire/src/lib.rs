//! # autowire
//!
//! Mapping-driven field injection for trait object dependencies.
//!
//! Structs declare which of their fields take an abstraction (a `dyn Trait`),
//! a plain-text mapping names the implementation for each abstraction, and
//! the [`Injector`] constructs and assigns the chosen implementations.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use autowire::{ImplementationRegistry, Injector, Mapping, abstraction, injectable};
//!
//! trait Greeter {
//!     fn greet(&self) -> String;
//! }
//! abstraction!(dyn Greeter => "Greeter");
//!
//! #[derive(Default)]
//! struct English;
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Service {
//!     greeter: Option<Box<dyn Greeter>>,
//! }
//! injectable!(Service { greeter: dyn Greeter });
//!
//! let mut registry = ImplementationRegistry::new();
//! registry
//!     .register::<English>("English")
//!     .provides::<dyn Greeter>(|e| Box::new(e));
//!
//! let mapping = Mapping::parse("Greeter=English").unwrap();
//! let injector = Injector::new(mapping, Arc::new(registry));
//!
//! let mut service = Service::default();
//! injector.inject(&mut service).unwrap();
//! assert_eq!(service.greeter.unwrap().greet(), "hello");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, the mapping store and abstraction identity
//! - `application` - Registries, injector and injection events
//! - `infrastructure` - Configuration, logging and mapping bootstrap
//! - `demo` - Sample components used by the `autowire` binary

/// Domain layer - errors, mapping and abstraction identity
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use autowire_domain::*;
}

/// Application layer - registries and the injector
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use autowire_application::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use autowire_infrastructure::*;
}

pub mod demo;
pub mod run;

// Re-export commonly used types at the crate root
pub use application::*;
pub use domain::{Error, Mapping, Result};

// Declaration macros
pub use autowire_application::{abstraction, injectable};

pub use run::{list_implementations, load_config, run_demo};
