//! # Domain Layer
//!
//! Core types shared by every autowire crate: the error taxonomy, the
//! abstraction-to-implementation [`Mapping`] and the [`Abstraction`] identity
//! trait. No wiring logic lives here.

pub mod abstraction;
pub mod constants;
pub mod error;
pub mod mapping;

pub use abstraction::{Abstraction, AbstractionToken};
pub use error::{BoxError, Error, Result};
pub use mapping::Mapping;
