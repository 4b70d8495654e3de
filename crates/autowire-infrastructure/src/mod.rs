//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Default mapping file creation |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Error context helpers |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use error_ext::ErrorContext;
