//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as the cause of wrapped failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for autowire
///
/// Every injection failure is fatal to the single `inject` call that raised it.
/// Each variant carries enough context to identify the offending field and mapping.
#[derive(Error, Debug)]
pub enum Error {
    /// Mapping source could not be read or parsed
    #[error("Cannot load mapping {source_name}: {message}")]
    ConfigLoad {
        /// Path or label of the mapping source
        source_name: String,
        /// Description of the failure
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<BoxError>,
    },

    /// An injectable field was declared read-only
    #[error("Cannot inject into read-only field: {target}.{field}")]
    ImmutableField {
        /// Target type name
        target: String,
        /// Field name
        field: String,
    },

    /// No mapping entry exists for the field's abstraction
    #[error("No implementation mapping for: {abstraction} (field: {target}.{field})")]
    UnresolvedDependency {
        /// Abstraction identifier that was looked up
        abstraction: String,
        /// Target type name
        target: String,
        /// Field name
        field: String,
    },

    /// The mapped implementation is not registered
    #[error(
        "Implementation '{implementation}' mapped for {abstraction} (field: {field}) is not registered. Available implementations: {available:?}"
    )]
    ImplementationNotFound {
        /// Implementation identifier from the mapping
        implementation: String,
        /// Abstraction identifier of the field
        abstraction: String,
        /// Field name
        field: String,
        /// Registered implementation identifiers
        available: Vec<String>,
    },

    /// The mapped implementation does not provide the field's abstraction
    #[error("Implementation '{implementation}' is not assignable to {abstraction} (field: {field})")]
    IncompatibleType {
        /// Implementation identifier from the mapping
        implementation: String,
        /// Abstraction identifier of the field
        abstraction: String,
        /// Field name
        field: String,
    },

    /// The mapped implementation could not be constructed
    #[error("Failed to instantiate '{implementation}' for field {field}: {source}")]
    Instantiation {
        /// Implementation identifier from the mapping
        implementation: String,
        /// Field name
        field: String,
        /// Constructor failure
        #[source]
        source: BoxError,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Application configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Internal invariant violation
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Mapping error creation methods
impl Error {
    /// Create a mapping load error
    pub fn config_load<N: Into<String>, S: Into<String>>(source_name: N, message: S) -> Self {
        Self::ConfigLoad {
            source_name: source_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a mapping load error with source
    pub fn config_load_with_source<
        N: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        source_name: N,
        message: S,
        source: E,
    ) -> Self {
        Self::ConfigLoad {
            source_name: source_name.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Injection error creation methods
impl Error {
    /// Create a read-only field error
    pub fn immutable_field<T: Into<String>, F: Into<String>>(target: T, field: F) -> Self {
        Self::ImmutableField {
            target: target.into(),
            field: field.into(),
        }
    }

    /// Create an unresolved dependency error
    pub fn unresolved_dependency<A: Into<String>, T: Into<String>, F: Into<String>>(
        abstraction: A,
        target: T,
        field: F,
    ) -> Self {
        Self::UnresolvedDependency {
            abstraction: abstraction.into(),
            target: target.into(),
            field: field.into(),
        }
    }

    /// Create an implementation not found error
    pub fn implementation_not_found<I: Into<String>, A: Into<String>, F: Into<String>>(
        implementation: I,
        abstraction: A,
        field: F,
        available: Vec<String>,
    ) -> Self {
        Self::ImplementationNotFound {
            implementation: implementation.into(),
            abstraction: abstraction.into(),
            field: field.into(),
            available,
        }
    }

    /// Create an incompatible type error
    pub fn incompatible_type<I: Into<String>, A: Into<String>, F: Into<String>>(
        implementation: I,
        abstraction: A,
        field: F,
    ) -> Self {
        Self::IncompatibleType {
            implementation: implementation.into(),
            abstraction: abstraction.into(),
            field: field.into(),
        }
    }

    /// Create an instantiation error wrapping the constructor failure
    pub fn instantiation<I: Into<String>, F: Into<String>>(
        implementation: I,
        field: F,
        source: BoxError,
    ) -> Self {
        Self::Instantiation {
            implementation: implementation.into(),
            field: field.into(),
            source,
        }
    }
}

// Ambient error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether this error was raised while resolving a field rather than loading configuration
    pub fn is_injection_error(&self) -> bool {
        matches!(
            self,
            Self::ImmutableField { .. }
                | Self::UnresolvedDependency { .. }
                | Self::ImplementationNotFound { .. }
                | Self::IncompatibleType { .. }
                | Self::Instantiation { .. }
        )
    }

    /// Field name the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ImmutableField { field, .. }
            | Self::UnresolvedDependency { field, .. }
            | Self::ImplementationNotFound { field, .. }
            | Self::IncompatibleType { field, .. }
            | Self::Instantiation { field, .. } => Some(field),
            _ => None,
        }
    }
}
