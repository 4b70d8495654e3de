//! Field Injector
//!
//! Fills the declared injectable fields of a target object with fresh instances
//! of the implementations selected by a [`Mapping`].
//!
//! ## Resolution
//!
//! ```text
//! InjectionPoint ("shape": dyn Shape)
//!        │  read-only? → ImmutableField      shared? → skip
//!        ▼
//! Mapping.get("Shape")            → UnresolvedDependency
//!        ▼
//! Registry.get("Circle")          → ImplementationNotFound
//!        ▼
//! entry.binding_for(dyn Shape)    → IncompatibleType
//!        ▼
//! entry.instantiate()             → Instantiation
//!        ▼
//! setter(target, Box<dyn Shape>)  → observer.on_injected(record)
//! ```
//!
//! Fields are processed in declaration order and the first failure aborts the
//! call. Fields injected before the failure keep their new values.

use std::fmt;
use std::sync::Arc;

use autowire_domain::{Error, Mapping, Result};
use tracing::{debug, trace};

use crate::events::{InjectionObserver, InjectionRecord, TracingObserver};
use crate::injectable::{Injectable, InjectionPoint, Mutability, Storage, short_type_name};
use crate::registry::ImplementationRegistry;

/// Resolves and assigns injectable fields
///
/// The mapping is fixed for the injector's lifetime. Nothing resolved is cached:
/// every call constructs new instances. An injector can be shared across threads
/// to inject distinct targets concurrently.
#[derive(Clone)]
pub struct Injector {
    mapping: Mapping,
    registry: Arc<ImplementationRegistry>,
    observer: Arc<dyn InjectionObserver>,
}

impl Injector {
    /// Create an injector bound to `mapping`, reporting to a [`TracingObserver`]
    pub fn new(mapping: Mapping, registry: Arc<ImplementationRegistry>) -> Self {
        Self {
            mapping,
            registry,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the observer that receives injection records
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn InjectionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Injector with a different mapping sharing this one's registry and observer
    #[must_use]
    pub fn with_mapping(&self, mapping: Mapping) -> Self {
        Self {
            mapping,
            registry: Arc::clone(&self.registry),
            observer: Arc::clone(&self.observer),
        }
    }

    /// The mapping this injector resolves against
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// The implementation registry
    pub fn registry(&self) -> &ImplementationRegistry {
        &self.registry
    }

    /// Inject every declared field of `target` and hand the same object back
    ///
    /// Calling this twice re-resolves and overwrites every field.
    pub fn inject<'t, T: Injectable>(&self, target: &'t mut T) -> Result<&'t mut T> {
        let target_name = short_type_name::<T>();
        let points = T::injection_points();

        if points.is_empty() {
            trace!(target_type = target_name, "No injectable fields");
            return Ok(target);
        }

        for point in &points {
            let descriptor = point.descriptor();

            if descriptor.mutability() == Mutability::ReadOnly {
                return Err(Error::immutable_field(target_name, descriptor.name()));
            }
            if descriptor.storage() == Storage::Shared {
                debug!(
                    target_type = target_name,
                    field = descriptor.name(),
                    "Skipping shared field"
                );
                continue;
            }

            let record = self.inject_point(target_name, point, target)?;
            self.observer.on_injected(&record);
        }

        Ok(target)
    }

    fn inject_point<T>(
        &self,
        target_name: &str,
        point: &InjectionPoint<T>,
        target: &mut T,
    ) -> Result<InjectionRecord> {
        let descriptor = point.descriptor();
        let field = descriptor.name();
        let abstraction = descriptor.abstraction();

        let implementation = self.mapping.get(abstraction.identifier()).ok_or_else(|| {
            Error::unresolved_dependency(abstraction.identifier(), target_name, field)
        })?;

        let entry = self.registry.get(implementation).ok_or_else(|| {
            Error::implementation_not_found(
                implementation,
                abstraction.identifier(),
                field,
                self.registry.names(),
            )
        })?;

        // Checked before construction so a mismatch never runs a constructor
        let binding = entry.binding_for(abstraction.type_id()).ok_or_else(|| {
            Error::incompatible_type(implementation, abstraction.identifier(), field)
        })?;

        let instance = entry
            .instantiate()
            .map_err(|source| Error::instantiation(implementation, field, source))?;

        let value = binding.upcast(instance).ok_or_else(|| {
            Error::internal(format!(
                "'{implementation}' produced an instance of the wrong type for {abstraction}"
            ))
        })?;

        if !point.assign(target, value) {
            return Err(Error::internal(format!(
                "Setter for {target_name}.{field} rejected a {abstraction} value"
            )));
        }

        Ok(InjectionRecord {
            target: target_name.to_string(),
            field: field.to_string(),
            abstraction: abstraction.identifier().to_string(),
            implementation: implementation.to_string(),
            concrete_type: entry.type_name().to_string(),
        })
    }
}

impl fmt::Debug for Injector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injector")
            .field("mapping", &self.mapping)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
