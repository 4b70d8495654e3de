//! Link-time Implementation Registration
//!
//! Implementations register themselves via `linkme` distributed slices and are
//! collected into an [`ImplementationRegistry`] at startup.

use tracing::debug;

use super::implementation::ImplementationRegistry;

/// Registry entry submitted by an implementation at link time
///
/// ```ignore
/// use autowire::registry::{IMPLEMENTATIONS, LinkedImplementation};
///
/// #[linkme::distributed_slice(IMPLEMENTATIONS)]
/// static CIRCLE: LinkedImplementation = LinkedImplementation {
///     name: "Circle",
///     description: "Unit circle",
///     register: |registry| {
///         registry
///             .register::<Circle>("Circle")
///             .provides::<dyn Shape>(|c| Box::new(c));
///     },
/// };
/// ```
pub struct LinkedImplementation {
    /// Implementation identifier the entry registers
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Registration function
    pub register: fn(&mut ImplementationRegistry),
}

// Auto-collection via linkme distributed slices - implementations submit entries at link time
#[linkme::distributed_slice]
pub static IMPLEMENTATIONS: [LinkedImplementation] = [..];

impl ImplementationRegistry {
    /// Build a registry from every linked implementation
    pub fn linked() -> Self {
        let mut registry = Self::new();
        registry.register_linked();
        registry
    }

    /// Add every linked implementation to this registry
    pub fn register_linked(&mut self) {
        for linked in IMPLEMENTATIONS {
            (linked.register)(self);
            self.describe_if_missing(linked.name, linked.description);
        }
        debug!(count = IMPLEMENTATIONS.len(), "Collected linked implementations");
    }
}

/// List all linked implementations
///
/// Returns (name, description) pairs sorted by name. Useful for CLI help.
pub fn list_linked_implementations() -> Vec<(&'static str, &'static str)> {
    let mut implementations: Vec<(&'static str, &'static str)> = IMPLEMENTATIONS
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    implementations.sort_unstable_by_key(|(name, _)| *name);
    implementations
}
