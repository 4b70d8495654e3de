//! Implementation Registry
//!
//! Maps implementation identifiers to zero-argument constructors and records,
//! for every implementation, which abstractions it can be assigned to.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use autowire_domain::{Abstraction, AbstractionToken, BoxError};
use tracing::{debug, warn};

type Factory = Box<dyn Fn() -> Result<Box<dyn Any>, BoxError> + Send + Sync>;
type Upcast = Box<dyn Fn(Box<dyn Any>) -> Option<Box<dyn Any>> + Send + Sync>;

/// Conversion of a concrete instance into one abstraction it provides
pub struct Binding {
    abstraction: AbstractionToken,
    upcast: Upcast,
}

impl Binding {
    /// The abstraction this binding produces
    pub fn abstraction(&self) -> AbstractionToken {
        self.abstraction
    }

    /// Convert an instance created by the owning entry into a boxed `Box<A>`
    ///
    /// Returns `None` when the instance is not of the entry's concrete type.
    pub fn upcast(&self, instance: Box<dyn Any>) -> Option<Box<dyn Any>> {
        (self.upcast)(instance)
    }
}

/// Registry entry for one concrete implementation
pub struct ImplementationEntry {
    name: String,
    description: Option<String>,
    type_name: &'static str,
    factory: Factory,
    bindings: HashMap<TypeId, Binding>,
}

impl ImplementationEntry {
    /// Implementation identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Rust type name of the concrete type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether instances can be assigned to fields of the given abstraction
    pub fn provides(&self, abstraction: &AbstractionToken) -> bool {
        self.bindings.contains_key(&abstraction.type_id())
    }

    /// Binding for the abstraction with the given type id
    pub fn binding_for(&self, type_id: TypeId) -> Option<&Binding> {
        self.bindings.get(&type_id)
    }

    /// Identifiers of every provided abstraction, sorted
    pub fn abstractions(&self) -> Vec<&'static str> {
        let mut abstractions: Vec<&'static str> = self
            .bindings
            .values()
            .map(|b| b.abstraction.identifier())
            .collect();
        abstractions.sort_unstable();
        abstractions
    }

    /// Construct a fresh instance of the concrete type
    pub fn instantiate(&self) -> Result<Box<dyn Any>, BoxError> {
        (self.factory)()
    }
}

impl fmt::Debug for ImplementationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplementationEntry")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("abstractions", &self.abstractions())
            .finish_non_exhaustive()
    }
}

/// Builder returned by [`ImplementationRegistry::register`]
///
/// ```
/// use autowire_application::{Abstraction, ImplementationRegistry};
///
/// trait Shape {
///     fn sides(&self) -> u32;
/// }
/// impl Abstraction for dyn Shape {
///     const IDENTIFIER: &'static str = "Shape";
/// }
///
/// #[derive(Default)]
/// struct Square;
/// impl Shape for Square {
///     fn sides(&self) -> u32 {
///         4
///     }
/// }
///
/// let mut registry = ImplementationRegistry::new();
/// registry
///     .register::<Square>("Square")
///     .provides::<dyn Shape>(|square| Box::new(square));
/// assert!(registry.contains("Square"));
/// ```
pub struct ImplementationBuilder<'r, C> {
    entry: &'r mut ImplementationEntry,
    _concrete: PhantomData<fn() -> C>,
}

impl<C: 'static> ImplementationBuilder<'_, C> {
    /// Declare that `C` can be assigned to fields of abstraction `A`
    pub fn provides<A: ?Sized + Abstraction>(self, upcast: fn(C) -> Box<A>) -> Self {
        let abstraction = AbstractionToken::of::<A>();
        let binding = Binding {
            abstraction,
            upcast: Box::new(move |instance: Box<dyn Any>| {
                let concrete = instance.downcast::<C>().ok()?;
                Some(Box::new(upcast(*concrete)) as Box<dyn Any>)
            }),
        };
        self.entry.bindings.insert(abstraction.type_id(), binding);
        self
    }

    /// Attach a description shown in listings
    pub fn describe<S: Into<String>>(self, description: S) -> Self {
        self.entry.description = Some(description.into());
        self
    }
}

/// Registry of constructible implementations keyed by identifier
#[derive(Default)]
pub struct ImplementationRegistry {
    entries: HashMap<String, ImplementationEntry>,
}

impl ImplementationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `C` under `name`, constructed through `Default`
    pub fn register<C: Default + 'static>(
        &mut self,
        name: impl Into<String>,
    ) -> ImplementationBuilder<'_, C> {
        self.register_with(name, || Ok::<C, Infallible>(C::default()))
    }

    /// Register `C` under `name` with a fallible zero-argument constructor
    ///
    /// A constructor error surfaces as an instantiation failure at injection time.
    pub fn register_with<C, F, E>(
        &mut self,
        name: impl Into<String>,
        factory: F,
    ) -> ImplementationBuilder<'_, C>
    where
        C: 'static,
        F: Fn() -> Result<C, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        let name = name.into();
        let entry = ImplementationEntry {
            name: name.clone(),
            description: None,
            type_name: type_name::<C>(),
            factory: Box::new(move || {
                factory()
                    .map(|instance| Box::new(instance) as Box<dyn Any>)
                    .map_err(Into::into)
            }),
            bindings: HashMap::new(),
        };

        let slot = match self.entries.entry(name) {
            Entry::Occupied(mut occupied) => {
                warn!(
                    implementation = occupied.key().as_str(),
                    "Replacing registered implementation"
                );
                occupied.insert(entry);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => {
                debug!(implementation = vacant.key().as_str(), "Registered implementation");
                vacant.insert(entry)
            }
        };

        ImplementationBuilder {
            entry: slot,
            _concrete: PhantomData,
        }
    }

    /// Look up an implementation by identifier
    pub fn get(&self, name: &str) -> Option<&ImplementationEntry> {
        self.entries.get(name)
    }

    /// Whether an implementation is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered identifiers, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered implementations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn describe_if_missing(&mut self, name: &str, description: &str) {
        if let Some(entry) = self.entries.get_mut(name)
            && entry.description.is_none()
            && !description.is_empty()
        {
            entry.description = Some(description.to_string());
        }
    }
}

impl fmt::Debug for ImplementationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplementationRegistry")
            .field("implementations", &self.names())
            .finish()
    }
}
