//! Injectable Field Registry
//!
//! Target types declare their injectable fields explicitly instead of being
//! scanned at runtime. Each declaration names the field, the abstraction it is
//! typed against and how the injector may write to it.

use std::any::{Any, type_name};

use autowire_domain::{Abstraction, AbstractionToken};

/// Whether a field can be reassigned after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// Reassignable; the injector writes through the declared setter
    Mutable,
    /// Fixed after construction; injecting it is a configuration error
    ReadOnly,
}

/// Where the field's value lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Storage {
    /// Per-instance state
    Instance,
    /// Type-level state shared by all instances; never injected
    Shared,
}

/// Description of one injectable field on a target type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    abstraction: AbstractionToken,
    mutability: Mutability,
    storage: Storage,
}

impl FieldDescriptor {
    /// Field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared abstraction
    pub fn abstraction(&self) -> AbstractionToken {
        self.abstraction
    }

    /// Mutability class
    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// Storage class
    pub fn storage(&self) -> Storage {
        self.storage
    }
}

type Setter<T> = Box<dyn Fn(&mut T, Box<dyn Any>) -> bool>;

/// An injectable field together with its write access
pub struct InjectionPoint<T> {
    descriptor: FieldDescriptor,
    setter: Option<Setter<T>>,
}

impl<T> InjectionPoint<T> {
    /// Field descriptor
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// Write a boxed `Box<A>` into the field
    ///
    /// Returns `false` if the field has no setter or the value has the wrong type.
    pub fn assign(&self, target: &mut T, value: Box<dyn Any>) -> bool {
        self.setter
            .as_ref()
            .is_some_and(|setter| setter(target, value))
    }
}

/// Ordered set of injection points declared by a target type
///
/// ```
/// use autowire_application::{Abstraction, Injectable, InjectionPoints};
///
/// trait Clock {}
/// impl Abstraction for dyn Clock {
///     const IDENTIFIER: &'static str = "Clock";
/// }
///
/// #[derive(Default)]
/// struct Scheduler {
///     clock: Option<Box<dyn Clock>>,
/// }
///
/// impl Injectable for Scheduler {
///     fn injection_points() -> InjectionPoints<Self> {
///         InjectionPoints::<Self>::new()
///             .field::<dyn Clock>("clock", |s, clock| s.clock = Some(clock))
///     }
/// }
///
/// assert_eq!(Scheduler::injection_points().len(), 1);
/// ```
pub struct InjectionPoints<T> {
    points: Vec<InjectionPoint<T>>,
}

impl<T: 'static> InjectionPoints<T> {
    /// Start an empty declaration
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Declare a reassignable instance field typed against abstraction `A`
    pub fn field<A: ?Sized + Abstraction>(
        mut self,
        name: &'static str,
        setter: fn(&mut T, Box<A>),
    ) -> Self {
        let setter: Setter<T> = Box::new(move |target: &mut T, value: Box<dyn Any>| {
            match value.downcast::<Box<A>>() {
                Ok(value) => {
                    setter(target, *value);
                    true
                }
                Err(_) => false,
            }
        });
        self.points.push(InjectionPoint {
            descriptor: Self::descriptor::<A>(name, Mutability::Mutable, Storage::Instance),
            setter: Some(setter),
        });
        self
    }

    /// Declare a field that cannot be reassigned after construction
    pub fn read_only<A: ?Sized + Abstraction>(mut self, name: &'static str) -> Self {
        self.points.push(InjectionPoint {
            descriptor: Self::descriptor::<A>(name, Mutability::ReadOnly, Storage::Instance),
            setter: None,
        });
        self
    }

    /// Declare a type-level field; the injector skips it
    pub fn shared<A: ?Sized + Abstraction>(mut self, name: &'static str) -> Self {
        self.points.push(InjectionPoint {
            descriptor: Self::descriptor::<A>(name, Mutability::Mutable, Storage::Shared),
            setter: None,
        });
        self
    }

    fn descriptor<A: ?Sized + Abstraction>(
        name: &'static str,
        mutability: Mutability,
        storage: Storage,
    ) -> FieldDescriptor {
        FieldDescriptor {
            name,
            abstraction: AbstractionToken::of::<A>(),
            mutability,
            storage,
        }
    }
}

impl<T> InjectionPoints<T> {
    /// Injection points in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, InjectionPoint<T>> {
        self.points.iter()
    }

    /// Descriptors in declaration order
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.points.iter().map(|p| p.descriptor).collect()
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no fields are declared
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<T: 'static> Default for InjectionPoints<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a InjectionPoints<T> {
    type Item = &'a InjectionPoint<T>;
    type IntoIter = std::slice::Iter<'a, InjectionPoint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A type whose fields can be filled by the injector
///
/// Declarations are rebuilt on every injection; fields not declared are never
/// touched.
pub trait Injectable: Sized + 'static {
    /// Injectable fields in declaration order
    fn injection_points() -> InjectionPoints<Self>;
}

/// Type name without its module path, e.g. `SomeBean` for `app::beans::SomeBean`
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
