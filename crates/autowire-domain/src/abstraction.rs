//! Abstraction identity
//!
//! An abstraction is a trait object type such as `dyn Shape`. Each one carries a
//! stable identifier used as the key in a [`Mapping`](crate::Mapping).

use std::any::TypeId;
use std::fmt;

/// A polymorphic type that fields can be declared against
///
/// Implemented for `dyn Trait` types, usually through the `abstraction!` macro:
///
/// ```
/// use autowire_domain::Abstraction;
///
/// trait Shape {
///     fn area(&self) -> f64;
/// }
///
/// impl Abstraction for dyn Shape {
///     const IDENTIFIER: &'static str = "Shape";
/// }
///
/// assert_eq!(<dyn Shape as Abstraction>::IDENTIFIER, "Shape");
/// ```
pub trait Abstraction: 'static {
    /// Identifier used as the mapping key; unique within the process
    const IDENTIFIER: &'static str;
}

/// Runtime token for an abstraction: its identifier plus its type id
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbstractionToken {
    identifier: &'static str,
    type_id: TypeId,
}

impl AbstractionToken {
    /// Token for the abstraction `A`
    pub fn of<A: ?Sized + Abstraction>() -> Self {
        Self {
            identifier: A::IDENTIFIER,
            type_id: TypeId::of::<A>(),
        }
    }

    /// The abstraction identifier
    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    /// Type id of the trait object type
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

impl fmt::Debug for AbstractionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AbstractionToken")
            .field(&self.identifier)
            .finish()
    }
}

impl fmt::Display for AbstractionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier)
    }
}
