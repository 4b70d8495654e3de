//! Declaration macros

/// Declare abstraction identifiers for trait object types
///
/// ```
/// use autowire_application::{Abstraction, abstraction};
///
/// trait Shape {}
/// trait Logger {}
///
/// abstraction! {
///     dyn Shape => "Shape",
///     dyn Logger => "Logger",
/// }
///
/// assert_eq!(<dyn Logger as Abstraction>::IDENTIFIER, "Logger");
/// ```
#[macro_export]
macro_rules! abstraction {
    ($($abstraction:ty => $identifier:expr),+ $(,)?) => {
        $(
            impl $crate::Abstraction for $abstraction {
                const IDENTIFIER: &'static str = $identifier;
            }
        )+
    };
}

/// Declare the injectable fields of a struct
///
/// Every listed field must have the type `Option<Box<dyn Trait>>`. Read-only
/// and shared fields are declared through [`InjectionPoints`](crate::InjectionPoints)
/// directly.
///
/// ```
/// use autowire_application::{Injectable, abstraction, injectable};
///
/// trait Clock {}
/// abstraction!(dyn Clock => "Clock");
///
/// #[derive(Default)]
/// struct Scheduler {
///     clock: Option<Box<dyn Clock>>,
///     ticks: u64,
/// }
///
/// injectable!(Scheduler {
///     clock: dyn Clock,
/// });
///
/// assert_eq!(Scheduler::injection_points().len(), 1);
/// ```
///
/// Fields are visited in the order they are listed:
///
/// ```
/// use autowire_application::{FieldDescriptor, Injectable, abstraction, injectable};
///
/// trait Source {}
/// trait Sink {}
/// abstraction!(dyn Source => "Source", dyn Sink => "Sink");
///
/// #[derive(Default)]
/// struct Pipe {
///     input: Option<Box<dyn Source>>,
///     output: Option<Box<dyn Sink>>,
/// }
///
/// injectable!(Pipe {
///     input: dyn Source,
///     output: dyn Sink,
/// });
///
/// let descriptors = Pipe::injection_points().descriptors();
/// let names: Vec<&str> = descriptors.iter().map(FieldDescriptor::name).collect();
/// assert_eq!(names, ["input", "output"]);
/// assert_eq!(descriptors[1].abstraction().identifier(), "Sink");
/// ```
#[macro_export]
macro_rules! injectable {
    ($target:ty { $($field:ident : $abstraction:ty),* $(,)? }) => {
        impl $crate::Injectable for $target {
            fn injection_points() -> $crate::InjectionPoints<Self> {
                $crate::InjectionPoints::<Self>::new()
                    $(.field::<$abstraction>(stringify!($field), |target, value| {
                        target.$field = ::std::option::Option::Some(value);
                    }))*
            }
        }
    };
}
