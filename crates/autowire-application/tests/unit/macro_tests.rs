//! Tests for the declaration macros

use std::sync::Arc;

use autowire_application::{
    Abstraction, ImplementationRegistry, Injectable, Injector, Mutability, abstraction,
    injectable,
};

trait Engine {
    fn start(&self) -> &'static str;
}

trait Radio {
    fn tune(&self) -> u32;
}

abstraction!(dyn Engine => "vehicle.Engine", dyn Radio => "vehicle.Radio");

#[derive(Default)]
struct Diesel;
impl Engine for Diesel {
    fn start(&self) -> &'static str {
        "rumble"
    }
}

#[derive(Default)]
struct FmRadio;
impl Radio for FmRadio {
    fn tune(&self) -> u32 {
        101
    }
}

#[derive(Default)]
struct Car {
    engine: Option<Box<dyn Engine>>,
    radio: Option<Box<dyn Radio>>,
    mileage: u32,
}

injectable!(Car {
    engine: dyn Engine,
    radio: dyn Radio,
});

#[test]
fn test_abstraction_macro_sets_identifiers() {
    assert_eq!(<dyn Engine as Abstraction>::IDENTIFIER, "vehicle.Engine");
    assert_eq!(<dyn Radio as Abstraction>::IDENTIFIER, "vehicle.Radio");
}

#[test]
fn test_injectable_macro_declares_mutable_fields() {
    let descriptors = Car::injection_points().descriptors();

    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].name(), "engine");
    assert_eq!(descriptors[1].abstraction().identifier(), "vehicle.Radio");
    assert!(
        descriptors
            .iter()
            .all(|d| d.mutability() == Mutability::Mutable)
    );
}

#[test]
fn test_macro_declared_target_injects() {
    let mut registry = ImplementationRegistry::new();
    registry
        .register::<Diesel>("Diesel")
        .provides::<dyn Engine>(|d| Box::new(d));
    registry
        .register::<FmRadio>("FmRadio")
        .provides::<dyn Radio>(|r| Box::new(r));
    let injector = Injector::new(
        [("vehicle.Engine", "Diesel"), ("vehicle.Radio", "FmRadio")]
            .into_iter()
            .collect(),
        Arc::new(registry),
    );
    let mut car = Car {
        mileage: 42,
        ..Car::default()
    };

    injector.inject(&mut car).unwrap();

    assert_eq!(car.engine.unwrap().start(), "rumble");
    assert_eq!(car.radio.unwrap().tune(), 101);
    assert_eq!(car.mileage, 42);
}
