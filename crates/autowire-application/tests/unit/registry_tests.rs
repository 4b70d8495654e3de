//! Tests for the implementation registry
//!
//! Entries submitted to `IMPLEMENTATIONS` below are linked into this test binary
//! and collected by `ImplementationRegistry::linked()`.

use std::any::TypeId;
use std::sync::Arc;

use autowire_application::{
    AbstractionToken, IMPLEMENTATIONS, ImplementationRegistry, Injector, LinkedImplementation,
    list_linked_implementations,
};

use crate::fixtures::{Canvas, Circle, ConsoleLogger, Logger, Shape, Square, registry};

#[linkme::distributed_slice(IMPLEMENTATIONS)]
static LINKED_SQUARE: LinkedImplementation = LinkedImplementation {
    name: "LinkedSquare",
    description: "Square registered at link time",
    register: |registry| {
        registry
            .register::<Square>("LinkedSquare")
            .provides::<dyn Shape>(|s| Box::new(s));
    },
};

#[linkme::distributed_slice(IMPLEMENTATIONS)]
static LINKED_LOGGER: LinkedImplementation = LinkedImplementation {
    name: "LinkedLogger",
    description: "Console logger registered at link time",
    register: |registry| {
        registry
            .register::<ConsoleLogger>("LinkedLogger")
            .provides::<dyn Logger>(|l| Box::new(l))
            .describe("Explicit description");
    },
};

#[test]
fn test_linked_registry_collects_entries() {
    let registry = ImplementationRegistry::linked();

    assert!(registry.contains("LinkedSquare"));
    assert!(registry.contains("LinkedLogger"));
    assert_eq!(
        registry.get("LinkedSquare").unwrap().description(),
        Some("Square registered at link time")
    );
    assert_eq!(
        registry.get("LinkedLogger").unwrap().description(),
        Some("Explicit description")
    );
}

#[test]
fn test_list_linked_implementations_sorted() {
    let implementations = list_linked_implementations();
    let names: Vec<&str> = implementations.iter().map(|(name, _)| *name).collect();

    assert!(names.contains(&"LinkedLogger"));
    assert!(names.contains(&"LinkedSquare"));
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_linked_entries_inject() {
    let injector = Injector::new(
        [("Shape", "LinkedSquare")].into_iter().collect(),
        Arc::new(ImplementationRegistry::linked()),
    );
    let mut canvas = Canvas::default();

    injector.inject(&mut canvas).unwrap();

    assert_eq!(canvas.shape.unwrap().name(), "square");
}

#[test]
fn test_explicit_registrations_extend_linked() {
    let mut registry = ImplementationRegistry::new();
    registry
        .register::<Circle>("Circle")
        .provides::<dyn Shape>(|c| Box::new(c));
    registry.register_linked();

    assert!(registry.contains("Circle"));
    assert!(registry.contains("LinkedSquare"));
}

#[test]
fn test_entry_reports_provided_abstractions() {
    let registry = registry();
    let circle = registry.get("Circle").unwrap();

    assert!(circle.provides(&AbstractionToken::of::<dyn Shape>()));
    assert!(!circle.provides(&AbstractionToken::of::<dyn Logger>()));
    assert_eq!(circle.abstractions(), vec!["Shape"]);
    assert!(circle.binding_for(TypeId::of::<dyn Logger>()).is_none());
    assert!(circle.type_name().ends_with("Circle"));
}

#[test]
fn test_names_sorted() {
    let registry = registry();

    assert_eq!(
        registry.names(),
        vec!["BrokenShape", "Circle", "ConsoleLogger", "Square"]
    );
    assert_eq!(registry.len(), 4);
    assert!(!registry.is_empty());
}

#[test]
fn test_instantiation_produces_distinct_instances() {
    let registry = registry();
    let entry = registry.get("Circle").unwrap();

    let first = entry.instantiate().unwrap();
    let second = entry.instantiate().unwrap();

    assert!(first.is::<Circle>());
    assert!(second.is::<Circle>());
}
