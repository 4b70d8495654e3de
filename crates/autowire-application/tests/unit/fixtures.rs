//! Shared abstractions and implementations for the application tests

use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use autowire_application::{
    ImplementationRegistry, Injectable, InjectionPoints, abstraction,
};

pub trait Shape {
    fn name(&self) -> &'static str;
}

pub trait Logger {
    fn log(&self, message: &str) -> String;
}

abstraction! {
    dyn Shape => "Shape",
    dyn Logger => "Logger",
}

#[derive(Default)]
pub struct Circle;

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }
}

#[derive(Default)]
pub struct Square;

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }
}

#[derive(Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) -> String {
        format!("[console] {message}")
    }
}

/// Target with one injectable field and one plain field
#[derive(Default)]
pub struct Canvas {
    pub shape: Option<Box<dyn Shape>>,
    pub title: Option<String>,
}

impl Injectable for Canvas {
    fn injection_points() -> InjectionPoints<Self> {
        InjectionPoints::<Self>::new()
            .field::<dyn Shape>("shape", |c, s| c.shape = Some(s))
    }
}

/// Target with two injectable fields in declaration order
#[derive(Default)]
pub struct Report {
    pub shape: Option<Box<dyn Shape>>,
    pub logger: Option<Box<dyn Logger>>,
}

impl Injectable for Report {
    fn injection_points() -> InjectionPoints<Self> {
        InjectionPoints::<Self>::new()
            .field::<dyn Shape>("shape", |r, s| r.shape = Some(s))
            .field::<dyn Logger>("logger", |r, l| r.logger = Some(l))
    }
}

/// Target without injectable fields
#[derive(Default, Debug, PartialEq)]
pub struct Plain {
    pub label: String,
}

impl Injectable for Plain {
    fn injection_points() -> InjectionPoints<Self> {
        InjectionPoints::<Self>::new()
    }
}

/// Target declaring a read-only field
#[derive(Default)]
pub struct Frozen {
    pub shape: Option<Box<dyn Shape>>,
}

impl Injectable for Frozen {
    fn injection_points() -> InjectionPoints<Self> {
        InjectionPoints::<Self>::new().read_only::<dyn Shape>("shape")
    }
}

/// Target declaring a shared field ahead of an instance field
#[derive(Default)]
pub struct Gallery {
    pub shape: Option<Box<dyn Shape>>,
}

impl Injectable for Gallery {
    fn injection_points() -> InjectionPoints<Self> {
        InjectionPoints::<Self>::new()
            .shared::<dyn Shape>("default_shape")
            .field::<dyn Shape>("shape", |g, s| g.shape = Some(s))
    }
}

/// Registry with `Circle`, `Square`, `ConsoleLogger` and a constructor that always fails
pub fn registry() -> ImplementationRegistry {
    let mut registry = ImplementationRegistry::new();
    registry
        .register::<Circle>("Circle")
        .provides::<dyn Shape>(|c| Box::new(c));
    registry
        .register::<Square>("Square")
        .provides::<dyn Shape>(|s| Box::new(s));
    registry
        .register::<ConsoleLogger>("ConsoleLogger")
        .provides::<dyn Logger>(|l| Box::new(l));
    registry
        .register_with("BrokenShape", || {
            Err::<Circle, _>(std::io::Error::other("no device"))
        })
        .provides::<dyn Shape>(|c| Box::new(c));
    registry
}

/// Register `Circle` under `name` with a constructor that counts its calls
pub fn register_counted(registry: &mut ImplementationRegistry, name: &str) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    registry
        .register_with(name, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Infallible>(Circle)
        })
        .provides::<dyn Shape>(|c| Box::new(c));
    calls
}
