//! Demo components
//!
//! Two abstractions, three implementations and a bean that delegates to both
//! of its injected fields. Implementations register at link time.

use autowire_application::registry::{IMPLEMENTATIONS, LinkedImplementation};
use autowire_application::{abstraction, injectable};
use autowire_domain::{Error, Result};

/// First demo abstraction
pub trait SomeInterface {
    fn do_something(&self) -> &'static str;
}

/// Second demo abstraction
pub trait SomeOtherInterface {
    fn do_some_other(&self) -> &'static str;
}

abstraction! {
    dyn SomeInterface => "SomeInterface",
    dyn SomeOtherInterface => "SomeOtherInterface",
}

#[derive(Debug, Default)]
pub struct SomeImpl;

impl SomeInterface for SomeImpl {
    fn do_something(&self) -> &'static str {
        "A"
    }
}

#[derive(Debug, Default)]
pub struct OtherImpl;

impl SomeInterface for OtherImpl {
    fn do_something(&self) -> &'static str {
        "B"
    }
}

#[derive(Debug, Default)]
pub struct SODoer;

impl SomeOtherInterface for SODoer {
    fn do_some_other(&self) -> &'static str {
        "C"
    }
}

#[linkme::distributed_slice(IMPLEMENTATIONS)]
static SOME_IMPL: LinkedImplementation = LinkedImplementation {
    name: "SomeImpl",
    description: "SomeInterface printing A",
    register: |registry| {
        registry
            .register::<SomeImpl>("SomeImpl")
            .provides::<dyn SomeInterface>(|i| Box::new(i));
    },
};

#[linkme::distributed_slice(IMPLEMENTATIONS)]
static OTHER_IMPL: LinkedImplementation = LinkedImplementation {
    name: "OtherImpl",
    description: "SomeInterface printing B",
    register: |registry| {
        registry
            .register::<OtherImpl>("OtherImpl")
            .provides::<dyn SomeInterface>(|i| Box::new(i));
    },
};

#[linkme::distributed_slice(IMPLEMENTATIONS)]
static SO_DOER: LinkedImplementation = LinkedImplementation {
    name: "SODoer",
    description: "SomeOtherInterface printing C",
    register: |registry| {
        registry
            .register::<SODoer>("SODoer")
            .provides::<dyn SomeOtherInterface>(|i| Box::new(i));
    },
};

/// Mapping written to a fresh mapping file
pub const DEFAULT_MAPPING: [(&str, &str); 2] = [
    ("SomeInterface", "SomeImpl"),
    ("SomeOtherInterface", "SODoer"),
];

/// Bean with two injectable dependencies
#[derive(Default)]
pub struct SomeBean {
    field1: Option<Box<dyn SomeInterface>>,
    field2: Option<Box<dyn SomeOtherInterface>>,
}

injectable!(SomeBean {
    field1: dyn SomeInterface,
    field2: dyn SomeOtherInterface,
});

impl SomeBean {
    /// Output of both dependencies, e.g. `AC`
    ///
    /// Fails if either field has not been injected.
    pub fn foo(&self) -> Result<String> {
        let first = self
            .field1
            .as_ref()
            .ok_or_else(|| Error::internal("SomeBean.field1 has not been injected"))?;
        let second = self
            .field2
            .as_ref()
            .ok_or_else(|| Error::internal("SomeBean.field2 has not been injected"))?;

        Ok(format!("{}{}", first.do_something(), second.do_some_other()))
    }
}
