//! Injection events
//!
//! Each successful field injection produces an [`InjectionRecord`] that is
//! handed to an [`InjectionObserver`]. Observers only see records; they cannot
//! influence the injection.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::info;

/// Diagnostic record of one field injection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectionRecord {
    /// Target type name
    pub target: String,
    /// Field name
    pub field: String,
    /// Declared abstraction identifier
    pub abstraction: String,
    /// Implementation identifier from the mapping
    pub implementation: String,
    /// Rust type name of the injected instance
    pub concrete_type: String,
}

/// Receives injection records
pub trait InjectionObserver: Send + Sync {
    /// Called after a field has been assigned
    fn on_injected(&self, record: &InjectionRecord);
}

/// Emits every record as a structured `tracing` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl InjectionObserver for TracingObserver {
    fn on_injected(&self, record: &InjectionRecord) {
        info!(
            target_type = %record.target,
            field = %record.field,
            abstraction = %record.abstraction,
            implementation = %record.implementation,
            "Injected {}.{} : {} -> {}",
            record.target,
            record.field,
            record.abstraction,
            record.concrete_type
        );
    }
}

/// Keeps every record in memory
#[derive(Debug, Default)]
pub struct RecordingObserver {
    records: Mutex<Vec<InjectionRecord>>,
}

impl RecordingObserver {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records seen so far
    pub fn records(&self) -> Vec<InjectionRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return the records seen so far
    pub fn take(&self) -> Vec<InjectionRecord> {
        std::mem::take(
            &mut *self
                .records
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl InjectionObserver for RecordingObserver {
    fn on_injected(&self, record: &InjectionRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}

/// Forwards each record to several observers in order
#[derive(Default)]
pub struct ObserverChain {
    observers: Vec<Arc<dyn InjectionObserver>>,
}

impl ObserverChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer
    pub fn with(mut self, observer: Arc<dyn InjectionObserver>) -> Self {
        self.observers.push(observer);
        self
    }
}

impl InjectionObserver for ObserverChain {
    fn on_injected(&self, record: &InjectionRecord) {
        for observer in &self.observers {
            observer.on_injected(record);
        }
    }
}
