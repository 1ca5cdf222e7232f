//! Testing utilities for permalink dispatch.
//!
//! This module provides builders and providers that make dispatch easy to
//! observe in tests.
//!
//! # Features
//!
//! - [`RecordingBuilder`]: records every build call it receives
//! - [`FailingBuilder`]: fails every build call
//! - [`CountingProvider`]: wraps a provider and records every lookup

use crate::registry::BuilderProvider;
use permalink_core::{BoxError, BuildError, MetaBuilder, Section, SeoMap, Value};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Builder
// ============================================================================

/// One recorded build call.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildCall {
    /// Section the builder was invoked for.
    pub section: Section,
    /// Data it was invoked with.
    pub data: Value,
}

/// A builder that records all calls it receives.
///
/// Works with any helper type. Clones share the same record.
///
/// # Example
///
/// ```rust,ignore
/// let meta = RecordingBuilder::new();
/// let registry = BuilderRegistry::builder()
///     .register(Section::Meta, meta.clone())
///     .build();
///
/// manager.run_builders(&route, &mut helper)?;
/// assert_eq!(meta.count(), 1);
/// ```
pub struct RecordingBuilder {
    calls: Arc<Mutex<Vec<BuildCall>>>,
    disabled: Arc<AtomicUsize>,
}

impl RecordingBuilder {
    /// Create a new recording builder.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            disabled: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<BuildCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the data of every recorded call.
    pub fn data(&self) -> Vec<Value> {
        self.calls().into_iter().map(|call| call.data).collect()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Get the number of times `disable` ran.
    pub fn disabled(&self) -> usize {
        self.disabled.load(Ordering::SeqCst)
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
        self.disabled.store(0, Ordering::SeqCst);
    }
}

impl Default for RecordingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingBuilder {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            disabled: self.disabled.clone(),
        }
    }
}

impl<H> MetaBuilder<H> for RecordingBuilder {
    fn translate(&self, _helper: &mut H, _data: &SeoMap) -> Result<(), BoxError> {
        Ok(())
    }

    fn disable(&self, _helper: &mut H) {
        self.disabled.fetch_add(1, Ordering::SeqCst);
    }

    fn build(&self, helper: &mut H, section: Section, data: &Value) -> Result<(), BuildError> {
        self.calls.lock().unwrap().push(BuildCall {
            section,
            data: data.clone(),
        });
        if data == &Value::Bool(false) {
            self.disable(helper);
        }
        Ok(())
    }
}

// ============================================================================
// Failing Builder
// ============================================================================

/// A builder whose `translate` always fails with the given message.
#[derive(Clone)]
pub struct FailingBuilder {
    message: String,
}

impl FailingBuilder {
    /// Create a failing builder.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<H> MetaBuilder<H> for FailingBuilder {
    fn translate(&self, _helper: &mut H, _data: &SeoMap) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }

    fn disable(&self, _helper: &mut H) {}
}

// ============================================================================
// Counting Provider
// ============================================================================

/// A provider wrapper that records which sections were looked up.
pub struct CountingProvider<P> {
    inner: P,
    lookups: Mutex<Vec<Section>>,
}

impl<P> CountingProvider<P> {
    /// Wrap `inner`.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Sections looked up so far, in order.
    pub fn lookups(&self) -> Vec<Section> {
        self.lookups.lock().unwrap().clone()
    }
}

impl<H, P: BuilderProvider<H>> BuilderProvider<H> for CountingProvider<P> {
    fn resolve(&self, section: Section) -> Option<&dyn MetaBuilder<H>> {
        self.lookups.lock().unwrap().push(section);
        self.inner.resolve(section)
    }
}
