//! Diagnostic reporting for non-fatal failures
//!
//! Engines never log from inside the math. Failed operations return a
//! `BettingError` and also hand it to the engine's sink, so a host can route
//! diagnostics wherever it wants.

use crate::error::{BettingError, ErrorCategory};
use parking_lot::Mutex;
use std::sync::Arc;

/// Receiver for failure diagnostics
pub trait DiagnosticSink: Send + Sync {
    /// `source` names the operation that failed, e.g. `"sports.settle"`
    fn report(&self, source: &'static str, error: &BettingError);
}

/// Default sink: one `tracing` warning per failure
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, source: &'static str, error: &BettingError) {
        tracing::warn!(
            source,
            category = error.category().as_str(),
            "{}",
            error
        );
    }
}

/// Discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _source: &'static str, _error: &BettingError) {}
}

/// A recorded failure
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub source: &'static str,
    pub category: ErrorCategory,
    pub error: BettingError,
}

/// Collects diagnostics in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Copy of everything recorded so far
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Drain everything recorded so far
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, source: &'static str, error: &BettingError) {
        self.entries.lock().push(Diagnostic {
            source,
            category: error.category(),
            error: error.clone(),
        });
    }
}

/// Shared handle engines hold on to
pub type SharedSink = Arc<dyn DiagnosticSink>;

pub(crate) fn default_sink() -> SharedSink {
    Arc::new(TracingSink)
}

/// Report an error result to `sink` and pass it through unchanged
pub(crate) fn reported<T>(
    sink: &dyn DiagnosticSink,
    source: &'static str,
    result: crate::error::Result<T>,
) -> crate::error::Result<T> {
    if let Err(ref err) = result {
        sink.report(source, err);
    }
    result
}
