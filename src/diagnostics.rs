//! Reporting hooks for translation calls.
//!
//! The parser never logs on its own. Callers that want the filter and the
//! resulting document recorded pass a [`Diagnostics`] sink to
//! [`parse_with`](crate::parse_with); [`NoopDiagnostics`] is used otherwise.

use crate::parser::ParseError;

pub trait Diagnostics {
    /// Called before tokenizing.
    fn parsing(&self, filter: &str);

    /// Called with the serialized document on success.
    fn parsed(&self, output: &str);

    /// Called when the parse is aborted.
    fn failed(&self, filter: &str, error: &ParseError);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn parsing(&self, _filter: &str) {}

    fn parsed(&self, _output: &str) {}

    fn failed(&self, _filter: &str, _error: &ParseError) {}
}

/// Emits `tracing` events under the `esfilter` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn parsing(&self, filter: &str) {
        tracing::info!(target: "esfilter", filter, "Parsing filter");
    }

    fn parsed(&self, output: &str) {
        tracing::info!(target: "esfilter", output, "Parsed query DSL");
    }

    fn failed(&self, filter: &str, error: &ParseError) {
        tracing::warn!(target: "esfilter", filter, %error, "Rejected filter");
    }
}
