//! Append-only batch of diagnostics for one compilation pass.
//!
//! The collector only accumulates. Turning a batch into control flow is
//! left to the caller: [`DiagnosticCollector::throw_if_errors`] surfaces
//! the first fatal diagnostic and nothing else, which suits a
//! single-error-at-a-time front-end. Stages that want to print every
//! error read [`DiagnosticCollector::all`] instead.

use crate::Diagnostic;

#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(
            severity = %diagnostic.severity(),
            text = diagnostic.message(),
            "diagnostic reported"
        );
        self.diagnostics.push(diagnostic);
    }

    /// Whether any collected diagnostic is fatal.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_fatal)
    }

    /// All diagnostics in the order they were reported.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_fatal()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == crate::Severity::Warning)
            .count()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Return the first fatal diagnostic as an error.
    ///
    /// Only that one diagnostic is surfaced; later fatal diagnostics stay in
    /// the collector and are not aggregated.
    pub fn throw_if_errors(&self) -> Result<(), Diagnostic> {
        match self.diagnostics.iter().find(|d| d.is_fatal()) {
            Some(first) => Err(first.clone()),
            None => Ok(()),
        }
    }
}
