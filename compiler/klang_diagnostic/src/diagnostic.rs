use std::fmt;

use crate::Span;

/// Severity level for diagnostics.
///
/// `SyntaxError`, `SemanticError` and `TypeError` are reserved for later
/// compiler stages; the lexer only produces `LexicalError`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    LexicalError,
    SyntaxError,
    SemanticError,
    TypeError,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Whether a diagnostic of this severity stops compilation.
    #[inline]
    pub fn is_fatal(self) -> bool {
        !matches!(self, Severity::Warning | Severity::Info)
    }

    /// Header label used by the terminal renderer.
    pub fn label(self) -> &'static str {
        match self {
            Severity::LexicalError => "LEXICAL",
            Severity::SyntaxError => "SYNTAX",
            Severity::SemanticError | Severity::TypeError | Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::LexicalError => write!(f, "lexical error"),
            Severity::SyntaxError => write!(f, "syntax error"),
            Severity::SemanticError => write!(f, "semantic error"),
            Severity::TypeError => write!(f, "type error"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Error when a diagnostic or note would violate its invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticError {
    #[error("diagnostic message must not be empty")]
    EmptyMessage,
    #[error("note message must not be empty")]
    EmptyNoteMessage,
}

/// A remediation hint attached to a diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Note {
    message: String,
    span: Option<Span>,
}

impl Note {
    /// Create a note without a location.
    ///
    /// # Panics
    /// Panics if `message` is empty.
    /// Use [`Note::try_new`] for messages that are not compiler literals.
    pub fn new(message: impl Into<String>) -> Self {
        Self::try_new(message).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Create a note, rejecting an empty message.
    pub fn try_new(message: impl Into<String>) -> Result<Self, DiagnosticError> {
        let message = message.into();
        if message.is_empty() {
            return Err(DiagnosticError::EmptyNoteMessage);
        }
        Ok(Note {
            message,
            span: None,
        })
    }

    /// Attach a location to this note.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }
}

/// An immutable, fully built diagnostic.
///
/// Built through [`Diagnostic::builder`]. Fields are private: once built,
/// a diagnostic can be read but never changed.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    primary: Option<Span>,
    secondary: Vec<Span>,
    notes: Vec<Note>,
}

impl Diagnostic {
    /// Start building a diagnostic.
    pub fn builder(severity: Severity, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder {
            severity,
            message: message.into(),
            primary: None,
            secondary: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Start building a lexical error.
    pub fn lexical(message: impl Into<String>) -> DiagnosticBuilder {
        Self::builder(Severity::LexicalError, message)
    }

    /// Start building a generic error.
    pub fn error(message: impl Into<String>) -> DiagnosticBuilder {
        Self::builder(Severity::Error, message)
    }

    /// Start building a warning.
    pub fn warning(message: impl Into<String>) -> DiagnosticBuilder {
        Self::builder(Severity::Warning, message)
    }

    /// Start building an informational diagnostic.
    pub fn info(message: impl Into<String>) -> DiagnosticBuilder {
        Self::builder(Severity::Info, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn primary_span(&self) -> Option<&Span> {
        self.primary.as_ref()
    }

    pub fn has_primary_span(&self) -> bool {
        self.primary.is_some()
    }

    /// Cross-reference locations, in insertion order.
    pub fn secondary_spans(&self) -> &[Span] {
        &self.secondary
    }

    /// Remediation notes, in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn is_fatal(&self) -> bool {
        self.severity.is_fatal()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.label(), self.message)?;
        if let Some(span) = &self.primary {
            write!(f, " at {span}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

/// Accumulating builder for [`Diagnostic`].
#[derive(Clone, Debug)]
#[must_use = "call `build()` to finish the diagnostic"]
pub struct DiagnosticBuilder {
    severity: Severity,
    message: String,
    primary: Option<Span>,
    secondary: Vec<Span>,
    notes: Vec<Note>,
}

impl DiagnosticBuilder {
    /// Set the primary location. A later call replaces an earlier one.
    pub fn primary(mut self, span: Span) -> Self {
        self.primary = Some(span);
        self
    }

    /// Append a cross-reference location.
    pub fn secondary(mut self, span: Span) -> Self {
        self.secondary.push(span);
        self
    }

    /// Append a note.
    pub fn note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Append a note without a location.
    pub fn note_message(self, message: impl Into<String>) -> Self {
        self.note(Note::new(message))
    }

    /// Finish the diagnostic, rejecting an empty message.
    ///
    /// Notes need no check here: [`Note`] cannot hold an empty message.
    pub fn try_build(self) -> Result<Diagnostic, DiagnosticError> {
        if self.message.is_empty() {
            return Err(DiagnosticError::EmptyMessage);
        }
        Ok(Diagnostic {
            severity: self.severity,
            message: self.message,
            primary: self.primary,
            secondary: self.secondary,
            notes: self.notes,
        })
    }

    /// Finish the diagnostic.
    ///
    /// # Panics
    /// Panics if the message is empty.
    /// Use [`try_build`](Self::try_build) for messages that are not
    /// compiler literals.
    pub fn build(self) -> Diagnostic {
        self.try_build().unwrap_or_else(|e| panic!("{}", e))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
