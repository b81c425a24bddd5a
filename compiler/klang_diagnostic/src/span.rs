//! Source location spans.
//!
//! A [`Span`] is a line/column range inside a named (or anonymous) source.
//! All coordinates are 1-based. Construction validates the coordinates, so
//! every `Span` value that exists is well formed.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Error when span coordinates violate the 1-based range invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("start line must be >= 1")]
    StartLineZero,
    #[error("start column must be >= 1")]
    StartColumnZero,
    #[error("end column must be >= 1")]
    EndColumnZero,
    #[error("end line {end} is before start line {start}")]
    EndLineBeforeStart { start: u32, end: u32 },
    #[error("end column {end} is before start column {start} on the same line")]
    EndColumnBeforeStart { start: u32, end: u32 },
}

/// Source location range.
///
/// The file identifier is optional: lexing an in-memory snippet produces
/// anonymous spans, which render without a path and are never used to
/// re-open a file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    file: Option<Arc<str>>,
    start_line: u32,
    start_column: u32,
    end_line: u32,
    end_column: u32,
}

impl Span {
    /// Create a validated span.
    pub fn new(
        file: Option<Arc<str>>,
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Result<Self, SpanError> {
        if start_line < 1 {
            return Err(SpanError::StartLineZero);
        }
        if start_column < 1 {
            return Err(SpanError::StartColumnZero);
        }
        if end_column < 1 {
            return Err(SpanError::EndColumnZero);
        }
        if end_line < start_line {
            return Err(SpanError::EndLineBeforeStart {
                start: start_line,
                end: end_line,
            });
        }
        if end_line == start_line && end_column < start_column {
            return Err(SpanError::EndColumnBeforeStart {
                start: start_column,
                end: end_column,
            });
        }
        Ok(Span {
            file,
            start_line,
            start_column,
            end_line,
            end_column,
        })
    }

    /// One-character span at `line:column`.
    ///
    /// Infallible: `NonZeroU32` already rules out every invalid coordinate.
    pub fn point(file: Option<Arc<str>>, line: NonZeroU32, column: NonZeroU32) -> Self {
        Span {
            file,
            start_line: line.get(),
            start_column: column.get(),
            end_line: line.get(),
            end_column: column.get(),
        }
    }

    /// Span covering `start_column..=end_column` on a single line.
    ///
    /// An `end_column` before `start_column` is clamped to a point.
    pub fn on_line(
        file: Option<Arc<str>>,
        line: NonZeroU32,
        start_column: NonZeroU32,
        end_column: NonZeroU32,
    ) -> Self {
        Span {
            file,
            start_line: line.get(),
            start_column: start_column.get(),
            end_line: line.get(),
            end_column: end_column.max(start_column).get(),
        }
    }

    #[inline]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    #[inline]
    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    #[inline]
    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    #[inline]
    pub fn start_column(&self) -> u32 {
        self.start_column
    }

    #[inline]
    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    #[inline]
    pub fn end_column(&self) -> u32 {
        self.end_column
    }

    #[inline]
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    /// Width in columns, inclusive of both ends.
    ///
    /// Only single-line spans have a length; multi-line spans return `None`.
    pub fn length(&self) -> Option<u32> {
        if self.is_single_line() {
            Some(self.end_column - self.start_column + 1)
        } else {
            None
        }
    }

    /// Same coordinates, different source.
    #[must_use]
    pub fn with_file(mut self, file: Option<Arc<str>>) -> Self {
        self.file = file;
        self
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.is_single_line()) {
            (Some(file), true) => write!(f, "{file}:{}:{}", self.start_line, self.start_column),
            (Some(file), false) => write!(
                f,
                "{file}:{}:{}-{}:{}",
                self.start_line, self.start_column, self.end_line, self.end_column
            ),
            (None, true) => write!(f, "line {}, col {}", self.start_line, self.start_column),
            (None, false) => write!(
                f,
                "line {}, col {} to line {}, col {}",
                self.start_line, self.start_column, self.end_line, self.end_column
            ),
        }
    }
}
