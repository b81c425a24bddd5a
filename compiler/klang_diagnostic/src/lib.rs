//! Diagnostics for the Klang compiler.
//!
//! - [`Span`]: validated line/column source range
//! - [`Diagnostic`]: immutable severity + message + locations + notes,
//!   built through [`DiagnosticBuilder`]
//! - [`DiagnosticCollector`]: append-only batch for one compilation pass
//! - [`emitter`]: terminal rendering with optional source context
//!
//! # Design
//!
//! A span and a diagnostic are values: built once, validated at
//! construction, never mutated. Rendering is a separate step so the same
//! diagnostic can be printed with or without color and location lines.

mod collector;
mod diagnostic;
pub mod emitter;
mod span;

pub use collector::DiagnosticCollector;
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticError, Note, Severity};
pub use emitter::{ColorMode, DiagnosticRenderer, FsSourceReader, RenderOptions, SourceReader};
pub use span::{Span, SpanError};
