//! Terminal layout for diagnostics.
//!
//! ```text
//! LEXICAL: unexpected character '#'
//!   --> src/main.k:3:9
//!  3 | integer x = 4#;
//!                  ^
//!   > note: remove this character
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use super::{colors, FsSourceReader, RenderOptions, SourceReader};
use crate::{Diagnostic, Severity, Span};

/// Renders diagnostics as human-readable text.
#[derive(Clone, Debug)]
pub struct DiagnosticRenderer<R = FsSourceReader> {
    options: RenderOptions,
    reader: R,
}

impl DiagnosticRenderer<FsSourceReader> {
    /// Renderer reading source context from the file system.
    pub fn new(options: RenderOptions) -> Self {
        Self::with_reader(options, FsSourceReader)
    }
}

impl<R: SourceReader> DiagnosticRenderer<R> {
    pub fn with_reader(options: RenderOptions, reader: R) -> Self {
        DiagnosticRenderer { options, reader }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render one diagnostic. Every line, including the last, ends in `\n`.
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();
        let severity = diagnostic.severity();

        let _ = writeln!(
            out,
            "{}: {}",
            self.paint(severity.label(), &[colors::BOLD, severity_color(severity)]),
            diagnostic.message()
        );

        if self.options.show_locations {
            if let Some(span) = diagnostic.primary_span() {
                let _ = writeln!(out, "  {} {span}", self.paint("-->", &[colors::MUTED]));
                self.write_context(&mut out, span, severity);
            }
        }

        for span in diagnostic.secondary_spans() {
            let _ = writeln!(out, "  {} referenced at {span}", self.paint(":::", &[colors::MUTED]));
        }

        for note in diagnostic.notes() {
            let _ = writeln!(
                out,
                "  > {} {}",
                self.paint("note:", &[colors::BOLD, colors::INFO]),
                note.message()
            );
            if !self.options.show_locations {
                continue;
            }
            if let Some(span) = note.span() {
                let _ = writeln!(out, "    {} {span}", self.paint("-->", &[colors::MUTED]));
                self.write_context(&mut out, span, Severity::Info);
            }
        }

        out
    }

    /// Render a diagnostic and write it to `writer`.
    pub fn emit<W: Write>(&self, writer: &mut W, diagnostic: &Diagnostic) -> io::Result<()> {
        writer.write_all(self.render(diagnostic).as_bytes())?;
        writer.flush()
    }

    /// Source line with a caret underline, or nothing when the span has no
    /// file or the line cannot be read.
    fn write_context(&self, out: &mut String, span: &Span, severity: Severity) {
        let Some(line) = self.source_line(span) else {
            return;
        };

        let gutter = format!(" {} | ", span.start_line());
        let _ = writeln!(out, "{}{line}", self.paint(&gutter, &[colors::MUTED]));

        let offset = gutter.len() + span.start_column() as usize - 1;
        let width = span.length().unwrap_or(1).max(1) as usize;
        let carets = "^".repeat(width);
        let _ = writeln!(
            out,
            "{}{}",
            " ".repeat(offset),
            self.paint(&carets, &[severity_color(severity)])
        );
    }

    fn source_line(&self, span: &Span) -> Option<String> {
        let path = span.file()?;
        let source = match self.reader.read_source(path) {
            Ok(source) => source,
            Err(error) => {
                tracing::debug!(path, %error, "source unavailable, omitting context");
                return None;
            }
        };
        let index = span.start_line() as usize - 1;
        let line = source.lines().nth(index);
        if line.is_none() {
            tracing::debug!(path, line = span.start_line(), "line out of range");
        }
        line.map(str::to_owned)
    }

    fn paint(&self, text: &str, styles: &[&str]) -> String {
        if !self.options.use_color {
            return text.to_owned();
        }
        let mut painted = styles.concat();
        painted.push_str(text);
        painted.push_str(colors::RESET);
        painted
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => colors::WARNING,
        Severity::Info => colors::INFO,
        _ => colors::ERROR,
    }
}
