//! Diagnostic rendering.
//!
//! [`DiagnosticRenderer`] turns a [`Diagnostic`](crate::Diagnostic) into the
//! text printed on the error stream. Rendering itself is pure; the only side
//! effect is reading source lines for context, which goes through the
//! [`SourceReader`] trait so tests can observe (or forbid) file access.

mod renderer;

pub use renderer::DiagnosticRenderer;

use std::io;

/// ANSI color codes for terminal output.
pub(crate) mod colors {
    pub const ERROR: &str = "\x1b[38;2;127;0;31m"; // Wine
    pub const WARNING: &str = "\x1b[38;2;255;165;0m"; // Orange
    pub const INFO: &str = "\x1b[38;2;100;149;237m"; // Cornflower blue
    pub const MUTED: &str = "\x1b[38;2;209;209;209m"; // Light gray
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Like [`should_use_colors`](Self::should_use_colors), but `Auto` also
    /// honors the `NO_COLOR` and `TERM` environment variables.
    pub fn detect(self, is_tty: bool) -> bool {
        let env_ok = env_allows_color(
            std::env::var_os("NO_COLOR").is_some(),
            std::env::var("TERM").ok().as_deref(),
        );
        match self {
            ColorMode::Auto => is_tty && env_ok,
            mode => mode.should_use_colors(is_tty),
        }
    }
}

/// `NO_COLOR` (any value) disables color; so does a missing or `dumb` `TERM`.
pub(crate) fn env_allows_color(no_color: bool, term: Option<&str>) -> bool {
    !no_color && term.is_some_and(|t| t != "dumb")
}

/// Display flags for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI color codes.
    pub use_color: bool,
    /// Print `-->` location lines and source context. When off, only
    /// headers, cross-references and note messages are printed.
    pub show_locations: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            use_color: false,
            show_locations: true,
        }
    }
}

/// Access to source text for context lines.
pub trait SourceReader {
    /// Read the whole file named by a span.
    fn read_source(&self, path: &str) -> io::Result<String>;
}

/// Reads sources from the real file system.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSourceReader;

impl SourceReader for FsSourceReader {
    fn read_source(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

impl<R: SourceReader + ?Sized> SourceReader for &R {
    fn read_source(&self, path: &str) -> io::Result<String> {
        (**self).read_source(path)
    }
}
