//! Command handlers for the `kc` CLI.
//!
//! Each submodule implements one command. Argument parsing for a command's
//! flags lives next to the command; shared helpers live here.

use klang_diagnostic::ColorMode;

use crate::CliError;

mod lex;

pub use lex::{lex_file, write_tokens};

/// Flags accepted by `kc lex`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub color: ColorMode,
    /// Off with `--no-locations`: diagnostics print without `-->` lines
    /// or source context.
    pub show_locations: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            color: ColorMode::Auto,
            show_locations: true,
        }
    }
}

/// Parse the arguments after `lex`: one file path plus flags in any order.
pub fn parse_lex_args(args: &[String]) -> Result<(String, LexOptions), CliError> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::parse(value).ok_or_else(|| {
                CliError::Usage(format!(
                    "invalid color mode '{value}' (expected auto, always or never)"
                ))
            })?;
        } else if arg == "--no-locations" {
            options.show_locations = false;
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
        }
    }

    let path = path.ok_or_else(|| CliError::Usage("missing file path".to_owned()))?;
    Ok((path, options))
}

/// Read a source file.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn path_only_uses_defaults() {
        let (path, options) = parse_lex_args(&args(&["main.k"])).unwrap();
        assert_eq!(path, "main.k");
        assert_eq!(options, LexOptions::default());
    }

    #[test]
    fn flags_in_any_order() {
        let (path, options) =
            parse_lex_args(&args(&["--no-locations", "main.k", "--color=never"])).unwrap();
        assert_eq!(path, "main.k");
        assert_eq!(options.color, ColorMode::Never);
        assert!(!options.show_locations);
    }

    #[test]
    fn usage_errors() {
        for bad in [
            &[][..],
            &["--color=rainbow", "main.k"][..],
            &["--verbose", "main.k"][..],
            &["a.k", "b.k"][..],
        ] {
            let err = parse_lex_args(&args(bad)).unwrap_err();
            assert!(matches!(err, CliError::Usage(_)), "{bad:?} gave {err:?}");
        }
    }
}
