use klang_diagnostic::Diagnostic;

/// Why a command did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),
    /// The input could not be read. This is the tool failing, not the
    /// source being wrong.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A problem with the user's input, rendered as a diagnostic.
    #[error("{0}")]
    Diagnostic(#[from] Diagnostic),
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// `0` is success; `1` a reported diagnostic; `2` a usage error; `3` an
    /// internal failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Diagnostic(_) => 1,
            CliError::Usage(_) => 2,
            CliError::Io { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exit_codes_are_distinct() {
        let diagnostic = CliError::from(Diagnostic::lexical("bad").build());
        let usage = CliError::Usage("missing file path".into());
        let io = CliError::Io {
            path: "a.k".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(diagnostic.exit_code(), 1);
        assert_eq!(usage.exit_code(), 2);
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn io_error_mentions_path() {
        let io = CliError::Io {
            path: "a.k".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(io.to_string(), "cannot read 'a.k': gone");
    }
}
