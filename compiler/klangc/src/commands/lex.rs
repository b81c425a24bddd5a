//! `kc lex`: scan a file and list its tokens.

use std::io::{self, Write};
use std::path::Path;

use klang_diagnostic::Diagnostic;
use klang_lexer::Token;

use super::read_file;
use crate::CliError;

/// Lex a `.k` file.
///
/// Files without the `.k` extension are refused with an informational
/// diagnostic before anything is read.
pub fn lex_file(path: &str) -> Result<Vec<Token>, CliError> {
    if Path::new(path).extension().and_then(|ext| ext.to_str()) != Some("k") {
        return Err(Diagnostic::info("the file is not a .k file")
            .note_message("pass a Klang source file")
            .build()
            .into());
    }

    let source = read_file(path)?;
    let tokens = klang_lexer::tokenize(&source, path).map_err(Diagnostic::from)?;
    tracing::debug!(path, tokens = tokens.len(), "lexed file");
    Ok(tokens)
}

/// Print a token listing, one token per line with its start position.
pub fn write_tokens<W: Write>(out: &mut W, path: &str, tokens: &[Token]) -> io::Result<()> {
    writeln!(out, "Tokens for '{path}' ({} tokens):", tokens.len())?;
    for token in tokens {
        writeln!(
            out,
            "  {token} @ {}:{}",
            token.span.start_line(),
            token.span.start_column()
        )?;
    }
    out.flush()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests;
