use std::fs;

use super::*;
use klang_diagnostic::Severity;
use pretty_assertions::assert_eq;

fn write_source(dir: &tempfile::TempDir, name: &str, source: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, source).unwrap();
    path.to_str().unwrap().to_owned()
}

#[test]
fn lists_tokens_with_positions() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "main.k", "integer x = 10;\n");

    let tokens = lex_file(&path).unwrap();
    let mut out = Vec::new();
    write_tokens(&mut out, &path, &tokens).unwrap();

    let expected = format!(
        "Tokens for '{path}' (6 tokens):
  INTEGER @ 1:1
  IDENTIFIER(\"x\") @ 1:9
  ASSIGNMENT @ 1:11
  NUMBER(\"10\") @ 1:13
  SEMICOLON @ 1:15
  EOF @ 2:1
"
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn rejects_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "notes.txt", "integer x;");

    let Err(CliError::Diagnostic(diag)) = lex_file(&path) else {
        panic!("expected a diagnostic");
    };
    assert_eq!(diag.severity(), Severity::Info);
    assert_eq!(diag.message(), "the file is not a .k file");
    assert_eq!(diag.notes()[0].message(), "pass a Klang source file");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.k");

    let err = lex_file(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }), "got {err:?}");
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn lexical_error_becomes_diagnostic_with_file_span() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "bad.k", "boolean b = a & c;\n");

    let Err(CliError::Diagnostic(diag)) = lex_file(&path) else {
        panic!("expected a diagnostic");
    };
    assert_eq!(diag.severity(), Severity::LexicalError);
    let span = diag.primary_span().unwrap();
    assert_eq!(span.file(), Some(path.as_str()));
    assert_eq!((span.start_line(), span.start_column()), (1, 15));
}
