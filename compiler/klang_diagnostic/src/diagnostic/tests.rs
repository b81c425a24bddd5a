use std::num::NonZeroU32;
use std::sync::Arc;

use super::*;
use pretty_assertions::assert_eq;

fn at(line: u32, column: u32) -> Span {
    Span::new(Some(Arc::from("main.k")), line, column, line, column).unwrap()
}

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::lexical("unexpected character '#'")
        .primary(at(1, 4))
        .note_message("remove this character")
        .build();

    assert_eq!(diag.severity(), Severity::LexicalError);
    assert_eq!(diag.message(), "unexpected character '#'");
    assert_eq!(diag.primary_span(), Some(&at(1, 4)));
    assert!(diag.is_fatal());
    assert_eq!(diag.notes().len(), 1);
    assert_eq!(diag.notes()[0].message(), "remove this character");
    assert!(diag.secondary_spans().is_empty());
}

#[test]
fn secondary_spans_and_notes_keep_insertion_order() {
    let diag = Diagnostic::error("duplicate definition of `x`")
        .primary(at(5, 1))
        .secondary(at(1, 1))
        .secondary(at(2, 3))
        .secondary(at(3, 7))
        .note_message("first")
        .note(Note::new("second").with_span(at(9, 2)))
        .build();

    assert_eq!(
        diag.secondary_spans(),
        &[at(1, 1), at(2, 3), at(3, 7)][..]
    );
    let messages: Vec<&str> = diag.notes().iter().map(Note::message).collect();
    assert_eq!(messages, vec!["first", "second"]);
    assert_eq!(diag.notes()[0].span(), None);
    assert_eq!(diag.notes()[1].span(), Some(&at(9, 2)));
}

#[test]
fn diagnostic_without_spans_is_valid() {
    let diag = Diagnostic::info("nothing to do").try_build().unwrap();
    assert!(!diag.has_primary_span());
    assert!(diag.secondary_spans().is_empty());
    assert!(diag.notes().is_empty());
    assert!(!diag.is_fatal());
}

#[test]
fn later_primary_replaces_earlier() {
    let diag = Diagnostic::warning("shadowed")
        .primary(at(1, 1))
        .primary(at(4, 2))
        .build();
    assert_eq!(diag.primary_span(), Some(&at(4, 2)));
}

#[test]
fn try_build_rejects_empty_message() {
    assert_eq!(
        Diagnostic::error("").try_build(),
        Err(DiagnosticError::EmptyMessage)
    );
}

#[test]
#[should_panic(expected = "diagnostic message must not be empty")]
fn build_panics_on_empty_message() {
    let _ = Diagnostic::lexical("").build();
}

#[test]
#[should_panic(expected = "note message must not be empty")]
fn note_message_panics_on_empty_note() {
    let _ = Diagnostic::lexical("bad").note_message("").build();
}

#[test]
#[should_panic(expected = "note message must not be empty")]
fn note_new_panics_on_empty_message() {
    let _ = Note::new("");
}

#[test]
fn note_try_new() {
    assert!(Note::try_new("hint").is_ok());
    assert_eq!(Note::try_new(""), Err(DiagnosticError::EmptyNoteMessage));
}

#[test]
fn note_errors_do_not_name_an_index() {
    assert_eq!(
        DiagnosticError::EmptyNoteMessage.to_string(),
        "note message must not be empty"
    );
}

#[test]
fn fatal_severities() {
    let fatal = [
        Severity::LexicalError,
        Severity::SyntaxError,
        Severity::SemanticError,
        Severity::TypeError,
        Severity::Error,
    ];
    for severity in fatal {
        assert!(severity.is_fatal(), "{severity} should be fatal");
    }
    assert!(!Severity::Warning.is_fatal());
    assert!(!Severity::Info.is_fatal());
}

#[test]
fn severity_labels() {
    assert_eq!(Severity::LexicalError.label(), "LEXICAL");
    assert_eq!(Severity::SyntaxError.label(), "SYNTAX");
    assert_eq!(Severity::SemanticError.label(), "ERROR");
    assert_eq!(Severity::TypeError.label(), "ERROR");
    assert_eq!(Severity::Error.label(), "ERROR");
    assert_eq!(Severity::Warning.label(), "WARNING");
    assert_eq!(Severity::Info.label(), "INFO");
}

#[test]
fn display_includes_location() {
    let diag = Diagnostic::lexical("invalid decimal")
        .primary(Span::point(None, NonZeroU32::MIN, NonZeroU32::MIN))
        .build();
    assert_eq!(diag.to_string(), "LEXICAL: invalid decimal at line 1, col 1");
    assert_eq!(
        Diagnostic::warning("unused").build().to_string(),
        "WARNING: unused"
    );
}
