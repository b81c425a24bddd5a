//! Lexer error types.
//!
//! A scan stops at the first error. Each [`LexError`] becomes exactly one
//! lexical [`Diagnostic`] with one remediation note.

use klang_diagnostic::{Diagnostic, Span};

/// The first problem found in a scan, with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// One-character span at the offending character, or at the end of
    /// input for unterminated constructs.
    pub span: Span,
}

/// What went wrong. `Display` is the diagnostic message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    // === Top level ===
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// `$` not followed by a letter or `_`.
    #[error("'$' must be followed by a letter or underscore")]
    DanglingSigil,
    #[error("unexpected character '&'")]
    LoneAmpersand,
    #[error("unexpected character '|'")]
    LonePipe,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    // === String literals ===
    #[error("string cannot contain a line break")]
    StringLineBreak,
    #[error("invalid escape sequence '\\{0}'")]
    InvalidStringEscape(char),
    #[error("unterminated string: unexpected end of file")]
    UnterminatedString,

    // === Character literals ===
    #[error("character literal cannot contain a line break")]
    CharLineBreak,
    /// `''`
    #[error("empty character literal")]
    EmptyCharLiteral,
    /// `'ab'`
    #[error("character literal with more than one character")]
    MultiCharLiteral,
    #[error("invalid escape sequence '\\{0}'")]
    InvalidCharEscape(char),
    #[error("unterminated character literal")]
    UnterminatedChar,

    // === Numbers ===
    /// `.` not followed by a digit.
    #[error("invalid decimal")]
    InvalidDecimal,
    /// `_` not followed by a digit.
    #[error("invalid integer")]
    InvalidInteger,
    /// `10x`
    #[error("number followed by invalid identifier")]
    NumberFollowedByIdentifier,
}

impl LexErrorKind {
    /// How to fix it.
    pub fn note(self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedCharacter(_) => "remove this character",
            LexErrorKind::DanglingSigil => "a sigil identifier looks like '$name'",
            LexErrorKind::LoneAmpersand => "did you mean '&&'?",
            LexErrorKind::LonePipe => "did you mean '||'?",
            LexErrorKind::UnterminatedBlockComment => "close the comment with '*/'",
            LexErrorKind::StringLineBreak => "close the string before the end of the line",
            LexErrorKind::InvalidStringEscape(_) => r#"valid escapes are \n, \t, \" and \\"#,
            LexErrorKind::UnterminatedString => "expected a closing '\"'",
            LexErrorKind::CharLineBreak | LexErrorKind::EmptyCharLiteral => {
                "put exactly one character between the quotes"
            }
            LexErrorKind::MultiCharLiteral => r"a character literal looks like 'a' or '\n'",
            LexErrorKind::InvalidCharEscape(_) => r"valid escapes are \n, \t, \' and \\",
            LexErrorKind::UnterminatedChar => "expected a closing \"'\"",
            LexErrorKind::InvalidDecimal => "a '.' in a number must be followed by a digit",
            LexErrorKind::InvalidInteger => "a '_' in a number must be followed by a digit",
            LexErrorKind::NumberFollowedByIdentifier => "identifiers cannot start with digits",
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    /// Build the lexical diagnostic for this error.
    pub fn to_diagnostic(&self) -> Diagnostic {
        self.clone().into_diagnostic()
    }

    /// Consuming variant of [`to_diagnostic`](Self::to_diagnostic).
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::lexical(self.kind.to_string())
            .primary(self.span)
            .note_message(self.kind.note())
            .build()
    }
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        error.into_diagnostic()
    }
}
