//! Single-pass scanner from source text to tokens.
//!
//! The scanner dispatches on the current character, consumes one complete
//! token (or a run of trivia), and repeats until EOF. It never backtracks
//! and looks at most one character ahead. The first error ends the scan;
//! no tokens are returned alongside it.

use std::num::NonZeroU32;
use std::sync::Arc;

use klang_diagnostic::Span;

use crate::cursor::Cursor;
use crate::{keywords, LexError, LexErrorKind, Token, TokenKind};

/// Scanner state for one source text.
///
/// [`tokenize`](Lexer::tokenize) consumes the lexer, so every scan starts
/// from a fresh instance.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    file: Option<Arc<str>>,
    tokens: Vec<Token>,
}

/// Line and column of a token's first character.
#[derive(Clone, Copy)]
struct Start {
    line: NonZeroU32,
    column: NonZeroU32,
}

impl<'a> Lexer<'a> {
    /// Lexer for `source` read from `file`. An empty `file` means the
    /// source has no backing file.
    pub fn new(source: &'a str, file: &str) -> Self {
        let file = (!file.is_empty()).then(|| Arc::from(file));
        Self::with_file(source, file)
    }

    /// Lexer for an in-memory snippet. Spans carry no file.
    pub fn anonymous(source: &'a str) -> Self {
        Self::with_file(source, None)
    }

    pub fn with_file(source: &'a str, file: Option<Arc<str>>) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            file,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole source.
    ///
    /// On success the last token is the only `Eof` token.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(file = self.file.as_deref().unwrap_or("<anonymous>"))
    )]
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        if let Err(error) = self.scan() {
            tracing::debug!(%error, at = %error.span, "scan aborted");
            return Err(error);
        }
        let eof = self.point(self.cursor.line(), self.cursor.column());
        self.tokens.push(Token::new(TokenKind::Eof, eof));
        tracing::debug!(tokens = self.tokens.len(), "scan complete");
        Ok(self.tokens)
    }

    fn scan(&mut self) -> Result<(), LexError> {
        while !self.cursor.is_eof() {
            let c = self.cursor.current();
            match c {
                c if c.is_whitespace() => self.cursor.advance(),
                '/' if self.cursor.peek() == '/' => self.cursor.eat_while(|c| c != '\n'),
                '/' if self.cursor.peek() == '*' => self.block_comment()?,
                '"' => self.string()?,
                '\'' => self.character()?,
                '$' => self.sigil_identifier()?,
                c if is_ident_start(c) => self.identifier(),
                c if c.is_ascii_digit() => self.number()?,
                _ => self.operator()?,
            }
        }
        Ok(())
    }

    // === Trivia ===

    fn block_comment(&mut self) -> Result<(), LexError> {
        // Consume `/*`.
        self.cursor.advance();
        self.cursor.advance();
        loop {
            if self.cursor.is_eof() {
                return Err(self.error_here(LexErrorKind::UnterminatedBlockComment));
            }
            if self.cursor.current() == '*' && self.cursor.peek() == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }
    }

    // === Literals ===

    /// `"..."`, single line. The lexeme keeps escapes as written.
    fn string(&mut self) -> Result<(), LexError> {
        let start = self.start();
        self.cursor.advance();
        let content = self.cursor.pos();
        loop {
            if self.cursor.is_eof() {
                return Err(self.error_here(LexErrorKind::UnterminatedString));
            }
            match self.cursor.current() {
                '"' => break,
                '\n' => return Err(self.error_here(LexErrorKind::StringLineBreak)),
                '\\' => {
                    self.cursor.advance();
                    match self.cursor.current() {
                        _ if self.cursor.is_eof() => {
                            return Err(self.error_here(LexErrorKind::UnterminatedString));
                        }
                        'n' | 't' | '"' | '\\' => self.cursor.advance(),
                        '\n' => return Err(self.error_here(LexErrorKind::StringLineBreak)),
                        other => {
                            return Err(self.error_here(LexErrorKind::InvalidStringEscape(other)));
                        }
                    }
                }
                _ => self.cursor.advance(),
            }
        }
        let text = self.cursor.slice_from(content);
        self.cursor.advance();
        self.push_text(TokenKind::StringLiteral, text, start);
        Ok(())
    }

    /// `'x'` or `'\n'`. Exactly one character or escape pair.
    fn character(&mut self) -> Result<(), LexError> {
        let start = self.start();
        self.cursor.advance();
        let content = self.cursor.pos();

        match self.cursor.current() {
            _ if self.cursor.is_eof() => {
                return Err(self.error_here(LexErrorKind::UnterminatedChar));
            }
            '\n' => return Err(self.error_here(LexErrorKind::CharLineBreak)),
            '\'' => return Err(self.error_here(LexErrorKind::EmptyCharLiteral)),
            '\\' => {
                self.cursor.advance();
                match self.cursor.current() {
                    _ if self.cursor.is_eof() => {
                        return Err(self.error_here(LexErrorKind::UnterminatedChar));
                    }
                    'n' | 't' | '\'' | '\\' => self.cursor.advance(),
                    '\n' => return Err(self.error_here(LexErrorKind::CharLineBreak)),
                    other => return Err(self.error_here(LexErrorKind::InvalidCharEscape(other))),
                }
            }
            _ => self.cursor.advance(),
        }

        match self.cursor.current() {
            '\'' => {}
            '\n' => return Err(self.error_here(LexErrorKind::UnterminatedChar)),
            _ if self.cursor.is_eof() => {
                return Err(self.error_here(LexErrorKind::UnterminatedChar));
            }
            _ => return Err(self.error_here(LexErrorKind::MultiCharLiteral)),
        }
        let text = self.cursor.slice_from(content);
        self.cursor.advance();
        self.push_text(TokenKind::CharLiteral, text, start);
        Ok(())
    }

    /// Digits, then at most one `.digits` and one `_digits` group.
    fn number(&mut self) -> Result<(), LexError> {
        let start = self.start();
        let begin = self.cursor.pos();
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.current() == '.' {
            if !self.cursor.peek().is_ascii_digit() {
                return Err(self.error_here(LexErrorKind::InvalidDecimal));
            }
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        if self.cursor.current() == '_' {
            if !self.cursor.peek().is_ascii_digit() {
                return Err(self.error_here(LexErrorKind::InvalidInteger));
            }
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        if self.cursor.current().is_alphabetic() {
            return Err(self.error_here(LexErrorKind::NumberFollowedByIdentifier));
        }

        let text = self.cursor.slice_from(begin);
        self.push_text(TokenKind::Number, text, start);
        Ok(())
    }

    // === Names ===

    fn identifier(&mut self) {
        let start = self.start();
        let begin = self.cursor.pos();
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(begin);

        match keywords::lookup(text) {
            Some(kind) => self.push(kind, start),
            None => self.push_text(TokenKind::Ident, text, start),
        }
    }

    /// `$name`. The sigil is part of the identifier text.
    fn sigil_identifier(&mut self) -> Result<(), LexError> {
        if !is_ident_start(self.cursor.peek()) {
            return Err(self.error_here(LexErrorKind::DanglingSigil));
        }
        self.identifier();
        Ok(())
    }

    // === Operators ===

    /// Longest operator at the cursor: a two-character form when the
    /// next character completes one, otherwise the single character.
    fn operator(&mut self) -> Result<(), LexError> {
        let start = self.start();
        let first = self.cursor.current();

        if let Some(kind) = keywords::double_char(first, self.cursor.peek()) {
            self.cursor.advance();
            self.cursor.advance();
            self.push(kind, start);
            return Ok(());
        }

        let Some(kind) = keywords::single_char(first) else {
            let kind = match first {
                '&' => LexErrorKind::LoneAmpersand,
                '|' => LexErrorKind::LonePipe,
                other => LexErrorKind::UnexpectedCharacter(other),
            };
            return Err(self.error_here(kind));
        };
        self.cursor.advance();
        self.push(kind, start);
        Ok(())
    }

    // === Helpers ===

    fn start(&self) -> Start {
        Start {
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }

    /// Span from `start` to the last consumed character.
    fn span_from(&self, start: Start) -> Span {
        Span::on_line(
            self.file.clone(),
            start.line,
            start.column,
            self.cursor.last_column(),
        )
    }

    fn point(&self, line: NonZeroU32, column: NonZeroU32) -> Span {
        Span::point(self.file.clone(), line, column)
    }

    fn push(&mut self, kind: TokenKind, start: Start) {
        let span = self.span_from(start);
        self.tokens.push(Token::new(kind, span));
    }

    fn push_text(&mut self, kind: TokenKind, text: &str, start: Start) {
        let span = self.span_from(start);
        self.tokens.push(Token::with_lexeme(kind, text, span));
    }

    /// Error at the character under the cursor (or the EOF position).
    fn error_here(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.point(self.cursor.line(), self.cursor.column()))
    }
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Scan `source` in one call. An empty `file` means no backing file.
pub fn tokenize(source: &str, file: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source, file).tokenize()
}
