//! Token types produced by the lexer.

use std::fmt;

use klang_diagnostic::Span;

/// Token kind.
///
/// Literal and identifier kinds carry their text in [`Token::lexeme`];
/// every other kind is fully described by the kind alone.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals and names
    Ident,
    Number,
    StringLiteral,
    CharLiteral,

    // Keywords: control flow
    Return,
    If,
    Otherwise,
    Afterall,
    For,
    While,
    Break,
    Continue,
    Try,
    Catch,

    // Keywords: modifiers
    Public,
    Private,
    Protected,
    Static,

    // Keywords: values
    True,
    False,
    Null,
    Fresh,

    // Keywords: types
    IntegerType,
    DoubleType,
    BooleanType,
    CharacterType,
    StringType,
    Void,

    // Arithmetic
    Plus,
    Increment,
    Minus,
    Decrement,
    Multiply,
    Division,
    Power,
    Remainder,

    // Delimiters
    Lparen,
    Rparen,
    Lbrace,
    Rbrace,
    Lbracket,
    Rbracket,
    Comma,
    Semicolon,
    Colon,
    Dot,

    // Comparison and logic
    Assignment,
    Bang,
    Lt,
    Gt,
    Lte,
    Gte,
    DoubleEqual,
    NotEqual,
    Arrow,
    And,
    Or,

    At,

    Eof,
}

impl TokenKind {
    /// Upper-case name used in token listings.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharLiteral => "CHARACTER_LITERAL",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Otherwise => "OTHERWISE",
            TokenKind::Afterall => "AFTERALL",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Try => "TRY",
            TokenKind::Catch => "CATCH",
            TokenKind::Public => "PUBLIC",
            TokenKind::Private => "PRIVATE",
            TokenKind::Protected => "PROTECTED",
            TokenKind::Static => "STATIC",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::Fresh => "FRESH",
            TokenKind::IntegerType => "INTEGER",
            TokenKind::DoubleType => "DOUBLE",
            TokenKind::BooleanType => "BOOLEAN",
            TokenKind::CharacterType => "CHARACTER_TYPE",
            TokenKind::StringType => "STRING_TYPE",
            TokenKind::Void => "VOID",
            TokenKind::Plus => "PLUS",
            TokenKind::Increment => "INCREMENT",
            TokenKind::Minus => "MINUS",
            TokenKind::Decrement => "DECREMENT",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Division => "DIVISION",
            TokenKind::Power => "POWER",
            TokenKind::Remainder => "REMAINDER",
            TokenKind::Lparen => "LPAREN",
            TokenKind::Rparen => "RPAREN",
            TokenKind::Lbrace => "LBRACE",
            TokenKind::Rbrace => "RBRACE",
            TokenKind::Lbracket => "LBRACKET",
            TokenKind::Rbracket => "RBRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Bang => "BANG",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Lte => "LTE",
            TokenKind::Gte => "GTE",
            TokenKind::DoubleEqual => "DOUBLEEQUAL",
            TokenKind::NotEqual => "NOTEQUAL",
            TokenKind::Arrow => "ARROW",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::At => "AT",
            TokenKind::Eof => "EOF",
        }
    }

    /// Whether tokens of this kind carry a lexeme.
    #[inline]
    pub fn has_lexeme(self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::Number | TokenKind::StringLiteral | TokenKind::CharLiteral
        )
    }

    /// Check if this is a reserved word.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Return
                | TokenKind::If
                | TokenKind::Otherwise
                | TokenKind::Afterall
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Try
                | TokenKind::Catch
                | TokenKind::Public
                | TokenKind::Private
                | TokenKind::Protected
                | TokenKind::Static
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::Fresh
                | TokenKind::IntegerType
                | TokenKind::DoubleType
                | TokenKind::BooleanType
                | TokenKind::CharacterType
                | TokenKind::StringType
                | TokenKind::Void
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its source location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text for identifiers and literals. String and character
    /// literals keep their escape sequences undecoded and exclude the quotes.
    pub lexeme: Option<String>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            lexeme: None,
            span,
        }
    }

    pub fn with_lexeme(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            lexeme: Some(lexeme.into()),
            span,
        }
    }

    /// The lexeme, or `""` for kinds that carry none.
    pub fn text(&self) -> &str {
        self.lexeme.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lexeme {
            Some(text) => write!(f, "{}(\"{text}\")", self.kind.name()),
            None => f.write_str(self.kind.name()),
        }
    }
}
