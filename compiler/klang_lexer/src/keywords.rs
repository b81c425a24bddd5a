//! Fixed lookup tables for keywords and single-character tokens.
//!
//! Both tables are `match` expressions, so there is nothing to build at
//! startup and nothing to synchronize between concurrent scans.

use crate::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers. Keywords are 2-9 characters
/// and start with an ASCII letter, so anything else is rejected before
/// any comparison.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=9).contains(&len) || !text.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }

    match len {
        2 => match text {
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "try" => Some(TokenKind::Try),
            _ => None,
        },
        4 => match text {
            "true" => Some(TokenKind::True),
            "void" => Some(TokenKind::Void),
            "null" => Some(TokenKind::Null),
            _ => None,
        },
        5 => match text {
            "while" => Some(TokenKind::While),
            "break" => Some(TokenKind::Break),
            "false" => Some(TokenKind::False),
            "fresh" => Some(TokenKind::Fresh),
            "catch" => Some(TokenKind::Catch),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            "public" => Some(TokenKind::Public),
            "static" => Some(TokenKind::Static),
            "double" => Some(TokenKind::DoubleType),
            "String" => Some(TokenKind::StringType),
            _ => None,
        },
        7 => match text {
            "private" => Some(TokenKind::Private),
            "integer" => Some(TokenKind::IntegerType),
            "boolean" => Some(TokenKind::BooleanType),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            "afterall" => Some(TokenKind::Afterall),
            _ => None,
        },
        9 => match text {
            "otherwise" => Some(TokenKind::Otherwise),
            "protected" => Some(TokenKind::Protected),
            "character" => Some(TokenKind::CharacterType),
            _ => None,
        },
        _ => None,
    }
}

/// Kind for a character that forms a token on its own.
///
/// Characters that may start a two-character operator are included with
/// their one-character meaning; the scanner probes for the longer form
/// first. `&` and `|` are absent: they only exist doubled.
#[inline]
pub(crate) fn single_char(c: char) -> Option<TokenKind> {
    let kind = match c {
        '(' => TokenKind::Lparen,
        ')' => TokenKind::Rparen,
        '{' => TokenKind::Lbrace,
        '}' => TokenKind::Rbrace,
        '[' => TokenKind::Lbracket,
        ']' => TokenKind::Rbracket,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '.' => TokenKind::Dot,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Multiply,
        '/' => TokenKind::Division,
        '%' => TokenKind::Remainder,
        '=' => TokenKind::Assignment,
        '<' => TokenKind::Lt,
        '>' => TokenKind::Gt,
        '!' => TokenKind::Bang,
        '@' => TokenKind::At,
        _ => return None,
    };
    Some(kind)
}

/// Two-character operator starting with `first` and continuing with `second`.
#[inline]
pub(crate) fn double_char(first: char, second: char) -> Option<TokenKind> {
    let kind = match (first, second) {
        ('=', '=') => TokenKind::DoubleEqual,
        ('+', '+') => TokenKind::Increment,
        ('-', '-') => TokenKind::Decrement,
        ('-', '>') => TokenKind::Arrow,
        ('*', '*') => TokenKind::Power,
        ('>', '=') => TokenKind::Gte,
        ('<', '=') => TokenKind::Lte,
        ('!', '=') => TokenKind::NotEqual,
        ('&', '&') => TokenKind::And,
        ('|', '|') => TokenKind::Or,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests;
