use super::*;
use pretty_assertions::assert_eq;

#[test]
fn control_flow_keywords() {
    assert_eq!(lookup("return"), Some(TokenKind::Return));
    assert_eq!(lookup("if"), Some(TokenKind::If));
    assert_eq!(lookup("otherwise"), Some(TokenKind::Otherwise));
    assert_eq!(lookup("afterall"), Some(TokenKind::Afterall));
    assert_eq!(lookup("for"), Some(TokenKind::For));
    assert_eq!(lookup("while"), Some(TokenKind::While));
    assert_eq!(lookup("break"), Some(TokenKind::Break));
    assert_eq!(lookup("continue"), Some(TokenKind::Continue));
    assert_eq!(lookup("try"), Some(TokenKind::Try));
    assert_eq!(lookup("catch"), Some(TokenKind::Catch));
}

#[test]
fn modifier_keywords() {
    assert_eq!(lookup("public"), Some(TokenKind::Public));
    assert_eq!(lookup("private"), Some(TokenKind::Private));
    assert_eq!(lookup("protected"), Some(TokenKind::Protected));
    assert_eq!(lookup("static"), Some(TokenKind::Static));
}

#[test]
fn value_keywords() {
    assert_eq!(lookup("true"), Some(TokenKind::True));
    assert_eq!(lookup("false"), Some(TokenKind::False));
    assert_eq!(lookup("null"), Some(TokenKind::Null));
    assert_eq!(lookup("fresh"), Some(TokenKind::Fresh));
}

#[test]
fn type_keywords() {
    assert_eq!(lookup("integer"), Some(TokenKind::IntegerType));
    assert_eq!(lookup("double"), Some(TokenKind::DoubleType));
    assert_eq!(lookup("boolean"), Some(TokenKind::BooleanType));
    assert_eq!(lookup("character"), Some(TokenKind::CharacterType));
    assert_eq!(lookup("String"), Some(TokenKind::StringType));
    assert_eq!(lookup("void"), Some(TokenKind::Void));
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(lookup("Return"), None);
    assert_eq!(lookup("string"), None);
    assert_eq!(lookup("INTEGER"), None);
}

#[test]
fn non_keywords() {
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("else"), None);
    assert_eq!(lookup("returns"), None);
    assert_eq!(lookup("characters"), None);
    assert_eq!(lookup("_if"), None);
    assert_eq!(lookup("$for"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn every_keyword_kind_is_reachable() {
    let words = [
        "return", "if", "otherwise", "afterall", "for", "while", "break", "continue", "public",
        "private", "protected", "static", "true", "false", "integer", "double", "boolean",
        "character", "void", "null", "fresh", "try", "catch", "String",
    ];
    for word in words {
        let kind = lookup(word).unwrap_or_else(|| panic!("{word} should be a keyword"));
        assert!(kind.is_keyword(), "{word} resolved to non-keyword {kind}");
    }
}

#[test]
fn single_char_table() {
    assert_eq!(single_char('('), Some(TokenKind::Lparen));
    assert_eq!(single_char('@'), Some(TokenKind::At));
    assert_eq!(single_char('='), Some(TokenKind::Assignment));
    assert_eq!(single_char('%'), Some(TokenKind::Remainder));
    assert_eq!(single_char('&'), None);
    assert_eq!(single_char('|'), None);
    assert_eq!(single_char('#'), None);
}

#[test]
fn double_char_table() {
    assert_eq!(double_char('=', '='), Some(TokenKind::DoubleEqual));
    assert_eq!(double_char('-', '>'), Some(TokenKind::Arrow));
    assert_eq!(double_char('*', '*'), Some(TokenKind::Power));
    assert_eq!(double_char('&', '&'), Some(TokenKind::And));
    assert_eq!(double_char('|', '|'), Some(TokenKind::Or));
    assert_eq!(double_char('=', '>'), None);
    assert_eq!(double_char('/', '/'), None);
}
