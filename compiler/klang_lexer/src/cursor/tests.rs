use super::*;
use pretty_assertions::assert_eq;

fn nz(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

// === Navigation ===

#[test]
fn current_and_peek() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), 'a');
    assert_eq!(cursor.peek(), 'b');
}

#[test]
fn sentinel_at_end() {
    let mut cursor = Cursor::new("a");
    assert_eq!(cursor.peek(), '\0');
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), '\0');
    assert_eq!(cursor.peek(), '\0');
}

#[test]
fn advance_at_eof_is_noop() {
    let mut cursor = Cursor::new("");
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.column(), nz(1));
}

#[test]
fn interior_nul_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), '\0');
    assert!(!cursor.is_eof());
}

#[test]
fn multibyte_characters_advance_by_char() {
    let mut cursor = Cursor::new("é1");
    cursor.advance();
    assert_eq!(cursor.current(), '1');
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.column(), nz(2));
}

// === Position tracking ===

#[test]
fn columns_count_consumed_characters() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.column(), nz(1));
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.column(), nz(3));
    assert_eq!(cursor.last_column(), nz(2));
}

#[test]
fn newline_resets_column_and_bumps_line() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.eat_while(|c| c != '\n');
    assert_eq!(cursor.line(), nz(1));
    assert_eq!(cursor.column(), nz(3));

    cursor.advance();
    assert_eq!(cursor.line(), nz(2));
    assert_eq!(cursor.column(), nz(1));
    assert_eq!(cursor.current(), 'c');
}

#[test]
fn last_column_at_line_start() {
    let cursor = Cursor::new("x");
    assert_eq!(cursor.last_column(), nz(1));
}

// === Slicing ===

#[test]
fn eat_while_and_slice() {
    let mut cursor = Cursor::new("hello world");
    let start = cursor.pos();
    cursor.eat_while(char::is_alphanumeric);
    assert_eq!(cursor.slice_from(start), "hello");
    assert_eq!(cursor.current(), ' ');
}

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = Cursor::new("aaa");
    cursor.eat_while(|_| true);
    assert!(cursor.is_eof());
    assert_eq!(cursor.slice_from(0), "aaa");
}
