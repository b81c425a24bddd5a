//! Character cursor with line/column bookkeeping.
//!
//! `current()` returns `'\0'` once the source is exhausted. Interior NUL
//! characters read the same way; use [`is_eof()`](Cursor::is_eof) to tell
//! them apart.
//!
//! # Position model
//!
//! `line` starts at 1. `column` counts the characters consumed on the
//! current line, so it starts at 0 and the character under the cursor is
//! at `column + 1`. Consuming a newline bumps `line` and resets `column`
//! to 0.

use std::num::NonZeroU32;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    /// Byte offset of the current character.
    pos: usize,
    line: NonZeroU32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            line: NonZeroU32::MIN,
            column: 0,
        }
    }

    /// The character under the cursor, or `'\0'` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    /// The character after the current one, or `'\0'` past EOF.
    #[inline]
    pub(crate) fn peek(&self) -> char {
        self.rest().chars().nth(1).unwrap_or('\0')
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consume the current character. No-op at EOF.
    pub(crate) fn advance(&mut self) {
        let Some(c) = self.rest().chars().next() else {
            return;
        };
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 0;
        } else {
            self.column = self.column.saturating_add(1);
        }
    }

    /// Advance while `pred` holds for the current character.
    ///
    /// Stops at EOF regardless of `pred('\0')`.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Byte offset of the current character.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn line(&self) -> NonZeroU32 {
        self.line
    }

    /// Column of the character under the cursor (1-based).
    #[inline]
    pub(crate) fn column(&self) -> NonZeroU32 {
        NonZeroU32::MIN.saturating_add(self.column)
    }

    /// Column of the most recently consumed character on this line.
    ///
    /// At the start of a line there is none, so the first column is returned.
    #[inline]
    pub(crate) fn last_column(&self) -> NonZeroU32 {
        NonZeroU32::new(self.column).unwrap_or(NonZeroU32::MIN)
    }

    /// Source text from byte offset `start` up to the cursor.
    ///
    /// `start` must be a value previously returned by [`pos()`](Self::pos).
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }
}

#[cfg(test)]
mod tests;
