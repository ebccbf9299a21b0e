//! Input cursor shared by the parser productions.
//!
//! Holds the input text and a byte offset. Multi-byte characters are only
//! ever stepped over whole, so every offset the cursor stops at is a char
//! boundary.

use crate::error::{JsonError, JsonResult};

/// Byte cursor over the text being parsed.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the current position in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek at the current byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Peek at the current character without consuming it.
    pub fn peek_char(&self) -> Option<char> {
        self.input.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    /// Consume and return the current byte.
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Consume and return the current character.
    pub fn advance_char(&mut self) -> Option<char> {
        let ch = self.peek_char();
        if let Some(c) = ch {
            self.pos += c.len_utf8();
        }
        ch
    }

    /// Skip characters in the C `isspace` set.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if is_space(b) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Consume `expected` if the input continues with it.
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `literal` or fail with `InvalidLiteral` without moving.
    pub fn expect_literal(&mut self, literal: &'static str) -> JsonResult<()> {
        let rest = self.input.get(self.pos..).unwrap_or_default();
        if rest.starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(JsonError::InvalidLiteral {
                offset: self.pos,
                expected: literal,
            })
        }
    }

    /// Consume bytes while `pred` holds and return them as a slice.
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if pred(b) {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.slice(start, self.pos)
    }

    /// Text between two offsets previously reported by this cursor.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.input.get(start..end).unwrap_or_default()
    }

    /// Error describing whatever sits at the cursor.
    ///
    /// `UnexpectedEnd` when input is exhausted, otherwise `Expected`.
    pub fn expected(&self, expected: &'static str) -> JsonError {
        match self.peek_char() {
            Some(found) => JsonError::Expected {
                offset: self.pos,
                expected,
                found,
            },
            None => JsonError::UnexpectedEnd { offset: self.pos },
        }
    }
}

/// The C `isspace` set: space, `\t`, `\n`, `\v`, `\f`, `\r`.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
