//! Recursive-descent JSON parser.
//!
//! One method per grammar production, all sharing the parser's [`Cursor`].
//! Every production returns a [`JsonResult`]; the first structural error
//! aborts the whole parse; no partially built value is handed back.
//!
//! Leniencies kept on purpose:
//!
//! - unknown escapes (`\q`) are kept as a backslash plus the character;
//! - number text is consumed greedily and handed to the standard library
//!   converters, so leading zeros are accepted;
//! - control characters inside strings are copied verbatim.

use std::num::IntErrorKind;
use std::str::FromStr;

use log::{debug, trace};

use crate::cursor::{is_space, Cursor};
use crate::error::{JsonError, JsonResult};
use crate::limits::{Limits, UnicodeEscapes};
use crate::value::{Map, Value};

/// Parser state: cursor, limits and current nesting depth.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser for `input`, enforcing the input size limit.
    pub fn new(input: &'a str, limits: Limits) -> JsonResult<Self> {
        if input.len() > limits.max_input_size {
            return Err(JsonError::InputTooLarge {
                size: input.len(),
                limit: limits.max_input_size,
            });
        }

        Ok(Self {
            cursor: Cursor::new(input),
            limits,
            depth: 0,
        })
    }

    /// Parse one document.
    ///
    /// Unless `allow_trailing` is set, only whitespace may follow the value.
    pub fn parse(&mut self) -> JsonResult<Value> {
        let value = self.parse_next()?;

        self.cursor.skip_whitespace();
        if !self.limits.allow_trailing && !self.cursor.is_at_end() {
            return Err(JsonError::TrailingCharacters {
                offset: self.cursor.position(),
            });
        }

        Ok(value)
    }

    /// Byte offset reached so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Dispatch on the first non-whitespace character.
    fn parse_next(&mut self) -> JsonResult<Value> {
        self.cursor.skip_whitespace();
        trace!("value at offset {}", self.cursor.position());

        match self.cursor.peek() {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b't' | b'f') => self.parse_bool(),
            Some(b'n') => self.parse_null(),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(JsonError::UnexpectedCharacter {
                offset: self.cursor.position(),
                found: self.cursor.peek_char().unwrap_or_default(),
            }),
            None => Err(JsonError::UnexpectedEnd {
                offset: self.cursor.position(),
            }),
        }
    }

    /// Enter an array/object, checking the depth limit.
    fn enter(&mut self) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(JsonError::NestingTooDeep {
                offset: self.cursor.position(),
                depth: self.depth,
                limit: self.limits.max_nesting_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parse a JSON object. Later duplicate keys replace earlier ones.
    fn parse_object(&mut self) -> JsonResult<Value> {
        self.enter()?;

        // Consume opening brace
        self.cursor.advance();

        let mut map = Map::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(b'}') {
            self.leave();
            return Ok(Value::Object(map));
        }

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek() != Some(b'"') {
                return Err(self.cursor.expected("string key"));
            }
            let key = self.parse_string()?;

            self.cursor.skip_whitespace();
            if !self.cursor.eat(b':') {
                return Err(self.cursor.expected("':'"));
            }

            let value = self.parse_next()?;
            map.insert(key, value);

            self.cursor.skip_whitespace();
            if self.cursor.eat(b',') {
                continue;
            }
            if self.cursor.eat(b'}') {
                break;
            }
            return Err(self.cursor.expected("',' or '}'"));
        }

        self.leave();
        Ok(Value::Object(map))
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> JsonResult<Value> {
        self.enter()?;

        // Consume opening bracket
        self.cursor.advance();

        let mut items = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(b']') {
            self.leave();
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_next()?);

            self.cursor.skip_whitespace();
            if self.cursor.eat(b',') {
                continue;
            }
            if self.cursor.eat(b']') {
                break;
            }
            return Err(self.cursor.expected("',' or ']'"));
        }

        self.leave();
        Ok(Value::Array(items))
    }

    /// Parse a quoted string, cursor on the opening quote.
    fn parse_string(&mut self) -> JsonResult<String> {
        self.cursor.advance();

        let mut out = String::new();
        loop {
            out.push_str(self.cursor.take_while(|b| b != b'"' && b != b'\\'));

            match self.cursor.advance() {
                Some(b'"') => return Ok(out),
                Some(b'\\') => self.parse_escape(&mut out)?,
                _ => {
                    return Err(JsonError::UnexpectedEnd {
                        offset: self.cursor.position(),
                    })
                }
            }
        }
    }

    /// Handle the character after a backslash.
    fn parse_escape(&mut self, out: &mut String) -> JsonResult<()> {
        let escape_start = self.cursor.position() - 1;

        match self.cursor.advance_char() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\x08'),
            Some('f') => out.push('\x0C'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => self.parse_unicode_escape(escape_start, out)?,
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => {
                return Err(JsonError::UnexpectedEnd {
                    offset: self.cursor.position(),
                })
            }
        }
        Ok(())
    }

    /// Handle `\uXXXX`, the `\u` already consumed.
    fn parse_unicode_escape(&mut self, escape_start: usize, out: &mut String) -> JsonResult<()> {
        let hex_start = self.cursor.position();
        let code = self.read_hex4(escape_start)?;

        match self.limits.unicode_escapes {
            UnicodeEscapes::Preserve => {
                out.push_str("\\u");
                out.push_str(self.cursor.slice(hex_start, self.cursor.position()));
            }
            UnicodeEscapes::Decode => out.push(self.decode_code_unit(escape_start, code)?),
        }
        Ok(())
    }

    /// Turn a UTF-16 code unit (plus its pair, if needed) into a char.
    fn decode_code_unit(&mut self, escape_start: usize, code: u16) -> JsonResult<char> {
        let invalid = |reason| JsonError::InvalidUnicodeEscape {
            offset: escape_start,
            reason,
        };

        if (0xD800..=0xDBFF).contains(&code) {
            if !(self.cursor.eat(b'\\') && self.cursor.eat(b'u')) {
                return Err(invalid("unpaired high surrogate"));
            }
            let low = self.read_hex4(escape_start)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(invalid("high surrogate not followed by low surrogate"));
            }
            let combined = 0x10000 + ((u32::from(code) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
            return char::from_u32(combined).ok_or_else(|| invalid("invalid code point"));
        }

        if (0xDC00..=0xDFFF).contains(&code) {
            return Err(invalid("unpaired low surrogate"));
        }

        char::from_u32(u32::from(code)).ok_or_else(|| invalid("invalid code point"))
    }

    /// Read exactly four hex digits.
    fn read_hex4(&mut self, escape_start: usize) -> JsonResult<u16> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let digit = match self.cursor.peek() {
                Some(b @ b'0'..=b'9') => b - b'0',
                Some(b @ b'a'..=b'f') => b - b'a' + 10,
                Some(b @ b'A'..=b'F') => b - b'A' + 10,
                _ => {
                    return Err(JsonError::InvalidUnicodeEscape {
                        offset: escape_start,
                        reason: "expected four hex digits",
                    })
                }
            };
            self.cursor.advance();
            value = (value << 4) | u16::from(digit);
        }
        Ok(value)
    }

    /// Parse a number.
    ///
    /// Sign, digits and `.` are consumed greedily, then an optional exponent.
    /// The terminating character is peeked, never consumed.
    fn parse_number(&mut self) -> JsonResult<Value> {
        let start = self.cursor.position();

        let mantissa = self
            .cursor
            .take_while(|b| b == b'-' || b == b'.' || b.is_ascii_digit());
        let is_float = mantissa.contains('.');

        let mut has_exponent = false;
        if matches!(self.cursor.peek(), Some(b'e' | b'E')) {
            has_exponent = true;
            self.cursor.advance();
            if matches!(self.cursor.peek(), Some(b'-' | b'+')) {
                self.cursor.advance();
            }
            if self.cursor.take_while(|b| b.is_ascii_digit()).is_empty() {
                return Err(self.cursor.expected("exponent digits"));
            }
        }

        match self.cursor.peek() {
            None => {}
            Some(b) if is_space(b) || matches!(b, b',' | b']' | b'}') => {}
            Some(_) => return Err(self.cursor.expected("',', ']', '}' or whitespace after number")),
        }

        let text = self.cursor.slice(start, self.cursor.position());
        let invalid = || JsonError::InvalidNumber {
            offset: start,
            text: text.to_string(),
        };
        // Out-of-range magnitudes parse to infinity, which has no JSON form
        let float = || match text.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Value::Float(x)),
            _ => Err(invalid()),
        };

        if is_float || has_exponent {
            return float();
        }

        match text.parse::<i64>() {
            Ok(n) => Ok(Value::Integer(n)),
            // Integral text outside i64 still denotes a number
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                float()
            }
            Err(_) => Err(invalid()),
        }
    }

    /// Parse `true` or `false`.
    fn parse_bool(&mut self) -> JsonResult<Value> {
        if self.cursor.peek() == Some(b't') {
            self.cursor.expect_literal("true")?;
            Ok(Value::Bool(true))
        } else {
            self.cursor.expect_literal("false")?;
            Ok(Value::Bool(false))
        }
    }

    /// Parse `null`.
    fn parse_null(&mut self) -> JsonResult<Value> {
        self.cursor.expect_literal("null")?;
        Ok(Value::Null)
    }
}

/// Parse JSON text with the default (strict) limits.
pub fn load(text: &str) -> JsonResult<Value> {
    load_with_limits(text, Limits::default())
}

/// Parse JSON text with custom limits.
pub fn load_with_limits(text: &str, limits: Limits) -> JsonResult<Value> {
    let mut parser = Parser::new(text, limits)?;
    parser.parse().map_err(|err| {
        debug!("parse failed after {} bytes: {err}", parser.position());
        err
    })
}

impl FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> JsonResult<Self> {
        load(s)
    }
}
