//! Error handling for jsonlw.
//!
//! Two families share one enum:
//!
//! - structural errors (codes `1xx`) are raised by the parser and carry the
//!   byte offset where the input stopped making sense;
//! - access errors (codes `2xx`) are raised by the strict accessors when a
//!   value is read as the wrong kind or a key/index is absent.
//!
//! Every error is local and recoverable. Nothing in this crate aborts the
//! process.

use thiserror::Error;

use crate::value::Kind;

/// All errors produced by parsing and strict value access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    /// A value started with a character no grammar production accepts.
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedCharacter {
        /// Byte offset of the character
        offset: usize,
        /// The offending character
        found: char,
    },

    /// A delimiter was required but something else was found.
    #[error("expected {expected} at offset {offset}, found '{found}'")]
    Expected {
        /// Byte offset of the character
        offset: usize,
        /// Human-readable description of what was expected
        expected: &'static str,
        /// The character found instead
        found: char,
    },

    /// Input ended in the middle of a value.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd {
        /// Byte offset of the end of input
        offset: usize,
    },

    /// A `true`, `false` or `null` literal was misspelled.
    #[error("malformed literal at offset {offset}, expected '{expected}'")]
    InvalidLiteral {
        /// Byte offset where the literal starts
        offset: usize,
        /// The literal that was expected
        expected: &'static str,
    },

    /// Number text could not be converted.
    #[error("invalid number '{text}' at offset {offset}")]
    InvalidNumber {
        /// Byte offset where the number starts
        offset: usize,
        /// The consumed number text
        text: String,
    },

    /// A `\u` escape was incomplete or named an invalid code point.
    #[error("invalid unicode escape at offset {offset}: {reason}")]
    InvalidUnicodeEscape {
        /// Byte offset of the backslash
        offset: usize,
        /// Why the escape was rejected
        reason: &'static str,
    },

    /// Arrays/objects nested deeper than the configured limit.
    #[error("nesting depth {depth} exceeds limit {limit} at offset {offset}")]
    NestingTooDeep {
        /// Byte offset of the opening bracket
        offset: usize,
        /// Depth that would have been reached
        depth: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Input larger than the configured limit.
    #[error("input of {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge {
        /// Input size in bytes
        size: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Non-whitespace content after the top-level value.
    #[error("trailing characters after document at offset {offset}")]
    TrailingCharacters {
        /// Byte offset of the first trailing character
        offset: usize,
    },

    /// A value was accessed as a kind it does not hold.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind the caller asked for
        expected: Kind,
        /// Kind the value actually holds
        found: Kind,
    },

    /// Strict key lookup on an object that lacks the key.
    #[error("key not found: \"{0}\"")]
    KeyNotFound(String),

    /// Strict index lookup past the end of an array.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Array length
        len: usize,
    },
}

impl JsonError {
    /// Numeric error code: `1xx` structural, `2xx` access.
    pub fn code(&self) -> u32 {
        match self {
            JsonError::UnexpectedCharacter { .. } => 100,
            JsonError::Expected { .. } => 101,
            JsonError::UnexpectedEnd { .. } => 102,
            JsonError::InvalidLiteral { .. } => 103,
            JsonError::InvalidNumber { .. } => 104,
            JsonError::InvalidUnicodeEscape { .. } => 105,
            JsonError::NestingTooDeep { .. } => 110,
            JsonError::InputTooLarge { .. } => 111,
            JsonError::TrailingCharacters { .. } => 112,
            JsonError::TypeMismatch { .. } => 200,
            JsonError::KeyNotFound(_) => 201,
            JsonError::IndexOutOfRange { .. } => 202,
        }
    }

    /// Byte offset into the parsed text, for structural errors.
    pub fn offset(&self) -> Option<usize> {
        match self {
            JsonError::UnexpectedCharacter { offset, .. }
            | JsonError::Expected { offset, .. }
            | JsonError::UnexpectedEnd { offset }
            | JsonError::InvalidLiteral { offset, .. }
            | JsonError::InvalidNumber { offset, .. }
            | JsonError::InvalidUnicodeEscape { offset, .. }
            | JsonError::NestingTooDeep { offset, .. }
            | JsonError::TrailingCharacters { offset } => Some(*offset),
            JsonError::InputTooLarge { .. } => Some(0),
            JsonError::TypeMismatch { .. }
            | JsonError::KeyNotFound(_)
            | JsonError::IndexOutOfRange { .. } => None,
        }
    }

    /// True for errors raised while parsing text.
    pub fn is_structural(&self) -> bool {
        self.code() < 200
    }

    /// True when a value was read as the wrong kind.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, JsonError::TypeMismatch { .. })
    }
}

/// Result type for parsing and strict access.
pub type JsonResult<T> = Result<T, JsonError>;
