//! Parser limits and leniency switches.
//!
//! Nesting depth is tracked explicitly so deeply nested input fails with
//! `NestingTooDeep` instead of exhausting the stack.

use serde::{Deserialize, Serialize};

/// Default maximum nesting depth for arrays/objects.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Default maximum input size (64 MiB).
pub const DEFAULT_MAX_INPUT_SIZE: usize = 64 * 1024 * 1024;

/// How `\uXXXX` escapes in strings are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnicodeEscapes {
    /// Decode to the code point; surrogate pairs are combined and lone
    /// surrogates rejected.
    #[default]
    Decode,
    /// Validate the four hex digits and keep the escape as literal text.
    Preserve,
}

/// Limits and switches applied by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum total input size in bytes
    pub max_input_size: usize,
    /// Maximum nesting depth for arrays/objects
    pub max_nesting_depth: usize,
    /// Treatment of `\u` escapes
    pub unicode_escapes: UnicodeEscapes,
    /// Accept non-whitespace after the top-level value
    pub allow_trailing: bool,
}

impl Limits {
    /// Strict defaults: decoded escapes, no trailing content.
    pub const fn strict() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            unicode_escapes: UnicodeEscapes::Decode,
            allow_trailing: false,
        }
    }

    /// Loose mode: escapes kept literally, trailing content ignored,
    /// no input size cap.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_nesting_depth: 512,
            unicode_escapes: UnicodeEscapes::Preserve,
            allow_trailing: true,
        }
    }

    /// Same limits with a different depth cap.
    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::strict()
    }
}
