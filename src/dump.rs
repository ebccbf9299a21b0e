//! Pretty-printing serializer.
//!
//! Objects put one `"key" : value` pair per line, indented by
//! `depth × indent`, and close one level shallower. Arrays stay on one line
//! with `, ` separators. Keys come out in map order (sorted).
//!
//! Floats use the shortest text that reads back to the same `f64` and always
//! carry a `.` or an exponent, so they stay floats when re-parsed.
//! Non-finite floats have no JSON form and are written as `null`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Default indent unit (four spaces).
pub const DEFAULT_INDENT: &str = "    ";

/// Serializer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpOptions {
    /// String repeated once per nesting level
    pub indent: String,
    /// Depth the top-level value is printed at
    pub depth: usize,
}

impl DumpOptions {
    /// Indent with `width` spaces.
    pub fn spaces(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
            ..Self::default()
        }
    }

    /// Indent with one tab per level.
    pub fn tabs() -> Self {
        Self {
            indent: "\t".to_string(),
            ..Self::default()
        }
    }
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            depth: 1,
        }
    }
}

/// Serialize `value` starting at `depth`, indenting with `indent`.
pub fn dump(value: &Value, depth: usize, indent: &str) -> String {
    let mut output = String::new();
    write_value(value, depth, indent, &mut output);
    output
}

/// Escape `s` for use between JSON quotes.
///
/// Non-ASCII text is left as is.
pub fn escape(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    escape_into(s, &mut output);
    output
}

fn escape_into(s: &str, output: &mut String) {
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            // Other control characters as \u00XX
            c if c < '\x20' => output.push_str(&format!("\\u{:04x}", c as u32)),
            c => output.push(c),
        }
    }
}

fn push_indent(indent: &str, times: usize, output: &mut String) {
    for _ in 0..times {
        output.push_str(indent);
    }
}

fn write_value(value: &Value, depth: usize, indent: &str, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Integer(n) => output.push_str(&n.to_string()),
        Value::Float(x) => write_float(*x, output),
        Value::String(s) => write_string(s, output),
        Value::Array(items) => {
            output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                write_value(item, depth + 1, indent, output);
            }
            output.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                output.push_str("{}");
                return;
            }
            output.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    output.push_str(",\n");
                }
                push_indent(indent, depth, output);
                write_string(key, output);
                output.push_str(" : ");
                write_value(item, depth + 1, indent, output);
            }
            output.push('\n');
            push_indent(indent, depth.saturating_sub(1), output);
            output.push('}');
        }
    }
}

fn write_string(s: &str, output: &mut String) {
    output.push('"');
    escape_into(s, output);
    output.push('"');
}

fn write_float(x: f64, output: &mut String) {
    if !x.is_finite() {
        output.push_str("null");
        return;
    }
    // Debug formatting is shortest-round-trip and keeps a ".0" or exponent
    output.push_str(&format!("{x:?}"));
}

impl Value {
    /// Pretty-print at depth 1 with the default four-space indent.
    pub fn dump(&self) -> String {
        dump(self, 1, DEFAULT_INDENT)
    }

    /// Pretty-print with an explicit depth and indent unit.
    pub fn dump_with(&self, depth: usize, indent: &str) -> String {
        dump(self, depth, indent)
    }

    /// Pretty-print with [`DumpOptions`].
    pub fn dump_options(&self, options: &DumpOptions) -> String {
        dump(self, options.depth, &options.indent)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}
