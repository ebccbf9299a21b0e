//! The JSON value type.
//!
//! [`Value`] is a sum type: exactly one payload is live at a time, and
//! replacing a value of one kind with another drops the old payload.
//! Objects use a `BTreeMap`, so iteration (and therefore `dump` output) is
//! ordered by key rather than by insertion.

use std::collections::BTreeMap;
use std::fmt;

/// Map type backing JSON objects.
pub type Map = BTreeMap<String, Value>;

/// Discriminant naming which JSON type a [`Value`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `null`
    Null,
    /// `{ ... }`
    Object,
    /// `[ ... ]`
    Array,
    /// `"..."`
    String,
    /// Number with a fraction or exponent
    Float,
    /// Number without fraction or exponent
    Integer,
    /// `true` / `false`
    Boolean,
}

impl Kind {
    /// Lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Float => "float",
            Kind::Integer => "integer",
            Kind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An in-memory JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean
    Bool(bool),
    /// Integral number, stored exactly
    Integer(i64),
    /// IEEE-754 double
    Float(f64),
    /// Owned string
    String(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Key-sorted mapping
    Object(Map),
}

impl Value {
    /// A fresh value of `kind` with an empty or zero payload.
    pub fn make(kind: Kind) -> Self {
        match kind {
            Kind::Null => Value::Null,
            Kind::Object => Value::Object(Map::new()),
            Kind::Array => Value::Array(Vec::new()),
            Kind::String => Value::String(String::new()),
            Kind::Float => Value::Float(0.0),
            Kind::Integer => Value::Integer(0),
            Kind::Boolean => Value::Bool(false),
        }
    }

    /// Empty array.
    pub fn array() -> Self {
        Value::make(Kind::Array)
    }

    /// Empty object.
    pub fn object() -> Self {
        Value::make(Kind::Object)
    }

    /// Build an object from key/value pairs. Later duplicates win.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// The kind currently held.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Switch to `kind` in place.
    ///
    /// Does nothing when the value already has that kind; otherwise the old
    /// payload is dropped and replaced with the empty payload of `kind`.
    pub fn coerce(&mut self, kind: Kind) -> &mut Self {
        if self.kind() != kind {
            *self = Value::make(kind);
        }
        self
    }

    /// Move the payload out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns true for either numeric kind.
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Append to the array, coercing to an array first.
    pub fn push(&mut self, value: impl Into<Value>) {
        if let Value::Array(items) = self.coerce(Kind::Array) {
            items.push(value.into());
        }
    }

    /// Append every item, coercing to an array first.
    pub fn extend_array<T, I>(&mut self, values: I)
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        if let Value::Array(items) = self.coerce(Kind::Array) {
            items.extend(values.into_iter().map(Into::into));
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert!(Value::default().is_null());
        assert_eq!(Value::default().kind(), Kind::Null);
    }

    #[test]
    fn test_make_gives_empty_payloads() {
        assert_eq!(Value::make(Kind::Null), Value::Null);
        assert_eq!(Value::make(Kind::Object), Value::Object(Map::new()));
        assert_eq!(Value::make(Kind::Array), Value::Array(vec![]));
        assert_eq!(Value::make(Kind::String), Value::String(String::new()));
        assert_eq!(Value::make(Kind::Float), Value::Float(0.0));
        assert_eq!(Value::make(Kind::Integer), Value::Integer(0));
        assert_eq!(Value::make(Kind::Boolean), Value::Bool(false));
    }

    #[test]
    fn test_conversions_widen() {
        assert_eq!(Value::from(7u8), Value::Integer(7));
        assert_eq!(Value::from(-7i32), Value::Integer(-7));
        assert_eq!(Value::from(u32::MAX), Value::Integer(4_294_967_295));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("hi"), Value::String("hi".to_string()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::Array(vec![Value::Integer(1), Value::Integer(2)])
        );
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Value::from_pairs([("list", vec![1, 2, 3])]);
        let copy = original.clone();
        if let Value::Object(map) = &mut original {
            map.clear();
        }
        assert_eq!(copy.kind(), Kind::Object);
        assert_eq!(
            copy,
            Value::from_pairs([("list", Value::from(vec![1, 2, 3]))])
        );
    }

    #[test]
    fn test_take_leaves_null() {
        let mut source = Value::from("payload");
        let moved = source.take();
        assert!(source.is_null());
        assert_eq!(moved, Value::from("payload"));
    }

    #[test]
    fn test_coerce_replaces_payload() {
        let mut value = Value::from("text");
        value.coerce(Kind::Array);
        assert_eq!(value, Value::Array(vec![]));

        value.push(1);
        value.coerce(Kind::Array);
        assert_eq!(value, Value::from(vec![1]));
    }

    #[test]
    fn test_from_pairs_last_wins() {
        let value = Value::from_pairs([("a", 1), ("b", 2), ("a", 3)]);
        let mut expected = Map::new();
        expected.insert("a".to_string(), Value::Integer(3));
        expected.insert("b".to_string(), Value::Integer(2));
        assert_eq!(value, Value::Object(expected));
    }

    #[test]
    fn test_push_and_extend_coerce_to_array() {
        let mut value = Value::from(false);
        value.push("x");
        value.extend_array([1, 2]);
        assert_eq!(
            value,
            Value::Array(vec![
                Value::from("x"),
                Value::Integer(1),
                Value::Integer(2)
            ])
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Kind::Null.to_string(), "null");
        assert_eq!(Kind::Object.to_string(), "object");
        assert_eq!(Kind::Float.name(), "float");
        assert_eq!(Kind::Integer.name(), "integer");
        assert_eq!(Kind::Boolean.name(), "boolean");
    }
}
