//! Accessors and mutators on [`Value`].
//!
//! Reading and writing are separate calls:
//!
//! - `get` / `get_index` observe and return `Option`;
//! - `at` / `at_index` observe and return a typed [`JsonError`];
//! - `get_or_insert` / `get_or_insert_index` mutate, coercing the value to
//!   the container kind and creating missing slots. They never fail.
//!
//! `Index` returns a shared `Null` for anything absent. `IndexMut` forwards
//! to the auto-vivifying mutators, so `v["k"] = x.into()` and
//! `v[3] = x.into()` work on any value.

use std::collections::btree_map;
use std::ops::{Index, IndexMut};
use std::slice;

use crate::error::{JsonError, JsonResult};
use crate::value::{Kind, Map, Value};

static NULL: Value = Value::Null;

impl Value {
    fn mismatch(&self, expected: Kind) -> JsonError {
        JsonError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Look up `key` if this is an object containing it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Mutable form of [`Value::get`]. Never inserts.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.get_mut(key),
            _ => None,
        }
    }

    /// Element at `index` if this is an array that long.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Mutable form of [`Value::get_index`]. Never extends.
    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    /// Strict key lookup.
    ///
    /// Fails with `TypeMismatch` unless this is an object, and with
    /// `KeyNotFound` when the key is absent.
    pub fn at(&self, key: &str) -> JsonResult<&Value> {
        match self {
            Value::Object(map) => map
                .get(key)
                .ok_or_else(|| JsonError::KeyNotFound(key.to_string())),
            _ => Err(self.mismatch(Kind::Object)),
        }
    }

    /// Strict index lookup.
    ///
    /// Fails with `TypeMismatch` unless this is an array, and with
    /// `IndexOutOfRange` past the end.
    pub fn at_index(&self, index: usize) -> JsonResult<&Value> {
        match self {
            Value::Array(items) => items.get(index).ok_or(JsonError::IndexOutOfRange {
                index,
                len: items.len(),
            }),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    /// Mutable reference to the entry for `key`, creating it as `Null`.
    ///
    /// A non-object value is replaced by an empty object first.
    pub fn get_or_insert(&mut self, key: &str) -> &mut Value {
        self.coerce(Kind::Object);
        match self {
            Value::Object(map) => map.entry(key.to_string()).or_default(),
            // coerce() guarantees an object; this arm only satisfies the match
            other => other,
        }
    }

    /// Mutable reference to the element at `index`, padding with `Null`.
    ///
    /// A non-array value is replaced by an empty array first. Indices too
    /// large to allocate for abort with the allocator's capacity overflow.
    pub fn get_or_insert_index(&mut self, index: usize) -> &mut Value {
        self.coerce(Kind::Array);
        match self {
            Value::Array(items) => {
                if index >= items.len() {
                    items.resize(index.saturating_add(1), Value::Null);
                }
                &mut items[index]
            }
            other => other,
        }
    }

    /// Insert into the object, coercing to an object first.
    ///
    /// Returns the previous value for `key`, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        match self.coerce(Kind::Object) {
            Value::Object(map) => map.insert(key.into(), value.into()),
            _ => None,
        }
    }

    /// Remove `key` from an object. Other kinds are left untouched.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.remove(key),
            _ => None,
        }
    }

    /// True only for an object that contains `key`.
    pub fn has_key(&self, key: &str) -> bool {
        matches!(self, Value::Object(map) if map.contains_key(key))
    }

    /// Number of elements, for arrays only.
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Number of elements or entries, for arrays and objects.
    pub fn size(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::Object(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an Integer, None otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float if this is a Float, None otherwise.
    ///
    /// Integers are not converted; use [`Value::as_number`] for that.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Either numeric kind as `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable string buffer.
    pub fn as_string_mut(&mut self) -> Option<&mut String> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable array payload.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable object payload.
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Strict string read.
    pub fn try_str(&self) -> JsonResult<&str> {
        self.as_str().ok_or_else(|| self.mismatch(Kind::String))
    }

    /// Strict float read. Integers are a mismatch.
    pub fn try_f64(&self) -> JsonResult<f64> {
        self.as_f64().ok_or_else(|| self.mismatch(Kind::Float))
    }

    /// Strict integer read. Floats are a mismatch.
    pub fn try_i64(&self) -> JsonResult<i64> {
        self.as_i64().ok_or_else(|| self.mismatch(Kind::Integer))
    }

    /// Strict boolean read.
    pub fn try_bool(&self) -> JsonResult<bool> {
        self.as_bool().ok_or_else(|| self.mismatch(Kind::Boolean))
    }

    /// Lossy string read: `""` on a kind mismatch.
    pub fn str_or_default(&self) -> &str {
        self.as_str().unwrap_or_default()
    }

    /// Lossy float read: `0.0` on a kind mismatch.
    pub fn f64_or_default(&self) -> f64 {
        self.as_f64().unwrap_or_default()
    }

    /// Lossy integer read: `0` on a kind mismatch.
    pub fn i64_or_default(&self) -> i64 {
        self.as_i64().unwrap_or_default()
    }

    /// Lossy boolean read: `false` on a kind mismatch.
    pub fn bool_or_default(&self) -> bool {
        self.as_bool().unwrap_or_default()
    }

    /// Iterate object entries in key order, without copying.
    pub fn object_range(&self) -> Option<btree_map::Iter<'_, String, Value>> {
        self.as_object().map(Map::iter)
    }

    /// Mutable object iteration.
    pub fn object_range_mut(&mut self) -> Option<btree_map::IterMut<'_, String, Value>> {
        self.as_object_mut().map(Map::iter_mut)
    }

    /// Iterate array elements in order, without copying.
    pub fn array_range(&self) -> Option<slice::Iter<'_, Value>> {
        self.as_array().map(|items| items.iter())
    }

    /// Mutable array iteration.
    pub fn array_range_mut(&mut self) -> Option<slice::IterMut<'_, Value>> {
        self.as_array_mut().map(|items| items.iter_mut())
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for Value {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.get_or_insert(key)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        self.get_or_insert_index(index)
    }
}
