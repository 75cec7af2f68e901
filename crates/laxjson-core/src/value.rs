//! The value tree produced by the parser.
//!
//! A parse yields an [`Object`]: an ordered list of keys, each mapped to an
//! optional [`Value`]. A key can be present without a value (an empty `{}` or
//! `[]`, or a field the lenient parser could not read); [`Object::get`] treats
//! that the same as a missing key, but the key still counts in [`Object::len`]
//! and shows up in iteration and rendering.
//!
//! # Rendering
//!
//! `Display` follows a map-style text form:
//!
//! - an object with one entry renders as that entry's value (unless the value
//!   is an array);
//! - larger objects render as `{k1=v1, k2=v2}`;
//! - arrays render as `[a, b]`;
//! - an empty object renders as nothing at the top and as `null` when nested.

use crate::error::{LaxError, Result};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// Sentinel stored in place of a malformed `null` literal (lenient mode).
pub const INVALID_NULL: &str = "INVALID NULL";

/// Sentinel stored in place of an array with an unsupported element kind
/// (lenient mode).
pub const INVALID_ARRAY: &str = "INVALID ARRAY";

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Object(Object),
    Array(Array),
    String(String),
    /// Array elements, and scalar fields when
    /// [`decode_scalar_numbers`](crate::ParseOptions::decode_scalar_numbers)
    /// is set. Scalar numbers are otherwise kept as [`Value::String`].
    Number(Number),
    /// The `null` literal. Reads as the text `"null"` through [`Value::as_str`].
    Null,
}

/// A homogeneous array. The element kind is fixed by the first element.
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
    Strings(Vec<String>),
    Numbers(Vec<Number>),
    Objects(Vec<Object>),
}

/// An integer or floating-point number, depending on whether the literal had
/// a decimal point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// The variant of a stored value, used in type-mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Object,
    StringArray,
    NumberArray,
    ObjectArray,
    String,
    Number,
    Null,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Object => "object",
            ValueKind::StringArray => "string array",
            ValueKind::NumberArray => "number array",
            ValueKind::ObjectArray => "object array",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Null => "null",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Value
// ============================================================================

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Object,
            Value::Array(Array::Strings(_)) => ValueKind::StringArray,
            Value::Array(Array::Numbers(_)) => ValueKind::NumberArray,
            Value::Array(Array::Objects(_)) => ValueKind::ObjectArray,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Null => ValueKind::Null,
        }
    }

    /// Text view of a string value. `null` reads as `"null"`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Null => Some("null"),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<Array> for Value {
    fn from(arr: Array) -> Self {
        Value::Array(arr)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

// ============================================================================
// Array
// ============================================================================

impl Array {
    pub fn len(&self) -> usize {
        match self {
            Array::Strings(v) => v.len(),
            Array::Numbers(v) => v.len(),
            Array::Objects(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Array::Strings(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_numbers(&self) -> Option<&[Number]> {
        match self {
            Array::Numbers(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_objects(&self) -> Option<&[Object]> {
        match self {
            Array::Objects(v) => Some(v),
            _ => None,
        }
    }
}

// ============================================================================
// Number
// ============================================================================

impl Number {
    /// Decode a literal: a `.` anywhere makes it a float, otherwise an integer.
    pub fn from_literal(literal: &str) -> Option<Number> {
        if literal.contains('.') {
            literal.parse::<f64>().ok().map(Number::Float)
        } else {
            literal.parse::<i64>().ok().map(Number::Int)
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(*n),
            Number::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Float(f) => *f,
        }
    }
}

// ============================================================================
// Object
// ============================================================================

/// Ordered key → value mapping with typed accessors.
///
/// Keys are unique: inserting an existing key replaces its value in place,
/// keeping the key's original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    entries: Vec<(String, Option<Value>)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`. `None` records the key without a value.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<Value>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value stored under `key`. Missing keys and keys without a value both
    /// return `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order, including keys without a value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// String value under `key`; `null` reads as `"null"`.
    pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
        self.typed(key, "string", Value::as_str)
    }

    pub fn get_object(&self, key: &str) -> Result<Option<&Object>> {
        self.typed(key, "object", Value::as_object)
    }

    /// Array of any element kind.
    pub fn get_array(&self, key: &str) -> Result<Option<&Array>> {
        self.typed(key, "array", Value::as_array)
    }

    pub fn get_object_array(&self, key: &str) -> Result<Option<&[Object]>> {
        self.typed(key, "object array", |v| v.as_array()?.as_objects())
    }

    pub fn get_strings(&self, key: &str) -> Result<Option<&[String]>> {
        self.typed(key, "string array", |v| v.as_array()?.as_strings())
    }

    pub fn get_numbers(&self, key: &str) -> Result<Option<&[Number]>> {
        self.typed(key, "number array", |v| v.as_array()?.as_numbers())
    }

    /// Text rendering, or `None` for an empty object.
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &'static str,
        pick: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => pick(value)
                .map(Some)
                .ok_or_else(|| LaxError::TypeMismatch {
                    key: key.to_string(),
                    expected,
                    found: value.kind(),
                }),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Option<Value>)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Option<Value>)>>(iter: I) -> Self {
        let mut obj = Object::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a value in nested position, where absent values and empty objects
/// print as `null`.
fn write_nested(f: &mut fmt::Formatter<'_>, value: Option<&Value>) -> fmt::Result {
    match value {
        None => f.write_str("null"),
        Some(Value::Object(obj)) => write_nested_object(f, obj),
        Some(v) => write!(f, "{v}"),
    }
}

fn write_nested_object(f: &mut fmt::Formatter<'_>, obj: &Object) -> fmt::Result {
    if obj.is_empty() {
        f.write_str("null")
    } else {
        write!(f, "{obj}")
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entries.as_slice() {
            [] => Ok(()),
            [(_, Some(value))] if !matches!(value, Value::Array(_)) => {
                write_nested(f, Some(value))
            }
            entries => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}=")?;
                    write_nested(f, value.as_ref())?;
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        match self {
            Array::Strings(items) => write_list(f, items, |f, s| f.write_str(s))?,
            Array::Numbers(items) => write_list(f, items, |f, n| write!(f, "{n}"))?,
            Array::Objects(items) => write_list(f, items, write_nested_object)?,
        }
        f.write_str("]")
    }
}

fn write_list<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    Ok(())
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            // Keep a fractional digit so 2.0 does not print as an integer.
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Object(obj) => write!(f, "{obj}"),
            Value::Array(arr) => write!(f, "{arr}"),
            Value::String(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
            Value::Null => f.write_str("null"),
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Object(obj) => obj.serialize(serializer),
            Value::Array(arr) => arr.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) => n.serialize(serializer),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        match self {
            Array::Strings(items) => items.iter().try_for_each(|s| seq.serialize_element(s))?,
            Array::Numbers(items) => items.iter().try_for_each(|n| seq.serialize_element(n))?,
            Array::Objects(items) => items.iter().try_for_each(|o| seq.serialize_element(o))?,
        }
        seq.end()
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Number::Int(n) => serializer.serialize_i64(*n),
            Number::Float(x) => serializer.serialize_f64(*x),
        }
    }
}
