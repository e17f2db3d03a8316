//! Dynamic value representation for logfmt formatting.
//!
//! This module provides the [`Value`] enum which represents any value the
//! formatter accepts. It is the closed set of runtime kinds the classifier
//! dispatches on: every value is exactly one variant, so the formatting
//! rules are exhaustive and checked by the compiler.
//!
//! ## Core Types
//!
//! - [`Value`]: any formattable value (null, undefined, bool, number,
//!   bigint, string, pattern, date, error, callable, opaque, array, object)
//! - [`Number`]: numeric values including the JavaScript-style specials
//!   (Infinity, -Infinity, NaN)
//! - [`ErrorValue`]: an error's diagnostic fields (name, message, extras)
//! - [`Kind`]: the copyable tag for a value's runtime kind
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_logfmt::Value;
//!
//! // From primitives
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the logval! macro
//! use serde_logfmt::logval;
//! let obj = logval!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use serde_logfmt::{Kind, Value};
//!
//! let value = Value::from(42);
//! assert!(value.is_number());
//! assert_eq!(value.kind(), Kind::Number);
//! ```
//!
//! ### Coercion text
//!
//! `Value` implements [`Display`](std::fmt::Display) with the string
//! coercion the renderer falls back on for leaves: arrays join their
//! elements with commas, maps become the `[object Object]` placeholder,
//! patterns print in `/source/` form.
//!
//! ```rust
//! use serde_logfmt::{logval, Value};
//!
//! assert_eq!(logval!([4, "life"]).to_string(), "4,life");
//! assert_eq!(logval!({"a": 1}).to_string(), "[object Object]");
//! assert_eq!(Value::pattern("^foobar$").to_string(), "/^foobar$/");
//! ```

use crate::{List, Map};
use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, TimeZone};
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

/// A dynamically-typed representation of any formattable value.
///
/// The variant set is the complete kind taxonomy of the formatter: a value
/// always matches exactly one rendering rule. Composites ([`Value::Array`],
/// [`Value::Object`]) hold shared handles, so self-referential structures
/// can be built; the formatter detects them and reports `[Circular]`.
///
/// Two variants exist for fidelity with the dynamic payloads this format
/// serves: [`Value::Undefined`] (an absent value, rendered `undefined` when
/// nested and empty at the root, distinct from `Null`) and
/// [`Value::Callable`] (a function-typed input; contributes no output
/// token at any depth).
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    Undefined,
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    BigInt(BigInt),
    String(String),
    /// A regular-expression pattern, stored as its source text (without
    /// the surrounding slashes).
    Pattern(String),
    /// A calendar timestamp with a fixed UTC offset.
    Date(DateTime<FixedOffset>),
    /// An error and its diagnostic fields.
    Error(ErrorValue),
    /// A function-typed input. Skipped entirely by the formatter.
    Callable,
    /// A host value carrying nothing but a `Display` implementation.
    Opaque(OpaqueValue),
    Array(List),
    Object(Map),
}

/// The runtime kind of a [`Value`], as a copyable tag.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{Kind, Value};
///
/// assert_eq!(Value::Null.kind(), Kind::Null);
/// assert_eq!(Value::from("x").kind(), Kind::String);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Number,
    BigInt,
    String,
    Pattern,
    Date,
    Error,
    Callable,
    Opaque,
    Array,
    Object,
}

/// A numeric value that can be an integer, float, or JavaScript-style
/// special value.
///
/// The special variants exist so that non-finite values keep their
/// conventional text (`Infinity`, `-Infinity`, `NaN`) instead of Rust's
/// `inf`/`NaN` float formatting; [`Number::from`] normalizes non-finite
/// `f64`s into them.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(4.25).to_string(), "4.25");
/// assert_eq!(Number::from(f64::INFINITY).to_string(), "Infinity");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a special value (Infinity, -Infinity, or NaN).
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and for floats with no fractional
    /// part that fit in `i64` range. Returns `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Infinity.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }
}

/// An error's diagnostic fields: a name, a message, and any number of
/// additional fields.
///
/// Host errors normally hide `name` and `message` from generic field
/// enumeration; this type holds them explicitly, and
/// [`ErrorValue::to_map`] is the read-only projection the formatter uses
/// to treat them as ordinary entries. The projection builds a fresh,
/// transient [`Map`] each time and never mutates the error it was built
/// from, so formatting an error leaves it observably intact.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{format_value, ErrorValue, Value};
///
/// let err = ErrorValue::new("io.timeout", "connection timed out")
///     .with_field("code", 110);
/// assert_eq!(
///     format_value(&Value::from(err)),
///     "ERROR name=io.timeout message=\"connection timed out\" code=110"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorValue {
    name: String,
    message: String,
    fields: Map,
}

impl ErrorValue {
    /// Creates an error value from a name and a message.
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorValue {
            name: name.into(),
            message: message.into(),
            fields: Map::new(),
        }
    }

    /// Attaches an additional diagnostic field (for example `code` or
    /// `cause`). Fields flatten after `name` and `message`, in insertion
    /// order.
    #[must_use]
    pub fn with_field(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// The error's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The error's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The additional diagnostic fields.
    #[must_use]
    pub fn fields(&self) -> &Map {
        &self.fields
    }

    /// Projects the error into a plain map of `{name, message}` plus the
    /// additional fields, as if they were ordinary enumerable entries.
    ///
    /// Returns a new transient map; the error itself is not modified.
    #[must_use]
    pub fn to_map(&self) -> Map {
        let map = Map::new();
        map.insert("name", self.name.clone());
        map.insert("message", self.message.clone());
        for (key, value) in self.fields.iter() {
            map.insert(key, value);
        }
        map
    }

    /// Cycle identity: the projection is rebuilt on every visit, so the
    /// error's shared field storage is what identifies it as an ancestor.
    pub(crate) fn identity(&self) -> *const () {
        self.fields.identity()
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

impl<'a> From<&'a dyn std::error::Error> for ErrorValue {
    /// Captures a std error's message, recording its `source()` (when
    /// present) under a `cause` field.
    fn from(err: &'a dyn std::error::Error) -> Self {
        let value = ErrorValue::new("Error", err.to_string());
        if let Some(source) = err.source() {
            value.fields.insert("cause", source.to_string());
        }
        value
    }
}

/// A host value the formatter knows nothing about except how to print it.
///
/// The wrapped `Display` implementation is caller code; if it panics while
/// printing, the panic is contained and the value renders as the literal
/// `{}` fallback instead of unwinding through the logging call site.
#[derive(Clone)]
pub struct OpaqueValue(Rc<dyn fmt::Display>);

impl OpaqueValue {
    pub(crate) fn new(value: impl fmt::Display + 'static) -> Self {
        OpaqueValue(Rc::new(value))
    }

    pub(crate) fn text(&self) -> String {
        catch_unwind(AssertUnwindSafe(|| self.0.to_string()))
            .unwrap_or_else(|_| String::from("{}"))
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({})", self.text())
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub(crate) fn date_text(date: &DateTime<FixedOffset>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, false)
}

impl Value {
    /// Creates a pattern value from regular-expression source text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::Value;
    ///
    /// let pattern = Value::pattern("^foobar$");
    /// assert_eq!(pattern.to_string(), "/^foobar$/");
    /// ```
    #[must_use]
    pub fn pattern(source: impl Into<String>) -> Self {
        Value::Pattern(source.into())
    }

    /// Wraps an arbitrary displayable host value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::{format_value, Value};
    /// use std::net::Ipv4Addr;
    ///
    /// let addr = Value::opaque(Ipv4Addr::new(127, 0, 0, 1));
    /// assert_eq!(format_value(&addr), "127.0.0.1");
    /// ```
    #[must_use]
    pub fn opaque(value: impl fmt::Display + 'static) -> Self {
        Value::Opaque(OpaqueValue::new(value))
    }

    /// Returns this value's runtime kind tag.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::BigInt(_) => Kind::BigInt,
            Value::String(_) => Kind::String,
            Value::Pattern(_) => Kind::Pattern,
            Value::Date(_) => Kind::Date,
            Value::Error(_) => Kind::Error,
            Value::Callable => Kind::Callable,
            Value::Opaque(_) => Kind::Opaque,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is undefined.
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a pattern.
    #[inline]
    #[must_use]
    pub const fn is_pattern(&self) -> bool {
        matches!(self, Value::Pattern(_))
    }

    /// Returns `true` if the value is a date.
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Returns `true` if the value is an error.
    #[inline]
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the value is an array or an object.
    #[inline]
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an i64 integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a handle to it.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<List> {
        match self {
            Value::Array(list) => Some(list.clone()),
            _ => None,
        }
    }

    /// If the value is an object, returns a handle to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<Map> {
        match self {
            Value::Object(map) => Some(map.clone()),
            _ => None,
        }
    }

    /// If the value is a date, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value is an error, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// The string-coercion text the renderer uses for leaves that are
    /// neither strings, dates, nor null/undefined: arrays join their
    /// element texts with commas (null, undefined, and callable elements
    /// contribute empty text), maps print the `[object Object]`
    /// placeholder, and everything else prints its natural form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::BigInt(bi) => write!(f, "{}", bi),
            Value::String(s) => write!(f, "{}", s),
            Value::Pattern(p) => write!(f, "/{}/", p),
            Value::Date(dt) => write!(f, "{}", date_text(dt)),
            Value::Error(err) => write!(f, "{}", err),
            Value::Callable => Ok(()),
            Value::Opaque(o) => write!(f, "{}", o.text()),
            Value::Array(list) => {
                let parts: Vec<String> = list
                    .iter()
                    .map(|element| match element {
                        Value::Undefined | Value::Null | Value::Callable => String::new(),
                        other => other.to_string(),
                    })
                    .collect();
                write!(f, "{}", parts.join(","))
            }
            Value::Object(_) => write!(f, "[object Object]"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Undefined | Value::Null | Value::Callable => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(fl)) => serializer.serialize_f64(*fl),
            Value::Number(Number::Infinity) => serializer.serialize_f64(f64::INFINITY),
            Value::Number(Number::NegativeInfinity) => {
                serializer.serialize_f64(f64::NEG_INFINITY)
            }
            Value::Number(Number::NaN) => serializer.serialize_f64(f64::NAN),
            Value::BigInt(bi) => serializer.serialize_str(&bi.to_string()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Pattern(p) => serializer.serialize_str(&format!("/{}/", p)),
            Value::Date(dt) => serializer.serialize_str(&date_text(dt)),
            Value::Opaque(o) => serializer.serialize_str(&o.text()),
            Value::Error(err) => {
                use serde::ser::SerializeMap;
                let projected = err.to_map();
                let mut map = serializer.serialize_map(Some(projected.len()))?;
                for (key, value) in projected.iter() {
                    map.serialize_entry(&key, &value)?;
                }
                map.end()
            }
            Value::Array(list) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for element in list.iter() {
                    seq.serialize_element(&element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (key, value) in obj.iter() {
                    map.serialize_entry(&key, &value)?;
                }
                map.end()
            }
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(List::from(value))
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl From<ErrorValue> for Value {
    fn from(value: ErrorValue) -> Self {
        Value::Error(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    /// Keeps the timestamp's own offset rather than converting to UTC.
    fn from(value: DateTime<Tz>) -> Self {
        let offset = value.offset().fix();
        Value::Date(value.with_timezone(&offset))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` maps to [`Value::Null`].
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logval;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(Number::Integer(42)));
        assert_eq!(Value::from(42i64), Value::Number(Number::Integer(42)));
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(
            Value::from("test".to_string()),
            Value::String("test".to_string())
        );
    }

    #[test]
    fn test_from_normalizes_non_finite_floats() {
        assert_eq!(Value::from(f64::INFINITY), Value::Number(Number::Infinity));
        assert_eq!(
            Value::from(f64::NEG_INFINITY),
            Value::Number(Number::NegativeInfinity)
        );
        assert_eq!(Value::from(f64::NAN), Value::Number(Number::NaN));
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(Some(7)), Value::from(7));
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(Value::Undefined.kind(), Kind::Undefined);
        assert_eq!(Value::Callable.kind(), Kind::Callable);
        assert_eq!(Value::pattern("x").kind(), Kind::Pattern);
        assert_eq!(logval!([]).kind(), Kind::Array);
        assert_eq!(logval!({}).kind(), Kind::Object);
    }

    #[test]
    fn test_display_coercion() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::pattern("^a b$").to_string(), "/^a b$/");
        assert_eq!(logval!({"a": 1}).to_string(), "[object Object]");
        // Array coercion joins element text; null-like elements are blank.
        assert_eq!(logval!([4, "life"]).to_string(), "4,life");
        assert_eq!(logval!([1, null, undefined, 2]).to_string(), "1,,,2");
        assert_eq!(logval!([[1, 2], 3]).to_string(), "1,2,3");
        assert_eq!(logval!([{}]).to_string(), "[object Object]");
    }

    #[test]
    fn test_error_display() {
        let err = ErrorValue::new("RangeError", "out of bounds");
        assert_eq!(err.to_string(), "RangeError: out of bounds");
        let bare = ErrorValue::new("RangeError", "");
        assert_eq!(bare.to_string(), "RangeError");
    }

    #[test]
    fn test_error_projection_order_and_isolation() {
        let err = ErrorValue::new("e", "m").with_field("code", 7);
        let projected = err.to_map();
        assert_eq!(
            projected.keys(),
            vec!["name".to_string(), "message".to_string(), "code".to_string()]
        );
        // The projection is a fresh map; editing it leaves the error alone.
        projected.insert("name", "clobbered");
        assert_eq!(err.name(), "e");
        assert_eq!(err.fields().len(), 1);
    }

    #[test]
    fn test_error_from_std_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = ErrorValue::from(&io_err as &dyn std::error::Error);
        assert_eq!(err.name(), "Error");
        assert_eq!(err.message(), "timed out");
    }

    #[test]
    fn test_date_from_preserves_offset() {
        let parsed = DateTime::parse_from_rfc3339("2016-06-21T08:37:16-04:00").unwrap();
        let value = Value::from(parsed);
        assert_eq!(value.to_string(), "2016-06-21T08:37:16-04:00");
    }

    #[test]
    fn test_opaque_panic_is_contained() {
        struct Hostile;
        impl fmt::Display for Hostile {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("no primitive form")
            }
        }
        assert_eq!(Value::opaque(Hostile).to_string(), "{}");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(42).as_i64(), Some(42));
        assert_eq!(Value::from(42).as_f64(), Some(42.0));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert!(Value::from("x").as_bool().is_none());
        assert!(logval!([1]).as_array().is_some());
        assert!(logval!({}).as_object().is_some());
        assert!(logval!({}).is_composite());
        assert!(!Value::Null.is_composite());
    }
}
