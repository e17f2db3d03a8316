//! # serde_logfmt
//!
//! A Serde-compatible formatter that flattens any value into a single line
//! of `key=value` pairs (logfmt style) for structured log output.
//!
//! ## Why logfmt?
//!
//! Logging pipelines often want compact, grep-friendly, line-oriented
//! records rather than full JSON documents. This crate turns arbitrary
//! values, including nested ones, into exactly that:
//!
//! ```text
//! user.id=42 user.name="Ada Lovelace" tags.0=auth tags.1=login
//! ```
//!
//! ## Key Features
//!
//! - **Flattening**: nested maps and sequences become dotted/indexed paths
//!   (`jkl.f.0=4`), in insertion order
//! - **Total**: [`format`] always returns a string and never panics, so it
//!   is safe to call from logging code that must not crash the host
//! - **Cycle-safe**: self-referential values terminate and render as the
//!   literal `[Circular]` instead of recursing forever
//! - **Depth-limited**: an optional `max_depth` collapses deep subtrees to
//!   a placeholder token
//! - **Serde Compatible**: format anything that implements `Serialize`, or
//!   build dynamic [`Value`]s with the [`logval!`] macro
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_logfmt = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Formatting a struct
//!
//! ```rust
//! use serde::Serialize;
//! use serde_logfmt::format;
//!
//! #[derive(Serialize)]
//! struct Request<'a> {
//!     method: &'a str,
//!     path: &'a str,
//!     status: u16,
//!     note: &'a str,
//! }
//!
//! let line = format(&Request {
//!     method: "GET",
//!     path: "/health",
//!     status: 200,
//!     note: "all good",
//! });
//! assert_eq!(line, "method=GET path=/health status=200 note=\"all good\"");
//! ```
//!
//! ### Dynamic values with the logval! macro
//!
//! ```rust
//! use serde_logfmt::{format_value, logval};
//!
//! let line = format_value(&logval!({
//!     "user": { "id": 42, "name": "Ada Lovelace" },
//!     "tags": ["auth", "login"]
//! }));
//! assert_eq!(line, "user.id=42 user.name=\"Ada Lovelace\" tags.0=auth tags.1=login");
//! ```
//!
//! ### Errors
//!
//! Error values expose their diagnostic fields as ordinary pairs. A root
//! error is prefixed with `ERROR `; a nested one flattens under its path:
//!
//! ```rust
//! use serde_logfmt::{format_value, logval, ErrorValue, Value};
//!
//! let err = ErrorValue::new("io.timeout", "Test");
//! assert_eq!(
//!     format_value(&Value::from(err.clone())),
//!     "ERROR name=io.timeout message=Test"
//! );
//! assert_eq!(
//!     format_value(&logval!({ "err": (Value::from(err)) })),
//!     "err.name=io.timeout err.message=Test"
//! );
//! ```
//!
//! ## Output rules
//!
//! - Root scalars render as a single bare token: `format(&42)` is `"42"`,
//!   `format(&"hi there")` is `"hi there"` (root scalars are never quoted)
//! - Absent roots render as the empty string (`None`, unit)
//! - String leaves inside a structure are double-quoted only when they
//!   contain a space; embedded quotes are not escaped (the output is
//!   grep-friendly text, not a re-parseable format)
//! - Dates render as ISO-8601 with their own UTC offset, never quoted
//! - Empty composites render as the literal `[]` / `{}`
//! - The output is a single line with no trailing newline
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the formatting path; even a panicking `Display`
//!   implementation on an opaque value is contained and rendered as `{}`
//! - Inputs are never mutated; formatting an error value leaves its
//!   own fields and type intact

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use map::{List, Map};
pub use options::FormatOptions;
pub use ser::ValueSerializer;
pub use value::{ErrorValue, Kind, Number, Value};

use serde::Serialize;

/// Formats any `T: Serialize` as a single logfmt line.
///
/// This function is total: it always returns a string. A value with no
/// logfmt representation (for example a map with composite keys) renders
/// as the literal `{}` fallback; use [`to_value`] to see why a conversion
/// failed.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::format;
/// use std::collections::BTreeMap;
///
/// assert_eq!(format(&42), "42");
/// assert_eq!(format(&true), "true");
/// assert_eq!(format(&"Hello, World!"), "Hello, World!");
/// assert_eq!(format(&None::<u32>), "");
///
/// let mut map = BTreeMap::new();
/// map.insert("x", vec![4, 5]);
/// assert_eq!(format(&map), "x.0=4 x.1=5");
/// ```
#[must_use]
pub fn format<T>(value: &T) -> String
where
    T: ?Sized + Serialize,
{
    format_with_options(value, FormatOptions::default())
}

/// Formats any `T: Serialize` as a single logfmt line with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{format_with_options, FormatOptions};
/// use serde_json::json;
///
/// let value = json!({ "foo": { "bar": { "baz": 1 } } });
///
/// let capped = FormatOptions::new().with_max_depth(2);
/// assert_eq!(
///     format_with_options(&value, capped),
///     "foo.bar=\"[object Object]\""
/// );
/// assert_eq!(
///     format_with_options(&value, FormatOptions::new()),
///     "foo.bar.baz=1"
/// );
/// ```
#[must_use]
pub fn format_with_options<T>(value: &T, options: FormatOptions) -> String
where
    T: ?Sized + Serialize,
{
    match to_value(value) {
        Ok(value) => format_value_with_options(&value, options),
        Err(_) => String::from("{}"),
    }
}

/// Formats a dynamic [`Value`] as a single logfmt line.
///
/// Prefer this over [`format`] when you already hold a [`Value`]: it
/// preserves the date, pattern, and error kinds that a round trip through
/// Serde would reduce to strings and maps.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{format_value, Value};
///
/// assert_eq!(format_value(&Value::Null), "");
/// assert_eq!(format_value(&Value::pattern("^foobar$")), "/^foobar$/");
/// ```
#[must_use]
pub fn format_value(value: &Value) -> String {
    format_value_with_options(value, FormatOptions::default())
}

/// Formats a dynamic [`Value`] as a single logfmt line with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{format_value_with_options, logval, FormatOptions};
///
/// let value = logval!({ "a": { "b": { "c": true } } });
/// let options = FormatOptions::new().with_max_depth(10);
/// assert_eq!(format_value_with_options(&value, options), "a.b.c=true");
/// ```
#[must_use]
pub fn format_value_with_options(value: &Value, options: FormatOptions) -> String {
    ser::render_root(value, &options)
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// This is the fallible half of [`format`]: it reports why a value cannot
/// be expressed in the logfmt value model instead of falling back to `{}`.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_logfmt::{to_value, Value};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
