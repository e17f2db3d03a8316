//! Conversion into logfmt output.
//!
//! This module has two halves:
//!
//! - [`ValueSerializer`], a `serde::Serializer` that turns any
//!   `T: Serialize` into a [`Value`] tree. This is the bridge that lets
//!   [`crate::format`] accept ordinary Rust structs, maps, and sequences.
//! - The rendering pipeline: classify the root, flatten composites into
//!   ordered `(path, leaf)` pairs, and render each pair as a `path=value`
//!   token. The three stages are the private routines below
//!   ([`render_root`], [`flatten`]/[`walk`], [`render_pairs`]).
//!
//! ## Rendering rules
//!
//! - Root scalars emit a single bare token, never quoted.
//! - Paths are dot-joined keys and array indices (`jkl.f.0`), in the
//!   structure's own insertion/index order.
//! - String leaves are double-quoted iff they contain a space. Embedded
//!   quote characters are not escaped; output is grep-friendly text, not a
//!   re-parseable format.
//! - Dates render as ISO-8601 with their own offset and are never quoted.
//! - `null`/`undefined` leaves are bare literals.
//! - Errors are projected into plain `{name, message, ...fields}` maps
//!   wherever they appear; a root error prefixes the output with `ERROR `.
//! - Callable values produce no token at any depth; array indices after a
//!   skipped element keep their original positions.
//! - A value nested past `max_depth` stays a leaf and renders through its
//!   coercion text (`"[object Object]"` for maps).
//! - A self-referential value aborts flattening; the whole call returns
//!   the literal `[Circular]`.

use crate::value::date_text;
use crate::{Error, FormatOptions, Map, Result, Value};
use serde::{ser, Serialize};

const CIRCULAR: &str = "[Circular]";

/// Serde serializer producing a [`Value`] tree instead of text.
///
/// Most callers want [`crate::to_value`] or [`crate::format`]; the type is
/// public for composing with other serde machinery.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_logfmt::ValueSerializer;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = Point { x: 1, y: 2 }.serialize(ValueSerializer).unwrap();
/// assert!(value.is_object());
/// ```
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    name: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: &'static str,
    map: Map,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::from(v as i64))
        } else {
            Ok(Value::from(v as f64))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v.iter().map(|&b| Value::from(b)).collect::<Vec<_>>();
        Ok(Value::from(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        // Externally tagged, like serde_json: {variant: value}.
        let map = Map::new();
        map.insert(variant, to_value(value)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant,
            vec: Vec::new(),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant,
            map: Map::new(),
        })
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: Map::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::from(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::from(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::from(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let map = Map::new();
        map.insert(self.name, Value::from(self.vec));
        Ok(Value::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        // Scalar keys coerce to their text form; composites have no path
        // representation.
        let key = match to_value(key)? {
            Value::String(s) => s,
            Value::Array(_) | Value::Object(_) | Value::Error(_) => {
                return Err(Error::unsupported_type("map keys must be scalar values"))
            }
            scalar => scalar.to_string(),
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let map = Map::new();
        map.insert(self.name, Value::Object(self.map));
        Ok(Value::Object(map))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

// ---------------------------------------------------------------------------
// The pipeline: classify, flatten, render.
// ---------------------------------------------------------------------------

/// Classifies the root value and dispatches to flattening or direct
/// scalar rendering.
pub(crate) fn render_root(value: &Value, options: &FormatOptions) -> String {
    match value {
        Value::Undefined | Value::Null | Value::Callable => String::new(),
        Value::Array(list) if list.is_empty() => "[]".to_string(),
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Error(err) => match flatten(&Value::Object(err.to_map()), err.identity(), options)
        {
            Ok(pairs) => format!("ERROR {}", render_pairs(&pairs)),
            Err(_) => CIRCULAR.to_string(),
        },
        Value::Object(map) => match flatten(value, map.identity(), options) {
            Ok(pairs) => render_pairs(&pairs),
            Err(_) => CIRCULAR.to_string(),
        },
        Value::Array(list) => match flatten(value, list.identity(), options) {
            Ok(pairs) => render_pairs(&pairs),
            Err(_) => CIRCULAR.to_string(),
        },
        Value::Date(dt) => date_text(dt),
        scalar => scalar.to_string(),
    }
}

/// Flattens a composite into ordered `(path, leaf)` pairs.
///
/// `identity` is the root composite's own pointer identity; it seeds the
/// ancestor stack so that a child referring back to the root is caught.
fn flatten(
    root: &Value,
    identity: *const (),
    options: &FormatOptions,
) -> Result<Vec<(String, Value)>> {
    let mut pairs = Vec::new();
    let mut ancestors = vec![identity];
    walk(root, "", 1, &mut ancestors, &mut pairs, options)?;
    Ok(pairs)
}

fn walk(
    value: &Value,
    prefix: &str,
    depth: usize,
    ancestors: &mut Vec<*const ()>,
    pairs: &mut Vec<(String, Value)>,
    options: &FormatOptions,
) -> Result<()> {
    for (key, child) in entries(value) {
        let path = if prefix.is_empty() {
            key
        } else {
            format!("{}.{}", prefix, key)
        };
        visit(child, path, depth, ancestors, pairs, options)?;
    }
    Ok(())
}

/// The enumerable children of a composite. Array indices are rendered in
/// their original positions, so skipped elements leave gaps in the output
/// rather than renumbering what follows.
fn entries(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(map) => map.iter().collect(),
        Value::Array(list) => list
            .iter()
            .enumerate()
            .map(|(index, element)| (index.to_string(), element))
            .collect(),
        _ => Vec::new(),
    }
}

fn visit(
    child: Value,
    path: String,
    depth: usize,
    ancestors: &mut Vec<*const ()>,
    pairs: &mut Vec<(String, Value)>,
    options: &FormatOptions,
) -> Result<()> {
    match child {
        Value::Callable => Ok(()),
        Value::Error(err) => {
            // Hidden diagnostics become plain entries before structural
            // rules apply; the exposure never touches the caller's error.
            let identity = err.identity();
            enter(
                Value::Object(err.to_map()),
                identity,
                path,
                depth,
                ancestors,
                pairs,
                options,
            )
        }
        Value::Object(map) => {
            if map.is_empty() {
                pairs.push((path, Value::Object(map)));
                Ok(())
            } else {
                let identity = map.identity();
                enter(
                    Value::Object(map),
                    identity,
                    path,
                    depth,
                    ancestors,
                    pairs,
                    options,
                )
            }
        }
        Value::Array(list) => {
            if list.is_empty() {
                pairs.push((path, Value::Array(list)));
                Ok(())
            } else {
                let identity = list.identity();
                enter(
                    Value::Array(list),
                    identity,
                    path,
                    depth,
                    ancestors,
                    pairs,
                    options,
                )
            }
        }
        leaf => {
            pairs.push((path, leaf));
            Ok(())
        }
    }
}

/// Descends into a non-empty composite, or keeps it as a leaf once the
/// depth limit is reached. The root's immediate children are at depth 1.
fn enter(
    composite: Value,
    identity: *const (),
    path: String,
    depth: usize,
    ancestors: &mut Vec<*const ()>,
    pairs: &mut Vec<(String, Value)>,
    options: &FormatOptions,
) -> Result<()> {
    let within_limit = options.max_depth.map_or(true, |limit| depth < limit.get());
    if !within_limit {
        pairs.push((path, composite));
        return Ok(());
    }
    if ancestors.contains(&identity) {
        return Err(Error::Circular);
    }
    ancestors.push(identity);
    let outcome = walk(&composite, &path, depth + 1, ancestors, pairs, options);
    ancestors.pop();
    outcome
}

fn render_pairs(pairs: &[(String, Value)]) -> String {
    pairs
        .iter()
        .map(|(path, value)| format!("{}={}", path, leaf_token(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn leaf_token(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Date(dt) => date_text(dt),
        Value::String(s) => apply_quotes(s),
        Value::Array(list) if list.is_empty() => "[]".to_string(),
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        other => apply_quotes(&other.to_string()),
    }
}

#[inline]
fn apply_quotes(text: &str) -> String {
    if text.contains(' ') {
        format!("\"{}\"", text)
    } else {
        text.to_string()
    }
}
