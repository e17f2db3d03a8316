//! Ordered collection handles for logfmt values.
//!
//! This module provides [`Map`] and [`List`], the composite building blocks
//! of [`Value`](crate::Value). Both are cheaply-cloneable handles backed by
//! shared storage (`Rc<RefCell<...>>`): cloning a `Map` or `List` yields a
//! second handle to the same entries, the way object references behave in
//! the dynamic log payloads this crate models. That sharing is what makes
//! self-referential values constructible at all, and the formatter's cycle
//! detector reports them as `[Circular]` instead of recursing forever.
//!
//! `Map` preserves insertion order (it wraps [`IndexMap`]), so formatted
//! output is deterministic and fields appear in the order they were added.
//!
//! ## Examples
//!
//! ```rust
//! use serde_logfmt::{format_value, Map, Value};
//!
//! let map = Map::new();
//! map.insert("name", "Alice");
//! map.insert("age", 30);
//! assert_eq!(format_value(&Value::from(map)), "name=Alice age=30");
//! ```
//!
//! A cycle terminates with the distinguished marker:
//!
//! ```rust
//! use serde_logfmt::{format_value, Map, Value};
//!
//! let a = Map::new();
//! let b = Map::new();
//! a.insert("b", b.clone());
//! b.insert("a", a.clone());
//! assert_eq!(format_value(&Value::from(a)), "[Circular]");
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// An insertion-ordered map of string keys to logfmt values.
///
/// `Map` is a handle: `clone` is cheap and the clone shares storage with
/// the original, so mutation through any handle is visible through all of
/// them. Accessors return owned [`Value`]s (scalars are copied, composites
/// are further handles).
///
/// Structural operations (`PartialEq`, `Debug`) recurse through the
/// entries; do not call them on values that contain themselves.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{Map, Value};
///
/// let map = Map::new();
/// map.insert("first", 1);
/// map.insert("second", 2);
///
/// // Iteration maintains insertion order.
/// assert_eq!(map.keys(), vec!["first".to_string(), "second".to_string()]);
/// ```
#[derive(Clone, Default)]
pub struct Map {
    entries: Rc<RefCell<IndexMap<String, Value>>>,
}

impl Map {
    /// Creates an empty `Map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::Map;
    ///
    /// let map = Map::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map {
            entries: Rc::new(RefCell::new(IndexMap::with_capacity(capacity))),
        }
    }

    /// Inserts a key-value pair, returning the previous value for the key
    /// if there was one. A re-inserted key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::{Map, Value};
    ///
    /// let map = Map::new();
    /// assert!(map.insert("key", 42).is_none());
    /// assert_eq!(map.insert("key", 43), Some(Value::from(42)));
    /// ```
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.borrow_mut().insert(key.into(), value.into())
    }

    /// Returns the value for `key`, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::{Map, Value};
    ///
    /// let map = Map::new();
    /// map.insert("key", 42);
    /// assert_eq!(map.get("key"), Some(Value::from(42)));
    /// assert_eq!(map.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    /// Removes the value for `key`, returning it if it was present.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries.borrow_mut().shift_remove(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Returns the keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    ///
    /// The pairs are snapshotted when the iterator is created; mutating the
    /// map afterwards does not affect an iterator already obtained.
    pub fn iter(&self) -> std::vec::IntoIter<(String, Value)> {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Pointer identity of the shared storage, used by the flattener to
    /// recognize a composite it is already inside of.
    pub(crate) fn identity(&self) -> *const () {
        Rc::as_ptr(&self.entries).cast()
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.entries, &other.entries) {
            return true;
        }
        *self.entries.borrow() == *other.entries.borrow()
    }
}

impl From<HashMap<String, Value>> for Map {
    fn from(map: HashMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Map {
            entries: Rc::new(RefCell::new(IndexMap::from_iter(iter))),
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An ordered list of logfmt values.
///
/// Like [`Map`], `List` is a cheaply-cloneable handle over shared storage.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{format_value, List, Value};
///
/// let list = List::new();
/// list.push("this");
/// list.push("is");
/// list.push("a test");
/// assert_eq!(format_value(&Value::from(list)), "0=this 1=is 2=\"a test\"");
/// ```
#[derive(Clone, Default)]
pub struct List {
    items: Rc<RefCell<Vec<Value>>>,
}

impl List {
    /// Creates an empty `List`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value.
    pub fn push(&self, value: impl Into<Value>) {
        self.items.borrow_mut().push(value.into());
    }

    /// Returns the value at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.items.borrow().get(index).cloned()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if the list contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Returns an iterator over the elements, snapshotted at call time.
    pub fn iter(&self) -> std::vec::IntoIter<Value> {
        self.items.borrow().clone().into_iter()
    }

    pub(crate) fn identity(&self) -> *const () {
        Rc::as_ptr(&self.items).cast()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.items, &other.items) {
            return true;
        }
        *self.items.borrow() == *other.items.borrow()
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        List {
            items: Rc::new(RefCell::new(items)),
        }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        List::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
