//! Ordered map type for LookML mappings.
//!
//! [`LookmlMap`] wraps [`IndexMap`] so that keys iterate in declaration order. The
//! builder emits nodes in exactly this order, which keeps rendered output stable and
//! lets plural expansions land where the plural key was declared.
//!
//! Equality ignores order, matching how the visitor reconstructs a block: a block's
//! `name` field comes back as the last key of its body.
//!
//! ## Examples
//!
//! ```rust
//! use lookml_tree::{LookmlMap, Value};
//!
//! let mut map = LookmlMap::new();
//! map.insert("sql_table_name".to_string(), Value::from("orders"));
//! map.insert("label".to_string(), Value::from("Orders"));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["sql_table_name", "label"]);
//! ```

use indexmap::IndexMap;

use crate::Value;

/// An insertion-ordered map of string keys to [`Value`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct LookmlMap(IndexMap<String, Value>);

impl LookmlMap {
    /// Creates an empty `LookmlMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lookml_tree::LookmlMap;
    ///
    /// let map = LookmlMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        LookmlMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        LookmlMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// An existing key keeps its position and has its value replaced; the old value is
    /// returned.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Default for LookmlMap {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for LookmlMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LookmlMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for LookmlMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        LookmlMap(IndexMap::from_iter(iter))
    }
}
