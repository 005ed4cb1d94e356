//! Ordered map type for TOON mappings.
//!
//! This module provides [`Mapping`], a wrapper around [`IndexMap`] that maintains
//! insertion order for mapping entries. Order is part of the data: the encoder emits
//! entries exactly in the order they were inserted and never sorts them.
//!
//! ## Examples
//!
//! ```rust
//! use toon_encoder::{Mapping, Node};
//!
//! let mut map = Mapping::new();
//! map.insert("name", Node::from("Alice"));
//! map.insert("age", Node::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Node;
use indexmap::IndexMap;

/// An insertion-ordered map of string keys to nodes.
///
/// Keys are unique. Re-inserting an existing key replaces its value but keeps the key
/// in its original position.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::{Mapping, Node};
///
/// let mut map = Mapping::new();
/// map.insert("z", Node::from(1));
/// map.insert("a", Node::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["z", "a"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mapping(IndexMap<String, Node>);

/// Entry order is part of the value: two mappings are equal only if they hold the same
/// entries in the same order, which is exactly when they encode identically.
///
/// ```rust
/// use toon_encoder::node;
///
/// assert_ne!(node!({ "z": 1, "a": 2 }), node!({ "a": 2, "z": 1 }));
/// ```
impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Mapping {
    /// Creates an empty `Mapping`.
    #[must_use]
    pub fn new() -> Self {
        Mapping(IndexMap::new())
    }

    /// Creates an empty `Mapping` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Mapping(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and the
    /// key keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_encoder::{Mapping, Node};
    ///
    /// let mut map = Mapping::new();
    /// assert!(map.insert("key", Node::from(42)).is_none());
    /// assert!(map.insert("key", Node::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: Node) -> Option<Node> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the first entry in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<(&String, &Node)> {
        self.0.first()
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if both maps hold the same key set, regardless of order.
    ///
    /// ```rust
    /// use toon_encoder::{node, Node};
    ///
    /// let a = node!({ "x": 1, "y": 2 });
    /// let b = node!({ "y": 3, "x": 4 });
    /// assert!(a.as_mapping().unwrap().same_keys(b.as_mapping().unwrap()));
    /// ```
    #[must_use]
    pub fn same_keys(&self, other: &Mapping) -> bool {
        self.len() == other.len() && self.keys().all(|key| other.contains_key(key))
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Node> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Node> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (K, Node)>>(iter: T) -> Self {
        Mapping(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
