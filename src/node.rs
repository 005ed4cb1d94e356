//! The node tree accepted by the encoder.
//!
//! A [`Node`] is exactly one of three things: a [`Scalar`], a [`Mapping`], or a sequence
//! of nodes. There is no fourth case, so every match over a node is exhaustive and the
//! encoder has no "unknown object" path.
//!
//! ## Core Types
//!
//! - [`Node`]: scalar, mapping, or sequence
//! - [`Scalar`]: null, boolean, number, or string
//! - [`Number`]: integer, big integer, or float
//!
//! ## Creating Nodes
//!
//! ```rust
//! use toon_encoder::{node, Node, Number, Scalar};
//!
//! // From primitives
//! let null = Node::NULL;
//! let boolean = Node::from(true);
//! let number = Node::from(42);
//! let text = Node::from("hello");
//! assert_eq!(number, Node::Scalar(Scalar::Number(Number::Integer(42))));
//!
//! // Using the node! macro
//! let obj = node!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_mapping());
//! ```
//!
//! ## Converting from Rust Types
//!
//! ```rust
//! use toon_encoder::{to_node, Node};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let node: Node = to_node(&Point { x: 10, y: 20 }).unwrap();
//! assert_eq!(node.as_mapping().map(|m| m.len()), Some(2));
//! ```

use crate::Mapping;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A tree of scalars, insertion-ordered mappings, and sequences.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::{Mapping, Node};
///
/// let mut map = Mapping::new();
/// map.insert("ids", Node::from(vec![Node::from(1), Node::from(2)]));
///
/// let tree = Node::Mapping(map);
/// assert!(tree.is_mapping());
/// assert!(!tree.is_scalar());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Mapping(Mapping),
    Sequence(Vec<Node>),
}

/// A leaf value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// A numeric scalar.
///
/// Integers that fit in `i64` use [`Number::Integer`]; wider integers (`u64` above
/// `i64::MAX`, `i128`, `u128`) use [`Number::Big`] so they print exactly.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(3.5).to_string(), "3.5");
/// assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Big(BigInt),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value of any width.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::Big(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it is an integer that fits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_encoder::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), None);
    /// assert_eq!(Number::from(u64::MAX).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Big(big) => i64::try_from(big).ok(),
            Number::Float(_) => None,
        }
    }

    /// Converts this number to an `f64`, losing precision for wide integers.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Big(big) => big.to_string().parse().unwrap_or(f64::NAN),
            Number::Float(f) => *f,
        }
    }
}

/// Canonical decimal form.
///
/// Floats use the shortest round-trip digits and always read back as floats: integral
/// values keep a `.0` suffix, and magnitudes outside `1e-4..1e16` switch to exponent
/// form with a signed, two-digit-minimum exponent (`1e+21`, `1.5e-05`). Negative zero
/// prints `0.0`. NaN and the infinities have no decimal form and print `null`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Big(big) => write!(f, "{}", big),
            Number::Float(fl) => write_float(f, *fl),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if !value.is_finite() {
        return f.write_str("null");
    }
    if value == 0.0 {
        return f.write_str("0.0");
    }

    if (1e-4..1e16).contains(&value.abs()) {
        let digits = value.to_string();
        if digits.contains('.') {
            f.write_str(&digits)
        } else {
            write!(f, "{}.0", digits)
        }
    } else {
        let digits = format!("{:e}", value);
        let (mantissa, exponent) = digits.split_once('e').unwrap_or((digits.as_str(), "0"));
        let (sign, exponent) = match exponent.strip_prefix('-') {
            Some(magnitude) => ('-', magnitude),
            None => ('+', exponent),
        };
        write!(f, "{}e{}{:0>2}", mantissa, sign, exponent)
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

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(small) => Number::Integer(small),
            Err(_) => Number::Big(BigInt::from(value)),
        }
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

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(small) => Number::Integer(small),
            Err(_) => Number::Big(BigInt::from(value)),
        }
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        match i64::try_from(value) {
            Ok(small) => Number::Integer(small),
            Err(_) => Number::Big(BigInt::from(value)),
        }
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::from(value as u64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(small) => Number::Integer(small),
            Err(_) => Number::Big(value),
        }
    }
}

impl Scalar {
    /// Returns `true` if the scalar is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl Node {
    /// The null scalar.
    pub const NULL: Node = Node::Scalar(Scalar::Null);

    /// Returns `true` if the node is the null scalar.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }

    /// Returns `true` if the node is a scalar of any kind.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Returns `true` if the node is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    /// Returns `true` if the node is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    /// If the node is a boolean scalar, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// If the node is a string scalar, returns a reference to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_encoder::Node;
    ///
    /// assert_eq!(Node::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Node::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// If the node is an integer scalar that fits in `i64`, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Scalar(Scalar::Number(n)) => n.as_i64(),
            _ => None,
        }
    }

    /// If the node is a sequence, returns a reference to its elements.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// If the node is a mapping, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Counts this node and every node beneath it.
    ///
    /// ```rust
    /// use toon_encoder::node;
    ///
    /// assert_eq!(node!({ "a": [1, 2], "b": null }).node_count(), 5);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Node::Scalar(_) => 1,
            Node::Mapping(map) => 1 + map.values().map(Node::node_count).sum::<usize>(),
            Node::Sequence(items) => 1 + items.iter().map(Node::node_count).sum::<usize>(),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::NULL
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Scalar(scalar) => scalar.serialize(serializer),
            Node::Sequence(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Node::Mapping(map) => {
                use serde::ser::SerializeMap;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Scalar::Number(Number::Big(big)) => match i128::try_from(big) {
                Ok(wide) => serializer.serialize_i128(wide),
                Err(_) => match u128::try_from(big) {
                    Ok(wide) => serializer.serialize_u128(wide),
                    Err(_) => serializer.serialize_str(&big.to_string()),
                },
            },
            Scalar::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scalar, sequence, or mapping")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
                Ok(Node::Scalar(Scalar::Number(Number::from(value))))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Node::Scalar(Scalar::Number(Number::from(value))))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
                Ok(Node::Scalar(Scalar::Number(Number::from(value))))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Node::from(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Node::NULL)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Node::NULL)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    items.push(elem);
                }
                Ok(Node::Sequence(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = Mapping::new();
                while let Some((key, value)) = map.next_entry::<String, Node>()? {
                    entries.insert(key, value);
                }
                Ok(Node::Mapping(entries))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Scalar(Scalar::Bool(value))
    }
}

macro_rules! node_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Scalar(Scalar::Number(Number::from(value)))
                }
            }
        )*
    };
}

node_from_number!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, f32, f64, BigInt);

impl From<Number> for Node {
    fn from(value: Number) -> Self {
        Node::Scalar(Scalar::Number(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(Scalar::String(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(Scalar::String(value.to_string()))
    }
}

/// Timestamps become RFC 3339 string scalars.
impl From<DateTime<Utc>> for Node {
    fn from(value: DateTime<Utc>) -> Self {
        Node::Scalar(Scalar::String(value.to_rfc3339()))
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::NULL, Into::into)
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Sequence(value)
    }
}

impl From<Mapping> for Node {
    fn from(value: Mapping) -> Self {
        Node::Mapping(value)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Node::Sequence(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Node::from(true), Node::Scalar(Scalar::Bool(true)));
        assert_eq!(
            Node::from(42i32),
            Node::Scalar(Scalar::Number(Number::Integer(42)))
        );
        assert_eq!(
            Node::from(3.5f64),
            Node::Scalar(Scalar::Number(Number::Float(3.5)))
        );
        assert_eq!(
            Node::from("test"),
            Node::Scalar(Scalar::String("test".to_string()))
        );
        assert_eq!(Node::from(None::<i32>), Node::NULL);
        assert_eq!(Node::from(Some("x")), Node::from("x"));
    }

    #[test]
    fn test_wide_integers_become_big() {
        assert_eq!(Number::from(i64::MAX as u64), Number::Integer(i64::MAX));
        assert!(matches!(Number::from(u64::MAX), Number::Big(_)));
        assert!(matches!(Number::from(i128::MIN), Number::Big(_)));
        assert_eq!(Number::from(-5i128), Number::Integer(-5));
        assert_eq!(Number::from(BigInt::from(7)), Number::Integer(7));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Integer(-12).to_string(), "-12");
        assert_eq!(Number::Float(0.1).to_string(), "0.1");
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(-3.0).to_string(), "-3.0");
        assert_eq!(Number::Float(-0.0).to_string(), "0.0");
        assert_eq!(Number::Float(1e-4).to_string(), "0.0001");
        assert_eq!(Number::Float(9_007_199_254_740_993.0).to_string(), "9007199254740992.0");
        assert_eq!(Number::Float(1e16).to_string(), "1e+16");
        assert_eq!(Number::Float(1e21).to_string(), "1e+21");
        assert_eq!(Number::Float(-1.5e300).to_string(), "-1.5e+300");
        assert_eq!(Number::Float(1.5e-5).to_string(), "1.5e-05");
        assert_eq!(Number::Float(2e-120).to_string(), "2e-120");
        assert_eq!(Number::Float(f64::NAN).to_string(), "null");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "null");
        assert_eq!(
            Number::from(u128::MAX).to_string(),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_datetime_becomes_rfc3339_string() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(Node::from(at).as_str(), Some("2024-03-01T12:30:00+00:00"));
    }

    #[test]
    fn test_node_count() {
        let mut map = Mapping::new();
        map.insert("a", Node::from(vec![Node::from(1), Node::from(2)]));
        map.insert("b", Node::NULL);
        assert_eq!(Node::Mapping(map).node_count(), 5);
        assert_eq!(Node::Sequence(vec![]).node_count(), 1);
    }

    #[test]
    fn test_accessors() {
        let seq: Node = (1..=3i64).map(Node::from).collect();
        assert_eq!(seq.as_sequence().map(<[Node]>::len), Some(3));
        assert!(seq.as_mapping().is_none());
        assert_eq!(Node::from(false).as_bool(), Some(false));
        assert_eq!(Node::from(7u8).as_i64(), Some(7));
        assert!(Node::default().is_null());
    }
}
