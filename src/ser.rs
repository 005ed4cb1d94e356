//! Serde integration: building node trees from `Serialize` values.
//!
//! [`NodeSerializer`] turns any `T: Serialize` into a [`Node`], which the
//! [`Encoder`](crate::Encoder) then writes out. Most users should reach for the
//! crate-root helpers instead:
//!
//! ```rust
//! use toon_encoder::{to_node, to_string};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Component { name: String, uses: Vec<String> }
//!
//! let button = Component {
//!     name: "Button".to_string(),
//!     uses: vec!["Icon".to_string()],
//! };
//!
//! assert!(to_node(&button).unwrap().is_mapping());
//! assert_eq!(to_string(&button).unwrap(), "name: Button\nuses[1]: Icon");
//! ```
//!
//! ## Shape mapping
//!
//! | Rust / Serde | Node |
//! |--------------|------|
//! | `()`, `None`, unit structs | null |
//! | integers, floats | number (wide integers stay exact) |
//! | `char`, `&str`, `String`, unit variants | string |
//! | `Vec`, tuples, bytes | sequence |
//! | structs, maps | mapping, in field / iteration order |
//! | newtype, tuple, struct variants | single-entry mapping keyed by variant name |
//!
//! Map keys must be scalars. Strings are used as-is; integers, booleans, and chars are
//! stringified. Anything else is rejected with [`Error::InvalidNodeKind`].

use crate::{Error, Mapping, Node, Number, Result, Scalar};
use serde::{ser, Serialize};

/// Serializer producing a [`Node`] instead of text.
pub struct NodeSerializer;

pub struct SerializeVec {
    vec: Vec<Node>,
}

pub struct SerializeTupleVariant {
    name: &'static str,
    vec: Vec<Node>,
}

pub struct SerializeMap {
    map: Mapping,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: &'static str,
    map: Mapping,
}

impl ser::Serializer for NodeSerializer {
    type Ok = Node;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Node> {
        Ok(Node::from(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Node> {
        Ok(Node::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Node> {
        Ok(v.iter().map(|&b| Node::from(b)).collect())
    }

    fn serialize_none(self) -> Result<Node> {
        Ok(Node::NULL)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Node>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Node> {
        Ok(Node::NULL)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Node> {
        Ok(Node::NULL)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Node> {
        Ok(Node::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Node>
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
    ) -> Result<Node>
    where
        T: ?Sized + Serialize,
    {
        let mut map = Mapping::with_capacity(1);
        map.insert(variant, to_node(value)?);
        Ok(Node::Mapping(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        ser::Serializer::serialize_seq(self, Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        ser::Serializer::serialize_seq(self, Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: Mapping::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        ser::Serializer::serialize_map(self, Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant,
            map: Mapping::with_capacity(len),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Node;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::Sequence(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Node;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Node> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Node> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        let mut map = Mapping::with_capacity(1);
        map.insert(self.name, Node::Sequence(self.vec));
        Ok(Node::Mapping(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Node;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(map_key(to_node(key)?)?);
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
        self.map.insert(key, to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::Mapping(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, to_node(value)?);
        Ok(())
    }

    fn skip_field(&mut self, _key: &'static str) -> Result<()> {
        Ok(())
    }

    fn end(self) -> Result<Node> {
        Ok(Node::Mapping(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Node;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, to_node(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node> {
        let mut outer = Mapping::with_capacity(1);
        outer.insert(self.name, Node::Mapping(self.map));
        Ok(Node::Mapping(outer))
    }
}

/// Converts any `T: Serialize` into a [`Node`].
///
/// # Errors
///
/// Returns [`Error::InvalidNodeKind`] for map keys that are not scalars, and passes
/// through errors raised by `T`'s own `Serialize` implementation.
pub fn to_node<T>(value: &T) -> Result<Node>
where
    T: ?Sized + Serialize,
{
    value.serialize(NodeSerializer)
}

/// Turns a serialized map key into the key string.
fn map_key(key: Node) -> Result<String> {
    match key {
        Node::Scalar(Scalar::String(s)) => Ok(s),
        Node::Scalar(Scalar::Number(n @ (Number::Integer(_) | Number::Big(_)))) => {
            Ok(n.to_string())
        }
        Node::Scalar(Scalar::Bool(b)) => Ok(b.to_string()),
        Node::Scalar(Scalar::Number(Number::Float(_))) => Err(Error::invalid_node_kind(
            "map key must be a string, integer, or boolean, found float",
        )),
        Node::Scalar(Scalar::Null) => Err(Error::invalid_node_kind(
            "map key must be a string, integer, or boolean, found null",
        )),
        Node::Sequence(_) => Err(Error::invalid_node_kind(
            "map key must be a string, integer, or boolean, found sequence",
        )),
        Node::Mapping(_) => Err(Error::invalid_node_kind(
            "map key must be a string, integer, or boolean, found mapping",
        )),
    }
}
