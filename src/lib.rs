//! # toon_encoder
//!
//! An encoder for TOON (Token-Oriented Object Notation), a compact indentation-based text
//! format for handing structured data to Large Language Models.
//!
//! ## What does it do?
//!
//! Given a tree of mappings, sequences, and scalars, the encoder writes the most compact
//! unambiguous TOON text for it. Mappings keep their insertion order, and every sequence
//! picks one of three encodings:
//!
//! - **Tabular**: mappings sharing one flat key set become a header plus one row each
//! - **Inline**: scalar-only sequences go on a single line
//! - **List**: anything else is written as `- ` items
//!
//! Strings are left unquoted unless a reader could mistake them for a number, a keyword,
//! or structure.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! toon_encoder = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Encoding a node tree
//!
//! ```rust
//! use toon_encoder::{encode, node};
//!
//! let index = node!({
//!     "components": [
//!         { "name": "Button", "file": "Button.tsx" },
//!         { "name": "Card", "file": "Card.tsx" }
//!     ],
//!     "hooks": ["useAuth", "useTheme"]
//! });
//!
//! assert_eq!(
//!     encode(&index),
//!     "components[2]{name,file}:\n  Button,Button.tsx\n  Card,Card.tsx\nhooks[2]: useAuth,useTheme"
//! );
//! ```
//!
//! ### Encoding any `Serialize` type
//!
//! ```rust
//! use serde::Serialize;
//! use toon_encoder::to_string;
//!
//! #[derive(Serialize)]
//! struct Product {
//!     id: u32,
//!     name: String,
//!     price: f64,
//! }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string(), price: 9.99 },
//!     Product { id: 2, name: "Gadget".to_string(), price: 14.5 },
//! ];
//!
//! let toon = to_string(&products).unwrap();
//! assert_eq!(toon, "[2]{id,name,price}:\n  1,Widget,9.99\n  2,Gadget,14.5");
//! ```
//!
//! ## Guarantees
//!
//! - Encoding a [`Node`] never fails; only the serde bridge can reject a value
//! - Output is deterministic: equal trees and options give byte-identical text
//! - No `unsafe` code
//!
//! The grammar the encoder writes is described in [`format`].
//!
//! ## Demos
//!
//! The `demos/` directory holds runnable programs:
//!
//! - **`simple.rs`** - encoding a derived struct
//! - **`macro.rs`** - building trees with the `node!` macro
//! - **`tabular_arrays.rs`** - the three sequence encodings side by side
//! - **`index_report.rs`** - a codebase index report
//! - **`custom_options.rs`** - delimiters and indentation
//! - **`token_efficiency.rs`** - TOON vs JSON size comparison
//!
//! Run any of them with: `cargo run --example <name>`

pub mod encoder;
pub mod error;
pub mod format;
pub mod macros;
pub mod mapping;
pub mod node;
pub mod options;
pub mod quote;
pub mod ser;

pub use encoder::Encoder;
pub use error::{Error, Result};
pub use mapping::Mapping;
pub use node::{Node, Number, Scalar};
pub use options::{Delimiter, EncodeOptions};
pub use ser::{to_node, NodeSerializer};

use serde::Serialize;
use std::io;
use tracing::debug;

/// Encodes a node tree with the default options (2-space indent, comma delimiter).
///
/// # Examples
///
/// ```rust
/// use toon_encoder::{encode, node};
///
/// assert_eq!(encode(&node!({ "name": "Alice", "age": 30 })), "name: Alice\nage: 30");
/// assert_eq!(encode(&node!([1, 2, 3])), "[3]: 1,2,3");
/// assert_eq!(encode(&node!({})), "");
/// ```
#[must_use]
pub fn encode(node: &Node) -> String {
    Encoder::default().encode(node)
}

/// Encodes a node tree with custom options.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::{encode_with_options, node, Delimiter, EncodeOptions};
///
/// let options = EncodeOptions::new().with_delimiter(Delimiter::Tab).with_indent(4);
/// let tree = node!({ "dirs": { "src": ["a", "b"] } });
///
/// assert_eq!(encode_with_options(&tree, &options), "dirs:\n    src[2\t]: a\tb");
/// ```
#[must_use]
pub fn encode_with_options(node: &Node, options: &EncodeOptions) -> String {
    Encoder::new(options.clone()).encode(node)
}

/// Serializes any `T: Serialize` to a TOON string.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidNodeKind`] if the value uses a map key that cannot become a
/// mapping key (floats, sequences, maps, or unit).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serializes any `T: Serialize` to a TOON string with custom options.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::{to_string_with_options, Delimiter, EncodeOptions};
///
/// let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
/// let toon = to_string_with_options(&vec!["a,b", "c"], &options).unwrap();
/// assert_eq!(toon, "[2|]: a,b|c");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted into a [`Node`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let node = to_node(value)?;
    debug!(nodes = node.node_count(), "converted value to node tree");
    Ok(encode_with_options(&node, options))
}

/// Serializes any `T: Serialize` to a writer in TOON format.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2]).unwrap();
/// assert_eq!(buffer, b"[2]: 1,2");
/// ```
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &EncodeOptions::default())
}

/// Serializes any `T: Serialize` to a writer in TOON format with custom options.
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let toon = to_string_with_options(value, options)?;
    writer
        .write_all(toon.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
