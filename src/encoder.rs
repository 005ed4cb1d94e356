//! TOON encoding of node trees.
//!
//! This module provides the [`Encoder`], which turns a [`Node`] into TOON text.
//!
//! ## Overview
//!
//! The encoder picks the most compact form for every sequence it meets:
//!
//! - **Tabular arrays**: mappings sharing one flat key set become a header plus rows
//! - **Inline primitives**: scalar-only sequences go on one line (e.g. `[3]: 1,2,3`)
//! - **List format**: everything else uses `- ` items
//! - **Quote minimization**: strings stay bare when unambiguous
//!
//! Mapping entries are written in insertion order. Sequences under a key fuse their
//! header onto the key line (`tags[2]: a,b`).
//!
//! ## Usage
//!
//! ```rust
//! use toon_encoder::{node, Delimiter, EncodeOptions, Encoder};
//!
//! let encoder = Encoder::new(EncodeOptions::new().with_delimiter(Delimiter::Pipe));
//!
//! let users = node!([
//!     { "id": 1, "name": "Alice" },
//!     { "id": 2, "name": "Bob" }
//! ]);
//!
//! assert_eq!(encoder.encode(&users), "[2|]{id|name}:\n  1|Alice\n  2|Bob");
//! ```

use crate::quote::{quote_key, quote_scalar};
use crate::{EncodeOptions, Mapping, Node, Scalar};
use tracing::trace;

/// Which of the three sequence encodings applies, with the pieces each one writes.
#[derive(Debug, PartialEq)]
enum SequenceShape<'a> {
    /// Uniform flat mappings.
    Tabular(Table<'a>),
    /// Scalars only.
    Primitive(Vec<&'a Scalar>),
    /// Anything else.
    List,
}

/// Header keys in the first element's order, and each row's values in header order.
#[derive(Debug, PartialEq)]
struct Table<'a> {
    keys: Vec<&'a str>,
    rows: Vec<Vec<&'a Scalar>>,
}

/// The TOON encoder.
///
/// Holds only read-only configuration, so one encoder can be shared freely
/// (it is `Send + Sync`) and every call is independent of the last.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        Encoder { options }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encodes a node tree to TOON text.
    ///
    /// Null and empty mappings encode to the empty string. The output never ends
    /// with a newline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_encoder::{node, Encoder, Node};
    ///
    /// let encoder = Encoder::default();
    /// assert_eq!(encoder.encode(&Node::NULL), "");
    /// assert_eq!(encoder.encode(&node!([])), "[0]:");
    /// assert_eq!(encoder.encode(&node!({ "ok": true })), "ok: true");
    /// ```
    #[must_use]
    pub fn encode(&self, node: &Node) -> String {
        trace!(
            nodes = node.node_count(),
            indent = self.options.indent,
            delimiter = %self.options.delimiter,
            "encoding node tree"
        );

        let mut writer = Writer {
            // Pre-allocate; typical index documents run to a few kilobytes
            output: String::with_capacity(256),
            options: &self.options,
        };

        match node {
            Node::Scalar(scalar) if scalar.is_null() => {}
            Node::Scalar(scalar) => {
                writer.push(&quote_scalar(scalar, self.options.delimiter));
            }
            Node::Mapping(map) => writer.write_mapping(map, 0),
            Node::Sequence(items) => writer.write_sequence(items, 0),
        }

        writer.output
    }
}

struct Writer<'a> {
    output: String,
    options: &'a EncodeOptions,
}

impl<'a> Writer<'a> {
    #[inline]
    fn push(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Starts a new line indented to `column` spaces.
    fn line(&mut self, column: usize) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.extend(std::iter::repeat(' ').take(column));
    }

    /// Writes every entry of `map` on its own line at `column`.
    fn write_mapping(&mut self, map: &Mapping, column: usize) {
        for (key, value) in map {
            self.line(column);
            self.write_entry(key, value, column);
        }
    }

    /// Writes `key` and its value at the cursor. `column` is where the key starts;
    /// nested blocks go one indent past it.
    fn write_entry(&mut self, key: &str, value: &Node, column: usize) {
        self.push(&quote_key(key));
        match value {
            Node::Mapping(map) if map.is_empty() => self.push(":"),
            Node::Mapping(map) => {
                self.push(":");
                self.write_mapping(map, column + self.options.indent);
            }
            Node::Sequence(items) => self.write_sequence(items, column),
            Node::Scalar(scalar) => {
                self.push(": ");
                self.push(&quote_scalar(scalar, self.options.delimiter));
            }
        }
    }

    /// Writes a sequence header at the cursor and its rows or items one indent past
    /// `column`.
    fn write_sequence(&mut self, items: &[Node], column: usize) {
        if items.is_empty() {
            self.push("[0]:");
            return;
        }

        let shape = classify(items);
        trace!(len = items.len(), ?shape, "encoding sequence");

        match shape {
            SequenceShape::Tabular(table) => self.write_tabular(&table, column),
            SequenceShape::Primitive(values) => self.write_inline(&values),
            SequenceShape::List => self.write_list(items, column),
        }
    }

    /// `[N]{k1,k2}:` followed by one delimited row per mapping.
    fn write_tabular(&mut self, table: &Table<'_>, column: usize) {
        let delimiter = self.options.delimiter;

        let header = table
            .keys
            .iter()
            .map(|key| quote_key(key))
            .collect::<Vec<_>>()
            .join(delimiter.as_str());
        self.push(&format!(
            "[{}{}]{{{}}}:",
            table.rows.len(),
            delimiter.header_marker(),
            header
        ));

        let row_column = column + self.options.indent;
        for row in &table.rows {
            self.line(row_column);
            self.write_delimited(row);
        }
    }

    /// `[N]: v1,v2,v3` on a single line.
    fn write_inline(&mut self, values: &[&Scalar]) {
        self.push(&format!(
            "[{}{}]: ",
            values.len(),
            self.options.delimiter.header_marker()
        ));
        self.write_delimited(values);
    }

    fn write_delimited(&mut self, values: &[&Scalar]) {
        let delimiter = self.options.delimiter;
        for (i, scalar) in values.iter().enumerate() {
            if i > 0 {
                self.push(delimiter.as_str());
            }
            self.push(&quote_scalar(scalar, delimiter));
        }
    }

    /// `[N]:` followed by one `- ` item per element.
    fn write_list(&mut self, items: &[Node], column: usize) {
        self.push(&format!("[{}]:", items.len()));

        let hyphen_column = column + self.options.indent;
        for item in items {
            self.line(hyphen_column);
            match item {
                Node::Mapping(map) if map.is_empty() => self.push("-"),
                Node::Mapping(map) => {
                    self.push("- ");
                    // Fields align two columns past the hyphen, under the first key
                    let field_column = hyphen_column + 2;
                    let mut entries = map.iter();
                    if let Some((key, value)) = entries.next() {
                        self.write_entry(key, value, field_column);
                    }
                    for (key, value) in entries {
                        self.line(field_column);
                        self.write_entry(key, value, field_column);
                    }
                }
                Node::Sequence(inner) => {
                    self.push("- ");
                    self.write_sequence(inner, hyphen_column);
                }
                Node::Scalar(scalar) => {
                    self.push("- ");
                    self.push(&quote_scalar(scalar, self.options.delimiter));
                }
            }
        }
    }
}

fn classify(items: &[Node]) -> SequenceShape<'_> {
    if let Some(table) = tabulate(items) {
        SequenceShape::Tabular(table)
    } else if let Some(values) = scalars(items) {
        SequenceShape::Primitive(values)
    } else {
        SequenceShape::List
    }
}

/// Builds the table if every element is a mapping with the first element's key set and
/// only scalar values. Empty mappings share the empty key set and tabulate too.
fn tabulate(items: &[Node]) -> Option<Table<'_>> {
    let Node::Mapping(first) = items.first()? else {
        return None;
    };
    let keys: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let Node::Mapping(map) = item else {
            return None;
        };
        if !map.same_keys(first) {
            return None;
        }
        let row = keys
            .iter()
            .map(|key| match map.get(key) {
                Some(Node::Scalar(scalar)) => Some(scalar),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;
        rows.push(row);
    }

    Some(Table { keys, rows })
}

fn scalars(items: &[Node]) -> Option<Vec<&Scalar>> {
    items
        .iter()
        .map(|item| match item {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{node, Delimiter};

    fn encode(node: &Node) -> String {
        Encoder::default().encode(node)
    }

    #[test]
    fn test_root_scalars() {
        assert_eq!(encode(&Node::NULL), "");
        assert_eq!(encode(&Node::from(42)), "42");
        assert_eq!(encode(&Node::from("hi there")), "hi there");
        assert_eq!(encode(&Node::from("")), "\"\"");
        assert_eq!(encode(&Node::from(false)), "false");
    }

    #[test]
    fn test_nested_mapping() {
        let tree = node!({
            "project": {
                "name": "orbit",
                "paths": { "src": "src/components" }
            },
            "empty": {},
            "count": 3
        });
        assert_eq!(
            encode(&tree),
            "project:\n  name: orbit\n  paths:\n    src: src/components\nempty:\ncount: 3"
        );
    }

    #[test]
    fn test_classify() {
        let tabular = node!([{ "a": 1 }, { "a": 2 }]);
        let primitive = node!([1, "x", null]);
        let nested = node!([{ "a": [1] }, { "a": [2] }]);
        let empty_maps = node!([{}, {}]);

        fn shape(n: &Node) -> SequenceShape<'_> {
            classify(n.as_sequence().unwrap_or_default())
        }
        assert!(matches!(shape(&tabular), SequenceShape::Tabular(_)));
        assert!(matches!(shape(&primitive), SequenceShape::Primitive(ref v) if v.len() == 3));
        assert_eq!(shape(&nested), SequenceShape::List);
        assert_eq!(
            shape(&empty_maps),
            SequenceShape::Tabular(Table {
                keys: vec![],
                rows: vec![vec![], vec![]],
            })
        );
    }

    #[test]
    fn test_tabular_under_key() {
        let tree = node!({
            "components": [
                { "name": "Button", "path": "src/Button.tsx" },
                { "name": "Card", "path": "src/Card.tsx" }
            ]
        });
        assert_eq!(
            encode(&tree),
            "components[2]{name,path}:\n  Button,src/Button.tsx\n  Card,src/Card.tsx"
        );
    }

    #[test]
    fn test_tabular_rows_follow_header_order() {
        let tree = node!([{ "b": 1, "a": 2 }, { "a": 3, "b": 4 }]);
        assert_eq!(encode(&tree), "[2]{b,a}:\n  1,2\n  4,3");
    }

    #[test]
    fn test_tabular_quotes_header_keys() {
        let tree = node!([{ "file-name": "a" }, { "file-name": "b" }]);
        assert_eq!(encode(&tree), "[2]{\"file-name\"}:\n  a\n  b");
    }

    #[test]
    fn test_tabular_with_values_needing_quotes() {
        let tree = node!([{ "v": "a,b" }, { "v": "" }]);
        assert_eq!(encode(&tree), "[2]{v}:\n  \"a,b\"\n  \"\"");
    }

    #[test]
    fn test_inline_array_under_key() {
        let tree = node!({ "exports": ["useTheme", "ThemeProvider"], "none": [] });
        assert_eq!(
            encode(&tree),
            "exports[2]: useTheme,ThemeProvider\nnone[0]:"
        );
    }

    #[test]
    fn test_list_of_mappings() {
        let tree = node!({
            "imports": [
                { "source": "react", "kind": "external" },
                { "source": "./Card" }
            ]
        });
        assert_eq!(
            encode(&tree),
            "imports[2]:\n  - source: react\n    kind: external\n  - source: ./Card"
        );
    }

    #[test]
    fn test_list_item_with_nested_values() {
        let tree = node!([
            { "name": "Button", "uses": ["Icon", "Text"], "meta": { "lines": 40 } },
            "loose"
        ]);
        assert_eq!(
            encode(&tree),
            "[2]:\n  - name: Button\n    uses[2]: Icon,Text\n    meta:\n      lines: 40\n  - loose"
        );
    }

    #[test]
    fn test_list_item_nested_table() {
        let tree = node!([
            { "rows": [{ "x": 1 }, { "x": 2 }] },
            1
        ]);
        assert_eq!(
            encode(&tree),
            "[2]:\n  - rows[2]{x}:\n      1\n      2\n  - 1"
        );
    }

    #[test]
    fn test_list_with_nested_sequences() {
        let tree = node!([[1, 2], [], [{ "a": 1 }, "b"]]);
        assert_eq!(
            encode(&tree),
            "[3]:\n  - [2]: 1,2\n  - [0]:\n  - [2]:\n    - a: 1\n    - b"
        );
    }

    #[test]
    fn test_empty_mapping_in_list() {
        let tree = node!([{}, { "a": 1, "b": 2 }]);
        assert_eq!(encode(&tree), "[2]:\n  -\n  - a: 1\n    b: 2");
    }

    #[test]
    fn test_empty_mappings_form_keyless_table() {
        assert_eq!(encode(&node!([{}, {}])), "[2]{}:\n  \n  ");
        assert_eq!(encode(&node!({ "slots": [{}] })), "slots[1]{}:\n  ");

        let encoder = Encoder::new(EncodeOptions::new().with_delimiter(Delimiter::Pipe));
        assert_eq!(encoder.encode(&node!([{}, {}])), "[2|]{}:\n  \n  ");
    }

    #[test]
    fn test_custom_indent() {
        let encoder = Encoder::new(EncodeOptions::new().with_indent(4));
        let tree = node!({ "a": { "b": [{ "c": 1 }, { "c": 2 }] } });
        assert_eq!(encoder.encode(&tree), "a:\n    b[2]{c}:\n        1\n        2");
    }

    #[test]
    fn test_tab_delimiter_marker() {
        let encoder = Encoder::new(EncodeOptions::new().with_delimiter(Delimiter::Tab));
        let tree = node!({ "t": [{ "a": 1, "b": "x y" }], "p": [1, 2] });
        assert_eq!(encoder.encode(&tree), "t[1\t]{a\tb}:\n  1\tx y\np[2\t]: 1\t2");
    }

    #[test]
    fn test_list_header_has_no_delimiter_marker() {
        let encoder = Encoder::new(EncodeOptions::new().with_delimiter(Delimiter::Pipe));
        assert_eq!(encoder.encode(&node!([1, [2]])), "[2]:\n  - 1\n  - [1|]: 2");
    }

    #[test]
    fn test_encoder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Encoder>();
    }
}
