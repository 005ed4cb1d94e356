//! The TOON text written by this crate.
//!
//! This module documents the grammar the [`Encoder`](crate::Encoder) produces. Every
//! example below is a doctest against the real encoder.
//!
//! # Overview
//!
//! TOON trades JSON's braces, brackets, and repeated keys for indentation and length
//! headers. Documents are plain UTF-8, lines are joined by `\n`, and the output never
//! ends with a newline.
//!
//! # Mappings
//!
//! One `key: value` line per entry, in insertion order. A nested mapping puts its key
//! alone on a line (`key:`) and its entries one indent deeper:
//!
//! ```rust
//! use toon_encoder::{encode, node};
//!
//! let tree = node!({
//!     "user": { "name": "Alice", "meta": { "verified": true } },
//!     "empty": {}
//! });
//! assert_eq!(
//!     encode(&tree),
//!     "user:\n  name: Alice\n  meta:\n    verified: true\nempty:"
//! );
//! ```
//!
//! **Keys** match `[A-Za-z_][A-Za-z0-9_.]*` or are wrapped in double quotes as-is:
//! `userName`, `user.email`, `"user-id"`, `"2ndPlace"`.
//!
//! # Scalars
//!
//! | Kind | Written as |
//! |------|------------|
//! | null | `null` |
//! | boolean | `true` / `false` |
//! | integer | decimal digits, optional `-` |
//! | float | shortest round-trip digits, always with a decimal point or exponent; `-0.0` becomes `0.0`, NaN and infinities become `null` |
//! | string | bare, or quoted when ambiguous |
//!
//! Floats between `1e-4` and `1e16` in magnitude are written in plain decimal; others use
//! an exponent with a sign and at least two digits:
//!
//! ```rust
//! use toon_encoder::{encode, node};
//!
//! let tree = node!({ "ratio": 2.0, "count": 2, "huge": 1e21, "tiny": 0.00001 });
//! assert_eq!(encode(&tree), "ratio: 2.0\ncount: 2\nhuge: 1e+21\ntiny: 1e-05");
//! ```
//!
//! A string is quoted when it:
//!
//! - is empty, or starts or ends with a space
//! - contains the active delimiter, `:`, `"`, `\`, a newline, carriage return, or tab
//! - is exactly `true`, `false`, or `null`
//! - parses as a number, counting digit groups such as `1_000`
//! - starts with `- `, `[`, or `{`
//!
//! Inside quotes, `"`, `\`, `\n`, `\r`, and `\t` are backslash-escaped.
//!
//! ```rust
//! use toon_encoder::{encode, node};
//!
//! let tree = node!({ "a": "true", "b": "42", "c": "x, y", "d": "hello world" });
//! assert_eq!(encode(&tree), "a: \"true\"\nb: \"42\"\nc: \"x, y\"\nd: hello world");
//! ```
//!
//! # Sequences
//!
//! Every sequence opens with a `[N]` length header. Under a mapping key the header is
//! fused onto the key (`tags[2]: ...`); at the root or as a list item it stands alone.
//! An empty sequence is just `[0]:`.
//!
//! ## Tabular
//!
//! When every element is a mapping, all of them have the same key set, and every value
//! is a scalar, the keys are written once as a header in the first element's order,
//! followed by one delimited row per element:
//!
//! ```rust
//! use toon_encoder::{encode, node};
//!
//! let tree = node!({
//!     "components": [
//!         { "name": "Button", "props": 3 },
//!         { "props": 1, "name": "Card" }
//!     ]
//! });
//! assert_eq!(
//!     encode(&tree),
//!     "components[2]{name,props}:\n  Button,3\n  Card,1"
//! );
//! ```
//!
//! A run of empty mappings shares the empty key set, so it becomes a table with an
//! empty header and one blank row per element:
//!
//! ```rust
//! use toon_encoder::{encode, node};
//!
//! assert_eq!(encode(&node!({ "slots": [{}, {}] })), "slots[2]{}:\n  \n  ");
//! ```
//!
//! ## Inline
//!
//! A sequence of scalars goes on one line:
//!
//! ```rust
//! use toon_encoder::{encode, node};
//!
//! assert_eq!(encode(&node!({ "mixed": [1, "two", null, true] })), "mixed[4]: 1,two,null,true");
//! ```
//!
//! ## List
//!
//! Anything else becomes one `- ` item per element. A mapping item writes its first
//! entry on the hyphen line and the rest aligned under it; nested blocks sit one
//! indent past their owning key.
//!
//! ```rust
//! use toon_encoder::{encode, node};
//!
//! let tree = node!([
//!     { "name": "Alice", "tags": ["admin", "user"] },
//!     { "id": 2 },
//!     [1, 2],
//!     "plain"
//! ]);
//! assert_eq!(
//!     encode(&tree),
//!     "[4]:\n  - name: Alice\n    tags[2]: admin,user\n  - id: 2\n  - [2]: 1,2\n  - plain"
//! );
//! ```
//!
//! # Delimiters
//!
//! | Delimiter | Character | Header marker |
//! |-----------|-----------|---------------|
//! | Comma (default) | `,` | none |
//! | Tab | `\t` | a tab |
//! | Pipe | `\|` | `\|` |
//!
//! Tabular and inline headers carry the marker after the count; list headers never do.
//! Header keys inside `{}` are joined with the active delimiter.
//!
//! ```rust
//! use toon_encoder::{encode_with_options, node, Delimiter, EncodeOptions};
//!
//! let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
//! let tree = node!({
//!     "rows": [{ "a": 1, "b": 2 }],
//!     "tags": ["x", "y"],
//!     "items": [{ "a": 1 }, { "b": 2 }]
//! });
//! assert_eq!(
//!     encode_with_options(&tree, &options),
//!     "rows[1|]{a|b}:\n  1|2\ntags[2|]: x|y\nitems[2]:\n  - a: 1\n  - b: 2"
//! );
//! ```
//!
//! # Empty and Root Values
//!
//! | Input | Output |
//! |-------|--------|
//! | null | empty string |
//! | empty mapping | empty string |
//! | empty sequence | `[0]:` |
//! | any other scalar | its quoted form |
//!
//! # Limitations
//!
//! - Encoding only; there is no decoder
//! - No comments, length markers, or key folding
//! - Mapping keys are strings; the serde bridge stringifies integer and boolean keys
//!   and rejects the rest
