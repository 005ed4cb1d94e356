//! Configuration options for TOON encoding.
//!
//! This module provides types to customize TOON output:
//!
//! - [`EncodeOptions`]: indentation width and delimiter
//! - [`Delimiter`]: choice of delimiter for arrays and tables (comma, tab, or pipe)
//!
//! ## Examples
//!
//! ```rust
//! use toon_encoder::{encode_with_options, node, Delimiter, EncodeOptions};
//!
//! let tags = node!({ "tags": ["a", "b", "c"] });
//!
//! // Use pipe delimiter
//! let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
//! assert_eq!(encode_with_options(&tags, &options), "tags[3|]: a|b|c");
//! ```

use std::fmt;
use std::str::FromStr;

/// Delimiter choice for TOON arrays and tables.
///
/// - **Comma**: Default, most compact; implicit in array headers
/// - **Tab**: Best for TSV-like output
/// - **Pipe**: Readable for markdown-style tables
///
/// The active delimiter is also the one that forces string values into quotes;
/// the other two are safe to leave bare.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_str(), ",");
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::Pipe.as_str(), "|");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// Returns the delimiter as a single character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the marker written after the element count in array headers.
    ///
    /// Comma is implicit, so its marker is empty: `[3]` versus `[3|]`.
    ///
    /// ```rust
    /// use toon_encoder::Delimiter;
    ///
    /// assert_eq!(Delimiter::Comma.header_marker(), "");
    /// assert_eq!(Delimiter::Pipe.header_marker(), "|");
    /// ```
    #[must_use]
    pub const fn header_marker(&self) -> &'static str {
        match self {
            Delimiter::Comma => "",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Pipe => "pipe",
        };
        f.write_str(name)
    }
}

impl FromStr for Delimiter {
    type Err = String;

    /// Accepts either the delimiter character itself or its name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "," | "comma" => Ok(Delimiter::Comma),
            "\t" | "tab" => Ok(Delimiter::Tab),
            "|" | "pipe" => Ok(Delimiter::Pipe),
            other => Err(format!(
                "unknown delimiter '{}': expected comma, tab, or pipe",
                other.escape_default()
            )),
        }
    }
}

/// Configuration options for TOON encoding.
///
/// Both fields are read-only once an [`Encoder`](crate::Encoder) is built from them.
///
/// # Examples
///
/// ```rust
/// use toon_encoder::{EncodeOptions, Delimiter};
///
/// // Defaults: two spaces per level, comma delimiter
/// let options = EncodeOptions::new();
/// assert_eq!(options.indent, 2);
///
/// let options = EncodeOptions::new()
///     .with_delimiter(Delimiter::Tab)
///     .with_indent(4);
/// assert_eq!(options.delimiter, Delimiter::Tab);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    pub indent: usize,
    pub delimiter: Delimiter,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
        }
    }
}

impl EncodeOptions {
    /// Creates default options (comma delimiter, 2-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_encoder::EncodeOptions;
    ///
    /// let options = EncodeOptions::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the delimiter for arrays and tables.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_from_str() {
        assert_eq!(",".parse::<Delimiter>(), Ok(Delimiter::Comma));
        assert_eq!("comma".parse::<Delimiter>(), Ok(Delimiter::Comma));
        assert_eq!("\t".parse::<Delimiter>(), Ok(Delimiter::Tab));
        assert_eq!("tab".parse::<Delimiter>(), Ok(Delimiter::Tab));
        assert_eq!("|".parse::<Delimiter>(), Ok(Delimiter::Pipe));
        assert_eq!("pipe".parse::<Delimiter>(), Ok(Delimiter::Pipe));
        assert!(";".parse::<Delimiter>().is_err());
    }

    #[test]
    fn test_delimiter_display_roundtrips() {
        for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
            assert_eq!(delimiter.to_string().parse::<Delimiter>(), Ok(delimiter));
        }
    }

    #[test]
    fn test_header_marker() {
        assert_eq!(Delimiter::Comma.header_marker(), "");
        assert_eq!(Delimiter::Tab.header_marker(), "\t");
        assert_eq!(Delimiter::Pipe.header_marker(), "|");
    }

    #[test]
    fn test_builder() {
        let options = EncodeOptions::new()
            .with_indent(3)
            .with_delimiter(Delimiter::Pipe);
        assert_eq!(
            options,
            EncodeOptions {
                indent: 3,
                delimiter: Delimiter::Pipe
            }
        );
    }
}
