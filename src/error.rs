//! Error types for TOON encoding.
//!
//! Encoding a [`Node`](crate::Node) never fails: the node type is closed, so every value
//! it can hold has a TOON rendering. Errors come from the edges of the crate:
//!
//! - **Invalid node kinds**: a Serde value with no node equivalent, such as a map key
//!   that is itself a sequence or a mapping
//! - **I/O errors**: the writer passed to [`to_writer`](crate::to_writer) failed
//! - **Custom errors**: raised by a type's own `Serialize` implementation
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use toon_encoder::{to_string, Error};
//!
//! let mut weird = BTreeMap::new();
//! weird.insert(vec![1, 2], "sequence keys have no TOON form");
//!
//! let err = to_string(&weird).unwrap_err();
//! assert!(matches!(err, Error::InvalidNodeKind(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while turning values into TOON text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// A value that is none of scalar, mapping, or sequence in the position it appeared
    #[error("Invalid node kind: {0}")]
    InvalidNodeKind(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid node kind error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_encoder::Error;
    ///
    /// let err = Error::invalid_node_kind("map key must be a scalar, found sequence");
    /// assert!(err.to_string().contains("found sequence"));
    /// ```
    pub fn invalid_node_kind(msg: &str) -> Self {
        Error::InvalidNodeKind(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_encoder::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
