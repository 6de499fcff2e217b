//! Error types for building and visiting LookML syntax trees.
//!
//! Every failure aborts the whole transform: there is no partial tree or partial
//! mapping to hand back. Errors that happen below the document root carry a
//! [`KeyPath`] naming the enclosing keys, outermost first.
//!
//! ## Error Categories
//!
//! - **Unsupported values**: a mapping value that is not a string, sequence or mapping
//! - **Key conflicts**: a non-repeatable key declared twice inside the same block
//! - **Malformed updates**: an internal merge received anything but a single key
//! - **Depth limits**: input nested deeper than [`LookmlOptions::max_depth`](crate::LookmlOptions)
//!
//! Redeclaring a key at the top level of a document is *not* an error. The later
//! declaration wins and a `tracing` warning is emitted instead.
//!
//! ## Examples
//!
//! ```rust
//! use lookml_tree::{build, lookml, ErrorKind};
//!
//! let err = build(&lookml!({ "view": { "hidden": true } })).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnsupportedValueType);
//! assert!(err.to_string().contains("view.hidden"));
//! ```

use std::fmt;
use thiserror::Error;

/// The dotted sequence of keys leading to the node where an error happened.
///
/// # Examples
///
/// ```rust
/// use lookml_tree::KeyPath;
///
/// let mut path = KeyPath::from_key("sql");
/// path.prepend("dimension");
/// path.prepend("view");
/// assert_eq!(path.to_string(), "view.dimension.sql");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Creates an empty path, which displays as `<root>`.
    #[must_use]
    pub fn root() -> Self {
        KeyPath(Vec::new())
    }

    /// Creates a path holding a single key.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        KeyPath(vec![key.to_string()])
    }

    /// Adds an enclosing key in front of the path.
    pub fn prepend(&mut self, key: &str) {
        self.0.insert(0, key.to_string());
    }

    /// Returns the keys, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.0.join("."))
    }
}

/// A fieldless tag for each [`Error`] variant, convenient for matching in callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedValueType,
    KeyConflict,
    MalformedUpdate,
    MaxDepthExceeded,
}

/// Represents all possible errors raised while converting between mappings and trees.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// A value reached the builder that has no LookML representation
    #[error("Unsupported value type at `{path}`: expected {expected}, found {found}")]
    UnsupportedValueType {
        path: KeyPath,
        expected: &'static str,
        found: String,
    },

    /// A non-repeatable key was declared twice below the document root
    #[error("Key `{key}` already exists in `{path}` and would overwrite the existing value")]
    KeyConflict { key: String, path: KeyPath },

    /// A merge was attempted with an update that does not hold exactly one key
    #[error("Mapping to merge must have exactly one key, found {found}")]
    MalformedUpdate { found: usize },

    /// Nesting went past the configured limit
    #[error("Maximum nesting depth of {limit} exceeded at `{path}`")]
    MaxDepthExceeded { limit: usize, path: KeyPath },
}

impl Error {
    /// Creates an unsupported value error for a value found directly under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lookml_tree::{Error, ErrorKind};
    ///
    /// let err = Error::unsupported_value("hidden", "a string", "boolean");
    /// assert_eq!(err.kind(), ErrorKind::UnsupportedValueType);
    /// assert!(err.to_string().contains("found boolean"));
    /// ```
    pub fn unsupported_value(key: &str, expected: &'static str, found: &str) -> Self {
        Error::UnsupportedValueType {
            path: KeyPath::from_key(key),
            expected,
            found: found.to_string(),
        }
    }

    /// Creates a key conflict error for a duplicate `key` inside the current block.
    pub fn key_conflict(key: &str) -> Self {
        Error::KeyConflict {
            key: key.to_string(),
            path: KeyPath::root(),
        }
    }

    pub fn malformed_update(found: usize) -> Self {
        Error::MalformedUpdate { found }
    }

    /// Creates a depth error for nesting that went past `limit` under `key`.
    pub fn max_depth_exceeded(limit: usize, key: &str) -> Self {
        Error::MaxDepthExceeded {
            limit,
            path: KeyPath::from_key(key),
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedValueType { .. } => ErrorKind::UnsupportedValueType,
            Error::KeyConflict { .. } => ErrorKind::KeyConflict,
            Error::MalformedUpdate { .. } => ErrorKind::MalformedUpdate,
            Error::MaxDepthExceeded { .. } => ErrorKind::MaxDepthExceeded,
        }
    }

    /// Returns the key path of the error, if it has one.
    #[must_use]
    pub fn path(&self) -> Option<&KeyPath> {
        match self {
            Error::UnsupportedValueType { path, .. }
            | Error::KeyConflict { path, .. }
            | Error::MaxDepthExceeded { path, .. } => Some(path),
            Error::MalformedUpdate { .. } => None,
        }
    }

    /// Records that the error happened inside the value of `key`.
    ///
    /// Called while an error unwinds out of nested blocks, so the finished path reads
    /// outermost key first.
    #[must_use]
    pub fn within(mut self, key: &str) -> Self {
        match &mut self {
            Error::UnsupportedValueType { path, .. }
            | Error::KeyConflict { path, .. }
            | Error::MaxDepthExceeded { path, .. } => path.prepend(key),
            Error::MalformedUpdate { .. } => {}
        }
        self
    }
}

pub type Result<T> = std::result::Result<T, Error>;
