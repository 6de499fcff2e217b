//! Configuration options for building and visiting LookML trees.
//!
//! ## Examples
//!
//! ```rust
//! use lookml_tree::{build_with, lookml, render, LookmlGrammar, LookmlOptions};
//!
//! let view = lookml!({ "view": { "name": "orders", "sql_table_name": "public.orders" } });
//!
//! let options = LookmlOptions::new().with_indent(4);
//! let tree = build_with(&view, &LookmlGrammar, &options).unwrap();
//! assert_eq!(
//!     render(&tree),
//!     "view: orders {\n    sql_table_name: public.orders ;;\n}"
//! );
//! ```

/// Default limit on how deeply blocks and lists may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration shared by the builder and the visitor.
///
/// # Examples
///
/// ```rust
/// use lookml_tree::LookmlOptions;
///
/// // Two-space indentation, depth limit of 128
/// let options = LookmlOptions::new();
///
/// // Custom configuration
/// let options = LookmlOptions::new()
///     .with_indent(4)
///     .with_max_depth(16)
///     .with_blank_line_before_blocks(true);
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookmlOptions {
    /// Spaces per indentation level
    pub indent: usize,
    /// Deepest block nesting accepted in either direction. A top-level block sits at
    /// depth 1; lists and pairs add nothing.
    pub max_depth: usize,
    /// Separate a block from *any* previous sibling with a blank line, not only from a
    /// previous block
    pub blank_line_before_blocks: bool,
}

impl Default for LookmlOptions {
    fn default() -> Self {
        LookmlOptions {
            indent: 2,
            max_depth: DEFAULT_MAX_DEPTH,
            blank_line_before_blocks: false,
        }
    }
}

impl LookmlOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lookml_tree::LookmlOptions;
    ///
    /// let options = LookmlOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.blank_line_before_blocks);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the deepest nesting accepted before failing with
    /// [`ErrorKind::MaxDepthExceeded`](crate::ErrorKind::MaxDepthExceeded).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Puts a blank line above every block that follows another sibling.
    ///
    /// By default only consecutive blocks are separated by a blank line.
    #[must_use]
    pub fn with_blank_line_before_blocks(mut self, enabled: bool) -> Self {
        self.blank_line_before_blocks = enabled;
        self
    }

    /// Returns the whitespace for `level` levels of indentation.
    #[must_use]
    pub fn indent_for(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_for() {
        let options = LookmlOptions::new();
        assert_eq!(options.indent_for(0), "");
        assert_eq!(options.indent_for(3), "      ");
        assert_eq!(options.with_indent(4).indent_for(1), "    ");
    }
}
