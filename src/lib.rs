//! # lookml_tree
//!
//! Converts nested LookML mappings into a renderable concrete syntax tree, and trees back
//! into mappings.
//!
//! ## What is LookML?
//!
//! LookML is Looker's modeling language. A document is a sequence of keyed declarations
//! of three kinds:
//!
//! ```text
//! view: orders {                              <- block, named "orders"
//!   sql_table_name: public.orders ;;          <- pair with an expression value
//!   fields: [id, status]                      <- list
//!   dimension: id {                           <- repeatable block
//!     primary_key: yes
//!   }
//!
//!   dimension: status {
//!     label: "Order Status"                   <- pair with a quoted value
//!   }
//! }
//! ```
//!
//! The mapping form of the same document is plain nested data. Keys that may repeat
//! (`dimension`, `join`, `explore`, ...) are collected into a list under their plural, and
//! a block's name becomes its `name` entry:
//!
//! ```text
//! {"views": [{"name": "orders",
//!              "sql_table_name": "public.orders",
//!              "fields": ["id", "status"],
//!              "dimensions": [{"name": "id", "primary_key": "yes"},
//!                             {"name": "status", "label": "Order Status"}]}]}
//! ```
//!
//! ## Key Features
//!
//! - **Two directions**: [`build`] turns a mapping into a [`DocumentNode`]; [`visit`] turns
//!   a tree back into a mapping
//! - **Lossless layout**: every token carries its own whitespace, so [`render`] is plain
//!   concatenation
//! - **Pluggable grammar**: which keys repeat or get quoted comes from a [`Grammar`] passed
//!   in explicitly; [`LookmlGrammar`] holds Looker's tables
//! - **Tree rewriting**: a [`Transformer`] rebuilds a tree node by node, overriding only
//!   the kinds it changes
//! - **Structured errors**: every failure names the dotted key path where it happened
//!
//! ## Quick Start
//!
//! ```rust
//! use lookml_tree::{build, lookml, render, visit};
//!
//! let view = lookml!({
//!     "views": [{
//!         "name": "orders",
//!         "sql_table_name": "public.orders",
//!         "dimensions": [
//!             { "name": "id", "primary_key": "yes" },
//!             { "name": "status", "label": "Order Status" }
//!         ]
//!     }]
//! });
//!
//! let tree = build(&view).unwrap();
//! assert_eq!(
//!     render(&tree),
//!     "view: orders {\n\
//!     \x20 sql_table_name: public.orders ;;\n\
//!     \x20 dimension: id {\n\
//!     \x20   primary_key: yes\n\
//!     \x20 }\n\
//!     \n\
//!     \x20 dimension: status {\n\
//!     \x20   label: \"Order Status\"\n\
//!     \x20 }\n\
//!     }"
//! );
//!
//! assert_eq!(visit(&tree).unwrap(), view);
//! ```
//!
//! ## Formatting Rules
//!
//! - Values of keys such as `label` or `description` are double-quoted; values of `sql*`
//!   and `html` keys are written raw and terminated by ` ;;`; everything else is bare
//! - Lists of fewer than five bare values stay on one line; longer lists, and lists of
//!   `field: value` pairs, are written one element per line with a trailing comma
//! - A block that directly follows another block is separated from it by a blank line
//! - An empty block renders as `{}`
//!
//! See [`LookmlOptions`] for the indentation and blank-line settings.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Recursion in both directions is bounded by [`LookmlOptions::max_depth`]
//! - No panics in the public API; every failure is a [`Result`]

pub mod builder;
pub mod error;
pub mod keys;
pub mod macros;
pub mod map;
pub mod options;
pub mod transform;
pub mod tree;
pub mod value;
pub mod visitor;

pub use builder::{Context, DictBuilder, Emitted};
pub use error::{Error, ErrorKind, KeyPath, Result};
pub use keys::{Grammar, LookmlGrammar};
pub use map::LookmlMap;
pub use options::LookmlOptions;
pub use transform::Transformer;
pub use tree::{
    BlockNode, Brace, ContainerNode, DocumentNode, ListItems, ListNode, Node, PairNode,
    SyntaxToken, TokenKind,
};
pub use value::{Number, Shape, Value};
pub use visitor::DictVisitor;

/// Build the syntax tree of a mapping using Looker's grammar and default options.
///
/// # Examples
///
/// ```rust
/// use lookml_tree::{build, lookml};
///
/// let tree = build(&lookml!({ "connection": "warehouse" })).unwrap();
/// assert_eq!(tree.to_string(), "connection: \"warehouse\"");
/// ```
///
/// # Errors
///
/// Returns an error if a value has no LookML representation or the mapping nests too
/// deeply.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn build(mapping: &LookmlMap) -> Result<DocumentNode> {
    build_with(mapping, &LookmlGrammar, &LookmlOptions::default())
}

/// Build the syntax tree of a mapping with a custom grammar and options.
///
/// # Examples
///
/// ```rust
/// use lookml_tree::{build_with, lookml, render, LookmlGrammar, LookmlOptions};
///
/// let explore = lookml!({
///     "explore": { "name": "orders", "label": "Orders", "join": { "name": "users" } }
/// });
/// let options = LookmlOptions::new().with_blank_line_before_blocks(true);
/// let tree = build_with(&explore, &LookmlGrammar, &options).unwrap();
/// assert_eq!(
///     render(&tree),
///     "explore: orders {\n  label: \"Orders\"\n\n  join: users {}\n}"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if a value has no LookML representation or the mapping nests deeper
/// than `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn build_with<G>(
    mapping: &LookmlMap,
    grammar: &G,
    options: &LookmlOptions,
) -> Result<DocumentNode>
where
    G: Grammar + ?Sized,
{
    DictBuilder::new(grammar, options).build(mapping)
}

/// Convert a syntax tree back into a mapping using Looker's grammar and default options.
///
/// # Examples
///
/// ```rust
/// use lookml_tree::{build, lookml, visit};
///
/// let model = lookml!({ "includes": ["*.view"], "connection": "warehouse" });
/// let tree = build(&model).unwrap();
/// assert_eq!(visit(&tree).unwrap(), model);
/// ```
///
/// # Errors
///
/// Returns an error if a non-repeatable key is declared twice inside one block, or the
/// tree nests too deeply.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn visit(document: &DocumentNode) -> Result<LookmlMap> {
    visit_with(document, &LookmlGrammar, &LookmlOptions::default())
}

/// Convert a syntax tree back into a mapping with a custom grammar and options.
///
/// # Errors
///
/// Returns an error if a non-repeatable key is declared twice inside one block, or the
/// tree nests deeper than `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn visit_with<G>(
    document: &DocumentNode,
    grammar: &G,
    options: &LookmlOptions,
) -> Result<LookmlMap>
where
    G: Grammar + ?Sized,
{
    DictVisitor::new(grammar, options).visit(document)
}

/// Render a syntax tree as LookML text.
///
/// Rendering concatenates every token with its surrounding whitespace, so it never
/// fails.
#[must_use]
pub fn render(document: &DocumentNode) -> String {
    document.to_string()
}
