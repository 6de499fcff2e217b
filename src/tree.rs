//! The concrete syntax tree of a LookML document.
//!
//! Nodes own their children outright and carry every piece of whitespace they render
//! with, so a tree is rendered by concatenation alone: each node's [`Display`]
//! implementation writes its tokens in order.
//!
//! ```text
//! DocumentNode
//! └── ContainerNode
//!     ├── BlockNode   view: orders { ... }
//!     │   └── ContainerNode
//!     │       ├── PairNode   sql_table_name: public.orders ;;
//!     │       └── ListNode   fields: [id, status]
//!     └── PairNode    label: "Orders"
//! ```
//!
//! Node kinds form a closed set ([`Node`], [`ListItems`], [`TokenKind`]), so the
//! renderer and the visitor match on them exhaustively.

use std::fmt;

/// How a [`SyntaxToken`] renders its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Written as-is: `hidden: yes`
    Literal,
    /// Wrapped in double quotes: `label: "Orders"`
    Quoted,
    /// Raw code running to a `;;` terminator: `sql: ${TABLE}.id ;;`
    Expression,
}

/// The atomic renderable unit: a value with the whitespace around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxToken {
    pub kind: TokenKind,
    pub value: String,
    pub prefix: String,
    pub suffix: String,
}

impl SyntaxToken {
    fn new(kind: TokenKind, value: String) -> Self {
        SyntaxToken {
            kind,
            value,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Creates a token rendered as-is.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Literal, value.into())
    }

    /// Creates a token rendered in double quotes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lookml_tree::SyntaxToken;
    ///
    /// assert_eq!(SyntaxToken::quoted("Orders").to_string(), "\"Orders\"");
    /// ```
    #[must_use]
    pub fn quoted(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Quoted, value.into())
    }

    /// Creates an expression token. Surrounding whitespace is stripped; rendering adds
    /// a single space and the `;;` terminator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lookml_tree::SyntaxToken;
    ///
    /// let token = SyntaxToken::expression("${TABLE}.id  \n");
    /// assert_eq!(token.value, "${TABLE}.id");
    /// assert_eq!(token.to_string(), "${TABLE}.id ;;");
    /// ```
    #[must_use]
    pub fn expression(value: &str) -> Self {
        Self::new(TokenKind::Expression, value.trim().to_string())
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl fmt::Display for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        match self.kind {
            TokenKind::Literal => f.write_str(&self.value)?,
            TokenKind::Quoted => write!(f, "\"{}\"", self.value.replace('"', "\\\""))?,
            TokenKind::Expression => write!(f, "{} ;;", self.value)?,
        }
        f.write_str(&self.suffix)
    }
}

/// A brace or bracket. Only its leading whitespace varies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Brace {
    pub prefix: String,
}

impl Brace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Brace {
            prefix: prefix.into(),
        }
    }
}

/// A scalar assignment, `type: value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairNode {
    pub type_token: SyntaxToken,
    pub value: SyntaxToken,
}

impl PairNode {
    #[must_use]
    pub fn new(type_token: SyntaxToken, value: SyntaxToken) -> Self {
        PairNode { type_token, value }
    }
}

impl fmt::Display for PairNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_token, self.value)
    }
}

/// The elements of a [`ListNode`]. A list holds either bare values or pairs, never a
/// mix of both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListItems {
    Tokens(Vec<SyntaxToken>),
    Pairs(Vec<PairNode>),
}

impl ListItems {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ListItems::Tokens(tokens) => tokens.len(),
            ListItems::Pairs(pairs) => pairs.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ListItems {
    fn default() -> Self {
        ListItems::Tokens(Vec::new())
    }
}

/// A bracketed list, `type: [a, b]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListNode {
    pub type_token: SyntaxToken,
    pub left_bracket: Brace,
    pub items: ListItems,
    pub right_bracket: Brace,
    pub trailing_comma: bool,
}

impl ListNode {
    #[must_use]
    pub fn new(type_token: SyntaxToken, items: ListItems) -> Self {
        ListNode {
            type_token,
            left_bracket: Brace::new(),
            items,
            right_bracket: Brace::new(),
            trailing_comma: false,
        }
    }
}

impl fmt::Display for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}[", self.type_token, self.left_bracket.prefix)?;
        match &self.items {
            ListItems::Tokens(tokens) => write_separated(f, tokens)?,
            ListItems::Pairs(pairs) => write_separated(f, pairs)?,
        }
        if self.trailing_comma && !self.items.is_empty() {
            f.write_str(",")?;
        }
        write!(f, "{}]", self.right_bracket.prefix)
    }
}

fn write_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// A braced block, `type: name { ... }`, or anonymous, `type: { ... }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockNode {
    pub type_token: SyntaxToken,
    pub name: Option<SyntaxToken>,
    pub left_brace: Brace,
    pub container: ContainerNode,
    pub right_brace: Brace,
}

impl BlockNode {
    /// Creates a block with single-line spacing around its braces.
    #[must_use]
    pub fn new(
        type_token: SyntaxToken,
        name: Option<SyntaxToken>,
        container: ContainerNode,
    ) -> Self {
        let left_brace = if name.is_some() {
            Brace::with_prefix(" ")
        } else {
            Brace::new()
        };
        BlockNode {
            type_token,
            name,
            left_brace,
            container,
            right_brace: Brace::new(),
        }
    }
}

impl fmt::Display for BlockNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.type_token)?;
        if let Some(name) = &self.name {
            write!(f, "{}", name)?;
        }
        write!(
            f,
            "{}{{{}{}}}",
            self.left_brace.prefix, self.container, self.right_brace.prefix
        )
    }
}

/// Any child of a [`ContainerNode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Block(BlockNode),
    List(ListNode),
    Pair(PairNode),
}

impl Node {
    /// Returns the token naming the key this node declares.
    #[must_use]
    pub fn type_token(&self) -> &SyntaxToken {
        match self {
            Node::Block(block) => &block.type_token,
            Node::List(list) => &list.type_token,
            Node::Pair(pair) => &pair.type_token,
        }
    }

    #[must_use]
    pub fn as_block(&self) -> Option<&BlockNode> {
        match self {
            Node::Block(block) => Some(block),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&ListNode> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_pair(&self) -> Option<&PairNode> {
        match self {
            Node::Pair(pair) => Some(pair),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Block(block) => block.fmt(f),
            Node::List(list) => list.fmt(f),
            Node::Pair(pair) => pair.fmt(f),
        }
    }
}

impl From<BlockNode> for Node {
    fn from(node: BlockNode) -> Self {
        Node::Block(node)
    }
}

impl From<ListNode> for Node {
    fn from(node: ListNode) -> Self {
        Node::List(node)
    }
}

impl From<PairNode> for Node {
    fn from(node: PairNode) -> Self {
        Node::Pair(node)
    }
}

/// An ordered sequence of sibling nodes: a block body or the document body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerNode {
    pub items: Vec<Node>,
}

impl ContainerNode {
    #[must_use]
    pub fn new(items: Vec<Node>) -> Self {
        ContainerNode { items }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for ContainerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// The root of a LookML syntax tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentNode {
    pub container: ContainerNode,
}

impl DocumentNode {
    #[must_use]
    pub fn new(container: ContainerNode) -> Self {
        DocumentNode { container }
    }
}

impl fmt::Display for DocumentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.container.fmt(f)
    }
}
