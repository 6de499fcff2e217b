//! Building a LookML syntax tree from a nested mapping.
//!
//! The builder walks a [`LookmlMap`] top-down and decides, for every key, which node
//! represents it:
//!
//! | value | node |
//! |-------|------|
//! | string | [`PairNode`] |
//! | array under a plural key (`dimensions`) | one sibling node per element (`dimension`) |
//! | any other array | [`ListNode`] |
//! | mapping | [`BlockNode`], named after its `name` entry when it has one |
//!
//! Whitespace is decided while building. A [`Context`] travels down the recursion
//! holding the parent key, the indent level and the kind of the previous sibling; each
//! step hands back the kind of node it emitted last so the next sibling knows whether
//! it needs a blank line above it.
//!
//! ## Examples
//!
//! ```rust
//! use lookml_tree::{lookml, render, DictBuilder, LookmlGrammar, LookmlOptions};
//!
//! let options = LookmlOptions::new();
//! let builder = DictBuilder::new(&LookmlGrammar, &options);
//!
//! let tree = builder
//!     .build(&lookml!({
//!         "dimensions": [
//!             { "name": "id", "primary_key": "yes" },
//!             { "name": "status" }
//!         ]
//!     }))
//!     .unwrap();
//!
//! assert_eq!(
//!     render(&tree),
//!     "dimension: id {\n  primary_key: yes\n}\n\ndimension: status {}"
//! );
//! ```

use tracing::{debug, trace};

use crate::keys::Grammar;
use crate::tree::{
    BlockNode, Brace, ContainerNode, DocumentNode, ListItems, ListNode, Node, PairNode,
    SyntaxToken,
};
use crate::{Error, LookmlMap, LookmlOptions, Result, Shape, Value};

/// Lists this long or longer are written one element per line.
pub const MULTILINE_LIST_THRESHOLD: usize = 5;

/// The kind of node most recently emitted at the current level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emitted {
    /// Nothing yet, at the start of the document
    Document,
    /// Nothing yet, just inside a newly opened block or list
    Fresh,
    Block,
    List,
    Pair,
}

/// Formatting state for one position in the tree being built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Context<'p> {
    /// Key of the innermost enclosing block or list
    pub parent_key: Option<&'p str>,
    /// Indentation level of nodes emitted here
    pub level: usize,
    pub last_emitted: Emitted,
    depth: usize,
}

impl<'p> Context<'p> {
    /// The context at the start of a document.
    #[must_use]
    pub fn root() -> Self {
        Context {
            parent_key: None,
            level: 0,
            last_emitted: Emitted::Document,
            depth: 0,
        }
    }

    /// The same position after `kind` has been emitted.
    #[must_use]
    pub fn after(self, kind: Emitted) -> Self {
        Context {
            last_emitted: kind,
            ..self
        }
    }

    /// The context for the body of a block or list declared by `key`.
    #[must_use]
    pub fn nested(self, key: &'p str) -> Self {
        Context {
            parent_key: Some(key),
            level: self.level + 1,
            last_emitted: Emitted::Fresh,
            depth: self.depth + 1,
        }
    }

    /// Whitespace placed before the next node at this position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lookml_tree::builder::{Context, Emitted};
    /// use lookml_tree::LookmlOptions;
    ///
    /// let options = LookmlOptions::new();
    /// let ctx = Context::root();
    /// assert_eq!(ctx.prefix(&options), "");
    ///
    /// let body = ctx.nested("view");
    /// assert_eq!(body.prefix(&options), "\n  ");
    /// assert_eq!(body.after(Emitted::Pair).prefix(&options), "\n  ");
    /// assert_eq!(body.after(Emitted::Block).prefix(&options), "\n\n  ");
    /// ```
    #[must_use]
    pub fn prefix(&self, options: &LookmlOptions) -> String {
        let newline_indent = format!("\n{}", options.indent_for(self.level));
        match self.last_emitted {
            Emitted::Document => String::new(),
            Emitted::Fresh | Emitted::List | Emitted::Pair => newline_indent,
            Emitted::Block => format!("\n{newline_indent}"),
        }
    }

    fn block_prefix(&self, options: &LookmlOptions) -> String {
        match self.last_emitted {
            Emitted::List | Emitted::Pair if options.blank_line_before_blocks => {
                format!("\n\n{}", options.indent_for(self.level))
            }
            _ => self.prefix(options),
        }
    }
}

/// Builds [`DocumentNode`]s from mappings under one grammar and set of options.
///
/// The builder itself holds no mutable state, so one instance can serve any number of
/// calls, including concurrent ones.
#[derive(Debug)]
pub struct DictBuilder<'g, G: Grammar + ?Sized> {
    grammar: &'g G,
    options: &'g LookmlOptions,
}

impl<'g, G: Grammar + ?Sized> DictBuilder<'g, G> {
    pub fn new(grammar: &'g G, options: &'g LookmlOptions) -> Self {
        DictBuilder { grammar, options }
    }

    /// Builds the syntax tree of a whole document.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::UnsupportedValueType`](crate::ErrorKind) when a value has no
    /// LookML form and with [`ErrorKind::MaxDepthExceeded`](crate::ErrorKind) when blocks
    /// nest deeper than the configured limit.
    pub fn build(&self, mapping: &LookmlMap) -> Result<DocumentNode> {
        debug!(keys = mapping.len(), "building LookML tree");
        let (items, _) = self.build_items(mapping.iter(), Context::root())?;
        Ok(DocumentNode::new(ContainerNode::new(items)))
    }

    fn build_items<'v, I>(&self, entries: I, mut ctx: Context<'_>) -> Result<(Vec<Node>, Emitted)>
    where
        I: Iterator<Item = (&'v String, &'v Value)>,
    {
        let mut nodes = Vec::new();
        for (key, value) in entries {
            let (built, emitted) = self.classify(key, value, &ctx)?;
            nodes.extend(built);
            ctx = ctx.after(emitted);
        }
        Ok((nodes, ctx.last_emitted))
    }

    /// Turns one key and its value into nodes.
    ///
    /// Returns the nodes (several for a plural key, none for an empty plural list) and
    /// the kind of the last node emitted.
    pub fn classify(
        &self,
        key: &str,
        value: &Value,
        ctx: &Context<'_>,
    ) -> Result<(Vec<Node>, Emitted)> {
        match value.shape() {
            Shape::Scalar(text) => {
                let pair = self.build_pair(key, text, ctx);
                Ok((vec![pair.into()], Emitted::Pair))
            }
            Shape::Sequence(items) if self.is_plural_key(key, ctx) => {
                self.expand_list(key, items, ctx)
            }
            Shape::Sequence(items) => {
                let list = self.build_list(key, items, ctx)?;
                Ok((vec![list.into()], Emitted::List))
            }
            Shape::Nested(fields) => {
                let name = self.block_name(key, fields)?;
                let block = self.build_block(key, fields, name, ctx)?;
                Ok((vec![block.into()], Emitted::Block))
            }
            Shape::Unsupported(found) => Err(Error::unsupported_value(
                key,
                "a string, sequence, or mapping",
                found,
            )),
        }
    }

    /// Returns `true` if a sequence under `key` is written as repeated sibling nodes.
    ///
    /// `allowed_values` inside an `access_grant` is the one plural key that stays a
    /// plain list.
    #[must_use]
    pub fn is_plural_key(&self, key: &str, ctx: &Context<'_>) -> bool {
        let singular = self.grammar.singularize(key);
        self.grammar.is_repeatable(&singular)
            && !(singular == "allowed_value"
                && ctx.parent_key.map(|parent| parent.trim_end_matches('s'))
                    == Some("access_grant"))
    }

    fn expand_list(
        &self,
        key: &str,
        items: &[Value],
        ctx: &Context<'_>,
    ) -> Result<(Vec<Node>, Emitted)> {
        let singular = self.grammar.singularize(key);
        trace!(key, singular = %singular, count = items.len(), "expanding repeated key");

        let mut nodes = Vec::with_capacity(items.len());
        let mut ctx = *ctx;
        for item in items {
            // A repeated key holds one block or value per element, never another list
            if item.is_array() {
                return Err(Error::unsupported_value(
                    &singular,
                    "a string or mapping",
                    item.type_name(),
                ));
            }
            let (built, emitted) = self.classify(&singular, item, &ctx)?;
            nodes.extend(built);
            ctx = ctx.after(emitted);
        }
        Ok((nodes, ctx.last_emitted))
    }

    fn block_name<'v>(&self, key: &str, fields: &'v LookmlMap) -> Result<Option<&'v str>> {
        if self.grammar.requires_name_extraction(key) {
            return Ok(None);
        }
        match fields.get("name").map(Value::shape) {
            None => Ok(None),
            Some(Shape::Scalar("")) => Ok(None),
            Some(Shape::Scalar(name)) => Ok(Some(name)),
            Some(_) => {
                let found = fields.get("name").map_or("nothing", Value::type_name);
                Err(Error::unsupported_value("name", "a string", found).within(key))
            }
        }
    }

    fn enter<'p>(&self, key: &'p str, ctx: &Context<'p>) -> Result<Context<'p>> {
        let inner = ctx.nested(key);
        if inner.depth > self.options.max_depth {
            return Err(Error::max_depth_exceeded(self.options.max_depth, key));
        }
        Ok(inner)
    }

    fn build_block(
        &self,
        key: &str,
        fields: &LookmlMap,
        name: Option<&str>,
        ctx: &Context<'_>,
    ) -> Result<BlockNode> {
        let type_token = SyntaxToken::literal(key).with_prefix(ctx.block_prefix(self.options));

        let inner = self.enter(key, ctx)?;
        let body = fields
            .iter()
            .filter(|(field, _)| name.is_none() || field.as_str() != "name");
        let (items, _) = self
            .build_items(body, inner)
            .map_err(|err| err.within(key))?;

        let container = ContainerNode::new(items);
        let closing = if container.is_empty() {
            String::new()
        } else {
            format!("\n{}", self.options.indent_for(ctx.level))
        };

        let mut block = BlockNode::new(type_token, name.map(SyntaxToken::literal), container);
        block.right_brace = Brace::with_prefix(closing);
        Ok(block)
    }

    fn build_list(&self, key: &str, items: &[Value], ctx: &Context<'_>) -> Result<ListNode> {
        // `suggestions` is only quoted when it's a list
        let force_quote = key == "suggestions";
        let type_token = SyntaxToken::literal(key).with_prefix(ctx.prefix(self.options));
        // Only blocks count toward the depth limit
        let inner = ctx.nested(key);

        let pair_mode = items.first().is_some_and(|first| !first.is_plain_scalar());
        if !pair_mode && items.len() < MULTILINE_LIST_THRESHOLD {
            let mut tokens = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let token = self.list_token(key, item, force_quote)?;
                tokens.push(if i == 0 { token } else { token.with_prefix(" ") });
            }
            return Ok(ListNode::new(type_token, ListItems::Tokens(tokens)));
        }

        let list_items = if pair_mode {
            let mut pairs = Vec::with_capacity(items.len());
            let mut pair_ctx = inner;
            for item in items {
                let (field, text) = single_pair(key, item)?;
                pairs.push(self.build_pair(field, text, &pair_ctx));
                pair_ctx = pair_ctx.after(Emitted::Pair);
            }
            ListItems::Pairs(pairs)
        } else {
            let item_prefix = inner.prefix(self.options);
            let mut tokens = Vec::with_capacity(items.len());
            for item in items {
                let token = self.list_token(key, item, force_quote)?;
                tokens.push(token.with_prefix(item_prefix.clone()));
            }
            ListItems::Tokens(tokens)
        };

        let mut list = ListNode::new(type_token, list_items);
        list.trailing_comma = true;
        list.right_bracket =
            Brace::with_prefix(format!("\n{}", self.options.indent_for(ctx.level)));
        Ok(list)
    }

    fn list_token(&self, key: &str, item: &Value, force_quote: bool) -> Result<SyntaxToken> {
        let text = item.scalar_text().ok_or_else(|| {
            Error::unsupported_value(key, "a string or integer", item.type_name())
        })?;
        Ok(self.value_token(key, &text, force_quote))
    }

    fn build_pair(&self, key: &str, value: &str, ctx: &Context<'_>) -> PairNode {
        let force_quote = ctx.parent_key == Some("filters");
        PairNode::new(
            SyntaxToken::literal(key).with_prefix(ctx.prefix(self.options)),
            self.value_token(key, value, force_quote),
        )
    }

    fn value_token(&self, key: &str, value: &str, force_quote: bool) -> SyntaxToken {
        if force_quote || self.grammar.is_quoted_literal(key) {
            SyntaxToken::quoted(value)
        } else if self.grammar.is_expression_block(key) {
            SyntaxToken::expression(value)
        } else {
            SyntaxToken::literal(value)
        }
    }
}

/// Unpacks a list element written as `field: value` inside a list of pairs.
fn single_pair<'v>(key: &str, item: &'v Value) -> Result<(&'v str, &'v str)> {
    let entry = match item {
        Value::Object(fields) if fields.len() == 1 => fields.iter().next(),
        _ => None,
    };
    let Some((field, value)) = entry else {
        let found = match item {
            Value::Object(fields) => format!("a mapping with {} keys", fields.len()),
            other => other.type_name().to_string(),
        };
        return Err(Error::unsupported_value(key, "a mapping with exactly one key", &found));
    };
    match value.shape() {
        Shape::Scalar(text) => Ok((field, text)),
        _ => Err(Error::unsupported_value(field, "a string", value.type_name()).within(key)),
    }
}
