//! Reconstructing a nested mapping from a LookML syntax tree.
//!
//! The visitor discards every piece of concrete syntax (whitespace, quoting, brackets)
//! and keeps only keys and values. LookML allows keys like `dimension` to appear many
//! times in one block, which a mapping cannot hold, so repeated keys are collected into
//! a list under their plural (`dimensions`).
//!
//! Any other duplicate is a conflict, with one exception: a key declared twice at the
//! top level of a document keeps its last value and logs a warning.
//!
//! ## Examples
//!
//! ```rust
//! use lookml_tree::{build, lookml, visit};
//!
//! let views = lookml!({
//!     "views": [{
//!         "name": "orders",
//!         "dimensions": [
//!             { "name": "id", "sql": "${TABLE}.id" },
//!             { "name": "status", "sql": "${TABLE}.status" }
//!         ]
//!     }]
//! });
//!
//! let tree = build(&views).unwrap();
//! assert_eq!(visit(&tree).unwrap(), views);
//! ```

use tracing::{debug, warn};

use crate::keys::Grammar;
use crate::tree::{BlockNode, ContainerNode, DocumentNode, ListItems, ListNode, Node, PairNode};
use crate::{Error, KeyPath, LookmlMap, LookmlOptions, Result, SyntaxToken, Value};

/// Reads [`DocumentNode`]s back into mappings under one grammar and set of options.
#[derive(Debug)]
pub struct DictVisitor<'g, G: Grammar + ?Sized> {
    grammar: &'g G,
    options: &'g LookmlOptions,
}

impl<'g, G: Grammar + ?Sized> DictVisitor<'g, G> {
    pub fn new(grammar: &'g G, options: &'g LookmlOptions) -> Self {
        DictVisitor { grammar, options }
    }

    /// Converts a whole document into a mapping.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::KeyConflict`](crate::ErrorKind) when a non-repeatable key
    /// appears twice inside one block, and with
    /// [`ErrorKind::MaxDepthExceeded`](crate::ErrorKind) when blocks nest deeper than the
    /// configured limit.
    pub fn visit(&self, document: &DocumentNode) -> Result<LookmlMap> {
        debug!(nodes = document.container.items.len(), "visiting LookML tree");
        self.visit_container(&document.container, 0)
    }

    /// Converts a container into a mapping. The document body sits at depth 0.
    pub fn visit_container(&self, node: &ContainerNode, depth: usize) -> Result<LookmlMap> {
        if depth > self.options.max_depth {
            return Err(Error::MaxDepthExceeded {
                limit: self.options.max_depth,
                path: KeyPath::root(),
            });
        }
        let mut container = LookmlMap::with_capacity(node.items.len());
        for item in &node.items {
            let update = match item {
                Node::Block(block) => self.visit_block(block, depth)?,
                Node::List(list) => visit_list(list),
                Node::Pair(pair) => visit_pair(pair),
            };
            self.merge(&mut container, update, depth)?;
        }
        Ok(container)
    }

    fn visit_block(&self, node: &BlockNode, depth: usize) -> Result<LookmlMap> {
        let key = visit_token(&node.type_token);
        let mut body = self
            .visit_container(&node.container, depth + 1)
            .map_err(|err| err.within(&key))?;
        if let Some(name) = &node.name {
            body.insert("name".to_string(), Value::String(visit_token(name)));
        }
        Ok(single(key, Value::Object(body)))
    }

    /// Adds a single-key `update` into `target`, collecting repeatable keys into a list
    /// under their plural.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::MalformedUpdate`](crate::ErrorKind) if `update` does not
    /// hold exactly one key, and with [`ErrorKind::KeyConflict`](crate::ErrorKind) if the
    /// key is already present below the top level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lookml_tree::{lookml, DictVisitor, LookmlGrammar, LookmlOptions};
    ///
    /// let options = LookmlOptions::new();
    /// let visitor = DictVisitor::new(&LookmlGrammar, &options);
    ///
    /// let mut target = lookml!({ "name": "orders" });
    /// visitor
    ///     .merge(&mut target, lookml!({ "dimension": { "name": "id" } }), 1)
    ///     .unwrap();
    /// visitor
    ///     .merge(&mut target, lookml!({ "dimension": { "name": "status" } }), 1)
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     target,
    ///     lookml!({
    ///         "name": "orders",
    ///         "dimensions": [{ "name": "id" }, { "name": "status" }]
    ///     })
    /// );
    /// ```
    pub fn merge(&self, target: &mut LookmlMap, update: LookmlMap, depth: usize) -> Result<()> {
        let found = update.len();
        let mut entries = update.into_iter();
        let (key, value) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => return Err(Error::malformed_update(found)),
        };

        if self.grammar.is_repeatable(&key) {
            let plural_key = self.grammar.pluralize(&key);
            match target.get_mut(&plural_key) {
                Some(Value::Array(items)) => items.push(value),
                Some(_) => return Err(Error::key_conflict(&plural_key)),
                None => {
                    target.insert(plural_key, Value::Array(vec![value]));
                }
            }
        } else if target.contains_key(&key) {
            if depth > 0 {
                return Err(Error::key_conflict(&key));
            }
            warn!(
                key = %key,
                "multiple declarations of top-level key found, using the last-declared value"
            );
            target.insert(key, value);
        } else {
            target.insert(key, value);
        }
        Ok(())
    }
}

fn visit_list(node: &ListNode) -> LookmlMap {
    let items = match &node.items {
        ListItems::Tokens(tokens) => tokens
            .iter()
            .map(|token| Value::String(visit_token(token)))
            .collect(),
        ListItems::Pairs(pairs) => pairs
            .iter()
            .map(|pair| Value::Object(visit_pair(pair)))
            .collect(),
    };
    single(visit_token(&node.type_token), Value::Array(items))
}

fn visit_pair(node: &PairNode) -> LookmlMap {
    single(
        visit_token(&node.type_token),
        Value::String(visit_token(&node.value)),
    )
}

fn visit_token(token: &SyntaxToken) -> String {
    token.value.clone()
}

fn single(key: String, value: Value) -> LookmlMap {
    let mut map = LookmlMap::with_capacity(1);
    map.insert(key, value);
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::LookmlGrammar;
    use crate::{lookml, ErrorKind};

    fn pair(key: &str, value: &str) -> Node {
        PairNode::new(SyntaxToken::literal(key), SyntaxToken::literal(value)).into()
    }

    fn block(key: &str, name: Option<&str>, items: Vec<Node>) -> Node {
        BlockNode::new(
            SyntaxToken::literal(key),
            name.map(SyntaxToken::literal),
            ContainerNode::new(items),
        )
        .into()
    }

    fn visit(items: Vec<Node>) -> Result<LookmlMap> {
        let options = LookmlOptions::new();
        DictVisitor::new(&LookmlGrammar, &options)
            .visit(&DocumentNode::new(ContainerNode::new(items)))
    }

    #[test]
    fn test_block_name_injected_into_body() {
        let mapping = visit(vec![block(
            "view",
            Some("orders"),
            vec![pair("sql_table_name", "public.orders")],
        )])
        .unwrap();
        assert_eq!(
            mapping,
            lookml!({ "views": [{ "sql_table_name": "public.orders", "name": "orders" }] })
        );
    }

    #[test]
    fn test_repeated_blocks_collapse_into_plural_list() {
        let mapping = visit(vec![block(
            "view",
            Some("orders"),
            vec![
                block("dimension", Some("a"), vec![]),
                pair("label", "Orders"),
                block("dimension", Some("b"), vec![]),
            ],
        )])
        .unwrap();
        let views = mapping.get("views").and_then(Value::as_array).unwrap();
        let view = views[0].as_object().unwrap();
        assert_eq!(
            view.get("dimensions"),
            Some(&Value::from(lookml!([{ "name": "a" }, { "name": "b" }])))
        );
    }

    #[test]
    fn test_nested_duplicate_is_conflict() {
        let err = visit(vec![block(
            "view",
            Some("orders"),
            vec![block(
                "dimension",
                Some("id"),
                vec![pair("type", "number"), pair("type", "string")],
            )],
        )])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyConflict);
        assert_eq!(err.path().unwrap().to_string(), "view.dimension");
    }

    #[test]
    fn test_top_level_duplicate_keeps_last_value() {
        let mapping = visit(vec![
            pair("connection", "a"),
            pair("label", "Model"),
            pair("connection", "b"),
        ])
        .unwrap();
        assert_eq!(mapping.get("connection"), Some(&Value::from("b")));
        let keys: Vec<_> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["connection", "label"]);
    }

    #[test]
    fn test_top_level_duplicate_blocks_keep_last_value() {
        let mapping = visit(vec![
            block("datagroup_trigger", None, vec![pair("a", "1")]),
            block("datagroup_trigger", None, vec![pair("b", "2")]),
        ])
        .unwrap();
        assert_eq!(mapping, lookml!({ "datagroup_trigger": { "b": "2" } }));
    }

    #[test]
    fn test_merge_rejects_malformed_updates() {
        let options = LookmlOptions::new();
        let visitor = DictVisitor::new(&LookmlGrammar, &options);
        let mut target = LookmlMap::new();

        let err = visitor
            .merge(&mut target, lookml!({ "a": "1", "b": "2" }), 0)
            .unwrap_err();
        assert_eq!(err, Error::MalformedUpdate { found: 2 });

        let err = visitor.merge(&mut target, LookmlMap::new(), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedUpdate);
        assert!(target.is_empty());
    }

    #[test]
    fn test_plural_key_holding_scalar_is_conflict() {
        let options = LookmlOptions::new();
        let visitor = DictVisitor::new(&LookmlGrammar, &options);
        let mut target = lookml!({ "dimensions": "oops" });
        let err = visitor
            .merge(&mut target, lookml!({ "dimension": { "name": "id" } }), 1)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyConflict);
    }

    #[test]
    fn test_depth_limit() {
        let options = LookmlOptions::new().with_max_depth(1);
        let visitor = DictVisitor::new(&LookmlGrammar, &options);
        let doc = DocumentNode::new(ContainerNode::new(vec![block(
            "explore",
            Some("orders"),
            vec![block("join", Some("users"), vec![])],
        )]));
        let err = visitor.visit(&doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MaxDepthExceeded);
        assert_eq!(err.path().unwrap().to_string(), "explore.join");
    }

    #[test]
    fn test_list_items_become_strings_and_pairs() {
        let list = ListNode::new(
            SyntaxToken::literal("filters"),
            ListItems::Pairs(vec![PairNode::new(
                SyntaxToken::literal("status"),
                SyntaxToken::quoted("done"),
            )]),
        );
        let mapping = visit(vec![list.into()]).unwrap();
        assert_eq!(mapping, lookml!({ "filters": [{ "status": "done" }] }));
    }
}
