//! Rewriting a syntax tree node by node.
//!
//! A [`Transformer`] consumes a tree and returns a new one. Every method has a default
//! that rebuilds its node from the transformed children, so an implementation overrides
//! only the node kinds it wants to change. Layout is carried along untouched: braces,
//! brackets and trailing commas pass through as they were.
//!
//! ```rust
//! use lookml_tree::{build, lookml, render, PairNode, SyntaxToken, Transformer};
//!
//! /// Points every `connection` at a different database.
//! struct Reconnect(&'static str);
//!
//! impl Transformer for Reconnect {
//!     fn transform_pair(&mut self, pair: PairNode) -> PairNode {
//!         if pair.type_token.value == "connection" {
//!             PairNode::new(pair.type_token, SyntaxToken::quoted(self.0))
//!         } else {
//!             pair
//!         }
//!     }
//! }
//!
//! let tree = build(&lookml!({ "connection": "warehouse" })).unwrap();
//! let tree = Reconnect("staging").transform_document(tree);
//! assert_eq!(render(&tree), "connection: \"staging\"");
//! ```

use crate::tree::{
    BlockNode, ContainerNode, DocumentNode, ListItems, ListNode, Node, PairNode, SyntaxToken,
};

/// A bottom-up rewrite of a syntax tree.
///
/// Children are transformed before the node that holds them is handed back, so an
/// override of [`transform_block`](Transformer::transform_block) that calls the default
/// sees a body that has already been rewritten.
pub trait Transformer {
    fn transform_document(&mut self, document: DocumentNode) -> DocumentNode {
        DocumentNode::new(self.transform_container(document.container))
    }

    fn transform_container(&mut self, container: ContainerNode) -> ContainerNode {
        let items = container
            .items
            .into_iter()
            .map(|node| self.transform_node(node))
            .collect();
        ContainerNode::new(items)
    }

    /// Dispatches on the node kind.
    fn transform_node(&mut self, node: Node) -> Node {
        match node {
            Node::Block(block) => Node::Block(self.transform_block(block)),
            Node::List(list) => Node::List(self.transform_list(list)),
            Node::Pair(pair) => Node::Pair(self.transform_pair(pair)),
        }
    }

    fn transform_block(&mut self, block: BlockNode) -> BlockNode {
        BlockNode {
            type_token: self.transform_token(block.type_token),
            name: block.name.map(|name| self.transform_token(name)),
            left_brace: block.left_brace,
            container: self.transform_container(block.container),
            right_brace: block.right_brace,
        }
    }

    fn transform_list(&mut self, list: ListNode) -> ListNode {
        let items = match list.items {
            ListItems::Tokens(tokens) => ListItems::Tokens(
                tokens
                    .into_iter()
                    .map(|token| self.transform_token(token))
                    .collect(),
            ),
            ListItems::Pairs(pairs) => ListItems::Pairs(
                pairs
                    .into_iter()
                    .map(|pair| self.transform_pair(pair))
                    .collect(),
            ),
        };
        ListNode {
            type_token: self.transform_token(list.type_token),
            left_bracket: list.left_bracket,
            items,
            right_bracket: list.right_bracket,
            trailing_comma: list.trailing_comma,
        }
    }

    fn transform_pair(&mut self, pair: PairNode) -> PairNode {
        PairNode::new(
            self.transform_token(pair.type_token),
            self.transform_token(pair.value),
        )
    }

    fn transform_token(&mut self, token: SyntaxToken) -> SyntaxToken {
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build, lookml, render, visit, Value};

    struct Identity;

    impl Transformer for Identity {}

    /// Rewrites the value of every `connection` pair, keeping its quoting.
    struct Reconnect {
        database: String,
        rewritten: usize,
    }

    impl Transformer for Reconnect {
        fn transform_pair(&mut self, pair: PairNode) -> PairNode {
            if pair.type_token.value != "connection" {
                return pair;
            }
            self.rewritten += 1;
            let value = SyntaxToken {
                value: self.database.clone(),
                ..pair.value
            };
            PairNode::new(pair.type_token, value)
        }
    }

    /// Counts every token it passes through.
    #[derive(Default)]
    struct TokenCounter {
        seen: usize,
    }

    impl Transformer for TokenCounter {
        fn transform_token(&mut self, token: SyntaxToken) -> SyntaxToken {
            self.seen += 1;
            token
        }
    }

    fn model() -> crate::LookmlMap {
        lookml!({
            "connection": "warehouse",
            "includes": ["*.view"],
            "explores": [{
                "name": "orders",
                "label": "Orders",
                "fields": ["orders.id", "users.email"],
                "joins": [{ "name": "users", "sql_on": "${orders.user_id} = ${users.id}" }]
            }]
        })
    }

    #[test]
    fn test_default_methods_rebuild_the_same_tree() {
        let tree = build(&model()).unwrap();
        let rebuilt = Identity.transform_document(tree.clone());
        assert_eq!(rebuilt, tree);
        assert_eq!(render(&rebuilt), render(&tree));
    }

    #[test]
    fn test_rewrite_one_pair_value() {
        let tree = build(&model()).unwrap();
        let mut reconnect = Reconnect {
            database: "staging".to_string(),
            rewritten: 0,
        };
        let rewritten = reconnect.transform_document(tree.clone());
        assert_eq!(reconnect.rewritten, 1);

        assert_eq!(
            render(&rewritten),
            render(&tree).replace("connection: \"warehouse\"", "connection: \"staging\"")
        );
        assert_eq!(rewritten.container.items[1..], tree.container.items[1..]);

        let mut expected = model();
        expected.insert("connection".to_string(), Value::from("staging"));
        assert_eq!(visit(&rewritten).unwrap(), expected);
    }

    #[test]
    fn test_tokens_reach_transform_token() {
        let tree = build(&lookml!({
            "fields": ["a", "b"],
            "filters": [{ "status": "complete" }],
            "view": { "name": "orders", "hidden": "yes" }
        }))
        .unwrap();
        let mut counter = TokenCounter::default();
        let _ = counter.transform_document(tree);
        // fields + 2 items, filters + 1 pair, view + name + 1 pair
        assert_eq!(counter.seen, 3 + 3 + 4);
    }
}
