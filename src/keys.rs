//! Key classification for the LookML grammar.
//!
//! The builder and the visitor never hard-code which keys repeat or how their values
//! are quoted. They ask a [`Grammar`], which is passed in explicitly. [`LookmlGrammar`]
//! carries Looker's tables; tests and tools substitute their own.

/// Read-only lookups describing a LookML-style grammar.
pub trait Grammar {
    /// Returns `true` if `key` may be declared more than once in the same block
    /// (`dimension`, `join`, ...).
    fn is_repeatable(&self, key: &str) -> bool;

    /// Converts a singular repeatable key into the plural key that holds its list.
    fn pluralize(&self, key: &str) -> String;

    /// Converts a plural key back into its singular form. Keys that are not plural
    /// come back unchanged.
    fn singularize(&self, key: &str) -> String;

    /// Returns `true` if blocks of this key keep `name` as an ordinary field instead of
    /// floating it out as the block name.
    fn requires_name_extraction(&self, key: &str) -> bool;

    /// Returns `true` if values of this key are rendered in double quotes.
    fn is_quoted_literal(&self, key: &str) -> bool;

    /// Returns `true` if values of this key are raw code terminated by `;;`.
    fn is_expression_block(&self, key: &str) -> bool;
}

/// Keys that may repeat inside one block.
pub const REPEATABLE_KEYS: &[&str] = &[
    "access_filter",
    "access_grant",
    "action",
    "aggregate_table",
    "allowed_value",
    "analysis_config",
    "application",
    "assert",
    "column",
    "constant",
    "datagroup",
    "derived_column",
    "dimension",
    "dimension_group",
    "explore",
    "form_param",
    "include",
    "join",
    "link",
    "local_dependency",
    "map_layer",
    "measure",
    "named_value_format",
    "option",
    "override_constant",
    "param",
    "parameter",
    "query",
    "remote_dependency",
    "set",
    "sql_step",
    "test",
    "user_attribute_param",
    "view",
    "when",
];

/// Block keys whose `name` field stays inside the block body.
pub const KEYS_WITH_NAME_FIELDS: &[&str] =
    &["user_attribute_param", "param", "form_param", "option"];

/// Keys whose values are always double-quoted.
pub const QUOTED_LITERAL_KEYS: &[&str] = &[
    "allowed_values",
    "cluster_keys",
    "connection",
    "default",
    "default_value",
    "description",
    "direction",
    "distribution",
    "else",
    "extents_json_url",
    "feature_key",
    "file",
    "form_url",
    "group_item_label",
    "group_label",
    "icon_url",
    "include",
    "indexes",
    "interval_trigger",
    "label",
    "max_cache_age",
    "name",
    "partition_keys",
    "persist_for",
    "property_key",
    "property_label_key",
    "sortkeys",
    "suggest_persist_for",
    "tags",
    "timezone",
    "url",
    "value",
    "value_format",
    "view_label",
];

/// Keys whose values are embedded SQL, HTML or Looker expressions.
pub const EXPR_BLOCK_KEYS: &[&str] = &[
    "expression",
    "expression_custom_filter",
    "html",
    "sql",
    "sql_always_having",
    "sql_always_where",
    "sql_create",
    "sql_distinct_key",
    "sql_end",
    "sql_for",
    "sql_foreign_key",
    "sql_latitude",
    "sql_longitude",
    "sql_on",
    "sql_preamble",
    "sql_start",
    "sql_step",
    "sql_table_name",
    "sql_trigger",
    "sql_trigger_value",
    "sql_where",
];

/// Converts a singular key like `explore` into its plural, `explores`.
///
/// # Examples
///
/// ```rust
/// use lookml_tree::keys::pluralize;
///
/// assert_eq!(pluralize("dimension"), "dimensions");
/// assert_eq!(pluralize("query"), "queries");
/// ```
#[must_use]
pub fn pluralize(key: &str) -> String {
    if key == "query" {
        return "queries".to_string();
    }
    format!("{key}s")
}

/// Converts a plural key like `explores` into its singular, `explore`.
///
/// # Examples
///
/// ```rust
/// use lookml_tree::keys::singularize;
///
/// assert_eq!(singularize("dimension_groups"), "dimension_group");
/// assert_eq!(singularize("queries"), "query");
/// assert_eq!(singularize("sql"), "sql");
/// ```
#[must_use]
pub fn singularize(key: &str) -> String {
    if key == "queries" {
        return "query".to_string();
    }
    key.strip_suffix('s').unwrap_or(key).to_string()
}

/// The grammar of Looker's LookML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LookmlGrammar;

impl Grammar for LookmlGrammar {
    fn is_repeatable(&self, key: &str) -> bool {
        REPEATABLE_KEYS.contains(&key)
    }

    fn pluralize(&self, key: &str) -> String {
        pluralize(key)
    }

    fn singularize(&self, key: &str) -> String {
        singularize(key)
    }

    fn requires_name_extraction(&self, key: &str) -> bool {
        KEYS_WITH_NAME_FIELDS.contains(&key)
    }

    fn is_quoted_literal(&self, key: &str) -> bool {
        QUOTED_LITERAL_KEYS.contains(&key)
    }

    fn is_expression_block(&self, key: &str) -> bool {
        EXPR_BLOCK_KEYS.contains(&key)
    }
}
