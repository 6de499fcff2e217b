//! Rendering layout: indentation, list wrapping, blank lines and value quoting.

use lookml_tree::{build, build_with, lookml, render, LookmlGrammar, LookmlMap, LookmlOptions};

fn lookml(map: &LookmlMap) -> String {
    render(&build(map).unwrap())
}

fn lookml_with(map: &LookmlMap, options: &LookmlOptions) -> String {
    render(&build_with(map, &LookmlGrammar, options).unwrap())
}

#[test]
fn test_short_scalar_list_is_inline() {
    assert_eq!(
        lookml(&lookml!({ "fields": ["a.b", "a.c"] })),
        "fields: [a.b, a.c]"
    );
    assert_eq!(
        lookml(&lookml!({ "fields": ["a", "b", "c", "d"] })),
        "fields: [a, b, c, d]"
    );
}

#[test]
fn test_five_element_list_is_multiline_with_trailing_comma() {
    assert_eq!(
        lookml(&lookml!({ "fields": ["a", "b", "c", "d", "e"] })),
        "fields: [\n  a,\n  b,\n  c,\n  d,\n  e,\n]"
    );
}

#[test]
fn test_empty_list() {
    assert_eq!(lookml(&lookml!({ "fields": [] })), "fields: []");
}

#[test]
fn test_nested_multiline_list_indents_to_its_level() {
    let view = lookml!({
        "view": {
            "name": "orders",
            "sets": [{ "name": "detail", "fields": ["a", "b", "c", "d", "e"] }]
        }
    });
    assert_eq!(
        lookml(&view),
        "view: orders {\n  set: detail {\n    fields: [\n      a,\n      b,\n      c,\n      \
         d,\n      e,\n    ]\n  }\n}"
    );
}

#[test]
fn test_pair_list_is_always_multiline() {
    let measure = lookml!({
        "measure": {
            "name": "completed",
            "type": "count",
            "filters": [{ "status": "complete" }]
        }
    });
    assert_eq!(
        lookml(&measure),
        "measure: completed {\n  type: count\n  filters: [\n    status: \"complete\",\n  ]\n}"
    );
}

#[test]
fn test_filters_quote_every_value() {
    let measure = lookml!({
        "filters": [{ "status": "complete" }, { "hidden": "no" }, { "sql": "x" }]
    });
    assert_eq!(
        lookml(&measure),
        "filters: [\n  status: \"complete\",\n  hidden: \"no\",\n  sql: \"x\",\n]"
    );
}

#[test]
fn test_suggestions_list_is_quoted() {
    assert_eq!(
        lookml(&lookml!({ "suggestions": ["open", "closed"] })),
        "suggestions: [\"open\", \"closed\"]"
    );
    assert_eq!(lookml(&lookml!({ "suggestions": "no" })), "suggestions: no");
}

#[test]
fn test_value_token_kinds() {
    let dimension = lookml!({
        "label": "Order ID",
        "sql": "${TABLE}.id",
        "hidden": "yes",
        "html": "<b>{{ value }}</b>"
    });
    assert_eq!(
        lookml(&dimension),
        "label: \"Order ID\"\nsql: ${TABLE}.id ;;\nhidden: yes\nhtml: <b>{{ value }}</b> ;;"
    );
}

#[test]
fn test_quotes_in_quoted_values_are_escaped() {
    assert_eq!(
        lookml(&lookml!({ "description": "The \"real\" id" })),
        "description: \"The \\\"real\\\" id\""
    );
}

#[test]
fn test_empty_block_has_no_inner_newline() {
    assert_eq!(lookml(&lookml!({ "view": { "name": "orders" } })), "view: orders {}");
    assert_eq!(lookml(&lookml!({ "derived_table": {} })), "derived_table: {}");
}

#[test]
fn test_non_empty_block_closes_on_its_own_line() {
    assert_eq!(
        lookml(&lookml!({ "derived_table": { "persist_for": "24 hours" } })),
        "derived_table: {\n  persist_for: \"24 hours\"\n}"
    );
}

#[test]
fn test_blank_line_only_between_consecutive_blocks() {
    let view = lookml!({
        "view": {
            "name": "orders",
            "label": "Orders",
            "dimensions": [{ "name": "id" }, { "name": "status" }],
            "hidden": "no"
        }
    });
    assert_eq!(
        lookml(&view),
        "view: orders {\n  label: \"Orders\"\n  dimension: id {}\n\n  dimension: status {}\n\n  \
         hidden: no\n}"
    );
}

#[test]
fn test_blank_line_before_blocks_option() {
    let view = lookml!({
        "view": {
            "name": "orders",
            "label": "Orders",
            "fields": ["a"],
            "dimensions": [{ "name": "id" }, { "name": "status" }]
        }
    });
    let options = LookmlOptions::new().with_blank_line_before_blocks(true);
    assert_eq!(
        lookml_with(&view, &options),
        "view: orders {\n  label: \"Orders\"\n  fields: [a]\n\n  dimension: id {}\n\n  \
         dimension: status {}\n}"
    );
}

#[test]
fn test_first_block_in_document_has_no_prefix() {
    let model = lookml!({
        "explores": [{ "name": "orders" }, { "name": "users" }],
        "connection": "warehouse"
    });
    assert_eq!(
        lookml(&model),
        "explore: orders {}\n\nexplore: users {}\n\nconnection: \"warehouse\""
    );
}

#[test]
fn test_custom_indent() {
    let view = lookml!({
        "view": {
            "name": "orders",
            "dimension": { "name": "id", "type": "number" }
        }
    });
    let options = LookmlOptions::new().with_indent(4);
    assert_eq!(
        lookml_with(&view, &options),
        "view: orders {\n    dimension: id {\n        type: number\n    }\n}"
    );
}

#[test]
fn test_rendering_is_order_preserving() {
    let first = lookml!({ "label": "A", "hidden": "yes" });
    let second = lookml!({ "hidden": "yes", "label": "A" });
    assert_eq!(first, second);
    assert_eq!(lookml(&first), "label: \"A\"\nhidden: yes");
    assert_eq!(lookml(&second), "hidden: yes\nlabel: \"A\"");
}
