//! Build a view from a mapping, render it, and read it back.
//!
//! Run with: cargo run --example build_view

use lookml_tree::{build, lookml, render, visit};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let model = lookml!({
        "views": [{
            "name": "orders",
            "sql_table_name": "public.orders",
            "dimensions": [
                { "name": "id", "primary_key": "yes", "sql": "${TABLE}.id" },
                { "name": "status", "label": "Order Status" }
            ],
            "measures": [{ "name": "count", "type": "count" }]
        }]
    });

    let tree = build(&model)?;
    println!("LookML:\n{}\n", render(&tree));

    let back = visit(&tree)?;
    assert_eq!(back, model);
    println!("✓ Round-trip successful");

    Ok(())
}
