//! Customizing LookML output with LookmlOptions.
//!
//! Run with: cargo run --example custom_options

use lookml_tree::{build, build_with, lookml, render, LookmlGrammar, LookmlOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let explore = lookml!({
        "explore": {
            "name": "orders",
            "label": "Orders",
            "join": { "name": "users", "sql_on": "${orders.user_id} = ${users.id}" }
        }
    });

    println!("Default:");
    println!("{}\n", render(&build(&explore)?));

    println!("Four-space indent:");
    let wide = LookmlOptions::new().with_indent(4);
    println!("{}\n", render(&build_with(&explore, &LookmlGrammar, &wide)?));

    // Any block after a sibling gets a blank line, not only one after another block
    println!("Blank line before every block:");
    let spaced = LookmlOptions::new().with_blank_line_before_blocks(true);
    println!("{}\n", render(&build_with(&explore, &LookmlGrammar, &spaced)?));

    // The join sits at depth 2
    println!("Depth limit of 1:");
    let shallow = LookmlOptions::new().with_max_depth(1);
    match build_with(&explore, &LookmlGrammar, &shallow) {
        Ok(tree) => println!("{}", render(&tree)),
        Err(err) => println!("error: {}", err),
    }

    Ok(())
}
