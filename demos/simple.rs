//! Basic TOON encoding of a derived struct.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use std::error::Error;
use toon_encoder::{to_node, to_string};

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    // Encode straight from the struct
    let toon = to_string(&users)?;
    println!("TOON output:\n{}\n", toon);

    // Or convert to a node tree first and inspect it
    let tree = to_node(&users)?;
    println!("Node tree holds {} nodes", tree.node_count());

    Ok(())
}
