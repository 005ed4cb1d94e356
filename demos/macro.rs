//! Building node trees with the node! macro.
//!
//! Run with: cargo run --example macro

use toon_encoder::{encode, node, Node};

fn main() {
    println!("Scalars:");
    println!("  null:   {:?}", encode(&node!(null)));
    println!("  bool:   {}", encode(&node!(true)));
    println!("  number: {}", encode(&node!(42)));
    println!("  text:   {}\n", encode(&node!("Hello, TOON!")));

    println!("Sequences:");
    println!("  numbers: {}", encode(&node!([1, 2, 3, 4, 5])));
    println!("  mixed:   {}\n", encode(&node!([1, "two", true, null])));

    let config = node!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432
        },
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Nested mappings:");
    println!("{}\n", encode(&config));

    // Any expression convertible into a Node can appear as a value
    let items: Vec<Node> = ["active", "pending", "done"]
        .iter()
        .enumerate()
        .map(|(i, status)| node!({ "id": i, "status": (*status) }))
        .collect();

    let summary = node!({
        "total": (items.len()),
        "items": items
    });

    println!("Dynamic construction:");
    println!("{}\n", encode(&summary));

    if let Some(app) = config.as_mapping().and_then(|m| m.get("app")) {
        let name = app.as_mapping().and_then(|m| m.get("name")).and_then(Node::as_str);
        println!("App name: {}", name.unwrap_or("?"));
    }
}
