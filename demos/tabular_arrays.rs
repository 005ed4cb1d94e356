//! The three sequence encodings side by side.
//!
//! Run with: cargo run --example tabular_arrays

use serde::Serialize;
use std::error::Error;
use toon_encoder::{encode, node, to_string};

#[derive(Debug, Serialize)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    in_stock: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let products = vec![
        Product {
            sku: "WIDGET-001".into(),
            name: "Super Widget".into(),
            price: 29.99,
            in_stock: true,
        },
        Product {
            sku: "GADGET-002".into(),
            name: "Mega Gadget".into(),
            price: 49.99,
            in_stock: false,
        },
        Product {
            sku: "TOOL-003".into(),
            name: "Ultra Tool".into(),
            price: 19.99,
            in_stock: true,
        },
    ];

    // Same flat fields on every element: one header, one row each
    println!("Tabular:\n{}\n", to_string(&products)?);

    // Scalars only: a single line
    let tags = node!({ "tags": ["ui", "forms", "a11y"] });
    println!("Inline:\n{}\n", encode(&tags));

    // Differing keys or nested values: list items
    let routes = node!({
        "routes": [
            { "path": "/", "methods": ["GET"] },
            { "path": "/api/users", "methods": ["GET", "POST"], "auth": true },
            "fallback"
        ]
    });
    println!("List:\n{}", encode(&routes));

    Ok(())
}
