//! TOON vs JSON size comparison.
//!
//! Run with: cargo run --example token_efficiency

use serde::Serialize;
use std::error::Error;
use toon_encoder::to_string;

#[derive(Debug, Serialize)]
struct Component {
    name: String,
    file: String,
    props: u32,
    client: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentIndex {
    components: Vec<Component>,
    total_components: u32,
    framework: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let index = ComponentIndex {
        components: vec![
            Component {
                name: "Button".to_string(),
                file: "src/components/Button.tsx".to_string(),
                props: 4,
                client: true,
            },
            Component {
                name: "Card".to_string(),
                file: "src/components/Card.tsx".to_string(),
                props: 2,
                client: false,
            },
            Component {
                name: "Modal".to_string(),
                file: "src/components/Modal.tsx".to_string(),
                props: 6,
                client: true,
            },
        ],
        total_components: 3,
        framework: "next".to_string(),
    };

    let json = serde_json::to_string_pretty(&index)?;
    println!("JSON ({} chars):\n{}\n", json.len(), json);

    let toon = to_string(&index)?;
    println!("TOON ({} chars):\n{}\n", toon.len(), toon);

    let savings = (json.len().saturating_sub(toon.len())) as f64 / json.len() as f64 * 100.0;
    println!(
        "Size savings: {:.1}% ({} -> {} chars)",
        savings,
        json.len(),
        toon.len()
    );

    Ok(())
}
