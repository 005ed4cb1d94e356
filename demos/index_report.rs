//! A codebase index report: components, dependencies, and a generation stamp.
//!
//! Run with: cargo run --example index_report

use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use toon_encoder::{encode_with_options, to_node, Delimiter, EncodeOptions, Mapping, Node};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    uses: Vec<String>,
    external_dependencies: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NpmPackage {
    version: String,
    used_in: Vec<String>,
    purpose: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut components = BTreeMap::new();
    components.insert(
        "Button",
        ComponentEntry {
            path: "src/components/Button.tsx".to_string(),
            kind: "ui".to_string(),
            uses: vec![],
            external_dependencies: vec!["clsx".to_string()],
        },
    );
    components.insert(
        "Header",
        ComponentEntry {
            path: "src/components/layout/Header.tsx".to_string(),
            kind: "layout".to_string(),
            uses: vec!["Button".to_string(), "Logo".to_string()],
            external_dependencies: vec![],
        },
    );

    let mut packages = BTreeMap::new();
    packages.insert(
        "react",
        NpmPackage {
            version: "^18.2.0".to_string(),
            used_in: vec!["framework".to_string()],
            purpose: "React library".to_string(),
        },
    );
    packages.insert(
        "clsx",
        NpmPackage {
            version: "^2.1.0".to_string(),
            used_in: vec!["Button".to_string()],
            purpose: "Class name utility".to_string(),
        },
    );

    // Every document opens with a stamp and the detected framework
    let mut index = Mapping::new();
    index.insert("generated", Node::from(Utc::now()));
    index.insert("framework", Node::from("react"));
    index.insert("components", to_node(&components)?);
    index.insert("npmPackages", to_node(&packages)?);
    index.insert(
        "stats",
        to_node(&BTreeMap::from([
            ("componentsScanned", 2),
            ("relationshipsFound", 2),
        ]))?,
    );

    let tree = Node::Mapping(index);
    for delimiter in [Delimiter::Comma, Delimiter::Pipe] {
        let options = EncodeOptions::new().with_delimiter(delimiter);
        println!("--- {} ---", delimiter);
        println!("{}\n", encode_with_options(&tree, &options));
    }

    Ok(())
}
