//! Customizing TOON output with EncodeOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use std::error::Error;
use toon_encoder::{to_string, to_string_with_options, Delimiter, EncodeOptions};

#[derive(Debug, Serialize)]
struct Module {
    path: String,
    exports: Vec<String>,
    lines: u32,
}

#[derive(Debug, Serialize)]
struct Project {
    name: String,
    modules: Vec<Module>,
    layout: Layout,
}

#[derive(Debug, Serialize)]
struct Layout {
    src: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let project = Project {
        name: "dashboard".to_string(),
        modules: vec![
            Module {
                path: "src/api.ts".to_string(),
                exports: vec!["fetchUser".to_string(), "fetchTeam".to_string()],
                lines: 120,
            },
            Module {
                path: "src/theme.ts".to_string(),
                exports: vec!["colors".to_string()],
                lines: 40,
            },
        ],
        layout: Layout {
            src: vec!["components".to_string(), "hooks, utils".to_string()],
        },
    };

    // Default format (comma delimiter, 2-space indent)
    println!("Default (comma):");
    println!("{}\n", to_string(&project)?);

    // Tab delimiter (pastes cleanly into spreadsheets)
    println!("Tab delimiter:");
    let tab_options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    println!("{}\n", to_string_with_options(&project, &tab_options)?);

    // Pipe delimiter: commas inside values no longer need quotes
    println!("Pipe delimiter:");
    let pipe_options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    println!("{}\n", to_string_with_options(&project, &pipe_options)?);

    // Wider indentation
    println!("4-space indent:");
    let wide_options = EncodeOptions::new().with_indent(4);
    println!("{}", to_string_with_options(&project, &wide_options)?);

    // Delimiters also parse from their names, e.g. for config files or flags
    let from_flag: Delimiter = "pipe".parse()?;
    assert_eq!(from_flag, Delimiter::Pipe);

    Ok(())
}
