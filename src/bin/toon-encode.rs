//! `toon-encode` CLI: turn a JSON document into TOON.
//!
//! ## Usage
//!
//! ```sh
//! # stdin -> stdout
//! echo '{"name":"Alice","tags":["a","b"]}' | toon-encode
//!
//! # file -> file, pipe-delimited
//! toon-encode index.json -o index.toon --delimiter pipe
//!
//! # normalized JSON instead of TOON
//! toon-encode index.json --format json
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use toon_encoder::{Delimiter, EncodeOptions, Encoder, Node};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "toon-encode",
    version,
    about = "Encode JSON as TOON (Token-Oriented Object Notation)"
)]
struct Cli {
    /// Input JSON file (reads from stdin if omitted)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Delimiter for tabular rows and inline arrays: comma, tab, or pipe
    #[arg(short, long, default_value_t = Delimiter::Comma)]
    delimiter: Delimiter,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Toon)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Toon,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = read_input(cli.input.as_deref())?;
    let node: Node = serde_json::from_str(&json).context("Failed to parse input as JSON")?;
    debug!(nodes = node.node_count(), "parsed input");

    let rendered = match cli.format {
        Format::Toon => {
            let options = EncodeOptions::new()
                .with_indent(cli.indent)
                .with_delimiter(cli.delimiter);
            Encoder::new(options).encode(&node)
        }
        Format::Json => {
            serde_json::to_string_pretty(&node).context("Failed to render node tree as JSON")?
        }
    };

    info!(
        format = ?cli.format,
        input_bytes = json.len(),
        output_bytes = rendered.len(),
        "encoded document"
    );

    write_output(cli.output.as_deref(), &rendered)
}

/// `RUST_LOG` wins; otherwise the `-v` count picks the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
