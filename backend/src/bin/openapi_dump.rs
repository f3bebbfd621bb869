//! Print the OpenAPI document.
//!
//! # Examples
//! ```sh
//! cargo run --manifest-path backend/Cargo.toml --bin openapi-dump -- --format yaml
//! ```

use std::io;

use backend::ApiDoc;
use clap::{Parser, ValueEnum};
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// Dump the booking API's OpenAPI document to stdout.
#[derive(Debug, Parser)]
struct Cli {
    #[arg(long, value_enum, default_value_t)]
    format: Format,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let rendered = match cli.format {
        Format::Json => doc.to_pretty_json().map_err(io::Error::other)?,
        Format::Yaml => doc.to_yaml().map_err(io::Error::other)?,
    };
    println!("{rendered}");
    Ok(())
}
