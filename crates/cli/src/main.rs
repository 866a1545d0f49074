//! # excel2json-cli
//!
//! Command-line interface for excel2json: converts a spreadsheet to JSON rows
//! and prints them to standard output.

use anyhow::{bail, Context, Result};
use clap::Parser;
use excel2json_sheet::{convert, write_json, ConvertConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// excel2json - Convert spreadsheet sheets to JSON rows
#[derive(Parser, Debug)]
#[command(name = "excel2json")]
#[command(author, version, about = "Convert spreadsheet sheets to JSON rows", long_about = None)]
struct Cli {
    /// Conversion options as a JSON object
    /// (e.g. '{"sourceFile": "data.xlsx", "header": {"rows": 1}}')
    #[arg(short, long, value_name = "JSON")]
    config: Option<String>,

    /// Spreadsheet to convert; overrides `sourceFile` in --config
    #[arg(short = 's', long = "source-file", alias = "sourceFile", value_name = "FILE")]
    source_file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Enable verbose output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Build the conversion options from the flags
    fn convert_config(&self) -> Result<ConvertConfig> {
        let mut config = match &self.config {
            Some(json) => ConvertConfig::from_json_str(json).context("Failed to parse --config")?,
            None => ConvertConfig::default(),
        };

        if let Some(path) = &self.source_file {
            config.source_file = Some(path.clone());
        }

        if config.source_file.is_none() && config.source.is_none() {
            bail!("No spreadsheet given. Use --source-file or set \"sourceFile\" in --config");
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose > 0 {
        let level = if cli.verbose == 1 { "debug" } else { "trace" };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
            )
            .with_writer(io::stderr)
            .init();
    }

    let config = cli.convert_config()?;
    if let Some(path) = &config.source_file {
        tracing::info!(file = %path.display(), "converting");
    }

    let output = convert(&config).context("Conversion failed")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&output, &mut handle, cli.pretty).context("Failed to write JSON")?;
    writeln!(handle)?;

    Ok(())
}
