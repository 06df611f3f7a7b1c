//! Command-line entry point for bundling a web page into one HTML file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use onepage_bundler::{BundleConfig, Bundler};

/// Bundle a web page and its local assets into a single self-contained HTML file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Entry HTML file (defaults to the configured entry)
    entry: Option<PathBuf>,

    /// Output file path (defaults to the configured output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file path (default: bundle.config.json in the working directory)
    #[arg(short = 'C', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the bundled document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BundleConfig::from_path(path)
            .ok_or_else(|| anyhow!("failed to load config from {}", path.display()))?,
        None => BundleConfig::discover(Path::new(".")),
    };

    let entry = cli.entry.unwrap_or_else(|| PathBuf::from(&config.entry));
    let bundler = Bundler::new();

    if cli.stdout {
        let document = bundler
            .bundle_to_string(&entry)
            .with_context(|| format!("failed to bundle {}", entry.display()))?;
        print!("{document}");
        return Ok(());
    }

    let output = cli.output.unwrap_or_else(|| PathBuf::from(&config.output));
    bundler.bundle_to_file(&entry, &output).with_context(|| {
        format!(
            "failed to bundle {} into {}",
            entry.display(),
            output.display()
        )
    })?;

    Ok(())
}
