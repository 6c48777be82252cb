use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use shamir_recover::input::ShareDocument;
use shamir_recover::reconstruct::reconstruct;

/// Recover a threshold-shared secret from a JSON share document.
///
/// Prints the secret on stdout; diagnostics and logs go to stderr.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Path to the share document. Reads stdin when omitted.
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let doc = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            ShareDocument::from_reader(file)?
        }
        None => ShareDocument::from_reader(io::stdin().lock())?,
    };
    let secret = reconstruct(&doc.into_share_set()?)?;
    println!("{secret}");
    Ok(())
}
