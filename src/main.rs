//! Batch MSDF/SSDF font atlas generation.
//!
//! Walks the source directory, drives the external msdf-bmfont tool once per
//! font and field type, and renames the results into the destination
//! directory for the text renderer to pick up.

use anyhow::Result;
use clap::Parser;
use sdf_fontgen::core::cli::CliArgs;
use sdf_fontgen::gen::AtlasPipeline;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn run(args: CliArgs) -> Result<()> {
    let pipeline = AtlasPipeline::new(&args)?;
    pipeline.run().await?;
    Ok(())
}

/// Report a fatal error and exit non-zero.
fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Atlas generation failed:");
    eprintln!("{error:#}");
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    init_logging();
    let args = CliArgs::parse();
    if let Err(message) = args.validate() {
        eprintln!("{message}");
        std::process::exit(1);
    }
    match run(args).await {
        Ok(()) => {}
        Err(error) => handle_error(error),
    }
}
