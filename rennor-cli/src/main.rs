//! Binary crate for the `rennor` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive horizon prompting
//! - Human-friendly output formatting

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
