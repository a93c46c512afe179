//! Katalog CLI: regenerates the repository README listing of default assets.
//!
//! Run from the repository root with no arguments; every
//! `<category>-samples/` tree is scanned and `README.md` is rewritten.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
