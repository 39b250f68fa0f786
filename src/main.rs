//! CLI entry point for the metal border tiling generator

use clap::Parser;
use metaltile::io::cli::{Cli, PatternWriter};

fn main() -> metaltile::Result<()> {
    let cli = Cli::parse();
    PatternWriter::new(cli).process()?;
    Ok(())
}
