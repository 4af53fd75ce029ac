//! CLI entry point for the dungeon layout generator

use clap::Parser;
use dungen::io::cli::{Cli, DungeonProcessor};

fn main() -> dungen::Result<()> {
    let cli = Cli::parse();
    let mut processor = DungeonProcessor::new(cli);
    processor.process()
}
