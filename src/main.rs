//! CLI entry point for the Mondrian-watercolor painting generator

use aquatile::io::cli::{Cli, Runner};
use clap::Parser;

fn main() -> aquatile::Result<()> {
    let cli = Cli::parse();
    let mut runner = Runner::new(cli);
    runner.run()
}
