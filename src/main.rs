//! CLI entry point for surveying collision maps for treasure regions

use clap::Parser;
use treasuregrid::io::cli::{Cli, FileProcessor};

fn main() -> treasuregrid::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
