//! Terminal maze search visualizer.
//!
//! Run: cargo run --bin mazewalk -- --algo bidirectional --connected

use clap::Parser;
use mazewalk_demos::{Args, logging, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _logger = logging::init(&args)?;
    run(&args)
}
