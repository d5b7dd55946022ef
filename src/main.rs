//! b0field CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run `b0calc`
//! once, and exit with appropriate status.
//! For programmatic use, prefer the library API (`b0field::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
