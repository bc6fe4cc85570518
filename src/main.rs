//! tomopad CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, print the padded
//! reconstruction plan, and exit with appropriate status.
//! For programmatic use, prefer the library API (`tomopad::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
