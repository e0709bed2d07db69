//! romcalc CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args and run one calculation.
//! Calculation errors are printed and still exit with status 0; only I/O
//! failures surface as a non-zero exit. For programmatic use, prefer the
//! library API (`romcalc::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
