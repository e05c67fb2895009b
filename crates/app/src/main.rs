//! AeroSim: rear wing downforce and drag from the command line or a desktop window.
//!
//! # Usage
//!
//! ```text
//! aerosim                                   # interactive window
//! aerosim calc --profile "GT Car"
//! aerosim calc -r 1.225 -v 25 -A 1.0 -a 10 -o json
//! aerosim coefficients --plot
//! aerosim forces --profile "F1 Car"
//! aerosim efficiency --plot
//! aerosim profiles --profiles cars.yaml
//! ```
//!
//! Set `RUST_LOG` (for example `RUST_LOG=debug`) to see sweep and profile logs.

mod cli;
mod curves;
mod gui;
mod inputs;
mod output;

use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli::Cli::parse())
}
