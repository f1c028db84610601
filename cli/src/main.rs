//! maker - generate and update PHP classes.
//!
//! This is the entry point for the `maker` binary.

use std::io;

use clap::Parser;
use maker_cli::{observability, Cli};

fn main() {
    let cli = Cli::parse();
    observability::init(cli.verbose);

    let stdout = io::stdout();
    if let Err(e) = maker_cli::execute(&cli, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
