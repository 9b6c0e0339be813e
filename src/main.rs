//! CLI entry point for photomosaic generation

use clap::Parser;
use photomosaic::io::cli::{Cli, MosaicRunner};
use photomosaic::io::logging::{Verbosity, init_logging};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    match MosaicRunner::new(cli).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
