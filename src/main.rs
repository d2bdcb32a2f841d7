//! File Collector
//!
//! Entry point for the `collector` binary. Parses the command line, sets up
//! logging and runs the collection pipeline.

use std::process::ExitCode;

use file_collector::config::{parse_args, Configuration};
use file_collector::constants::{DEFAULT_LOG_FILTER, EXIT_FAILURE, VERBOSE_LOG_FILTER};
use file_collector::infrastructure::RealFileSystem;
use file_collector::{orchestrator, report};

/// Main entry point for File Collector
///
/// Exits with 0 after the summary is printed, even when individual copies
/// failed. Missing paths, an invalid source or an unusable destination exit
/// with 1; malformed arguments exit with clap's usage code.
fn main() -> ExitCode {
    let args = match parse_args(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    init_logging(args.verbose);

    let config = match Configuration::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            report::print_error(&e.to_string());
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match orchestrator::run(&config, &RealFileSystem::new()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report::print_error(&format!("{e:#}"));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default filter
fn init_logging(verbose: bool) {
    let filter = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
