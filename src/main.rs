//! Jersey doc generator - command-line tool documenting REST resources.
//!
//! This binary reads a serialized class model (JSON or YAML, as produced by a
//! source front-end) and appends a plain-text description of every resource
//! endpoint to `jersey.doc` in the output directory.
//!
//! # Usage
//!
//! ```bash
//! jersey-doc [OPTIONS] <MODEL_PATH>...
//! ```
//!
//! # Examples
//!
//! Document every model file under a directory:
//! ```bash
//! jersey-doc ./model -o ./docs
//! ```
//!
//! Leave internal resources out:
//! ```bash
//! jersey-doc ./model -o ./docs -x com.acme.AdminResource --exclude-file excludes.txt
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! jersey-doc ./model -v
//! ```

use anyhow::Result;
use clap::Parser;
use jersey_doc::cli;
use log::info;

fn main() -> Result<()> {
    // Parse first so the verbose flag can pick the log level
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Jersey doc generator starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    info!("Documentation generation completed successfully");

    Ok(())
}
