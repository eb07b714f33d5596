//! # commentcount
//!
//! A CLI tool that reports comment statistics for a single source file.
//!
//! ## Overview
//!
//! commentcount is built on top of commentcountlib. It validates the path it
//! is given, scans the file line by line and prints six metrics: total
//! lines, comment lines, single-line comments, comment lines within block
//! comments, block comments and TODO markers.
//!
//! ## Usage
//!
//! ```bash
//! # Count comments in a file
//! commentcount src/app.ts
//!
//! # Show how every line was classified (written to stderr)
//! commentcount --debug src/app.ts
//!
//! # Same, using a tracing filter
//! RUST_LOG=commentcountlib=debug commentcount src/app.ts
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use commentcountlib::count_file;
use console::style;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter applied by `--debug`
const DEBUG_FILTER: &str = "commentcountlib=debug,commentcount=debug";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("commentcount")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Takes in a file path and returns comment information")
        .arg(
            Arg::new("file_name")
                .help("The file path to parse for comments")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Print how each line was classified to stderr"),
        )
}

/// Install a stderr subscriber when `--debug` is given or `RUST_LOG` is set.
///
/// Stdout is left to the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

/// Handler for the count command
fn count_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<PathBuf>("file_name")
        .context("a file name is required")?;
    debug!("counting comments in {}", path.display());

    let stats = count_file(path)?;
    Ok(stats.to_string())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(matches.get_flag("debug"));

    match count_handler(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", style("Error:").for_stderr().red().bold());
            ExitCode::FAILURE
        }
    }
}
