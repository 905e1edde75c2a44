//! # ctmap demo
//!
//! Looks a key up in a small compile-time map and exits with the value found.
//!
//! ## Usage
//!
//! ```bash
//! ctmap-demo [--key <key>] [--entry KEY=VALUE --entry KEY=VALUE] [--log-format pretty|compact|json]
//! ```
//!
//! Without `--entry` the built-in map `{"key1": 1, "key2": 2}` is queried.
//! With exactly two `--entry` arguments a map is built at runtime instead,
//! which exercises the checked construction path. A missing key is logged as
//! a warning and the process exits with status 0.

#![warn(missing_docs)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ctmap_demo::{exercise, map_from_args, DEMO_MAP};
use tracing::{debug, info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// One line per event
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// ctmap demo CLI arguments
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Key to look up
    #[arg(short, long, default_value = "key2")]
    key: String,

    /// Runtime map entries as KEY=VALUE, exactly two required
    #[arg(short, long = "entry", value_name = "KEY=VALUE")]
    entries: Vec<String>,

    /// Log output format
    #[arg(long, value_enum, env = "RUST_LOG_FORMAT", default_value = "pretty")]
    log_format: LogFormat,

    /// Most verbose level that is emitted
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    initialize_tracing(args.log_format, args.log_level)?;
    debug!(?args, "parsed arguments");

    let report = if args.entries.is_empty() {
        info!("querying built-in map");
        exercise(&DEMO_MAP, &args.key)
    } else {
        let map = map_from_args(&args.entries).context("failed to build runtime map")?;
        info!("querying runtime map");
        exercise(&map, &args.key)
    };

    let code = report.exit_code();
    info!(key = %report.key, found = report.found, code, "done");
    Ok(ExitCode::from(code))
}

/// Initialize the tracing system for logging
fn initialize_tracing(format: LogFormat, level: Level) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    let installed = match format {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Compact => subscriber.compact().try_init(),
        LogFormat::Pretty => subscriber.pretty().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!(e)).context("failed to install tracing subscriber")
}
