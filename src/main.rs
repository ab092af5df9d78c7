//! Ledger Consolidator CLI
//!
//! Consolidates a transaction ledger for one month and filters the result.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --input transactions.csv --month 3 --year 2024
//! cargo run -- --month 3 --year 2024 --cash-min 100 --electronic-min 50 --mode E
//! RUST_LOG=debug cargo run -- --cache-dir cache --strict
//! ```
//!
//! Month, year, thresholds and filter mode that are not passed as flags are
//! prompted for on stdin. Summaries are printed to stdout, diagnostics to
//! stderr, and the audit trail is appended to `--log-file`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid period or input, malformed ledger in strict mode, cache write failure)

use ledger_consolidator::cli;
use std::io;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = cli::parse_args();

    let stdin = io::stdin();
    if let Err(e) = cli::run_session(&args, stdin.lock(), io::stdout()) {
        error!(error = %e, "Session failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
