use crate::io::LoadPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Consolidate a transaction ledger per account and month
#[derive(Parser, Debug, Clone)]
#[command(name = "ledger-consolidator")]
#[command(
    about = "Consolidate ledger transactions per account for a month, with a binary cache and threshold filter",
    long_about = None
)]
pub struct CliArgs {
    /// Ledger file with one transaction per line
    #[arg(
        long = "input",
        value_name = "FILE",
        default_value = "transactions.csv",
        help = "Path to the ledger CSV file"
    )]
    pub input: PathBuf,

    /// Directory holding period cache files
    #[arg(
        long = "cache-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory for consolidated period cache files"
    )]
    pub cache_dir: PathBuf,

    /// Append-only audit log file
    #[arg(
        long = "log-file",
        value_name = "FILE",
        default_value = "log.txt",
        help = "Audit log file (appended to)"
    )]
    pub log_file: PathBuf,

    /// Month to consolidate (prompted if absent)
    #[arg(long, value_name = "MONTH")]
    pub month: Option<u32>,

    /// Year to consolidate (prompted if absent)
    #[arg(long, value_name = "YEAR")]
    pub year: Option<i32>,

    /// Minimum cash subtotal X (prompted if absent)
    #[arg(long = "cash-min", value_name = "X", allow_negative_numbers = true)]
    pub cash_min: Option<f64>,

    /// Minimum electronic subtotal Y (prompted if absent)
    #[arg(long = "electronic-min", value_name = "Y", allow_negative_numbers = true)]
    pub electronic_min: Option<f64>,

    /// Filter mode: E/AND or OU/OR; anything else means OR (prompted if absent)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Stop at the first malformed ledger line instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Only run the query, without the threshold filter
    #[arg(long = "skip-filter")]
    pub skip_filter: bool,
}

impl CliArgs {
    /// Ledger load policy selected by `--strict`
    pub fn load_policy(&self) -> LoadPolicy {
        if self.strict {
            LoadPolicy::Abort
        } else {
            LoadPolicy::Skip
        }
    }
}
