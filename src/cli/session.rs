//! One interactive consolidation session
//!
//! Loads the ledger, queries the requested period, prints its summaries,
//! then applies the threshold filter and prints the matches. Values missing
//! from the command line are prompted for on `input`.

use crate::cli::args::CliArgs;
use crate::cli::prompt::Prompter;
use crate::core::{AuditLog, CacheRepository};
use crate::io::{load_transactions, write_summaries, FileAuditLog};
use crate::service::{QueryService, QuerySource};
use crate::types::{ConsolidationError, FilterCriteria, FilterMode, Period};
use std::io::{BufRead, Write};
use tracing::info;

/// Run a session against the files named in `args`
///
/// # Errors
///
/// Returns an error for an invalid period, a prompt value that does not
/// parse, a strict-mode ledger error, or a cache write failure.
pub fn run_session<R: BufRead, W: Write>(
    args: &CliArgs,
    input: R,
    output: W,
) -> Result<(), ConsolidationError> {
    let transactions = load_transactions(&args.input, args.load_policy())?;
    info!(input = %args.input.display(), count = transactions.len(), "Ledger loaded");

    let mut service = QueryService::new(
        CacheRepository::new(&args.cache_dir),
        transactions,
        FileAuditLog::new(&args.log_file),
    );
    run_with_service(args, &mut service, input, output)
}

/// Run a session against an existing service
pub fn run_with_service<A: AuditLog, R: BufRead, W: Write>(
    args: &CliArgs,
    service: &mut QueryService<A>,
    input: R,
    output: W,
) -> Result<(), ConsolidationError> {
    let mut prompter = Prompter::new(input, output);

    if args.month.is_none() || args.year.is_none() {
        prompter.prompt("Enter month and year: ")?;
    }
    let month = prompter.value_or_ask(args.month, "month")?;
    let year = prompter.value_or_ask(args.year, "year")?;
    let period = Period::new(month, year)?;

    let outcome = service.query(period)?;
    let source = match outcome.source {
        QuerySource::Built => "computed",
        QuerySource::Loaded => "loaded from cache",
    };

    let out = prompter.writer();
    writeln!(out, "Consolidated movements for {} ({}):", period, source)?;
    if outcome.consolidation.is_empty() {
        writeln!(out, "No movements found")?;
    } else {
        write_summaries(outcome.consolidation.summaries(), &mut *out)?;
    }

    if args.skip_filter {
        return Ok(());
    }

    if args.cash_min.is_none() || args.electronic_min.is_none() || args.mode.is_none() {
        prompter.prompt("Enter X, Y and filter mode (E/OU): ")?;
    }
    let cash_threshold = prompter.value_or_ask(args.cash_min, "X")?;
    let electronic_threshold = prompter.value_or_ask(args.electronic_min, "Y")?;
    let mode_token: String = prompter.value_or_ask(args.mode.clone(), "filter mode")?;
    let criteria = FilterCriteria::new(
        cash_threshold,
        electronic_threshold,
        FilterMode::resolve(&mode_token),
    );

    let matches = service.filter(period, &criteria);

    let out = prompter.writer();
    writeln!(
        out,
        "Filter results for {} (X={:.2}, Y={:.2}, mode={}):",
        period, criteria.cash_threshold, criteria.electronic_threshold, criteria.mode
    )?;
    write_summaries(&matches, &mut *out)?;
    writeln!(out, "{} account(s) matched", matches.len())?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryAuditLog;
    use crate::types::TransactionRecord;
    use clap::Parser;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn ledger() -> Vec<TransactionRecord> {
        let tx = |day, amount, destination_branch, destination_account| TransactionRecord {
            day,
            month: 3,
            year: 2024,
            origin_branch: 10,
            origin_account: 500,
            amount,
            destination_branch,
            destination_account,
        };
        vec![tx(1, 150.0, 0, 0), tx(2, 75.5, 20, 999)]
    }

    fn run(args: &[&str], input: &str, dir: &TempDir) -> (String, MemoryAuditLog) {
        let args = CliArgs::try_parse_from(args).unwrap();
        let mut service = QueryService::new(
            CacheRepository::new(dir.path()),
            ledger(),
            MemoryAuditLog::new(),
        );
        let mut output = Vec::new();
        run_with_service(&args, &mut service, Cursor::new(input.to_string()), &mut output)
            .unwrap();
        (String::from_utf8(output).unwrap(), service.audit_log().clone())
    }

    #[test]
    fn test_session_with_all_arguments() {
        let dir = TempDir::new().unwrap();
        let (output, audit) = run(
            &[
                "program", "--month", "3", "--year", "2024", "--cash-min", "100",
                "--electronic-min", "100", "--mode", "OU",
            ],
            "",
            &dir,
        );

        assert_eq!(
            output,
            "Consolidated movements for 3/2024 (computed):\n\
             Branch: 10, Account: 500, Cash: 150.00, Electronic: 75.50, Transactions: 2\n\
             Filter results for 3/2024 (X=100.00, Y=100.00, mode=OR):\n\
             Branch: 10, Account: 500, Cash: 150.00, Electronic: 75.50, Transactions: 2\n\
             1 account(s) matched\n"
        );
        assert_eq!(audit.entries().len(), 2);
    }

    #[test]
    fn test_session_prompts_for_missing_values() {
        let dir = TempDir::new().unwrap();
        let (output, _) = run(&["program"], "3 2024\n100 100 E\n", &dir);

        assert!(output.starts_with("Enter month and year: Consolidated movements for 3/2024"));
        assert!(output.contains("Enter X, Y and filter mode (E/OU): Filter results"));
        assert!(output.contains("mode=AND"));
        assert!(output.ends_with("0 account(s) matched\n"));
    }

    #[test]
    fn test_session_second_run_uses_cache() {
        let dir = TempDir::new().unwrap();
        let args = ["program", "--month", "3", "--year", "2024", "--skip-filter"];

        run(&args, "", &dir);
        let (output, audit) = run(&args, "", &dir);

        assert!(output.starts_with("Consolidated movements for 3/2024 (loaded from cache):\n"));
        assert_eq!(audit.last(), Some("cache loaded for 3/2024"));
    }

    #[test]
    fn test_session_empty_period() {
        let dir = TempDir::new().unwrap();
        let (output, _) = run(
            &["program", "--month", "4", "--year", "2024", "--skip-filter"],
            "",
            &dir,
        );
        assert_eq!(
            output,
            "Consolidated movements for 4/2024 (computed):\nNo movements found\n"
        );
    }

    #[test]
    fn test_session_rejects_invalid_period() {
        let dir = TempDir::new().unwrap();
        let args = CliArgs::try_parse_from(["program", "--month", "13", "--year", "2024"]).unwrap();
        let mut service =
            QueryService::new(CacheRepository::new(dir.path()), ledger(), MemoryAuditLog::new());

        let result = run_with_service(&args, &mut service, Cursor::new(String::new()), Vec::new());
        assert_eq!(
            result,
            Err(ConsolidationError::InvalidPeriod {
                month: 13,
                year: 2024
            })
        );
    }
}
