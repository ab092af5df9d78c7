//! Text rendering of account summaries

use crate::types::{AccountSummary, ConsolidationError};
use std::io::Write;

/// Render one summary as a single display line
pub fn format_summary(summary: &AccountSummary) -> String {
    format!(
        "Branch: {}, Account: {}, Cash: {:.2}, Electronic: {:.2}, Transactions: {}",
        summary.branch,
        summary.account,
        summary.cash_subtotal,
        summary.electronic_subtotal,
        summary.transaction_count
    )
}

/// Write one line per summary, in the order given
pub fn write_summaries<'a, I>(summaries: I, output: &mut dyn Write) -> Result<(), ConsolidationError>
where
    I: IntoIterator<Item = &'a AccountSummary>,
{
    for summary in summaries {
        writeln!(output, "{}", format_summary(summary))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::scenario(
        AccountSummary { branch: 10, account: 500, cash_subtotal: 150.0, electronic_subtotal: 75.5, transaction_count: 2 },
        "Branch: 10, Account: 500, Cash: 150.00, Electronic: 75.50, Transactions: 2"
    )]
    #[case::zeroed(
        AccountSummary::new(1, 7),
        "Branch: 1, Account: 7, Cash: 0.00, Electronic: 0.00, Transactions: 0"
    )]
    #[case::negative(
        AccountSummary { branch: 3, account: 9, cash_subtotal: -2.5, electronic_subtotal: 0.126, transaction_count: 1 },
        "Branch: 3, Account: 9, Cash: -2.50, Electronic: 0.13, Transactions: 1"
    )]
    fn test_format_summary(#[case] summary: AccountSummary, #[case] expected: &str) {
        assert_eq!(format_summary(&summary), expected);
    }

    #[test]
    fn test_write_summaries() {
        let summaries = vec![AccountSummary::new(1, 100), AccountSummary::new(1, 200)];
        let mut output = Vec::new();

        write_summaries(&summaries, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "Branch: 1, Account: 100, Cash: 0.00, Electronic: 0.00, Transactions: 0\n\
             Branch: 1, Account: 200, Cash: 0.00, Electronic: 0.00, Transactions: 0\n"
        );
    }
}
