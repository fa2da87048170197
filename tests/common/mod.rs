// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use tally::cli::Session;
use tally::domain::Ledger;

/// The canonical scenario: a salary plus three categorized expenses.
/// Income $1000.00, expense $85.50, balance $914.50; categories in
/// first-seen order are Food ($70.50) then Transport ($15.00).
pub fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.record_income(100000, "salary");
    ledger.record_expense(5050, "Food", "lunch");
    ledger.record_expense(2000, "Food", "snack");
    ledger.record_expense(1500, "Transport", "bus");
    ledger
}

/// Drive a full menu session over scripted input lines and return the
/// resulting ledger along with everything the session printed.
pub fn run_session(script: &str) -> Result<(Ledger, String)> {
    let mut session = Session::new(false, Cursor::new(script.to_string()), Vec::new());
    session.run()?;
    let (ledger, output) = session.into_parts();
    Ok((ledger, String::from_utf8(output)?))
}
