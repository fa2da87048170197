use chrono::Utc;

use super::{Cents, Report, Transaction};

/// In-memory store of every transaction recorded during one session.
/// Entries are append-only and kept in insertion order, which doubles as
/// chronological order since timestamps are assigned at insertion.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an income entry. The amount is taken as given; rejecting
    /// zero or negative values is left to the caller.
    pub fn record_income(&mut self, amount_cents: Cents, description: impl Into<String>) {
        self.transactions
            .push(Transaction::income(amount_cents, description));
    }

    /// Record an expense entry against a category (may be empty).
    pub fn record_expense(
        &mut self,
        amount_cents: Cents,
        category: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.transactions
            .push(Transaction::expense(amount_cents, category, description));
    }

    /// One formatted line per transaction, in insertion order.
    pub fn list_transactions(&self) -> Vec<String> {
        self.transactions.iter().map(ToString::to_string).collect()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Summarize the ledger as of now.
    pub fn report(&self) -> Report {
        Report::build(&self.transactions, Utc::now())
    }

    /// The report in its text layout, stamped with the moment of the call.
    pub fn generate_report(&self) -> String {
        self.report().to_string()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Sum of all income amounts in a transaction slice.
pub fn total_income(transactions: &[Transaction]) -> Cents {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount_cents)
        .sum()
}

/// Sum of all expense amounts in a transaction slice.
pub fn total_expense(transactions: &[Transaction]) -> Cents {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount_cents)
        .sum()
}
