use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Cents, Transaction, TransactionKind, format_usd};

/// Point-in-time summary of the ledger: overall totals plus expenses broken
/// down by category. `generated_at` is the moment the report was built, not
/// any transaction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub total_income_cents: Cents,
    pub total_expense_cents: Cents,
    pub balance_cents: Cents,
    pub categories: Vec<CategorySummary>,
}

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total_cents: Cents,
    pub count: i64,
}

impl Report {
    /// Build a report in a single pass over the transactions. Categories
    /// keep the order in which they were first seen.
    pub fn build(transactions: &[Transaction], generated_at: DateTime<Utc>) -> Self {
        let mut total_income = 0;
        let mut total_expense = 0;
        let mut categories: Vec<CategorySummary> = Vec::new();

        for transaction in transactions {
            match &transaction.kind {
                TransactionKind::Income => total_income += transaction.amount_cents,
                TransactionKind::Expense { category } => {
                    total_expense += transaction.amount_cents;
                    match categories.iter_mut().find(|c| c.category == *category) {
                        Some(entry) => {
                            entry.total_cents += transaction.amount_cents;
                            entry.count += 1;
                        }
                        None => categories.push(CategorySummary {
                            category: category.clone(),
                            total_cents: transaction.amount_cents,
                            count: 1,
                        }),
                    }
                }
            }
        }

        Self {
            generated_at,
            total_income_cents: total_income,
            total_expense_cents: total_expense,
            balance_cents: total_income - total_expense,
            categories,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Report as of {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Total Income: {}", format_usd(self.total_income_cents))?;
        writeln!(f, "Total Expense: {}", format_usd(self.total_expense_cents))?;
        writeln!(f, "Balance: {}", format_usd(self.balance_cents))?;
        writeln!(f)?;
        writeln!(f, "Expenses by Category:")?;
        for entry in &self.categories {
            writeln!(f, "  {}: {}", entry.category, format_usd(entry.total_cents))?;
        }
        Ok(())
    }
}
