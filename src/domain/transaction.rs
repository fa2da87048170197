use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cents, format_usd};

pub type TransactionId = Uuid;

/// Which direction money moved. Expenses carry the category they count
/// against; income has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense { category: String },
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense { .. } => "expense",
        }
    }
}

/// A single recorded income or expense event. Entries are immutable once
/// appended - the ledger never edits or removes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(flatten)]
    pub kind: TransactionKind,
    /// Amount in cents, stored as a magnitude; the sign is implied by `kind`.
    pub amount_cents: Cents,
    /// Free-text note, may be empty.
    pub description: String,
    /// When the ledger appended this entry.
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    pub fn income(amount_cents: Cents, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: TransactionKind::Income,
            amount_cents,
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }

    pub fn expense(
        amount_cents: Cents,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: TransactionKind::Expense {
                category: category.into(),
            },
            amount_cents,
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense { .. })
    }

    /// The expense category, if this is an expense.
    pub fn category(&self) -> Option<&str> {
        match &self.kind {
            TransactionKind::Income => None,
            TransactionKind::Expense { category } => Some(category),
        }
    }
}

/// Renders the listing line for this transaction:
/// `2024-05-18 12:30:00 - Expense: $50.50 - Food - lunch`
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.recorded_at.format("%Y-%m-%d %H:%M:%S");
        match &self.kind {
            TransactionKind::Income => write!(
                f,
                "{} - Income: {} - {}",
                timestamp,
                format_usd(self.amount_cents),
                self.description
            ),
            TransactionKind::Expense { category } => write!(
                f,
                "{} - Expense: {} - {} - {}",
                timestamp,
                format_usd(self.amount_cents),
                category,
                self.description
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_has_no_category() {
        let tx = Transaction::income(100000, "salary");
        assert!(tx.is_income());
        assert!(!tx.is_expense());
        assert_eq!(tx.category(), None);
        assert_eq!(tx.kind.as_str(), "income");
    }

    #[test]
    fn test_expense_carries_category() {
        let tx = Transaction::expense(5050, "Food", "lunch");
        assert!(tx.is_expense());
        assert_eq!(tx.category(), Some("Food"));
        assert_eq!(tx.kind.as_str(), "expense");
    }

    #[test]
    fn test_income_line_format() {
        let tx = Transaction::income(100000, "salary");
        let line = tx.to_string();
        let timestamp = tx.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string();
        assert_eq!(line, format!("{} - Income: $1000.00 - salary", timestamp));
    }

    #[test]
    fn test_expense_line_format() {
        let tx = Transaction::expense(5050, "Food", "lunch");
        let line = tx.to_string();
        assert!(line.ends_with(" - Expense: $50.50 - Food - lunch"));
    }

    #[test]
    fn test_empty_description_keeps_line_shape() {
        let tx = Transaction::expense(2000, "Food", "");
        assert!(tx.to_string().ends_with(" - Expense: $20.00 - Food - "));
    }

    #[test]
    fn test_serde_flattens_kind() {
        let tx = Transaction::expense(1500, "Transport", "bus");
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["category"], "Transport");
        assert_eq!(json["amount_cents"], 1500);

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back.category(), Some("Transport"));
    }
}
