use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::domain::{Ledger, Report, Transaction};

/// Snapshot of one session's data for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub transactions: Vec<Transaction>,
    pub report: Report,
}

/// Exporter for rendering the in-memory ledger in machine-readable formats.
pub struct Exporter<'a> {
    ledger: &'a Ledger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Export transactions to CSV, one row per transaction in insertion
    /// order. Returns the number of rows written.
    pub fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record([
            "id",
            "type",
            "timestamp",
            "amount_cents",
            "category",
            "description",
        ])?;

        let mut count = 0;
        for transaction in self.ledger.transactions() {
            csv_writer.write_record([
                transaction.id.to_string(),
                transaction.kind.as_str().to_string(),
                transaction.recorded_at.to_rfc3339(),
                transaction.amount_cents.to_string(),
                transaction.category().unwrap_or_default().to_string(),
                transaction.description.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the full session as a pretty-printed JSON snapshot.
    pub fn export_snapshot_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            transactions: self.ledger.transactions().to_vec(),
            report: self.ledger.report(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
