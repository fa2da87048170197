mod common;

use anyhow::Result;
use common::sample_ledger;
use tally::domain::Ledger;
use tally::io::{Exporter, LedgerSnapshot};
use tempfile::TempDir;

#[test]
fn test_csv_export_rows() -> Result<()> {
    let ledger = sample_ledger();
    let mut buf = Vec::new();

    let count = Exporter::new(&ledger).export_transactions_csv(&mut buf)?;
    assert_eq!(count, 4);

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    assert_eq!(
        headers,
        vec![
            "id",
            "type",
            "timestamp",
            "amount_cents",
            "category",
            "description"
        ]
    );

    let records: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(records.len(), 4);

    // income row has an empty category
    assert_eq!(&records[0][1], "income");
    assert_eq!(&records[0][3], "100000");
    assert_eq!(&records[0][4], "");
    assert_eq!(&records[0][5], "salary");

    // expense rows keep category and insertion order
    assert_eq!(&records[1][1], "expense");
    assert_eq!(&records[1][4], "Food");
    assert_eq!(&records[3][4], "Transport");
    assert_eq!(&records[3][5], "bus");
    Ok(())
}

#[test]
fn test_csv_export_of_empty_ledger_is_header_only() -> Result<()> {
    let ledger = Ledger::new();
    let mut buf = Vec::new();

    let count = Exporter::new(&ledger).export_transactions_csv(&mut buf)?;
    assert_eq!(count, 0);

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    assert_eq!(reader.headers()?.len(), 6);
    assert_eq!(reader.records().count(), 0);
    Ok(())
}

#[test]
fn test_json_snapshot_written_to_file_reads_back() -> Result<()> {
    let ledger = sample_ledger();
    let dir = TempDir::new()?;
    let path = dir.path().join("snapshot.json");

    let file = std::fs::File::create(&path)?;
    let snapshot = Exporter::new(&ledger).export_snapshot_json(file)?;
    assert_eq!(snapshot.transactions.len(), 4);

    let contents = std::fs::read_to_string(&path)?;
    let parsed: LedgerSnapshot = serde_json::from_str(&contents)?;

    assert_eq!(parsed.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(parsed.transactions.len(), 4);
    assert_eq!(parsed.transactions[1].category(), Some("Food"));
    assert_eq!(parsed.report.total_income_cents, 100000);
    assert_eq!(parsed.report.total_expense_cents, 8550);
    assert_eq!(parsed.report.balance_cents, 91450);
    assert_eq!(parsed.report.categories[0].category, "Food");
    Ok(())
}
