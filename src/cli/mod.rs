use std::fs::File;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::application::AppError;
use crate::domain::{Cents, Ledger, parse_cents};
use crate::io::Exporter;

/// Tally - Personal Budget Tracker
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "An in-memory personal budget tracker for the command line")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut session = Session::new(self.verbose, stdin.lock(), stdout.lock());
        session.run()
    }
}

/// Parse amount text at the prompt boundary. This is the only failure the
/// tracker itself raises; the ledger never sees unparsed input.
pub fn parse_amount(input: &str) -> Result<Cents, AppError> {
    parse_cents(input).map_err(|source| AppError::InvalidAmount {
        input: input.trim().to_string(),
        source,
    })
}

/// One interactive run of the numbered menu over a single in-memory ledger.
/// Generic over input/output so scripted sessions are testable.
pub struct Session<R, W> {
    ledger: Ledger,
    verbose: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(verbose: bool, input: R, output: W) -> Self {
        Self {
            ledger: Ledger::new(),
            verbose,
            input,
            output,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Tear the finished session apart, handing back the ledger and the
    /// output writer.
    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.output)
    }

    /// Run the menu loop until the user exits or input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            match choice.trim() {
                "1" => self.add_income()?,
                "2" => self.add_expense()?,
                "3" => self.show_report()?,
                "4" => self.show_transactions()?,
                "5" => self.export_data()?,
                "6" => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Personal Budget Tracker")?;
        writeln!(self.output, "1. Add Income")?;
        writeln!(self.output, "2. Add Expense")?;
        writeln!(self.output, "3. Generate Report")?;
        writeln!(self.output, "4. Show Transactions")?;
        writeln!(self.output, "5. Export Data")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    /// Prompt and read one line, without its trailing newline.
    /// Returns None once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Prompt for an amount. On unparsable input, report the error and
    /// return None so the caller abandons the entry untouched.
    fn prompt_amount(&mut self, text: &str) -> Result<Option<Cents>> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };
        match parse_amount(&raw) {
            Ok(cents) => Ok(Some(cents)),
            Err(err) => {
                writeln!(self.output, "Error: {err}")?;
                Ok(None)
            }
        }
    }

    fn add_income(&mut self) -> Result<()> {
        let Some(amount) = self.prompt_amount("Enter income amount: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter income description: ")? else {
            return Ok(());
        };

        self.ledger.record_income(amount, description);
        writeln!(self.output, "Income added.")?;
        self.log_count();
        Ok(())
    }

    fn add_expense(&mut self) -> Result<()> {
        let Some(amount) = self.prompt_amount("Enter expense amount: ")? else {
            return Ok(());
        };
        let Some(category) = self.prompt("Enter expense category: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter expense description: ")? else {
            return Ok(());
        };

        self.ledger.record_expense(amount, category, description);
        writeln!(self.output, "Expense added.")?;
        self.log_count();
        Ok(())
    }

    fn show_report(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.ledger.generate_report())?;
        Ok(())
    }

    fn show_transactions(&mut self) -> Result<()> {
        let lines = self.ledger.list_transactions();
        if lines.is_empty() {
            writeln!(self.output, "No transactions recorded.")?;
            return Ok(());
        }
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn export_data(&mut self) -> Result<()> {
        let Some(format) = self.prompt("Export format (csv/json): ")? else {
            return Ok(());
        };
        let Some(path) = self.prompt("Output file (leave blank for screen): ")? else {
            return Ok(());
        };

        // export failures are reported and the session keeps going
        match self.write_export(format.trim(), path.trim()) {
            Ok(count) => writeln!(self.output, "Exported {} transaction(s).", count)?,
            Err(err) => writeln!(self.output, "Error: {:#}", err)?,
        }
        Ok(())
    }

    fn write_export(&mut self, format: &str, path: &str) -> Result<usize> {
        let exporter = Exporter::new(&self.ledger);

        let count = match format {
            "csv" => {
                if path.is_empty() {
                    exporter.export_transactions_csv(&mut self.output)?
                } else {
                    let file = File::create(path)
                        .with_context(|| format!("Failed to create output file: {}", path))?;
                    exporter.export_transactions_csv(file)?
                }
            }
            "json" => {
                let snapshot = if path.is_empty() {
                    let snapshot = exporter.export_snapshot_json(&mut self.output)?;
                    writeln!(self.output)?;
                    snapshot
                } else {
                    let file = File::create(path)
                        .with_context(|| format!("Failed to create output file: {}", path))?;
                    exporter.export_snapshot_json(file)?
                };
                snapshot.transactions.len()
            }
            other => {
                anyhow::bail!("Invalid export format '{}'. Valid formats: csv, json", other)
            }
        };

        Ok(count)
    }

    fn log_count(&self) {
        if self.verbose {
            eprintln!("[tally] {} transaction(s) in ledger", self.ledger.len());
        }
    }
}
