use thiserror::Error;

use crate::domain::ParseCentsError;

#[derive(Error, Debug)]
pub enum AppError {
    /// The only failure the tracker itself raises: amount text that does
    /// not parse as a number. Caught at the prompt boundary; the ledger is
    /// never invoked with an unparsed amount.
    #[error("Invalid amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        source: ParseCentsError,
    },
}
