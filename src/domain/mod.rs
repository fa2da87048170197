mod ledger;
mod money;
mod report;
mod transaction;

pub use ledger::*;
pub use money::*;
pub use report::*;
pub use transaction::*;
