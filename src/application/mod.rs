// Application layer. The ledger operations themselves are infallible, so
// for now this only holds the boundary error type; the CLI talks to the
// domain directly.

pub mod error;

pub use error::*;
