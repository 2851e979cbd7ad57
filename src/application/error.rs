use thiserror::Error;

use crate::domain::{ParseAmountError, SplitError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Split(#[from] SplitError),

    #[error("Invalid input: {0}")]
    Parse(#[from] ParseAmountError),

    #[error("Ledger task is no longer running")]
    LedgerClosed,
}
