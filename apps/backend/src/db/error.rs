//! Store error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("card state was modified concurrently (expected version {expected}, found {actual})")]
    Conflict { expected: u64, actual: u64 },

    #[error("store lock poisoned")]
    Poisoned,
}
