//! Error taxonomy for the allocation/cancellation boundary (§7).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),

    #[error("no availability for the requested group")]
    NoAvailability,

    #[error("ticket not found")]
    NotFound,

    #[error("ticket already cancelled")]
    AlreadyCancelled,

    /// A broken invariant: the operation aborted with state left unchanged.
    #[error("internal invariant violation: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
