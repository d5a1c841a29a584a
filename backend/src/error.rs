//! Error taxonomy for the breed store.
//!
//! - `Validation`: a write was rejected by the field rules before touching the store.
//! - `Connection`: the store could not be opened, reached or synced. Fatal at startup.
//! - `Query`: a statement failed while serving a request.

use common::schema::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("breed store unavailable: {0}")]
    Connection(String),

    #[error("breed query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("breed store connection lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Whether the process should abort instead of carrying on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

impl From<StoreError> for std::io::Error {
    fn from(err: StoreError) -> Self {
        std::io::Error::other(err.to_string())
    }
}
