use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum NotzError {
    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl NotzError {
    /// True when the error came from the persistence medium rather than the
    /// operation itself. Storage failures after a completed mutation are
    /// surfaced as warnings, not command failures: the in-memory board stays
    /// authoritative for the rest of the session.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            NotzError::Io(_) | NotzError::Serialization(_) | NotzError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NotzError>;
