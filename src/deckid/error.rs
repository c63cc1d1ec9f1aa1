use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DeckIdError {
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The record store rejected a read or write.
    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DeckIdError>;
