use osu_api::UpstreamError;
use storage::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Player '{0}' not found")]
    PlayerNotFound(String),

    #[error("No matching play found for '{0}'")]
    PlayNotFound(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
