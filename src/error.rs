//! Error types for the tournament runner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourneyError {
    #[error("Invalid description: {0}")]
    InvalidDescription(String),

    #[error("Candidate name '{0}' is reserved for bye slots")]
    ReservedNameConflict(String),

    #[error("Corrupt status file: {0}")]
    CorruptState(String),

    #[error("Recorded winner '{winner}' is neither '{left}' nor '{right}'")]
    InvalidWinner {
        left: String,
        right: String,
        winner: String,
    },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("No eliminated candidate is available to fill the bye for '{0}'")]
    NoLosersAvailable(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, TourneyError>;
