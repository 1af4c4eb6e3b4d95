use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not a reading: {0}")]
    InvalidReading(String),

    #[error("User id must not be empty")]
    EmptyUserId,
}

pub type Result<T> = std::result::Result<T, DashboardError>;
