use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot open database at {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Failed to verify settings: no emergency_settings row with id = {id}")]
    Verification { id: i64 },
}

impl AppError {
    pub fn is_verification(&self) -> bool {
        matches!(self, AppError::Verification { .. })
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
