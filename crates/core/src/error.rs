//! Error types for geofence operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for geofence operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid GeoJSON document: {0}")]
    InvalidDocument(String),

}

/// Result type alias for geofence operations
pub type Result<T> = std::result::Result<T, Error>;
