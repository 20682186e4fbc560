use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error loading the country coordinate table
    #[error("Coordinate table error: {0}")]
    GeoTableError(String),
}

/// Result type for application
pub type AppResult<T> = Result<T, AppError>;
