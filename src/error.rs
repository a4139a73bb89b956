//! Error types for the dataset repair pipeline.
//!
//! Per-field rewrites are total over strings and cannot fail, so the only
//! fallible surface is loading and saving the dataset itself. Errors convert
//! automatically via `From`, allowing `?` across module boundaries.

use thiserror::Error;

/// Errors while loading or saving a question dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to read or write the file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON root is something other than an array of records.
    #[error("Dataset root must be a JSON array of question objects")]
    NotAnArray,
}

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;
