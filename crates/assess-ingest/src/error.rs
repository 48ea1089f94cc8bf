//! Error types for assessment export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an uploaded export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Export file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Upload exceeds the size limit.
    #[error("file {source_name} is too large ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        source_name: String,
        size: u64,
        max_size: u64,
    },

    // === Parsing Errors ===
    /// Upload is not UTF-8 text.
    #[error("unsupported encoding {encoding} in {source_name}; save the export as UTF-8")]
    UnsupportedEncoding {
        source_name: String,
        encoding: &'static str,
    },

    /// The parser could not read the data as a table.
    #[error("file {source_name} could not be processed: {message}")]
    CsvParse {
        source_name: String,
        message: String,
    },

    /// Upload has no content at all.
    #[error("file {source_name} is empty")]
    EmptyCsv { source_name: String },

    /// A header cell is blank.
    #[error("file {source_name} has a column with an empty name")]
    EmptyColumnName { source_name: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
