//! Assessment export ingestion.
//!
//! Loads a delimited export (one row per student submission) into a Polars
//! `DataFrame` whose columns are all text, ready for score classification.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use assess_ingest::read_score_table;
//!
//! let df = read_score_table(Path::new("exports/unit3_quiz.csv"))?;
//! println!("{} students", df.height());
//! ```

mod error;
mod reader;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use reader::{
    MAX_UPLOAD_SIZE, ReadOptions, read_score_table, read_score_table_from_bytes,
    read_score_table_with_options, validate_encoding, validate_table_shape,
};

// === Cell Values ===
pub use values::{any_to_string, column_strings, format_numeric};
