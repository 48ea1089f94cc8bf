//! Delimited file reading into a text-typed DataFrame.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Maximum upload size (200 MB).
pub const MAX_UPLOAD_SIZE: u64 = 200 * 1024 * 1024;

/// Column count above which a wide-table warning is logged.
const WIDE_TABLE_COLUMNS: usize = 500;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Options for reading an export.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// Field separator byte.
    pub delimiter: u8,
    /// Upload size limit in bytes.
    pub max_size: u64,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            max_size: MAX_UPLOAD_SIZE,
        }
    }
}

impl ReadOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

/// Reads an export file from disk with default options.
pub fn read_score_table(path: &Path) -> Result<DataFrame> {
    read_score_table_with_options(path, ReadOptions::default())
}

/// Reads an export file from disk.
pub fn read_score_table_with_options(path: &Path, options: ReadOptions) -> Result<DataFrame> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    let source_name = path.display().to_string();
    check_size(&source_name, metadata.len(), options.max_size)?;

    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    read_score_table_from_bytes(bytes, &source_name, options)
}

/// Reads an uploaded export held in memory.
///
/// Every column is read as text so score cells such as `"1.00 / 1"` keep their
/// exported spelling. `source_name` is only used in error messages and logs.
pub fn read_score_table_from_bytes(
    bytes: Vec<u8>,
    source_name: &str,
    options: ReadOptions,
) -> Result<DataFrame> {
    check_size(source_name, bytes.len() as u64, options.max_size)?;
    validate_encoding(&bytes, source_name)?;

    let bytes = if bytes.starts_with(&UTF8_BOM) {
        bytes[UTF8_BOM.len()..].to_vec()
    } else {
        bytes
    };
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyCsv {
            source_name: source_name.to_string(),
        });
    }

    let delimiter = options.delimiter;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|parse| parse.with_separator(delimiter))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

    validate_table_shape(&df, source_name)?;
    tracing::debug!(
        source = %source_name,
        rows = df.height(),
        columns = df.width(),
        "export loaded"
    );
    Ok(df)
}

/// Rejects UTF-16 exports, which spreadsheet tools sometimes produce.
///
/// A UTF-8 BOM is accepted.
pub fn validate_encoding(bytes: &[u8], source_name: &str) -> Result<()> {
    let encoding = match bytes {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        source_name: source_name.to_string(),
        encoding,
    })
}

/// Validates column names after loading.
///
/// A table with no rows is accepted; analysis reports nothing for it.
pub fn validate_table_shape(df: &DataFrame, source_name: &str) -> Result<()> {
    if df.width() > WIDE_TABLE_COLUMNS {
        tracing::warn!(
            source = %source_name,
            columns = df.width(),
            "export has more than {WIDE_TABLE_COLUMNS} columns"
        );
    }

    if df
        .get_column_names()
        .iter()
        .any(|name| name.trim().is_empty())
    {
        return Err(IngestError::EmptyColumnName {
            source_name: source_name.to_string(),
        });
    }

    Ok(())
}

fn check_size(source_name: &str, size: u64, max_size: u64) -> Result<()> {
    if size > max_size {
        return Err(IngestError::FileTooLarge {
            source_name: source_name.to_string(),
            size,
            max_size,
        });
    }
    Ok(())
}

fn io_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}
