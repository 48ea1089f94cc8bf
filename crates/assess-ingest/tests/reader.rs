//! Integration tests for export reading.

use std::io::Write;
use std::path::Path;

use assess_ingest::{
    IngestError, ReadOptions, column_strings, read_score_table, read_score_table_from_bytes,
    read_score_table_with_options,
};
use polars::prelude::DataType;
use tempfile::NamedTempFile;

fn create_temp_csv(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

#[test]
fn test_read_keeps_score_text() {
    let file = create_temp_csv(
        b"Timestamp,Q1 [Score],Q2 [Score]\n2024-03-01,1.00 / 1,0.00 / 1\n2024-03-01,1.00 / 1,1.00 / 1\n",
    );
    let df = read_score_table(file.path()).unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 3);
    let q1 = df.column("Q1 [Score]").unwrap();
    assert_eq!(q1.dtype(), &DataType::String);
    assert_eq!(column_strings(q1), vec!["1.00 / 1", "1.00 / 1"]);
    let q2 = df.column("Q2 [Score]").unwrap();
    assert_eq!(column_strings(q2), vec!["0.00 / 1", "1.00 / 1"]);
}

#[test]
fn test_numeric_looking_cells_stay_text() {
    let file = create_temp_csv(b"Q1 [Score]\n1.00\n0.00\n");
    let df = read_score_table(file.path()).unwrap();

    let q1 = df.column("Q1 [Score]").unwrap();
    assert_eq!(column_strings(q1), vec!["1.00", "0.00"]);
}

#[test]
fn test_read_strips_utf8_bom() {
    let df = read_score_table_from_bytes(
        b"\xEF\xBB\xBFQ1 [Score]\n1.00 / 1\n".to_vec(),
        "upload.csv",
        ReadOptions::default(),
    )
    .unwrap();

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["Q1 [Score]"]);
}

#[test]
fn test_read_with_semicolon_delimiter() {
    let file = create_temp_csv(b"Q1 [Score];Q2 [Score]\n1.00 / 1;0.00 / 1\n");
    let options = ReadOptions::default().with_delimiter(b';');
    let df = read_score_table_with_options(file.path(), options).unwrap();

    assert_eq!(df.width(), 2);
    assert_eq!(df.height(), 1);
}

#[test]
fn test_header_only_export_has_no_rows() {
    let file = create_temp_csv(b"Q1 [Score],Q2 [Score]\n");
    let df = read_score_table(file.path()).unwrap();

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn test_empty_file_is_rejected() {
    let file = create_temp_csv(b"");
    let result = read_score_table(file.path());

    assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
}

#[test]
fn test_missing_file() {
    let result = read_score_table(Path::new("/nonexistent/export.csv"));

    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn test_utf16_upload_is_rejected() {
    let result = read_score_table_from_bytes(
        vec![0xFE, 0xFF, 0x00, b'Q'],
        "upload.csv",
        ReadOptions::default(),
    );

    assert!(matches!(
        result,
        Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 BE",
            ..
        })
    ));
}

#[test]
fn test_upload_over_limit_is_rejected() {
    let options = ReadOptions::default().with_max_size(8);
    let result =
        read_score_table_from_bytes(b"Q1 [Score]\n1.00 / 1\n".to_vec(), "upload.csv", options);

    assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
}

#[test]
fn test_ragged_row_is_a_parse_error() {
    let result = read_score_table_from_bytes(
        b"Q1 [Score],Q2 [Score]\n1.00 / 1,0.00 / 1,extra\n".to_vec(),
        "upload.csv",
        ReadOptions::default(),
    );

    match result {
        Err(IngestError::CsvParse {
            source_name,
            message,
        }) => {
            assert_eq!(source_name, "upload.csv");
            assert!(message.contains("more fields"), "unexpected message: {message}");
        }
        other => panic!("expected CsvParse, got {other:?}"),
    }
}

#[test]
fn test_invalid_utf8_is_a_parse_error() {
    let result = read_score_table_from_bytes(
        b"Q1 [Score]\n1.00 \xC3\x28\n".to_vec(),
        "upload.csv",
        ReadOptions::default(),
    );

    match result {
        Err(IngestError::CsvParse { message, .. }) => {
            assert!(
                message.to_lowercase().contains("utf-8"),
                "unexpected message: {message}"
            );
        }
        other => panic!("expected CsvParse, got {other:?}"),
    }
}

#[test]
fn test_blank_header_cell_is_rejected() {
    let file = create_temp_csv(b"Q1 [Score],,Q2 [Score]\n1.00 / 1,x,0.00 / 1\n");
    let result = read_score_table(file.path());

    assert!(matches!(result, Err(IngestError::EmptyColumnName { .. })));
}
