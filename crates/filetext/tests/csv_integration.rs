//! CSV integration tests.
//!
//! Validates table rendering and the data-frame loader edge cases through
//! the public `extract` entry point.

#![cfg(feature = "csv")]

use filetext::core::config::ExtractionConfig;
use filetext::types::{FormatMetadata, Outcome};
use filetext::{FileFormat, extract, extract_bytes};
use tempfile::tempdir;

mod helpers;
use helpers::write_fixture;

async fn render(content: &str) -> String {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "data.csv", content);
    extract(&path, &ExtractionConfig::default()).await.to_string()
}

#[tokio::test]
async fn test_csv_basic_table() {
    let output = render("Name,Age,City\nAlice,30,NYC\nBob,25,LA\n").await;
    assert_eq!(output, " Name  Age  City\nAlice   30   NYC\n  Bob   25    LA");
}

#[tokio::test]
async fn test_csv_no_index_column() {
    let output = render("v\n10\n20\n").await;
    assert_eq!(output, " v\n10\n20");
}

#[tokio::test]
async fn test_csv_header_only() {
    let output = render("a,b\n").await;
    assert_eq!(output, "Empty DataFrame\nColumns: [a, b]\nIndex: []");
}

#[tokio::test]
async fn test_csv_empty_file() {
    let output = render("").await;
    assert_eq!(output, "CSV read error: No columns to parse from file");
}

#[tokio::test]
async fn test_csv_too_many_fields() {
    let output = render("a,b\n1,2,3\n").await;
    assert_eq!(
        output,
        "CSV read error: Error tokenizing data. C error: Expected 2 fields in line 2, saw 3"
    );
}

#[tokio::test]
async fn test_csv_ragged_short_rows() {
    let output = render("a,b,c\n1,2\n").await;
    assert_eq!(output, "a  b    c\n1  2  NaN");
}

#[tokio::test]
async fn test_csv_duplicate_columns() {
    let output = render("x,x\n1,2\n").await;
    assert_eq!(output, "x  x.1\n1    2");
}

#[tokio::test]
async fn test_csv_invalid_utf8() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "latin1.csv", b"name\ncaf\xe9\n".as_slice());

    let outcome = extract(&path, &ExtractionConfig::default()).await;
    assert!(outcome.is_failure());
    assert!(outcome.to_string().starts_with("CSV read error: "));
}

#[tokio::test]
async fn test_csv_semicolon_delimiter_config() {
    let mut config = ExtractionConfig::default();
    config.csv.delimiter = ';';
    config.csv.column_gap = 1;

    let result = extract_bytes(b"a;b\n1;22\n", FileFormat::Csv, &config).await.unwrap();
    assert_eq!(result.content, "a  b\n1 22");
}

#[tokio::test]
async fn test_csv_metadata() {
    let result = extract_bytes(
        b"id,label\n1,one\n2,two\n3,three\n",
        FileFormat::Csv,
        &ExtractionConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(result.mime_type, "text/csv");
    let Some(FormatMetadata::Csv(meta)) = result.metadata else {
        panic!("expected CSV metadata");
    };
    assert_eq!(meta.columns, vec!["id", "label"]);
    assert_eq!(meta.row_count, 3);
}

#[tokio::test]
async fn test_csv_json_outcome() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "t.csv", "k\nv\n");

    let outcome = extract(&path, &ExtractionConfig::default()).await;
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["status"], "extracted");
    assert_eq!(json["format"], "csv");
    assert_eq!(json["content"], "k\nv");
    assert!(matches!(outcome, Outcome::Extracted { .. }));
}
