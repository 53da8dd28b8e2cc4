//! CSV loading.
//!
//! Parses delimited text into a [`Table`] following the usual data-frame
//! loader rules: the first record names the columns, short rows are padded,
//! long rows are rejected and duplicate column names get numeric suffixes.
//! Cells are kept as written; no type inference happens.

use super::table::Table;
use crate::core::config::CsvConfig;
use crate::error::{FileTextError, Result};
use std::collections::HashSet;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse CSV bytes into a table.
///
/// # Errors
///
/// - `Parsing("No columns to parse from file")` when there is no header
/// - `Parsing("Error tokenizing data. ...")` when a row has more fields
///   than the header
/// - `Parsing` from the tokenizer for invalid UTF-8 or broken quoting
pub fn parse_csv(content: &[u8], config: &CsvConfig) -> Result<Table> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter_byte(config.delimiter)?)
        .from_reader(content);

    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(FileTextError::parsing("No columns to parse from file")),
    };
    let columns = dedupe_columns(header.iter());
    let width = columns.len();

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(FileTextError::parsing(format!(
                "Error tokenizing data. C error: Expected {} fields in line {}, saw {}",
                width,
                line,
                record.len()
            )));
        }

        let mut row: Vec<String> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    config.missing_value.clone()
                } else {
                    field.to_string()
                }
            })
            .collect();
        row.resize(width, config.missing_value.clone());
        rows.push(row);
    }

    Ok(Table { columns, rows })
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| FileTextError::validation(format!("csv.delimiter must be ASCII, got {:?}", delimiter)))
}

/// Name columns the way data-frame loaders do: blanks become `Unnamed: <i>`,
/// repeats become `name.1`, `name.2`, skipping suffixes already taken.
fn dedupe_columns<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut columns = Vec::new();

    for (idx, name) in names.enumerate() {
        let base = if name.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            name.to_string()
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }

        seen.insert(candidate.clone());
        columns.push(candidate);
    }

    columns
}
