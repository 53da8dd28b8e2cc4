//! CSV extractor.

use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::core::format::FileFormat;
use crate::extraction::parse_csv;
use crate::plugins::{DocumentExtractor, Plugin};
use crate::types::{ExtractionResult, FormatMetadata};
use async_trait::async_trait;

/// Loads a CSV file as a table and renders it as aligned plain text.
pub struct CsvExtractor;

impl CsvExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for CsvExtractor {
    fn name(&self) -> &str {
        "csv-extractor"
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    fn description(&self) -> &str {
        "Renders CSV files as right-aligned plain-text tables"
    }
}

#[async_trait]
impl DocumentExtractor for CsvExtractor {
    async fn extract_bytes(
        &self,
        content: &[u8],
        format: FileFormat,
        config: &ExtractionConfig,
    ) -> Result<ExtractionResult> {
        let table = parse_csv(content, &config.csv)?;

        tracing::debug!(columns = table.columns.len(), rows = table.row_count(), "CSV parsed");

        Ok(ExtractionResult {
            content: table.render(config.csv.column_gap),
            format,
            mime_type: format.mime_type().to_string(),
            metadata: Some(FormatMetadata::Csv(table.metadata())),
        })
    }

    fn supported_formats(&self) -> &[FileFormat] {
        &[FileFormat::Csv]
    }
}
