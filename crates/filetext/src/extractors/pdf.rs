//! PDF document extractor.

use crate::core::config::ExtractionConfig;
use crate::core::format::FileFormat;
use crate::pdf::error::PdfError;
use crate::pdf::{extract_text_from_pdf, number_lines, page_count};
use crate::plugins::{DocumentExtractor, Plugin};
use crate::types::{ExtractionResult, FormatMetadata, PdfMetadata};
use crate::{FileTextError, Result};
use async_trait::async_trait;

/// Extracts the text layer of a PDF and numbers its non-blank lines.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for PdfExtractor {
    fn name(&self) -> &str {
        "pdf-extractor"
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
        "Extracts numbered text lines from PDF documents"
    }
}

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    async fn extract_bytes(
        &self,
        content: &[u8],
        format: FileFormat,
        config: &ExtractionConfig,
    ) -> Result<ExtractionResult> {
        let bytes = content.to_vec();

        let (raw_text, pages) = tokio::task::spawn_blocking(move || {
            let text = extract_text_from_pdf(&bytes)?;
            Ok::<_, PdfError>((text, page_count(&bytes)))
        })
        .await
        .map_err(|e| FileTextError::parsing(format!("PDF extraction task failed: {}", e)))??;

        let (numbered, line_count) = number_lines(&raw_text, config.pdf.line_numbering);

        tracing::debug!(
            pages = ?pages,
            raw_len = raw_text.len(),
            line_count,
            "PDF text extracted"
        );

        Ok(ExtractionResult {
            content: numbered,
            format,
            mime_type: format.mime_type().to_string(),
            metadata: Some(FormatMetadata::Pdf(PdfMetadata {
                page_count: pages,
                line_count,
            })),
        })
    }

    fn supported_formats(&self) -> &[FileFormat] {
        &[FileFormat::Pdf]
    }
}
