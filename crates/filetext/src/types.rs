use crate::core::format::FileFormat;
use crate::core::text::is_blank;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a strategy produces on success.
///
/// `content` is already normalized (numbered PDF lines, rendered CSV table,
/// trimmed OCR text). An empty `content` means the strategy ran fine but
/// found nothing to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub content: String,
    pub format: FileFormat,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FormatMetadata>,
}

/// Format-specific metadata (discriminated union).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format_type", rename_all = "snake_case")]
pub enum FormatMetadata {
    Pdf(PdfMetadata),
    Csv(TableMetadata),
    Image(ImageMetadata),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdfMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    /// Lines kept after blank-line removal.
    pub line_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub columns: Vec<String>,
    pub row_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub color_type: String,
}

/// Result of one `extract` call.
///
/// Every variant renders to the plain string contract through `Display`:
///
/// | variant           | rendered text                          |
/// |-------------------|----------------------------------------|
/// | `Extracted`       | the content itself                     |
/// | `Empty`           | `No text found in PDF` / `... image`   |
/// | `NotFound`        | `File not found: <path>`               |
/// | `UnsupportedType` | `Unsupported file type: <ext>`         |
/// | `Failed`          | `<label> read error: <detail>`        |
///
/// In text form a failure is indistinguishable from extracted content that
/// happens to start with an error prefix. Callers that care should match on
/// the variant, or serialize it (the `status` tag) instead of printing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Extracted {
        format: FileFormat,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        metadata: Option<FormatMetadata>,
    },
    Empty {
        format: FileFormat,
    },
    NotFound {
        path: String,
    },
    UnsupportedType {
        extension: String,
    },
    Failed {
        format: FileFormat,
        detail: String,
    },
}

impl Outcome {
    /// Classify a strategy result. Blank content becomes `Empty` for formats
    /// that have an empty sentinel.
    pub fn from_result(format: FileFormat, result: crate::Result<ExtractionResult>) -> Self {
        match result {
            Ok(extraction) if format.empty_sentinel().is_some() && is_blank(&extraction.content) => {
                Outcome::Empty { format }
            }
            Ok(extraction) => Outcome::Extracted {
                format,
                content: extraction.content,
                metadata: extraction.metadata,
            },
            Err(err) => Outcome::Failed {
                format,
                detail: err.detail(),
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    /// Boundary failures end the process before any strategy runs.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Outcome::NotFound { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Extracted { content, .. } => f.write_str(content),
            Outcome::Empty { format } => f.write_str(format.empty_sentinel().unwrap_or_default()),
            Outcome::NotFound { path } => write!(f, "File not found: {}", path),
            Outcome::UnsupportedType { extension } => write!(f, "Unsupported file type: {}", extension),
            Outcome::Failed { format, detail } => write!(f, "{} read error: {}", format.label(), detail),
        }
    }
}
