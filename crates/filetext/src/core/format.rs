//! File format detection.
//!
//! Strategy selection is driven purely by the lowercased file extension. The
//! file contents are never sniffed, so a PNG renamed to `scan.pdf` goes to the
//! PDF strategy and fails there.

use crate::{FileTextError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Every extension that selects a strategy, lowercased with the leading dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".pdf", ".csv", ".png", ".jpg", ".jpeg", ".bmp", ".tiff"];

/// The formats filetext knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileFormat {
    Pdf,
    Csv,
    Image,
}

impl FileFormat {
    /// Map a lowercased extension (with its leading dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".pdf" => Some(Self::Pdf),
            ".csv" => Some(Self::Csv),
            ".png" | ".jpg" | ".jpeg" | ".bmp" | ".tiff" => Some(Self::Image),
            _ => None,
        }
    }

    /// Label used in the `"<label> read error: ..."` prefix.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Csv => "CSV",
            Self::Image => "Image",
        }
    }

    /// Message printed when a strategy succeeds but finds nothing to show.
    ///
    /// CSV has none: a parsed table is always printed as rendered.
    pub fn empty_sentinel(&self) -> Option<&'static str> {
        match self {
            Self::Pdf => Some("No text found in PDF"),
            Self::Csv => None,
            Self::Image => Some("No text found in image"),
        }
    }

    /// Nominal MIME type for the format. Images report the generic family.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => PDF_MIME_TYPE,
            Self::Csv => CSV_MIME_TYPE,
            Self::Image => "image/*",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extract the lowercased extension of `path`, including the leading dot.
///
/// Only the final path component is considered. Leading dots on that
/// component never start an extension, so `.bashrc` has none while
/// `.notes.csv` has `.csv`. Returns an empty string when there is no
/// extension.
pub fn file_extension(path: impl AsRef<Path>) -> String {
    let raw = path.as_ref().to_string_lossy();
    let name = raw.rsplit(['/', std::path::MAIN_SEPARATOR]).next().unwrap_or("");

    let Some(dot) = name.rfind('.') else {
        return String::new();
    };

    if name[..dot].chars().all(|c| c == '.') {
        return String::new();
    }

    name[dot..].to_lowercase()
}

/// Detect the format of `path` from its extension.
///
/// # Errors
///
/// Returns `FileTextError::UnsupportedFormat` carrying the extension (possibly
/// empty) when no strategy handles it.
pub fn detect_format(path: impl AsRef<Path>) -> Result<FileFormat> {
    let ext = file_extension(path);
    FileFormat::from_extension(&ext).ok_or(FileTextError::UnsupportedFormat(ext))
}
