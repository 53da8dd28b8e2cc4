//! Error types for filetext.
//!
//! Every strategy reports failures through `FileTextError`. The extraction
//! boundary (`core::extractor::extract`) folds these into an
//! [`Outcome::Failed`](crate::types::Outcome) so that a bad input file never
//! escapes as a panic or a non-zero exit.
//!
//! - `Io` wraps `std::io::Error` unchanged
//! - `Parsing` covers corrupt or malformed documents
//! - `Ocr` covers recognition failures
//! - `MissingDependency` is returned when a format's feature was compiled out
//!
//! # Example
//!
//! ```rust
//! use filetext::{FileTextError, Result};
//!
//! fn first_line(path: &str) -> Result<String> {
//!     let content = std::fs::read_to_string(path)?;
//!     content
//!         .lines()
//!         .next()
//!         .map(str::to_string)
//!         .ok_or_else(|| FileTextError::validation(format!("File is empty: {}", path)))
//! }
//! ```
use thiserror::Error;

/// Result type alias using `FileTextError`.
pub type Result<T> = std::result::Result<T, FileTextError>;

/// Main error type for all filetext operations.
#[derive(Debug, Error)]
pub enum FileTextError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("OCR error: {message}")]
    Ocr {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Image processing error: {message}")]
    ImageProcessing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("Plugin error in '{plugin_name}': {message}")]
    Plugin { message: String, plugin_name: String },

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Other(String),
}

impl From<image::ImageError> for FileTextError {
    fn from(err: image::ImageError) -> Self {
        FileTextError::ImageProcessing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for FileTextError {
    fn from(err: csv::Error) -> Self {
        FileTextError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "pdf")]
impl From<crate::pdf::PdfError> for FileTextError {
    fn from(err: crate::pdf::PdfError) -> Self {
        FileTextError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl FileTextError {
    error_constructor!(parsing, Parsing);
    error_constructor!(ocr, Ocr);
    error_constructor!(validation, Validation);
    error_constructor!(image_processing, ImageProcessing);

    /// The message without the category prefix.
    ///
    /// This is the text that follows `"<Kind> read error: "` in the rendered
    /// output, so `Parsing { message: "bad xref" }` yields `"bad xref"`.
    pub fn detail(&self) -> String {
        match self {
            Self::Io(err) => err.to_string(),
            Self::Parsing { message, .. }
            | Self::Ocr { message, .. }
            | Self::Validation { message, .. }
            | Self::ImageProcessing { message, .. } => message.clone(),
            Self::Plugin { message, .. } => message.clone(),
            Self::MissingDependency(msg)
            | Self::LockPoisoned(msg)
            | Self::UnsupportedFormat(msg)
            | Self::Other(msg) => msg.clone(),
        }
    }
}
