//! filetext - readable text from PDF, CSV and image files.
//!
//! The file extension picks one of three strategies:
//!
//! | extension                                   | strategy                                  |
//! |---------------------------------------------|-------------------------------------------|
//! | `.pdf`                                      | text layer, blank lines dropped, numbered |
//! | `.csv`                                      | aligned plain-text table                  |
//! | `.png` `.jpg` `.jpeg` `.bmp` `.tiff`        | OCR                                       |
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use filetext::{ExtractionConfig, extract_sync};
//!
//! let outcome = extract_sync("invoice.pdf", &ExtractionConfig::default());
//! println!("{}", outcome);
//! ```
//!
//! [`extract`] never fails: a missing file, an unknown extension or a broken
//! document all come back as an [`Outcome`] whose `Display` is the message a
//! user would see. Use [`extract_file`] for a `Result` instead.
//!
//! # Features
//!
//! - `pdf` (default): PDF text via `pdf-extract`
//! - `csv` (default): CSV tables via `csv`
//! - `ocr`: Tesseract backend for images (needs the system library)
//!
//! Without `ocr` the image strategy still runs, but needs an OCR backend
//! registered through [`plugins::register_ocr_backend`].

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod extraction;
pub mod extractors;
pub mod plugins;
pub mod types;

#[cfg(feature = "ocr")]
pub mod ocr;

#[cfg(feature = "pdf")]
pub mod pdf;

pub use error::{FileTextError, Result};
pub use types::*;

pub use core::config::ExtractionConfig;
pub use core::extractor::{
    extract, extract_bytes, extract_bytes_sync, extract_file, extract_file_sync, extract_sync, route,
};
pub use core::format::{FileFormat, detect_format, file_extension};

pub use plugins::registry::{get_document_extractor_registry, get_ocr_backend_registry};
