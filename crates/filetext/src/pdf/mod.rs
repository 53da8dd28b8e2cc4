//! PDF processing utilities.
//!
//! Used by the PDF extractor plugin. Requires the `pdf` feature.
//!
//! # Example
//!
//! ```rust,no_run
//! use filetext::core::config::LineNumbering;
//! use filetext::pdf::{extract_text_from_pdf, number_lines};
//!
//! # fn example() -> filetext::Result<()> {
//! let pdf_bytes = std::fs::read("document.pdf")?;
//! let raw = extract_text_from_pdf(&pdf_bytes)?;
//! let (numbered, count) = number_lines(&raw, LineNumbering::Sequential);
//! println!("{count} lines\n{numbered}");
//! # Ok(())
//! # }
//! ```
pub mod error;
pub mod lines;
pub mod text;

pub use error::PdfError;
pub use lines::{number_lines, split_lines};
pub use text::{extract_text_from_pdf, is_encrypted, load_document, page_count};
