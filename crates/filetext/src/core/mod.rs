//! Core extraction orchestration.
//!
//! - **Entry points**: [`extract`](extractor::extract) (never fails, returns an
//!   `Outcome`) and the fallible `extract_file` / `extract_bytes`
//! - **Formats**: extension to strategy mapping
//! - **Configuration**: TOML/JSON loading and discovery
//! - **I/O**: file reading and existence checks
//! - **Text**: whitespace rules for blank-line and empty-output checks
//!
//! # Example
//!
//! ```rust,no_run
//! use filetext::core::config::ExtractionConfig;
//! use filetext::core::extractor::extract_file;
//!
//! # async fn example() -> filetext::Result<()> {
//! let config = ExtractionConfig::default();
//! let result = extract_file("data.csv", &config).await?;
//! println!("{}", result.content);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod extractor;
pub mod format;
pub mod io;
pub mod text;

pub use config::{CsvConfig, ExtractionConfig, LineNumbering, OcrConfig, PdfConfig};
pub use format::{FileFormat, SUPPORTED_EXTENSIONS, detect_format, file_extension};
