//! OCR engines.
//!
//! Requires the `ocr` feature and a system libtesseract:
//! ```toml
//! [dependencies]
//! filetext = { version = "0.3", features = ["ocr"] }
//! ```
//!
//! The backend registers itself in the OCR backend registry under
//! `"tesseract"`. Other engines can be plugged in through
//! [`register_ocr_backend`](crate::plugins::register_ocr_backend).
pub mod tesseract_backend;

pub use tesseract_backend::{TESSERACT_BACKEND_NAME, TesseractBackend};
