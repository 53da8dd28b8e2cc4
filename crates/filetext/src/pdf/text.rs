//! Raw PDF text extraction.
//!
//! Text comes from `pdf-extract`; `lopdf` is used only for document facts
//! (page count, encryption) that `pdf-extract` does not expose.

use super::error::{PdfError, Result};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Extract all text from a PDF held in memory.
///
/// Returns the text exactly as the extraction library lays it out, newlines
/// and blank lines included. `pdf-extract` panics on some malformed inputs;
/// those panics are caught and reported as `TextExtractionFailed`.
pub fn extract_text_from_pdf(pdf_bytes: &[u8]) -> Result<String> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(pdf_bytes)));

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            if is_encrypted(pdf_bytes) {
                Err(PdfError::PasswordRequired)
            } else {
                Err(PdfError::TextExtractionFailed(e.to_string()))
            }
        }
        Err(payload) => Err(PdfError::TextExtractionFailed(panic_message(payload.as_ref()))),
    }
}

/// Parse the document structure with `lopdf`.
pub fn load_document(pdf_bytes: &[u8]) -> Result<lopdf::Document> {
    Ok(lopdf::Document::load_mem(pdf_bytes)?)
}

/// Number of pages, or `None` when the document structure cannot be read.
pub fn page_count(pdf_bytes: &[u8]) -> Option<usize> {
    match load_document(pdf_bytes) {
        Ok(doc) => Some(doc.get_pages().len()),
        Err(e) => {
            tracing::debug!("Could not read PDF page tree: {}", e);
            None
        }
    }
}

/// Whether the document declares encryption.
pub fn is_encrypted(pdf_bytes: &[u8]) -> bool {
    match load_document(pdf_bytes) {
        Ok(doc) => doc.is_encrypted(),
        Err(PdfError::InvalidPdf(msg)) => {
            let msg = msg.to_lowercase();
            msg.contains("decrypt") || msg.contains("password") || msg.contains("encrypt")
        }
        Err(_) => false,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("parser panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("parser panicked: {}", msg)
    } else {
        "parser panicked".to_string()
    }
}
