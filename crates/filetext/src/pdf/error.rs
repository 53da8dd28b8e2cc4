use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfError {
    InvalidPdf(String),
    PasswordRequired,
    TextExtractionFailed(String),
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfError::InvalidPdf(msg) => write!(f, "Invalid PDF: {}", msg),
            PdfError::PasswordRequired => write!(f, "PDF is password-protected"),
            PdfError::TextExtractionFailed(msg) => write!(f, "Text extraction failed: {}", msg),
        }
    }
}

impl std::error::Error for PdfError {}

impl From<lopdf::Error> for PdfError {
    fn from(err: lopdf::Error) -> Self {
        PdfError::InvalidPdf(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PdfError>;
