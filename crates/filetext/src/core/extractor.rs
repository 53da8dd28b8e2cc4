//! Main extraction entry points.
//!
//! [`extract`] is the boundary: it never fails, every problem becomes an
//! [`Outcome`] variant. [`extract_file`] and [`extract_bytes`] are the
//! fallible building blocks underneath it, for callers that want the
//! structured result and the error chain instead of the rendered string.
//!
//! Each async function has a `_sync` twin that runs it on a lazily built
//! current-thread runtime. The `_sync` functions must not be called from
//! inside another Tokio runtime.

use crate::core::config::ExtractionConfig;
use crate::core::format::{FileFormat, detect_format, file_extension};
use crate::core::io::{file_exists, validate_file_exists};
use crate::plugins::DocumentExtractor;
use crate::plugins::registry::get_document_extractor_registry;
use crate::types::{ExtractionResult, Outcome};
use crate::{FileTextError, Result};
use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::Arc;

/// Runtime for the synchronous wrappers.
///
/// Building a runtime only fails when the process is out of threads or file
/// descriptors, in which case nothing else would work either.
static GLOBAL_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime - system may be out of resources")
});

/// Get the extractor for a format from the registry.
fn get_extractor(format: FileFormat) -> Result<Arc<dyn DocumentExtractor>> {
    let registry = get_document_extractor_registry();
    let registry_read = registry
        .read()
        .map_err(|e| FileTextError::LockPoisoned(format!("Document extractor registry lock poisoned: {}", e)))?;
    registry_read.get(format)
}

/// Extract readable text from a file, never failing.
///
/// Order of checks:
///
/// 1. nothing at `path` gives [`Outcome::NotFound`] (the path as given);
/// 2. an extension outside the supported set gives
///    [`Outcome::UnsupportedType`];
/// 3. otherwise the format's extractor runs, and its result is classified
///    into `Extracted`, `Empty` or `Failed`.
///
/// Reading the file is part of step 3, so unreadable files show up as
/// `Failed` for their format.
///
/// # Example
///
/// ```rust,no_run
/// use filetext::{ExtractionConfig, extract};
///
/// # async fn example() {
/// let outcome = extract("report.pdf", &ExtractionConfig::default()).await;
/// println!("{}", outcome);
/// # }
/// ```
pub async fn extract(path: impl AsRef<Path>, config: &ExtractionConfig) -> Outcome {
    let path = path.as_ref();

    let format = match route(path) {
        Ok(format) => format,
        Err(outcome) => return outcome,
    };

    let result = extract_with_format(path, format, config).await;

    if let Err(e) = &result {
        tracing::warn!(path = %path.display(), format = %format, "Extraction failed: {}", e);
    }

    Outcome::from_result(format, result)
}

/// Steps 1 and 2 of [`extract`]: the format to run, or the outcome decided
/// without running any strategy.
///
/// Needs no configuration, so callers can report a missing file or an
/// unsupported extension before loading one.
pub fn route(path: impl AsRef<Path>) -> std::result::Result<FileFormat, Outcome> {
    let path = path.as_ref();

    if !file_exists(path) {
        tracing::debug!(path = %path.display(), "File not found");
        return Err(Outcome::NotFound {
            path: path.display().to_string(),
        });
    }

    detect_format(path).map_err(|_| {
        let extension = file_extension(path);
        tracing::debug!(path = %path.display(), extension = %extension, "Unsupported file type");
        Outcome::UnsupportedType { extension }
    })
}

/// Synchronous wrapper for [`extract`].
pub fn extract_sync(path: impl AsRef<Path>, config: &ExtractionConfig) -> Outcome {
    GLOBAL_RUNTIME.block_on(extract(path, config))
}

/// Extract content from a file, returning errors instead of an `Outcome`.
///
/// # Errors
///
/// - `FileTextError::Validation` - nothing exists at `path`
/// - `FileTextError::UnsupportedFormat` - the extension is not handled
/// - anything the format's extractor returns
pub async fn extract_file(path: impl AsRef<Path>, config: &ExtractionConfig) -> Result<ExtractionResult> {
    let path = path.as_ref();
    validate_file_exists(path)?;
    let format = detect_format(path)?;
    extract_with_format(path, format, config).await
}

/// Synchronous wrapper for [`extract_file`].
pub fn extract_file_sync(path: impl AsRef<Path>, config: &ExtractionConfig) -> Result<ExtractionResult> {
    GLOBAL_RUNTIME.block_on(extract_file(path, config))
}

/// Extract content from in-memory bytes of a known format.
pub async fn extract_bytes(content: &[u8], format: FileFormat, config: &ExtractionConfig) -> Result<ExtractionResult> {
    crate::extractors::ensure_initialized()?;
    let extractor = get_extractor(format)?;

    tracing::debug!(extractor = extractor.name(), size = content.len(), "Extracting bytes");

    extractor.extract_bytes(content, format, config).await
}

/// Synchronous wrapper for [`extract_bytes`].
pub fn extract_bytes_sync(content: &[u8], format: FileFormat, config: &ExtractionConfig) -> Result<ExtractionResult> {
    GLOBAL_RUNTIME.block_on(extract_bytes(content, format, config))
}

async fn extract_with_format(path: &Path, format: FileFormat, config: &ExtractionConfig) -> Result<ExtractionResult> {
    crate::extractors::ensure_initialized()?;
    let extractor = get_extractor(format)?;

    tracing::debug!(
        path = %path.display(),
        extractor = extractor.name(),
        "Extracting file"
    );

    extractor.extract_file(path, format, config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_extract_missing_file() {
        let outcome = extract("/no/such/dir/report.pdf", &ExtractionConfig::default()).await;
        assert_eq!(
            outcome,
            Outcome::NotFound {
                path: "/no/such/dir/report.pdf".to_string()
            }
        );
        assert_eq!(outcome.to_string(), "File not found: /no/such/dir/report.pdf");
    }

    #[tokio::test]
    async fn test_missing_file_checked_before_extension() {
        let outcome = extract("/no/such/notes.txt", &ExtractionConfig::default()).await;
        assert!(matches!(outcome, Outcome::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_extract_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.TXT");
        fs::write(&path, "hello").unwrap();

        let outcome = extract(&path, &ExtractionConfig::default()).await;
        assert_eq!(outcome.to_string(), "Unsupported file type: .txt");
    }

    #[test]
    fn test_route() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("t.csv");
        let txt = dir.path().join("t.txt");
        fs::write(&csv, "a\n1\n").unwrap();
        fs::write(&txt, "a").unwrap();

        assert_eq!(route(&csv), Ok(FileFormat::Csv));
        assert_eq!(
            route(&txt),
            Err(Outcome::UnsupportedType {
                extension: ".txt".to_string()
            })
        );
        assert!(matches!(route(dir.path().join("gone.pdf")), Err(Outcome::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_extract_no_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Makefile");
        fs::write(&path, "all:").unwrap();

        let outcome = extract(&path, &ExtractionConfig::default()).await;
        assert_eq!(outcome.to_string(), "Unsupported file type: ");
    }

    #[cfg(feature = "csv")]
    #[tokio::test]
    async fn test_extract_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.csv");
        fs::write(&path, "name,age\nAlice,30\n").unwrap();

        let outcome = extract(&path, &ExtractionConfig::default()).await;
        assert_eq!(outcome.to_string(), " name  age\nAlice   30");
    }

    #[cfg(feature = "csv")]
    #[tokio::test]
    async fn test_directory_named_like_csv_is_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("looks_like.csv");
        fs::create_dir(&path).unwrap();

        let outcome = extract(&path, &ExtractionConfig::default()).await;
        assert!(outcome.is_failure());
        assert!(outcome.to_string().starts_with("CSV read error: "));
    }

    #[cfg(feature = "pdf")]
    #[tokio::test]
    async fn test_corrupt_pdf_is_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"%PDF-1.4 this is not really a pdf").unwrap();

        let outcome = extract(&path, &ExtractionConfig::default()).await;
        assert!(outcome.to_string().starts_with("PDF read error: "));
    }

    #[tokio::test]
    async fn test_extract_file_reports_errors() {
        let err = extract_file("/no/such/file.csv", &ExtractionConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FileTextError::Validation { .. }));

        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# hi").unwrap();
        let err = extract_file(&path, &ExtractionConfig::default()).await.unwrap_err();
        assert!(matches!(err, FileTextError::UnsupportedFormat(ext) if ext == ".md"));
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_extract_bytes_sync() {
        let result = extract_bytes_sync(b"a\n1\n", FileFormat::Csv, &ExtractionConfig::default()).unwrap();
        assert_eq!(result.content, "a\n1");
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_extract_sync_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "x,y\n1,2\n3,\n").unwrap();

        let config = ExtractionConfig::default();
        let first = extract_sync(&path, &config);
        let second = extract_sync(&path, &config);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "x    y\n1    2\n3  NaN");
    }
}
