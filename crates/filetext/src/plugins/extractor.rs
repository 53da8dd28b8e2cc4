//! Document extractor plugin trait.

use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::core::format::FileFormat;
use crate::core::io::read_file_async;
use crate::plugins::Plugin;
use crate::types::ExtractionResult;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Trait for document extractor plugins.
///
/// One extractor implements one strategy. The registry picks the extractor
/// with the highest [`priority`](Self::priority) for a format, so a custom
/// extractor registered with priority > 50 replaces the built-in one.
///
/// Implementations return `Ok` with empty `content` when the document simply
/// has nothing to show; the boundary turns that into the format's empty
/// sentinel. Anything that goes wrong is an `Err`.
///
/// # Example
///
/// ```rust
/// use filetext::plugins::{DocumentExtractor, Plugin};
/// use filetext::core::config::ExtractionConfig;
/// use filetext::core::format::FileFormat;
/// use filetext::types::ExtractionResult;
/// use filetext::Result;
/// use async_trait::async_trait;
///
/// struct ShoutingCsv;
///
/// impl Plugin for ShoutingCsv {
///     fn name(&self) -> &str { "shouting-csv" }
///     fn version(&self) -> String { "1.0.0".to_string() }
///     fn initialize(&self) -> Result<()> { Ok(()) }
///     fn shutdown(&self) -> Result<()> { Ok(()) }
/// }
///
/// #[async_trait]
/// impl DocumentExtractor for ShoutingCsv {
///     async fn extract_bytes(&self, content: &[u8], format: FileFormat, _config: &ExtractionConfig)
///         -> Result<ExtractionResult> {
///         Ok(ExtractionResult {
///             content: String::from_utf8_lossy(content).to_uppercase(),
///             format,
///             mime_type: format.mime_type().to_string(),
///             metadata: None,
///         })
///     }
///
///     fn supported_formats(&self) -> &[FileFormat] {
///         &[FileFormat::Csv]
///     }
///
///     fn priority(&self) -> i32 {
///         100
///     }
/// }
/// ```
#[async_trait]
pub trait DocumentExtractor: Plugin {
    /// Extract content from in-memory document bytes.
    ///
    /// # Errors
    ///
    /// - `FileTextError::Parsing` - the document is malformed
    /// - `FileTextError::Ocr` - recognition failed
    /// - `FileTextError::MissingDependency` - the backend was compiled out
    async fn extract_bytes(&self, content: &[u8], format: FileFormat, config: &ExtractionConfig)
    -> Result<ExtractionResult>;

    /// Extract content from a file on disk.
    ///
    /// The default reads the whole file and delegates to `extract_bytes`.
    async fn extract_file(&self, path: &Path, format: FileFormat, config: &ExtractionConfig) -> Result<ExtractionResult> {
        let bytes = read_file_async(path).await?;
        self.extract_bytes(&bytes, format, config).await
    }

    /// Formats handled by this extractor.
    fn supported_formats(&self) -> &[FileFormat];

    /// Selection priority; higher wins. Built-ins use 50.
    fn priority(&self) -> i32 {
        50
    }
}

/// Register a document extractor with the global registry.
pub fn register_extractor(extractor: Arc<dyn DocumentExtractor>) -> Result<()> {
    use crate::plugins::registry::get_document_extractor_registry;

    let registry = get_document_extractor_registry();
    let mut registry = registry
        .write()
        .map_err(|e| crate::FileTextError::LockPoisoned(format!("Document extractor registry: {}", e)))?;

    registry.register(extractor)
}

/// Remove an extractor from the global registry by name.
pub fn unregister_extractor(name: &str) -> Result<()> {
    use crate::plugins::registry::get_document_extractor_registry;

    let registry = get_document_extractor_registry();
    let mut registry = registry
        .write()
        .map_err(|e| crate::FileTextError::LockPoisoned(format!("Document extractor registry: {}", e)))?;

    registry.remove(name)
}

/// Names of all registered extractors.
pub fn list_extractors() -> Result<Vec<String>> {
    use crate::plugins::registry::get_document_extractor_registry;

    let registry = get_document_extractor_registry();
    let registry = registry
        .read()
        .map_err(|e| crate::FileTextError::LockPoisoned(format!("Document extractor registry: {}", e)))?;

    Ok(registry.list())
}
