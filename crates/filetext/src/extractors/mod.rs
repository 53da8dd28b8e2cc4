//! Built-in document extractors.
//!
//! One extractor per strategy. All of them implement the `DocumentExtractor`
//! plugin trait and are registered on first use.

use crate::Result;
use crate::plugins::registry::get_document_extractor_registry;
use once_cell::sync::Lazy;
use std::sync::Arc;

pub mod image;

#[cfg(feature = "csv")]
pub mod csv;

#[cfg(feature = "pdf")]
pub mod pdf;

pub use self::image::ImageExtractor;

#[cfg(feature = "csv")]
pub use self::csv::CsvExtractor;

#[cfg(feature = "pdf")]
pub use self::pdf::PdfExtractor;

/// Registers the built-in extractors exactly once.
static EXTRACTORS_INITIALIZED: Lazy<Result<()>> = Lazy::new(register_default_extractors);

/// Ensure built-in extractors are registered.
///
/// Safe to call repeatedly. If the registry was emptied after the first
/// registration, the defaults are registered again.
pub fn ensure_initialized() -> Result<()> {
    EXTRACTORS_INITIALIZED
        .as_ref()
        .map(|_| ())
        .map_err(|e| crate::FileTextError::Plugin {
            message: format!("Failed to register default extractors: {}", e),
            plugin_name: "built-in-extractors".to_string(),
        })?;

    let registry = get_document_extractor_registry();
    let registry_guard = registry
        .read()
        .map_err(|e| crate::FileTextError::LockPoisoned(format!("Document extractor registry lock poisoned: {}", e)))?;

    if registry_guard.list().is_empty() {
        drop(registry_guard);
        register_default_extractors()?;
    }

    Ok(())
}

/// Register all built-in extractors with the global registry.
///
/// Called automatically on the first extraction.
///
/// # Example
///
/// ```rust
/// use filetext::extractors::register_default_extractors;
///
/// # fn main() -> filetext::Result<()> {
/// register_default_extractors()?;
/// # Ok(())
/// # }
/// ```
pub fn register_default_extractors() -> Result<()> {
    let registry = get_document_extractor_registry();
    let mut registry = registry
        .write()
        .map_err(|e| crate::FileTextError::LockPoisoned(format!("Document extractor registry lock poisoned: {}", e)))?;

    registry.register(Arc::new(ImageExtractor::new()))?;

    #[cfg(feature = "pdf")]
    registry.register(Arc::new(PdfExtractor::new()))?;

    #[cfg(feature = "csv")]
    registry.register(Arc::new(CsvExtractor::new()))?;

    Ok(())
}
