//! OCR backend plugin trait.

use crate::Result;
use crate::core::config::OcrConfig;
use crate::plugins::Plugin;
use async_trait::async_trait;
use image::DynamicImage;
use std::sync::Arc;

/// Trait for OCR backend plugins.
///
/// The image extractor decodes the file first and hands the backend a
/// [`DynamicImage`], so backends never deal with container formats. The
/// returned text is raw; trimming happens in the extractor.
///
/// # Example
///
/// ```rust
/// use filetext::plugins::{OcrBackend, Plugin};
/// use filetext::core::config::OcrConfig;
/// use filetext::Result;
/// use async_trait::async_trait;
/// use image::DynamicImage;
///
/// struct SizeReporter;
///
/// impl Plugin for SizeReporter {
///     fn name(&self) -> &str { "size-reporter" }
///     fn version(&self) -> String { "1.0.0".to_string() }
///     fn initialize(&self) -> Result<()> { Ok(()) }
///     fn shutdown(&self) -> Result<()> { Ok(()) }
/// }
///
/// #[async_trait]
/// impl OcrBackend for SizeReporter {
///     async fn process_image(&self, image: &DynamicImage, _config: &OcrConfig) -> Result<String> {
///         Ok(format!("{}x{}", image.width(), image.height()))
///     }
/// }
/// ```
#[async_trait]
pub trait OcrBackend: Plugin {
    /// Recognize all text in `image`.
    ///
    /// # Errors
    ///
    /// - `FileTextError::Ocr` - engine initialization or recognition failed
    /// - `FileTextError::Validation` - the configuration is unusable
    async fn process_image(&self, image: &DynamicImage, config: &OcrConfig) -> Result<String>;

    /// Whether this backend can handle `lang`. Defaults to true.
    fn supports_language(&self, _lang: &str) -> bool {
        true
    }
}

/// Register an OCR backend with the global registry.
pub fn register_ocr_backend(backend: Arc<dyn OcrBackend>) -> Result<()> {
    use crate::plugins::registry::get_ocr_backend_registry;

    let registry = get_ocr_backend_registry();
    let mut registry = registry
        .write()
        .map_err(|e| crate::FileTextError::LockPoisoned(format!("OCR backend registry: {}", e)))?;

    registry.register(backend)
}

/// Remove an OCR backend from the global registry by name.
pub fn unregister_ocr_backend(name: &str) -> Result<()> {
    use crate::plugins::registry::get_ocr_backend_registry;

    let registry = get_ocr_backend_registry();
    let mut registry = registry
        .write()
        .map_err(|e| crate::FileTextError::LockPoisoned(format!("OCR backend registry: {}", e)))?;

    registry.remove(name)
}

/// Names of all registered OCR backends.
pub fn list_ocr_backends() -> Result<Vec<String>> {
    use crate::plugins::registry::get_ocr_backend_registry;

    let registry = get_ocr_backend_registry();
    let registry = registry
        .read()
        .map_err(|e| crate::FileTextError::LockPoisoned(format!("OCR backend registry: {}", e)))?;

    Ok(registry.list())
}
