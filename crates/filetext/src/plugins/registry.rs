//! Plugin registration and discovery.
//!
//! One registry per plugin kind, each held in a process-global
//! `Arc<RwLock<_>>`.

use crate::core::format::FileFormat;
use crate::plugins::{DocumentExtractor, OcrBackend};
use crate::{FileTextError, Result};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

/// Reject names that are empty or contain whitespace.
fn validate_plugin_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(FileTextError::validation("Plugin name cannot be empty"));
    }

    if name.contains(char::is_whitespace) {
        return Err(FileTextError::validation(format!(
            "Plugin name '{}' cannot contain whitespace",
            name
        )));
    }

    Ok(())
}

/// Registry for OCR backend plugins, keyed by backend name.
pub struct OcrBackendRegistry {
    backends: HashMap<String, Arc<dyn OcrBackend>>,
}

impl OcrBackendRegistry {
    /// Create a registry holding the default backends.
    ///
    /// Registers the Tesseract backend when the `ocr` feature is enabled.
    pub fn new() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new_empty();

        #[cfg(feature = "ocr")]
        {
            use crate::ocr::TesseractBackend;
            if let Err(e) = registry.register(Arc::new(TesseractBackend::new())) {
                tracing::warn!("Failed to register Tesseract backend: {}", e);
            }
        }

        registry
    }

    /// Create a registry without any backends.
    pub fn new_empty() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Register (or replace) a backend under its plugin name.
    pub fn register(&mut self, backend: Arc<dyn OcrBackend>) -> Result<()> {
        let name = backend.name().to_string();

        validate_plugin_name(&name)?;

        backend.initialize()?;

        if let Some(previous) = self.backends.insert(name, backend) {
            previous.shutdown()?;
        }
        Ok(())
    }

    /// Get an OCR backend by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn OcrBackend>> {
        self.backends.get(name).cloned().ok_or_else(|| {
            let hint = if name == "tesseract" && cfg!(not(feature = "ocr")) {
                " (built without the `ocr` feature)"
            } else {
                ""
            };
            FileTextError::Plugin {
                message: format!("OCR backend '{}' not registered{}", name, hint),
                plugin_name: name.to_string(),
            }
        })
    }

    /// List all registered backend names.
    pub fn list(&self) -> Vec<String> {
        self.backends.keys().cloned().collect()
    }

    /// Remove a backend, calling its `shutdown()`.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        if let Some(backend) = self.backends.remove(name) {
            backend.shutdown()?;
        }
        Ok(())
    }

    /// Shutdown all backends and clear the registry.
    pub fn shutdown_all(&mut self) -> Result<()> {
        let names = self.list();
        for name in names {
            self.remove(&name)?;
        }
        Ok(())
    }
}

impl Default for OcrBackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry for document extractor plugins.
///
/// Several extractors may claim one format; `get` returns the one with the
/// highest priority. Registering a second extractor with the same priority
/// for a format replaces the first; the first keeps its other slots and is
/// shut down once it has none left.
pub struct DocumentExtractorRegistry {
    extractors: HashMap<FileFormat, BTreeMap<i32, Arc<dyn DocumentExtractor>>>,
    name_index: HashMap<String, Vec<(FileFormat, i32)>>,
}

impl DocumentExtractorRegistry {
    /// Create a new empty extractor registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            name_index: HashMap::new(),
        }
    }

    /// Register an extractor for every format it supports.
    pub fn register(&mut self, extractor: Arc<dyn DocumentExtractor>) -> Result<()> {
        let name = extractor.name().to_string();
        let priority = extractor.priority();

        validate_plugin_name(&name)?;

        // A name owns exactly one set of slots; re-registering replaces it.
        self.remove(&name)?;

        extractor.initialize()?;

        let mut index_entries = Vec::new();

        for format in extractor.supported_formats() {
            let displaced = self
                .extractors
                .entry(*format)
                .or_default()
                .insert(priority, Arc::clone(&extractor));
            if let Some(displaced) = displaced {
                self.release_slot(displaced, *format, priority)?;
            }
            index_entries.push((*format, priority));
        }

        self.name_index.insert(name, index_entries);

        Ok(())
    }

    /// Drop the index entry of an extractor that lost its `(format, priority)`
    /// slot, shutting it down once it holds no slots at all.
    fn release_slot(&mut self, displaced: Arc<dyn DocumentExtractor>, format: FileFormat, priority: i32) -> Result<()> {
        let name = displaced.name().to_string();
        let Some(entries) = self.name_index.get_mut(&name) else {
            return Ok(());
        };

        entries.retain(|entry| *entry != (format, priority));

        if entries.is_empty() {
            self.name_index.remove(&name);
            displaced.shutdown()?;
        }
        Ok(())
    }

    /// Get the highest priority extractor for a format.
    ///
    /// # Errors
    ///
    /// `FileTextError::MissingDependency` when nothing handles the format,
    /// which for built-in formats means the feature was compiled out.
    pub fn get(&self, format: FileFormat) -> Result<Arc<dyn DocumentExtractor>> {
        self.extractors
            .get(&format)
            .and_then(|by_priority| by_priority.values().next_back())
            .cloned()
            .ok_or_else(|| {
                FileTextError::MissingDependency(format!(
                    "no extractor registered for {} files (built without the `{}` feature?)",
                    format.label(),
                    format.label().to_lowercase()
                ))
            })
    }

    /// List all registered extractors.
    pub fn list(&self) -> Vec<String> {
        self.name_index.keys().cloned().collect()
    }

    /// Remove an extractor and call its `shutdown()`.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let Some(index_entries) = self.name_index.remove(name) else {
            return Ok(());
        };

        let mut extractor_to_shutdown: Option<Arc<dyn DocumentExtractor>> = None;

        for (format, priority) in index_entries {
            if let Some(priority_map) = self.extractors.get_mut(&format) {
                if let Some(extractor) = priority_map.remove(&priority)
                    && extractor_to_shutdown.is_none()
                {
                    extractor_to_shutdown = Some(extractor);
                }

                if priority_map.is_empty() {
                    self.extractors.remove(&format);
                }
            }
        }

        if let Some(extractor) = extractor_to_shutdown {
            extractor.shutdown()?;
        }

        Ok(())
    }

    /// Shutdown all extractors and clear the registry.
    pub fn shutdown_all(&mut self) -> Result<()> {
        let names = self.list();
        for name in names {
            self.remove(&name)?;
        }
        Ok(())
    }
}

impl Default for DocumentExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global OCR backend registry singleton.
pub static OCR_BACKEND_REGISTRY: Lazy<Arc<RwLock<OcrBackendRegistry>>> =
    Lazy::new(|| Arc::new(RwLock::new(OcrBackendRegistry::new())));

/// Global document extractor registry singleton.
pub static DOCUMENT_EXTRACTOR_REGISTRY: Lazy<Arc<RwLock<DocumentExtractorRegistry>>> =
    Lazy::new(|| Arc::new(RwLock::new(DocumentExtractorRegistry::new())));

/// Get the global OCR backend registry.
pub fn get_ocr_backend_registry() -> Arc<RwLock<OcrBackendRegistry>> {
    OCR_BACKEND_REGISTRY.clone()
}

/// Get the global document extractor registry.
pub fn get_document_extractor_registry() -> Arc<RwLock<DocumentExtractorRegistry>> {
    DOCUMENT_EXTRACTOR_REGISTRY.clone()
}
