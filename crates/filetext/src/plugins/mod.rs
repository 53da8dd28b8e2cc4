//! Plugin system.
//!
//! Two kinds of plugins exist:
//!
//! - [`DocumentExtractor`] - one per strategy (PDF, CSV, image). The built-in
//!   ones register themselves on first use; a plugin with a higher priority
//!   for the same format takes over.
//! - [`OcrBackend`] - the recognition engine used by the image strategy,
//!   selected by `ocr.backend` in the configuration.
//!
//! All plugins must be `Send + Sync`: they live in `Arc<dyn Trait>` inside
//! process-global registries.

mod extractor;
mod ocr;
pub mod registry;
mod traits;

pub use extractor::{DocumentExtractor, list_extractors, register_extractor, unregister_extractor};
pub use ocr::{OcrBackend, list_ocr_backends, register_ocr_backend, unregister_ocr_backend};
pub use traits::Plugin;
