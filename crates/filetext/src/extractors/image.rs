//! Image extractor.
//!
//! Decodes the raster with the `image` crate and hands it to the OCR backend
//! named by `ocr.backend`.

use crate::core::config::ExtractionConfig;
use crate::core::format::FileFormat;
use crate::core::text::strip;
use crate::plugins::registry::get_ocr_backend_registry;
use crate::plugins::{DocumentExtractor, OcrBackend, Plugin};
use crate::types::{ExtractionResult, FormatMetadata, ImageMetadata};
use crate::{FileTextError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Runs OCR over PNG, JPEG, BMP and TIFF images.
pub struct ImageExtractor;

impl ImageExtractor {
    pub fn new() -> Self {
        Self
    }

    fn backend(&self, name: &str) -> Result<Arc<dyn OcrBackend>> {
        let registry = get_ocr_backend_registry();
        let registry = registry
            .read()
            .map_err(|e| FileTextError::LockPoisoned(format!("OCR backend registry lock poisoned: {}", e)))?;
        registry.get(name)
    }
}

impl Default for ImageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ImageExtractor {
    fn name(&self) -> &str {
        "image-extractor"
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    fn description(&self) -> &str {
        "Recognizes text in raster images (PNG, JPEG, BMP, TIFF) through an OCR backend"
    }
}

#[async_trait]
impl DocumentExtractor for ImageExtractor {
    async fn extract_bytes(
        &self,
        content: &[u8],
        format: FileFormat,
        config: &ExtractionConfig,
    ) -> Result<ExtractionResult> {
        let image = image::load_from_memory(content)?;

        let metadata = ImageMetadata {
            width: image.width(),
            height: image.height(),
            color_type: format!("{:?}", image.color()),
        };

        let backend = self.backend(&config.ocr.backend)?;

        if !backend.supports_language(&config.ocr.language) {
            return Err(FileTextError::validation(format!(
                "OCR backend '{}' does not support language '{}'",
                backend.name(),
                config.ocr.language
            )));
        }

        tracing::debug!(
            backend = backend.name(),
            width = metadata.width,
            height = metadata.height,
            "Running OCR"
        );

        let text = backend.process_image(&image, &config.ocr).await?;

        Ok(ExtractionResult {
            content: strip(&text).to_string(),
            format,
            mime_type: format.mime_type().to_string(),
            metadata: Some(FormatMetadata::Image(metadata)),
        })
    }

    fn supported_formats(&self) -> &[FileFormat] {
        &[FileFormat::Image]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::OcrConfig;
    use crate::plugins::register_ocr_backend;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    struct FixedTextBackend {
        name: &'static str,
        text: &'static str,
    }

    impl Plugin for FixedTextBackend {
        fn name(&self) -> &str {
            self.name
        }
        fn version(&self) -> String {
            "0.0.0".to_string()
        }
        fn initialize(&self) -> Result<()> {
            Ok(())
        }
        fn shutdown(&self) -> Result<()> {
            Ok(())
        }
    }

    #[async_trait]
    impl OcrBackend for FixedTextBackend {
        async fn process_image(&self, _image: &DynamicImage, _config: &OcrConfig) -> Result<String> {
            Ok(self.text.to_string())
        }
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255])));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn config_with_backend(name: &str) -> ExtractionConfig {
        let mut config = ExtractionConfig::default();
        config.ocr.backend = name.to_string();
        config
    }

    #[tokio::test]
    async fn test_image_extractor_trims_backend_output() {
        register_ocr_backend(Arc::new(FixedTextBackend {
            name: "fixed-hello",
            text: "\n  Hello, world  \n\n",
        }))
        .unwrap();

        let result = ImageExtractor::new()
            .extract_bytes(&png_bytes(8, 4), FileFormat::Image, &config_with_backend("fixed-hello"))
            .await
            .unwrap();

        assert_eq!(result.content, "Hello, world");
        assert_eq!(
            result.metadata,
            Some(FormatMetadata::Image(ImageMetadata {
                width: 8,
                height: 4,
                color_type: "Rgb8".to_string(),
            }))
        );
    }

    #[tokio::test]
    async fn test_image_extractor_blank_output_is_empty_content() {
        register_ocr_backend(Arc::new(FixedTextBackend {
            name: "fixed-blank",
            text: " \n\t ",
        }))
        .unwrap();

        let result = ImageExtractor::new()
            .extract_bytes(&png_bytes(2, 2), FileFormat::Image, &config_with_backend("fixed-blank"))
            .await
            .unwrap();

        assert!(result.content.is_empty());
    }

    #[tokio::test]
    async fn test_image_extractor_rejects_undecodable_bytes() {
        let err = ImageExtractor::new()
            .extract_bytes(b"not an image", FileFormat::Image, &ExtractionConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FileTextError::ImageProcessing { .. }));
    }

    #[tokio::test]
    async fn test_image_extractor_unknown_backend() {
        let err = ImageExtractor::new()
            .extract_bytes(&png_bytes(2, 2), FileFormat::Image, &config_with_backend("no-such-backend"))
            .await
            .unwrap_err();
        assert!(err.detail().contains("no-such-backend"));
    }
}
