//! Tesseract OCR backend.
//!
//! Feeds decoded RGB pixels straight to libtesseract, so any format the
//! `image` crate can decode works without a temporary file.

use crate::core::config::OcrConfig;
use crate::plugins::{OcrBackend, Plugin};
use crate::{FileTextError, Result};
use async_trait::async_trait;
use image::DynamicImage;
use tesseract::Tesseract;

/// Backend name used in `ocr.backend`.
pub const TESSERACT_BACKEND_NAME: &str = "tesseract";

/// OCR backend backed by the system libtesseract.
///
/// A fresh engine is created per image.
pub struct TesseractBackend;

impl TesseractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TesseractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for TesseractBackend {
    fn name(&self) -> &str {
        TESSERACT_BACKEND_NAME
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
        "Recognizes text with the system Tesseract library"
    }
}

#[async_trait]
impl OcrBackend for TesseractBackend {
    async fn process_image(&self, image: &DynamicImage, config: &OcrConfig) -> Result<String> {
        let rgb = image.to_rgb8();
        let config = config.clone();

        tokio::task::spawn_blocking(move || recognize_rgb(rgb, &config))
            .await
            .map_err(|e| FileTextError::ocr(format!("OCR task failed: {}", e)))?
    }

    fn supports_language(&self, lang: &str) -> bool {
        !lang.is_empty()
            && lang
                .split('+')
                .all(|code| !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
    }
}

fn recognize_rgb(rgb: image::RgbImage, config: &OcrConfig) -> Result<String> {
    let width = i32::try_from(rgb.width()).map_err(|_| FileTextError::ocr("Image too wide for Tesseract"))?;
    let height = i32::try_from(rgb.height()).map_err(|_| FileTextError::ocr("Image too tall for Tesseract"))?;
    let bytes_per_line = width
        .checked_mul(3)
        .ok_or_else(|| FileTextError::ocr("Image too wide for Tesseract"))?;

    let datapath = match &config.tessdata_dir {
        Some(dir) => Some(
            dir.to_str()
                .ok_or_else(|| FileTextError::validation(format!("Non UTF-8 tessdata path: {}", dir.display())))?,
        ),
        None => None,
    };

    tracing::debug!(language = %config.language, width, height, "Starting Tesseract");

    let mut engine = Tesseract::new(datapath, Some(config.language.as_str()))
        .map_err(|e| FileTextError::ocr(format!("Failed to initialize Tesseract ({}): {}", config.language, e)))?
        .set_frame(rgb.as_raw(), width, height, 3, bytes_per_line)
        .map_err(|e| FileTextError::ocr(format!("Failed to set image: {}", e)))?
        .recognize()
        .map_err(|e| FileTextError::ocr(format!("Recognition failed: {}", e)))?;

    engine
        .get_text()
        .map_err(|e| FileTextError::ocr(format!("Failed to read recognized text: {}", e)))
}
