// imgreduce/src/processors/loader.rs
use crate::core::Result;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

/// Thin wrapper over the image crate's reader: open the file, sniff the
/// container format from its content, decode.
#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("loading image from {}", path.display());

        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;

        let (width, height) = image.dimensions();
        log::debug!(
            "loaded {}x{} pixels, color {:?}",
            width,
            height,
            image.color()
        );

        Ok(image)
    }
}
