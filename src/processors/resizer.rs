// imgreduce/src/processors/resizer.rs
use crate::core::ResizeConfig;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// The active resize rule, derived from a validated config.
///
/// Exactly one rule applies per run: a uniform percentage scale, an exact
/// width and height, or a single dimension with the other inferred to keep
/// the original aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeRule {
    Percentage(f64),
    Exact { width: u32, height: u32 },
    Width(u32),
    Height(u32),
}

impl ResizeRule {
    pub fn from_config(config: &ResizeConfig) -> Self {
        if config.percentage > 0.0 {
            ResizeRule::Percentage(config.percentage)
        } else if config.width > 0 && config.height > 0 {
            ResizeRule::Exact {
                width: config.width,
                height: config.height,
            }
        } else if config.width > 0 {
            ResizeRule::Width(config.width)
        } else {
            ResizeRule::Height(config.height)
        }
    }

    /// Computes the target size for an image of the given dimensions.
    ///
    /// Ratios are taken in `f64`; derived dimensions truncate toward zero in
    /// every branch. A computed dimension of 0 is passed through to the
    /// image library as-is.
    pub fn target_dimensions(&self, orig_width: u32, orig_height: u32) -> (u32, u32) {
        match *self {
            ResizeRule::Percentage(fraction) => (
                (orig_width as f64 * fraction) as u32,
                (orig_height as f64 * fraction) as u32,
            ),
            ResizeRule::Exact { width, height } => (width, height),
            ResizeRule::Width(width) => {
                let ratio = width as f64 / orig_width as f64;
                (width, (orig_height as f64 * ratio) as u32)
            }
            ResizeRule::Height(height) => {
                let ratio = height as f64 / orig_height as f64;
                ((orig_width as f64 * ratio) as u32, height)
            }
        }
    }
}

pub struct Resizer {
    rule: ResizeRule,
}

impl Resizer {
    pub fn new(rule: ResizeRule) -> Self {
        Self { rule }
    }

    pub fn from_config(config: &ResizeConfig) -> Self {
        Self::new(ResizeRule::from_config(config))
    }

    /// Applies the rule's target size exactly, with a high-quality
    /// antialiasing filter. The aspect ratio is whatever the rule produced.
    pub fn resize(&self, image: &DynamicImage) -> DynamicImage {
        let (orig_width, orig_height) = image.dimensions();
        let (width, height) = self.rule.target_dimensions(orig_width, orig_height);

        if width == orig_width && height == orig_height {
            log::debug!("image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "resizing image from {}x{} to {}x{}",
            orig_width,
            orig_height,
            width,
            height
        );

        image.resize_exact(width, height, FilterType::Lanczos3)
    }
}
