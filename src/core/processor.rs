// imgreduce/src/core/processor.rs
use super::{ResizeConfig, ResizeError, Result};
use crate::processors::{Loader, Resizer};
use crate::utils::output_path;
use std::path::{Path, PathBuf};

/// Decode-resize-encode pipeline for a single image.
///
/// Built once per run from a validated config and reused for every file; all
/// per-image resources (the file handle, the decoded buffer) live only for
/// the duration of one `process` call.
pub struct ImageProcessor {
    destination: PathBuf,
    loader: Loader,
    resizer: Resizer,
}

impl ImageProcessor {
    pub fn new(config: &ResizeConfig) -> Self {
        let destination = config
            .destination_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            destination,
            loader: Loader::new(),
            resizer: Resizer::from_config(config),
        }
    }

    /// Resizes one image into the destination directory under the source's
    /// base file name, which also keeps the encoded format of the source.
    ///
    /// A path that is not an existing regular file is a per-file failure,
    /// not a fatal error; so is anything the image library reports while
    /// decoding, resizing, or encoding. Nothing is written on failure.
    pub fn process(&self, input: &Path) -> Result<PathBuf> {
        if !input.is_file() {
            return Err(ResizeError::NotAFile(input.to_path_buf()));
        }

        let output = output_path(&self.destination, input)
            .ok_or_else(|| ResizeError::InvalidFileName(input.to_path_buf()))?;

        let image = self.loader.load(input)?;
        let resized = self.resizer.resize(&image);
        resized.save(&output)?;

        log::info!("saved {}", output.display());

        Ok(output)
    }
}
