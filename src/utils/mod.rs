// imgreduce/src/utils/mod.rs
use std::path::{Path, PathBuf};

/// Destination path for a source image: the destination directory joined
/// with the source's base file name. Same-named sources therefore collide,
/// and the last write wins.
pub fn output_path(destination: &Path, source: &Path) -> Option<PathBuf> {
    source.file_name().map(|name| destination.join(name))
}
