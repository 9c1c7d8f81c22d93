// imgreduce/src/core/mod.rs
pub mod processor;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub use processor::ImageProcessor;

/// Exit code used when the command line itself cannot be parsed.
pub const ARG_PARSE_EXIT_CODE: i32 = 1;

/// One run's worth of configuration, built from the command line and used
/// read-only after validation.
///
/// `width`/`height` of 0 and `percentage` of 0.0 mean "unset". `percentage`
/// is stored as a fraction (the CLI normalizes `50` to `0.5`).
#[derive(Debug, Clone, Default)]
pub struct ResizeConfig {
    pub source_directory: Option<PathBuf>,
    pub destination_directory: Option<PathBuf>,
    pub file_name: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub percentage: f64,
}

impl ResizeConfig {
    /// Checks the configuration once, in a fixed order, before any image is
    /// touched. The first failing check decides the reported error.
    ///
    /// On success an unset destination directory is defaulted to the current
    /// directory; nothing else is ever mutated. The destination itself is
    /// not validated, so write failures surface later as per-file errors.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.source_directory.is_some() && self.file_name.is_some() {
            return Err(ConfigError::BothSourceAndFile);
        }

        if self.source_directory.is_none() && self.file_name.is_none() {
            return Err(ConfigError::NeitherSourceNorFile);
        }

        if self.width == 0 && self.height == 0 && self.percentage == 0.0 {
            return Err(ConfigError::NoResizeRuleDefined);
        }

        if self.percentage > 0.0 && (self.width > 0 || self.height > 0) {
            return Err(ConfigError::ConflictingResizeRule);
        }

        if let Some(dir) = &self.source_directory {
            if !dir.is_dir() {
                return Err(ConfigError::SourcePathNotFound(dir.clone()));
            }
        }

        if let Some(file) = &self.file_name {
            if !file.is_file() {
                return Err(ConfigError::FilePathNotFound(file.clone()));
            }
        }

        if self.destination_directory.is_none() {
            self.destination_directory = Some(PathBuf::from("."));
        }

        Ok(self)
    }
}

impl fmt::Display for ResizeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path_or_none = |path: &Option<PathBuf>| {
            path.as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "none".to_string())
        };

        writeln!(f, "source directory: {}", path_or_none(&self.source_directory))?;
        writeln!(
            f,
            "destination directory: {}",
            path_or_none(&self.destination_directory)
        )?;
        writeln!(f, "file name: {}", path_or_none(&self.file_name))?;
        writeln!(f, "width: {}", self.width)?;
        writeln!(f, "height: {}", self.height)?;
        write!(f, "percentage: {}", self.percentage)
    }
}

/// Fatal configuration errors. Each kind aborts the whole process before any
/// image is touched, with its own exit code.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("source directory and file name cannot be set at the same time")]
    BothSourceAndFile,

    #[error("either a source directory or a file name must be given")]
    NeitherSourceNorFile,

    #[error("no resize rule given: set a width, a height, or a percentage")]
    NoResizeRuleDefined,

    #[error("percentage cannot be combined with an explicit width or height")]
    ConflictingResizeRule,

    #[error("source directory does not exist or is not a directory: {}", .0.display())]
    SourcePathNotFound(PathBuf),

    #[error("file does not exist or is not a regular file: {}", .0.display())]
    FilePathNotFound(PathBuf),
}

impl ConfigError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::BothSourceAndFile => 2,
            ConfigError::SourcePathNotFound(_) | ConfigError::FilePathNotFound(_) => 3,
            ConfigError::NoResizeRuleDefined => 4,
            ConfigError::ConflictingResizeRule => 5,
            ConfigError::NeitherSourceNorFile => 7,
        }
    }
}

/// Per-image processing errors. These are reported and counted but never
/// abort a batch.
#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("cannot derive an output file name for: {}", .0.display())]
    InvalidFileName(PathBuf),
}

pub type Result<T, E = ResizeError> = std::result::Result<T, E>;

/// Outcome counters for a completed run. Informational only: per-image
/// failures never change the process exit code.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunStats {
    pub resized: usize,
    pub failed: usize,
}
