mod cli;
mod core;
mod processors;
mod utils;

pub use crate::cli::Cli;
pub use crate::core::{
    ConfigError, ImageProcessor, ResizeConfig, ResizeError, Result, RunStats, ARG_PARSE_EXIT_CODE,
};
pub use crate::processors::{BatchRunner, Loader, ResizeRule, Resizer};
pub use crate::utils::output_path;

pub mod prelude {
    pub use crate::{BatchRunner, Cli, ImageProcessor, ResizeConfig, ResizeRule, Resizer};
}

// Re-export commonly used types
pub use image::DynamicImage;
