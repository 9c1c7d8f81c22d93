// imgreduce/src/cli.rs
use crate::core::ResizeConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Command-line surface.
///
/// `-h` is taken by `--height`, so the automatic help short flag is disabled
/// and help is reachable as `--help` only.
#[derive(Parser, Debug)]
#[command(
    name = "imgreduce",
    version,
    about = "Batch-resize images from a single file or a whole directory",
    disable_help_flag = true
)]
pub struct Cli {
    /// Source directory holding the images to resize (batch mode)
    #[arg(short = 's', long = "src_directory", value_name = "DIR")]
    pub src_directory: Option<PathBuf>,

    /// Destination directory for resized images (default: current directory)
    #[arg(short = 'd', long = "des_directory", value_name = "DIR")]
    pub des_directory: Option<PathBuf>,

    /// Single image file to resize (exclusive with --src_directory)
    #[arg(short = 'f', long = "file_name", value_name = "FILE")]
    pub file_name: Option<PathBuf>,

    /// Target width in pixels
    #[arg(short = 'w', long, value_name = "PIXELS", default_value_t = 0)]
    pub width: u32,

    /// Target height in pixels
    #[arg(short = 'h', long, value_name = "PIXELS", default_value_t = 0)]
    pub height: u32,

    /// Uniform scale as a percentage, e.g. 50 halves both dimensions
    #[arg(
        short = 'p',
        long,
        value_name = "PERCENT",
        value_parser = parse_percentage,
        default_value_t = 0.0
    )]
    pub percentage: f64,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help, help = "Print help")]
    help: Option<bool>,
}

impl Cli {
    /// Maps the parsed arguments onto a not-yet-validated config.
    pub fn into_config(self) -> ResizeConfig {
        ResizeConfig {
            source_directory: self.src_directory,
            destination_directory: self.des_directory,
            file_name: self.file_name,
            width: self.width,
            height: self.height,
            percentage: self.percentage,
        }
    }
}

/// Parses `--percentage` and normalizes it from percent to a fraction, so
/// `50` becomes `0.5`.
fn parse_percentage(arg: &str) -> Result<f64, String> {
    let percent: f64 = arg.parse().map_err(|_| format!("`{arg}` is not a number"))?;

    if !percent.is_finite() || percent < 0.0 {
        return Err(format!(
            "percentage must be a non-negative number, got `{arg}`"
        ));
    }

    Ok(percent / 100.0)
}
