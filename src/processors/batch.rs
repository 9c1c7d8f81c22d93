use crate::core::{ImageProcessor, ResizeConfig, RunStats};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use walkdir::WalkDir;

/// Drives a whole run: a single file, or every immediate entry of the source
/// directory. No per-image failure aborts the loop; each one is logged with
/// the failing entry's name and counted.
pub struct BatchRunner {
    config: ResizeConfig,
    processor: ImageProcessor,
}

impl BatchRunner {
    pub fn new(config: ResizeConfig) -> Self {
        let processor = ImageProcessor::new(&config);
        Self { config, processor }
    }

    pub fn run(&self) -> RunStats {
        if let Some(file) = &self.config.file_name {
            self.run_file(file)
        } else if let Some(dir) = &self.config.source_directory {
            self.run_directory(dir)
        } else {
            // Unreachable after validation: one of the two modes is set.
            RunStats::default()
        }
    }

    fn run_file(&self, file: &Path) -> RunStats {
        let mut stats = RunStats::default();
        self.attempt(file, &mut stats);
        stats
    }

    fn run_directory(&self, dir: &Path) -> RunStats {
        // Immediate entries only, with no extension filtering: every entry
        // is attempted, and non-files (subdirectories included) come back
        // from the processor as per-file failures.
        let entries: Vec<_> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .collect();

        let mut stats = RunStats::default();

        if entries.is_empty() {
            log::warn!("no entries found in {}", dir.display());
            return stats;
        }

        let total = entries.len();
        log::info!("processing {} entries from {}", total, dir.display());

        let bar = create_progress_bar(total);

        for entry in entries {
            match entry {
                Ok(entry) => self.attempt(entry.path(), &mut stats),
                Err(err) => {
                    stats.failed += 1;
                    log::error!("failed to read directory entry: {}", err);
                }
            }
            bar.inc(1);
        }

        bar.finish_with_message(format!("resized {} of {} entries", stats.resized, total));

        stats
    }

    fn attempt(&self, path: &Path, stats: &mut RunStats) {
        match self.processor.process(path) {
            Ok(_) => stats.resized += 1,
            Err(err) => {
                stats.failed += 1;
                log::error!("failed to resize {}: {}", path.display(), err);
            }
        }
    }
}

fn create_progress_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}
