use clap::error::ErrorKind;
use clap::Parser;
use imgreduce::{BatchRunner, Cli, ARG_PARSE_EXIT_CODE};
use log::LevelFilter;
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                process::exit(ARG_PARSE_EXIT_CODE);
            }
        },
    };

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let config = cli.into_config();
    log::debug!("configuration:\n{}", config);

    let config = match config.validate() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            process::exit(err.exit_code());
        }
    };

    // Per-file failures are logged as the batch proceeds; a completed run
    // exits 0 regardless of how many entries failed.
    let stats = BatchRunner::new(config).run();
    log::info!("resized {} image(s), {} failure(s)", stats.resized, stats.failed);
}
