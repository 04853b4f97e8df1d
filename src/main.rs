use anyhow::Result;
use human_panic::setup_panic;
use log::{error, info};

use file_rename::cli::{config_from_matches, get_log_file, get_matches, get_verbosity, is_dry_run};
use file_rename::logging::init_logger;
use file_rename::workflow::{ProcessingOptions, process_files};

fn main() {
    setup_panic!();

    if let Err(e) = run() {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = get_matches();

    let log_file = get_log_file(&matches)?;
    init_logger(get_verbosity(&matches), &log_file)?;

    let options = ProcessingOptions {
        config: config_from_matches(&matches)?,
        dry_run: is_dry_run(&matches),
    };

    let context = process_files(options)?;
    let stats = &context.stats;

    info!(
        "Scanned {} files: {} renamed, {} copied, {} unmatched, {} collisions, {} errors",
        stats.files_scanned,
        stats.files_renamed,
        stats.files_copied,
        stats.files_unmatched,
        stats.collisions,
        stats.errors
    );

    Ok(())
}
