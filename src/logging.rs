//! Logging setup and rename-specific log lines
//!
//! Messages go to stdout coloured by level and, optionally, to a log file
//! with a timestamp. The `format_*` helpers build the lines the renamer and
//! the workflow emit for each file.

use anyhow::Result;
use chrono::SecondsFormat;
use colored::Colorize;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

use crate::errors::Error;

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    /// Default; one line per renamed file
    Info,
    /// Adds compiled expressions and the enumeration table size
    Debug,
    /// Adds every pending name and every enumerated value
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Maps the number of `-v` flags to a level
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Initialises the global logger
///
/// When `log_file` is empty only stdout is used.
pub fn init_logger(verbosity: LogLevel, log_file: &str) -> Result<()> {
    let mut logger = Dispatch::new()
        .level(verbosity.to_level_filter())
        .chain(stdout_dispatch());

    if !log_file.is_empty() {
        logger = logger.chain(file_dispatch(log_file)?);
    }
    logger.apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");
    Ok(())
}

fn stdout_dispatch() -> Dispatch {
    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "\x1B[{}m{}\x1B[0m",
                colors_line.get_color(&record.level()).to_fg_str(),
                message
            ))
        })
        .chain(std::io::stdout())
}

fn file_dispatch(log_file: &str) -> Result<Dispatch> {
    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(fern::log_file(log_file)?))
}

/// Picks the coloured variant of a message only when stdout is a terminal
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}

/// `source -> target`, with the new name highlighted
pub fn format_rename(source: &str, target: &str) -> String {
    let message = format!("{source} -> {target}");
    let colored_message = format!("{source} -> {}", target.bold().green());
    format_message(&message, &colored_message)
}

/// A file left out of the renamed set, with the reason
pub fn format_skipped(filename: &str, error: &Error) -> String {
    let message = format!("Skipping {filename}: {error}");
    let colored_message = format!("Skipping {}: {error}", filename.bold());
    format_message(&message, &colored_message)
}

/// Two input files that were given the same output name
pub fn format_collision(previous: &str, current: &str, target: &str) -> String {
    let message =
        format!("{previous} and {current} are both renamed to {target}; the copy of {current} wins");
    let colored_message = format!(
        "{previous} and {current} are both renamed to {}; the copy of {current} wins",
        target.bold().red()
    );
    format_message(&message, &colored_message)
}
