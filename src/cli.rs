use std::path::Path;

use anyhow::{Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, command, crate_authors, crate_description, crate_name, crate_version};

use crate::config::{Config, load_config};
use crate::constants::{
    ABOUT_LONG, CONFIG_HELP, DRY_RUN_HELP, FILE_PATTERN_HELP, INP_DIR_HELP, LOCAL_LOGGING_HELP,
    LOG_FILE_DEFAULT, LOG_FILE_HELP, OUT_DIR_HELP, OUT_FILE_PATTERN_HELP, VERBOSE_HELP,
};
use crate::logging::LogLevel;
use crate::utils::{expand_path, find_project_folder};

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `inp_dir`: Input image collection
/// - `out_dir`: Output directory for the renamed copies
/// - `file_pattern`: Pattern of the input filenames
/// - `out_file_pattern`: Pattern of the output filenames
/// - `config`: Path to a YAML configuration file
/// - `dry`: Run without copying any files
/// - `verbose`: Increase verbosity level
pub fn build_command() -> clap::Command {
    // define args for the rename options
    let arg_inp_dir = Arg::new("inp_dir")
        .short('i')
        .long("inp-dir")
        .help(INP_DIR_HELP);

    let arg_out_dir = Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .help(OUT_DIR_HELP);

    let arg_file_pattern = Arg::new("file_pattern")
        .short('f')
        .long("file-pattern")
        .help(FILE_PATTERN_HELP);

    let arg_out_file_pattern = Arg::new("out_file_pattern")
        .short('p')
        .long("out-file-pattern")
        .help(OUT_FILE_PATTERN_HELP);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(ABOUT_LONG)
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_inp_dir)
        .arg(arg_out_dir)
        .arg(arg_file_pattern)
        .arg(arg_out_file_pattern)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Resolves where the log file is written
///
/// With `--log-locally` the name is used as given, otherwise the file goes
/// into the application's config directory.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.config_dir().join(filename);
        let path_str = path
            .to_str()
            .ok_or_else(|| anyhow!("Failed to convert path to string: {}", path.display()))?;
        Ok(path_str.to_string())
    }
}

/// Whether the run should only report what it would do
pub fn is_dry_run(matches: &ArgMatches) -> bool {
    matches.get_flag("dry")
}

/// Collects the rename options from a config file and the command line
///
/// Values given on the command line override the ones read from `--config`.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed
pub fn config_from_matches(matches: &ArgMatches) -> Result<Config> {
    let base = match matches.get_one::<String>("config") {
        Some(path) => load_config(Path::new(&expand_path(path)))?,
        None => Config::default(),
    };

    let overrides = Config {
        inp_dir: matches.get_one::<String>("inp_dir").map(|p| expand_path(p)),
        out_dir: matches.get_one::<String>("out_dir").map(|p| expand_path(p)),
        file_pattern: matches.get_one::<String>("file_pattern").cloned(),
        out_file_pattern: matches.get_one::<String>("out_file_pattern").cloned(),
    };

    Ok(base.merge(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_command_line_options() {
        let matches = build_command()
            .try_get_matches_from([
                "frename",
                "-i",
                "/data/in",
                "-o",
                "/data/out",
                "-f",
                "img_x{row:dd}.tif",
                "-p",
                "x{row:ddd}.tif",
                "-vv",
                "--dry",
            ])
            .unwrap();

        let config = config_from_matches(&matches).unwrap();
        assert_eq!(config.inp_dir, Some(PathBuf::from("/data/in")));
        assert_eq!(config.out_dir, Some(PathBuf::from("/data/out")));
        assert_eq!(config.file_pattern.as_deref(), Some("img_x{row:dd}.tif"));
        assert_eq!(config.out_file_pattern.as_deref(), Some("x{row:ddd}.tif"));
        assert_eq!(get_verbosity(&matches), LogLevel::Trace);
        assert!(is_dry_run(&matches));
    }

    #[test]
    fn test_command_line_overrides_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("rename.yaml");
        fs::write(
            &config_path,
            "inpDir: /from/file\noutDir: /from/file/out\nfilePattern: a{x:d}.tif\noutFilePattern: b{x:dd}.tif\n",
        )
        .unwrap();

        let matches = build_command()
            .try_get_matches_from([
                "frename",
                "-c",
                config_path.to_str().unwrap(),
                "--out-dir",
                "/from/cli",
            ])
            .unwrap();

        let config = config_from_matches(&matches).unwrap();
        assert_eq!(config.inp_dir, Some(PathBuf::from("/from/file")));
        assert_eq!(config.out_dir, Some(PathBuf::from("/from/cli")));
        assert_eq!(config.out_file_pattern.as_deref(), Some("b{x:dd}.tif"));
        assert!(!is_dry_run(&matches));
        assert_eq!(get_verbosity(&matches), LogLevel::Info);
    }

    #[test]
    fn test_local_log_file() {
        let matches = build_command()
            .try_get_matches_from(["frename", "-L", "-l", "run.log"])
            .unwrap();
        assert_eq!(get_log_file(&matches).unwrap(), "run.log");
    }
}
