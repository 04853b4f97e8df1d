//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::rename::Renamer;

use super::loader::deserialize_optional_path;

/// Options for a rename run, as read from a config file or the command line
///
/// Every value is optional here so that a config file and command-line flags
/// can each supply part of it; [`Config::validate`] checks the combination.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Directory holding the image collection to rename
    #[serde(default, alias = "inpDir", deserialize_with = "deserialize_optional_path")]
    pub inp_dir: Option<PathBuf>,
    /// Directory the renamed copies are written to
    #[serde(default, alias = "outDir", deserialize_with = "deserialize_optional_path")]
    pub out_dir: Option<PathBuf>,
    /// Pattern the input filenames follow
    #[serde(default, alias = "filePattern")]
    pub file_pattern: Option<String>,
    /// Pattern the output filenames are written in
    #[serde(default, alias = "outFilePattern")]
    pub out_file_pattern: Option<String>,
}

/// A complete, validated set of options
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub inp_dir: PathBuf,
    pub out_dir: PathBuf,
    pub file_pattern: String,
    pub out_file_pattern: String,
    /// Both patterns, compiled once during validation
    pub renamer: Renamer,
}

impl Config {
    /// Combines two configurations, values from `overrides` win
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            inp_dir: overrides.inp_dir.or(self.inp_dir),
            out_dir: overrides.out_dir.or(self.out_dir),
            file_pattern: overrides.file_pattern.or(self.file_pattern),
            out_file_pattern: overrides.out_file_pattern.or(self.out_file_pattern),
        }
    }

    /// Validates the configuration
    ///
    /// This method checks that:
    /// - every option is present
    /// - both patterns compile and have the same number of fields
    /// - the input directory exists and the output path is not a file (if check_paths is true)
    ///
    /// # Arguments
    /// * `check_paths` - Whether to check if paths exist and are accessible
    ///
    /// # Returns
    /// * `Result<RunConfig>` - The validated options or an error with a helpful message
    pub fn validate(&self, check_paths: bool) -> Result<RunConfig> {
        let inp_dir = self.inp_dir.clone().ok_or_else(|| {
            anyhow!("No input directory specified. Use --inp-dir or set inp_dir in the config file.")
        })?;
        let out_dir = self.out_dir.clone().ok_or_else(|| {
            anyhow!("No output directory specified. Use --out-dir or set out_dir in the config file.")
        })?;
        let file_pattern = self.file_pattern.clone().ok_or_else(|| {
            anyhow!(
                "No input pattern specified. Use --file-pattern or set file_pattern in the config file."
            )
        })?;
        let out_file_pattern = self.out_file_pattern.clone().ok_or_else(|| {
            anyhow!(
                "No output pattern specified. Use --out-file-pattern or set out_file_pattern in the config file."
            )
        })?;

        let renamer = Renamer::new(&file_pattern, &out_file_pattern)
            .map_err(|e| anyhow!("Invalid rename patterns: {e}"))?;

        if check_paths {
            if !inp_dir.exists() {
                return Err(anyhow!(
                    "Input directory does not exist: {}\n{}",
                    inp_dir.display(),
                    "Please check the path and ensure it exists."
                ));
            }

            if !inp_dir.is_dir() {
                return Err(anyhow!(
                    "Input path is not a directory: {}\n{}",
                    inp_dir.display(),
                    "Please specify a valid directory path."
                ));
            }

            if out_dir.exists() && !out_dir.is_dir() {
                return Err(anyhow!(
                    "Output path is not a directory: {}\n{}",
                    out_dir.display(),
                    "Please specify a valid directory path."
                ));
            }
        }

        Ok(RunConfig {
            inp_dir,
            out_dir,
            file_pattern,
            out_file_pattern,
            renamer,
        })
    }
}
