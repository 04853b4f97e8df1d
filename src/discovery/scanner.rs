//! Directory scanning functionality
//!
//! This module contains functions for scanning directories and finding files.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, warn};

use crate::errors::{directory_not_found_error, invalid_filename_error};
use crate::utils::is_hidden_file;

/// Information about a file found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// The path to the file
    pub path: PathBuf,
    /// The filename of the file
    pub filename: String,
}

impl FileInfo {
    /// Creates a new FileInfo from a path
    ///
    /// # Errors
    /// Returns an error if the filename cannot be extracted or converted to a string
    pub fn new(path: PathBuf) -> Result<Self> {
        let filename = path
            .file_name()
            .ok_or_else(|| anyhow!("Failed to get filename from path: {}", path.display()))?
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();

        Ok(FileInfo { path, filename })
    }
}

/// Scans a directory for files
///
/// Hidden files and subdirectories are skipped. The result is sorted by
/// filename so runs over the same directory see the same order.
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn scan_directory(directory: &Path) -> Result<Vec<FileInfo>> {
    debug!("Scanning directory: {}", directory.display());
    if !directory.is_dir() {
        return Err(directory_not_found_error(directory.to_path_buf()).into());
    }

    let mut files: Vec<FileInfo> = read_dir(directory)
        .map_err(|e| anyhow!("Failed to read directory {}: {}", directory.display(), e))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| !is_hidden_file(path))
        .filter(|path| path.is_file())
        .filter_map(|path| match FileInfo::new(path) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Skipping file: {e}");
                None
            }
        })
        .collect();

    files.sort_by(|a, b| a.filename.cmp(&b.filename));
    debug!("Found {} files in directory", files.len());

    Ok(files)
}
