//! File operation functionality
//!
//! This module contains functions for copying a file under its new name.

use std::fs::{FileTimes, OpenOptions, create_dir_all, metadata};
use std::path::{Path, PathBuf};

use anyhow::Result;
use fs_extra::file::{CopyOptions, copy};
use log::debug;

use crate::errors::file_operation_error;

/// Result of performing a file action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileActionResult {
    /// The source path
    pub source_path: PathBuf,
    /// The target path
    pub target_path: PathBuf,
    /// Whether the file was actually copied
    pub copied: bool,
}

/// Copies a source file to its renamed target
///
/// The target directory is created when missing and an existing target is
/// overwritten. The copy keeps the source's modification and access times.
/// The source file is never modified.
///
/// # Arguments
/// * `source_path` - The file to copy
/// * `target_path` - Where the renamed copy goes
/// * `run_execution` - Whether to actually copy (true) or just simulate it (false)
///
/// # Errors
/// Returns an error if the target directory cannot be created or the copy fails
pub fn copy_renamed_file(
    source_path: &Path,
    target_path: &Path,
    run_execution: bool,
) -> Result<FileActionResult> {
    if !run_execution {
        debug!(
            "Simulating copy: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        return Ok(FileActionResult {
            source_path: source_path.to_path_buf(),
            target_path: target_path.to_path_buf(),
            copied: false,
        });
    }

    if let Some(parent) = target_path.parent() {
        create_dir_all(parent)
            .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
    }

    debug!(
        "Copying file: {} -> {}",
        source_path.display(),
        target_path.display()
    );
    let options = CopyOptions::new().overwrite(true);
    copy(source_path, target_path, &options).map_err(|e| {
        file_operation_error(std::io::Error::other(e), source_path.to_path_buf(), "copy")
    })?;
    copy_file_times(source_path, target_path)?;

    Ok(FileActionResult {
        source_path: source_path.to_path_buf(),
        target_path: target_path.to_path_buf(),
        copied: true,
    })
}

fn copy_file_times(source_path: &Path, target_path: &Path) -> Result<()> {
    let source_metadata = metadata(source_path)
        .map_err(|e| file_operation_error(e, source_path.to_path_buf(), "read timestamps of"))?;
    let modified = source_metadata
        .modified()
        .map_err(|e| file_operation_error(e, source_path.to_path_buf(), "read timestamps of"))?;

    let mut times = FileTimes::new().set_modified(modified);
    if let Ok(accessed) = source_metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    OpenOptions::new()
        .write(true)
        .open(target_path)
        .and_then(|target| target.set_times(times))
        .map_err(|e| file_operation_error(e, target_path.to_path_buf(), "set timestamps of"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[test]
    fn test_copy_renamed_file() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("img_x01.tif");
        let target = temp_dir.path().join("out").join("x001.tif");
        fs::write(&source, b"pixels").unwrap();

        let result = copy_renamed_file(&source, &target, true).unwrap();

        assert!(result.copied);
        assert!(source.exists(), "source must be left in place");
        assert_eq!(fs::read(&target).unwrap(), b"pixels");
    }

    #[test]
    fn test_copy_keeps_modification_time() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("img_x01.tif");
        let target = temp_dir.path().join("x001.tif");
        fs::write(&source, b"pixels").unwrap();

        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        fs::File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(modified)
            .unwrap();

        copy_renamed_file(&source, &target, true).unwrap();

        assert_eq!(fs::metadata(&target).unwrap().modified().unwrap(), modified);
    }

    #[test]
    fn test_copy_overwrites_existing_target() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("a.tif");
        let target = temp_dir.path().join("b.tif");
        fs::write(&source, b"new").unwrap();
        fs::write(&target, b"old").unwrap();

        copy_renamed_file(&source, &target, true).unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn test_simulated_copy_touches_nothing() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("a.tif");
        let target = temp_dir.path().join("out").join("b.tif");
        fs::write(&source, b"data").unwrap();

        let result = copy_renamed_file(&source, &target, false).unwrap();

        assert!(!result.copied);
        assert!(!target.exists());
        assert!(!temp_dir.path().join("out").exists());
    }
}
