//! Rename results
//!
//! This module defines what a batch rename hands back to its caller.

use crate::errors::Error;

/// A filename and the name it is renamed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    /// The input filename
    pub source: String,
    /// The final output filename
    pub target: String,
}

/// A filename that was left out of the batch, with the reason
#[derive(Debug)]
pub struct FileFailure {
    pub filename: String,
    pub error: Error,
}

/// Outcome of renaming a whole collection
///
/// Both lists keep the order of the input filenames.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: Vec<RenamedFile>,
    pub failures: Vec<FileFailure>,
}

impl RenameReport {
    /// Looks up the new name of an input filename
    pub fn target_for(&self, source: &str) -> Option<&str> {
        self.renamed
            .iter()
            .find(|file| file.source == source)
            .map(|file| file.target.as_str())
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
