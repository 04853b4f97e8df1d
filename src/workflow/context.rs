//! Workflow context
//!
//! This module defines the context passed between workflow steps.

use std::path::PathBuf;

use crate::config::RunConfig;

/// Represents a planned copy for dry-run mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOperation {
    /// The source path of the file
    pub source: PathBuf,
    /// The renamed destination path of the file
    pub destination: PathBuf,
}

/// Context for the workflow
///
/// This struct contains the state that is passed between workflow steps.
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// The validated configuration
    pub config: RunConfig,
    /// Whether to simulate the copies instead of performing them
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Planned operations for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
    /// Input filenames left out of the renamed set
    pub skipped_files: Vec<String>,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of files found in the input directory
    pub files_scanned: usize,
    /// Number of files that received a new name
    pub files_renamed: usize,
    /// Number of renamed copies written
    pub files_copied: usize,
    /// Number of files that did not match the input pattern
    pub files_unmatched: usize,
    /// Number of renamed files whose name was already taken by an earlier file
    pub collisions: usize,
    /// Number of errors
    pub errors: usize,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(config: RunConfig, dry_run: bool) -> Self {
        WorkflowContext {
            config,
            dry_run,
            stats: WorkflowStats::default(),
            planned_operations: Vec::new(),
            skipped_files: Vec::new(),
        }
    }

    /// Adds a planned operation to the context
    pub fn add_planned_operation(&mut self, operation: PlannedOperation) {
        self.planned_operations.push(operation);
    }

    /// Records an input file that was left out, and why it counts
    pub fn skip_file(&mut self, filename: &str, unmatched: bool) {
        self.skipped_files.push(filename.to_string());
        if unmatched {
            self.stats.files_unmatched += 1;
        } else {
            self.stats.errors += 1;
        }
    }

    pub fn set_files_scanned(&mut self, count: usize) {
        self.stats.files_scanned = count;
    }

    pub fn increment_files_renamed(&mut self) {
        self.stats.files_renamed += 1;
    }

    pub fn increment_files_copied(&mut self) {
        self.stats.files_copied += 1;
    }

    pub fn increment_collisions(&mut self) {
        self.stats.collisions += 1;
    }

    pub fn increment_errors(&mut self) {
        self.stats.errors += 1;
    }
}
