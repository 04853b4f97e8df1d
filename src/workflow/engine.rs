//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use std::collections::HashMap;

use anyhow::Result;
use log::{debug, error, info, warn};

use crate::config::Config;
use crate::discovery::scan_directory;
use crate::errors::Error;
use crate::file_ops::copy_renamed_file;
use crate::logging::{format_collision, format_rename};

use super::context::{PlannedOperation, WorkflowContext};

/// Options for processing files
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Configuration merged from the config file and the command line
    pub config: Config,
    /// Whether to only report the planned copies
    pub dry_run: bool,
}

/// Renames an image collection into the output directory
///
/// This function orchestrates the workflow steps:
/// 1. Validate the configuration and compile both patterns
/// 2. List the files of the input directory
/// 3. Rename the whole collection, enumerating textual values across all files
/// 4. Warn about files that end up with the same name
/// 5. Copy every renamed file into the output directory
///
/// # Errors
/// * Returns an error if the configuration is incomplete or a pattern is invalid
/// * Returns an error if the input directory cannot be read
/// * Returns an error if an enumerated value does not fit its output field
pub fn process_files(options: ProcessingOptions) -> Result<WorkflowContext> {
    // Step 1: Validate the configuration and compile the patterns
    let config = options.config.validate(true)?;
    let renamer = &config.renamer;
    debug!("Input expression: {}", renamer.matcher().as_str());

    let mut context = WorkflowContext::new(config.clone(), options.dry_run);

    // Step 2: List the input collection
    let files = scan_directory(&config.inp_dir)?;
    context.set_files_scanned(files.len());

    if files.is_empty() {
        info!("No files found in {}", config.inp_dir.display());
        return Ok(context);
    }

    info!(
        "Renaming {} files{}...",
        files.len(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    // Step 3: Rename the collection
    let filenames: Vec<&str> = files.iter().map(|file| file.filename.as_str()).collect();
    let report = renamer.rename_all(&filenames)?;

    for failure in &report.failures {
        let unmatched = matches!(failure.error, Error::NoMatch { .. });
        context.skip_file(&failure.filename, unmatched);
    }

    // Step 4: Detect names produced more than once
    let mut claimed: HashMap<&str, &str> = HashMap::new();
    for renamed in &report.renamed {
        if let Some(previous) = claimed.insert(renamed.target.as_str(), renamed.source.as_str()) {
            warn!("{}", format_collision(previous, &renamed.source, &renamed.target));
            context.increment_collisions();
        }
    }

    // Step 5: Copy the renamed files
    for renamed in &report.renamed {
        context.increment_files_renamed();
        info!("{}", format_rename(&renamed.source, &renamed.target));

        let source = config.inp_dir.join(&renamed.source);
        let target = config.out_dir.join(&renamed.target);

        match copy_renamed_file(&source, &target, !options.dry_run) {
            Ok(result) if result.copied => context.increment_files_copied(),
            Ok(result) => context.add_planned_operation(PlannedOperation {
                source: result.source_path,
                destination: result.target_path,
            }),
            Err(e) => {
                error!("Failed to copy {}: {e}", source.display());
                context.increment_errors();
            }
        }
    }

    info!(
        "Finished: {} renamed, {} unmatched, {} errors",
        context.stats.files_renamed, context.stats.files_unmatched, context.stats.errors
    );

    if options.dry_run && !context.planned_operations.is_empty() {
        print_plan(&context);
    }

    Ok(context)
}

fn print_plan(context: &WorkflowContext) {
    println!("\nDetailed plan of operations:");
    println!("===========================");

    println!("\nFiles to be copied:");
    println!("------------------");
    for op in &context.planned_operations {
        println!("  From: {}", op.source.display());
        println!("  To:   {}", op.destination.display());
    }

    if !context.skipped_files.is_empty() {
        println!("\nFiles to be skipped:");
        println!("-------------------");
        for filename in &context.skipped_files {
            println!("  {filename}");
        }
    }

    println!("\nSummary:");
    println!("--------");
    println!("  Files to be copied:  {}", context.planned_operations.len());
    println!("  Files to be skipped: {}", context.skipped_files.len());
    println!("  Name collisions:     {}", context.stats.collisions);
    println!("\nRun without --dry flag to execute these operations.");
}
