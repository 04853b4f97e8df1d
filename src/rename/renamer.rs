//! Batch renamer
//!
//! This module ties the pattern and rename stages together: both patterns
//! are compiled once, every filename is matched and rewritten in parallel,
//! and after the enumeration barrier every pending name is finalized.

use log::{debug, info, trace, warn};
use rayon::prelude::*;

use crate::errors::Result;
use crate::logging::format_skipped;
use crate::pattern::{Field, FilenameMatcher, Pattern, align_fields};

use super::enumerator::EnumerationTable;
use super::report::{FileFailure, RenameReport, RenamedFile};
use super::rewriter::{PendingFilename, rewrite};

/// Compiled input and output patterns
#[derive(Debug, Clone)]
pub struct Renamer {
    input: Pattern,
    output: Pattern,
    matcher: FilenameMatcher,
}

impl Renamer {
    /// Compiles an input and an output pattern
    ///
    /// # Errors
    /// * Returns a malformed pattern error for bad syntax or unequal field counts
    /// * Returns an unsupported field type error for an unknown type specifier
    pub fn new(input_pattern: &str, output_pattern: &str) -> Result<Renamer> {
        Renamer::from_patterns(Pattern::parse(input_pattern)?, Pattern::parse(output_pattern)?)
    }

    /// Builds a renamer from already parsed patterns
    ///
    /// # Errors
    /// Returns a malformed pattern error when the field counts differ
    pub fn from_patterns(input: Pattern, output: Pattern) -> Result<Renamer> {
        align_fields(&input, &output)?;
        let matcher = FilenameMatcher::new(&input)?;
        Ok(Renamer {
            input,
            output,
            matcher,
        })
    }

    pub fn input_pattern(&self) -> &Pattern {
        &self.input
    }

    pub fn output_pattern(&self) -> &Pattern {
        &self.output
    }

    pub fn matcher(&self) -> &FilenameMatcher {
        &self.matcher
    }

    /// Matches and rewrites a single filename
    ///
    /// The result may still hold deferred fields; those are resolved by
    /// [`EnumerationTable::finalize`] once the whole collection is known.
    ///
    /// # Errors
    /// * Returns a no-match error if the filename does not fit the input pattern
    /// * Returns an invalid field value error if a value cannot be re-encoded
    pub fn rewrite(&self, filename: &str) -> Result<PendingFilename> {
        let matched = self.matcher.find(filename)?;
        let pairs: Vec<(&Field, &Field)> = self.input.fields().zip(self.output.fields()).collect();
        let pending = rewrite(filename, &pairs, &self.output, &matched)?;
        trace!("Rewrote {filename} to {:?}", pending.segments());
        Ok(pending)
    }

    /// Renames a whole collection
    ///
    /// Filenames that cannot be matched or re-encoded are reported in
    /// [`RenameReport::failures`] and left out of the renamed set.
    ///
    /// # Errors
    /// Returns a width overflow error when an enumerated value does not fit
    /// its output field; no filename is finalized in that case.
    pub fn rename_all<S>(&self, filenames: &[S]) -> Result<RenameReport>
    where
        S: AsRef<str> + Sync,
    {
        let rewritten: Vec<(&str, Result<PendingFilename>)> = filenames
            .par_iter()
            .map(|filename| (filename.as_ref(), self.rewrite(filename.as_ref())))
            .collect();

        let mut pending = Vec::with_capacity(rewritten.len());
        let mut failures = Vec::new();
        for (filename, result) in rewritten {
            match result {
                Ok(name) => pending.push(name),
                Err(error) if error.is_per_file() => {
                    warn!("{}", format_skipped(filename, &error));
                    failures.push(FileFailure {
                        filename: filename.to_string(),
                        error,
                    });
                }
                Err(error) => return Err(error),
            }
        }

        let table = EnumerationTable::build(&pending);
        table.validate(&pending)?;

        let renamed = pending
            .par_iter()
            .map(|name| {
                table.finalize(name).map(|target| RenamedFile {
                    source: name.source().to_string(),
                    target,
                })
            })
            .collect::<Result<Vec<RenamedFile>>>()?;

        debug!(
            "Renamed {} of {} filename(s) using {} enumerated value(s)",
            renamed.len(),
            filenames.len(),
            table.len()
        );
        if !failures.is_empty() {
            info!(
                "{} filename(s) did not match '{}'",
                failures.len(),
                self.input
            );
        }

        Ok(RenameReport { renamed, failures })
    }
}
