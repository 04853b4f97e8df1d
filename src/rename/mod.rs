//! Rename module
//!
//! This module contains the per-file token rewriter, the collection-wide
//! enumerator and the batch renamer that drives them.

mod enumerator;
mod renamer;
mod report;
mod rewriter;

pub use enumerator::EnumerationTable;
pub use renamer::Renamer;
pub use report::{FileFailure, RenameReport, RenamedFile};
pub use rewriter::{Deferred, PendingFilename, Segment, rewrite, rewrite_field};
