//! File operations module
//!
//! This module contains components for copying renamed files.

mod actions;

pub use actions::{FileActionResult, copy_renamed_file};
