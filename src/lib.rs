//! Renames image collections from one filename pattern to another.
//!
//! Patterns such as `img_x{row:dd}_c{channel:c+}.tif` describe the filenames
//! of a collection. Every input filename is matched against the input
//! pattern, its field values are re-encoded for the output pattern, and
//! textual values written into numeric fields are enumerated across the
//! whole collection.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod pattern;
pub mod rename;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::errors::{
        config_parsing_error, directory_not_found_error, file_operation_error, generic_error,
        invalid_field_value_error, invalid_filename_error, malformed_pattern_error,
        no_match_error, pattern_matching_error, unsupported_field_type_error,
        width_overflow_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::pattern::{FilenameMatcher, Pattern};
    pub use crate::rename::{RenameReport, Renamer};
    pub use crate::workflow::{ProcessingOptions, process_files};
}
