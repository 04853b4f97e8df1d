use regex::Error as RegexError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the File Rename application
#[derive(Debug)]
pub enum Error {
    /// A pattern has unbalanced braces, a nested brace or a bad placeholder
    MalformedPattern { pattern: String, detail: String },
    /// A placeholder uses a type specifier outside the supported grammar
    UnsupportedFieldType { field: String, spec: String },
    /// A filename does not satisfy the input pattern
    NoMatch { pattern: String, value: String },
    /// A captured value cannot be re-encoded for its output field
    InvalidFieldValue {
        field: String,
        value: String,
        detail: String,
    },
    /// An enumerated value needs more digits than its output field allows
    WidthOverflow {
        value: String,
        number: usize,
        width: usize,
    },
    /// Error related to compiling the composite expression
    PatternMatching { source: RegexError, pattern: String },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error when a directory is not found
    DirectoryNotFound { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl Error {
    /// Whether the error only concerns a single file of the collection.
    ///
    /// Per-file errors are collected into the rename report while the batch
    /// carries on; every other error aborts the run.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Error::NoMatch { .. } | Error::InvalidFieldValue { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedPattern { pattern, detail } => {
                write!(f, "Malformed pattern '{pattern}': {detail}")
            }
            Error::UnsupportedFieldType { field, spec } => {
                write!(f, "Unsupported type '{spec}' for field '{field}'")
            }
            Error::NoMatch { pattern, value } => {
                write!(f, "No match found for pattern '{pattern}' in '{value}'")
            }
            Error::InvalidFieldValue {
                field,
                value,
                detail,
            } => {
                write!(f, "Cannot convert value '{value}' of field '{field}': {detail}")
            }
            Error::WidthOverflow {
                value,
                number,
                width,
            } => {
                write!(
                    f,
                    "Value '{value}' was assigned {number}, which does not fit in {width} digit(s)"
                )
            }
            Error::PatternMatching { pattern, .. } => {
                write!(f, "Invalid pattern: {pattern}")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::ConfigParsing { source, detail } => {
                write!(f, "Configuration parsing error: {detail}: {source}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::PatternMatching { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

impl From<RegexError> for Error {
    fn from(err: RegexError) -> Self {
        Error::PatternMatching {
            source: err,
            pattern: String::new(),
        }
    }
}

/// Custom Result type for the File Rename application
///
/// # Examples
/// ```
/// use file_rename::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a malformed pattern error
pub fn malformed_pattern_error(pattern: &str, detail: &str) -> Error {
    Error::MalformedPattern {
        pattern: pattern.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create an unsupported field type error
pub fn unsupported_field_type_error(field: &str, spec: &str) -> Error {
    Error::UnsupportedFieldType {
        field: field.to_string(),
        spec: spec.to_string(),
    }
}

/// Helper function to create a no-match error
pub fn no_match_error(pattern: &str, value: &str) -> Error {
    Error::NoMatch {
        pattern: pattern.to_string(),
        value: value.to_string(),
    }
}

/// Helper function to create an invalid field value error
pub fn invalid_field_value_error(field: &str, value: &str, detail: &str) -> Error {
    Error::InvalidFieldValue {
        field: field.to_string(),
        value: value.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a width overflow error
pub fn width_overflow_error(value: &str, number: usize, width: usize) -> Error {
    Error::WidthOverflow {
        value: value.to_string(),
        number,
        width,
    }
}

/// Helper function to create a pattern matching error
pub fn pattern_matching_error(err: RegexError, pattern: &str) -> Error {
    Error::PatternMatching {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
