//! Filename matching
//!
//! This module compiles a pattern into a single regular expression with one
//! named capture group per field and extracts field values from filenames.

use log::debug;
use regex::Regex;

use crate::errors::{Result, no_match_error, pattern_matching_error};

use super::translator::{Pattern, Token};

/// A filename matched against an input pattern
///
/// The expression is unanchored, so the text around the matched span is kept
/// apart from the field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameMatch {
    /// Text of the filename before the matched span
    pub prefix: String,
    /// Raw field values in pattern order
    pub values: Vec<String>,
    /// Text of the filename after the matched span
    pub suffix: String,
}

/// Composite matcher for one input pattern
#[derive(Debug, Clone)]
pub struct FilenameMatcher {
    regex: Regex,
    pattern: String,
    field_count: usize,
}

impl FilenameMatcher {
    /// Builds the composite expression for a pattern
    ///
    /// Literals are escaped and inserted as-is; each field primitive is
    /// wrapped in a capture group named after the field's position. The
    /// expression is not anchored, so only the literals bound a match.
    ///
    /// # Errors
    /// Returns a pattern matching error if the expression fails to compile
    pub fn new(pattern: &Pattern) -> Result<FilenameMatcher> {
        let mut expression = String::new();
        let mut field_count = 0;

        for token in pattern.tokens() {
            match token {
                Token::Literal(text) => expression.push_str(&regex::escape(text)),
                Token::Field(field) => {
                    expression.push_str(&format!(
                        "(?P<{}>{})",
                        group_name(field_count),
                        field.kind.primitive()
                    ));
                    field_count += 1;
                }
            }
        }

        let regex = Regex::new(&expression).map_err(|e| pattern_matching_error(e, &expression))?;
        debug!("Compiled pattern '{pattern}' to expression '{expression}'");

        Ok(FilenameMatcher {
            regex,
            pattern: pattern.to_string(),
            field_count,
        })
    }

    /// The compiled expression
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, filename: &str) -> bool {
        self.regex.is_match(filename)
    }

    /// Matches a filename, splitting it into field values and the text around the match
    ///
    /// # Errors
    /// Returns a no-match error when the filename does not satisfy the pattern
    pub fn find(&self, filename: &str) -> Result<FilenameMatch> {
        let captures = self
            .regex
            .captures(filename)
            .ok_or_else(|| no_match_error(&self.pattern, filename))?;
        let span = captures
            .get(0)
            .ok_or_else(|| no_match_error(&self.pattern, filename))?;

        let values = (0..self.field_count)
            .map(|index| {
                captures
                    .name(&group_name(index))
                    .map(|m| m.as_str().to_string())
                    .ok_or_else(|| no_match_error(&self.pattern, filename))
            })
            .collect::<Result<Vec<String>>>()?;

        Ok(FilenameMatch {
            prefix: filename[..span.start()].to_string(),
            values,
            suffix: filename[span.end()..].to_string(),
        })
    }

    /// Extracts the raw value of every field, in pattern order
    ///
    /// # Errors
    /// Returns a no-match error when the filename does not satisfy the pattern
    pub fn captures(&self, filename: &str) -> Result<Vec<String>> {
        self.find(filename).map(|matched| matched.values)
    }
}

fn group_name(index: usize) -> String {
    format!("field{index}")
}
