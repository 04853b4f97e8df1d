//! Pattern tokenizer
//!
//! This module splits a pattern string such as
//! `img_x{row:dd}_y{col:dd}_{channel:c+}.tif` into literal and placeholder
//! fragments on brace boundaries.

use std::mem;

use crate::errors::{Result, malformed_pattern_error};

/// A piece of a pattern string, before placeholder classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Text outside braces
    Literal(String),
    /// Text between a pair of braces, without the braces
    Placeholder(String),
}

/// Splits a pattern into literal and placeholder fragments
///
/// Empty and whitespace-only fragments are dropped; every other fragment is
/// trimmed of surrounding whitespace.
///
/// # Errors
/// Returns a malformed pattern error for an unmatched `{`, an unmatched `}`
/// or a `{` nested inside a placeholder.
pub fn tokenize(pattern: &str) -> Result<Vec<Fragment>> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut opened_at: Option<usize> = None;

    for (index, ch) in pattern.char_indices() {
        match ch {
            '{' => {
                if let Some(start) = opened_at {
                    return Err(malformed_pattern_error(
                        pattern,
                        &format!("nested '{{' at byte {index} inside placeholder opened at byte {start}"),
                    ));
                }
                push_fragment(&mut fragments, mem::take(&mut current), false);
                opened_at = Some(index);
            }
            '}' => {
                if opened_at.is_none() {
                    return Err(malformed_pattern_error(
                        pattern,
                        &format!("unmatched '}}' at byte {index}"),
                    ));
                }
                push_fragment(&mut fragments, mem::take(&mut current), true);
                opened_at = None;
            }
            _ => current.push(ch),
        }
    }

    if let Some(start) = opened_at {
        return Err(malformed_pattern_error(
            pattern,
            &format!("unclosed '{{' at byte {start}"),
        ));
    }
    push_fragment(&mut fragments, current, false);

    Ok(fragments)
}

fn push_fragment(fragments: &mut Vec<Fragment>, text: String, is_placeholder: bool) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }

    let text = trimmed.to_string();
    fragments.push(if is_placeholder {
        Fragment::Placeholder(text)
    } else {
        Fragment::Literal(text)
    });
}
