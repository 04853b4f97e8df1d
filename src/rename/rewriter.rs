//! Token rewriting
//!
//! This module re-encodes matched field values for the output pattern. Values
//! whose input and output kinds are compatible are resolved immediately;
//! textual values written to numeric fields are deferred until the whole
//! collection has been seen.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, invalid_field_value_error};
use crate::pattern::{Field, FieldKind, FilenameMatch, Pattern, Token, Width};

/// A textual value waiting for its collection-wide number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred {
    /// Position of the field in pattern order
    pub field: usize,
    /// The value as captured from the input filename
    pub raw: String,
    /// Width the assigned number is padded to
    pub width: Width,
}

/// One piece of an output filename under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Deferred(Deferred),
}

/// Output filename with zero or more fields still awaiting enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFilename {
    source: String,
    segments: Vec<Segment>,
}

impl PendingFilename {
    pub fn new(source: &str, segments: Vec<Segment>) -> PendingFilename {
        PendingFilename {
            source: source.to_string(),
            segments,
        }
    }

    /// The input filename this name was produced from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn deferred(&self) -> impl Iterator<Item = &Deferred> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Deferred(deferred) => Some(deferred),
            Segment::Text(_) => None,
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.deferred().next().is_none()
    }

    /// The final name, if no field is waiting for enumeration
    pub fn resolved_name(&self) -> Option<String> {
        if !self.is_resolved() {
            return None;
        }
        Some(
            self.segments
                .iter()
                .filter_map(|segment| match segment {
                    Segment::Text(text) => Some(text.as_str()),
                    Segment::Deferred(_) => None,
                })
                .collect(),
        )
    }
}

/// Re-encodes one captured value for its output field
///
/// # Arguments
/// * `index` - Position of the field in pattern order
/// * `input` - The field as declared in the input pattern
/// * `output` - The field as declared in the output pattern
/// * `raw` - The captured value
///
/// # Errors
/// Returns an invalid field value error when a numeric value cannot be
/// padded to a fixed width, such as a fractional float, or when an empty
/// text value would have to be enumerated.
pub fn rewrite_field(index: usize, input: &Field, output: &Field, raw: &str) -> Result<Segment> {
    let segment = match (input.kind.is_textual(), output.kind) {
        (true, FieldKind::Character(width)) => Segment::Text(justify(raw, width)),
        (true, _) if raw.is_empty() => {
            return Err(invalid_field_value_error(
                &input.name,
                raw,
                "an empty value cannot be enumerated",
            ));
        }
        (true, FieldKind::Digit(width) | FieldKind::Integer(width)) => {
            Segment::Deferred(Deferred {
                field: index,
                raw: raw.to_string(),
                width,
            })
        }
        (true, FieldKind::Float) => Segment::Deferred(Deferred {
            field: index,
            raw: raw.to_string(),
            width: Width::Unbounded,
        }),
        (false, FieldKind::Float) => Segment::Text(raw.to_string()),
        (false, FieldKind::Digit(width) | FieldKind::Integer(width) | FieldKind::Character(width)) => {
            Segment::Text(pad_number(&input.name, raw, width)?)
        }
    };
    Ok(segment)
}

/// Rewrites every captured value and lays them out along the output pattern
///
/// Text of the filename outside the matched span is kept in place around the
/// rewritten part.
///
/// # Errors
/// Returns the first per-field conversion error
pub fn rewrite(
    source: &str,
    pairs: &[(&Field, &Field)],
    output: &Pattern,
    matched: &FilenameMatch,
) -> Result<PendingFilename> {
    let mut rewritten = pairs
        .iter()
        .zip(&matched.values)
        .enumerate()
        .map(|(index, ((input_field, output_field), raw))| {
            rewrite_field(index, input_field, output_field, raw)
        })
        .collect::<Result<Vec<Segment>>>()?
        .into_iter();

    let prefix = Some(matched.prefix.as_str()).filter(|text| !text.is_empty());
    let suffix = Some(matched.suffix.as_str()).filter(|text| !text.is_empty());

    let segments = prefix
        .map(|text| Segment::Text(text.to_string()))
        .into_iter()
        .chain(output.tokens().iter().filter_map(|token| match token {
            Token::Literal(text) => Some(Segment::Text(text.clone())),
            Token::Field(_) => rewritten.next(),
        }))
        .chain(suffix.map(|text| Segment::Text(text.to_string())))
        .collect();

    Ok(PendingFilename::new(source, segments))
}

/// Left-justifies text to at least `width` characters, padding with spaces
fn justify(raw: &str, width: Width) -> String {
    match width {
        Width::Fixed(width) => format!("{raw:<width$}"),
        Width::Unbounded => raw.to_string(),
    }
}

/// Zero-pads a base-10 value to at least `width` digits
///
/// A leading `-` is kept and counts towards the width, a leading `+` is
/// dropped. Unbounded widths only strip leading zeros from plain digit runs.
fn pad_number(field: &str, raw: &str, width: Width) -> Result<String> {
    let Width::Fixed(width) = width else {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(strip_zeros(raw).to_string());
        }
        return Ok(raw.to_string());
    };

    static SIGNED_INTEGER: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^([+-]?)([0-9]+)$").expect("Failed to compile regex pattern for SIGNED_INTEGER")
    });

    let Some(captures) = SIGNED_INTEGER.captures(raw) else {
        return Err(invalid_field_value_error(
            field,
            raw,
            &format!("expected an integer to pad to {width} digit(s)"),
        ));
    };
    let sign = if &captures[1] == "-" { "-" } else { "" };
    let digits = captures.get(2).map_or("", |m| m.as_str());

    let digits = strip_zeros(digits);
    let digit_width = width.saturating_sub(sign.len());
    Ok(format!("{sign}{digits:0>digit_width$}"))
}

fn strip_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}
