//! Pattern translation
//!
//! This module turns tokenizer fragments into typed tokens. Each placeholder
//! `name:spec` becomes a [`Field`] with a closed [`FieldKind`], and each kind
//! knows the matching primitive used to build the composite expression.

use std::fmt;

use log::warn;

use crate::errors::{Result, malformed_pattern_error, unsupported_field_type_error};

use super::tokenizer::{Fragment, tokenize};

/// Primitive used for unbounded digit and integer fields
pub const DIGITS_PRIMITIVE: &str = "[0-9]*";

/// Primitive used for unbounded character fields
pub const CHARACTERS_PRIMITIVE: &str = "[a-zA-Z]*";

/// Primitive used for floating point fields
pub const FLOAT_PRIMITIVE: &str = "[+-]?([0-9]*[.])?[0-9]+";

/// Number of characters a field occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// Exactly this many characters when matching, at least this many when formatting
    Fixed(usize),
    /// Any number of characters, marked by a trailing `+`
    Unbounded,
}

/// Type of a placeholder, as written after the colon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `d`, `dd`, ... or `d+`
    Digit(Width),
    /// `i`, `ii`, ... or `i+`
    Integer(Width),
    /// `c`, `cc`, ... or `c+`
    Character(Width),
    /// `f+`
    Float,
}

impl FieldKind {
    /// Classifies a placeholder type specifier
    ///
    /// # Errors
    /// Returns an unsupported field type error when `spec` is not part of
    /// the pattern grammar.
    pub fn parse(field: &str, spec: &str) -> Result<FieldKind> {
        let kind = match spec {
            "d+" => FieldKind::Digit(Width::Unbounded),
            "i+" => FieldKind::Integer(Width::Unbounded),
            "c+" => FieldKind::Character(Width::Unbounded),
            "f+" => FieldKind::Float,
            _ if spec.is_empty() => return Err(unsupported_field_type_error(field, spec)),
            _ if spec.chars().all(|c| c == 'i') => FieldKind::Integer(Width::Fixed(spec.len())),
            _ if spec.chars().all(|c| c == 'd' || c == 'i') => {
                FieldKind::Digit(Width::Fixed(spec.len()))
            }
            _ if spec.chars().all(|c| c == 'c') => FieldKind::Character(Width::Fixed(spec.len())),
            _ => return Err(unsupported_field_type_error(field, spec)),
        };
        Ok(kind)
    }

    /// Character class and quantifier that match a value of this kind
    pub fn primitive(&self) -> String {
        match self {
            FieldKind::Digit(Width::Fixed(n)) | FieldKind::Integer(Width::Fixed(n)) => {
                format!("[0-9]{{{n}}}")
            }
            FieldKind::Digit(Width::Unbounded) | FieldKind::Integer(Width::Unbounded) => {
                DIGITS_PRIMITIVE.to_string()
            }
            FieldKind::Character(Width::Fixed(n)) => format!("[a-zA-Z]{{{n}}}"),
            FieldKind::Character(Width::Unbounded) => CHARACTERS_PRIMITIVE.to_string(),
            FieldKind::Float => FLOAT_PRIMITIVE.to_string(),
        }
    }

    /// The type specifier this kind is written as
    pub fn spec(&self) -> String {
        match self {
            FieldKind::Digit(Width::Fixed(n)) => "d".repeat(*n),
            FieldKind::Integer(Width::Fixed(n)) => "i".repeat(*n),
            FieldKind::Character(Width::Fixed(n)) => "c".repeat(*n),
            FieldKind::Digit(Width::Unbounded) => "d+".to_string(),
            FieldKind::Integer(Width::Unbounded) => "i+".to_string(),
            FieldKind::Character(Width::Unbounded) => "c+".to_string(),
            FieldKind::Float => "f+".to_string(),
        }
    }

    /// Whether values of this kind are alphabetic text
    pub fn is_textual(&self) -> bool {
        matches!(self, FieldKind::Character(_))
    }

    /// Whether values of this kind are numbers
    pub fn is_numeric(&self) -> bool {
        !self.is_textual()
    }

    pub fn width(&self) -> Width {
        match self {
            FieldKind::Digit(width) | FieldKind::Integer(width) | FieldKind::Character(width) => {
                *width
            }
            FieldKind::Float => Width::Unbounded,
        }
    }
}

/// A named, typed placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    /// Parses the inside of a placeholder, `name:spec`
    fn parse(pattern: &str, placeholder: &str) -> Result<Field> {
        let (name, spec) = placeholder.split_once(':').ok_or_else(|| {
            malformed_pattern_error(
                pattern,
                &format!("placeholder '{{{placeholder}}}' is missing a ':' type separator"),
            )
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(malformed_pattern_error(
                pattern,
                &format!("placeholder '{{{placeholder}}}' has no field name"),
            ));
        }

        let kind = FieldKind::parse(name, spec.trim())?;
        Ok(Field {
            name: name.to_string(),
            kind,
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}:{}}}", self.name, self.kind.spec())
    }
}

/// One element of a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Field(Field),
}

impl Token {
    /// The matching primitive for this token; literals translate to themselves
    pub fn primitive(&self) -> String {
        match self {
            Token::Literal(text) => text.clone(),
            Token::Field(field) => field.kind.primitive(),
        }
    }
}

/// A compiled filename pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    /// Tokenizes and translates a pattern string
    ///
    /// # Errors
    /// * Returns a malformed pattern error for unbalanced braces or a bad placeholder
    /// * Returns an unsupported field type error for an unknown type specifier
    pub fn parse(pattern: &str) -> Result<Pattern> {
        let tokens = tokenize(pattern)?
            .into_iter()
            .map(|fragment| match fragment {
                Fragment::Literal(text) => Ok(Token::Literal(text)),
                Fragment::Placeholder(text) => Field::parse(pattern, &text).map(Token::Field),
            })
            .collect::<Result<Vec<Token>>>()?;

        Ok(Pattern { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Fields in pattern order, skipping literals
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Field(field) => Some(field),
            Token::Literal(_) => None,
        })
    }

    pub fn field_count(&self) -> usize {
        self.fields().count()
    }

    /// Matching primitives for every token, literals included
    pub fn primitives(&self) -> Vec<String> {
        self.tokens.iter().map(Token::primitive).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                Token::Literal(text) => write!(f, "{text}")?,
                Token::Field(field) => write!(f, "{field}")?,
            }
        }
        Ok(())
    }
}

/// Pairs the fields of an input and an output pattern by position
///
/// The Nth field of the input corresponds to the Nth field of the output,
/// regardless of where literals sit in either pattern.
///
/// # Errors
/// Returns a malformed pattern error when the patterns have a different
/// number of fields.
pub fn align_fields<'a>(input: &'a Pattern, output: &'a Pattern) -> Result<Vec<(&'a Field, &'a Field)>> {
    let input_count = input.field_count();
    let output_count = output.field_count();
    if input_count != output_count {
        return Err(malformed_pattern_error(
            &output.to_string(),
            &format!(
                "output pattern has {output_count} field(s) but input pattern '{input}' has {input_count}"
            ),
        ));
    }

    let pairs: Vec<(&Field, &Field)> = input.fields().zip(output.fields()).collect();
    for (input_field, output_field) in &pairs {
        if input_field.name != output_field.name {
            warn!(
                "Input field '{}' is written to output field '{}'; fields are paired by position",
                input_field.name, output_field.name
            );
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_field_kind_classification() {
        assert_eq!(FieldKind::parse("r", "d+").unwrap(), FieldKind::Digit(Width::Unbounded));
        assert_eq!(FieldKind::parse("r", "i+").unwrap(), FieldKind::Integer(Width::Unbounded));
        assert_eq!(FieldKind::parse("r", "c+").unwrap(), FieldKind::Character(Width::Unbounded));
        assert_eq!(FieldKind::parse("r", "f+").unwrap(), FieldKind::Float);
        assert_eq!(FieldKind::parse("r", "ddd").unwrap(), FieldKind::Digit(Width::Fixed(3)));
        assert_eq!(FieldKind::parse("r", "ii").unwrap(), FieldKind::Integer(Width::Fixed(2)));
        assert_eq!(FieldKind::parse("r", "di").unwrap(), FieldKind::Digit(Width::Fixed(2)));
        assert_eq!(FieldKind::parse("r", "c").unwrap(), FieldKind::Character(Width::Fixed(1)));
    }

    #[test]
    fn test_field_kind_rejects_unknown_specs() {
        for spec in ["", "x", "dc", "cc+", "ff", "d++", "+"] {
            let result = FieldKind::parse("channel", spec);
            assert!(
                matches!(result, Err(Error::UnsupportedFieldType { .. })),
                "spec '{spec}' should be rejected"
            );
        }
    }

    #[test]
    fn test_primitives() {
        assert_eq!(FieldKind::Digit(Width::Fixed(2)).primitive(), "[0-9]{2}");
        assert_eq!(FieldKind::Integer(Width::Fixed(4)).primitive(), "[0-9]{4}");
        assert_eq!(FieldKind::Digit(Width::Unbounded).primitive(), "[0-9]*");
        assert_eq!(FieldKind::Character(Width::Fixed(3)).primitive(), "[a-zA-Z]{3}");
        assert_eq!(FieldKind::Character(Width::Unbounded).primitive(), "[a-zA-Z]*");
        assert_eq!(FieldKind::Float.primitive(), "[+-]?([0-9]*[.])?[0-9]+");
    }

    #[test]
    fn test_pattern_primitives() {
        let pattern = Pattern::parse("img_x{row:dd}_y{col:dd}_{channel:c+}.tif").unwrap();
        assert_eq!(
            pattern.primitives(),
            vec!["img_x", "[0-9]{2}", "_y", "[0-9]{2}", "_", "[a-zA-Z]*", ".tif"]
        );
        assert_eq!(pattern.field_count(), 3);
    }

    #[test]
    fn test_placeholder_without_colon() {
        let result = Pattern::parse("img_{row}.tif");
        assert!(matches!(result, Err(Error::MalformedPattern { .. })));
    }

    #[test]
    fn test_placeholder_without_name() {
        let result = Pattern::parse("img_{:dd}.tif");
        assert!(matches!(result, Err(Error::MalformedPattern { .. })));
    }

    #[test]
    fn test_display_renders_pattern_syntax() {
        let pattern = Pattern::parse("x{ row : dd }_{t:i+}").unwrap();
        assert_eq!(pattern.to_string(), "x{row:dd}_{t:i+}");
    }

    #[test]
    fn test_align_fields_count_mismatch() {
        let input = Pattern::parse("x{row:dd}_y{col:dd}").unwrap();
        let output = Pattern::parse("r{row:ddd}").unwrap();
        let result = align_fields(&input, &output);
        assert!(matches!(result, Err(Error::MalformedPattern { .. })));
    }

    #[test]
    fn test_align_fields_pairs_by_position() {
        let input = Pattern::parse("{a:dd}-{b:c+}").unwrap();
        let output = Pattern::parse("b{b:ddd}a{a:dd}").unwrap();
        let pairs = align_fields(&input, &output).unwrap();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0.name, "a");
        assert_eq!(pairs[0].1.name, "b");
        assert_eq!(pairs[1].1.kind, FieldKind::Digit(Width::Fixed(2)));
    }
}
