//! Pattern module
//!
//! This module contains the pattern tokenizer, the translator from
//! placeholders to typed fields and matching primitives, and the composite
//! filename matcher.

mod matcher;
mod tokenizer;
mod translator;

pub use matcher::{FilenameMatch, FilenameMatcher};
pub use tokenizer::{Fragment, tokenize};
pub use translator::{
    CHARACTERS_PRIMITIVE, DIGITS_PRIMITIVE, FLOAT_PRIMITIVE, Field, FieldKind, Pattern, Token,
    Width, align_fields,
};
