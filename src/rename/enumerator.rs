//! Collection-wide enumeration
//!
//! Once every filename of a collection has been rewritten, the distinct
//! deferred values are sorted and numbered from 1. The resulting table is
//! immutable and shared by every finalization step.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::errors::{Result, generic_error, width_overflow_error};
use crate::pattern::Width;

use super::rewriter::{PendingFilename, Segment};

/// Sorted mapping from deferred raw values to their assigned numbers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumerationTable {
    numbers: BTreeMap<String, usize>,
}

impl EnumerationTable {
    /// Builds the table from every deferred value of a collection
    pub fn build(pending: &[PendingFilename]) -> EnumerationTable {
        let table = EnumerationTable::from_values(
            pending
                .iter()
                .flat_map(|file| file.deferred())
                .map(|deferred| deferred.raw.as_str()),
        );
        debug!(
            "Enumerated {} distinct value(s) across {} filename(s)",
            table.len(),
            pending.len()
        );
        for (value, number) in table.iter() {
            trace!("  {value} -> {number}");
        }
        table
    }

    /// Builds the table from raw values in any order, duplicates allowed
    ///
    /// Values are sorted byte-wise, so the assignment is case-sensitive and
    /// independent of discovery order.
    pub fn from_values<I, S>(values: I) -> EnumerationTable
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let distinct: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        let numbers = distinct
            .into_iter()
            .enumerate()
            .map(|(index, value)| (value, index + 1))
            .collect();
        EnumerationTable { numbers }
    }

    /// The number assigned to a raw value
    pub fn get(&self, raw: &str) -> Option<usize> {
        self.numbers.get(raw).copied()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Values and their numbers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.numbers.iter().map(|(value, number)| (value.as_str(), *number))
    }

    /// Checks that every deferred value fits its target width
    ///
    /// When several values overflow, the one with the lowest number is
    /// reported so the outcome does not depend on processing order.
    ///
    /// # Errors
    /// Returns a width overflow error for the lowest overflowing number
    pub fn validate(&self, pending: &[PendingFilename]) -> Result<()> {
        let mut overflow: Option<(usize, &str, usize)> = None;

        for deferred in pending.iter().flat_map(|file| file.deferred()) {
            let Width::Fixed(width) = deferred.width else {
                continue;
            };
            let number = self.number_for(&deferred.raw)?;
            if digit_count(number) > width && overflow.is_none_or(|(lowest, _, _)| number < lowest)
            {
                overflow = Some((number, deferred.raw.as_str(), width));
            }
        }

        match overflow {
            Some((number, value, width)) => Err(width_overflow_error(value, number, width)),
            None => Ok(()),
        }
    }

    /// Substitutes assigned numbers into a pending filename
    ///
    /// # Errors
    /// * Returns a width overflow error if a number is wider than its field
    /// * Returns an error if a deferred value is missing from the table
    pub fn finalize(&self, pending: &PendingFilename) -> Result<String> {
        let mut name = String::new();

        for segment in pending.segments() {
            match segment {
                Segment::Text(text) => name.push_str(text),
                Segment::Deferred(deferred) => {
                    let number = self.number_for(&deferred.raw)?;
                    name.push_str(&format_number(&deferred.raw, number, deferred.width)?);
                }
            }
        }

        Ok(name)
    }

    fn number_for(&self, raw: &str) -> Result<usize> {
        self.get(raw).ok_or_else(|| {
            generic_error(&format!("Value '{raw}' was not part of the enumerated collection"))
        })
    }
}

fn format_number(raw: &str, number: usize, width: Width) -> Result<String> {
    match width {
        Width::Fixed(width) if digit_count(number) > width => {
            Err(width_overflow_error(raw, number, width))
        }
        Width::Fixed(width) => Ok(format!("{number:0width$}")),
        Width::Unbounded => Ok(number.to_string()),
    }
}

fn digit_count(number: usize) -> usize {
    number.checked_ilog10().map_or(1, |log| log as usize + 1)
}
