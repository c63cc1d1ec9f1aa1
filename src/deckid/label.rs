//! # Ordinal Labels
//!
//! A label is the text `<group-name>@<index>` stored in a record's label field,
//! e.g. `Vocabulary@00003`. The index is what orders records inside a group.
//!
//! Parsing splits on the **last** `@`, so group names may themselves contain
//! `@`. The index must be all ASCII digits; width is not checked, so
//! `Math@123456` is as valid as `Math@00001`. Formatting always pads to
//! [`INDEX_WIDTH`] digits and never truncates wider values.
//!
//! Two outcomes are not labels at all, and callers absorb them locally:
//! - [`LabelError::Absent`]: the record has no label field.
//! - [`LabelError::Malformed`]: the field exists but is not `<prefix>@<digits>`.

use crate::model::Record;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const LABEL_SEPARATOR: char = '@';
pub const INDEX_WIDTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("label field is absent")]
    Absent,
    #[error("malformed label: {0:?}")]
    Malformed(String),
}

/// A parsed `<prefix>@<index>` label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    pub prefix: String,
    pub index: u64,
}

impl Label {
    pub fn new(prefix: impl Into<String>, index: u64) -> Self {
        Self {
            prefix: prefix.into(),
            index,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:0width$}",
            self.prefix,
            LABEL_SEPARATOR,
            self.index,
            width = INDEX_WIDTH
        )
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Splits a label into its prefix and raw suffix text, without validating the suffix.
pub fn split(label: &str) -> Option<(&str, &str)> {
    label.rsplit_once(LABEL_SEPARATOR)
}

pub fn parse(label: &str) -> Result<Label, LabelError> {
    let malformed = || LabelError::Malformed(label.to_string());

    let (prefix, suffix) = split(label).ok_or_else(malformed)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let index = suffix.parse::<u64>().map_err(|_| malformed())?;

    Ok(Label::new(prefix, index))
}

pub fn format(prefix: &str, index: u64) -> String {
    Label::new(prefix, index).to_string()
}

/// Reads and parses the label stored in `field` on `record`.
pub fn read_label(record: &Record, field: &str) -> Result<Label, LabelError> {
    match record.field(field) {
        Some(raw) => parse(raw),
        None => Err(LabelError::Absent),
    }
}
