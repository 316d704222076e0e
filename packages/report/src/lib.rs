#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Row classification and entry decoding for registrar reports.
//!
//! The PDF extractor hands over each report as a stream of rows, where a
//! row is an ordered list of text cells. Report rows carry no type tag, so
//! each row is tried against increasingly specific shapes (blank, subject
//! header, section record) and the first shape that fits decides the
//! entries it produces. Rows that fit no shape are layout noise and decode
//! to nothing.
//!
//! Decoding is all-or-nothing: a row either yields complete entries or a
//! [`ParseError`] describing which assumption about the row was broken.

pub mod cells;
pub mod dir;
pub mod grades;
pub mod layout;

use madgrades_report_models::{InvalidDaysError, InvalidRoomError, InvalidTimeError};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use dir::dir_entry;
pub use grades::grade_entry;
pub use madgrades_report_models::Entry;

/// Errors raised when a row breaks the report layout contract.
///
/// Rows that simply are not records (headers, footers, blank lines) are
/// not errors; they decode to an empty list of entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The row ends before a required column.
    #[error("row has {len} cells, expected a cell at index {index}")]
    MissingCell {
        /// Column that was read.
        index: usize,
        /// Number of cells in the row.
        len: usize,
    },

    /// A required numeric column holds something else.
    #[error("invalid number in column {index}: '{value}'")]
    InvalidNumber {
        /// Column that was read.
        index: usize,
        /// Cell text.
        value: String,
    },

    /// The section type column holds an unknown literal.
    #[error("unknown section type '{value}'")]
    UnknownSectionType {
        /// Cell text.
        value: String,
    },

    /// The room column could not be decoded.
    #[error(transparent)]
    Room(#[from] InvalidRoomError),

    /// The meeting time column could not be decoded.
    #[error(transparent)]
    Time(#[from] InvalidTimeError),

    /// The meeting days column could not be decoded.
    #[error(transparent)]
    Days(#[from] InvalidDaysError),
}

/// A [`ParseError`] tagged with the position of the offending row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row {row}: {source}")]
pub struct RowError {
    /// Zero-based index of the row in the input.
    pub row: usize,
    /// What was wrong with the row.
    #[source]
    pub source: ParseError,
}

/// The two report families that can be decoded.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReportKind {
    /// Directory of class sections.
    Dir,
    /// Grade distribution.
    Grades,
}

/// Decodes one row of a report of the given kind.
///
/// # Errors
///
/// Returns [`ParseError`] if the row breaks the layout of `kind`.
pub fn parse_row<S: AsRef<str>>(kind: ReportKind, row: &[S]) -> Result<Vec<Entry>, ParseError> {
    match kind {
        ReportKind::Dir => dir_entry(row),
        ReportKind::Grades => grade_entry(row),
    }
}

/// Decodes every row of a report in order, concatenating the entries.
///
/// Stops at the first row that breaks the layout.
///
/// # Errors
///
/// Returns [`RowError`] naming the first row that failed to decode.
pub fn parse_rows<S: AsRef<str>>(
    kind: ReportKind,
    rows: &[Vec<S>],
) -> Result<Vec<Entry>, RowError> {
    let mut entries = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let decoded = parse_row(kind, row).map_err(|source| RowError { row: index, source })?;
        entries.extend(decoded);
    }

    log::debug!(
        "Decoded {} entries from {} {kind} report rows",
        entries.len(),
        rows.len()
    );

    Ok(entries)
}
