#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Academic term codes.
//!
//! The registrar keys every report by a four digit term code:
//!
//! | Digit | Meaning |
//! |---|---|
//! | 1 | Century (`0` = 1900s, `1` = 2000s) |
//! | 2-3 | Academic year, two digits |
//! | 4 | Season (`2` = Fall, `4` = Spring, `6` = Summer) |
//!
//! The academic year of a Fall term is the calendar year it ends in, so
//! Fall 2017 and Spring 2018 share the year digits `18` (`1182`, `1184`).
//!
//! Codes are derived two ways: from a human readable label such as
//! `"Fall 2017"` ([`encode`]), and from the file names the reports are
//! published under ([`decode_grade_filename`], [`decode_dir_filename`]).
//! The two paths pick the century digit differently and are kept apart.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// First year-prefix value that maps to a valid code.
const MIN_PREFIX: i64 = 0;
/// Last year-prefix value that maps to a valid code (century `1`, year `99`).
const MAX_PREFIX: i64 = 199;

/// Errors raised when a term label, code or file name does not follow the
/// registrar's conventions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TermError {
    /// The label does not start with a known season.
    #[error("unknown season in term label '{label}'")]
    UnknownSeason {
        /// The label that was read.
        label: String,
    },

    /// The label has no numeric year after the season.
    #[error("missing or invalid year in term label '{label}'")]
    InvalidYear {
        /// The label that was read.
        label: String,
    },

    /// The year cannot be represented with a one digit century.
    #[error("year {year} is outside the range of term codes")]
    YearOutOfRange {
        /// The year that was read.
        year: i64,
    },

    /// The number is not a valid term code.
    #[error("invalid term code {code}")]
    InvalidCode {
        /// The code that was read.
        code: u32,
    },

    /// A report file name does not carry a term in the expected place.
    #[error("malformed report file name '{name}': {reason}")]
    MalformedFilename {
        /// The file name that was read.
        name: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// Season of an academic term.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Season {
    Fall,
    Spring,
    Summer,
}

impl Season {
    /// Returns the last digit of term codes for this season.
    #[must_use]
    pub const fn marker(self) -> u32 {
        match self {
            Self::Fall => 2,
            Self::Spring => 4,
            Self::Summer => 6,
        }
    }

    /// Returns the season for a term code's last digit.
    #[must_use]
    pub const fn from_marker(marker: u32) -> Option<Self> {
        match marker {
            2 => Some(Self::Fall),
            4 => Some(Self::Spring),
            6 => Some(Self::Summer),
            _ => None,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Fall, Self::Spring, Self::Summer]
    }

    /// Returns the season a term label starts with.
    fn from_label(label: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|season| label.starts_with(season.as_ref()))
    }
}

/// A decoded academic term, e.g. Fall 2017.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Term {
    /// Season of the term.
    pub season: Season,
    /// Calendar year the term takes place in.
    pub year: i64,
}

impl Term {
    /// Creates a term.
    #[must_use]
    pub const fn new(season: Season, year: i64) -> Self {
        Self { season, year }
    }

    /// Returns the term code for this term.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::YearOutOfRange`] if the year cannot be encoded.
    pub fn code(self) -> Result<u32, TermError> {
        let mut offset = self.year - 2001;
        if self.season == Season::Fall {
            offset += 1;
        }

        let prefix = 101 + offset;
        if !(MIN_PREFIX..=MAX_PREFIX).contains(&prefix) {
            return Err(TermError::YearOutOfRange { year: self.year });
        }

        // The season digit is appended to the prefix, not added to it.
        let code = format!("{prefix}{}", self.season.marker());
        code.parse()
            .map_err(|_| TermError::YearOutOfRange { year: self.year })
    }

    /// Decodes a term code.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidCode`] if the last digit is not a season
    /// marker or the code has more than four digits.
    pub fn from_code(code: u32) -> Result<Self, TermError> {
        let season = Season::from_marker(code % 10).ok_or(TermError::InvalidCode { code })?;
        let prefix = i64::from(code / 10);
        if prefix > MAX_PREFIX {
            return Err(TermError::InvalidCode { code });
        }

        let mut year = prefix + 1900;
        if season == Season::Fall {
            year -= 1;
        }

        Ok(Self { season, year })
    }
}

impl FromStr for Term {
    type Err = TermError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let season = Season::from_label(label).ok_or_else(|| TermError::UnknownSeason {
            label: label.to_string(),
        })?;

        let year = label
            .split(' ')
            .nth(1)
            .and_then(|year| year.parse().ok())
            .ok_or_else(|| TermError::InvalidYear {
                label: label.to_string(),
            })?;

        Ok(Self { season, year })
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

/// Encodes a term label such as `"Fall 2017"` into its term code.
///
/// # Errors
///
/// Returns [`TermError`] if the label does not start with a season followed
/// by a year, or the year cannot be encoded.
pub fn encode(label: &str) -> Result<u32, TermError> {
    let code = label.parse::<Term>()?.code()?;
    log::debug!("encode: '{label}' -> {code}");
    Ok(code)
}

/// Decodes a term code into its season and year.
///
/// # Errors
///
/// Returns [`TermError::InvalidCode`] if `code` is not a term code.
pub fn decode(code: u32) -> Result<Term, TermError> {
    Term::from_code(code)
}

/// Splits a report file name on `_` if it has one, otherwise on `-`.
fn filename_segments(name: &str) -> Vec<&str> {
    let delimiter = if name.contains('_') { '_' } else { '-' };
    name.split(delimiter).collect()
}

/// Derives the term code from a grade distribution report file name such
/// as `report-gradedistribution-2017-2018fall.pdf`.
///
/// The third and fourth segments hold the academic year span and the
/// season. The century digit comes from the first digit of the span, the
/// season from a `fall`/`spring` suffix (Summer when neither is present),
/// and the year digits from the last two digits of the span.
///
/// # Errors
///
/// Returns [`TermError::MalformedFilename`] if the name has too few
/// segments, the span does not start with `1` or `2`, or it does not end
/// in two digits once the season is removed.
pub fn decode_grade_filename(name: &str) -> Result<u32, TermError> {
    let malformed = |reason| TermError::MalformedFilename {
        name: name.to_string(),
        reason,
    };

    let lower = name.to_ascii_lowercase();
    let segments = filename_segments(&lower);
    let (Some(start), Some(end)) = (segments.get(2), segments.get(3)) else {
        return Err(malformed("expected at least four segments"));
    };

    let span = format!("{start}{end}").replace(".pdf", "");

    let century = match span.chars().next() {
        Some('2') => 1,
        Some('1') => 0,
        _ => return Err(malformed("year must start with 1 or 2")),
    };

    let (season, year_text) = if span.contains("fall") {
        (Season::Fall, span.replace("fall", ""))
    } else if span.contains("spring") {
        (Season::Spring, span.replace("spring", ""))
    } else {
        (Season::Summer, span.replace("summer", ""))
    };

    let year_digits = year_text
        .len()
        .checked_sub(2)
        .and_then(|start| year_text.get(start..))
        .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| malformed("expected two year digits"))?;

    let year: u32 = year_digits
        .parse()
        .map_err(|_| malformed("expected two year digits"))?;

    let code = century * 1000 + year * 10 + season.marker();
    log::debug!("decode_grade_filename: '{name}' -> {code}");

    Ok(code)
}

/// Derives the term code from a directory report file name such as
/// `1182-final-dir.pdf`, which leads with the code itself.
///
/// # Errors
///
/// Returns [`TermError::MalformedFilename`] if the first segment is not a
/// number, or [`TermError::InvalidCode`] if it is not a term code.
pub fn decode_dir_filename(name: &str) -> Result<u32, TermError> {
    let segments = filename_segments(name);
    let code: u32 = segments
        .first()
        .and_then(|segment| segment.parse().ok())
        .ok_or_else(|| TermError::MalformedFilename {
            name: name.to_string(),
            reason: "expected a leading term code",
        })?;

    Term::from_code(code)?;
    log::debug!("decode_dir_filename: '{name}' -> {code}");

    Ok(code)
}
