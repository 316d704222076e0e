//! Meeting times and meeting days of a class section.
//!
//! Directory reports print the time range and the day letters in two
//! separate cells, e.g. `"0800-0915"` and `"MWF"`.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// When a section meets during the week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    /// Time of day the section meets.
    pub times: TimeSchedule,
    /// Days of the week the section meets.
    pub days: DaySchedule,
}

impl Schedule {
    /// Creates a schedule from its time and day parts.
    #[must_use]
    pub const fn new(times: TimeSchedule, days: DaySchedule) -> Self {
        Self { times, days }
    }
}

/// A start/end time pair, or nothing for sections with no set meeting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeSchedule {
    /// No meeting time was listed.
    Unscheduled,
    /// Meets from `start` to `end`, both in minutes after midnight.
    Range {
        /// Start of the meeting.
        start: u16,
        /// End of the meeting.
        end: u16,
    },
}

impl TimeSchedule {
    /// Decodes a time range cell.
    ///
    /// Accepts `HHMM-HHMM`, `HH:MM-HH:MM`, and either form with an
    /// `AM`/`PM` suffix on each side. An empty cell is
    /// [`TimeSchedule::Unscheduled`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTimeError`] if the cell is not a range of two valid
    /// clock times.
    pub fn parse(text: &str) -> Result<Self, InvalidTimeError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::Unscheduled);
        }

        let err = || InvalidTimeError {
            value: text.to_string(),
        };

        let (start, end) = trimmed.split_once('-').ok_or_else(err)?;
        let start = parse_clock(start).ok_or_else(err)?;
        let end = parse_clock(end).ok_or_else(err)?;

        Ok(Self::Range { start, end })
    }
}

/// Parses one clock time into minutes after midnight.
fn parse_clock(text: &str) -> Option<u16> {
    let upper = text.trim().to_ascii_uppercase();

    let (digits, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim(), Some(false))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim(), Some(true))
    } else {
        (upper.as_str(), None)
    };

    let digits: String = digits.chars().filter(|c| *c != ':').collect();
    if !(3..=4).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = digits.split_at(digits.len() - 2);
    let mut hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;

    if minutes >= 60 {
        return None;
    }

    match meridiem {
        Some(pm) => {
            if !(1..=12).contains(&hours) {
                return None;
            }
            hours %= 12;
            if pm {
                hours += 12;
            }
        }
        None if hours >= 24 => return None,
        None => {}
    }

    Some(hours * 60 + minutes)
}

/// Error returned when a time range cell cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimeError {
    /// The cell text that failed to decode.
    pub value: String,
}

impl std::fmt::Display for InvalidTimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid meeting time range '{}'", self.value)
    }
}

impl std::error::Error for InvalidTimeError {}

/// A day of the week, as lettered in directory reports.
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
pub enum Day {
    #[strum(serialize = "M")]
    Monday,
    #[strum(serialize = "T")]
    Tuesday,
    #[strum(serialize = "W")]
    Wednesday,
    #[strum(serialize = "R")]
    Thursday,
    #[strum(serialize = "F")]
    Friday,
    #[strum(serialize = "S")]
    Saturday,
    #[strum(serialize = "U")]
    Sunday,
}

/// The set of days a section meets, kept in Monday-first order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Meeting days.
    pub days: BTreeSet<Day>,
}

impl DaySchedule {
    /// Decodes a day letters cell such as `"MWF"` or `"T R"`. An empty
    /// cell means the section has no set meeting days.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDaysError`] if the cell contains a character that
    /// is not a day letter.
    pub fn parse(text: &str) -> Result<Self, InvalidDaysError> {
        let mut days = BTreeSet::new();

        for c in text.chars().filter(|c| !c.is_whitespace()) {
            let mut buf = [0u8; 4];
            let day = Day::from_str(c.encode_utf8(&mut buf)).map_err(|_| InvalidDaysError {
                value: text.to_string(),
            })?;
            days.insert(day);
        }

        Ok(Self { days })
    }

    /// Returns `true` if no meeting days are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns `true` if the section meets on `day`.
    #[must_use]
    pub fn contains(&self, day: Day) -> bool {
        self.days.contains(&day)
    }
}

impl std::fmt::Display for DaySchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for day in &self.days {
            f.write_str(day.as_ref())?;
        }
        Ok(())
    }
}

/// Error returned when a day letters cell cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDaysError {
    /// The cell text that failed to decode.
    pub value: String,
}

impl std::fmt::Display for InvalidDaysError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid meeting days '{}'", self.value)
    }
}

impl std::error::Error for InvalidDaysError {}
