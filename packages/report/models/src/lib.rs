#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Typed entries decoded from registrar report rows.
//!
//! Two report families feed the madgrades pipeline: directory reports,
//! which list every class section with its meeting time, place and
//! instructor, and grade distribution reports, which list the share of
//! each grade awarded in a section. Every row of either report decodes
//! into zero or more [`Entry`] values defined here. Joining entries back
//! into full course records is left to downstream consumers.

pub mod room;
pub mod schedule;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use room::{InvalidRoomError, Room};
pub use schedule::{Day, DaySchedule, InvalidDaysError, InvalidTimeError, Schedule, TimeSchedule};

/// Kind of class section listed in a directory report.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionType {
    /// Clinical
    Cln,
    /// Discussion
    Dis,
    /// Field work
    Fld,
    /// Independent study
    Ind,
    /// Laboratory
    Lab,
    /// Lecture
    Lec,
    /// Practicum
    Pra,
    /// Seminar
    Sem,
}

/// A grade column of the grade distribution report.
///
/// Declaration order is the left-to-right order of the percentage columns
/// in the report, so the derived [`Ord`] doubles as the column order.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GradeType {
    A,
    Ab,
    B,
    Bc,
    C,
    D,
    F,
    /// Satisfactory
    S,
    /// Unsatisfactory
    U,
    /// Credit
    Cr,
    /// No credit
    N,
    /// Progress
    P,
    /// Incomplete
    I,
    /// No work
    Nw,
    /// Not reported
    Nr,
    /// Any other outcome
    Other,
}

impl GradeType {
    /// Returns all variants in report column order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::A,
            Self::Ab,
            Self::B,
            Self::Bc,
            Self::C,
            Self::D,
            Self::F,
            Self::S,
            Self::U,
            Self::Cr,
            Self::N,
            Self::P,
            Self::I,
            Self::Nw,
            Self::Nr,
            Self::Other,
        ]
    }
}

/// Number of students awarded each grade in one section, in column order.
pub type GradeCounts = BTreeMap<GradeType, u32>;

/// One class section listed in a directory report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionEntry {
    /// Course number within the current subject.
    pub course_number: u32,
    /// Kind of section.
    pub section_type: SectionType,
    /// Section number within the course.
    pub section_number: u32,
    /// Meeting time and days.
    pub schedule: Schedule,
    /// Meeting place.
    pub room: Room,
    /// Registrar id of the instructor, when one is assigned.
    pub instructor_id: Option<u32>,
    /// Instructor name as printed, when one is assigned.
    pub instructor_name: Option<String>,
}

/// Grade distribution of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionGradesEntry {
    /// Course number within the current subject.
    pub course_number: u32,
    /// Section number within the course.
    pub section_number: u32,
    /// Count per grade column.
    pub grade_counts: GradeCounts,
}

/// A single decoded row fragment.
///
/// Entries arrive in report order. A [`Entry::Subject`] opens the block of
/// rows for one subject; everything after it belongs to that subject until
/// the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Entry {
    /// Start of a subject's block of rows.
    Subject {
        /// Three character subject code.
        code: String,
    },
    /// Title of a course.
    CourseName {
        /// Course title as printed.
        name: String,
    },
    /// A class section from a directory report.
    Section(SectionEntry),
    /// Grade counts for a section from a grade distribution report.
    SectionGrades(SectionGradesEntry),
}

impl Entry {
    /// Creates a [`Entry::Subject`].
    #[must_use]
    pub fn subject(code: impl Into<String>) -> Self {
        Self::Subject { code: code.into() }
    }

    /// Creates a [`Entry::CourseName`].
    #[must_use]
    pub fn course_name(name: impl Into<String>) -> Self {
        Self::CourseName { name: name.into() }
    }

    /// Short label for the kind of entry, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Subject { .. } => "SUBJECT",
            Self::CourseName { .. } => "COURSE_NAME",
            Self::Section(_) => "SECTION",
            Self::SectionGrades(_) => "SECTION_GRADES",
        }
    }
}

impl From<SectionEntry> for Entry {
    fn from(value: SectionEntry) -> Self {
        Self::Section(value)
    }
}

impl From<SectionGradesEntry> for Entry {
    fn from(value: SectionGradesEntry) -> Self {
        Self::SectionGrades(value)
    }
}
