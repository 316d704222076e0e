//! Directory report rows.
//!
//! A directory report lists every section offered in a term. Rows are
//! either a subject header (`"SUBJECT: ART HISTORY (220)"` spread over a
//! few cells), a section row starting with a numeric course number, or
//! layout noise (page headers, column titles, blank lines).

use std::str::FromStr;

use madgrades_report_models::{
    DaySchedule, Entry, Room, Schedule, SectionEntry, SectionType, TimeSchedule,
};

use crate::ParseError;
use crate::cells::{cell, chars_before_last, join, number, optional, try_number};
use crate::layout::{SUBJECT_CODE_LEN, dir};

/// Decodes one directory report row into entries.
///
/// Returns an empty list for blank rows and for rows that are not subject
/// headers or sections.
///
/// # Errors
///
/// Returns [`ParseError`] if a row that looks like a section (numeric
/// course number) has a missing cell, an unknown section type, or a
/// malformed number, time, day or room cell.
pub fn dir_entry<S: AsRef<str>>(row: &[S]) -> Result<Vec<Entry>, ParseError> {
    let joined = join(row);

    if joined.is_empty() {
        return Ok(vec![]);
    }

    if joined.contains(dir::SUBJECT_MARKER) {
        let code = chars_before_last(&joined, SUBJECT_CODE_LEN);
        log::debug!("dir_entry: subject {code}");
        return Ok(vec![Entry::subject(code)]);
    }

    let Some(course_number) = try_number(row, dir::COURSE_NUMBER)? else {
        log::trace!("dir_entry: skipping non-section row '{joined}'");
        return Ok(vec![]);
    };

    let section = section(row, course_number)?;

    Ok(vec![Entry::from(section)])
}

/// Decodes the remaining cells of a row already known to be a section.
fn section<S: AsRef<str>>(row: &[S], course_number: u32) -> Result<SectionEntry, ParseError> {
    let section_type = cell(row, dir::SECTION_TYPE)?;
    let section_type =
        SectionType::from_str(section_type).map_err(|_| ParseError::UnknownSectionType {
            value: section_type.to_string(),
        })?;

    let section_number = number(row, dir::SECTION_NUMBER)?;
    let times = TimeSchedule::parse(cell(row, dir::TIMES)?)?;
    let days = DaySchedule::parse(cell(row, dir::DAYS)?)?;
    let room = Room::parse(cell(row, dir::ROOM)?)?;

    // Some sections have no instructor assigned.
    let instructor_id = match optional(row, dir::INSTRUCTOR_ID)? {
        Some(_) => Some(number(row, dir::INSTRUCTOR_ID)?),
        None => None,
    };
    let instructor_name = optional(row, dir::INSTRUCTOR_NAME)?.map(ToString::to_string);

    Ok(SectionEntry {
        course_number,
        section_type,
        section_number,
        schedule: Schedule::new(times, days),
        room,
        instructor_id,
        instructor_name,
    })
}

#[cfg(test)]
mod tests {
    use madgrades_report_models::Day;

    use super::*;

    fn section_row() -> Vec<&'static str> {
        vec![
            "", "101", "LEC", "1", "", "0800-0915", "MWF", "SOME1 101", "", "", "123", "Smith",
        ]
    }

    #[test]
    fn blank_row_has_no_entries() {
        assert!(dir_entry(&["", "", "", ""]).unwrap().is_empty());
        assert!(dir_entry::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn non_numeric_course_number_has_no_entries() {
        let row = ["", "CRS", "TYPE", "SEC", "", "TIME", "DAYS", "ROOM"];
        assert!(dir_entry(&row).unwrap().is_empty());
    }

    #[test]
    fn subject_row_yields_subject_code() {
        let row = ["SUBJECT:", " ART HISTORY", " (220)"];
        assert_eq!(dir_entry(&row).unwrap(), vec![Entry::subject("220")]);
    }

    #[test]
    fn subject_row_is_found_in_any_cell() {
        let row = ["", "", "SUBJECT: COMPUTER SCIENCES (266)"];
        assert_eq!(dir_entry(&row).unwrap(), vec![Entry::subject("266")]);
    }

    #[test]
    fn section_row_yields_section() {
        let entries = dir_entry(&section_row()).unwrap();
        assert_eq!(entries.len(), 1);

        let Entry::Section(section) = &entries[0] else {
            panic!("expected section entry, got {:?}", entries[0]);
        };
        assert_eq!(section.course_number, 101);
        assert_eq!(section.section_type, SectionType::Lec);
        assert_eq!(section.section_number, 1);
        assert_eq!(section.room, Room::located("SOME1", Some("101".to_string())));
        assert_eq!(section.instructor_id, Some(123));
        assert_eq!(section.instructor_name.as_deref(), Some("Smith"));
        assert_eq!(
            section.schedule.times,
            TimeSchedule::Range {
                start: 480,
                end: 555
            }
        );
        assert!(section.schedule.days.contains(Day::Monday));
        assert!(section.schedule.days.contains(Day::Friday));
    }

    #[test]
    fn missing_instructor_is_absent() {
        let mut row = section_row();
        row[10] = "";
        row[11] = "";
        let entries = dir_entry(&row).unwrap();
        let Entry::Section(section) = &entries[0] else {
            panic!("expected section entry");
        };
        assert_eq!(section.instructor_id, None);
        assert_eq!(section.instructor_name, None);
    }

    #[test]
    fn online_section_without_schedule() {
        let mut row = section_row();
        row[5] = "";
        row[6] = "";
        row[7] = "ONLINE";
        let entries = dir_entry(&row).unwrap();
        let Entry::Section(section) = &entries[0] else {
            panic!("expected section entry");
        };
        assert_eq!(section.room, Room::Online);
        assert_eq!(section.schedule.times, TimeSchedule::Unscheduled);
        assert!(section.schedule.days.is_empty());
    }

    #[test]
    fn negative_course_number_has_no_entries() {
        let mut row = section_row();
        row[1] = "-5";
        assert!(dir_entry(&row).unwrap().is_empty());
    }

    #[test]
    fn unknown_section_type_is_an_error() {
        let mut row = section_row();
        row[2] = "XYZ";
        assert_eq!(
            dir_entry(&row).unwrap_err(),
            ParseError::UnknownSectionType {
                value: "XYZ".to_string()
            }
        );
    }

    #[test]
    fn short_section_row_is_an_error() {
        let row = ["", "101", "LEC", "1", "", "0800-0915", "MWF", "SOME1 101"];
        assert_eq!(
            dir_entry(&row).unwrap_err(),
            ParseError::MissingCell { index: 10, len: 8 }
        );
    }

    #[test]
    fn malformed_instructor_id_is_an_error() {
        let mut row = section_row();
        row[10] = "abc";
        assert!(matches!(
            dir_entry(&row).unwrap_err(),
            ParseError::InvalidNumber { index: 10, .. }
        ));
    }

    #[test]
    fn decoding_is_idempotent() {
        let row = section_row();
        assert_eq!(dir_entry(&row).unwrap(), dir_entry(&row).unwrap());
    }
}
