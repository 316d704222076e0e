//! Grade distribution report rows.
//!
//! Each subject block opens with a header row carrying the subject code in
//! front of the column titles (`"220 ... GradesGPA ..."`). Section rows
//! carry a course number, a section number, the number of grades awarded
//! and one percentage per grade column. The course title is printed only
//! once per course, on the row of its first section, and again on the
//! "Course Total" row closing the course.

use madgrades_report_models::{Entry, GradeCounts, GradeType, SectionGradesEntry};

use crate::ParseError;
use crate::cells::{cell, join, number, try_number};
use crate::layout::{SUBJECT_CODE_LEN, grades};

/// Decodes one grade distribution report row into entries.
///
/// A section row that also carries a course title yields two entries: the
/// [`Entry::SectionGrades`] first, then the [`Entry::CourseName`].
///
/// # Errors
///
/// Returns [`ParseError`] if a section row is shorter than the grade
/// columns or its grade count is not a number.
pub fn grade_entry<S: AsRef<str>>(row: &[S]) -> Result<Vec<Entry>, ParseError> {
    let joined = join(row);

    if joined.is_empty() {
        return Ok(vec![]);
    }

    if joined.contains(grades::SUBJECT_MARKER) {
        let code: String = joined.chars().take(SUBJECT_CODE_LEN).collect();
        log::debug!("grade_entry: subject {code}");
        return Ok(vec![Entry::subject(code)]);
    }

    let course_name = cell(row, grades::COURSE_NAME)?;

    // Section numbers such as "00A" mark aggregate rows, which are skipped.
    let course_number = try_number(row, grades::COURSE_NUMBER)?;
    let section_number = match course_number {
        Some(_) => try_number(row, grades::SECTION_NUMBER)?,
        None => None,
    };

    let (Some(course_number), Some(section_number)) = (course_number, section_number) else {
        if !course_name.is_empty() && joined.contains(grades::COURSE_TOTAL_MARKER) {
            log::debug!("grade_entry: course name '{course_name}'");
            return Ok(vec![Entry::course_name(course_name)]);
        }
        log::trace!("grade_entry: skipping non-section row '{joined}'");
        return Ok(vec![]);
    };

    let total = number(row, grades::GRADE_COUNT)?;
    let grade_counts = grade_counts(row, total)?;

    let mut entries = vec![Entry::from(SectionGradesEntry {
        course_number,
        section_number,
        grade_counts,
    })];

    if !course_name.is_empty() {
        entries.push(Entry::course_name(course_name));
    }

    Ok(entries)
}

/// Converts the percentage columns of a section row into grade counts.
fn grade_counts<S: AsRef<str>>(row: &[S], total: u32) -> Result<GradeCounts, ParseError> {
    let mut counts = GradeCounts::new();

    for (offset, grade_type) in GradeType::all().iter().enumerate() {
        let index = grades::FIRST_PERCENT + offset;
        let value = cell(row, index)?;

        let count = match parse_percent(value) {
            Some(percent) => count_from_percent(total, percent),
            None => {
                log::trace!("grade_entry: no percentage for {grade_type} in '{value}'");
                0
            }
        };

        counts.insert(*grade_type, count);
    }

    Ok(counts)
}

/// Reads a percentage cell. Negative and non-finite values are not
/// percentages and read as `None`, so they count as 0 like any other
/// unreadable cell.
fn parse_percent(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|percent| percent.is_finite() && *percent >= 0.0)
}

/// Rounds `total * percent / 100` half up. `percent` is never negative.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_from_percent(total: u32, percent: f64) -> u32 {
    (f64::from(total) * (percent / 100.0) + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a section row with `percents` filling the grade columns in
    /// order and "." for the rest.
    fn grades_row(
        name: &str,
        course: &str,
        section: &str,
        total: &str,
        percents: &[&str],
    ) -> Vec<String> {
        let mut row = vec![
            name.to_string(),
            course.to_string(),
            section.to_string(),
            total.to_string(),
            "3.500".to_string(),
        ];
        for i in 0..GradeType::all().len() {
            row.push(percents.get(i).copied().unwrap_or(".").to_string());
        }
        row
    }

    #[test]
    fn blank_row_has_no_entries() {
        assert!(grade_entry(&["", "", ""]).unwrap().is_empty());
    }

    #[test]
    fn subject_header_yields_subject_code() {
        let row = ["220 ART HISTORY", "Section", "GradesGPA", "A", "AB"];
        assert_eq!(grade_entry(&row).unwrap(), vec![Entry::subject("220")]);
    }

    #[test]
    fn computes_counts_from_percentages() {
        let row = grades_row("", "101", "1", "30", &["50.0", "", "33.3", "x"]);
        let entries = grade_entry(&row).unwrap();
        assert_eq!(entries.len(), 1);

        let Entry::SectionGrades(grades) = &entries[0] else {
            panic!("expected section grades, got {:?}", entries[0]);
        };
        assert_eq!(grades.course_number, 101);
        assert_eq!(grades.section_number, 1);
        assert_eq!(grades.grade_counts[&GradeType::A], 15);
        assert_eq!(grades.grade_counts[&GradeType::Ab], 0);
        assert_eq!(grades.grade_counts[&GradeType::B], 10);
        assert_eq!(grades.grade_counts[&GradeType::Bc], 0);
        assert_eq!(grades.grade_counts[&GradeType::Other], 0);
        assert_eq!(grades.grade_counts.len(), GradeType::all().len());
    }

    #[test]
    fn counts_keep_column_order() {
        let row = grades_row("", "101", "1", "30", &[]);
        let entries = grade_entry(&row).unwrap();
        let Entry::SectionGrades(grades) = &entries[0] else {
            panic!("expected section grades");
        };
        let keys: Vec<GradeType> = grades.grade_counts.keys().copied().collect();
        assert_eq!(keys, GradeType::all());
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(count_from_percent(30, 50.0), 15);
        assert_eq!(count_from_percent(3, 50.0), 2);
        assert_eq!(count_from_percent(1, 49.9), 0);
        assert_eq!(count_from_percent(7, 14.3), 1);
        assert_eq!(count_from_percent(0, 100.0), 0);
    }

    #[test]
    fn negative_percentage_counts_as_zero() {
        let row = grades_row("", "101", "1", "30", &["50.0", "", "-50"]);
        let entries = grade_entry(&row).unwrap();
        let Entry::SectionGrades(grades) = &entries[0] else {
            panic!("expected section grades");
        };
        assert_eq!(grades.grade_counts[&GradeType::A], 15);
        assert_eq!(grades.grade_counts[&GradeType::B], 0);
        assert_eq!(parse_percent("-50"), None);
        assert!(parse_percent(" 12.5 ").is_some());
        assert_eq!(parse_percent("inf"), None);
    }

    #[test]
    fn named_section_row_yields_grades_then_course_name() {
        let row = grades_row("Intro To Things", "101", "1", "30", &["100"]);
        let entries = grade_entry(&row).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], Entry::SectionGrades(_)));
        assert_eq!(entries[1], Entry::course_name("Intro To Things"));
    }

    #[test]
    fn lettered_section_number_has_no_entries() {
        let row = grades_row("", "101", "00A", "30", &["50.0"]);
        assert!(grade_entry(&row).unwrap().is_empty());
    }

    #[test]
    fn course_total_row_yields_course_name() {
        let row = ["Intro To Things", "Course Total", "", "30"];
        assert_eq!(
            grade_entry(&row).unwrap(),
            vec![Entry::course_name("Intro To Things")]
        );
    }

    #[test]
    fn course_total_without_name_has_no_entries() {
        let row = ["", "Course Total", "", "30"];
        assert!(grade_entry(&row).unwrap().is_empty());
    }

    #[test]
    fn named_row_without_total_has_no_entries() {
        let row = ["Page 3 of 90", "", ""];
        assert!(grade_entry(&row).unwrap().is_empty());
    }

    #[test]
    fn short_section_row_is_an_error() {
        let row = ["", "101", "1", "30", "3.5", "50.0"];
        assert_eq!(
            grade_entry(&row).unwrap_err(),
            ParseError::MissingCell { index: 6, len: 6 }
        );
    }

    #[test]
    fn malformed_total_is_an_error() {
        let row = grades_row("", "101", "1", "n/a", &[]);
        assert!(matches!(
            grade_entry(&row).unwrap_err(),
            ParseError::InvalidNumber { index: 3, .. }
        ));
    }

    #[test]
    fn decoding_is_idempotent() {
        let row = grades_row("Intro To Things", "101", "1", "30", &["50.0", "50.0"]);
        assert_eq!(grade_entry(&row).unwrap(), grade_entry(&row).unwrap());
    }
}
