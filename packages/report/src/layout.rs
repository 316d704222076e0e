//! Column positions of the extracted report tables.
//!
//! Both report families come out of the PDF extractor as rows of text
//! cells in a fixed order. The positions below are the only place that
//! order is written down.

/// Columns of a directory report row.
pub mod dir {
    /// Text that marks the row opening a new subject block.
    pub const SUBJECT_MARKER: &str = "SUBJECT:";
    /// Course number.
    pub const COURSE_NUMBER: usize = 1;
    /// Section type literal (`LEC`, `DIS`, ...).
    pub const SECTION_TYPE: usize = 2;
    /// Section number.
    pub const SECTION_NUMBER: usize = 3;
    /// Meeting time range.
    pub const TIMES: usize = 5;
    /// Meeting day letters.
    pub const DAYS: usize = 6;
    /// Facility and room.
    pub const ROOM: usize = 7;
    /// Instructor id.
    pub const INSTRUCTOR_ID: usize = 10;
    /// Instructor name.
    pub const INSTRUCTOR_NAME: usize = 11;
}

/// Columns of a grade distribution report row.
pub mod grades {
    /// Text that marks the row opening a new subject block.
    pub const SUBJECT_MARKER: &str = "GradesGPA";
    /// Text found on the course title row.
    pub const COURSE_TOTAL_MARKER: &str = "Total";
    /// Course title.
    pub const COURSE_NAME: usize = 0;
    /// Course number.
    pub const COURSE_NUMBER: usize = 1;
    /// Section number.
    pub const SECTION_NUMBER: usize = 2;
    /// Number of grades awarded in the section.
    pub const GRADE_COUNT: usize = 3;
    /// First grade percentage column. The remaining percentages follow in
    /// [`GradeType`](madgrades_report_models::GradeType) order.
    pub const FIRST_PERCENT: usize = 5;
}

/// Length of a subject code.
pub const SUBJECT_CODE_LEN: usize = 3;
