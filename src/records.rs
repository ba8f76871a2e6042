//! Records extracted from portal pages and the joined CSV row

use serde::Serialize;

/// Column order of the CSV output
pub const FIELD_NAMES: [&str; 12] = [
    "hs_code",
    "high_school_name",
    "city",
    "state",
    "subject",
    "course_weight",
    "title",
    "notes",
    "max_credits",
    "ok_through",
    "reason_code",
    "disability_course",
];

/// A high school listed on a state search page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolRecord {
    /// Portal identifier of the school
    pub hs_code: String,
    pub high_school_name: String,
    pub city: String,
    /// Two-letter state abbreviation
    pub state: String,
}

/// A course the portal has denied core-course credit for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub subject: String,
    pub course_weight: String,
    /// Course title with HTML entities decoded
    pub title: String,
    pub notes: String,
    pub max_credits: String,
    pub ok_through: String,
    pub reason_code: String,
    pub disability_course: String,
}

/// One CSV line: a school's fields broadcast onto one of its courses
///
/// Field declaration order matches [`FIELD_NAMES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub hs_code: String,
    pub high_school_name: String,
    pub city: String,
    pub state: String,
    pub subject: String,
    pub course_weight: String,
    pub title: String,
    pub notes: String,
    pub max_credits: String,
    pub ok_through: String,
    pub reason_code: String,
    pub disability_course: String,
}

impl OutputRow {
    /// Joins a school with one of its courses
    pub fn join(school: &SchoolRecord, course: CourseRecord) -> Self {
        Self {
            hs_code: school.hs_code.clone(),
            high_school_name: school.high_school_name.clone(),
            city: school.city.clone(),
            state: school.state.clone(),
            subject: course.subject,
            course_weight: course.course_weight,
            title: course.title,
            notes: course.notes,
            max_credits: course.max_credits,
            ok_through: course.ok_through,
            reason_code: course.reason_code,
            disability_course: course.disability_course,
        }
    }
}
