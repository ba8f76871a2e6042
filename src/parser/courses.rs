//! Denied course parser
//!
//! The denied-course container holds one row per subject. A subject row nests
//! two tables: the first carries the `hs_tableHeader` subject heading, the
//! second lists the courses in its `tbody`. Rows without a heading are spacers
//! and are skipped.

use super::{cell_text, child_elements, selector, text_content};
use crate::records::CourseRecord;
use crate::{ParseError, ParseResult};
use scraper::{ElementRef, Html};

/// Container of all denied-course subject tables
pub const DENIED_CONTAINER: &str = "#NcaaCrs_DeniedCategory_All";

/// Parses a school detail page into denied course records
///
/// Course cells are read by position: weight, title, notes, max credits,
/// OK-through year, reason code, disability flag. Every cell is trimmed; the
/// title additionally has HTML entities decoded, which undoes the portal's
/// double escaping (`&amp;amp;`). Rows of the course table without any `td`
/// cell are column headers and are skipped.
///
/// # Errors
///
/// * `ParseError::MissingElement` - The denied-course container is absent
/// * `ParseError::MissingCourseTable` - A subject heading has no course table
/// * `ParseError::MissingCell` - A course row has fewer than seven cells
pub fn parse_denied_courses(html: &str) -> ParseResult<Vec<CourseRecord>> {
    let document = Html::parse_document(html);

    let container_selector = selector(DENIED_CONTAINER)?;
    let row_selector = selector("tr")?;
    let table_selector = selector("table")?;
    let header_selector = selector(".hs_tableHeader")?;
    let cell_selector = selector("td")?;

    let container = document
        .select(&container_selector)
        .next()
        .ok_or_else(|| ParseError::MissingElement {
            selector: DENIED_CONTAINER.to_string(),
        })?;

    let mut courses = Vec::new();

    // First row is the container's title
    for row in container.select(&row_selector).skip(1) {
        let tables: Vec<ElementRef<'_>> = row.select(&table_selector).collect();

        let Some(subject) = tables
            .first()
            .and_then(|table| table.select(&header_selector).next())
            .map(text_content)
        else {
            continue;
        };

        let course_table = tables
            .get(1)
            .ok_or_else(|| ParseError::MissingCourseTable {
                subject: subject.clone(),
            })?;

        let course_rows =
            child_elements(*course_table, "tbody").flat_map(|tbody| child_elements(tbody, "tr"));

        for course_row in course_rows {
            let cells: Vec<ElementRef<'_>> = course_row.select(&cell_selector).collect();

            // Header rows outside <thead> end up in the implicit <tbody>
            if cells.is_empty() {
                continue;
            }

            courses.push(CourseRecord {
                subject: subject.clone(),
                course_weight: cell_text(&cells, 0, "course")?,
                title: html_escape::decode_html_entities(&cell_text(&cells, 1, "course")?)
                    .into_owned(),
                notes: cell_text(&cells, 2, "course")?,
                max_credits: cell_text(&cells, 3, "course")?,
                ok_through: cell_text(&cells, 4, "course")?,
                reason_code: cell_text(&cells, 5, "course")?,
                disability_course: cell_text(&cells, 6, "course")?,
            });
        }
    }

    Ok(courses)
}
