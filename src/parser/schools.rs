//! State school list parser
//!
//! A state search returns a form whose table has one row per school. Data rows
//! carry an `hsCode` input; header and filler rows do not and are skipped.

use super::{cell_text, selector};
use crate::records::SchoolRecord;
use crate::{ParseError, ParseResult};
use scraper::{ElementRef, Html};

/// Form wrapping the search results
pub const SCHOOL_FORM: &str = r#"form[name="selectHsForm"]"#;

/// Parses a state search page into school records, in document order
///
/// # Column Layout
///
/// | Cell | Content |
/// |------|---------|
/// | 1 | `hsCode` radio input |
/// | 2 | School name |
/// | 3 | City |
/// | 4 | State (first two characters kept) |
///
/// # Errors
///
/// * `ParseError::MissingElement` - The results form is absent, which means
///   the portal returned a different page (expired session, changed markup)
/// * `ParseError::MissingCell` - A data row has fewer than four cells
///
/// # Example
///
/// ```
/// use ncaa_denied_courses::parser::parse_state_schools;
///
/// let html = r#"<form name="selectHsForm"><table>
///     <tr><td><input name="hsCode" value="441234"></td>
///     <td>Central High School</td><td>Austin</td><td>TX</td></tr>
/// </table></form>"#;
/// let schools = parse_state_schools(html).unwrap();
/// assert_eq!(schools[0].hs_code, "441234");
/// ```
pub fn parse_state_schools(html: &str) -> ParseResult<Vec<SchoolRecord>> {
    let document = Html::parse_document(html);

    let form_selector = selector(SCHOOL_FORM)?;
    let row_selector = selector("tr")?;
    let input_selector = selector(r#"input[name="hsCode"]"#)?;
    let cell_selector = selector("td")?;

    let form = document
        .select(&form_selector)
        .next()
        .ok_or_else(|| ParseError::MissingElement {
            selector: SCHOOL_FORM.to_string(),
        })?;

    let mut schools = Vec::new();
    for row in form.select(&row_selector) {
        let Some(input) = row.select(&input_selector).next() else {
            continue;
        };

        let cells: Vec<ElementRef<'_>> = row.select(&cell_selector).collect();

        schools.push(SchoolRecord {
            hs_code: input.value().attr("value").unwrap_or_default().to_string(),
            high_school_name: cell_text(&cells, 1, "school")?,
            city: cell_text(&cells, 2, "school")?,
            state: cell_text(&cells, 3, "school")?.chars().take(2).collect(),
        });
    }

    Ok(schools)
}
