//! HTML parsers for portal pages
//!
//! Both parsers build a tolerant html5ever tree, so malformed markup never
//! fails to parse; only a missing required container is an error.

mod courses;
mod schools;

pub use courses::{parse_denied_courses, DENIED_CONTAINER};
pub use schools::{parse_state_schools, SCHOOL_FORM};

use crate::{ParseError, ParseResult};
use scraper::{ElementRef, Selector};

/// Compiles a CSS selector
fn selector(css: &str) -> ParseResult<Selector> {
    Selector::parse(css).map_err(|_| ParseError::InvalidSelector(css.to_string()))
}

/// Concatenated text of an element and its descendants, trimmed
fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Direct element children of `parent` with the given tag name
///
/// Unlike a `parent > tag` selector, this never looks above `parent`.
fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == name)
}

/// Trimmed text of the cell at `index`
fn cell_text(cells: &[ElementRef<'_>], index: usize, context: &'static str) -> ParseResult<String> {
    cells
        .get(index)
        .map(|cell| text_content(*cell))
        .ok_or(ParseError::MissingCell { context, index })
}

/// Lossily decodes a raw response body for parsing
pub fn decode_body(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
