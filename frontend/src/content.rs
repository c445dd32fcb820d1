use shared::{parse_sections, ContentError, SectionContent};

const SECTIONS_JSON: &str = include_str!("../content/sections.json");

/// Sections of the page, in document order.
pub fn page_sections() -> Result<Vec<SectionContent>, ContentError> {
    parse_sections(SECTIONS_JSON)
}
