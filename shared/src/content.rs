//! Page content: the sections an accordion is built from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Invalid section content: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Section {index} has a blank title")]
    BlankTitle { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    pub title: String,
    /// Markdown.
    #[serde(default)]
    pub body: String,
}

/// Parses a JSON array of sections, in document order.
pub fn parse_sections(json: &str) -> Result<Vec<SectionContent>, ContentError> {
    let sections: Vec<SectionContent> = serde_json::from_str(json)?;

    if let Some(index) = sections.iter().position(|s| s.title.trim().is_empty()) {
        return Err(ContentError::BlankTitle { index });
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accordion::AccordionState;

    #[test]
    fn test_parse_sections_keeps_order() {
        let json = r#"[
            {"title": "Variables", "body": "`x = 1`"},
            {"title": "Loops"},
            {"title": "Functions", "body": "def f(): ..."}
        ]"#;

        let sections = parse_sections(json).unwrap();
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Variables", "Loops", "Functions"]);
        assert_eq!(sections[1].body, "");
    }

    #[test]
    fn test_parse_sections_empty() {
        let sections = parse_sections("[]").unwrap();
        assert!(sections.is_empty());

        let mut state = AccordionState::from_content(sections);
        state.initialize();
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn test_parse_sections_blank_title() {
        let json = r#"[{"title": "Intro"}, {"title": "   ", "body": "orphan"}]"#;
        let err = parse_sections(json).unwrap_err();
        assert!(matches!(err, ContentError::BlankTitle { index: 1 }));
    }

    #[test]
    fn test_parse_sections_invalid_json() {
        let err = parse_sections(r#"{"title": "not a list"}"#).unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn test_from_content_initializes_first() {
        let sections = parse_sections(r#"[{"title": "A"}, {"title": "B"}]"#).unwrap();
        let mut state = AccordionState::from_content(sections);
        state.initialize();

        assert_eq!(state.active_index(), Some(0));
        assert_eq!(state.section(0).map(|s| s.title.as_str()), Some("A"));
    }
}
