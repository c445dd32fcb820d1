//! Accordion controller.
//!
//! An accordion is an ordered collection of sections of which at most one is
//! active at a time. All state changes go through [`AccordionState`], which
//! computes the next active section with [`next_active`] and then applies it
//! in a single step.

use thiserror::Error;

use crate::content::SectionContent;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccordionError {
    #[error("Section {index} does not belong to this accordion ({len} sections)")]
    UnknownSection { index: usize, len: usize },
}

/// One collapsible unit: a header (title) and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
    active: bool,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl From<SectionContent> for Section {
    fn from(content: SectionContent) -> Self {
        Section::new(content.title, content.body)
    }
}

/// Computes which section is active after its header at `target` is clicked.
///
/// Clicking the open section closes it; clicking any other section makes it
/// the only open one.
pub fn next_active(
    current: Option<usize>,
    len: usize,
    target: usize,
) -> Result<Option<usize>, AccordionError> {
    if target >= len {
        return Err(AccordionError::UnknownSection { index: target, len });
    }

    if current == Some(target) {
        Ok(None)
    } else {
        Ok(Some(target))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    sections: Vec<Section>,
}

impl AccordionState {
    /// Builds a collection in document order with every section closed.
    pub fn new(sections: Vec<Section>) -> Self {
        let mut state = Self { sections };
        state.close_all();
        state
    }

    pub fn from_content(content: Vec<SectionContent>) -> Self {
        Self::new(content.into_iter().map(Section::from).collect())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.section(index).is_some_and(Section::is_active)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.sections.iter().position(Section::is_active)
    }

    /// Opens the first section and closes the rest. Does nothing on an
    /// empty collection.
    pub fn initialize(&mut self) {
        if self.sections.is_empty() {
            return;
        }
        self.apply(Some(0));
    }

    /// Toggles the section at `index`.
    ///
    /// On error the state is left untouched.
    pub fn toggle(&mut self, index: usize) -> Result<(), AccordionError> {
        let next = next_active(self.active_index(), self.len(), index)?;
        self.apply(next);
        Ok(())
    }

    pub fn close_all(&mut self) {
        self.apply(None);
    }

    fn apply(&mut self, active: Option<usize>) {
        for (i, section) in self.sections.iter_mut().enumerate() {
            section.active = Some(i) == active;
        }
    }
}
