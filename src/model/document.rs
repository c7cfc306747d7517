//! Document-level types.

use super::{Element, Page};
use serde::{Deserialize, Serialize};

/// An extracted document, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Pages in the document, in reading order
    #[serde(default)]
    pub pages: Vec<Page>,

    /// Content not attributed to any page
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title and return self.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author and return self.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Find a page by its page number.
    pub fn get_page(&self, number: u32) -> Option<&Page> {
        self.pages.iter().find(|page| page.number == number)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Add an unpaginated element.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Check if the document has no content at all.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.pages.iter().all(Page::is_empty)
    }
}
