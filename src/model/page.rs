//! Page-level types.

use super::Element;
use serde::{Deserialize, Serialize};

/// A single page in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed, assigned by the extractor; gaps are legal)
    #[serde(alias = "pageNumber")]
    pub number: u32,

    /// Content elements on the page
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            elements: Vec::new(),
        }
    }

    /// Create a page with the given elements.
    pub fn with_elements(number: u32, elements: Vec<Element>) -> Self {
        Self { number, elements }
    }

    /// Add an element to the page.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Check if the page is empty (no content elements).
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements on the page.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1)
    }
}
