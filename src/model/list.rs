//! List types.

use super::{Element, TextStyle};
use serde::{Deserialize, Serialize};

/// An ordered or unordered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Items in the list
    #[serde(default)]
    pub items: Vec<ListItem>,

    /// Numbered (`true`) or bulleted (`false`)
    #[serde(default)]
    pub ordered: bool,

    /// Text styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl List {
    /// Create a bulleted list.
    pub fn unordered(items: Vec<ListItem>) -> Self {
        Self {
            items,
            ordered: false,
            style: None,
        }
    }

    /// Create a numbered list.
    pub fn ordered(items: Vec<ListItem>) -> Self {
        Self {
            items,
            ordered: true,
            style: None,
        }
    }

    /// Add an item to the list.
    pub fn add_item(&mut self, item: ListItem) {
        self.items.push(item);
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single list item holding inline, text-bearing content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Inline content of the item
    #[serde(default)]
    pub content: Vec<Element>,

    /// Text styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl ListItem {
    /// Create an item from inline elements.
    pub fn new(content: Vec<Element>) -> Self {
        Self {
            content,
            style: None,
        }
    }

    /// Create an item holding a single run of text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Element::paragraph(text)])
    }

    /// Set the item style and return self.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }
}
