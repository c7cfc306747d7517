//! Document elements.

use super::{List, ListItem, Table, TableCell, TableRow, TextStyle};
use serde::{Deserialize, Serialize};

/// One structural unit of document content.
///
/// The set of kinds is closed. Upstream data naming any other kind
/// deserializes into [`Element::Unrecognized`], which the renderer rejects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Element {
    /// A section heading
    Heading(Heading),

    /// A paragraph of text
    Paragraph(Paragraph),

    /// An ordered or unordered list
    List(List),

    /// A single list item
    ListItem(ListItem),

    /// A table
    Table(Table),

    /// A table row
    TableRow(TableRow),

    /// A table cell
    TableCell(TableCell),

    /// A hyperlink
    Link(Link),

    /// A hard line break
    LineBreak(LineBreak),

    /// An element kind this crate does not know about
    #[serde(other)]
    Unrecognized,
}

impl Element {
    /// Create a heading element. Levels are clamped to 1-6.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Element::Heading(Heading::new(level, text))
    }

    /// Create a paragraph element.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Element::Paragraph(Paragraph::new(text))
    }

    /// Create a link element.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Element::Link(Link::new(text, url))
    }

    /// Create a line break element.
    pub fn line_break() -> Self {
        Element::LineBreak(LineBreak::default())
    }

    /// Create an unordered list.
    pub fn unordered_list(items: Vec<ListItem>) -> Self {
        Element::List(List::unordered(items))
    }

    /// Create an ordered list.
    pub fn ordered_list(items: Vec<ListItem>) -> Self {
        Element::List(List::ordered(items))
    }

    /// Create a table whose first row is the header.
    pub fn table(rows: Vec<TableRow>) -> Self {
        Element::Table(Table::with_header(rows))
    }

    /// Attach a style to the element.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        if let Some(slot) = self.style_slot() {
            *slot = Some(style);
        }
        self
    }

    fn style_slot(&mut self) -> Option<&mut Option<TextStyle>> {
        match self {
            Element::Heading(h) => Some(&mut h.style),
            Element::Paragraph(p) => Some(&mut p.style),
            Element::List(l) => Some(&mut l.style),
            Element::ListItem(i) => Some(&mut i.style),
            Element::Table(t) => Some(&mut t.style),
            Element::TableRow(r) => Some(&mut r.style),
            Element::TableCell(c) => Some(&mut c.style),
            Element::Link(l) => Some(&mut l.style),
            Element::LineBreak(b) => Some(&mut b.style),
            Element::Unrecognized => None,
        }
    }

    /// Get the element's style, if any.
    pub fn style(&self) -> Option<&TextStyle> {
        match self {
            Element::Heading(h) => h.style.as_ref(),
            Element::Paragraph(p) => p.style.as_ref(),
            Element::List(l) => l.style.as_ref(),
            Element::ListItem(i) => i.style.as_ref(),
            Element::Table(t) => t.style.as_ref(),
            Element::TableRow(r) => r.style.as_ref(),
            Element::TableCell(c) => c.style.as_ref(),
            Element::Link(l) => l.style.as_ref(),
            Element::LineBreak(b) => b.style.as_ref(),
            Element::Unrecognized => None,
        }
    }

    /// Name of the element kind, as used in serialized documents.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Heading(_) => "heading",
            Element::Paragraph(_) => "paragraph",
            Element::List(_) => "list",
            Element::ListItem(_) => "listItem",
            Element::Table(_) => "table",
            Element::TableRow(_) => "tableRow",
            Element::TableCell(_) => "tableCell",
            Element::Link(_) => "link",
            Element::LineBreak(_) => "lineBreak",
            Element::Unrecognized => "unrecognized",
        }
    }

    /// Literal text of a text-bearing element.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Heading(h) => Some(&h.text),
            Element::Paragraph(p) => Some(&p.text),
            Element::Link(l) => Some(&l.text),
            _ => None,
        }
    }

    /// Check if this element is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Element::Paragraph(_))
    }

    /// Check if this element carries literal text.
    pub fn is_text(&self) -> bool {
        self.text().is_some()
    }
}

impl From<Heading> for Element {
    fn from(heading: Heading) -> Self {
        Element::Heading(heading)
    }
}

impl From<Paragraph> for Element {
    fn from(paragraph: Paragraph) -> Self {
        Element::Paragraph(paragraph)
    }
}

impl From<Link> for Element {
    fn from(link: Link) -> Self {
        Element::Link(link)
    }
}

impl From<List> for Element {
    fn from(list: List) -> Self {
        Element::List(list)
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(table)
    }
}

/// A heading with a level in 1-6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: u8,

    /// Heading text
    pub text: String,

    /// Text styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl Heading {
    /// Create a new heading.
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level: level.clamp(1, 6),
            text: text.into(),
            style: None,
        }
    }
}

/// A paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text
    pub text: String,

    /// Text styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl Paragraph {
    /// Create a new paragraph.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Link text
    pub text: String,

    /// Target URL
    pub url: String,

    /// Text styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl Link {
    /// Create a new link.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            style: None,
        }
    }
}

/// A hard line break.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineBreak {
    /// Text styling (has no visible effect)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(Heading::new(0, "Low").level, 1);
        assert_eq!(Heading::new(9, "High").level, 6);
        assert_eq!(Heading::new(3, "Mid").level, 3);
    }

    #[test]
    fn test_element_accessors() {
        let p = Element::paragraph("Hello").with_style(TextStyle::bold());
        assert!(p.is_paragraph());
        assert_eq!(p.text(), Some("Hello"));
        assert_eq!(p.kind(), "paragraph");
        assert!(p.style().unwrap().bold);

        let br = Element::line_break();
        assert!(!br.is_text());
        assert_eq!(br.kind(), "lineBreak");
    }

    #[test]
    fn test_deserialize_upstream_shape() {
        let json = r#"[
            {"type": "heading", "level": 2, "text": "Intro"},
            {"type": "paragraph", "text": "Body", "style": {"isItalic": true}},
            {"type": "link", "text": "Site", "url": "https://example.com"},
            {"type": "lineBreak"}
        ]"#;
        let elements: Vec<Element> = serde_json::from_str(json).unwrap();

        assert_eq!(elements[0], Element::heading(2, "Intro"));
        assert!(elements[1].style().unwrap().italic);
        assert_eq!(elements[2], Element::link("Site", "https://example.com"));
        assert_eq!(elements[3], Element::line_break());
    }

    #[test]
    fn test_unknown_kind_is_preserved_as_unrecognized() {
        let element: Element = serde_json::from_str(r#"{"type": "invalidType"}"#).unwrap();
        assert_eq!(element, Element::Unrecognized);
        assert_eq!(element.kind(), "unrecognized");
    }
}
