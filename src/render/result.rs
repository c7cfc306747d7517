//! Rendering result with metadata and statistics.

use crate::model::Document;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered Markdown
    pub content: String,

    /// Document title (copied from source document)
    pub title: Option<String>,

    /// Document author (copied from source document)
    pub author: Option<String>,

    /// Rendering statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, doc: &Document, stats: ExtractionStats) -> Self {
        Self {
            content,
            title: doc.title.clone(),
            author: doc.author.clone(),
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Pages processed
    pub page_count: u32,

    /// Headings rendered
    pub heading_count: u32,

    /// Paragraphs rendered (a joined paragraph counts once)
    pub paragraph_count: u32,

    /// Paragraph joins across page boundaries
    pub continuation_count: u32,

    /// Lists rendered as Markdown lists
    pub list_count: u32,

    /// List items rendered as Markdown list items
    pub list_item_count: u32,

    /// Tables rendered as Markdown tables
    pub table_count: u32,

    /// Links rendered as Markdown links
    pub link_count: u32,

    /// Hard line breaks
    pub line_break_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment page count.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment continuation count.
    pub fn add_continuation(&mut self) {
        self.continuation_count += 1;
    }

    /// Increment list count.
    pub fn add_list(&mut self) {
        self.list_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment link count.
    pub fn add_link(&mut self) {
        self.link_count += 1;
    }

    /// Increment line break count.
    pub fn add_line_break(&mut self) {
        self.line_break_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.page_count += other.page_count;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.continuation_count += other.continuation_count;
        self.list_count += other.list_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.link_count += other.link_count;
        self.line_break_count += other.line_break_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_stats_count_text() {
        let mut stats = ExtractionStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_extraction_stats_merge() {
        let mut stats1 = ExtractionStats::new();
        stats1.paragraph_count = 5;
        stats1.table_count = 2;

        let stats2 = ExtractionStats {
            paragraph_count: 3,
            table_count: 1,
            link_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.table_count, 3);
        assert_eq!(stats1.link_count, 4);
    }

    #[test]
    fn test_render_result_copies_metadata() {
        let doc = Document::new().with_title("Title").with_author("Author");
        let result = RenderResult::new("# Hello".to_string(), &doc, ExtractionStats::new());

        assert_eq!(result.title.as_deref(), Some("Title"));
        assert_eq!(result.author.as_deref(), Some("Author"));
        assert_eq!(result.content_len(), 7);
    }
}
