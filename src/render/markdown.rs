//! Markdown rendering pipeline for documents.

use crate::error::{Error, FormatError, Result};
use crate::model::Document;

use super::assemble::PageAssembler;
use super::element::{ElementRenderer, RenderContext};
use super::{ConversionOptions, PartialOptions, RenderResult};

const FORMAT_FAILURE: &str = "Failed to format document to Markdown";

/// Format a document with partial options merged over the defaults.
pub fn format(doc: &Document, options: &PartialOptions) -> Result<String> {
    MarkdownRenderer::from_partial(options).render(doc)
}

/// Format a document and return the content with statistics.
pub fn format_with_stats(doc: &Document, options: &PartialOptions) -> Result<RenderResult> {
    MarkdownRenderer::from_partial(options).render_with_stats(doc)
}

/// Convert a document to Markdown with resolved options.
pub fn to_markdown(doc: &Document, options: &ConversionOptions) -> Result<String> {
    MarkdownRenderer::new(options.clone()).render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(
    doc: &Document,
    options: &ConversionOptions,
) -> Result<RenderResult> {
    MarkdownRenderer::new(options.clone()).render_with_stats(doc)
}

/// Markdown renderer.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: ConversionOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Create a renderer from partial options.
    pub fn from_partial(options: &PartialOptions) -> Self {
        Self::new(options.resolve())
    }

    /// The resolved options in use.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut ctx = RenderContext::new();
        self.render_internal(doc, &mut ctx)
    }

    /// Render a document to Markdown with statistics.
    pub fn render_with_stats(&self, doc: &Document) -> Result<RenderResult> {
        let mut ctx = RenderContext::new();
        let content = self.render_internal(doc, &mut ctx)?;

        // Count words and characters in final content
        ctx.stats.count_text(&content);

        Ok(RenderResult::new(content, doc, ctx.stats))
    }

    fn render_internal(&self, doc: &Document, ctx: &mut RenderContext) -> Result<String> {
        log::info!(
            "Rendering {} pages and {} unpaginated elements",
            doc.page_count(),
            doc.elements.len()
        );

        let output = self.render_fragments(doc, ctx).map_err(|e| {
            log::debug!("Formatting failed: {}", e);
            Error::markdown_formatting(FORMAT_FAILURE, Some(e))
        })?;

        let content = output.trim().to_string();
        log::info!("Rendered {} bytes of Markdown", content.len());
        Ok(content)
    }

    fn render_fragments(
        &self,
        doc: &Document,
        ctx: &mut RenderContext,
    ) -> std::result::Result<String, FormatError> {
        let renderer = ElementRenderer::new(&self.options);
        let mut output = PageAssembler::new(&renderer).assemble(&doc.pages, ctx)?;

        for element in &doc.elements {
            output.push_str(&renderer.render(element, ctx)?);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, ListItem, Page, TableRow, TextStyle};
    use std::error::Error as _;

    fn sample_document() -> Document {
        let mut doc = Document::new();

        let mut page1 = Page::new(1);
        page1.add_element(Element::heading(1, "Sample Heading"));
        page1.add_element(Element::paragraph("This is a sample paragraph."));
        doc.add_page(page1);

        let mut page2 = Page::new(2);
        page2.add_element(Element::heading(2, "Second Page Heading"));
        page2.add_element(Element::paragraph("Another paragraph on the second page."));
        doc.add_page(page2);

        doc
    }

    #[test]
    fn test_default_rendering() {
        let md = format(&sample_document(), &PartialOptions::new()).unwrap();
        assert_eq!(
            md,
            "# Sample Heading\n\nThis is a sample paragraph.\n\n\
             ## Second Page Heading\n\nAnother paragraph on the second page."
        );
    }

    #[test]
    fn test_page_numbers() {
        let options = PartialOptions::new().with_page_numbers(true);
        let md = format(&sample_document(), &options).unwrap();
        assert_eq!(
            md,
            "<!-- Page 1 -->\n# Sample Heading\n\nThis is a sample paragraph.\n\n\
             <!-- Page 2 -->\n## Second Page Heading\n\nAnother paragraph on the second page."
        );
    }

    #[test]
    fn test_unpaginated_elements_follow_pages() {
        let mut doc = sample_document();
        doc.add_element(Element::unordered_list(vec![ListItem::text("trailing")]));

        let md = format(&doc, &PartialOptions::new()).unwrap();
        assert!(md.ends_with("Another paragraph on the second page.\n\n- trailing"));
    }

    #[test]
    fn test_unknown_element_wrapped() {
        let mut doc = Document::new();
        doc.add_page(Page::with_elements(1, vec![Element::Unrecognized]));

        let err = format(&doc, &PartialOptions::new()).unwrap_err();
        assert!(matches!(err, Error::MarkdownFormatting { .. }));
        assert_eq!(err.to_string(), "Failed to format document to Markdown");
        assert_eq!(err.source().unwrap().to_string(), "Unknown element type");
    }

    #[test]
    fn test_misplaced_row_wrapped() {
        let mut doc = Document::new();
        doc.add_element(Element::TableRow(TableRow::from_strings(["a", "b"])));

        let err = format(&doc, &PartialOptions::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::MarkdownFormatting {
                source: Some(FormatError::Misplaced { kind: "tableRow" }),
                ..
            }
        ));
    }

    #[test]
    fn test_empty_document() {
        let md = format(&Document::new(), &PartialOptions::new()).unwrap();
        assert!(md.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let doc = sample_document();
        let options = PartialOptions::new().with_page_numbers(true);
        assert_eq!(format(&doc, &options).unwrap(), format(&doc, &options).unwrap());
    }

    #[test]
    fn test_styles_toggle() {
        let mut doc = Document::new();
        doc.add_element(Element::paragraph("loud").with_style(TextStyle::bold()));

        assert_eq!(format(&doc, &PartialOptions::new()).unwrap(), "**loud**");
        let plain = PartialOptions::new().with_font_styles(false);
        assert_eq!(format(&doc, &plain).unwrap(), "loud");
    }

    #[test]
    fn test_render_with_stats() {
        let mut doc = sample_document().with_title("Sample");
        doc.pages[1].add_element(Element::link("Docs", "https://docs.rs"));

        let result = format_with_stats(&doc, &PartialOptions::new()).unwrap();

        assert_eq!(result.title.as_deref(), Some("Sample"));
        assert_eq!(result.stats.page_count, 2);
        assert_eq!(result.stats.heading_count, 2);
        assert_eq!(result.stats.paragraph_count, 2);
        assert_eq!(result.stats.link_count, 1);
        assert!(result.stats.word_count > 0);
        assert!(result.content.ends_with("[Docs](https://docs.rs)"));
    }

    #[test]
    fn test_to_markdown_with_resolved_options() {
        let options = ConversionOptions {
            detect_links: false,
            ..ConversionOptions::default()
        };
        let mut doc = Document::new();
        doc.add_element(Element::link("Docs", "https://docs.rs"));

        assert_eq!(to_markdown(&doc, &options).unwrap(), "Docs");
        let result = to_markdown_with_stats(&doc, &options).unwrap();
        assert_eq!(result.stats.link_count, 0);
    }
}
