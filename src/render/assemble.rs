//! Page assembly: page markers and paragraph continuation across pages.

use crate::error::FormatError;
use crate::model::{Element, Page};

use super::element::{ElementRenderer, RenderContext};

/// Walks pages in order and stitches their fragments together.
#[derive(Debug, Clone, Copy)]
pub struct PageAssembler<'r, 'a> {
    renderer: &'r ElementRenderer<'a>,
}

/// A paragraph that ended a page and may continue on the next one.
#[derive(Debug)]
struct OpenParagraph {
    text: String,
    first_page: u32,
}

/// Accumulator for the continuous (unnumbered) fold.
#[derive(Debug, Default)]
struct Assembly {
    output: String,
    open: Option<OpenParagraph>,
}

impl<'r, 'a> PageAssembler<'r, 'a> {
    /// Create an assembler using the given element renderer.
    pub fn new(renderer: &'r ElementRenderer<'a>) -> Self {
        Self { renderer }
    }

    /// Render all pages, in the order given.
    pub fn assemble(&self, pages: &[Page], ctx: &mut RenderContext) -> Result<String, FormatError> {
        if self.renderer.options().include_page_numbers {
            self.assemble_numbered(pages, ctx)
        } else {
            self.assemble_continuous(pages, ctx)
        }
    }

    /// Each page is an isolated unit introduced by its marker.
    fn assemble_numbered(
        &self,
        pages: &[Page],
        ctx: &mut RenderContext,
    ) -> Result<String, FormatError> {
        let mut output = String::new();

        for page in pages {
            ctx.stats.add_page();
            output.push_str(&format!("<!-- Page {} -->\n", page.number));
            for element in &page.elements {
                output.push_str(&self.renderer.render(element, ctx)?);
            }
        }

        Ok(output)
    }

    /// Pages form one stream; a paragraph ending a page absorbs a
    /// paragraph starting the next.
    fn assemble_continuous(
        &self,
        pages: &[Page],
        ctx: &mut RenderContext,
    ) -> Result<String, FormatError> {
        let Assembly { mut output, open } =
            pages.iter().try_fold(Assembly::default(), |mut acc, page| {
                self.fold_page(&mut acc, page, ctx)?;
                Ok::<_, FormatError>(acc)
            })?;

        if let Some(open) = open {
            output.push_str(&self.renderer.paragraph_block(&open.text, ctx));
        }

        Ok(output)
    }

    fn fold_page(
        &self,
        acc: &mut Assembly,
        page: &Page,
        ctx: &mut RenderContext,
    ) -> Result<(), FormatError> {
        ctx.stats.add_page();
        let mut rest = page.elements.as_slice();

        if let Some(mut open) = acc.open.take() {
            if let Some(Element::Paragraph(paragraph)) = rest.first() {
                log::debug!(
                    "Paragraph from page {} continues on page {}",
                    open.first_page,
                    page.number
                );
                open.text.push_str(&self.renderer.paragraph_text(paragraph));
                ctx.stats.add_continuation();
                rest = &rest[1..];

                if rest.is_empty() {
                    // The whole page was the continuation; keep it open.
                    acc.open = Some(open);
                    return Ok(());
                }
            }
            acc.output
                .push_str(&self.renderer.paragraph_block(&open.text, ctx));
        }

        if let Some((last, body)) = rest.split_last() {
            for element in body {
                acc.output.push_str(&self.renderer.render(element, ctx)?);
            }
            match last {
                Element::Paragraph(paragraph) => {
                    acc.open = Some(OpenParagraph {
                        text: self.renderer.paragraph_text(paragraph),
                        first_page: page.number,
                    });
                }
                other => acc.output.push_str(&self.renderer.render(other, ctx)?),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListItem;
    use crate::render::{ConversionOptions, PartialOptions};

    fn assemble(pages: &[Page], options: &ConversionOptions) -> Result<String, FormatError> {
        let renderer = ElementRenderer::new(options);
        PageAssembler::new(&renderer).assemble(pages, &mut RenderContext::new())
    }

    fn page(number: u32, elements: Vec<Element>) -> Page {
        Page::with_elements(number, elements)
    }

    #[test]
    fn test_paragraph_joined_across_pages() {
        let pages = vec![
            page(1, vec![Element::paragraph("This is the first part of a paragraph that ")]),
            page(2, vec![Element::paragraph("continues on the second page.")]),
        ];
        let output = assemble(&pages, &ConversionOptions::default()).unwrap();
        assert_eq!(
            output,
            "This is the first part of a paragraph that continues on the second page.\n\n"
        );
    }

    #[test]
    fn test_join_is_transitive() {
        let pages = vec![
            page(1, vec![Element::heading(1, "Start"), Element::paragraph("one ")]),
            page(2, vec![Element::paragraph("two ")]),
            page(3, vec![Element::paragraph("three")]),
            page(4, vec![Element::paragraph("four"), Element::heading(2, "End")]),
        ];
        let output = assemble(&pages, &ConversionOptions::default()).unwrap();
        assert_eq!(output, "# Start\n\none two threefour\n\n## End\n\n");
    }

    #[test]
    fn test_no_join_when_next_page_starts_with_other_kind() {
        let pages = vec![
            page(1, vec![Element::paragraph("Closing words.")]),
            page(2, vec![Element::unordered_list(vec![ListItem::text("item")])]),
        ];
        let output = assemble(&pages, &ConversionOptions::default()).unwrap();
        assert_eq!(output, "Closing words.\n\n- item\n\n");
    }

    #[test]
    fn test_no_join_when_page_ends_with_other_kind() {
        let pages = vec![
            page(1, vec![Element::heading(1, "Title")]),
            page(2, vec![Element::paragraph("Body.")]),
        ];
        let output = assemble(&pages, &ConversionOptions::default()).unwrap();
        assert_eq!(output, "# Title\n\nBody.\n\n");
    }

    #[test]
    fn test_empty_page_closes_open_paragraph() {
        let pages = vec![
            page(1, vec![Element::paragraph("before")]),
            page(2, Vec::new()),
            page(3, vec![Element::paragraph("after")]),
        ];
        let output = assemble(&pages, &ConversionOptions::default()).unwrap();
        assert_eq!(output, "before\n\nafter\n\n");
    }

    #[test]
    fn test_page_markers_isolate_pages() {
        let options = PartialOptions::new().with_page_numbers(true).resolve();
        let pages = vec![
            page(1, vec![Element::paragraph("first ")]),
            page(3, vec![Element::paragraph("second")]),
        ];
        let output = assemble(&pages, &options).unwrap();
        assert_eq!(
            output,
            "<!-- Page 1 -->\nfirst \n\n<!-- Page 3 -->\nsecond\n\n"
        );
    }

    #[test]
    fn test_pages_not_reordered() {
        let options = PartialOptions::new().with_page_numbers(true).resolve();
        let pages = vec![page(2, Vec::new()), page(1, Vec::new())];
        let output = assemble(&pages, &options).unwrap();
        assert_eq!(output, "<!-- Page 2 -->\n<!-- Page 1 -->\n");
    }

    #[test]
    fn test_error_propagates_from_any_page() {
        let pages = vec![
            page(1, vec![Element::paragraph("fine")]),
            page(2, vec![Element::Unrecognized]),
        ];
        let result = assemble(&pages, &ConversionOptions::default());
        assert_eq!(result, Err(FormatError::UnknownElement));
    }

    #[test]
    fn test_continuations_counted() {
        let options = ConversionOptions::default();
        let renderer = ElementRenderer::new(&options);
        let mut ctx = RenderContext::new();
        let pages = vec![
            page(1, vec![Element::paragraph("a")]),
            page(2, vec![Element::paragraph("b")]),
            page(3, vec![Element::paragraph("c")]),
        ];
        PageAssembler::new(&renderer).assemble(&pages, &mut ctx).unwrap();

        assert_eq!(ctx.stats.page_count, 3);
        assert_eq!(ctx.stats.continuation_count, 2);
        assert_eq!(ctx.stats.paragraph_count, 1);
    }
}
