//! Rendering of individual elements to Markdown fragments.

use crate::error::FormatError;
use crate::model::{Element, Heading, Link, List, ListItem, Paragraph, Table, TableCell, TableRow, TextStyle};

use super::text::{apply_text_style, wrap_text};
use super::{ConversionOptions, ExtractionStats};

/// Mutable state threaded through one rendering pass.
#[derive(Debug, Default)]
pub struct RenderContext {
    /// Statistics collected so far
    pub stats: ExtractionStats,
}

impl RenderContext {
    /// Create a fresh context.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Renders one element at a time according to the conversion options.
#[derive(Debug, Clone, Copy)]
pub struct ElementRenderer<'a> {
    options: &'a ConversionOptions,
}

impl<'a> ElementRenderer<'a> {
    /// Create a renderer bound to resolved options.
    pub fn new(options: &'a ConversionOptions) -> Self {
        Self { options }
    }

    /// The options this renderer applies.
    pub fn options(&self) -> &ConversionOptions {
        self.options
    }

    /// Render a top-level element to a Markdown fragment.
    pub fn render(
        &self,
        element: &Element,
        ctx: &mut RenderContext,
    ) -> Result<String, FormatError> {
        match element {
            Element::Heading(heading) => Ok(self.render_heading(heading, ctx)),
            Element::Paragraph(paragraph) => {
                let text = self.paragraph_text(paragraph);
                Ok(self.paragraph_block(&text, ctx))
            }
            Element::Link(link) => {
                let inline = self.render_link(link, ctx);
                if inline.trim().is_empty() {
                    return Ok(String::new());
                }
                Ok(format!("{}\n\n", inline))
            }
            Element::List(list) => self.render_list(list, ctx),
            Element::Table(table) => self.render_table(table, ctx),
            Element::LineBreak(_) => {
                ctx.stats.add_line_break();
                Ok("  \n".to_string())
            }
            Element::ListItem(_) | Element::TableRow(_) | Element::TableCell(_) => {
                Err(FormatError::Misplaced {
                    kind: element.kind(),
                })
            }
            Element::Unrecognized => Err(FormatError::UnknownElement),
        }
    }

    /// Styled text of a paragraph, before wrapping and block separation.
    pub fn paragraph_text(&self, paragraph: &Paragraph) -> String {
        self.styled(&paragraph.text, paragraph.style.as_ref())
    }

    /// Turn styled paragraph text into a block: wrapped, then a blank line.
    ///
    /// Blank text produces no output.
    pub fn paragraph_block(&self, text: &str, ctx: &mut RenderContext) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        ctx.stats.add_paragraph();

        let body = match self.options.max_line_length {
            Some(width) => wrap_text(text, width),
            None => text.to_string(),
        };
        format!("{}\n\n", body)
    }

    fn render_heading(&self, heading: &Heading, ctx: &mut RenderContext) -> String {
        ctx.stats.add_heading();
        let level = heading.level.clamp(1, 6) as usize;
        let text = self.styled(&single_line(&heading.text), heading.style.as_ref());
        format!("{} {}\n\n", "#".repeat(level), text)
    }

    fn render_link(&self, link: &Link, ctx: &mut RenderContext) -> String {
        let text = self.styled(&link.text, link.style.as_ref());
        if !self.options.detect_links {
            return text;
        }
        ctx.stats.add_link();
        format!("[{}]({})", text, link.url)
    }

    fn render_list(&self, list: &List, ctx: &mut RenderContext) -> Result<String, FormatError> {
        let mut output = String::new();

        if !self.options.detect_lists {
            for item in &list.items {
                let text = self.render_item(item, "  \n", ctx)?;
                output.push_str(&self.paragraph_block(&text, ctx));
            }
            return Ok(output);
        }

        if list.is_empty() {
            return Ok(output);
        }
        ctx.stats.add_list();

        for (index, item) in list.items.iter().enumerate() {
            let marker = if list.ordered {
                format!("{}. ", index + 1)
            } else {
                "- ".to_string()
            };
            // Continuation lines line up with the item text.
            let line_break = format!("  \n{}", " ".repeat(marker.len()));
            let text = self.render_item(item, &line_break, ctx)?;
            ctx.stats.add_list_item();

            output.push_str(&marker);
            output.push_str(&text);
            output.push('\n');
        }
        output.push('\n');

        Ok(output)
    }

    fn render_item(
        &self,
        item: &ListItem,
        line_break: &str,
        ctx: &mut RenderContext,
    ) -> Result<String, FormatError> {
        let inline = self.render_inline(&item.content, line_break, ctx)?;
        Ok(self.styled(&inline, item.style.as_ref()))
    }

    fn render_table(&self, table: &Table, ctx: &mut RenderContext) -> Result<String, FormatError> {
        if !self.options.detect_tables {
            let mut output = String::new();
            for cell in table.rows.iter().flat_map(|row| &row.cells) {
                let text = self.render_cell_content(cell, "  \n", ctx)?;
                output.push_str(&self.paragraph_block(&text, ctx));
            }
            return Ok(output);
        }

        let columns = table.column_count();
        if columns == 0 {
            return Ok(String::new());
        }
        ctx.stats.add_table();

        let mut lines = Vec::with_capacity(table.rows.len() + 2);
        let mut rows = table.rows.iter();

        if table.has_header {
            if let Some(header) = rows.next() {
                lines.push(self.render_row(header, columns, ctx)?);
            }
        } else {
            // Markdown tables need a header; emit an empty one.
            lines.push(vec![""; columns].join(" | "));
        }
        lines.push(vec!["---"; columns].join(" | "));

        for row in rows {
            lines.push(self.render_row(row, columns, ctx)?);
        }

        // Without outer pipes a single column reads as a heading or a
        // thematic break, and an empty header would be a blank line.
        if columns == 1 {
            for line in &mut lines {
                *line = format!("| {} |", line);
            }
        }

        Ok(format!("{}\n\n", lines.join("\n")))
    }

    fn render_row(
        &self,
        row: &TableRow,
        columns: usize,
        ctx: &mut RenderContext,
    ) -> Result<String, FormatError> {
        let mut cells = row
            .cells
            .iter()
            .map(|cell| self.render_cell(cell, ctx))
            .collect::<Result<Vec<_>, _>>()?;
        if cells.len() < columns {
            cells.resize(columns, String::new());
        }
        Ok(cells.join(" | "))
    }

    fn render_cell(&self, cell: &TableCell, ctx: &mut RenderContext) -> Result<String, FormatError> {
        let text = self.render_cell_content(cell, "<br>", ctx)?;
        Ok(text.replace('\n', " ").replace('|', "\\|").trim().to_string())
    }

    fn render_cell_content(
        &self,
        cell: &TableCell,
        line_break: &str,
        ctx: &mut RenderContext,
    ) -> Result<String, FormatError> {
        let inline = self.render_inline(&cell.content, line_break, ctx)?;
        Ok(self.styled(&inline, cell.style.as_ref()))
    }

    /// Concatenate the inline content of a list item or table cell.
    fn render_inline(
        &self,
        content: &[Element],
        line_break: &str,
        ctx: &mut RenderContext,
    ) -> Result<String, FormatError> {
        let mut output = String::new();

        for element in content {
            match element {
                Element::Paragraph(paragraph) => output.push_str(&self.paragraph_text(paragraph)),
                Element::Heading(heading) => {
                    output.push_str(&self.styled(&heading.text, heading.style.as_ref()))
                }
                Element::Link(link) => output.push_str(&self.render_link(link, ctx)),
                Element::LineBreak(_) => {
                    ctx.stats.add_line_break();
                    output.push_str(line_break);
                }
                Element::Unrecognized => return Err(FormatError::UnknownElement),
                other => {
                    return Err(FormatError::Malformed(format!(
                        "'{}' cannot appear in inline content",
                        other.kind()
                    )))
                }
            }
        }

        Ok(output)
    }

    fn styled(&self, text: &str, style: Option<&TextStyle>) -> String {
        match style {
            Some(style) if self.options.preserve_font_styles => apply_text_style(text, style),
            _ => text.to_string(),
        }
    }
}

/// ATX headings must stay on one line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
