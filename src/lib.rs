//! # md-pdf
//!
//! Markdown rendering for documents extracted from PDF files.
//!
//! A PDF content extractor produces a page-oriented [`Document`] of typed
//! elements (headings, paragraphs, lists, tables, links, line breaks). This
//! crate turns that model into a single Markdown text, driven by a small set
//! of options.
//!
//! ## Quick Start
//!
//! ```
//! use md_pdf::{format, Document, Element, Page, PartialOptions};
//!
//! fn main() -> md_pdf::Result<()> {
//!     let mut doc = Document::new();
//!     let mut page = Page::new(1);
//!     page.add_element(Element::heading(1, "Sample Heading"));
//!     page.add_element(Element::paragraph("This is a sample paragraph."));
//!     doc.add_page(page);
//!
//!     let markdown = format(&doc, &PartialOptions::new())?;
//!     assert_eq!(markdown, "# Sample Heading\n\nThis is a sample paragraph.");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Page handling**: optional `<!-- Page N -->` markers, or paragraphs
//!   joined across page boundaries
//! - **Structure**: headings, ordered/unordered lists, pipe tables, links
//! - **Styles**: bold, italic and underline preserved as Markdown/HTML
//! - **Wrapping**: greedy word wrap of paragraph text
//! - **Pluggable extraction**: any [`DocumentExtractor`] can feed the
//!   file conversion pipeline

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use convert::{convert, Converter};
#[cfg(feature = "async")]
pub use convert::convert_async;
pub use detect::{detect_input_format, InputFormat};
pub use error::{Error, FormatError, Result};
pub use extract::{DocumentExtractor, JsonExtractor};
pub use model::{
    Document, Element, Heading, LineBreak, Link, List, ListItem, Page, Paragraph, Table,
    TableCell, TableRow, TextStyle,
};
pub use render::{
    format, format_with_stats, ConversionOptions, ExtractionStats, MarkdownRenderer,
    PartialOptions, RenderResult,
};

use std::path::Path;

/// Read a serialized document model from a file.
///
/// # Example
///
/// ```no_run
/// use md_pdf::parse_file;
///
/// let doc = parse_file("report.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let converter = Converter::new();
    let bytes = converter.read_input(path.as_ref())?;
    converter.extract(&bytes)
}

/// Read a serialized document model from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    JsonExtractor::new().extract(data)
}

/// Convert a serialized document model file to Markdown without writing output.
///
/// # Example
///
/// ```no_run
/// use md_pdf::{to_markdown, PartialOptions};
///
/// let markdown = to_markdown("report.json", &PartialOptions::new().with_page_numbers(true)).unwrap();
/// std::fs::write("report.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P, options: &PartialOptions) -> Result<String> {
    let doc = parse_file(path)?;
    format(&doc, options)
}
