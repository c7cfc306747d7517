//! Rendering module for converting documents to Markdown.

mod assemble;
mod element;
mod markdown;
mod options;
mod result;
mod text;

pub use assemble::PageAssembler;
pub use element::{ElementRenderer, RenderContext};
pub use markdown::{format, format_with_stats, to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::{ConversionOptions, PartialOptions, DEFAULT_MAX_LINE_LENGTH};
pub use result::{ExtractionStats, RenderResult};
pub use text::{apply_text_style, wrap_text};
