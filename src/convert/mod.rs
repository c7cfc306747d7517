//! File-to-file conversion: read, extract, format, write.
//!
//! # Example
//!
//! ```no_run
//! use md_pdf::convert::Converter;
//! use md_pdf::PartialOptions;
//! use std::path::Path;
//!
//! fn main() -> md_pdf::Result<()> {
//!     let markdown = Converter::new()
//!         .with_options(PartialOptions::new().with_page_numbers(true))
//!         .convert(Path::new("report.json"), None)?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```

pub mod io;

use crate::error::{Error, Result};
use crate::extract::{DocumentExtractor, JsonExtractor};
use crate::model::Document;
use crate::render::{MarkdownRenderer, PartialOptions, RenderResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Convert an input file to Markdown with the default extractor.
///
/// Writes the result to `output`, or next to the input with a `.md`
/// extension, and returns the Markdown.
pub fn convert(input: &Path, output: Option<&Path>, options: &PartialOptions) -> Result<String> {
    Converter::new()
        .with_options(options.clone())
        .convert(input, output)
}

/// Async variant of [`convert`]; file operations use `tokio::fs`.
#[cfg(feature = "async")]
pub async fn convert_async(
    input: &Path,
    output: Option<&Path>,
    options: &PartialOptions,
) -> Result<String> {
    Converter::new()
        .with_options(options.clone())
        .convert_async(input, output)
        .await
}

/// Builder for conversions with a pluggable extractor.
#[derive(Clone)]
pub struct Converter {
    extractor: Arc<dyn DocumentExtractor>,
    options: PartialOptions,
}

impl Converter {
    /// Create a converter using [`JsonExtractor`] and default options.
    pub fn new() -> Self {
        Self {
            extractor: Arc::new(JsonExtractor::new()),
            options: PartialOptions::default(),
        }
    }

    /// Use a different extractor.
    pub fn with_extractor(mut self, extractor: Arc<dyn DocumentExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Replace the rendering options.
    pub fn with_options(mut self, options: PartialOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable page markers.
    pub fn with_page_numbers(mut self, include: bool) -> Self {
        self.options = self.options.with_page_numbers(include);
        self
    }

    /// Set the wrap width (0 disables wrapping).
    pub fn with_max_line_length(mut self, width: usize) -> Self {
        self.options = self.options.with_max_line_length(width);
        self
    }

    /// The rendering options in use.
    pub fn options(&self) -> &PartialOptions {
        &self.options
    }

    /// Name of the configured extractor.
    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }

    /// Check the input exists and read it.
    pub fn read_input(&self, input: &Path) -> Result<Vec<u8>> {
        log::info!("Checking input file: {}", input.display());
        if !io::file_exists(input) {
            return Err(Error::NotFound(input.to_path_buf()));
        }

        log::info!("Reading PDF file: {}", input.display());
        io::read_file(input)
    }

    /// Run the extractor over input bytes.
    pub fn extract(&self, bytes: &[u8]) -> Result<Document> {
        log::info!("Parsing PDF content with '{}' extractor...", self.extractor.name());
        self.extractor.extract(bytes)
    }

    /// Format an extracted document.
    pub fn render(&self, doc: &Document) -> Result<RenderResult> {
        log::info!("Formatting to Markdown...");
        MarkdownRenderer::from_partial(&self.options).render_with_stats(doc)
    }

    /// Read, extract and format without writing anything.
    pub fn render_file(&self, input: &Path) -> Result<RenderResult> {
        let bytes = self.read_input(input)?;
        let doc = self.extract(&bytes)?;
        self.render(&doc)
    }

    /// Convert `input` and write the Markdown to `output` (or the derived path).
    pub fn convert(&self, input: &Path, output: Option<&Path>) -> Result<String> {
        let result = self.render_file(input)?;
        let target = output_path(input, output)?;

        log::info!("Writing Markdown to: {}", target.display());
        io::write_file(&target, &result.content)?;

        Ok(result.content)
    }

    /// Async variant of [`Converter::convert`].
    #[cfg(feature = "async")]
    pub async fn convert_async(&self, input: &Path, output: Option<&Path>) -> Result<String> {
        log::info!("Checking input file: {}", input.display());
        if tokio::fs::metadata(input).await.is_err() {
            return Err(Error::NotFound(input.to_path_buf()));
        }

        log::info!("Reading PDF file: {}", input.display());
        let bytes = io::read_file_async(input).await?;
        let doc = self.extract(&bytes)?;
        let result = self.render(&doc)?;
        let target = output_path(input, output)?;

        log::info!("Writing Markdown to: {}", target.display());
        io::write_file_async(&target, &result.content).await?;

        Ok(result.content)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("extractor", &self.extractor.name())
            .field("options", &self.options)
            .finish()
    }
}

/// Where the Markdown for `input` goes: `output`, or the derived `.md` path.
///
/// Fails when that path is the input itself, e.g. converting `notes.md`
/// without an explicit output.
pub fn output_path(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let target = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| io::derive_output_path(input));

    let same_file = target == input
        || matches!(
            (std::fs::canonicalize(&target), std::fs::canonicalize(input)),
            (Ok(a), Ok(b)) if a == b
        );
    if same_file {
        log::warn!("Output path is the input file: {}", target.display());
        return Err(Error::file_operation(
            format!("Refusing to overwrite input file: {}", target.display()),
            &target,
            None,
        ));
    }

    Ok(target)
}
