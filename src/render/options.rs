//! Conversion options and their resolution from partial input.

use serde::{Deserialize, Serialize};

/// Default column width for line wrapping.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

/// Fully resolved options for one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Emit `<!-- Page N -->` markers and keep pages isolated
    pub include_page_numbers: bool,

    /// Render bold/italic/underline styles
    pub preserve_font_styles: bool,

    /// Render lists as Markdown lists
    pub detect_lists: bool,

    /// Render tables as Markdown tables
    pub detect_tables: bool,

    /// Render links as Markdown links
    pub detect_links: bool,

    /// Column width for wrapping paragraph text (`None` = no wrap)
    pub max_line_length: Option<usize>,
}

impl ConversionOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge partial options over the defaults.
    pub fn resolve(partial: &PartialOptions) -> Self {
        let defaults = Self::default();
        Self {
            include_page_numbers: partial
                .include_page_numbers
                .unwrap_or(defaults.include_page_numbers),
            preserve_font_styles: partial
                .preserve_font_styles
                .unwrap_or(defaults.preserve_font_styles),
            detect_lists: partial.detect_lists.unwrap_or(defaults.detect_lists),
            detect_tables: partial.detect_tables.unwrap_or(defaults.detect_tables),
            detect_links: partial.detect_links.unwrap_or(defaults.detect_links),
            max_line_length: match partial.max_line_length {
                None => defaults.max_line_length,
                Some(0) => None,
                Some(width) => Some(width),
            },
        }
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            include_page_numbers: false,
            preserve_font_styles: true,
            detect_lists: true,
            detect_tables: true,
            detect_links: true,
            max_line_length: Some(DEFAULT_MAX_LINE_LENGTH),
        }
    }
}

impl From<&PartialOptions> for ConversionOptions {
    fn from(partial: &PartialOptions) -> Self {
        Self::resolve(partial)
    }
}

/// Caller-supplied options; absent fields take the defaults.
///
/// Deserializes from both camelCase and snake_case keys, so a JSON
/// configuration file can use either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialOptions {
    /// Emit page markers
    #[serde(alias = "include_page_numbers", skip_serializing_if = "Option::is_none")]
    pub include_page_numbers: Option<bool>,

    /// Render font styles
    #[serde(alias = "preserve_font_styles", skip_serializing_if = "Option::is_none")]
    pub preserve_font_styles: Option<bool>,

    /// Render lists
    #[serde(alias = "detect_lists", skip_serializing_if = "Option::is_none")]
    pub detect_lists: Option<bool>,

    /// Render tables
    #[serde(alias = "detect_tables", skip_serializing_if = "Option::is_none")]
    pub detect_tables: Option<bool>,

    /// Render links
    #[serde(alias = "detect_links", skip_serializing_if = "Option::is_none")]
    pub detect_links: Option<bool>,

    /// Wrap width (0 = no wrap)
    #[serde(alias = "max_line_length", skip_serializing_if = "Option::is_none")]
    pub max_line_length: Option<usize>,
}

impl PartialOptions {
    /// Create empty partial options (all defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable page markers.
    pub fn with_page_numbers(mut self, include: bool) -> Self {
        self.include_page_numbers = Some(include);
        self
    }

    /// Enable or disable font style rendering.
    pub fn with_font_styles(mut self, preserve: bool) -> Self {
        self.preserve_font_styles = Some(preserve);
        self
    }

    /// Enable or disable list rendering.
    pub fn with_lists(mut self, detect: bool) -> Self {
        self.detect_lists = Some(detect);
        self
    }

    /// Enable or disable table rendering.
    pub fn with_tables(mut self, detect: bool) -> Self {
        self.detect_tables = Some(detect);
        self
    }

    /// Enable or disable link rendering.
    pub fn with_links(mut self, detect: bool) -> Self {
        self.detect_links = Some(detect);
        self
    }

    /// Set the wrap width (0 disables wrapping).
    pub fn with_max_line_length(mut self, width: usize) -> Self {
        self.max_line_length = Some(width);
        self
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: &PartialOptions) -> Self {
        Self {
            include_page_numbers: other.include_page_numbers.or(self.include_page_numbers),
            preserve_font_styles: other.preserve_font_styles.or(self.preserve_font_styles),
            detect_lists: other.detect_lists.or(self.detect_lists),
            detect_tables: other.detect_tables.or(self.detect_tables),
            detect_links: other.detect_links.or(self.detect_links),
            max_line_length: other.max_line_length.or(self.max_line_length),
        }
    }

    /// Resolve into fully populated options.
    pub fn resolve(&self) -> ConversionOptions {
        ConversionOptions::resolve(self)
    }
}
