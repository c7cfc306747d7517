//! Text styling carried by document elements.

use serde::{Deserialize, Serialize};

/// Font styling reported by the extractor for an element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Bold text
    #[serde(alias = "isBold")]
    pub bold: bool,

    /// Italic text
    #[serde(alias = "isItalic")]
    pub italic: bool,

    /// Underlined text
    #[serde(alias = "isUnderlined")]
    pub underline: bool,

    /// Font size in points
    #[serde(alias = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Font family name
    #[serde(alias = "fontFamily", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl TextStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bold style.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    /// Italic style.
    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    /// Underlined style.
    pub fn underline() -> Self {
        Self {
            underline: true,
            ..Default::default()
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Check if any styling with a Markdown rendering is applied.
    ///
    /// Font size and family are informational only.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.underline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style() {
        assert!(!TextStyle::new().has_styling());
        assert!(TextStyle::bold().has_styling());

        let sized = TextStyle::new().with_font_size(14.0).with_font_family("Helvetica");
        assert!(!sized.has_styling());
        assert_eq!(sized.font_family.as_deref(), Some("Helvetica"));
    }

    #[test]
    fn test_upstream_field_names() {
        let style: TextStyle =
            serde_json::from_str(r#"{"isBold": true, "isItalic": false, "fontSize": 12.5}"#)
                .unwrap();
        assert!(style.bold);
        assert!(!style.italic);
        assert!(!style.underline);
        assert_eq!(style.font_size, Some(12.5));
    }
}
