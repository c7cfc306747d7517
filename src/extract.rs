//! Extraction boundary: turning input bytes into a [`Document`].
//!
//! PDF binary parsing lives outside this crate. Any backend can be plugged
//! into the conversion pipeline by implementing [`DocumentExtractor`]; the
//! bundled [`JsonExtractor`] reads a document model that an extractor has
//! already serialized.

use crate::detect::{detect_input_format, InputFormat};
use crate::error::{Error, Result};
use crate::model::Document;

/// Trait for document extractors.
///
/// Implement this trait to plug a PDF content extractor into
/// [`Converter`](crate::Converter). Failures must be reported as
/// [`Error::PdfParsing`].
pub trait DocumentExtractor: Send + Sync {
    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract a document model from raw input bytes.
    fn extract(&self, bytes: &[u8]) -> Result<Document>;
}

/// Extractor for documents serialized as JSON.
///
/// # Example
///
/// ```
/// use md_pdf::extract::{DocumentExtractor, JsonExtractor};
///
/// let json = br#"{"pages": [{"number": 1, "elements": [{"type": "paragraph", "text": "Hi"}]}]}"#;
/// let doc = JsonExtractor::new().extract(json).unwrap();
/// assert_eq!(doc.page_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonExtractor {
    _private: (),
}

impl JsonExtractor {
    /// Create a new JSON extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentExtractor for JsonExtractor {
    fn name(&self) -> &str {
        "json"
    }

    fn extract(&self, bytes: &[u8]) -> Result<Document> {
        let format = detect_input_format(bytes);
        log::debug!("Detected input format: {}", format);

        if let InputFormat::Pdf { .. } = format {
            return Err(Error::pdf_parsing(
                format!(
                    "Input is raw {}; a PDF extraction backend is required to read it",
                    format
                ),
                None,
            ));
        }

        serde_json::from_slice(bytes).map_err(|e| {
            Error::pdf_parsing("Failed to parse PDF content", Some(e.into()))
        })
    }
}
