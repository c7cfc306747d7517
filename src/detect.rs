//! Input format detection.

/// Kind of input handed to an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFormat {
    /// Raw PDF bytes
    Pdf {
        /// PDF version (e.g., "1.7", "2.0")
        version: String,
    },

    /// A serialized document model (JSON object)
    DocumentModel,

    /// Anything else
    Unknown,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Pdf { version } => write!(f, "PDF {}", version),
            InputFormat::DocumentModel => write!(f, "document model (JSON)"),
            InputFormat::Unknown => write!(f, "unknown"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Detect the input format from the leading bytes of a file.
///
/// # Example
/// ```
/// use md_pdf::detect::{detect_input_format, InputFormat};
///
/// assert_eq!(
///     detect_input_format(b"%PDF-1.7\n"),
///     InputFormat::Pdf { version: "1.7".to_string() }
/// );
/// assert_eq!(detect_input_format(br#"{"pages": []}"#), InputFormat::DocumentModel);
/// ```
pub fn detect_input_format(data: &[u8]) -> InputFormat {
    if let Some(version) = pdf_version(data) {
        return InputFormat::Pdf { version };
    }

    let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match body.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => InputFormat::DocumentModel,
        _ => InputFormat::Unknown,
    }
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    pdf_version(data).is_some()
}

fn pdf_version(data: &[u8]) -> Option<String> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return None;
    }

    // Extract version string (e.g., "1.7" from "%PDF-1.7")
    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();
    is_valid_version(&version).then_some(version)
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    let chars: Vec<char> = version.chars().collect();
    chars.len() == 3 && chars[0].is_ascii_digit() && chars[1] == '.' && chars[2].is_ascii_digit()
}
