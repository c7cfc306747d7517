//! File operations used by the conversion pipeline.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Check whether a path exists.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Read a whole file into memory.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| {
        Error::file_operation(
            format!("Failed to read file: {}", path.display()),
            path,
            Some(e),
        )
    })
}

/// Write text to a file, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let failed = |e| {
        Error::file_operation(
            format!("Failed to write file: {}", path.display()),
            path,
            Some(e),
        )
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(failed)?;
    }
    fs::write(path, content).map_err(failed)
}

/// Output path for an input: the same path with a `.md` extension.
///
/// ```
/// use md_pdf::convert::io::derive_output_path;
/// use std::path::Path;
///
/// assert_eq!(derive_output_path("docs/report.PDF"), Path::new("docs/report.md"));
/// ```
pub fn derive_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    input.as_ref().with_extension("md")
}

/// Async variant of [`read_file`].
#[cfg(feature = "async")]
pub async fn read_file_async<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    tokio::fs::read(path).await.map_err(|e| {
        Error::file_operation(
            format!("Failed to read file: {}", path.display()),
            path,
            Some(e),
        )
    })
}

/// Async variant of [`write_file`].
#[cfg(feature = "async")]
pub async fn write_file_async<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let failed = |e| {
        Error::file_operation(
            format!("Failed to write file: {}", path.display()),
            path,
            Some(e),
        )
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(failed)?;
    }
    tokio::fs::write(path, content).await.map_err(failed)
}
