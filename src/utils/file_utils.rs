//! File handling utilities
//!
//! This module reads documents for analysis and collects file metadata.
//! Failures are reported as [`TextSourceError`] so callers can print a
//! message and exit cleanly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::debug;
use sha2::{Digest, Sha256};

use crate::utils::text_utils::normalize_line_breaks;

/// Error when a document cannot be read as text
#[derive(Debug, thiserror::Error)]
pub enum TextSourceError {
    #[error("File '{}' not found.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Unable to read '{}'. Make sure it's a text file.", .path.display())]
    Decode { path: PathBuf },

    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the full content of a UTF-8 text file.
///
/// `\r\n` and lone `\r` line breaks are converted to `\n`.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The file content, or the reason it could not be read
pub fn read_text_file(file_path: &Path) -> Result<String, TextSourceError> {
    let path = file_path.to_path_buf();

    match fs::read_to_string(file_path) {
        Ok(content) => {
            debug!("Read {} bytes from {}", content.len(), file_path.display());
            Ok(normalize_line_breaks(&content).into_owned())
        }
        Err(e) => {
            debug!("Could not read {}: {}", file_path.display(), e);
            match e.kind() {
                io::ErrorKind::NotFound => Err(TextSourceError::NotFound { path }),
                io::ErrorKind::InvalidData => Err(TextSourceError::Decode { path }),
                _ => Err(TextSourceError::Io { path, source: e }),
            }
        }
    }
}

/// Collect descriptive metadata for a file.
///
/// # Arguments
///
/// * `file_path` - Path to the file
/// * `content` - Content already read from the file, used for the digest
///
/// # Returns
///
/// Ordered (key, value) pairs: size, last modification time and SHA-256
/// digest of the content as read
pub fn get_file_metadata(file_path: &Path, content: &str) -> io::Result<Vec<(String, String)>> {
    let meta = fs::metadata(file_path)?;
    let mut metadata = Vec::new();

    metadata.push(("size".to_string(), format!("{} bytes", meta.len())));

    if let Ok(modified) = meta.modified() {
        let modified: DateTime<Local> = modified.into();
        metadata.push((
            "modified".to_string(),
            modified.format("%Y-%m-%d %H:%M:%S").to_string(),
        ));
    }

    metadata.push(("sha256".to_string(), content_digest(content.as_bytes())));

    Ok(metadata)
}

/// Hex encoded SHA-256 digest of raw bytes
pub fn content_digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
