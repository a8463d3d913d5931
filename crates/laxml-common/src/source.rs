//! Markup source loading.
//!
//! The parser itself only ever sees a `&str`. This module is the single place
//! where bytes come in from the outside world and get checked for UTF-8.

use std::fs;
use std::io::{self, Read};

use thiserror::Error;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Errors raised while loading markup source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file (or stdin) could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path that was being read (`-` for stdin).
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The bytes were read but are not valid UTF-8.
    #[error("'{path}' is not valid UTF-8 (byte offset {valid_up_to})")]
    NotUtf8 {
        /// Path that was being read (`-` for stdin).
        path: String,
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}

/// Load markup from `path`, or from stdin when `path` is [`STDIN_PATH`].
///
/// # Errors
///
/// Returns [`SourceError::Io`] if reading fails and [`SourceError::NotUtf8`]
/// if the content is not valid UTF-8.
pub fn load_source(path: &str) -> Result<String, SourceError> {
    let bytes = if path == STDIN_PATH {
        let mut buf = Vec::new();
        let _ = io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(|source| SourceError::Io {
                path: path.to_string(),
                source,
            })?;
        buf
    } else {
        fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_string(),
            source,
        })?
    };

    decode(path, bytes)
}

/// Decode raw bytes as UTF-8, attributing failures to `path`.
///
/// # Errors
///
/// Returns [`SourceError::NotUtf8`] if `bytes` is not valid UTF-8.
pub fn decode(path: &str, bytes: Vec<u8>) -> Result<String, SourceError> {
    String::from_utf8(bytes).map_err(|e| SourceError::NotUtf8 {
        path: path.to_string(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}
