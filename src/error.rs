// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a collector or renderer run.
///
/// Every variant is terminal: no retry, no partial save, no rollback.
/// Collector errors are raised before the publications file is touched;
/// renderer errors are raised before the page is touched.
#[derive(Debug, Error)]
pub enum Error {
    /// The author id did not resolve to a Scholar profile.
    #[error("author lookup failed for '{id}': {reason}")]
    Lookup { id: String, reason: String },

    /// A per-publication detail fetch failed.
    #[error("detail fetch failed for '{title}': {reason}")]
    Fetch { title: String, reason: String },

    /// The publications file could not be serialized or written.
    #[error("could not write publications file '{path}': {reason}")]
    Serialize { path: PathBuf, reason: String },

    /// The publications file is missing or malformed.
    #[error("could not read publications file '{path}': {reason}")]
    Parse { path: PathBuf, reason: String },

    /// The target document lacks the opening or closing marker.
    #[error("marker '{marker}' not found in target document")]
    MarkerNotFound { marker: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
