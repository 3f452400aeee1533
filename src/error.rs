//! Error types for segyscan.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for segyscan operations.
pub type Result<T> = std::result::Result<T, SegyScanError>;

/// Errors that can occur in segyscan.
#[derive(Debug, Error)]
pub enum SegyScanError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural violation in a SEG-Y file.
    #[error("Invalid SEG-Y file: {reason}")]
    Format {
        /// What was wrong with the file.
        reason: String,
    },

    /// Trace index outside `[0, trace_count)`.
    #[error("Trace index {index} is out of range (trace count: {count})")]
    TraceIndex {
        /// Requested index.
        index: usize,
        /// Number of traces in the file.
        count: usize,
    },

    /// Input path does not exist.
    #[error("Input path does not exist: {path}")]
    PathNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Discovery found nothing to scan.
    #[error("No valid SEG-Y files found in: {path}")]
    NoFilesFound {
        /// The scanned input path.
        path: PathBuf,
    },

    /// Every discovered file failed to decode.
    #[error("No SEG-Y files were processed successfully")]
    NoFilesProcessed,

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl SegyScanError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Format error.
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    /// Create a TraceIndex error.
    pub fn trace_index(index: usize, count: usize) -> Self {
        Self::TraceIndex { index, count }
    }

    /// Whether a per-file scan may skip this error and carry on with the next file.
    ///
    /// A `TraceIndex` error means the caller asked for a trace the decoder never
    /// reported, which is a bug rather than a bad file.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FileOpen { .. } | Self::Io(_) | Self::Format { .. }
        )
    }
}
