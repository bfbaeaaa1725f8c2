//! Error types for poseidon-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the poseidon-io crate.
///
/// Covers missing or malformed station files, unknown segment lookups,
/// per-station harmonic-constant failures, accumulated validation
/// problems, and plain I/O errors while rendering predictions.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a JSON parse failure from the station table.
    #[error("station file parse error: {reason}")]
    Json {
        /// Description of the underlying parse failure.
        reason: String,
    },

    /// Returned when a requested segment is not in the station table.
    #[error("segment '{segment}' not found ({available} stations loaded)")]
    SegmentNotFound {
        /// Segment identifier that was requested.
        segment: String,
        /// Number of stations the table holds.
        available: usize,
    },

    /// Wraps a harmonic-constant failure for one station record.
    #[error("segment '{segment}': {reason}")]
    Harmonics {
        /// Segment whose record was rejected.
        segment: String,
        /// Description of the underlying harmonics failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Wraps an operating-system I/O failure.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}
