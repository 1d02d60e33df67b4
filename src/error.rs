//! Error types for the feedback store

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`crate::FeedbackStore`].
///
/// A `Load` failure means the data file exists but is not a valid dataset;
/// the store never falls back to an empty dataset in that case, since doing
/// so would mask data loss. `Io` failures are fatal and not retried.
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// The file exists but does not parse as the dataset schema, or parses
    /// into an inconsistent dataset.
    #[error("malformed feedback data in {}: {}", .path.display(), .reason)]
    Load { path: PathBuf, reason: String },

    /// Reading or writing the data file failed.
    #[error("failed to access feedback file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory dataset could not be serialized.
    #[error("failed to encode feedback data")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}
