//! Feedback store - persistent storage for demo feedback
//!
//! Loads the dataset from a single JSON file, applies mutations in memory,
//! and rewrites the whole file after every mutating operation so the
//! durable copy never trails memory by more than one operation. All I/O is
//! synchronous; the store assumes a single process and a single writer.

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::FeedbackError;
use crate::types::{Feature, FeedbackDataset, FeedbackEntry, StatsReport};

/// File-backed store for feedback entries, session counts, and feature votes.
pub struct FeedbackStore {
    path: PathBuf,
    data: FeedbackDataset,
}

impl FeedbackStore {
    /// Open the store at `path`.
    ///
    /// An existing file is parsed strictly: missing top-level keys, invalid
    /// JSON, unknown feature-vote keys, or a `ratings` sequence that does
    /// not run parallel to `feedback_entries` all fail with
    /// [`FeedbackError::Load`]. A missing file starts an empty dataset with
    /// every feature vote pre-seeded at zero.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FeedbackError> {
        let path = path.into();
        let data = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|source| FeedbackError::Io {
                path: path.clone(),
                source,
            })?;
            let mut data: FeedbackDataset =
                serde_json::from_str(&raw).map_err(|e| FeedbackError::Load {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
            if data.ratings.len() != data.feedback_entries.len() {
                return Err(FeedbackError::Load {
                    path,
                    reason: format!(
                        "ratings length {} does not match feedback_entries length {}",
                        data.ratings.len(),
                        data.feedback_entries.len()
                    ),
                });
            }
            // The vote key set is closed; refill any key a hand-edited file dropped.
            for feature in Feature::ALL {
                data.feature_votes.entry(feature).or_insert(0);
            }
            debug!(
                "Loaded {} feedback entries from {}",
                data.feedback_entries.len(),
                path.display()
            );
            data
        } else {
            debug!("No feedback file at {}, starting empty", path.display());
            FeedbackDataset::default()
        };

        Ok(Self { path, data })
    }

    /// Serialize the full dataset and overwrite the data file.
    ///
    /// Every mutating operation calls this; a failure leaves the in-memory
    /// state one step ahead of the durable file, and the caller may retry
    /// the whole operation.
    pub fn persist(&self) -> Result<(), FeedbackError> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|source| FeedbackError::Encode { source })?;
        fs::write(&self.path, json).map_err(|source| FeedbackError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("Persisted feedback data to {}", self.path.display());
        Ok(())
    }

    /// Count a new user session. Returns the new total.
    pub fn record_session(&mut self) -> Result<u64, FeedbackError> {
        self.data.total_users += 1;
        self.persist()?;
        info!("Recorded session, total users: {}", self.data.total_users);
        Ok(self.data.total_users)
    }

    /// Record a feedback entry stamped with the current time.
    ///
    /// The rating is stored as given, with no range check. Each identifier
    /// in `features_liked` that names a known [`Feature`] gets one vote;
    /// unknown identifiers are kept on the entry but never become vote keys.
    pub fn record_feedback(
        &mut self,
        rating: i32,
        comment: &str,
        features_liked: &[String],
    ) -> Result<(), FeedbackError> {
        let entry = FeedbackEntry {
            timestamp: Utc::now(),
            rating,
            comment: comment.to_string(),
            features_liked: features_liked.to_vec(),
        };

        self.data.feedback_entries.push(entry);
        self.data.ratings.push(rating);

        for identifier in features_liked {
            if let Some(feature) = Feature::from_str(identifier) {
                *self.data.feature_votes.entry(feature).or_insert(0) += 1;
            }
        }

        self.persist()?;
        info!(
            "Recorded feedback (rating {}), total entries: {}",
            rating,
            self.data.feedback_entries.len()
        );
        Ok(())
    }

    /// Derive the aggregate statistics. Read-only, never touches the file.
    ///
    /// The average is rounded to one decimal place, half away from zero.
    pub fn compute_stats(&self) -> StatsReport {
        if self.data.ratings.is_empty() {
            return StatsReport {
                total_users: self.data.total_users,
                average_rating: 0.0,
                total_feedback: 0,
                top_features: Vec::new(),
                recent_comments: None,
            };
        }

        let sum: i64 = self.data.ratings.iter().map(|&r| i64::from(r)).sum();
        let mean = sum as f64 / self.data.ratings.len() as f64;
        let average_rating = (mean * 10.0).round() / 10.0;

        // Stable sort over the declaration-order enumeration keeps ties in
        // fixed feature order.
        let mut ranked: Vec<(Feature, u64)> = Feature::ALL
            .iter()
            .map(|&f| (f, self.data.feature_votes.get(&f).copied().unwrap_or(0)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(3);

        let start = self.data.feedback_entries.len().saturating_sub(3);
        let recent_comments = self.data.feedback_entries[start..]
            .iter()
            .map(|e| e.comment.clone())
            .collect();

        StatsReport {
            total_users: self.data.total_users,
            average_rating,
            total_feedback: self.data.feedback_entries.len(),
            top_features: ranked,
            recent_comments: Some(recent_comments),
        }
    }

    /// Read-only view of the current dataset.
    pub fn dataset(&self) -> &FeedbackDataset {
        &self.data
    }

    /// Path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
