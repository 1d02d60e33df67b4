//! Shared types for the feedback dataset
//!
//! This module contains the typed records that make up the persisted
//! dataset and the derived stats report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A demo feature users can vote for.
///
/// The set of valid features is closed: it is fixed here and never grows at
/// runtime. Identifiers supplied at recording time that do not name one of
/// these variants are ignored rather than rejected. Declaration order is
/// the tie-break order when ranking features by vote count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    CircleWallets,
    DualPerspective,
    RealTimeNotifications,
    EscrowManagement,
    CrossChainBridge,
}

impl Feature {
    /// All features, in declaration order.
    pub const ALL: [Feature; 5] = [
        Feature::CircleWallets,
        Feature::DualPerspective,
        Feature::RealTimeNotifications,
        Feature::EscrowManagement,
        Feature::CrossChainBridge,
    ];

    /// The identifier used in the data file and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::CircleWallets => "circle_wallets",
            Feature::DualPerspective => "dual_perspective",
            Feature::RealTimeNotifications => "real_time_notifications",
            Feature::EscrowManagement => "escrow_management",
            Feature::CrossChainBridge => "cross_chain_bridge",
        }
    }

    /// Parse an identifier. Returns `None` for anything outside the fixed set.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "circle_wallets" => Some(Feature::CircleWallets),
            "dual_perspective" => Some(Feature::DualPerspective),
            "real_time_notifications" => Some(Feature::RealTimeNotifications),
            "escrow_management" => Some(Feature::EscrowManagement),
            "cross_chain_bridge" => Some(Feature::CrossChainBridge),
            _ => None,
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One user-submitted feedback record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// Star rating. 1-5 is expected but not enforced; out-of-range values
    /// are stored as given.
    pub rating: i32,
    /// Free-text comment, may be empty.
    pub comment: String,
    /// Feature identifiers the user credited, exactly as supplied.
    /// Unknown identifiers are kept here but never counted as votes.
    pub features_liked: Vec<String>,
}

/// The persisted feedback dataset.
///
/// `ratings` runs parallel to `feedback_entries`: `ratings[i]` is
/// `feedback_entries[i].rating`, and both sequences are append-only in
/// chronological order. The vote map always carries all five feature keys,
/// zero-valued until credited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDataset {
    pub total_users: u64,
    pub feedback_entries: Vec<FeedbackEntry>,
    pub ratings: Vec<i32>,
    pub feature_votes: BTreeMap<Feature, u64>,
}

impl Default for FeedbackDataset {
    fn default() -> Self {
        Self {
            total_users: 0,
            feedback_entries: Vec::new(),
            ratings: Vec::new(),
            feature_votes: Feature::ALL.iter().map(|&f| (f, 0)).collect(),
        }
    }
}

/// Derived, read-only summary of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub total_users: u64,
    /// Arithmetic mean of all ratings, rounded to one decimal place
    /// (half away from zero). Zero when no feedback has been recorded.
    pub average_rating: f64,
    pub total_feedback: usize,
    /// Up to three features with the highest vote counts, descending.
    /// Ties keep the fixed declaration order of [`Feature::ALL`].
    pub top_features: Vec<(Feature, u64)>,
    /// Comments of the last three entries in chronological order.
    /// Absent entirely when no feedback has been recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_comments: Option<Vec<String>>,
}
