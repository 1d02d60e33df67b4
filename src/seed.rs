//! Demo seed data
//!
//! A freshly deployed demo should show non-empty statistics, so the first
//! run populates the store with a fixed set of sample entries.

use std::path::PathBuf;
use tracing::info;

use crate::error::FeedbackError;
use crate::store::FeedbackStore;

struct SeedEntry {
    rating: i32,
    comment: &'static str,
    features: &'static [&'static str],
}

const DEMO_FEEDBACK: [SeedEntry; 5] = [
    SeedEntry {
        rating: 5,
        comment: "Amazing dual-perspective demo! Really shows the complete rental ecosystem.",
        features: &["dual_perspective", "real_time_notifications"],
    },
    SeedEntry {
        rating: 4,
        comment: "Circle Programmable Wallets integration is seamless. Great UX!",
        features: &["circle_wallets", "escrow_management"],
    },
    SeedEntry {
        rating: 5,
        comment: "Real-time notifications between tenant and landlord are brilliant!",
        features: &["real_time_notifications", "dual_perspective"],
    },
    SeedEntry {
        rating: 4,
        comment: "Cross-chain bridge works perfectly. Very smooth transaction flow.",
        features: &["cross_chain_bridge", "circle_wallets"],
    },
    SeedEntry {
        rating: 5,
        comment: "This solves real rental market problems. Practical and innovative!",
        features: &["escrow_management", "dual_perspective"],
    },
];

/// Open the store at `path`, seeding it with the sample entries when the
/// file does not exist.
///
/// The existence check happens before the store is opened, so the seed runs
/// at most once per data file: reopening an already-seeded file records
/// nothing new.
pub fn initialize(path: impl Into<PathBuf>) -> Result<FeedbackStore, FeedbackError> {
    let path = path.into();
    let existed = path.exists();

    let mut store = FeedbackStore::open(path)?;
    if !existed {
        for entry in &DEMO_FEEDBACK {
            let features: Vec<String> = entry.features.iter().map(|s| s.to_string()).collect();
            store.record_feedback(entry.rating, entry.comment, &features)?;
            store.record_session()?;
        }
        info!(
            "Seeded feedback store with {} demo entries",
            DEMO_FEEDBACK.len()
        );
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Feature;
    use tempfile::tempdir;

    #[test]
    fn test_initialize_seeds_fresh_file() {
        let dir = tempdir().unwrap();
        let store = initialize(dir.path().join("feedback.json")).unwrap();

        let data = store.dataset();
        assert_eq!(data.feedback_entries.len(), 5);
        assert_eq!(data.ratings, vec![5, 4, 5, 4, 5]);
        assert_eq!(data.total_users, 5);
        assert_eq!(data.feature_votes[&Feature::DualPerspective], 3);
        assert_eq!(data.feature_votes[&Feature::CircleWallets], 2);
        assert_eq!(data.feature_votes[&Feature::EscrowManagement], 2);
        assert!(store.path().exists());
    }

    #[test]
    fn test_initialize_never_reseeds_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("feedback.json");

        initialize(&path).unwrap();
        let store = initialize(&path).unwrap();

        assert_eq!(store.dataset().feedback_entries.len(), 5);
        assert_eq!(store.dataset().total_users, 5);
    }

    #[test]
    fn test_initialize_skips_seed_for_existing_empty_dataset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("feedback.json");

        // A file that exists but holds no entries must stay unseeded.
        FeedbackStore::open(&path).unwrap().persist().unwrap();
        let store = initialize(&path).unwrap();

        assert_eq!(store.dataset().feedback_entries.len(), 0);
        assert_eq!(store.dataset().total_users, 0);
    }
}
