//! Demo Feedback - usage feedback tracking library
//!
//! Records lightweight usage feedback for a product demo:
//! - Session counts and rated feedback entries with comments
//! - Feature votes against a fixed set of demo features
//! - Aggregate statistics (average rating, top features, recent comments)
//!
//! State lives in a single JSON file that is rewritten after every
//! mutation. Single process, single writer; there is no locking.
//!
//! # Example
//!
//! ```no_run
//! use demo_feedback::FeedbackStore;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut store = FeedbackStore::open("demo_feedback.json")?;
//!     store.record_session()?;
//!     store.record_feedback(5, "Great demo!", &["dual_perspective".to_string()])?;
//!     println!("{:?}", store.compute_stats());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use error::FeedbackError;
pub use store::FeedbackStore;
pub use types::{Feature, FeedbackDataset, FeedbackEntry, StatsReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
