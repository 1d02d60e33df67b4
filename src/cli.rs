//! CLI interface for demo-feedback

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::seed;
use crate::store::FeedbackStore;
use crate::types::StatsReport;

#[derive(Parser)]
#[command(name = "demo-feedback")]
#[command(about = "Track demo sessions and collect user feedback", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the feedback data file
    #[arg(
        short,
        long,
        env = "DEMO_FEEDBACK_FILE",
        default_value = "demo_feedback.json",
        global = true
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new user session
    Session,
    /// Record a feedback entry
    Feedback {
        /// Star rating (1-5 expected, stored as given)
        #[arg(short, long)]
        rating: i32,
        /// Free-text comment
        #[arg(short, long, default_value = "")]
        comment: String,
        /// Feature the user liked (repeatable; unknown identifiers are ignored)
        #[arg(short = 'F', long = "feature")]
        features: Vec<String>,
    },
    /// Show aggregate statistics
    Stats {
        /// Emit the raw JSON report instead of the formatted summary
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // Same behavior as running the demo for the first time:
            // seed an absent file, then show where things stand.
            let store = seed::initialize(&cli.file)
                .with_context(|| format!("Failed to initialize {}", cli.file.display()))?;
            println!("Feedback system ready at {}", store.path().display());
            print_summary(&store.compute_stats());
        }
        Some(Commands::Session) => {
            let mut store = open(&cli.file)?;
            let total = store.record_session()?;
            println!("Recorded session #{total}");
        }
        Some(Commands::Feedback {
            rating,
            comment,
            features,
        }) => {
            let mut store = open(&cli.file)?;
            store.record_feedback(rating, &comment, &features)?;
            println!(
                "Recorded feedback ({} entries total)",
                store.dataset().feedback_entries.len()
            );
        }
        Some(Commands::Stats { json }) => {
            let store = open(&cli.file)?;
            let stats = store.compute_stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_summary(&stats);
            }
        }
    }

    Ok(())
}

fn open(file: &Path) -> Result<FeedbackStore> {
    FeedbackStore::open(file).with_context(|| format!("Failed to open {}", file.display()))
}

fn print_summary(stats: &StatsReport) {
    println!();
    println!("Total users:    {}", stats.total_users);
    println!("Total feedback: {}", stats.total_feedback);
    println!("Average rating: {:.1}", stats.average_rating);

    if !stats.top_features.is_empty() {
        println!("Top features:");
        for (feature, votes) in &stats.top_features {
            println!("  {:<25} {} votes", feature.to_string(), votes);
        }
    }
    if let Some(comments) = &stats.recent_comments {
        println!("Recent comments:");
        for comment in comments {
            println!("  - {comment}");
        }
    }
}
