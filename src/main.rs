//! Demo feedback tracker
//!
//! Records user testing sessions and feedback for the RentCredit demo.

// Use the library crate for all modules
use demo_feedback::cli;

fn main() -> anyhow::Result<()> {
    // Initialize logging (WARN level by default, use RUST_LOG=info for debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    cli::run()
}
