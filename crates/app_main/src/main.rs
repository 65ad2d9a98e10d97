//! Photo Gallery - filterable photo grid with lightbox and carousel
//!
//! Main entry point.

mod app;

use anyhow::Result;

fn main() -> Result<()> {
    // Initialize logging and panic hook first
    app_log::init()?;

    // Clean up old logs (7 days)
    if let Err(e) = app_log::cleanup_old_logs(7) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("Photo Gallery starting...");

    // Load configuration
    let config = app_core::AppConfig::load().unwrap_or_default();

    // Initialize application state
    let _state = app_core::init(config)?;

    // Run the application
    app::run()
}
