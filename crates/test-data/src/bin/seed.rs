//! Seed script - resets the octofit collections to the fixture dataset
//!
//! Run with:
//! ```
//! OCTOFIT_DB_HOST=localhost OCTOFIT_DB_NAME=octofit_db cargo run -p test-data --bin seed
//! ```

use test_data::DatabaseConfig;
use test_data::db::{self, SeedError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DatabaseConfig::from_env().map_err(|e| {
        tracing::error!("Invalid database configuration: {e}");
        SeedError::from(e)
    })?;

    let summary = db::run(&config).await?;

    tracing::info!("Successfully populated the database with test data.");
    tracing::info!("  Users: {}", summary.users);
    tracing::info!("  Teams: {}", summary.teams);
    tracing::info!("  Activities: {}", summary.activities);
    tracing::info!("  Leaderboard: {}", summary.leaderboard);
    tracing::info!("  Workouts: {}", summary.workouts);

    Ok(())
}
