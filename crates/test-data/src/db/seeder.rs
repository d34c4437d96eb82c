//! Database seeding utilities.

use std::fmt;

use octofit::config::DatabaseConfig;
use octofit::database::Database;
use octofit::errors::ConfigError;
use octofit::models::{Activity, CollectionDocument, LeaderboardEntry, Team, User, Workout};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::builders::SeedDataset;
use crate::db::SeedSummary;

/// Which write the database rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOperation {
    Clear,
    Insert,
}

impl fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteOperation::Clear => f.write_str("clear"),
            WriteOperation::Insert => f.write_str("insert into"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Could not connect to database: {0}")]
    Connection(#[source] mongodb::error::Error),
    #[error("Failed to {operation} collection `{collection}`: {source}")]
    Write {
        collection: &'static str,
        operation: WriteOperation,
        #[source]
        source: mongodb::error::Error,
    },
}

impl SeedError {
    fn write<T: CollectionDocument>(
        operation: WriteOperation,
        source: mongodb::error::Error,
    ) -> Self {
        SeedError::Write {
            collection: T::COLLECTION,
            operation,
            source,
        }
    }
}

/// Clears and repopulates the seed collections.
pub struct Seeder {
    db: Database,
}

impl Seeder {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Empties all five collections.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        self.clear::<User>().await?;
        self.clear::<Team>().await?;
        self.clear::<Activity>().await?;
        self.clear::<LeaderboardEntry>().await?;
        self.clear::<Workout>().await?;

        info!("Existing data cleared.");
        Ok(())
    }

    async fn clear<T: CollectionDocument>(&self) -> Result<u64, SeedError> {
        let deleted = self
            .db
            .clear::<T>()
            .await
            .map_err(|e| SeedError::write::<T>(WriteOperation::Clear, e))?;

        debug!("Deleted {} documents from {}", deleted, T::COLLECTION);
        Ok(deleted)
    }

    async fn insert<T: CollectionDocument>(&self, records: &[T]) -> Result<u64, SeedError> {
        debug!("Inserting {} documents into {}", records.len(), T::COLLECTION);

        self.db
            .insert_all(records)
            .await
            .map_err(|e| SeedError::write::<T>(WriteOperation::Insert, e))
    }

    pub async fn seed_users(&self, users: &[User]) -> Result<u64, SeedError> {
        let inserted = self.insert(users).await?;
        info!("Users inserted.");
        Ok(inserted)
    }

    pub async fn seed_teams(&self, teams: &[Team]) -> Result<u64, SeedError> {
        let inserted = self.insert(teams).await?;
        info!("Teams inserted.");
        Ok(inserted)
    }

    pub async fn seed_activities(&self, activities: &[Activity]) -> Result<u64, SeedError> {
        let inserted = self.insert(activities).await?;
        info!("Activities inserted.");
        Ok(inserted)
    }

    pub async fn seed_leaderboard(&self, entries: &[LeaderboardEntry]) -> Result<u64, SeedError> {
        let inserted = self.insert(entries).await?;
        info!("Leaderboard entries inserted.");
        Ok(inserted)
    }

    pub async fn seed_workouts(&self, workouts: &[Workout]) -> Result<u64, SeedError> {
        let inserted = self.insert(workouts).await?;
        info!("Workouts inserted.");
        Ok(inserted)
    }

    /// Inserts the dataset without clearing first.
    ///
    /// Users go in before anything that references them. The first failed
    /// insert stops the run; earlier collections keep what was written.
    pub async fn populate(&self, dataset: &SeedDataset) -> Result<SeedSummary, SeedError> {
        let users = self.seed_users(&dataset.users).await?;
        let teams = self.seed_teams(&dataset.teams).await?;
        let activities = self.seed_activities(&dataset.activities).await?;
        let leaderboard = self.seed_leaderboard(&dataset.leaderboard).await?;
        let workouts = self.seed_workouts(&dataset.workouts).await?;

        Ok(SeedSummary {
            users,
            teams,
            activities,
            leaderboard,
            workouts,
        })
    }

    /// Clears every collection, then inserts the dataset.
    pub async fn seed(&self, dataset: &SeedDataset) -> Result<SeedSummary, SeedError> {
        self.clear_all().await?;
        self.populate(dataset).await
    }
}

/// Connects, clears the five collections, and inserts the fixture dataset.
///
/// Any failure is logged before it is returned.
pub async fn run(config: &DatabaseConfig) -> Result<SeedSummary, SeedError> {
    let result = seed_database(config).await;
    if let Err(e) = &result {
        error!("Error during database population: {e}");
    }
    result
}

async fn seed_database(config: &DatabaseConfig) -> Result<SeedSummary, SeedError> {
    info!("Starting database population...");

    let db = Database::connect(config)
        .await
        .map_err(SeedError::Connection)?;
    info!(
        "Connected to {} (database `{}`)",
        config.connection_uri(),
        db.name()
    );

    let seeder = Seeder::new(db);
    seeder.clear_all().await?;

    let dataset = SeedDataset::generate();
    let summary = seeder.populate(&dataset).await?;

    info!("Seeded {}", summary);
    Ok(summary)
}
