//! Seed data for octofit.
//!
//! This crate resets the `users`, `teams`, `activity`, `leaderboard`, and
//! `workouts` collections and fills them with a small fixed dataset whose
//! records reference each other by id.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let config = DatabaseConfig::from_env()?;
//! let summary = run(&config).await?;
//! assert_eq!(summary.users, 5);
//! ```

pub mod builders;
pub mod db;
pub mod generators;

// Re-export core types from octofit crate
pub use octofit::config::DatabaseConfig;
pub use octofit::models::{
    Activity, ActivityType, LeaderboardEntry, Team, User, Workout, collections,
};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::SeedDataset;
    pub use crate::db::{SeedError, SeedSummary, Seeder, run};
    pub use crate::generators::{
        ActivityGenerator, LeaderboardGenerator, TeamGenerator, UserGenerator, WorkoutGenerator,
    };
    pub use crate::{
        Activity, ActivityType, DatabaseConfig, LeaderboardEntry, Team, User, Workout,
    };
}
