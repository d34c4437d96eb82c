//! Fixture generators for seed data.
//!
//! Each generator turns a literal table into typed records with fresh ids:
//! - [`UserGenerator`]: The five fixture users
//! - [`TeamGenerator`]: Teams whose members are slices of the user list
//! - [`ActivityGenerator`]: One activity per user
//! - [`LeaderboardGenerator`]: One leaderboard entry per user
//! - [`WorkoutGenerator`]: Standalone workouts

pub mod activity;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::{ACTIVITY_PLAN, ActivityGenerator};
pub use leaderboard::{LEADERBOARD_SCORES, LeaderboardGenerator};
pub use team::{TEAM_ROSTER, TeamGenerator, TeamSpec};
pub use user::{USERNAMES, UserGenConfig, UserGenerator};
pub use workout::{WORKOUT_CATALOG, WorkoutGenerator};
