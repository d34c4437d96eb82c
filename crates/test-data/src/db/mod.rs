//! Database integration for seeding.
//!
//! The [`Seeder`] clears the five collections and bulk-inserts a
//! [`SeedDataset`](crate::builders::SeedDataset). [`run`] is the whole
//! connect, clear, and insert sequence.

mod seeder;
mod summary;

pub use seeder::{SeedError, Seeder, WriteOperation, run};
pub use summary::SeedSummary;
