//! Builders that assemble the full seed dataset.

pub mod dataset;

pub use dataset::SeedDataset;
