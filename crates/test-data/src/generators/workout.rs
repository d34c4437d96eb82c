//! Fixture workouts.

use octofit::models::Workout;

/// Workout names and descriptions.
pub const WORKOUT_CATALOG: [(&str, &str); 5] = [
    ("Cycling Training", "Training for a road cycling event"),
    ("Crossfit", "Training for a crossfit competition"),
    ("Running Training", "Training for a marathon"),
    ("Strength Training", "Training for strength"),
    ("Swimming Training", "Training for a swimming competition"),
];

pub struct WorkoutGenerator;

impl WorkoutGenerator {
    pub fn generate_batch(&self) -> Vec<Workout> {
        WORKOUT_CATALOG
            .iter()
            .map(|&(name, description)| Workout::new(name, description))
            .collect()
    }
}
