//! The complete set of records written by one seeding run.

use octofit::models::{Activity, LeaderboardEntry, Team, User, Workout};

use crate::db::SeedSummary;
use crate::generators::{
    ActivityGenerator, LeaderboardGenerator, TeamGenerator, UserGenerator, WorkoutGenerator,
};

/// Every record for the five collections, with cross-references resolved.
#[derive(Debug, Clone)]
pub struct SeedDataset {
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub activities: Vec<Activity>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub workouts: Vec<Workout>,
}

impl SeedDataset {
    /// Builds the fixture dataset. Users are created first and their ids
    /// are threaded into teams, activities, and leaderboard entries.
    pub fn generate() -> Self {
        let users = UserGenerator::new().generate_batch();
        let teams = TeamGenerator::new().generate(&users);
        let activities = ActivityGenerator::new().generate(&users);
        let leaderboard = LeaderboardGenerator::new().generate(&users);
        let workouts = WorkoutGenerator.generate_batch();

        Self {
            users,
            teams,
            activities,
            leaderboard,
            workouts,
        }
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Record counts per collection, as a successful seed would report them.
    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            users: self.users.len() as u64,
            teams: self.teams.len() as u64,
            activities: self.activities.len() as u64,
            leaderboard: self.leaderboard.len() as u64,
            workouts: self.workouts.len() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofit::models::ActivityType;
    use std::collections::HashSet;

    #[test]
    fn test_record_counts() {
        let dataset = SeedDataset::generate();
        let summary = dataset.summary();

        assert_eq!(summary.users, 5);
        assert_eq!(summary.teams, 2);
        assert_eq!(summary.activities, 5);
        assert_eq!(summary.leaderboard, 5);
        assert_eq!(summary.workouts, 5);
        assert_eq!(summary.total(), 22);
    }

    #[test]
    fn test_team_members_reference_users() {
        let dataset = SeedDataset::generate();
        let user_ids: HashSet<_> = dataset.users.iter().map(|u| u.id).collect();

        for team in &dataset.teams {
            for member in &team.members {
                assert!(
                    user_ids.contains(member),
                    "{} has a member that is not a user",
                    team.name
                );
            }
        }
    }

    #[test]
    fn test_each_user_has_one_activity_and_one_entry() {
        let dataset = SeedDataset::generate();

        for user in &dataset.users {
            let activities = dataset
                .activities
                .iter()
                .filter(|a| a.user == user.id)
                .count();
            let entries = dataset
                .leaderboard
                .iter()
                .filter(|e| e.user == user.id)
                .count();
            assert_eq!(activities, 1, "{} activities", user.username);
            assert_eq!(entries, 1, "{} leaderboard entries", user.username);
        }
    }

    #[test]
    fn test_zerocool_on_gold_team_running() {
        let dataset = SeedDataset::generate();
        let zerocool = dataset.user_by_username("zerocool").unwrap();

        let gold = dataset
            .teams
            .iter()
            .find(|t| t.name == "Gold Team")
            .unwrap();
        assert!(gold.members.contains(&zerocool.id));

        let runs: Vec<_> = dataset
            .activities
            .iter()
            .filter(|a| a.user == zerocool.id)
            .collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].activity_type, ActivityType::Running);
        assert_eq!(runs[0].duration, 90);
    }

    #[test]
    fn test_ids_unique_across_collections() {
        let dataset = SeedDataset::generate();
        let ids: Vec<_> = dataset
            .users
            .iter()
            .map(|u| u.id)
            .chain(dataset.teams.iter().map(|t| t.id))
            .chain(dataset.activities.iter().map(|a| a.id))
            .chain(dataset.leaderboard.iter().map(|e| e.id))
            .chain(dataset.workouts.iter().map(|w| w.id))
            .collect();
        let unique: HashSet<_> = ids.iter().collect();

        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_regenerate_yields_fresh_ids_same_content() {
        let first = SeedDataset::generate();
        let second = SeedDataset::generate();

        assert_ne!(first.users[0].id, second.users[0].id);
        assert_eq!(first.summary(), second.summary());
        assert_eq!(first.users[3].username, second.users[3].username);
    }
}
