use std::fmt;

/// Documents inserted per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: u64,
    pub teams: u64,
    pub activities: u64,
    pub leaderboard: u64,
    pub workouts: u64,
}

impl SeedSummary {
    pub fn total(&self) -> u64 {
        self.users + self.teams + self.activities + self.leaderboard + self.workouts
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} users, {} teams, {} activities, {} leaderboard entries, {} workouts",
            self.users, self.teams, self.activities, self.leaderboard, self.workouts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let summary = SeedSummary {
            users: 5,
            teams: 2,
            activities: 5,
            leaderboard: 5,
            workouts: 5,
        };
        assert_eq!(
            summary.to_string(),
            "5 users, 2 teams, 5 activities, 5 leaderboard entries, 5 workouts"
        );
        assert_eq!(summary.total(), 22);
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(SeedSummary::default().total(), 0);
    }
}
