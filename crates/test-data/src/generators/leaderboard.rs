//! Fixture leaderboard entries.

use octofit::models::{LeaderboardEntry, User};

/// Score for each user, in user order.
pub const LEADERBOARD_SCORES: [i32; 5] = [100, 90, 95, 85, 80];

pub struct LeaderboardGenerator {
    scores: Vec<i32>,
}

impl LeaderboardGenerator {
    pub fn new() -> Self {
        Self {
            scores: LEADERBOARD_SCORES.to_vec(),
        }
    }

    pub fn generate(&self, users: &[User]) -> Vec<LeaderboardEntry> {
        users
            .iter()
            .zip(&self.scores)
            .map(|(user, &score)| LeaderboardEntry::new(user.id, score))
            .collect()
    }
}

impl Default for LeaderboardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::UserGenerator;

    #[test]
    fn test_scores_follow_user_order() {
        let users = UserGenerator::new().generate_batch();
        let entries = LeaderboardGenerator::new().generate(&users);

        let pairs: Vec<_> = entries.iter().map(|e| (e.user, e.score)).collect();
        let expected: Vec<_> = users
            .iter()
            .map(|u| u.id)
            .zip(LEADERBOARD_SCORES)
            .collect();
        assert_eq!(pairs, expected);
        assert!(entries.iter().all(|e| e.score >= 0));
    }
}
