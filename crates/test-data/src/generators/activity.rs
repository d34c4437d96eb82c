//! Fixture activities.

use octofit::models::{Activity, ActivityType, User};

/// Activity type and duration (minutes) for each user, in user order.
pub const ACTIVITY_PLAN: [(ActivityType, i32); 5] = [
    (ActivityType::Cycling, 60),
    (ActivityType::Crossfit, 120),
    (ActivityType::Running, 90),
    (ActivityType::Strength, 30),
    (ActivityType::Swimming, 75),
];

/// Builds one activity per user from [`ACTIVITY_PLAN`].
pub struct ActivityGenerator {
    plan: Vec<(ActivityType, i32)>,
}

impl ActivityGenerator {
    pub fn new() -> Self {
        Self {
            plan: ACTIVITY_PLAN.to_vec(),
        }
    }

    /// Pairs users with plan entries in order. Extra users or entries are ignored.
    pub fn generate(&self, users: &[User]) -> Vec<Activity> {
        users
            .iter()
            .zip(&self.plan)
            .map(|(user, &(activity_type, duration))| {
                Activity::new(user.id, activity_type, duration)
            })
            .collect()
    }
}

impl Default for ActivityGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::UserGenerator;

    #[test]
    fn test_one_activity_per_user() {
        let users = UserGenerator::new().generate_batch();
        let activities = ActivityGenerator::new().generate(&users);

        assert_eq!(activities.len(), users.len());
        for (user, activity) in users.iter().zip(&activities) {
            assert_eq!(activity.user, user.id);
        }
    }

    #[test]
    fn test_plan_values() {
        let users = UserGenerator::new().generate_batch();
        let activities = ActivityGenerator::new().generate(&users);

        let zerocool = &activities[2];
        assert_eq!(zerocool.activity_type, ActivityType::Running);
        assert_eq!(zerocool.duration, 90);
        assert!(activities.iter().all(|a| a.duration > 0));
    }

    #[test]
    fn test_fewer_users_than_plan() {
        let users = UserGenerator::new().generate_batch();
        let activities = ActivityGenerator::new().generate(&users[..2]);

        assert_eq!(activities.len(), 2);
        assert_eq!(activities[1].activity_type, ActivityType::Crossfit);
    }
}
