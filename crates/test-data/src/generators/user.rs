//! Fixture users.

use octofit::models::User;

/// Usernames of the fixture users, in insertion order.
pub const USERNAMES: [&str; 5] = [
    "thundergod",
    "metalgeek",
    "zerocool",
    "crashoverride",
    "sleeptoken",
];

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// Usernames to create, in order.
    pub usernames: Vec<String>,
    /// Domain appended to each username to form the email.
    pub email_domain: String,
    /// Suffix appended to each username to form the password.
    pub password_suffix: String,
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            usernames: USERNAMES.iter().map(|u| u.to_string()).collect(),
            email_domain: "mhigh.edu".to_string(),
            password_suffix: "password".to_string(),
        }
    }
}

/// Builds fixture users with freshly generated ids.
pub struct UserGenerator {
    config: UserGenConfig,
}

impl UserGenerator {
    /// Creates a new user generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: UserGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single user from its username.
    pub fn generate(&self, username: &str) -> User {
        User::new(
            username,
            format!("{username}@{}", self.config.email_domain),
            format!("{username}{}", self.config.password_suffix),
        )
    }

    /// Generates every configured user, in order.
    pub fn generate_batch(&self) -> Vec<User> {
        self.config
            .usernames
            .iter()
            .map(|username| self.generate(username))
            .collect()
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user() {
        let user = UserGenerator::new().generate("zerocool");

        assert_eq!(user.username, "zerocool");
        assert_eq!(user.email, "zerocool@mhigh.edu");
        assert_eq!(user.password, "zerocoolpassword");
    }

    #[test]
    fn test_generate_batch() {
        let users = UserGenerator::new().generate_batch();

        assert_eq!(users.len(), 5);
        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, USERNAMES);

        // All ids should be unique
        let ids: std::collections::HashSet<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_custom_config() {
        let user_gen = UserGenerator::with_config(UserGenConfig {
            usernames: vec!["acidburn".to_string()],
            email_domain: "example.org".to_string(),
            ..Default::default()
        });
        let users = user_gen.generate_batch();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "acidburn@example.org");
        assert_eq!(users[0].password, "acidburnpassword");
    }
}
