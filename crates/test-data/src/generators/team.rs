//! Fixture teams.

use std::ops::Range;

use octofit::models::{Team, User};

/// A team and the slice of the user list that belongs to it.
#[derive(Debug, Clone)]
pub struct TeamSpec {
    pub name: &'static str,
    /// Indices into the generated user list.
    pub members: Range<usize>,
}

pub const TEAM_ROSTER: &[TeamSpec] = &[
    TeamSpec {
        name: "Blue Team",
        members: 0..2,
    },
    TeamSpec {
        name: "Gold Team",
        members: 2..5,
    },
];

/// Builds teams that reference already-generated users.
pub struct TeamGenerator {
    roster: &'static [TeamSpec],
}

impl TeamGenerator {
    pub fn new() -> Self {
        Self {
            roster: TEAM_ROSTER,
        }
    }

    pub fn with_roster(roster: &'static [TeamSpec]) -> Self {
        Self { roster }
    }

    /// Generates one team per roster entry.
    ///
    /// Roster indices past the end of `users` are dropped from the team.
    pub fn generate(&self, users: &[User]) -> Vec<Team> {
        self.roster
            .iter()
            .map(|spec| {
                let end = spec.members.end.min(users.len());
                let start = spec.members.start.min(end);
                let members = users[start..end].iter().map(|u| u.id).collect();
                Team::new(spec.name, members)
            })
            .collect()
    }
}

impl Default for TeamGenerator {
    fn default() -> Self {
        Self::new()
    }
}
