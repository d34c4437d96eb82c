use std::fmt;

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Collection names as they appear in the database.
pub mod collections {
    pub const USERS: &str = "users";
    pub const TEAMS: &str = "teams";
    pub const ACTIVITY: &str = "activity";
    pub const LEADERBOARD: &str = "leaderboard";
    pub const WORKOUTS: &str = "workouts";
}

/// A record type stored in its own collection.
pub trait CollectionDocument: Serialize + DeserializeOwned + Unpin + Send + Sync {
    const COLLECTION: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    /// Stored as given; fixtures only.
    pub password: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    /// User ids, in join order.
    pub members: Vec<ObjectId>,
}

impl Team {
    pub fn new(name: impl Into<String>, members: Vec<ObjectId>) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            members,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Cycling,
    Crossfit,
    Running,
    Strength,
    Swimming,
}

impl ActivityType {
    /// Returns the label stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Cycling => "Cycling",
            ActivityType::Crossfit => "Crossfit",
            ActivityType::Running => "Running",
            ActivityType::Strength => "Strength",
            ActivityType::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub activity_type: ActivityType,
    /// Minutes.
    pub duration: i32,
}

impl Activity {
    pub fn new(user: ObjectId, activity_type: ActivityType, duration: i32) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            activity_type,
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    pub score: i32,
}

impl LeaderboardEntry {
    pub fn new(user: ObjectId, score: i32) -> Self {
        Self {
            id: ObjectId::new(),
            user,
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
}

impl Workout {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            description: description.into(),
        }
    }
}

macro_rules! collection_document {
    ($($ty:ty => $name:expr),+ $(,)?) => {
        $(
            impl CollectionDocument for $ty {
                const COLLECTION: &'static str = $name;
            }
        )+
    };
}

collection_document! {
    User => collections::USERS,
    Team => collections::TEAMS,
    Activity => collections::ACTIVITY,
    LeaderboardEntry => collections::LEADERBOARD,
    Workout => collections::WORKOUTS,
}
