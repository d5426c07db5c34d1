use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A registered account. Identified by a unique, normalized email.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Free-text profile attached to every account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub full_name: String,
    pub bio: String,
    pub affiliation: String,
    pub skills: String,
    pub role: String,
    pub projects: String,
    pub location: String,
    pub github: String,
}

/// Account email plus profile, as returned by profile lookups.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfileView {
    pub user_id: UserId,
    pub email: String,
    #[serde(flatten)]
    pub profile: UserProfile,
    pub updated_at: DateTime<Utc>,
}
