use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ProjectStatus, Visibility};
use crate::ids::{ProjectId, UserId};

/// A research project. `owner_id` never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub owner_id: UserId,
    /// Ordered; stored as a JSON array in a single TEXT column.
    pub required_skills: Vec<String>,
    pub visibility: Visibility,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Serialize required skills for storage.
#[must_use]
pub fn encode_skills(skills: &[String]) -> String {
    // A slice of strings always serializes.
    serde_json::to_string(skills).unwrap_or_else(|_| String::from("[]"))
}

/// Decode the stored skills column.
///
/// Malformed or legacy values decode to an empty list instead of failing, so
/// one bad row never breaks a project listing.
#[must_use]
pub fn decode_skills(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(skills) => skills,
        Err(error) => {
            tracing::warn!(%error, "unreadable required_skills value; treating as empty");
            Vec::new()
        }
    }
}
