use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CollaboratorRole;
use crate::ids::{ProjectId, UserId};

/// Membership of a user on a project. At most one per (project, user).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Collaborator {
    pub project_id: ProjectId,
    pub user_id: UserId,
    pub role: CollaboratorRole,
    pub joined_at: DateTime<Utc>,
}
