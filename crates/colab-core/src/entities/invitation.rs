use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CollaboratorRole, InvitationStatus};
use crate::ids::{InvitationId, ProjectId, UserId};

/// An offer of collaborator membership addressed to an email.
///
/// The email is resolved to a user only when the invitee responds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Invitation {
    pub id: InvitationId,
    pub project_id: ProjectId,
    pub inviter_id: UserId,
    pub email: String,
    pub role: CollaboratorRole,
    pub status: InvitationStatus,
    /// Set once, when the invitee accepts or rejects.
    pub response_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A pending invitation joined with its project title and inviter.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InvitationDetail {
    pub id: InvitationId,
    pub project_id: ProjectId,
    pub project_title: String,
    pub inviter_id: UserId,
    pub inviter_email: String,
    pub email: String,
    pub role: CollaboratorRole,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
}
