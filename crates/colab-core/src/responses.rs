//! Response types returned as JSON by `colab` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Invitation, InvitationDetail, Project, User};

/// Response from `colab project list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

/// Response from `colab invitation list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InvitationListResponse {
    pub invitations: Vec<InvitationDetail>,
}

/// Response from `colab invitation respond`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InvitationResponse {
    pub message: String,
    pub invitation: Invitation,
}

/// Response from `colab user register` and `colab auth issue`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionResponse {
    pub user: User,
    pub token: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
