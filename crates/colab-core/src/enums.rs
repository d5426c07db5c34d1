//! Closed enumerations for projects, collaborators, and invitations.
//!
//! Every enum has a single string form shared by serde, SQL storage, and the
//! CLI. `FromStr` implementations reject unknown values with
//! [`CoreError::Validation`] so bad input is refused before any write.
//! Status enums with state machines provide `allowed_next_states()`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

fn unknown_value(kind: &str, value: &str, allowed: &[&str]) -> CoreError {
    CoreError::Validation(format!(
        "invalid {kind} '{value}' (expected one of: {})",
        allowed.join(", ")
    ))
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Who may see a project. Only `private` exists today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Private,
}

impl Visibility {
    pub const ALL: &'static [Self] = &[Self::Private];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| unknown_value("visibility", s, &["private"]))
    }
}

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Progress of a research project. The owner may set any value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Open,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub const ALL: &'static [Self] = &[Self::Open, Self::InProgress, Self::Completed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| unknown_value("status", s, &["open", "in-progress", "completed"]))
    }
}

// ---------------------------------------------------------------------------
// CollaboratorRole
// ---------------------------------------------------------------------------

/// Role a collaborator holds on a project.
///
/// `Owner` is granted only at project creation; invitations may carry
/// `Programmer` or `Editor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CollaboratorRole {
    Owner,
    Programmer,
    Editor,
}

impl CollaboratorRole {
    pub const ALL: &'static [Self] = &[Self::Owner, Self::Programmer, Self::Editor];

    /// Whether an invitation may request this role.
    #[must_use]
    pub const fn is_invitable(self) -> bool {
        matches!(self, Self::Programmer | Self::Editor)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Programmer => "programmer",
            Self::Editor => "editor",
        }
    }
}

impl fmt::Display for CollaboratorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollaboratorRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| unknown_value("role", s, &["owner", "programmer", "editor"]))
    }
}

// ---------------------------------------------------------------------------
// InvitationStatus
// ---------------------------------------------------------------------------

/// Status of a collaboration invitation.
///
/// ```text
/// pending → accepted
///         → rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl InvitationStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Accepted, Self::Rejected],
            Self::Accepted | Self::Rejected => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_next_states().is_empty()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InvitationAction
// ---------------------------------------------------------------------------

/// What an invitee does with a pending invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InvitationAction {
    Accept,
    Reject,
}

impl InvitationAction {
    /// The status an invitation ends in after this action.
    #[must_use]
    pub const fn target_status(self) -> InvitationStatus {
        match self {
            Self::Accept => InvitationStatus::Accepted,
            Self::Reject => InvitationStatus::Rejected,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for InvitationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvitationAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            other => Err(unknown_value("action", other, &["accept", "reject"])),
        }
    }
}
