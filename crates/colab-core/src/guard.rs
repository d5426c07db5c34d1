//! Authorization guard.
//!
//! Pure checks over already-loaded state. Nothing here touches the store, so
//! every rule is testable without a database.

use crate::entities::{Invitation, Project};
use crate::errors::CoreError;
use crate::ids::UserId;

/// Pass iff `caller` owns `project`.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` for any other caller.
pub fn require_owner(project: &Project, caller: UserId) -> Result<(), CoreError> {
    if project.owner_id == caller {
        return Ok(());
    }
    tracing::debug!(project_id = project.id, caller, "owner check denied");
    Err(CoreError::Forbidden(
        "only the project owner may perform this action".into(),
    ))
}

/// Pass iff the resource belongs to `caller`.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` when the IDs differ.
pub fn require_self(resource_user: UserId, caller: UserId) -> Result<(), CoreError> {
    if resource_user == caller {
        return Ok(());
    }
    tracing::debug!(resource_user, caller, "self check denied");
    Err(CoreError::Forbidden(
        "you can only modify your own resources".into(),
    ))
}

/// Pass iff `invitation` is addressed to `caller_email`.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` when the invitation targets another email.
pub fn require_invitee(invitation: &Invitation, caller_email: &str) -> Result<(), CoreError> {
    if invitation.email == caller_email {
        return Ok(());
    }
    tracing::debug!(invitation_id = invitation.id, "invitee check denied");
    Err(CoreError::Forbidden(
        "not authorized to respond to this invitation".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{CollaboratorRole, InvitationStatus, ProjectStatus, Visibility};
    use crate::errors::ErrorKind;
    use chrono::Utc;

    fn project(owner_id: UserId) -> Project {
        Project {
            id: 1,
            title: "Protein folding".into(),
            description: String::new(),
            owner_id,
            required_skills: vec![],
            visibility: Visibility::Private,
            status: ProjectStatus::Open,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn invitation(email: &str) -> Invitation {
        Invitation {
            id: 9,
            project_id: 1,
            inviter_id: 1,
            email: email.into(),
            role: CollaboratorRole::Editor,
            status: InvitationStatus::Pending,
            response_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn owner_passes() {
        assert!(require_owner(&project(5), 5).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let err = require_owner(&project(5), 6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    #[test]
    fn anonymous_is_never_owner() {
        assert!(require_owner(&project(5), 0).is_err());
    }

    #[test]
    fn self_check() {
        assert!(require_self(3, 3).is_ok());
        assert_eq!(require_self(3, 4).unwrap_err().kind(), ErrorKind::Forbidden);
    }

    #[test]
    fn invitee_check_compares_email() {
        let inv = invitation("u@x.com");
        assert!(require_invitee(&inv, "u@x.com").is_ok());
        assert_eq!(
            require_invitee(&inv, "someone@else.org").unwrap_err().kind(),
            ErrorKind::Forbidden
        );
    }
}
