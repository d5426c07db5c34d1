//! Invitation workflow: invite, list pending, respond.
//!
//! ```text
//! pending → accepted   (adds a collaborator in the same transaction)
//!         → rejected
//! ```

use chrono::Utc;

use colab_core::entities::{Invitation, InvitationDetail};
use colab_core::enums::{CollaboratorRole, InvitationAction, InvitationStatus};
use colab_core::errors::CoreError;
use colab_core::guard::{require_invitee, require_owner};
use colab_core::ids::{InvitationId, ProjectId, UserId, is_authenticated};
use colab_core::requests::normalize_email;
use colab_core::responses::InvitationResponse;

use crate::error::{DatabaseError, ServiceError};
use crate::helpers::{parse_datetime, parse_enum, parse_optional_datetime};
use crate::repos::collaborator::{collaborator_exists, insert_collaborator};
use crate::repos::project::project_by_id;
use crate::repos::user::resolve_caller;
use crate::service::{ColabService, finish};

const SELECT_COLS: &str =
    "id, project_id, inviter_id, email, role, status, response_date, created_at";

const DETAIL_SELECT: &str = "SELECT i.id, i.project_id, p.title, i.inviter_id, u.email, \
     i.email, i.role, i.status, i.created_at \
     FROM invitations i \
     JOIN projects p ON p.id = i.project_id \
     JOIN users u ON u.id = i.inviter_id";

fn row_to_invitation(row: &libsql::Row) -> Result<Invitation, DatabaseError> {
    Ok(Invitation {
        id: row.get(0)?,
        project_id: row.get(1)?,
        inviter_id: row.get(2)?,
        email: row.get(3)?,
        role: parse_enum(&row.get::<String>(4)?)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        response_date: parse_optional_datetime(row.get::<Option<String>>(6)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

fn row_to_detail(row: &libsql::Row) -> Result<InvitationDetail, DatabaseError> {
    Ok(InvitationDetail {
        id: row.get(0)?,
        project_id: row.get(1)?,
        project_title: row.get(2)?,
        inviter_id: row.get(3)?,
        inviter_email: row.get(4)?,
        email: row.get(5)?,
        role: parse_enum(&row.get::<String>(6)?)?,
        status: parse_enum(&row.get::<String>(7)?)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

async fn invitation_by_id(
    conn: &libsql::Connection,
    project_id: ProjectId,
    invitation_id: InvitationId,
) -> Result<Invitation, ServiceError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM invitations WHERE id = ?1 AND project_id = ?2"),
            libsql::params![invitation_id, project_id],
        )
        .await?;
    let row = rows
        .next()
        .await?
        .ok_or_else(|| CoreError::not_found("invitation", invitation_id))?;
    Ok(row_to_invitation(&row)?)
}

async fn pending_exists(
    conn: &libsql::Connection,
    project_id: ProjectId,
    email: &str,
) -> Result<bool, ServiceError> {
    let mut rows = conn
        .query(
            "SELECT 1 FROM invitations WHERE project_id = ?1 AND email = ?2 AND status = 'pending'",
            libsql::params![project_id, email],
        )
        .await?;
    Ok(rows.next().await?.is_some())
}

async fn invite_in(
    conn: &libsql::Connection,
    project_id: ProjectId,
    caller: UserId,
    email: &str,
    role: CollaboratorRole,
) -> Result<Invitation, ServiceError> {
    let project = project_by_id(conn, project_id).await?;
    require_owner(&project, caller)?;
    if !role.is_invitable() {
        return Err(CoreError::Validation(format!(
            "role '{role}' cannot be granted by invitation (expected programmer or editor)"
        ))
        .into());
    }
    if collaborator_exists(conn, project_id, email).await? {
        return Err(CoreError::Conflict(format!(
            "'{email}' is already a collaborator on this project"
        ))
        .into());
    }
    if pending_exists(conn, project_id, email).await? {
        return Err(CoreError::Conflict(pending_message(email)).into());
    }

    let now = Utc::now();
    conn.execute(
        &format!(
            "INSERT INTO invitations ({SELECT_COLS}) VALUES (NULL, ?1, ?2, ?3, ?4, ?5, NULL, ?6)"
        ),
        libsql::params![
            project_id,
            caller,
            email,
            role.as_str(),
            InvitationStatus::Pending.as_str(),
            now.to_rfc3339()
        ],
    )
    .await
    .map_err(|e| ServiceError::from_insert(e, || pending_message(email)))?;

    Ok(Invitation {
        id: conn.last_insert_rowid(),
        project_id,
        inviter_id: caller,
        email: email.to_string(),
        role,
        status: InvitationStatus::Pending,
        response_date: None,
        created_at: now,
    })
}

fn pending_message(email: &str) -> String {
    format!("a pending invitation for '{email}' already exists")
}

async fn respond_in(
    conn: &libsql::Connection,
    project_id: ProjectId,
    invitation_id: InvitationId,
    caller: UserId,
    action: &str,
) -> Result<Invitation, ServiceError> {
    let user = resolve_caller(conn, caller).await?;
    let invitation = invitation_by_id(conn, project_id, invitation_id).await?;
    require_invitee(&invitation, &user.email)?;
    let action: InvitationAction = action.parse()?;

    let next = action.target_status();
    if !invitation.status.can_transition_to(next) {
        return Err(CoreError::InvalidTransition {
            entity_type: "invitation".into(),
            id: invitation_id.to_string(),
            from: invitation.status.to_string(),
            to: next.to_string(),
        }
        .into());
    }

    let now = Utc::now();
    let affected = conn
        .execute(
            "UPDATE invitations SET status = ?1, response_date = ?2 \
             WHERE id = ?3 AND status = 'pending'",
            libsql::params![next.as_str(), now.to_rfc3339(), invitation_id],
        )
        .await?;
    if affected == 0 {
        return Err(CoreError::Conflict(format!(
            "invitation {invitation_id} is no longer pending"
        ))
        .into());
    }

    if action == InvitationAction::Accept {
        insert_collaborator(conn, project_id, user.id, invitation.role).await?;
    }

    Ok(Invitation {
        status: next,
        response_date: Some(now),
        ..invitation
    })
}

impl ColabService {
    /// Invite `email` to join the project with `role`. Owner only.
    ///
    /// # Errors
    ///
    /// In check order: `Unauthorized` (anonymous caller), `Validation` (bad
    /// email), `NotFound` (project), `Forbidden` (not the owner), `Validation`
    /// (role not invitable), `Conflict` (already a collaborator, or a pending
    /// invitation exists).
    pub async fn invite_collaborator(
        &self,
        project_id: ProjectId,
        caller: UserId,
        email: &str,
        role: CollaboratorRole,
    ) -> Result<Invitation, ServiceError> {
        if !is_authenticated(caller) {
            return Err(CoreError::Unauthorized.into());
        }
        let email = normalize_email(email)?;

        let tx = self.db().begin().await?;
        let result = invite_in(&tx, project_id, caller, &email, role).await;
        let invitation = finish(tx, result).await?;
        tracing::info!(
            invitation_id = invitation.id,
            project_id,
            %role,
            "created invitation"
        );
        Ok(invitation)
    }

    /// Fetch one invitation scoped to its project.
    pub async fn get_invitation(
        &self,
        project_id: ProjectId,
        invitation_id: InvitationId,
    ) -> Result<Invitation, ServiceError> {
        invitation_by_id(&*self.db().conn().await, project_id, invitation_id).await
    }

    /// Pending invitations addressed to the caller's email, oldest first.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for an anonymous or unknown caller.
    pub async fn list_my_invitations(
        &self,
        caller: UserId,
    ) -> Result<Vec<InvitationDetail>, ServiceError> {
        let conn = self.db().conn().await;
        let user = resolve_caller(&conn, caller).await?;

        let mut rows = conn
            .query(
                &format!("{DETAIL_SELECT} WHERE i.email = ?1 AND i.status = 'pending' ORDER BY i.id"),
                [user.email.as_str()],
            )
            .await?;

        let mut invitations = Vec::new();
        while let Some(row) = rows.next().await? {
            invitations.push(row_to_detail(&row)?);
        }
        tracing::debug!(caller, count = invitations.len(), "listed pending invitations");
        Ok(invitations)
    }

    /// Accept or reject an invitation addressed to the caller.
    ///
    /// `action` is parsed after the invitee check, so a stranger probing with
    /// a bad action still sees `Forbidden`.
    ///
    /// # Errors
    ///
    /// In check order: `Unauthorized`, `NotFound`, `Forbidden`, `Validation`
    /// (unknown action), `Conflict` (not pending, lost race, or already a
    /// collaborator). Every failure leaves the invitation untouched.
    pub async fn respond_to_invitation(
        &self,
        project_id: ProjectId,
        invitation_id: InvitationId,
        caller: UserId,
        action: &str,
    ) -> Result<InvitationResponse, ServiceError> {
        if !is_authenticated(caller) {
            return Err(CoreError::Unauthorized.into());
        }

        let tx = self.db().begin().await?;
        let result = respond_in(&tx, project_id, invitation_id, caller, action).await;
        let invitation = finish(tx, result).await?;
        tracing::info!(
            invitation_id,
            project_id,
            status = %invitation.status,
            "responded to invitation"
        );

        Ok(InvitationResponse {
            message: format!("Invitation {} successfully", invitation.status),
            invitation,
        })
    }
}
