//! Collaborator roster.

use chrono::Utc;

use colab_core::entities::Collaborator;
use colab_core::enums::CollaboratorRole;
use colab_core::ids::{ProjectId, UserId};
use colab_core::requests::normalize_email;

use crate::error::{DatabaseError, ServiceError};
use crate::helpers::{parse_datetime, parse_enum};
use crate::repos::project::project_by_id;
use crate::service::ColabService;

const SELECT_COLS: &str = "project_id, user_id, role, joined_at";

fn row_to_collaborator(row: &libsql::Row) -> Result<Collaborator, DatabaseError> {
    Ok(Collaborator {
        project_id: row.get(0)?,
        user_id: row.get(1)?,
        role: parse_enum(&row.get::<String>(2)?)?,
        joined_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

/// Insert a membership row. The `UNIQUE(project_id, user_id)` constraint is
/// the only duplicate check.
pub(crate) async fn insert_collaborator(
    conn: &libsql::Connection,
    project_id: ProjectId,
    user_id: UserId,
    role: CollaboratorRole,
) -> Result<Collaborator, ServiceError> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO collaborators (project_id, user_id, role, joined_at) VALUES (?1, ?2, ?3, ?4)",
        libsql::params![project_id, user_id, role.as_str(), now.to_rfc3339()],
    )
    .await
    .map_err(|e| {
        ServiceError::from_insert(e, || {
            format!("user {user_id} is already a collaborator on project {project_id}")
        })
    })?;

    Ok(Collaborator {
        project_id,
        user_id,
        role,
        joined_at: now,
    })
}

/// Membership check by email. `email` must already be normalized; an email
/// with no account is never a collaborator.
pub(crate) async fn collaborator_exists(
    conn: &libsql::Connection,
    project_id: ProjectId,
    email: &str,
) -> Result<bool, ServiceError> {
    let mut rows = conn
        .query(
            "SELECT 1 FROM collaborators c JOIN users u ON u.id = c.user_id \
             WHERE c.project_id = ?1 AND u.email = ?2",
            libsql::params![project_id, email],
        )
        .await?;
    Ok(rows.next().await?.is_some())
}

impl ColabService {
    /// Add `user_id` to the project roster.
    ///
    /// # Errors
    ///
    /// `Conflict` if the user is already on the roster.
    pub async fn add_collaborator(
        &self,
        project_id: ProjectId,
        user_id: UserId,
        role: CollaboratorRole,
    ) -> Result<Collaborator, ServiceError> {
        let conn = self.db().conn().await;
        let collaborator = insert_collaborator(&conn, project_id, user_id, role).await?;
        tracing::info!(project_id, user_id, %role, "added collaborator");
        Ok(collaborator)
    }

    /// Whether the account with `email` is on the project roster.
    pub async fn is_collaborator(
        &self,
        project_id: ProjectId,
        email: &str,
    ) -> Result<bool, ServiceError> {
        let Ok(email) = normalize_email(email) else {
            return Ok(false);
        };
        collaborator_exists(&*self.db().conn().await, project_id, &email).await
    }

    /// Roster in join order.
    ///
    /// # Errors
    ///
    /// `NotFound` if the project does not exist.
    pub async fn list_collaborators(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<Collaborator>, ServiceError> {
        let conn = self.db().conn().await;
        project_by_id(&conn, project_id).await?;

        let mut rows = conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM collaborators WHERE project_id = ?1 ORDER BY rowid"
                ),
                [project_id],
            )
            .await?;

        let mut collaborators = Vec::new();
        while let Some(row) = rows.next().await? {
            collaborators.push(row_to_collaborator(&row)?);
        }
        Ok(collaborators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{project_owned_by, register, test_service};
    use colab_core::errors::ErrorKind;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn add_and_list_in_join_order() {
        let svc = test_service().await;
        let owner = register(&svc, "owner@lab.org").await;
        let ada = register(&svc, "ada@lab.org").await;
        let bob = register(&svc, "bob@lab.org").await;
        let project = project_owned_by(&svc, &owner).await;

        svc.add_collaborator(project.id, bob.id, CollaboratorRole::Editor)
            .await
            .unwrap();
        svc.add_collaborator(project.id, ada.id, CollaboratorRole::Programmer)
            .await
            .unwrap();

        let ids: Vec<_> = svc
            .list_collaborators(project.id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| (c.user_id, c.role))
            .collect();
        assert_eq!(
            ids,
            vec![
                (owner.id, CollaboratorRole::Owner),
                (bob.id, CollaboratorRole::Editor),
                (ada.id, CollaboratorRole::Programmer),
            ]
        );
    }

    #[tokio::test]
    async fn duplicate_membership_conflicts() {
        let svc = test_service().await;
        let owner = register(&svc, "owner@lab.org").await;
        let project = project_owned_by(&svc, &owner).await;

        let err = svc
            .add_collaborator(project.id, owner.id, CollaboratorRole::Editor)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn second_owner_is_rejected() {
        let svc = test_service().await;
        let owner = register(&svc, "owner@lab.org").await;
        let other = register(&svc, "other@lab.org").await;
        let project = project_owned_by(&svc, &owner).await;

        let err = svc
            .add_collaborator(project.id, other.id, CollaboratorRole::Owner)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn is_collaborator_by_email() {
        let svc = test_service().await;
        let owner = register(&svc, "owner@lab.org").await;
        register(&svc, "outsider@lab.org").await;
        let project = project_owned_by(&svc, &owner).await;

        assert!(svc.is_collaborator(project.id, "OWNER@lab.org").await.unwrap());
        assert!(!svc.is_collaborator(project.id, "outsider@lab.org").await.unwrap());
        assert!(!svc.is_collaborator(project.id, "ghost@lab.org").await.unwrap());
    }

    #[tokio::test]
    async fn roster_of_missing_project_is_not_found() {
        let svc = test_service().await;
        let err = svc.list_collaborators(12).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
