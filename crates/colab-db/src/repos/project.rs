//! Project registry and the create-with-owner transaction.

use chrono::Utc;

use colab_core::entities::{Project, decode_skills, encode_skills};
use colab_core::enums::CollaboratorRole;
use colab_core::errors::CoreError;
use colab_core::guard::require_owner;
use colab_core::ids::{ProjectId, UserId, is_authenticated};
use colab_core::requests::NewProject;

use crate::error::{DatabaseError, ServiceError};
use crate::helpers::{parse_datetime, parse_enum};
use crate::repos::collaborator::insert_collaborator;
use crate::repos::user::resolve_caller;
use crate::service::{ColabService, finish};
use crate::updates::project::ProjectUpdate;

const SELECT_COLS: &str = "id, title, description, owner_id, required_skills, visibility, \
     status, created_at, updated_at";

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        owner_id: row.get(3)?,
        required_skills: decode_skills(&row.get::<String>(4)?),
        visibility: parse_enum(&row.get::<String>(5)?)?,
        status: parse_enum(&row.get::<String>(6)?)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

/// Insert one project row. Does not add the owner collaborator.
///
/// `req` must already be validated.
pub(crate) async fn insert_project(
    conn: &libsql::Connection,
    req: &NewProject,
    owner_id: UserId,
) -> Result<Project, ServiceError> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO projects (title, description, owner_id, required_skills, visibility, \
         status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        libsql::params![
            req.title.as_str(),
            req.description.as_str(),
            owner_id,
            encode_skills(&req.required_skills),
            req.visibility.as_str(),
            req.status.as_str(),
            now.to_rfc3339(),
            now.to_rfc3339()
        ],
    )
    .await?;

    Ok(Project {
        id: conn.last_insert_rowid(),
        title: req.title.clone(),
        description: req.description.clone(),
        owner_id,
        required_skills: req.required_skills.clone(),
        visibility: req.visibility,
        status: req.status,
        created_at: now,
        updated_at: now,
    })
}

pub(crate) async fn project_by_id(
    conn: &libsql::Connection,
    id: ProjectId,
) -> Result<Project, ServiceError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM projects WHERE id = ?1"), [id])
        .await?;
    let row = rows
        .next()
        .await?
        .ok_or_else(|| CoreError::not_found("project", id))?;
    Ok(row_to_project(&row)?)
}

async fn create_with_owner(
    conn: &libsql::Connection,
    req: &NewProject,
    caller: UserId,
) -> Result<Project, ServiceError> {
    resolve_caller(conn, caller).await?;
    let project = insert_project(conn, req, caller).await?;
    insert_collaborator(conn, project.id, caller, CollaboratorRole::Owner).await?;
    Ok(project)
}

async fn update_in(
    conn: &libsql::Connection,
    project_id: ProjectId,
    caller: UserId,
    update: &ProjectUpdate,
) -> Result<Project, ServiceError> {
    let current = project_by_id(conn, project_id).await?;
    require_owner(&current, caller)?;
    if update.is_empty() {
        return Ok(current);
    }

    let mut sets = Vec::new();
    let mut params: Vec<libsql::Value> = Vec::new();
    let mut idx = 1usize;

    if let Some(ref description) = update.description {
        sets.push(format!("description = ?{idx}"));
        params.push(description.clone().into());
        idx += 1;
    }
    if let Some(status) = update.status {
        sets.push(format!("status = ?{idx}"));
        params.push(status.as_str().into());
        idx += 1;
    }

    sets.push(format!("updated_at = ?{idx}"));
    params.push(Utc::now().to_rfc3339().into());
    idx += 1;

    params.push(project_id.into());
    let sql = format!("UPDATE projects SET {} WHERE id = ?{idx}", sets.join(", "));
    conn.execute(&sql, libsql::params_from_iter(params)).await?;

    project_by_id(conn, project_id).await
}

impl ColabService {
    /// Create a project and its `owner` collaborator row atomically.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for an anonymous or unknown caller, `Validation` for a
    /// blank title. Any store failure rolls back both rows.
    pub async fn create_project(
        &self,
        req: NewProject,
        caller: UserId,
    ) -> Result<Project, ServiceError> {
        if !is_authenticated(caller) {
            return Err(CoreError::Unauthorized.into());
        }
        let req = req.validated()?;

        let tx = self.db().begin().await?;
        let result = create_with_owner(&tx, &req, caller).await;
        let project = finish(tx, result).await?;
        tracing::info!(project_id = project.id, owner_id = caller, "created project");
        Ok(project)
    }

    pub async fn get_project(&self, id: ProjectId) -> Result<Project, ServiceError> {
        project_by_id(&*self.db().conn().await, id).await
    }

    /// Every project in id order, regardless of visibility.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ServiceError> {
        let conn = self.db().conn().await;
        let mut rows = conn
            .query(&format!("SELECT {SELECT_COLS} FROM projects ORDER BY id"), ())
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        tracing::debug!(count = projects.len(), "listed projects");
        Ok(projects)
    }

    /// Change description and/or status. Owner only.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for an anonymous caller, `NotFound` for an unknown
    /// project, `Forbidden` for anyone but the owner.
    pub async fn update_project(
        &self,
        project_id: ProjectId,
        caller: UserId,
        update: ProjectUpdate,
    ) -> Result<Project, ServiceError> {
        if !is_authenticated(caller) {
            return Err(CoreError::Unauthorized.into());
        }

        let tx = self.db().begin().await?;
        let result = update_in(&tx, project_id, caller, &update).await;
        let project = finish(tx, result).await?;
        tracing::info!(project_id, "updated project");
        Ok(project)
    }
}
