//! Account and profile repository.

use chrono::Utc;

use colab_core::entities::{ProfileView, User, UserProfile};
use colab_core::errors::CoreError;
use colab_core::guard::require_self;
use colab_core::ids::{UserId, is_authenticated};
use colab_core::requests::normalize_email;

use crate::error::{DatabaseError, ServiceError};
use crate::helpers::parse_datetime;
use crate::service::{ColabService, finish};
use crate::updates::profile::ProfileUpdate;

const SELECT_COLS: &str = "id, email, created_at";

const PROFILE_SELECT: &str = "SELECT u.id, u.email, p.full_name, p.bio, p.affiliation, \
     p.skills, p.role, p.projects, p.location, p.github, p.updated_at \
     FROM users u JOIN user_profiles p ON p.user_id = u.id";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

fn row_to_profile_view(row: &libsql::Row) -> Result<ProfileView, DatabaseError> {
    Ok(ProfileView {
        user_id: row.get(0)?,
        email: row.get(1)?,
        profile: UserProfile {
            full_name: row.get(2)?,
            bio: row.get(3)?,
            affiliation: row.get(4)?,
            skills: row.get(5)?,
            role: row.get(6)?,
            projects: row.get(7)?,
            location: row.get(8)?,
            github: row.get(9)?,
        },
        updated_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

pub(crate) async fn user_by_id(
    conn: &libsql::Connection,
    id: UserId,
) -> Result<Option<User>, ServiceError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_user(&row)?)),
        None => Ok(None),
    }
}

/// `email` must already be normalized.
pub(crate) async fn user_by_email(
    conn: &libsql::Connection,
    email: &str,
) -> Result<Option<User>, ServiceError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM users WHERE email = ?1"), [email])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_user(&row)?)),
        None => Ok(None),
    }
}

/// Resolve the caller's account. Anonymous or unknown callers are `Unauthorized`.
pub(crate) async fn resolve_caller(
    conn: &libsql::Connection,
    caller: UserId,
) -> Result<User, ServiceError> {
    if !is_authenticated(caller) {
        return Err(CoreError::Unauthorized.into());
    }
    user_by_id(conn, caller).await?.ok_or_else(|| {
        tracing::debug!(caller, "caller has no account");
        CoreError::Unauthorized.into()
    })
}

async fn insert_user(conn: &libsql::Connection, email: &str) -> Result<User, ServiceError> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO users (email, created_at) VALUES (?1, ?2)",
        libsql::params![email, now.to_rfc3339()],
    )
    .await
    .map_err(|e| ServiceError::from_insert(e, || format!("an account for '{email}' already exists")))?;
    let id = conn.last_insert_rowid();

    conn.execute(
        "INSERT INTO user_profiles (user_id, updated_at) VALUES (?1, ?2)",
        libsql::params![id, now.to_rfc3339()],
    )
    .await?;

    Ok(User {
        id,
        email: email.to_string(),
        created_at: now,
    })
}

async fn load_profile(
    conn: &libsql::Connection,
    user_id: UserId,
) -> Result<ProfileView, ServiceError> {
    let mut rows = conn
        .query(&format!("{PROFILE_SELECT} WHERE u.id = ?1"), [user_id])
        .await?;
    let row = rows
        .next()
        .await?
        .ok_or_else(|| CoreError::not_found("user", user_id))?;
    Ok(row_to_profile_view(&row)?)
}

async fn update_profile_in(
    conn: &libsql::Connection,
    user_id: UserId,
    update: &ProfileUpdate,
) -> Result<ProfileView, ServiceError> {
    let current = load_profile(conn, user_id).await?;
    let assignments = update.assignments();
    if assignments.is_empty() {
        return Ok(current);
    }

    let mut sets = Vec::new();
    let mut params: Vec<libsql::Value> = Vec::new();
    let mut idx = 1usize;

    for (column, value) in assignments {
        sets.push(format!("{column} = ?{idx}"));
        params.push(value.into());
        idx += 1;
    }

    sets.push(format!("updated_at = ?{idx}"));
    params.push(Utc::now().to_rfc3339().into());
    idx += 1;

    params.push(user_id.into());
    let sql = format!(
        "UPDATE user_profiles SET {} WHERE user_id = ?{idx}",
        sets.join(", ")
    );
    conn.execute(&sql, libsql::params_from_iter(params)).await?;

    load_profile(conn, user_id).await
}

impl ColabService {
    /// Create an account and its empty profile.
    ///
    /// # Errors
    ///
    /// `Validation` for a malformed email, `Conflict` if it is taken.
    pub async fn register_user(&self, email: &str) -> Result<User, ServiceError> {
        let email = normalize_email(email)?;
        let tx = self.db().begin().await?;
        let result = insert_user(&tx, &email).await;
        let user = finish(tx, result).await?;
        tracing::info!(user_id = user.id, "registered user");
        Ok(user)
    }

    pub async fn get_user(&self, id: UserId) -> Result<User, ServiceError> {
        user_by_id(&*self.db().conn().await, id)
            .await?
            .ok_or_else(|| CoreError::not_found("user", id).into())
    }

    /// Look up an account by email. Malformed emails simply match nothing.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        let Ok(email) = normalize_email(email) else {
            return Ok(None);
        };
        user_by_email(&*self.db().conn().await, &email).await
    }

    pub async fn get_profile(&self, user_id: UserId) -> Result<ProfileView, ServiceError> {
        load_profile(&*self.db().conn().await, user_id).await
    }

    /// Apply `update` to the caller's own profile.
    ///
    /// # Errors
    ///
    /// `Forbidden` when `caller` is not `user_id`, `NotFound` for an unknown user.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        caller: UserId,
        update: ProfileUpdate,
    ) -> Result<ProfileView, ServiceError> {
        require_self(user_id, caller)?;
        let tx = self.db().begin().await?;
        let result = update_profile_in(&tx, user_id, &update).await;
        let view = finish(tx, result).await?;
        tracing::info!(user_id, "updated profile");
        Ok(view)
    }
}
