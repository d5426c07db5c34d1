//! Error types for colab-db.

use colab_core::errors::{CoreError, ErrorKind};
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    /// Whether this error is a rejected `UNIQUE` constraint.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::LibSql(e) if is_unique_violation(e))
    }
}

/// Detect SQLite `UNIQUE` constraint failures (including partial unique indexes).
///
/// libSQL surfaces these as a generic failure; the message is the only stable
/// discriminator.
pub fn is_unique_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

/// Error returned by every `ColabService` operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] DatabaseError),
}

impl ServiceError {
    /// Externally observable category. All store failures are `Store`.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(e) => e.kind(),
            Self::Store(_) => ErrorKind::Store,
        }
    }

    /// Map a unique-constraint rejection to `Conflict`, leaving other errors alone.
    pub(crate) fn from_insert(e: libsql::Error, conflict: impl FnOnce() -> String) -> Self {
        if is_unique_violation(&e) {
            Self::Core(CoreError::Conflict(conflict()))
        } else {
            Self::Store(DatabaseError::LibSql(e))
        }
    }
}

impl From<libsql::Error> for ServiceError {
    fn from(e: libsql::Error) -> Self {
        Self::Store(DatabaseError::LibSql(e))
    }
}
