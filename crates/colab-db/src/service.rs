//! Service layer hosting every Colab operation.
//!
//! `ColabService` wraps `ColabDb`; all repo methods are implemented as
//! `impl ColabService` blocks under `crate::repos`.

use colab_config::DatabaseConfig;

use crate::{ColabDb, WriteTx};
use crate::error::{DatabaseError, ServiceError};

/// Entry point for all store-backed operations.
///
/// Every mutating method follows this protocol:
/// 1. Validate input that needs no state
/// 2. Begin an immediate transaction
/// 3. Load state, run guards, write
/// 4. Commit, or roll back on any error
pub struct ColabService {
    db: ColabDb,
}

impl ColabService {
    /// Create a new service over a local database.
    ///
    /// `db_path` may be `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(ColabDb::open_local(db_path).await?))
    }

    /// Open the database described by the `[database]` config section.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(ColabDb::open(config).await?))
    }

    #[must_use]
    pub const fn from_db(db: ColabDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ColabDb {
        &self.db
    }
}

/// Commit `tx` if `result` is `Ok`, otherwise roll it back and return the
/// original error.
pub(crate) async fn finish<T>(
    tx: WriteTx<'_>,
    result: Result<T, ServiceError>,
) -> Result<T, ServiceError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(error) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(%rollback, %error, "transaction rollback failed");
            }
            Err(error)
        }
    }
}
