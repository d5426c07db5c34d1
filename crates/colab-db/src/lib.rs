//! # colab-db
//!
//! libSQL store for Colab: accounts, projects, collaborators and invitations.
//!
//! [`ColabDb`] owns the connection and schema. [`service::ColabService`] hosts
//! every operation as `impl ColabService` blocks under [`repos`]; each
//! mutating operation runs inside one `BEGIN IMMEDIATE` transaction so
//! concurrent writers on the same file serialize on the database lock.
//!
//! Within one process the connection is shared, so every statement goes
//! through a [`ConnGuard`] or [`WriteTx`] that holds the connection lock.
//! A transaction owns the connection from `BEGIN` to `COMMIT`/`ROLLBACK`.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;
pub mod updates;

use std::ops::Deref;
use std::time::Duration;

use colab_config::DatabaseConfig;
use error::DatabaseError;
use libsql::{Builder, TransactionBehavior};
use tokio::sync::{Mutex, MutexGuard};

/// Wait this long for a competing writer before giving up with `SQLITE_BUSY`.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Central database handle for all Colab state.
///
/// Wraps a libSQL database and a single connection. Opened once by the entry
/// point and moved into `ColabService`, which may be shared across tasks.
pub struct ColabDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    lock: Mutex<()>,
}

/// Exclusive use of the connection outside a transaction.
pub struct ConnGuard<'a> {
    conn: &'a libsql::Connection,
    _guard: MutexGuard<'a, ()>,
}

impl Deref for ConnGuard<'_> {
    type Target = libsql::Connection;

    fn deref(&self) -> &libsql::Connection {
        self.conn
    }
}

/// An open `BEGIN IMMEDIATE` transaction. Holds the connection lock until
/// [`commit`](Self::commit) or [`rollback`](Self::rollback).
pub struct WriteTx<'a> {
    tx: libsql::Transaction,
    _guard: MutexGuard<'a, ()>,
}

impl Deref for WriteTx<'_> {
    type Target = libsql::Connection;

    fn deref(&self) -> &libsql::Connection {
        &self.tx
    }
}

impl WriteTx<'_> {
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the commit fails.
    pub async fn commit(self) -> Result<(), DatabaseError> {
        let Self { tx, _guard } = self;
        tx.commit().await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the rollback fails.
    pub async fn rollback(self) -> Result<(), DatabaseError> {
        let Self { tx, _guard } = self;
        tx.rollback().await?;
        Ok(())
    }
}

impl ColabDb {
    /// Open a local database at the given path with the default busy timeout.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open_local_with_timeout(path, DEFAULT_BUSY_TIMEOUT).await
    }

    /// Open using the `[database]` config section.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open_local`].
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Self::open_local_with_timeout(&config.path, config.busy_timeout()).await
    }

    /// Open a local database, waiting up to `busy_timeout` on a locked file.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open_local`].
    pub async fn open_local_with_timeout(
        path: &str,
        busy_timeout: Duration,
    ) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        // busy_timeout echoes the new value as a row, so it goes through query.
        let mut rows = conn
            .query(
                &format!("PRAGMA busy_timeout = {}", busy_timeout.as_millis()),
                (),
            )
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA busy_timeout: {e}")))?;
        rows.next().await?;
        drop(rows);

        let colab_db = Self {
            db,
            conn,
            lock: Mutex::new(()),
        };
        colab_db.run_migrations().await?;
        tracing::debug!(path, ?busy_timeout, "opened database");
        Ok(colab_db)
    }

    /// Wait for the connection, then use it for direct queries.
    ///
    /// Never call this while holding a [`WriteTx`] from the same handle; the
    /// lock is not reentrant.
    pub async fn conn(&self) -> ConnGuard<'_> {
        ConnGuard {
            conn: &self.conn,
            _guard: self.lock.lock().await,
        }
    }

    /// Begin a write transaction that takes the database lock up front.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the lock cannot be acquired within
    /// the busy timeout.
    pub async fn begin(&self) -> Result<WriteTx<'_>, DatabaseError> {
        let guard = self.lock.lock().await;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .await?;
        Ok(WriteTx { tx, _guard: guard })
    }
}
