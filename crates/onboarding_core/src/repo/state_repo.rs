//! State blob repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and save the whole `AppState` as one JSON value under a key.
//! - Keep SQL and serialization details inside the persistence boundary.
//!
//! # Invariants
//! - `save` replaces the previous blob for the same key atomically.
//! - A blob that does not deserialize is reported as `InvalidData`, never
//!   silently replaced.

use crate::db::DbError;
use crate::model::state::AppState;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key of the state blob.
pub const DEFAULT_STORAGE_KEY: &str = "onboarding_v6_state";

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialization(serde_json::Error),
    InvalidData { key: String, message: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to serialize state: {err}"),
            Self::InvalidData { key, message } => {
                write!(f, "invalid persisted state under `{key}`: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::InvalidData { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable storage for the application state blob.
pub trait StateRepository {
    /// Returns the stored state, or `None` when nothing was saved yet.
    fn load(&self, key: &str) -> RepoResult<Option<AppState>>;
    /// Replaces the stored state.
    fn save(&self, key: &str, state: &AppState) -> RepoResult<()>;
    /// Removes the stored state; missing keys are not an error.
    fn clear(&self, key: &str) -> RepoResult<()>;
}

/// `kv_store`-backed repository.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load(&self, key: &str) -> RepoResult<Option<AppState>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = raw else {
            debug!("event=state_load module=repo status=empty");
            return Ok(None);
        };

        match serde_json::from_str::<AppState>(&raw) {
            Ok(state) => {
                debug!(
                    "event=state_load module=repo status=ok bytes={} employees={}",
                    raw.len(),
                    state.employees.len()
                );
                Ok(Some(state))
            }
            Err(err) => {
                warn!(
                    "event=state_load module=repo status=error error_code=invalid_blob bytes={}",
                    raw.len()
                );
                Err(RepoError::InvalidData {
                    key: key.to_string(),
                    message: err.to_string(),
                })
            }
        }
    }

    fn save(&self, key: &str, state: &AppState) -> RepoResult<()> {
        let raw = serde_json::to_string(state).map_err(RepoError::Serialization)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, raw],
        )?;
        debug!("event=state_save module=repo status=ok bytes={}", raw.len());
        Ok(())
    }

    fn clear(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}
