//! On-disk home of the checklist state.
//!
//! The whole `AppState` lives as one JSON value in the `kv_store` table;
//! this module only knows how to open that file and keep its table layout
//! current. Reading and writing the blob is `repo::state_repo`'s job.
//!
//! A file whose layout version (`PRAGMA user_version`) is ahead of this build
//! is refused instead of being opened.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The store file was written by a newer build.
    StoreFileTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::StoreFileTooNew { found, supported } => write!(
                f,
                "store file layout v{found} is not readable by this build (up to v{supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::StoreFileTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
