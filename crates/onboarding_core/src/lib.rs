//! Core domain logic for the onboarding/offboarding checklist.
//! This crate is the single source of truth for state transitions and
//! department-scoped visibility.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::admin::{Admin, Role};
pub use model::department::{Department, UNKNOWN_DEPARTMENT_LABEL};
pub use model::employee::{Employee, EmployeeStatus};
pub use model::ids::{AdminId, DepartmentId, EmployeeId, TaskId};
pub use model::state::{AppState, Theme, View};
pub use model::task::{Category, Task, TemplateKind};
pub use repo::state_repo::{
    RepoError, RepoResult, SqliteStateRepository, StateRepository, DEFAULT_STORAGE_KEY,
};
pub use service::actions::{reduce, Action, NewAdmin, NewTemplateTask};
pub use service::env::{Environment, FixedEnvironment, SystemEnvironment};
pub use service::store::{ChecklistStore, StoreError, StoreResult};
pub use service::views::Progress;

/// Minimal health-check API for integration smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
