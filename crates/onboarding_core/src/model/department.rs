//! Department entity.

use crate::model::ids::DepartmentId;
use serde::{Deserialize, Serialize};

/// Label rendered for a department id that no longer resolves.
pub const UNKNOWN_DEPARTMENT_LABEL: &str = "unknown";

/// Organisational unit that scopes tasks, employees and admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

impl Department {
    pub fn with_id(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
