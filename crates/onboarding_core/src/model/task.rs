//! Checklist task model.
//!
//! # Responsibility
//! - Define the task record shared by templates and employee checklists.
//! - Provide copy-on-write helpers for cloning and completion toggling.
//!
//! # Invariants
//! - `completed_by`/`completed_at` are only set while `is_completed` is true.
//! - A template copy never carries completion data from its source.

use crate::model::ids::{DepartmentId, TaskId};
use crate::model::TIMESTAMP_LABEL_FORMAT;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Task category shown as a badge and usable as checklist filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Account,
    Software,
    Hardware,
    /// Physical or building access (badges, keys).
    #[serde(rename = "Toegang")]
    Access,
}

impl Category {
    /// Stable string id used in the persisted blob.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Software => "Software",
            Self::Hardware => "Hardware",
            Self::Access => "Toegang",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown category string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl Display for ParseCategoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported category `{}`; expected Account|Software|Hardware|Toegang",
            self.0
        )
    }
}

impl Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Account" => Ok(Self::Account),
            "Software" => Ok(Self::Software),
            "Hardware" => Ok(Self::Hardware),
            "Toegang" | "Access" => Ok(Self::Access),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// Which template list a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Onboarding,
    Offboarding,
}

/// One checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Department responsible for carrying out the task.
    pub department_id: DepartmentId,
    pub category: Category,
    pub is_completed: bool,
    /// Name of the admin who completed the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
    /// Local timestamp of completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        department_id: DepartmentId,
        category: Category,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            department_id,
            category,
            is_completed: false,
            completed_by: None,
            completed_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns an incomplete copy under a new id.
    pub fn fresh_copy(&self, id: TaskId) -> Self {
        Self {
            id,
            is_completed: false,
            completed_by: None,
            completed_at: None,
            ..self.clone()
        }
    }

    /// Returns a copy with `is_completed` flipped.
    ///
    /// Completing stamps `completed_by`/`completed_at`; reverting clears both.
    pub fn toggled(&self, completed_by: Option<&str>, now: NaiveDateTime) -> Self {
        let is_completed = !self.is_completed;
        Self {
            is_completed,
            completed_by: if is_completed {
                completed_by.map(str::to_string)
            } else {
                None
            },
            completed_at: if is_completed { Some(now) } else { None },
            ..self.clone()
        }
    }

    /// Completion timestamp rendered as `dd/mm/yyyy HH:MM:SS`.
    pub fn completed_at_label(&self) -> Option<String> {
        self.completed_at
            .map(|at| at.format(TIMESTAMP_LABEL_FORMAT).to_string())
    }
}
