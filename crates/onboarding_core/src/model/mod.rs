//! Domain model for the onboarding/offboarding checklist.
//!
//! # Responsibility
//! - Define departments, tasks, employees, admins and the aggregate
//!   `AppState` persisted as one blob.
//! - Provide small value helpers shared by actions and views.
//!
//! # Invariants
//! - Entities are replaced, never mutated in place, by the action layer.
//! - Foreign keys are plain typed ids; dangling ids are tolerated.

pub mod admin;
pub mod defaults;
pub mod department;
pub mod employee;
pub mod ids;
pub mod state;
pub mod task;

/// Date format used for employee start dates in labels.
pub const DATE_LABEL_FORMAT: &str = "%d/%m/%Y";
/// Timestamp format used for task completion labels.
pub const TIMESTAMP_LABEL_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Trims surrounding whitespace of a display name; inner spacing is kept.
///
/// Returns `None` when nothing is left.
pub fn trimmed_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
