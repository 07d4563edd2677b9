//! Employee record with its onboarding and offboarding checklists.
//!
//! # Invariants
//! - At creation only the list matching `status` is populated.
//! - `status` moves `Onboarding -> Offboarding` only; `tasks` is kept as a
//!   historical record after the transition.

use crate::model::ids::{DepartmentId, EmployeeId};
use crate::model::task::{Task, TemplateKind};
use crate::model::DATE_LABEL_FORMAT;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Checklist phase an employee is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Onboarding,
    Offboarding,
}

impl EmployeeStatus {
    /// Template that feeds the checklist for this phase.
    pub fn template_kind(self) -> TemplateKind {
        match self {
            Self::Onboarding => TemplateKind::Onboarding,
            Self::Offboarding => TemplateKind::Offboarding,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department_id: DepartmentId,
    pub start_date: NaiveDate,
    pub status: EmployeeStatus,
    pub tasks: Vec<Task>,
    pub offboarding_tasks: Vec<Task>,
}

impl Employee {
    /// Task list matching the current status.
    pub fn active_tasks(&self) -> &[Task] {
        match self.status {
            EmployeeStatus::Onboarding => &self.tasks,
            EmployeeStatus::Offboarding => &self.offboarding_tasks,
        }
    }

    /// Returns a copy whose active list is replaced by `tasks`.
    pub fn with_active_tasks(&self, tasks: Vec<Task>) -> Self {
        let mut next = self.clone();
        match self.status {
            EmployeeStatus::Onboarding => next.tasks = tasks,
            EmployeeStatus::Offboarding => next.offboarding_tasks = tasks,
        }
        next
    }

    pub fn start_date_label(&self) -> String {
        self.start_date.format(DATE_LABEL_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Employee, EmployeeStatus};
    use crate::model::ids::{DepartmentId, EmployeeId, TaskId};
    use crate::model::task::{Category, Task};
    use chrono::NaiveDate;

    #[test]
    fn active_tasks_follow_status() {
        let task = Task::with_id(
            TaskId::new("o1"),
            "LDAP Account deactiveren",
            DepartmentId::new("it-dept"),
            Category::Account,
        );
        let mut employee = Employee {
            id: EmployeeId::new("e1"),
            name: "Jane".to_string(),
            department_id: DepartmentId::new("it-dept"),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            status: EmployeeStatus::Onboarding,
            tasks: Vec::new(),
            offboarding_tasks: vec![task],
        };
        assert!(employee.active_tasks().is_empty());

        employee.status = EmployeeStatus::Offboarding;
        assert_eq!(employee.active_tasks().len(), 1);
        assert_eq!(employee.start_date_label(), "01/03/2026");
    }
}
