//! Derived read models computed from `AppState` on demand.
//!
//! # Invariants
//! - Nothing here is stored; every function is a pure read.
//! - Non-super users only ever see their own department's employees and
//!   tasks.

use crate::model::department::UNKNOWN_DEPARTMENT_LABEL;
use crate::model::employee::{Employee, EmployeeStatus};
use crate::model::ids::DepartmentId;
use crate::model::state::{AppState, View};
use crate::model::task::Task;

/// Completed vs total visible tasks of one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completion percentage; `0.0` when there is nothing to do.
    pub fn percent(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub fn rounded_percent(self) -> u32 {
        self.percent().round() as u32
    }
}

/// Employees listed in the current view for the current user.
///
/// Filters by list status, then case-insensitive name search, then
/// department scope. Empty when nobody is logged in.
pub fn accessible_employees(state: &AppState) -> Vec<&Employee> {
    let Some(user) = state.user.as_ref() else {
        return Vec::new();
    };
    let status = if state.view == View::Offboarding {
        EmployeeStatus::Offboarding
    } else {
        EmployeeStatus::Onboarding
    };
    let query = state.employee_search_query.to_lowercase();

    state
        .employees
        .iter()
        .filter(|employee| employee.status == status)
        .filter(|employee| query.is_empty() || employee.name.to_lowercase().contains(&query))
        .filter(|employee| user.sees_department(&employee.department_id))
        .collect()
}

/// Active tasks of `employee` the current user may see.
pub fn visible_tasks<'a>(state: &AppState, employee: &'a Employee) -> Vec<&'a Task> {
    let Some(user) = state.user.as_ref() else {
        return Vec::new();
    };
    employee
        .active_tasks()
        .iter()
        .filter(|task| user.sees_department(&task.department_id))
        .collect()
}

pub fn employee_progress(state: &AppState, employee: &Employee) -> Progress {
    let visible = visible_tasks(state, employee);
    Progress {
        completed: visible.iter().filter(|task| task.is_completed).count(),
        total: visible.len(),
    }
}

/// Employee whose checklist is open, if the selection is still valid.
pub fn selected_employee(state: &AppState) -> Option<&Employee> {
    if state.view != View::Checklist {
        return None;
    }
    state
        .selected_employee_id
        .as_ref()
        .and_then(|id| state.employee(id))
}

/// Checklist rows of the selected employee after scope and filters.
pub fn filtered_checklist_tasks(state: &AppState) -> Vec<&Task> {
    let Some(employee) = selected_employee(state) else {
        return Vec::new();
    };
    visible_tasks(state, employee)
        .into_iter()
        .filter(|task| {
            state
                .filter_department_id
                .as_ref()
                .map_or(true, |department_id| &task.department_id == department_id)
        })
        .filter(|task| state.filter_category.map_or(true, |category| task.category == category))
        .filter(|task| !state.show_only_incomplete || !task.is_completed)
        .collect()
}

/// Department name, or `"unknown"` for a dangling id.
pub fn department_name<'a>(state: &'a AppState, id: &DepartmentId) -> &'a str {
    state
        .department(id)
        .map_or(UNKNOWN_DEPARTMENT_LABEL, |department| department.name.as_str())
}

/// Whether the current user may open `view`.
pub fn can_open_view(state: &AppState, view: View) -> bool {
    match state.user.as_ref() {
        None => false,
        Some(user) => !view.requires_super_user() || user.is_super_user(),
    }
}

#[cfg(test)]
mod tests {
    use super::Progress;

    #[test]
    fn progress_of_empty_list_is_zero() {
        let progress = Progress::default();
        assert_eq!(progress.percent(), 0.0);
        assert_eq!(progress.rounded_percent(), 0);
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        let progress = Progress {
            completed: 1,
            total: 3,
        };
        assert_eq!(progress.rounded_percent(), 33);
        let progress = Progress {
            completed: 2,
            total: 3,
        };
        assert_eq!(progress.rounded_percent(), 67);
    }
}
