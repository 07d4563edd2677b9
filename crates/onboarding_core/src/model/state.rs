//! Aggregate application state persisted as one blob.
//!
//! # Responsibility
//! - Hold every entity plus the view/filter selection of the UI.
//! - Keep the persisted JSON layout stable (camelCase field names).
//!
//! # Invariants
//! - `selected_employee_id` only counts while `view == View::Checklist` and
//!   the id resolves to an existing employee.
//! - `None` filters mean "All".

use crate::model::admin::Admin;
use crate::model::department::Department;
use crate::model::employee::{Employee, EmployeeStatus};
use crate::model::ids::{DepartmentId, EmployeeId};
use crate::model::task::{Category, Task, TemplateKind};
use serde::{Deserialize, Serialize};

/// Panel currently shown by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    /// Onboarding employee list.
    #[serde(rename = "employees")]
    Onboarding,
    #[serde(rename = "offboarding")]
    Offboarding,
    /// Task checklist of the selected employee.
    #[serde(rename = "checklist")]
    Checklist,
    #[serde(rename = "template_onboarding")]
    OnboardingTemplate,
    #[serde(rename = "template_offboarding")]
    OffboardingTemplate,
    #[serde(rename = "admin_beheer")]
    AdminManagement,
    #[serde(rename = "dept_beheer")]
    DepartmentManagement,
}

impl View {
    /// Employee list view that shows employees with `status`.
    pub fn list_for(status: EmployeeStatus) -> Self {
        match status {
            EmployeeStatus::Onboarding => Self::Onboarding,
            EmployeeStatus::Offboarding => Self::Offboarding,
        }
    }

    /// Management panels are restricted to super users.
    pub fn requires_super_user(self) -> bool {
        matches!(self, Self::AdminManagement | Self::DepartmentManagement)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Logged-in admin, `None` on the login screen.
    pub user: Option<Admin>,
    pub departments: Vec<Department>,
    /// Onboarding template.
    pub template_tasks: Vec<Task>,
    pub offboarding_template_tasks: Vec<Task>,
    /// Newest first.
    pub employees: Vec<Employee>,
    pub admins: Vec<Admin>,
    pub view: View,
    pub selected_employee_id: Option<EmployeeId>,
    #[serde(default)]
    pub filter_department_id: Option<DepartmentId>,
    #[serde(default)]
    pub filter_category: Option<Category>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub employee_search_query: String,
    #[serde(default)]
    pub show_only_incomplete: bool,
}

impl AppState {
    pub fn template(&self, kind: TemplateKind) -> &[Task] {
        match kind {
            TemplateKind::Onboarding => &self.template_tasks,
            TemplateKind::Offboarding => &self.offboarding_template_tasks,
        }
    }

    pub fn template_mut(&mut self, kind: TemplateKind) -> &mut Vec<Task> {
        match kind {
            TemplateKind::Onboarding => &mut self.template_tasks,
            TemplateKind::Offboarding => &mut self.offboarding_template_tasks,
        }
    }

    pub fn employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| &employee.id == id)
    }

    pub fn department(&self, id: &DepartmentId) -> Option<&Department> {
        self.departments
            .iter()
            .find(|department| &department.id == id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        crate::model::defaults::seeded_state()
    }
}
