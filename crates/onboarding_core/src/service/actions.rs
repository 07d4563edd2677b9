//! Actions and the pure reducer that applies them.
//!
//! # Responsibility
//! - Enumerate every state transition the store accepts.
//! - Compute the next state as a fresh value; the input is never touched.
//!
//! # Invariants
//! - Unknown ids and blank names turn an action into a no-op (the returned
//!   state equals the input).
//! - Template copies get fresh ids and reset completion.
//! - Employee status only moves `Onboarding -> Offboarding`.

use crate::model::admin::{Admin, Role};
use crate::model::department::Department;
use crate::model::employee::{Employee, EmployeeStatus};
use crate::model::ids::{AdminId, DepartmentId, EmployeeId, TaskId};
use crate::model::state::{AppState, View};
use crate::model::task::{Category, Task, TemplateKind};
use crate::model::trimmed_name;
use crate::service::env::Environment;
use crate::service::views::selected_employee;

/// Input for [`Action::AddAdmin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department_id: DepartmentId,
}

/// Input for [`Action::AddTemplateTask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTemplateTask {
    pub title: String,
    pub description: Option<String>,
    pub department_id: DepartmentId,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login {
        admin_id: AdminId,
    },
    Logout,
    CreateEmployee {
        name: String,
        department_id: DepartmentId,
        status: EmployeeStatus,
    },
    UpdateEmployee {
        id: EmployeeId,
        name: String,
        department_id: DepartmentId,
    },
    DeleteEmployee {
        id: EmployeeId,
    },
    StartOffboarding {
        id: EmployeeId,
    },
    AddDepartment {
        name: String,
    },
    DeleteDepartment {
        id: DepartmentId,
    },
    ToggleEmployeeTask {
        task_id: TaskId,
    },
    AddAdmin(NewAdmin),
    DeleteAdmin {
        id: AdminId,
    },
    AddTemplateTask {
        kind: TemplateKind,
        task: NewTemplateTask,
    },
    DeleteTemplateTask {
        kind: TemplateKind,
        id: TaskId,
    },
    SetView(View),
    OpenChecklist {
        employee_id: EmployeeId,
    },
    CloseChecklist,
    SetSearchQuery(String),
    SetDepartmentFilter(Option<DepartmentId>),
    SetCategoryFilter(Option<Category>),
    SetShowOnlyIncomplete(bool),
}

impl Action {
    /// Stable event name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::CreateEmployee { .. } => "create_employee",
            Self::UpdateEmployee { .. } => "update_employee",
            Self::DeleteEmployee { .. } => "delete_employee",
            Self::StartOffboarding { .. } => "start_offboarding",
            Self::AddDepartment { .. } => "add_department",
            Self::DeleteDepartment { .. } => "delete_department",
            Self::ToggleEmployeeTask { .. } => "toggle_employee_task",
            Self::AddAdmin(_) => "add_admin",
            Self::DeleteAdmin { .. } => "delete_admin",
            Self::AddTemplateTask { .. } => "add_template_task",
            Self::DeleteTemplateTask { .. } => "delete_template_task",
            Self::SetView(_) => "set_view",
            Self::OpenChecklist { .. } => "open_checklist",
            Self::CloseChecklist => "close_checklist",
            Self::SetSearchQuery(_) => "set_search_query",
            Self::SetDepartmentFilter(_) => "set_department_filter",
            Self::SetCategoryFilter(_) => "set_category_filter",
            Self::SetShowOnlyIncomplete(_) => "set_show_only_incomplete",
        }
    }
}

/// Applies `action` to `state` and returns the resulting state.
pub fn reduce(state: &AppState, action: Action, env: &dyn Environment) -> AppState {
    let mut next = state.clone();
    match action {
        Action::Login { admin_id } => {
            if let Some(admin) = state.admins.iter().find(|admin| admin.id == admin_id) {
                next.user = Some(admin.clone());
                next.filter_department_id = None;
                next.employee_search_query.clear();
            }
        }
        Action::Logout => next.user = None,
        Action::CreateEmployee {
            name,
            department_id,
            status,
        } => {
            if let Some(name) = trimmed_name(&name) {
                let tasks = clone_template(state.template(status.template_kind()), env);
                let (tasks, offboarding_tasks) = match status {
                    EmployeeStatus::Onboarding => (tasks, Vec::new()),
                    EmployeeStatus::Offboarding => (Vec::new(), tasks),
                };
                next.employees.insert(
                    0,
                    Employee {
                        id: EmployeeId::new(env.fresh_id()),
                        name,
                        department_id,
                        start_date: env.today(),
                        status,
                        tasks,
                        offboarding_tasks,
                    },
                );
                next.view = View::list_for(status);
                next.selected_employee_id = None;
                next.employee_search_query.clear();
            }
        }
        Action::UpdateEmployee {
            id,
            name,
            department_id,
        } => {
            if let Some(name) = trimmed_name(&name) {
                next.employees = replace_employee(&state.employees, &id, |employee| Employee {
                    name: name.clone(),
                    department_id: department_id.clone(),
                    ..employee.clone()
                });
            }
        }
        Action::DeleteEmployee { id } => next.employees.retain(|employee| employee.id != id),
        Action::StartOffboarding { id } => {
            let template = state.template(TemplateKind::Offboarding);
            next.employees = replace_employee(&state.employees, &id, |employee| {
                if employee.status != EmployeeStatus::Onboarding {
                    return employee.clone();
                }
                Employee {
                    status: EmployeeStatus::Offboarding,
                    offboarding_tasks: clone_template(template, env),
                    ..employee.clone()
                }
            });
        }
        Action::AddDepartment { name } => {
            if let Some(name) = trimmed_name(&name) {
                next.departments.push(Department::with_id(
                    DepartmentId::new(env.fresh_id()),
                    name,
                ));
            }
        }
        Action::DeleteDepartment { id } => {
            next.departments.retain(|department| department.id != id)
        }
        Action::ToggleEmployeeTask { task_id } => {
            if let Some(employee) = selected_employee(state) {
                if employee.active_tasks().iter().any(|task| task.id == task_id) {
                    let completed_by = state.user.as_ref().map(|user| user.name.as_str());
                    let now = env.now();
                    let tasks = employee
                        .active_tasks()
                        .iter()
                        .map(|task| {
                            if task.id == task_id {
                                task.toggled(completed_by, now)
                            } else {
                                task.clone()
                            }
                        })
                        .collect();
                    let updated = employee.with_active_tasks(tasks);
                    next.employees =
                        replace_employee(&state.employees, &employee.id, |_| updated.clone());
                }
            }
        }
        Action::AddAdmin(new_admin) => {
            if let Some(name) = trimmed_name(&new_admin.name) {
                next.admins.push(Admin {
                    id: AdminId::new(env.fresh_id()),
                    name,
                    email: new_admin.email.trim().to_string(),
                    role: new_admin.role,
                    department_id: new_admin.department_id,
                });
            }
        }
        Action::DeleteAdmin { id } => next.admins.retain(|admin| admin.id != id),
        Action::AddTemplateTask { kind, task } => {
            if let Some(title) = trimmed_name(&task.title) {
                let mut created = Task::with_id(
                    TaskId::new(env.fresh_id()),
                    title,
                    task.department_id,
                    task.category,
                );
                created.description = task
                    .description
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty());
                next.template_mut(kind).push(created);
            }
        }
        Action::DeleteTemplateTask { kind, id } => {
            next.template_mut(kind).retain(|task| task.id != id)
        }
        Action::SetView(view) => {
            next.view = view;
            next.selected_employee_id = None;
            next.employee_search_query.clear();
        }
        Action::OpenChecklist { employee_id } => {
            if state.employee(&employee_id).is_some() {
                next.view = View::Checklist;
                next.selected_employee_id = Some(employee_id);
            }
        }
        Action::CloseChecklist => {
            next.view = selected_employee(state)
                .map(|employee| View::list_for(employee.status))
                .unwrap_or(View::Onboarding);
            next.selected_employee_id = None;
        }
        Action::SetSearchQuery(query) => next.employee_search_query = query,
        Action::SetDepartmentFilter(filter) => next.filter_department_id = filter,
        Action::SetCategoryFilter(filter) => next.filter_category = filter,
        Action::SetShowOnlyIncomplete(only_incomplete) => {
            next.show_only_incomplete = only_incomplete
        }
    }
    next
}

fn clone_template(template: &[Task], env: &dyn Environment) -> Vec<Task> {
    template
        .iter()
        .map(|task| task.fresh_copy(TaskId::new(env.fresh_id())))
        .collect()
}

fn replace_employee(
    employees: &[Employee],
    id: &EmployeeId,
    update: impl Fn(&Employee) -> Employee,
) -> Vec<Employee> {
    employees
        .iter()
        .map(|employee| {
            if &employee.id == id {
                update(employee)
            } else {
                employee.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{reduce, Action, NewTemplateTask};
    use crate::model::employee::EmployeeStatus;
    use crate::model::ids::{AdminId, DepartmentId, EmployeeId};
    use crate::model::state::{AppState, View};
    use crate::model::task::{Category, TemplateKind};
    use crate::service::env::FixedEnvironment;
    use chrono::NaiveDate;

    fn env() -> FixedEnvironment {
        FixedEnvironment::new(
            NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let env = env();
        let before = AppState::default();
        let snapshot = before.clone();
        let after = reduce(
            &before,
            Action::CreateEmployee {
                name: "Jane".to_string(),
                department_id: DepartmentId::new("it-dept"),
                status: EmployeeStatus::Onboarding,
            },
            &env,
        );
        assert_eq!(before, snapshot);
        assert_eq!(after.employees.len(), 1);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let env = env();
        let state = AppState::default();
        for action in [
            Action::Login {
                admin_id: AdminId::new("nope"),
            },
            Action::UpdateEmployee {
                id: EmployeeId::new("nope"),
                name: "x".to_string(),
                department_id: DepartmentId::new("it-dept"),
            },
            Action::StartOffboarding {
                id: EmployeeId::new("nope"),
            },
            Action::OpenChecklist {
                employee_id: EmployeeId::new("nope"),
            },
        ] {
            assert_eq!(reduce(&state, action, &env), state);
        }
    }

    #[test]
    fn blank_names_are_ignored() {
        let env = env();
        let state = AppState::default();
        let after = reduce(
            &state,
            Action::AddDepartment {
                name: "   ".to_string(),
            },
            &env,
        );
        assert_eq!(after, state);
    }

    #[test]
    fn created_offboarding_employee_only_has_offboarding_tasks() {
        let env = env();
        let state = reduce(
            &AppState::default(),
            Action::CreateEmployee {
                name: "Piet".to_string(),
                department_id: DepartmentId::new("lik-dept"),
                status: EmployeeStatus::Offboarding,
            },
            &env,
        );
        let employee = &state.employees[0];
        assert!(employee.tasks.is_empty());
        assert_eq!(employee.offboarding_tasks.len(), 3);
        assert_eq!(state.view, View::Offboarding);
        assert_eq!(
            employee.start_date,
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
        );
    }

    #[test]
    fn template_task_description_is_trimmed_to_none() {
        let env = env();
        let state = reduce(
            &AppState::default(),
            Action::AddTemplateTask {
                kind: TemplateKind::Offboarding,
                task: NewTemplateTask {
                    title: "Sleutels innemen".to_string(),
                    description: Some("  ".to_string()),
                    department_id: DepartmentId::new("log-dept"),
                    category: Category::Access,
                },
            },
            &env,
        );
        let added = state.offboarding_template_tasks.last().unwrap();
        assert_eq!(added.title, "Sleutels innemen");
        assert_eq!(added.description, None);
        assert_eq!(state.template_tasks.len(), 3);
    }

    #[test]
    fn set_view_clears_selection_and_search() {
        let env = env();
        let mut state = AppState::default();
        state.employee_search_query = "ja".to_string();
        state.selected_employee_id = Some(EmployeeId::new("e1"));
        let after = reduce(&state, Action::SetView(View::OnboardingTemplate), &env);
        assert_eq!(after.view, View::OnboardingTemplate);
        assert!(after.selected_employee_id.is_none());
        assert!(after.employee_search_query.is_empty());
    }
}
