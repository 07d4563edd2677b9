//! Application state store: owned state plus write-through persistence.
//!
//! # Responsibility
//! - Own the single `AppState` value and route every change through
//!   [`reduce`].
//! - Persist the full state after each effective change.
//! - Expose the derived views for the presentation layer.
//!
//! # Invariants
//! - In-memory state only advances after the new state was saved.
//! - Actions that change nothing do not touch storage.

use crate::model::admin::Role;
use crate::model::employee::{Employee, EmployeeStatus};
use crate::model::ids::{AdminId, DepartmentId, EmployeeId, TaskId};
use crate::model::state::{AppState, View};
use crate::model::task::{Category, Task, TemplateKind};
use crate::repo::state_repo::{RepoError, StateRepository};
use crate::service::actions::{reduce, Action, NewAdmin, NewTemplateTask};
use crate::service::env::Environment;
use crate::service::views::{self, Progress};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Storage read/write failure.
    Repo(RepoError),
    /// A successful action did not produce the expected state.
    InconsistentState(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent store state: {details}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub struct ChecklistStore<R: StateRepository, E: Environment> {
    repo: R,
    env: E,
    storage_key: String,
    state: AppState,
}

impl<R: StateRepository, E: Environment> ChecklistStore<R, E> {
    /// Loads the state stored under `storage_key`, seeding and saving the
    /// default state when nothing is stored yet.
    pub fn open(repo: R, env: E, storage_key: impl Into<String>) -> StoreResult<Self> {
        let storage_key = storage_key.into();
        let state = match repo.load(&storage_key)? {
            Some(state) => {
                info!("event=store_open module=store status=ok source=storage");
                state
            }
            None => {
                let state = AppState::default();
                repo.save(&storage_key, &state)?;
                info!("event=store_open module=store status=ok source=seed");
                state
            }
        };

        Ok(Self {
            repo,
            env,
            storage_key,
            state,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reduces `action`, persists the result and commits it.
    ///
    /// Returns `Ok(false)` when the action was a no-op.
    pub fn dispatch(&mut self, action: Action) -> StoreResult<bool> {
        let started_at = Instant::now();
        let name = action.name();
        let next = reduce(&self.state, action, &self.env);

        if next == self.state {
            debug!("event=store_dispatch module=store status=noop action={name}");
            return Ok(false);
        }

        if let Err(err) = self.repo.save(&self.storage_key, &next) {
            error!(
                "event=store_dispatch module=store status=error action={name} duration_ms={} error_code=persist_failed error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }

        self.state = next;
        info!(
            "event=store_dispatch module=store status=ok action={name} duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(true)
    }

    pub fn login(&mut self, admin_id: &AdminId) -> StoreResult<bool> {
        self.dispatch(Action::Login {
            admin_id: admin_id.clone(),
        })
    }

    pub fn logout(&mut self) -> StoreResult<bool> {
        self.dispatch(Action::Logout)
    }

    /// Creates an employee and returns its id, or `None` for a blank name.
    pub fn create_employee(
        &mut self,
        name: &str,
        department_id: &DepartmentId,
        status: EmployeeStatus,
    ) -> StoreResult<Option<EmployeeId>> {
        let changed = self.dispatch(Action::CreateEmployee {
            name: name.to_string(),
            department_id: department_id.clone(),
            status,
        })?;
        if !changed {
            return Ok(None);
        }
        self.state
            .employees
            .first()
            .map(|employee| Some(employee.id.clone()))
            .ok_or(StoreError::InconsistentState(
                "created employee missing from state",
            ))
    }

    pub fn update_employee(
        &mut self,
        id: &EmployeeId,
        name: &str,
        department_id: &DepartmentId,
    ) -> StoreResult<bool> {
        self.dispatch(Action::UpdateEmployee {
            id: id.clone(),
            name: name.to_string(),
            department_id: department_id.clone(),
        })
    }

    pub fn delete_employee(&mut self, id: &EmployeeId) -> StoreResult<bool> {
        self.dispatch(Action::DeleteEmployee { id: id.clone() })
    }

    pub fn start_offboarding(&mut self, id: &EmployeeId) -> StoreResult<bool> {
        self.dispatch(Action::StartOffboarding { id: id.clone() })
    }

    /// Adds a department and returns its id, or `None` for a blank name.
    pub fn add_department(&mut self, name: &str) -> StoreResult<Option<DepartmentId>> {
        let changed = self.dispatch(Action::AddDepartment {
            name: name.to_string(),
        })?;
        if !changed {
            return Ok(None);
        }
        self.state
            .departments
            .last()
            .map(|department| Some(department.id.clone()))
            .ok_or(StoreError::InconsistentState(
                "added department missing from state",
            ))
    }

    pub fn delete_department(&mut self, id: &DepartmentId) -> StoreResult<bool> {
        self.dispatch(Action::DeleteDepartment { id: id.clone() })
    }

    pub fn toggle_employee_task(&mut self, task_id: &TaskId) -> StoreResult<bool> {
        self.dispatch(Action::ToggleEmployeeTask {
            task_id: task_id.clone(),
        })
    }

    /// Adds an admin and returns its id, or `None` for a blank name.
    pub fn add_admin(
        &mut self,
        name: &str,
        email: &str,
        role: Role,
        department_id: &DepartmentId,
    ) -> StoreResult<Option<AdminId>> {
        let changed = self.dispatch(Action::AddAdmin(NewAdmin {
            name: name.to_string(),
            email: email.to_string(),
            role,
            department_id: department_id.clone(),
        }))?;
        if !changed {
            return Ok(None);
        }
        self.state
            .admins
            .last()
            .map(|admin| Some(admin.id.clone()))
            .ok_or(StoreError::InconsistentState(
                "added admin missing from state",
            ))
    }

    pub fn delete_admin(&mut self, id: &AdminId) -> StoreResult<bool> {
        self.dispatch(Action::DeleteAdmin { id: id.clone() })
    }

    /// Appends a task to a template and returns its id, or `None` for a
    /// blank title.
    pub fn add_template_task(
        &mut self,
        kind: TemplateKind,
        task: NewTemplateTask,
    ) -> StoreResult<Option<TaskId>> {
        let changed = self.dispatch(Action::AddTemplateTask { kind, task })?;
        if !changed {
            return Ok(None);
        }
        self.state
            .template(kind)
            .last()
            .map(|task| Some(task.id.clone()))
            .ok_or(StoreError::InconsistentState(
                "added template task missing from state",
            ))
    }

    pub fn delete_template_task(&mut self, id: &TaskId, kind: TemplateKind) -> StoreResult<bool> {
        self.dispatch(Action::DeleteTemplateTask {
            kind,
            id: id.clone(),
        })
    }

    pub fn set_view(&mut self, view: View) -> StoreResult<bool> {
        self.dispatch(Action::SetView(view))
    }

    pub fn open_checklist(&mut self, employee_id: &EmployeeId) -> StoreResult<bool> {
        self.dispatch(Action::OpenChecklist {
            employee_id: employee_id.clone(),
        })
    }

    pub fn close_checklist(&mut self) -> StoreResult<bool> {
        self.dispatch(Action::CloseChecklist)
    }

    pub fn set_search_query(&mut self, query: &str) -> StoreResult<bool> {
        self.dispatch(Action::SetSearchQuery(query.to_string()))
    }

    pub fn set_department_filter(&mut self, filter: Option<DepartmentId>) -> StoreResult<bool> {
        self.dispatch(Action::SetDepartmentFilter(filter))
    }

    pub fn set_category_filter(&mut self, filter: Option<Category>) -> StoreResult<bool> {
        self.dispatch(Action::SetCategoryFilter(filter))
    }

    pub fn set_show_only_incomplete(&mut self, only_incomplete: bool) -> StoreResult<bool> {
        self.dispatch(Action::SetShowOnlyIncomplete(only_incomplete))
    }

    pub fn accessible_employees(&self) -> Vec<&Employee> {
        views::accessible_employees(&self.state)
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        views::selected_employee(&self.state)
    }

    pub fn filtered_checklist_tasks(&self) -> Vec<&Task> {
        views::filtered_checklist_tasks(&self.state)
    }

    pub fn employee_progress(&self, employee: &Employee) -> Progress {
        views::employee_progress(&self.state, employee)
    }

    pub fn department_name(&self, id: &DepartmentId) -> &str {
        views::department_name(&self.state, id)
    }

    pub fn can_open_view(&self, view: View) -> bool {
        views::can_open_view(&self.state, view)
    }
}
