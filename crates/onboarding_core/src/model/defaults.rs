//! Seed state used when storage holds no blob yet.

use crate::model::admin::{Admin, Role};
use crate::model::department::Department;
use crate::model::ids::{AdminId, DepartmentId, TaskId};
use crate::model::state::{AppState, Theme, View};
use crate::model::task::{Category, Task};

pub const IT_DEPARTMENT_ID: &str = "it-dept";
pub const LIK_DEPARTMENT_ID: &str = "lik-dept";
pub const LOGISTICS_DEPARTMENT_ID: &str = "log-dept";

/// Departments every fresh installation starts with.
pub fn default_departments() -> Vec<Department> {
    vec![
        Department::with_id(DepartmentId::new(IT_DEPARTMENT_ID), "IT"),
        Department::with_id(DepartmentId::new(LIK_DEPARTMENT_ID), "LIK"),
        Department::with_id(DepartmentId::new(LOGISTICS_DEPARTMENT_ID), "Logistiek"),
    ]
}

pub fn default_onboarding_template() -> Vec<Task> {
    vec![
        seed_task(
            "1",
            "Webmin: Gebruiker toevoegen aan LDAP",
            "Automatische synchronisatie om middernacht.",
            IT_DEPARTMENT_ID,
            Category::Account,
        ),
        seed_task(
            "2",
            "Badge aanmaken",
            "Fysieke badge printen en registreren.",
            LOGISTICS_DEPARTMENT_ID,
            Category::Access,
        ),
        seed_task(
            "3",
            "Orbit setup",
            "Toevoegen aan relevante Orbit kanalen.",
            LIK_DEPARTMENT_ID,
            Category::Software,
        ),
    ]
}

pub fn default_offboarding_template() -> Vec<Task> {
    vec![
        seed_task(
            "o1",
            "LDAP Account deactiveren",
            "Account blokkeren in Webmin.",
            IT_DEPARTMENT_ID,
            Category::Account,
        ),
        seed_task(
            "o2",
            "Badge innemen en deactiveren",
            "Fysieke badge terugontvangen.",
            LOGISTICS_DEPARTMENT_ID,
            Category::Access,
        ),
        seed_task(
            "o3",
            "Hardware inleveren (Laptop/GSM)",
            "Controleren op schade en deactiveren.",
            LIK_DEPARTMENT_ID,
            Category::Hardware,
        ),
    ]
}

pub fn default_admins() -> Vec<Admin> {
    vec![Admin {
        id: AdminId::new("1"),
        name: "Super Admin".to_string(),
        email: "it@org.be".to_string(),
        role: Role::SuperUser,
        department_id: DepartmentId::new(IT_DEPARTMENT_ID),
    }]
}

/// Full initial state: seed data, nobody logged in, onboarding list view.
pub fn seeded_state() -> AppState {
    AppState {
        user: None,
        departments: default_departments(),
        template_tasks: default_onboarding_template(),
        offboarding_template_tasks: default_offboarding_template(),
        employees: Vec::new(),
        admins: default_admins(),
        view: View::Onboarding,
        selected_employee_id: None,
        filter_department_id: None,
        filter_category: None,
        theme: Theme::Light,
        employee_search_query: String::new(),
        show_only_incomplete: false,
    }
}

fn seed_task(
    id: &str,
    title: &str,
    description: &str,
    department_id: &str,
    category: Category,
) -> Task {
    Task::with_id(
        TaskId::new(id),
        title,
        DepartmentId::new(department_id),
        category,
    )
    .with_description(description)
}
