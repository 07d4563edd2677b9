//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `onboarding_core` linkage and open the configured store.
//! - Print a deterministic summary of the persisted state.
//!
//! Usage: `onboarding_cli [db_path]`; other settings come from
//! `ONBOARDING_*` environment variables.

use log::info;
use onboarding_core::db::open_db;
use onboarding_core::service::views::department_name;
use onboarding_core::{
    init_logging, ChecklistStore, EmployeeStatus, SqliteStateRepository, StoreConfig,
    SystemEnvironment,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("onboarding_core ping={}", onboarding_core::ping());
    println!("onboarding_core version={}", onboarding_core::core_version());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut config = StoreConfig::from_env()?;
    if let Some(path) = std::env::args().nth(1) {
        config.db_path = PathBuf::from(path);
    }

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, &log_dir.to_string_lossy())?;
    }

    let conn = open_db(&config.db_path)?;
    let store = ChecklistStore::open(
        SqliteStateRepository::new(&conn),
        SystemEnvironment,
        config.storage_key.as_str(),
    )?;
    info!("event=cli_summary module=cli status=start");

    let state = store.state();
    let onboarding = state
        .employees
        .iter()
        .filter(|employee| employee.status == EmployeeStatus::Onboarding)
        .count();
    println!("store path={}", config.db_path.display());
    println!(
        "departments={} admins={} employees={} onboarding={} offboarding={}",
        state.departments.len(),
        state.admins.len(),
        state.employees.len(),
        onboarding,
        state.employees.len() - onboarding
    );
    println!(
        "templates onboarding={} offboarding={}",
        state.template_tasks.len(),
        state.offboarding_template_tasks.len()
    );
    for employee in &state.employees {
        let done = employee
            .active_tasks()
            .iter()
            .filter(|task| task.is_completed)
            .count();
        println!(
            "employee id={} status={:?} department={} start={} done={}/{}",
            employee.id,
            employee.status,
            department_name(state, &employee.department_id),
            employee.start_date_label(),
            done,
            employee.active_tasks().len()
        );
    }
    Ok(())
}
