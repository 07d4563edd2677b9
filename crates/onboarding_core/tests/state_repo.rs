use chrono::NaiveDate;
use onboarding_core::db::open_db_in_memory;
use onboarding_core::{
    reduce, Action, AppState, DepartmentId, EmployeeStatus, FixedEnvironment, RepoError,
    SqliteStateRepository, StateRepository, View, DEFAULT_STORAGE_KEY,
};

fn env() -> FixedEnvironment {
    FixedEnvironment::new(
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap(),
    )
}

#[test]
fn load_returns_none_before_first_save() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    assert!(repo.load(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn save_then_load_returns_same_state() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);
    let env = env();
    let state = reduce(
        &AppState::default(),
        Action::CreateEmployee {
            name: "Jane".to_string(),
            department_id: DepartmentId::new("it-dept"),
            status: EmployeeStatus::Onboarding,
        },
        &env,
    );

    repo.save(DEFAULT_STORAGE_KEY, &state).unwrap();
    let loaded = repo.load(DEFAULT_STORAGE_KEY).unwrap().unwrap();

    assert_eq!(loaded, state);
    assert_eq!(loaded.view, View::Onboarding);
}

#[test]
fn save_overwrites_previous_blob() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    let mut state = AppState::default();
    repo.save(DEFAULT_STORAGE_KEY, &state).unwrap();
    state.employee_search_query = "jan".to_string();
    repo.save(DEFAULT_STORAGE_KEY, &state).unwrap();

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
    let loaded = repo.load(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(loaded.employee_search_query, "jan");
}

#[test]
fn keys_are_isolated_and_clear_removes_blob() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    repo.save("a", &AppState::default()).unwrap();
    assert!(repo.load("b").unwrap().is_none());

    repo.clear("a").unwrap();
    repo.clear("a").unwrap();
    assert!(repo.load("a").unwrap().is_none());
}

#[test]
fn corrupt_blob_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2);",
        [DEFAULT_STORAGE_KEY, "{\"user\": 42}"],
    )
    .unwrap();
    let repo = SqliteStateRepository::new(&conn);

    let err = repo.load(DEFAULT_STORAGE_KEY).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData { ref key, .. } if key == DEFAULT_STORAGE_KEY));
}

#[test]
fn persisted_blob_keeps_wire_names() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);
    repo.save(DEFAULT_STORAGE_KEY, &AppState::default()).unwrap();

    let raw: String = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1;",
            [DEFAULT_STORAGE_KEY],
            |row| row.get(0),
        )
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["view"], "employees");
    assert_eq!(value["templateTasks"][1]["category"], "Toegang");
    assert_eq!(value["admins"][0]["role"], "SuperUser");
}
