use rusqlite::Connection;
use skilldb_core::db::migrations::latest_version;
use skilldb_core::db::{connect_db, open_db, open_db_in_memory, DbError, DEFAULT_BUSY_TIMEOUT};
use skilldb_core::{RepoError, SqliteEmployeeRepository};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "employees");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employee_data.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "employees");
}

#[test]
fn file_database_uses_wal_journal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wal.db");
    drop(open_db(&path).unwrap());

    let conn = connect_db(&path, DEFAULT_BUSY_TIMEOUT).unwrap();
    let mode: String = conn
        .query_row("PRAGMA journal_mode;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode.to_ascii_lowercase(), "wal");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn open_failure_reports_database_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("employee_data.db");

    match open_db(&path).unwrap_err() {
        DbError::Open { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
    let err = connect_db(&path, DEFAULT_BUSY_TIMEOUT).unwrap_err();
    assert!(err.to_string().contains("missing-dir"));
    assert!(!err.is_busy());
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.db");
    let conn = connect_db(&path, DEFAULT_BUSY_TIMEOUT).unwrap();

    match SqliteEmployeeRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_missing_table_and_columns() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();
    assert!(matches!(
        SqliteEmployeeRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("employees"))
    ));

    conn.execute_batch(
        "CREATE TABLE employees (
            employee_id TEXT PRIMARY KEY,
            name TEXT
        );",
    )
    .unwrap();
    assert!(matches!(
        SqliteEmployeeRepository::try_new(&conn),
        Err(RepoError::MissingRequiredColumn {
            table: "employees",
            column: "email"
        })
    ));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
