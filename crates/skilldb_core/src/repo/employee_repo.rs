//! Employee repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and search APIs over the `employees` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `employee_id` is written once by `create_employee` and never updated.
//! - Single-field updates only interpolate column names owned by
//!   `EmployeeField`; values are always bound parameters.
//! - Read paths reject a missing identifier instead of masking it; NULL in
//!   any other column reads as empty text or zero years.
//! - Lists are returned in insertion order (`rowid ASC`).

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::employee::{EmployeeRecord, EmployeeUpdate, UpdateOutcome};
use crate::model::field::{EmployeeField, FieldValue};
use crate::search::keyword::{self, EmployeeFilter, KeywordQuery};
use rusqlite::types::Value;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    employee_id,
    name,
    email,
    role,
    primary_skills,
    secondary_skills,
    certifications,
    total_experience,
    relevant_experience,
    current_location,
    career_aspiration,
    action_plan,
    target_date,
    resume_path
FROM employees";

const REQUIRED_COLUMNS: &[&str] = &[
    "employee_id",
    "name",
    "email",
    "role",
    "primary_skills",
    "secondary_skills",
    "certifications",
    "total_experience",
    "relevant_experience",
    "current_location",
    "career_aspiration",
    "action_plan",
    "target_date",
    "resume_path",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// `create_employee` collided with an existing identifier.
    DuplicateKey(String),
    /// Value kind does not fit the target column.
    InvalidFieldValue { field: EmployeeField, value: FieldValue },
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateKey(id) => write!(f, "employee id already exists: {id}"),
            Self::InvalidFieldValue { field, value } => {
                write!(f, "invalid value `{value}` for field {field}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for employee record operations.
pub trait EmployeeRepository {
    fn create_employee(&self, record: &EmployeeRecord) -> RepoResult<()>;
    fn get_employee(&self, employee_id: &str) -> RepoResult<Option<EmployeeRecord>>;
    fn list_employees(&self) -> RepoResult<Vec<EmployeeRecord>>;
    fn search_employees(&self, query: &KeywordQuery) -> RepoResult<Vec<EmployeeRecord>>;
    fn filter_employees(&self, filter: &EmployeeFilter) -> RepoResult<Vec<EmployeeRecord>>;
    fn update_employee_full(
        &self,
        employee_id: &str,
        update: &EmployeeUpdate,
    ) -> RepoResult<UpdateOutcome>;
    fn update_employee_field(
        &self,
        employee_id: &str,
        field: EmployeeField,
        value: &FieldValue,
    ) -> RepoResult<UpdateOutcome>;
    /// Returns `true` when a row was removed.
    fn delete_employee(&self, employee_id: &str) -> RepoResult<bool>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// Rejects connections whose schema version or `employees` shape does
    /// not match this binary.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_employee(&self, record: &EmployeeRecord) -> RepoResult<()> {
        let result = self.conn.execute(
            "INSERT INTO employees (
                employee_id,
                name,
                email,
                role,
                primary_skills,
                secondary_skills,
                certifications,
                total_experience,
                relevant_experience,
                current_location,
                career_aspiration,
                action_plan,
                target_date,
                resume_path
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14);",
            params![
                record.employee_id.as_str(),
                record.name.as_str(),
                record.email.as_str(),
                record.role.as_str(),
                record.primary_skills.as_str(),
                record.secondary_skills.as_str(),
                record.certifications.as_str(),
                record.total_experience,
                record.relevant_experience,
                record.current_location.as_str(),
                record.career_aspiration.as_str(),
                record.action_plan.as_str(),
                record.target_date.as_str(),
                record.resume_path.as_str(),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_primary_key_violation(&err) => {
                Err(RepoError::DuplicateKey(record.employee_id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_employee(&self, employee_id: &str) -> RepoResult<Option<EmployeeRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE employee_id = ?1;"))?;
        let mut rows = stmt.query([employee_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn list_employees(&self) -> RepoResult<Vec<EmployeeRecord>> {
        scan_employees(self.conn, |_| true)
    }

    fn search_employees(&self, query: &KeywordQuery) -> RepoResult<Vec<EmployeeRecord>> {
        keyword::search_employees(self.conn, query)
    }

    fn filter_employees(&self, filter: &EmployeeFilter) -> RepoResult<Vec<EmployeeRecord>> {
        keyword::filter_employees(self.conn, filter)
    }

    fn update_employee_full(
        &self,
        employee_id: &str,
        update: &EmployeeUpdate,
    ) -> RepoResult<UpdateOutcome> {
        let changed = self.conn.execute(
            "UPDATE employees
             SET
                name = ?1,
                email = ?2,
                role = ?3,
                primary_skills = ?4,
                secondary_skills = ?5,
                certifications = ?6,
                total_experience = ?7,
                relevant_experience = ?8,
                current_location = ?9,
                career_aspiration = ?10,
                action_plan = ?11,
                target_date = ?12,
                resume_path = COALESCE(?13, resume_path)
             WHERE employee_id = ?14;",
            params![
                update.name.as_str(),
                update.email.as_str(),
                update.role.as_str(),
                update.primary_skills.as_str(),
                update.secondary_skills.as_str(),
                update.certifications.as_str(),
                update.total_experience,
                update.relevant_experience,
                update.current_location.as_str(),
                update.career_aspiration.as_str(),
                update.action_plan.as_str(),
                update.target_date.as_str(),
                update.resume_path.as_deref(),
                employee_id,
            ],
        )?;

        Ok(UpdateOutcome::from_changed_rows(changed))
    }

    fn update_employee_field(
        &self,
        employee_id: &str,
        field: EmployeeField,
        value: &FieldValue,
    ) -> RepoResult<UpdateOutcome> {
        if !field.accepts(value) {
            return Err(RepoError::InvalidFieldValue {
                field,
                value: value.clone(),
            });
        }

        let bound = match value {
            FieldValue::Text(text) => Value::Text(text.clone()),
            FieldValue::Years(years) => Value::Real(*years),
        };
        let changed = self.conn.execute(
            &format!(
                "UPDATE employees SET {} = ?1 WHERE employee_id = ?2;",
                field.column()
            ),
            params![bound, employee_id],
        )?;

        Ok(UpdateOutcome::from_changed_rows(changed))
    }

    fn delete_employee(&self, employee_id: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE employee_id = ?1;", [employee_id])?;
        Ok(changed > 0)
    }
}

/// Streams every row in insertion order, keeping those accepted by `keep`.
pub(crate) fn scan_employees(
    conn: &Connection,
    mut keep: impl FnMut(&EmployeeRecord) -> bool,
) -> RepoResult<Vec<EmployeeRecord>> {
    let mut stmt = conn.prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY rowid ASC;"))?;
    let mut rows = stmt.query([])?;
    let mut records = Vec::new();

    while let Some(row) = rows.next()? {
        let record = parse_employee_row(row)?;
        if keep(&record) {
            records.push(record);
        }
    }

    Ok(records)
}

// Tables created before migration 1 existed declare every column nullable.
fn parse_employee_row(row: &Row<'_>) -> RepoResult<EmployeeRecord> {
    let employee_id = row
        .get::<_, Option<String>>("employee_id")?
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            RepoError::InvalidData("empty value in employees.employee_id".to_string())
        })?;
    let text = |column: &str| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
    };
    let years = |column: &str| -> rusqlite::Result<f64> {
        Ok(row.get::<_, Option<f64>>(column)?.unwrap_or_default())
    };

    Ok(EmployeeRecord {
        employee_id,
        name: text("name")?,
        email: text("email")?,
        role: text("role")?,
        primary_skills: text("primary_skills")?,
        secondary_skills: text("secondary_skills")?,
        certifications: text("certifications")?,
        total_experience: years("total_experience")?,
        relevant_experience: years("relevant_experience")?,
        current_location: text("current_location")?,
        career_aspiration: text("career_aspiration")?,
        action_plan: text("action_plan")?,
        target_date: text("target_date")?,
        resume_path: text("resume_path")?,
    })
}

fn is_primary_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && (failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE)
    )
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'employees';",
            [],
            |row| row.get(0),
        )
        .optional()?;
    if table.is_none() {
        return Err(RepoError::MissingRequiredTable("employees"));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('employees');")?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    for &column in REQUIRED_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: "employees",
                column,
            });
        }
    }

    Ok(())
}
