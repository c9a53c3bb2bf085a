//! Connection-scoped employee record store.
//!
//! # Responsibility
//! - Bootstrap the database file once (pragmas, WAL, migrations).
//! - Run each operation on its own connection, released on every exit path.
//!
//! # Invariants
//! - No connection or cursor is shared between operations or threads.
//! - Each mutating operation is a single statement, so concurrent writers to
//!   the same identifier never interleave partial field writes.

use crate::config::StoreConfig;
use crate::db::{connect_db, open_db_with_timeout, DbError};
use crate::model::employee::{EmployeeRecord, EmployeeUpdate, UpdateOutcome};
use crate::model::field::{EmployeeField, FieldValue};
use crate::repo::employee_repo::{RepoError, SqliteEmployeeRepository};
use crate::search::keyword::{EmployeeFilter, KeywordQuery};
use crate::service::employee_service::{EmployeeService, EmployeeServiceError, ServiceResult};
use log::error;
use std::time::Instant;

/// Thread-safe handle to one employee database file.
#[derive(Debug, Clone)]
pub struct EmployeeStore {
    config: StoreConfig,
}

impl EmployeeStore {
    /// Opens (creating if needed) and migrates the configured database.
    pub fn open(config: StoreConfig) -> Result<Self, DbError> {
        let conn = open_db_with_timeout(&config.db_path, config.busy_timeout)?;
        drop(conn);
        Ok(Self { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn add_employee(&self, record: &EmployeeRecord) -> ServiceResult<()> {
        self.with_service("add_employee", |service| service.add_employee(record))
    }

    pub fn get_employee(&self, employee_id: &str) -> ServiceResult<EmployeeRecord> {
        self.with_service("get_employee", |service| service.get_employee(employee_id))
    }

    pub fn list_employees(&self) -> ServiceResult<Vec<EmployeeRecord>> {
        self.with_service("list_employees", |service| service.list_employees())
    }

    pub fn search(&self, keyword: &str) -> ServiceResult<Vec<EmployeeRecord>> {
        self.search_with(&KeywordQuery::new(keyword))
    }

    pub fn search_with(&self, query: &KeywordQuery) -> ServiceResult<Vec<EmployeeRecord>> {
        self.with_service("search", |service| service.search(query))
    }

    /// Blank `skill` or `location` imposes no constraint.
    pub fn search_by_filters(
        &self,
        skill: &str,
        location: &str,
    ) -> ServiceResult<Vec<EmployeeRecord>> {
        let filter = EmployeeFilter::new(skill, location);
        self.with_service("search_by_filters", |service| {
            service.search_by_filters(&filter)
        })
    }

    pub fn update_full(
        &self,
        employee_id: &str,
        update: &EmployeeUpdate,
    ) -> ServiceResult<UpdateOutcome> {
        self.with_service("update_full", |service| {
            service.update_full(employee_id, update)
        })
    }

    pub fn update_field(
        &self,
        employee_id: &str,
        field: EmployeeField,
        value: &FieldValue,
    ) -> ServiceResult<UpdateOutcome> {
        self.with_service("update_field", |service| {
            service.update_field(employee_id, field, value)
        })
    }

    pub fn update_field_by_name(
        &self,
        employee_id: &str,
        field_name: &str,
        raw_value: &str,
    ) -> ServiceResult<UpdateOutcome> {
        self.with_service("update_field", |service| {
            service.update_field_by_name(employee_id, field_name, raw_value)
        })
    }

    /// Idempotent; returns whether a row was removed.
    pub fn delete_employee(&self, employee_id: &str) -> ServiceResult<bool> {
        self.with_service("delete_employee", |service| {
            service.delete_employee(employee_id)
        })
    }

    fn with_service<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&EmployeeService<SqliteEmployeeRepository<'_>>) -> ServiceResult<T>,
    ) -> ServiceResult<T> {
        let started_at = Instant::now();
        let result = connect_db(&self.config.db_path, self.config.busy_timeout)
            .map_err(|err| EmployeeServiceError::Repo(err.into()))
            .and_then(|conn| {
                let repo = SqliteEmployeeRepository::try_new(&conn)?;
                let service = EmployeeService::new(repo);
                f(&service)
            });

        if let Err(EmployeeServiceError::Repo(err)) = &result {
            let error_code = match err {
                RepoError::Db(db_err) if db_err.is_busy() => "db_busy",
                _ => "storage_error",
            };
            error!(
                "event=store_operation module=store status=error operation={} duration_ms={} error_code={} error={}",
                operation,
                started_at.elapsed().as_millis(),
                error_code,
                err
            );
        }
        result
    }
}
