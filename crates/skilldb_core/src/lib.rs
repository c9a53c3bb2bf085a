//! Core domain logic for the employee skill database.
//! This crate owns the `employees` table and every rule applied to it.

pub mod config;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod resume;
pub mod search;
pub mod service;

pub use config::StoreConfig;
pub use export::{write_csv, ExportError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{
    EmployeeId, EmployeeRecord, EmployeeUpdate, EmployeeValidationError, UpdateOutcome,
};
pub use model::field::{EmployeeField, FieldError, FieldValue, SearchColumn};
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository,
};
pub use resume::{ResumeError, ResumeStore};
pub use search::keyword::{EmployeeFilter, KeywordQuery};
pub use service::employee_service::{EmployeeService, EmployeeServiceError, ServiceResult};
pub use service::employee_store::EmployeeStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
