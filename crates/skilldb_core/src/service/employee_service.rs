//! Employee use-case service.
//!
//! # Responsibility
//! - Provide add/get/search/update/delete entry points over a repository.
//! - Enforce creation-time required fields.
//! - Translate repository failures into caller-facing error kinds.
//!
//! # Invariants
//! - Update on a missing identifier is an outcome, not an error.
//! - Delete never fails because the record is already absent.
//! - Log events carry identifiers and counts only, never record contents.

use crate::model::employee::{
    EmployeeRecord, EmployeeUpdate, EmployeeValidationError, UpdateOutcome,
};
use crate::model::field::{EmployeeField, FieldError, FieldValue};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use crate::search::keyword::{EmployeeFilter, KeywordQuery};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, EmployeeServiceError>;

/// Service error for employee use-cases.
#[derive(Debug)]
pub enum EmployeeServiceError {
    /// Creation input lacks `employee_id` or `name`.
    MissingRequiredField(&'static str),
    /// Identifier already exists.
    DuplicateEmployee(String),
    /// Point lookup found nothing.
    EmployeeNotFound(String),
    /// Single-field update named an unknown column.
    InvalidFieldName(String),
    /// Single-field update value does not fit the column.
    InvalidFieldValue { field: EmployeeField, value: String },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for EmployeeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField(field) => write!(f, "{field} is required"),
            Self::DuplicateEmployee(id) => write!(f, "employee id already exists: {id}"),
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
            Self::InvalidFieldName(name) => {
                write!(f, "{}", FieldError::InvalidFieldName(name.clone()))
            }
            Self::InvalidFieldValue { field, value } => {
                write!(f, "invalid value `{value}` for field {field}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EmployeeServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl EmployeeServiceError {
    /// Stable machine-readable code for log lines and front ends.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredField(_) => "missing_required_field",
            Self::DuplicateEmployee(_) => "duplicate_key",
            Self::EmployeeNotFound(_) => "not_found",
            Self::InvalidFieldName(_) => "invalid_field_name",
            Self::InvalidFieldValue { .. } => "invalid_field_value",
            Self::Repo(_) => "storage_error",
        }
    }
}

impl From<RepoError> for EmployeeServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateKey(id) => Self::DuplicateEmployee(id),
            RepoError::InvalidFieldValue { field, value } => Self::InvalidFieldValue {
                field,
                value: value.to_string(),
            },
            other => Self::Repo(other),
        }
    }
}

impl From<FieldError> for EmployeeServiceError {
    fn from(value: FieldError) -> Self {
        match value {
            FieldError::InvalidFieldName(name) => Self::InvalidFieldName(name),
            FieldError::InvalidFieldValue { field, value } => {
                Self::InvalidFieldValue { field, value }
            }
        }
    }
}

impl From<EmployeeValidationError> for EmployeeServiceError {
    fn from(value: EmployeeValidationError) -> Self {
        match value {
            EmployeeValidationError::MissingRequiredField(field) => {
                Self::MissingRequiredField(field)
            }
        }
    }
}

/// Employee service facade over repository implementations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new record.
    ///
    /// `resume_path` is stored as given; the file itself is the caller's.
    pub fn add_employee(&self, record: &EmployeeRecord) -> ServiceResult<()> {
        record.validate_required()?;
        match self.repo.create_employee(record) {
            Ok(()) => {
                info!(
                    "event=employee_create module=service status=ok employee_id={} has_resume={}",
                    record.employee_id,
                    record.has_resume()
                );
                Ok(())
            }
            Err(RepoError::DuplicateKey(id)) => {
                warn!(
                    "event=employee_create module=service status=rejected error_code=duplicate_key employee_id={id}"
                );
                Err(EmployeeServiceError::DuplicateEmployee(id))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Exact lookup by identifier.
    pub fn get_employee(&self, employee_id: &str) -> ServiceResult<EmployeeRecord> {
        self.repo
            .get_employee(employee_id)?
            .ok_or_else(|| EmployeeServiceError::EmployeeNotFound(employee_id.to_string()))
    }

    /// Every record in insertion order.
    pub fn list_employees(&self) -> ServiceResult<Vec<EmployeeRecord>> {
        Ok(self.repo.list_employees()?)
    }

    /// Keyword search; blank keywords yield an empty list.
    pub fn search(&self, query: &KeywordQuery) -> ServiceResult<Vec<EmployeeRecord>> {
        let records = self.repo.search_employees(query)?;
        debug!(
            "event=employee_search module=service status=ok hits={}",
            records.len()
        );
        Ok(records)
    }

    /// Skill/location filter search.
    pub fn search_by_filters(&self, filter: &EmployeeFilter) -> ServiceResult<Vec<EmployeeRecord>> {
        let records = self.repo.filter_employees(filter)?;
        debug!(
            "event=employee_filter module=service status=ok hits={}",
            records.len()
        );
        Ok(records)
    }

    /// Replaces every mutable field of one record.
    pub fn update_full(
        &self,
        employee_id: &str,
        update: &EmployeeUpdate,
    ) -> ServiceResult<UpdateOutcome> {
        let outcome = self.repo.update_employee_full(employee_id, update)?;
        log_update_outcome("employee_update_full", employee_id, outcome);
        Ok(outcome)
    }

    /// Replaces one column of one record.
    pub fn update_field(
        &self,
        employee_id: &str,
        field: EmployeeField,
        value: &FieldValue,
    ) -> ServiceResult<UpdateOutcome> {
        let outcome = self.repo.update_employee_field(employee_id, field, value)?;
        log_update_outcome("employee_update_field", employee_id, outcome);
        Ok(outcome)
    }

    /// Resolves `field_name` and `raw_value` before any statement is built.
    pub fn update_field_by_name(
        &self,
        employee_id: &str,
        field_name: &str,
        raw_value: &str,
    ) -> ServiceResult<UpdateOutcome> {
        let field = match field_name.parse::<EmployeeField>() {
            Ok(field) => field,
            Err(err) => {
                warn!(
                    "event=employee_update_field module=service status=rejected error_code=invalid_field_name employee_id={employee_id}"
                );
                return Err(err.into());
            }
        };
        let value = field.parse_value(raw_value)?;
        self.update_field(employee_id, field, &value)
    }

    /// Removes a record; returns whether a row existed.
    pub fn delete_employee(&self, employee_id: &str) -> ServiceResult<bool> {
        let removed = self.repo.delete_employee(employee_id)?;
        info!(
            "event=employee_delete module=service status=ok employee_id={employee_id} removed={removed}"
        );
        Ok(removed)
    }
}

fn log_update_outcome(event: &str, employee_id: &str, outcome: UpdateOutcome) {
    match outcome {
        UpdateOutcome::Updated => {
            info!("event={event} module=service status=ok employee_id={employee_id}")
        }
        UpdateOutcome::NotFound => warn!(
            "event={event} module=service status=noop error_code=not_found employee_id={employee_id}"
        ),
    }
}
