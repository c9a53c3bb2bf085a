//! Employee record model.
//!
//! # Responsibility
//! - Define the record shape stored in the `employees` table.
//! - Define the full-update payload that replaces every mutable field.
//!
//! # Invariants
//! - `employee_id` never changes after creation.
//! - `employee_id` and `name` are the only fields required at creation time.
//! - Empty strings mean "not provided"; no other validation is applied.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Caller-assigned employee key.
pub type EmployeeId = String;

/// Validation error raised before a new record reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// A required field is empty or whitespace only.
    MissingRequiredField(&'static str),
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField(field) => write!(f, "{field} is required"),
        }
    }
}

impl Error for EmployeeValidationError {}

/// One employee's skill profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Primary key.
    pub employee_id: EmployeeId,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Informal comma-separated list.
    pub primary_skills: String,
    pub secondary_skills: String,
    pub certifications: String,
    /// Years, fractional allowed.
    pub total_experience: f64,
    /// Years, fractional allowed.
    pub relevant_experience: f64,
    pub current_location: String,
    pub career_aspiration: String,
    pub action_plan: String,
    /// ISO date string, stored verbatim.
    pub target_date: String,
    /// Relative path of the stored résumé, or empty.
    pub resume_path: String,
}

impl EmployeeRecord {
    /// Creates a record with the two required fields and everything else empty.
    pub fn new(employee_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Checks the creation-time requirements.
    pub fn validate_required(&self) -> Result<(), EmployeeValidationError> {
        if self.employee_id.trim().is_empty() {
            return Err(EmployeeValidationError::MissingRequiredField("employee_id"));
        }
        if self.name.trim().is_empty() {
            return Err(EmployeeValidationError::MissingRequiredField("name"));
        }
        Ok(())
    }

    /// Returns whether a résumé file is attached.
    pub fn has_resume(&self) -> bool {
        !self.resume_path.is_empty()
    }

    /// Builds the full-update payload that would leave this record unchanged.
    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            primary_skills: self.primary_skills.clone(),
            secondary_skills: self.secondary_skills.clone(),
            certifications: self.certifications.clone(),
            total_experience: self.total_experience,
            relevant_experience: self.relevant_experience,
            current_location: self.current_location.clone(),
            career_aspiration: self.career_aspiration.clone(),
            action_plan: self.action_plan.clone(),
            target_date: self.target_date.clone(),
            resume_path: None,
        }
    }
}

/// Replacement values for every mutable field of one record.
///
/// `resume_path = None` keeps the stored path; `Some(path)` replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: String,
    pub email: String,
    pub role: String,
    pub primary_skills: String,
    pub secondary_skills: String,
    pub certifications: String,
    pub total_experience: f64,
    pub relevant_experience: f64,
    pub current_location: String,
    pub career_aspiration: String,
    pub action_plan: String,
    pub target_date: String,
    pub resume_path: Option<String>,
}

/// Result of an update addressed by identifier.
///
/// A missing identifier is reported, not raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

impl UpdateOutcome {
    pub fn from_changed_rows(changed: usize) -> Self {
        if changed == 0 {
            Self::NotFound
        } else {
            Self::Updated
        }
    }

    pub fn is_updated(self) -> bool {
        matches!(self, Self::Updated)
    }
}
