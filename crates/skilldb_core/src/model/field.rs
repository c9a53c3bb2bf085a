//! Named columns of the employee record.
//!
//! # Responsibility
//! - Enumerate the columns that support single-field updates.
//! - Enumerate the columns scanned by keyword search, with one shared
//!   case-insensitive substring predicate.
//!
//! # Invariants
//! - `employee_id` and `resume_path` are never single-field update targets.
//! - SQL column names are `&'static str` owned by these enums.

use super::employee::EmployeeRecord;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Errors raised while resolving a field name or its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Name does not match any updatable column.
    InvalidFieldName(String),
    /// Value cannot be stored in the column (e.g. text for a numeric field).
    InvalidFieldValue { field: EmployeeField, value: String },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFieldName(name) => write!(
                f,
                "invalid field name `{name}`; expected one of {}",
                EmployeeField::ALL
                    .iter()
                    .map(|field| field.column())
                    .collect::<Vec<_>>()
                    .join("|")
            ),
            Self::InvalidFieldValue { field, value } => {
                write!(f, "invalid value `{value}` for field {}", field.column())
            }
        }
    }
}

impl Error for FieldError {}

/// Columns that can be replaced one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeField {
    Name,
    Email,
    Role,
    PrimarySkills,
    SecondarySkills,
    Certifications,
    TotalExperience,
    RelevantExperience,
    CurrentLocation,
    CareerAspiration,
    ActionPlan,
    TargetDate,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 12] = [
        Self::Name,
        Self::Email,
        Self::Role,
        Self::PrimarySkills,
        Self::SecondarySkills,
        Self::Certifications,
        Self::TotalExperience,
        Self::RelevantExperience,
        Self::CurrentLocation,
        Self::CareerAspiration,
        Self::ActionPlan,
        Self::TargetDate,
    ];

    /// Column name in the `employees` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::PrimarySkills => "primary_skills",
            Self::SecondarySkills => "secondary_skills",
            Self::Certifications => "certifications",
            Self::TotalExperience => "total_experience",
            Self::RelevantExperience => "relevant_experience",
            Self::CurrentLocation => "current_location",
            Self::CareerAspiration => "career_aspiration",
            Self::ActionPlan => "action_plan",
            Self::TargetDate => "target_date",
        }
    }

    /// Human-readable label used by front ends.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
            Self::PrimarySkills => "Primary Skills",
            Self::SecondarySkills => "Secondary Skills",
            Self::Certifications => "Certifications",
            Self::TotalExperience => "Total Experience",
            Self::RelevantExperience => "Relevant Experience",
            Self::CurrentLocation => "Current Location",
            Self::CareerAspiration => "Career Aspiration",
            Self::ActionPlan => "Action Plan",
            Self::TargetDate => "Target Date",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::TotalExperience | Self::RelevantExperience)
    }

    /// Converts caller text into a value of the column's kind.
    pub fn parse_value(self, raw: &str) -> Result<FieldValue, FieldError> {
        if !self.is_numeric() {
            return Ok(FieldValue::Text(raw.to_string()));
        }

        match raw.trim().parse::<f64>() {
            Ok(years) if years.is_finite() => Ok(FieldValue::Years(years)),
            _ => Err(FieldError::InvalidFieldValue {
                field: self,
                value: raw.to_string(),
            }),
        }
    }

    /// Returns whether `value` has the kind this column stores.
    pub fn accepts(self, value: &FieldValue) -> bool {
        match value {
            FieldValue::Text(_) => !self.is_numeric(),
            FieldValue::Years(years) => self.is_numeric() && years.is_finite(),
        }
    }
}

impl Display for EmployeeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for EmployeeField {
    type Err = FieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.column() == normalized)
            .ok_or_else(|| FieldError::InvalidFieldName(value.to_string()))
    }
}

/// New value for a single-field update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Years(f64),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Years(years) => write!(f, "{years}"),
        }
    }
}

/// Columns scanned by keyword search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchColumn {
    EmployeeId,
    Name,
    Email,
    Role,
    PrimarySkills,
    SecondarySkills,
    Certifications,
    CurrentLocation,
}

impl SearchColumn {
    pub const ALL: [SearchColumn; 8] = [
        Self::EmployeeId,
        Self::Name,
        Self::Email,
        Self::Role,
        Self::PrimarySkills,
        Self::SecondarySkills,
        Self::Certifications,
        Self::CurrentLocation,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Self::EmployeeId => "employee_id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::PrimarySkills => "primary_skills",
            Self::SecondarySkills => "secondary_skills",
            Self::Certifications => "certifications",
            Self::CurrentLocation => "current_location",
        }
    }

    pub fn value_of(self, record: &EmployeeRecord) -> &str {
        match self {
            Self::EmployeeId => &record.employee_id,
            Self::Name => &record.name,
            Self::Email => &record.email,
            Self::Role => &record.role,
            Self::PrimarySkills => &record.primary_skills,
            Self::SecondarySkills => &record.secondary_skills,
            Self::Certifications => &record.certifications,
            Self::CurrentLocation => &record.current_location,
        }
    }

    /// Case-insensitive substring test against this column.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches(self, record: &EmployeeRecord, needle_lower: &str) -> bool {
        contains_ignore_case(self.value_of(record), needle_lower)
    }
}

/// Unicode-aware case-insensitive substring test.
///
/// `needle_lower` must already be lowercased.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::{EmployeeField, FieldError, FieldValue, SearchColumn};
    use crate::model::employee::EmployeeRecord;

    #[test]
    fn parses_known_column_names_case_insensitively() {
        assert_eq!("role".parse::<EmployeeField>(), Ok(EmployeeField::Role));
        assert_eq!(
            " Primary_Skills ".parse::<EmployeeField>(),
            Ok(EmployeeField::PrimarySkills)
        );
    }

    #[test]
    fn rejects_identifier_resume_and_injection_names() {
        for name in ["employee_id", "resume_path", "role = 'x' --", "", "salary"] {
            let err = name.parse::<EmployeeField>().unwrap_err();
            assert_eq!(err, FieldError::InvalidFieldName(name.to_string()));
        }
    }

    #[test]
    fn numeric_fields_require_numbers() {
        assert_eq!(
            EmployeeField::TotalExperience.parse_value(" 4.5 "),
            Ok(FieldValue::Years(4.5))
        );
        assert!(matches!(
            EmployeeField::RelevantExperience.parse_value("five"),
            Err(FieldError::InvalidFieldValue { .. })
        ));
        assert!(EmployeeField::TotalExperience
            .parse_value("NaN")
            .is_err());
        assert_eq!(
            EmployeeField::Role.parse_value("Senior Engineer"),
            Ok(FieldValue::Text("Senior Engineer".to_string()))
        );
    }

    #[test]
    fn accepts_checks_value_kind() {
        assert!(EmployeeField::Role.accepts(&FieldValue::Text("x".to_string())));
        assert!(!EmployeeField::Role.accepts(&FieldValue::Years(1.0)));
        assert!(!EmployeeField::TotalExperience.accepts(&FieldValue::Text("1".to_string())));
    }

    #[test]
    fn field_value_serializes_untagged() {
        let text = FieldValue::Text("Senior Engineer".to_string());
        let years = FieldValue::Years(4.5);
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"Senior Engineer\"");
        assert_eq!(serde_json::to_string(&years).unwrap(), "4.5");
        assert_eq!(serde_json::from_str::<FieldValue>("4.5").unwrap(), years);
        assert_eq!(
            serde_json::from_str::<FieldValue>("\"4.5\"").unwrap(),
            FieldValue::Text("4.5".to_string())
        );
    }

    #[test]
    fn field_names_serialize_as_column_names() {
        let json = serde_json::to_string(&EmployeeField::TotalExperience).unwrap();
        assert_eq!(json, "\"total_experience\"");
        for field in EmployeeField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json.trim_matches('"'), field.column());
        }
    }

    #[test]
    fn search_column_matching_ignores_case() {
        let mut record = EmployeeRecord::new("E001", "Asha Rao");
        record.current_location = "Pune".to_string();
        record.career_aspiration = "pune lead".to_string();

        assert!(SearchColumn::CurrentLocation.matches(&record, "pune"));
        assert!(SearchColumn::Name.matches(&record, "asha"));
        assert!(!SearchColumn::ALL
            .iter()
            .any(|column| column.matches(&record, "lead")));
    }
}
