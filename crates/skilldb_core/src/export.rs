//! Delimited-text export of employee records.
//!
//! Columns follow the record layout, headed by display labels.

use crate::model::employee::EmployeeRecord;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

pub const CSV_HEADERS: [&str; 14] = [
    "Employee ID",
    "Name",
    "Email",
    "Role",
    "Primary Skills",
    "Secondary Skills",
    "Certifications",
    "Total Experience",
    "Relevant Experience",
    "Current Location",
    "Career Aspiration",
    "Action Plan",
    "Target Date",
    "Resume Path",
];

#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Io(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "csv export failed: {err}"),
            Self::Io(err) => write!(f, "csv export failed: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Writes a header row and one row per record.
pub fn write_csv<W: Write>(writer: W, records: &[EmployeeRecord]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    for record in records {
        let total = record.total_experience.to_string();
        let relevant = record.relevant_experience.to_string();
        csv_writer.write_record([
            record.employee_id.as_str(),
            record.name.as_str(),
            record.email.as_str(),
            record.role.as_str(),
            record.primary_skills.as_str(),
            record.secondary_skills.as_str(),
            record.certifications.as_str(),
            total.as_str(),
            relevant.as_str(),
            record.current_location.as_str(),
            record.career_aspiration.as_str(),
            record.action_plan.as_str(),
            record.target_date.as_str(),
            record.resume_path.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    info!(
        "event=csv_export module=export status=ok rows={}",
        records.len()
    );
    Ok(())
}
