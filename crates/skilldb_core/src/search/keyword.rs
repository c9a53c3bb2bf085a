//! Case-insensitive substring search over employee records.
//!
//! # Responsibility
//! - Match a keyword against every `SearchColumn` with one predicate.
//! - Apply optional skill and location filters with AND semantics.
//!
//! # Invariants
//! - Matching is Unicode-aware and ignores case.
//! - Blank keywords match nothing; blank filters impose no constraint.
//! - Whitespace only decides blankness; a non-blank keyword or filter is
//!   matched verbatim, surrounding spaces included.
//! - Results keep insertion order; there is no ranking.

use crate::model::employee::EmployeeRecord;
use crate::model::field::{contains_ignore_case, SearchColumn};
use crate::repo::employee_repo::{scan_employees, RepoResult};
use rusqlite::Connection;

/// Keyword search options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordQuery {
    /// Raw user keyword, matched as typed.
    pub text: String,
    /// Maximum number of records to return. `None` returns every match.
    pub limit: Option<u32>,
}

impl KeywordQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: None,
        }
    }

    /// Lowercased keyword, or `None` when blank.
    pub fn needle(&self) -> Option<String> {
        if self.text.trim().is_empty() {
            None
        } else {
            Some(self.text.to_lowercase())
        }
    }

    /// Returns whether any searchable column of `record` contains the keyword.
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        self.needle()
            .is_some_and(|needle| record_matches(record, &needle))
    }
}

/// Optional skill/location filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Substring of primary or secondary skills.
    pub skill: Option<String>,
    /// Substring of current location.
    pub location: Option<String>,
}

impl EmployeeFilter {
    pub fn new(skill: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            skill: Some(skill.into()),
            location: Some(location.into()),
        }
    }

    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        let skill = normalize_filter(self.skill.as_deref());
        let location = normalize_filter(self.location.as_deref());
        filter_matches(record, skill.as_deref(), location.as_deref())
    }
}

/// Returns every record with a searchable column containing the keyword.
///
/// Returns an empty list for blank keywords without querying storage.
pub fn search_employees(conn: &Connection, query: &KeywordQuery) -> RepoResult<Vec<EmployeeRecord>> {
    let Some(needle) = query.needle() else {
        return Ok(Vec::new());
    };
    if query.limit == Some(0) {
        return Ok(Vec::new());
    }

    let mut records = scan_employees(conn, |record| record_matches(record, &needle))?;
    if let Some(limit) = query.limit {
        records.truncate(limit as usize);
    }
    Ok(records)
}

/// Returns every record satisfying both filters.
pub fn filter_employees(
    conn: &Connection,
    filter: &EmployeeFilter,
) -> RepoResult<Vec<EmployeeRecord>> {
    let skill = normalize_filter(filter.skill.as_deref());
    let location = normalize_filter(filter.location.as_deref());
    scan_employees(conn, |record| {
        filter_matches(record, skill.as_deref(), location.as_deref())
    })
}

fn record_matches(record: &EmployeeRecord, needle: &str) -> bool {
    SearchColumn::ALL
        .iter()
        .any(|column| column.matches(record, needle))
}

fn filter_matches(record: &EmployeeRecord, skill: Option<&str>, location: Option<&str>) -> bool {
    let skill_ok = skill.map_or(true, |skill| {
        SearchColumn::PrimarySkills.matches(record, skill)
            || SearchColumn::SecondarySkills.matches(record, skill)
    });
    let location_ok = location.map_or(true, |location| {
        contains_ignore_case(&record.current_location, location)
    });
    skill_ok && location_ok
}

fn normalize_filter(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_lowercase)
}
