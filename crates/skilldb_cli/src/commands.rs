//! Command execution against the record store.
//!
//! Every failure is returned as an error for `main` to print; nothing here
//! panics on user input.

use crate::args::{Cli, Commands, RecordFields};
use anyhow::{Context, Result};
use skilldb_core::{
    write_csv, EmployeeRecord, EmployeeStore, KeywordQuery, ResumeStore, StoreConfig,
    UpdateOutcome,
};
use std::fs::File;
use std::io::Write;
use std::time::Duration;

const RECORD_LABELS: [&str; 14] = skilldb_core::export::CSV_HEADERS;

/// Executes one parsed command, writing user-facing output to `out`.
pub fn execute(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config = StoreConfig::new(&cli.db)
        .with_resume_dir(&cli.resumes)
        .with_busy_timeout(Duration::from_millis(cli.busy_timeout_ms));
    let store = EmployeeStore::open(config)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let json = cli.json;

    match cli.command {
        Commands::Add {
            employee_id,
            name,
            fields,
        } => {
            let mut record = EmployeeRecord::new(employee_id, name);
            apply_fields(&mut record, &fields);
            if let Some(path) = &fields.resume {
                let resumes = ResumeStore::open(&store.config().resume_dir)?;
                record.resume_path = resumes.save_from_path(&record.employee_id, path)?;
            }
            store.add_employee(&record)?;
            writeln!(out, "Employee {} added successfully.", record.name)?;
        }
        Commands::Get { employee_id } => {
            let record = store.get_employee(&employee_id)?;
            print_records(out, &[record], json)?;
        }
        Commands::List => {
            print_records(out, &store.list_employees()?, json)?;
        }
        Commands::Search { keyword, limit } => {
            if keyword.trim().is_empty() {
                writeln!(out, "Please enter a value to search.")?;
                return Ok(());
            }
            let query = KeywordQuery {
                text: keyword,
                limit,
            };
            print_records(out, &store.search_with(&query)?, json)?;
        }
        Commands::Filter { skill, location } => {
            print_records(out, &store.search_by_filters(&skill, &location)?, json)?;
        }
        Commands::Update {
            employee_id,
            name,
            fields,
        } => {
            let mut record = store.get_employee(&employee_id)?;
            if let Some(name) = name {
                record.name = name;
            }
            apply_fields(&mut record, &fields);
            let mut update = record.to_update();
            if let Some(path) = &fields.resume {
                let resumes = ResumeStore::open(&store.config().resume_dir)?;
                update.resume_path = Some(resumes.save_from_path(&employee_id, path)?);
            }
            let outcome = store.update_full(&employee_id, &update)?;
            report_update(out, &employee_id, outcome)?;
        }
        Commands::Set {
            employee_id,
            field,
            value,
        } => {
            let outcome = store.update_field_by_name(&employee_id, &field, &value)?;
            report_update(out, &employee_id, outcome)?;
        }
        Commands::Delete { employee_id } => {
            let removed = store.delete_employee(&employee_id)?;
            if removed {
                writeln!(out, "Employee '{employee_id}' deleted.")?;
            } else {
                writeln!(out, "Employee '{employee_id}' was not present; nothing deleted.")?;
            }
        }
        Commands::Export {
            output,
            keyword,
            skill,
            location,
        } => {
            let records = match keyword {
                Some(keyword) => store.search(&keyword)?,
                None => store.search_by_filters(
                    skill.as_deref().unwrap_or_default(),
                    location.as_deref().unwrap_or_default(),
                )?,
            };
            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("failed to create `{}`", path.display()))?;
                    write_csv(file, &records)?;
                    writeln!(out, "Exported {} record(s) to {}.", records.len(), path.display())?;
                }
                None => write_csv(&mut *out, &records)?,
            }
        }
    }

    Ok(())
}

fn apply_fields(record: &mut EmployeeRecord, fields: &RecordFields) {
    let text_fields = [
        (&fields.email, &mut record.email),
        (&fields.role, &mut record.role),
        (&fields.primary_skills, &mut record.primary_skills),
        (&fields.secondary_skills, &mut record.secondary_skills),
        (&fields.certifications, &mut record.certifications),
        (&fields.location, &mut record.current_location),
        (&fields.aspiration, &mut record.career_aspiration),
        (&fields.action_plan, &mut record.action_plan),
        (&fields.target_date, &mut record.target_date),
    ];
    for (source, target) in text_fields {
        if let Some(value) = source {
            target.clone_from(value);
        }
    }
    if let Some(years) = fields.total_experience {
        record.total_experience = years;
    }
    if let Some(years) = fields.relevant_experience {
        record.relevant_experience = years;
    }
}

fn report_update(out: &mut dyn Write, employee_id: &str, outcome: UpdateOutcome) -> Result<()> {
    match outcome {
        UpdateOutcome::Updated => {
            writeln!(out, "Employee '{employee_id}' record updated successfully.")?
        }
        UpdateOutcome::NotFound => {
            eprintln!("warning: employee '{employee_id}' not found; nothing updated.")
        }
    }
    Ok(())
}

fn print_records(out: &mut dyn Write, records: &[EmployeeRecord], json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(records)?)?;
        return Ok(());
    }
    if records.is_empty() {
        writeln!(out, "No matching records found.")?;
        return Ok(());
    }

    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        let total = record.total_experience.to_string();
        let relevant = record.relevant_experience.to_string();
        let values = [
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
        ];
        for (label, value) in RECORD_LABELS.iter().zip(values) {
            writeln!(out, "{label:>20}: {value}")?;
        }
    }
    Ok(())
}
