use skilldb_core::db::open_db_in_memory;
use skilldb_core::{
    EmployeeField, EmployeeRecord, EmployeeRepository, EmployeeService, EmployeeServiceError,
    EmployeeUpdate, FieldValue, RepoError, SqliteEmployeeRepository, UpdateOutcome,
};

fn full_record(id: &str) -> EmployeeRecord {
    EmployeeRecord {
        employee_id: id.to_string(),
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        role: "Engineer".to_string(),
        primary_skills: "Python,SQL".to_string(),
        secondary_skills: "Docker".to_string(),
        certifications: "AWS SAA".to_string(),
        total_experience: 6.5,
        relevant_experience: 4.25,
        current_location: "Pune".to_string(),
        career_aspiration: "Staff engineer".to_string(),
        action_plan: "Lead a migration".to_string(),
        target_date: "2027-03-31".to_string(),
        resume_path: "resumes/E001_cv.pdf".to_string(),
    }
}

#[test]
fn create_and_get_roundtrip_preserves_every_field() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let record = full_record("E001");
    repo.create_employee(&record).unwrap();

    let loaded = repo.get_employee("E001").unwrap().unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn duplicate_create_fails_and_keeps_first_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let first = full_record("E001");
    repo.create_employee(&first).unwrap();

    let mut second = full_record("E001");
    second.name = "Someone Else".to_string();
    let err = repo.create_employee(&second).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateKey(ref id) if id == "E001"));

    assert_eq!(repo.get_employee("E001").unwrap().unwrap(), first);
}

#[test]
fn create_accepts_unvalidated_optional_values() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let mut record = EmployeeRecord::new("E009", "Sparse");
    record.total_experience = -2.0;
    record.target_date = "someday".to_string();
    repo.create_employee(&record).unwrap();

    assert_eq!(repo.get_employee("E009").unwrap().unwrap(), record);
}

#[test]
fn get_missing_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    assert!(repo.get_employee("nope").unwrap().is_none());
}

#[test]
fn update_full_replaces_fields_and_preserves_resume_path() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    repo.create_employee(&full_record("E001")).unwrap();

    let update = EmployeeUpdate {
        name: "Asha R.".to_string(),
        role: "Senior Engineer".to_string(),
        total_experience: 7.0,
        ..EmployeeUpdate::default()
    };
    let outcome = repo.update_employee_full("E001", &update).unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated);

    let loaded = repo.get_employee("E001").unwrap().unwrap();
    assert_eq!(loaded.name, "Asha R.");
    assert_eq!(loaded.role, "Senior Engineer");
    assert_eq!(loaded.email, "");
    assert_eq!(loaded.total_experience, 7.0);
    assert_eq!(loaded.resume_path, "resumes/E001_cv.pdf");
}

#[test]
fn update_full_replaces_resume_path_when_supplied() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let record = full_record("E001");
    repo.create_employee(&record).unwrap();

    let mut update = record.to_update();
    update.resume_path = Some("resumes/E001_new.docx".to_string());
    repo.update_employee_full("E001", &update).unwrap();

    let loaded = repo.get_employee("E001").unwrap().unwrap();
    assert_eq!(loaded.resume_path, "resumes/E001_new.docx");
}

#[test]
fn update_full_with_same_values_is_a_successful_noop() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let record = full_record("E001");
    repo.create_employee(&record).unwrap();

    let outcome = repo
        .update_employee_full("E001", &record.to_update())
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated);
    assert_eq!(repo.get_employee("E001").unwrap().unwrap(), record);
}

#[test]
fn update_missing_reports_not_found_outcome() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let outcome = repo
        .update_employee_full("ghost", &EmployeeUpdate::default())
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::NotFound);

    let outcome = repo
        .update_employee_field(
            "ghost",
            EmployeeField::Role,
            &FieldValue::Text("x".to_string()),
        )
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::NotFound);
}

#[test]
fn update_field_changes_only_target_column() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let record = full_record("E001");
    repo.create_employee(&record).unwrap();

    repo.update_employee_field(
        "E001",
        EmployeeField::RelevantExperience,
        &FieldValue::Years(5.5),
    )
    .unwrap();

    let loaded = repo.get_employee("E001").unwrap().unwrap();
    let expected = EmployeeRecord {
        relevant_experience: 5.5,
        ..record
    };
    assert_eq!(loaded, expected);
}

#[test]
fn update_field_rejects_mismatched_value_kind() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    repo.create_employee(&full_record("E001")).unwrap();

    let err = repo
        .update_employee_field(
            "E001",
            EmployeeField::TotalExperience,
            &FieldValue::Text("ten".to_string()),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::InvalidFieldValue {
            field: EmployeeField::TotalExperience,
            ..
        }
    ));
}

#[test]
fn delete_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    repo.create_employee(&full_record("E001")).unwrap();

    assert!(repo.delete_employee("E001").unwrap());
    assert!(repo.get_employee("E001").unwrap().is_none());
    assert!(!repo.delete_employee("E001").unwrap());
    assert!(repo.get_employee("E001").unwrap().is_none());
}

#[test]
fn list_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();
    for id in ["E003", "E001", "E002"] {
        repo.create_employee(&EmployeeRecord::new(id, "x")).unwrap();
    }

    let ids: Vec<_> = repo
        .list_employees()
        .unwrap()
        .into_iter()
        .map(|record| record.employee_id)
        .collect();
    assert_eq!(ids, ["E003", "E001", "E002"]);
}

#[test]
fn service_enforces_required_fields_and_maps_errors() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());

    let err = service
        .add_employee(&EmployeeRecord::new("E001", " "))
        .unwrap_err();
    assert!(matches!(err, EmployeeServiceError::MissingRequiredField("name")));

    service.add_employee(&full_record("E001")).unwrap();
    let err = service.add_employee(&full_record("E001")).unwrap_err();
    assert!(matches!(err, EmployeeServiceError::DuplicateEmployee(ref id) if id == "E001"));
    assert_eq!(err.code(), "duplicate_key");

    let err = service.get_employee("E404").unwrap_err();
    assert!(matches!(err, EmployeeServiceError::EmployeeNotFound(ref id) if id == "E404"));
}

#[test]
fn service_update_field_by_name_validates_before_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = EmployeeService::new(SqliteEmployeeRepository::try_new(&conn).unwrap());
    service.add_employee(&full_record("E001")).unwrap();

    let err = service
        .update_field_by_name("E001", "role = 'x'; DROP TABLE employees; --", "y")
        .unwrap_err();
    assert!(matches!(err, EmployeeServiceError::InvalidFieldName(_)));

    let err = service
        .update_field_by_name("E001", "resume_path", "elsewhere.pdf")
        .unwrap_err();
    assert!(matches!(err, EmployeeServiceError::InvalidFieldName(_)));

    let err = service
        .update_field_by_name("E001", "total_experience", "lots")
        .unwrap_err();
    assert!(matches!(
        err,
        EmployeeServiceError::InvalidFieldValue {
            field: EmployeeField::TotalExperience,
            ..
        }
    ));

    let outcome = service
        .update_field_by_name("E001", "total_experience", "8")
        .unwrap();
    assert!(outcome.is_updated());
    let loaded = service.get_employee("E001").unwrap();
    assert_eq!(loaded.total_experience, 8.0);
    assert_eq!(loaded.resume_path, "resumes/E001_cv.pdf");
}
