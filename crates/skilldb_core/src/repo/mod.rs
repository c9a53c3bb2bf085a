//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for employee records.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Every mutating repository call is one SQL statement.
//! - Repository APIs return semantic errors (`DuplicateKey`) and outcomes
//!   (`UpdateOutcome::NotFound`) in addition to DB transport errors.

pub mod employee_repo;
