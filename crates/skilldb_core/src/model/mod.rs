//! Employee skill domain model.
//!
//! # Responsibility
//! - Define the canonical employee record persisted by the record store.
//! - Enumerate the columns that may be updated or searched by name.
//!
//! # Invariants
//! - Every record is identified by a caller-assigned, immutable `employee_id`.
//! - Column names only ever come from closed enumerations, never from input.

pub mod employee;
pub mod field;
