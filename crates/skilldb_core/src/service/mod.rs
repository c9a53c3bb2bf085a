//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Scope one SQLite connection to each store operation.

pub mod employee_service;
pub mod employee_store;
