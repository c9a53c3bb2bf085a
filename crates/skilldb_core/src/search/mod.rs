//! Employee search entry points.
//!
//! # Responsibility
//! - Keyword search across the fixed set of searchable columns.
//! - Skill/location filter search.

pub mod keyword;
