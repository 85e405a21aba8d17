//! Domain types shared across the annuaire backend.

pub mod error;
pub mod types;
pub mod validation;
