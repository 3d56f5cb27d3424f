//! Fintrack Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the finance tracker: assets,
//! liabilities, investments, the net-worth dashboard and CSV export.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod assets;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod export;
pub mod investments;
pub mod liabilities;
mod validation;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
