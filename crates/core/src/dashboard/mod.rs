//! Dashboard module.
//!
//! Aggregates assets, investments and liabilities into a net-worth summary.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::*;
pub use dashboard_service::*;

#[cfg(test)]
mod dashboard_service_tests;
