//! Investments module - domain models, services, and traits.

mod investments_model;
mod investments_service;
mod investments_traits;

pub use investments_model::{Investment, InvestmentUpdate, NewInvestment};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
