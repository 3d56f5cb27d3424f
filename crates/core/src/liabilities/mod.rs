//! Liabilities module - domain models, services, and traits.

mod liabilities_model;
mod liabilities_service;
mod liabilities_traits;

pub use liabilities_model::{Liability, NewLiability};
pub use liabilities_service::LiabilityService;
pub use liabilities_traits::{LiabilityRepositoryTrait, LiabilityServiceTrait};
