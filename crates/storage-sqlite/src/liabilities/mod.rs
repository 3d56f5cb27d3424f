//! SQLite storage implementation for liabilities.

mod model;
mod repository;

pub use model::{LiabilityChangesDB, LiabilityDB};
pub use repository::LiabilityRepository;
