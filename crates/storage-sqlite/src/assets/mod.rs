//! SQLite storage implementation for assets.

mod model;
mod repository;

pub use model::{AssetChangesDB, AssetDB};
pub use repository::AssetRepository;
