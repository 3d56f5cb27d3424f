//! SQLite storage implementation for Fintrack.
//!
//! This crate is the only place where Diesel dependencies exist. It
//! implements the repository traits defined in `fintrack-core`:
//! - connection pooling and the single-writer actor
//! - embedded migrations
//! - repositories for assets, liabilities and investments
//!
//! ```text
//! core (domain)          connect (sync)
//!       │                      │
//!       └──────────┬───────────┘
//!                  │ traits
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod assets;
pub mod investments;
pub mod liabilities;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use assets::AssetRepository;
pub use investments::InvestmentRepository;
pub use liabilities::LiabilityRepository;

// Re-export from fintrack-core for convenience
pub use fintrack_core::errors::{DatabaseError, Error, Result};
