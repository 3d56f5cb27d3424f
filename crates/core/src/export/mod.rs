//! CSV export of assets, liabilities and investments.

mod csv_export;

pub use csv_export::{export_assets_csv, export_investments_csv, export_liabilities_csv};
