/// Investment type assigned to every mutual fund synced from a broker
pub const MUTUAL_FUND_INVESTMENT_TYPE: &str = "Mutual Fund";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Intermediate precision used when computing gain/loss ratios
pub const RATIO_DECIMAL_PRECISION: u32 = 4;

/// Timestamp layout used in exports
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
