//! Request signing for the ICICIDirect API.
//!
//! Every request carries a checksum computed over the request timestamp, the
//! serialized payload and the client secret.

use chrono::{DateTime, Local};

/// Format of the `time_stamp` envelope field, e.g. `14-Oct-2026 02:00:00`.
pub const TIMESTAMP_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

/// Lowercase hex MD5 digest of `timestamp + payload + secret`.
pub fn sign(timestamp: &str, payload: &str, secret: &str) -> String {
    let mut input = String::with_capacity(timestamp.len() + payload.len() + secret.len());
    input.push_str(timestamp);
    input.push_str(payload);
    input.push_str(secret);
    format!("{:x}", md5::compute(input.as_bytes()))
}

pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
