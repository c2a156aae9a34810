use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_console: i64,
    pub requests: i64,
    pub signed: i64,
    pub cached: i64,
    pub pending: i64,
    pub duplicate_pending: i64,
    pub key_mismatches: i64,
    pub malformed: i64,
    pub signing_failures: i64,
    pub storage_failures: i64,
    pub not_ca: i64,
    pub manual_signed: i64,
}
