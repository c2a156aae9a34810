//! Statistics event types for tracking request outcomes.

use serde::{Deserialize, Serialize};

/// Every counter that can be changed through `CaHandler::update_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    TimestampConsole,
    Requests,
    Signed,
    Cached,
    Pending,
    DuplicatePending,
    KeyMismatches,
    Malformed,
    SigningFailures,
    StorageFailures,
    NotCa,
    ManualSigned,
}
