//! Request handling statistics.
//!
//! Atomic counters updated by the request handler and read by the periodic
//! console report and the `/stats` endpoint. Counters are plain atomics so
//! concurrent requests never contend on a lock to record an outcome.
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_ca::stats::enums::stats_event::StatsEvent;
//!
//! handler.update_stats(StatsEvent::Signed, 1);
//! let stats = handler.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
