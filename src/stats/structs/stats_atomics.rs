use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub requests: AtomicI64,
    pub signed: AtomicI64,
    pub cached: AtomicI64,
    pub pending: AtomicI64,
    pub duplicate_pending: AtomicI64,
    pub key_mismatches: AtomicI64,
    pub malformed: AtomicI64,
    pub signing_failures: AtomicI64,
    pub storage_failures: AtomicI64,
    pub not_ca: AtomicI64,
    pub manual_signed: AtomicI64,
}
