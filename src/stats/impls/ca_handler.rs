use std::sync::atomic::{AtomicI64, Ordering};
use crate::ca::structs::ca_handler::CaHandler;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

impl CaHandler {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_console: self.stats.timestamp_run_console.load(Ordering::SeqCst),
            requests: self.stats.requests.load(Ordering::SeqCst),
            signed: self.stats.signed.load(Ordering::SeqCst),
            cached: self.stats.cached.load(Ordering::SeqCst),
            pending: self.stats.pending.load(Ordering::SeqCst),
            duplicate_pending: self.stats.duplicate_pending.load(Ordering::SeqCst),
            key_mismatches: self.stats.key_mismatches.load(Ordering::SeqCst),
            malformed: self.stats.malformed.load(Ordering::SeqCst),
            signing_failures: self.stats.signing_failures.load(Ordering::SeqCst),
            storage_failures: self.stats.storage_failures.load(Ordering::SeqCst),
            not_ca: self.stats.not_ca.load(Ordering::SeqCst),
            manual_signed: self.stats.manual_signed.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = self.stats_counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::TimestampConsole => &self.stats.timestamp_run_console,
            StatsEvent::Requests => &self.stats.requests,
            StatsEvent::Signed => &self.stats.signed,
            StatsEvent::Cached => &self.stats.cached,
            StatsEvent::Pending => &self.stats.pending,
            StatsEvent::DuplicatePending => &self.stats.duplicate_pending,
            StatsEvent::KeyMismatches => &self.stats.key_mismatches,
            StatsEvent::Malformed => &self.stats.malformed,
            StatsEvent::SigningFailures => &self.stats.signing_failures,
            StatsEvent::StorageFailures => &self.stats.storage_failures,
            StatsEvent::NotCa => &self.stats.not_ca,
            StatsEvent::ManualSigned => &self.stats.manual_signed,
        }
    }
}
