use std::sync::Arc;
use parking_lot::Mutex;
use crate::ca::structs::ca_handler::CaHandler;

impl CaHandler {
    /// Runs `f` while holding the lock for `hostname`. The table entry is
    /// dropped again once no caller holds or waits for it.
    pub(crate) fn with_hostname_lock<T>(&self, hostname: &str, f: impl FnOnce() -> T) -> T {
        let lock = {
            let mut table = self.hostname_locks.lock();
            table
                .entry(hostname.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        let result = {
            let _guard = lock.lock();
            f()
        };

        let mut table = self.hostname_locks.lock();
        let unused = table
            .get(hostname)
            .is_some_and(|entry| Arc::ptr_eq(entry, &lock) && Arc::strong_count(entry) == 2);
        if unused {
            table.remove(hostname);
        }
        result
    }

    pub fn active_hostname_locks(&self) -> usize {
        self.hostname_locks.lock().len()
    }
}
