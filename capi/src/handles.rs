//! Opaque handle tables.
//!
//! Foreign callers never see raw addresses: every resource that crosses the
//! boundary is parked in a table and named by an opaque non-zero `u64`.
//! Releasing a handle removes the table entry and drops the resource;
//! forgetting to release is a caller-side leak, not a core defect.
//!
//! Each table has its own mutex, held only for map operations; there is no
//! process-wide SDK lock, so unrelated sessions never serialize each other.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub struct HandleTable<T> {
    next: AtomicU64,
    entries: Mutex<HashMap<u64, T>>,
}

impl<T> HandleTable<T> {
    pub fn new() -> Self {
        Self {
            // Handle 0 is reserved as the error/null value at the C ABI.
            next: AtomicU64::new(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    // A poisoned map is still structurally sound; recover the guard rather
    // than propagating panics across the C boundary.
    fn lock(&self) -> MutexGuard<'_, HashMap<u64, T>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Park a resource and return its opaque id.
    pub fn insert(&self, value: T) -> u64 {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        self.lock().insert(id, value);
        id
    }

    /// Run `f` against the resource behind `id`, if it exists.
    pub fn with<R>(&self, id: u64, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.lock().get(&id).map(f)
    }

    /// Remove and drop the resource behind `id`. Unknown ids are a no-op so
    /// double-release at the boundary stays harmless.
    pub fn remove(&self, id: u64) -> bool {
        self.lock().remove(&id).is_some()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }
}

impl<T> Default for HandleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
