use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

type Slots<K> = Arc<DashMap<K, Arc<Mutex<()>>>>;

/// Registry of per-key async mutexes.
///
/// Callers for the same key queue behind each other; different keys never
/// contend. A key's slot is dropped from the registry once its last holder
/// or waiter lets go, including waiters cancelled before acquiring.
pub struct KeyedLocks<K>
where
    K: Eq + Hash,
{
    slots: Slots<K>,
}

impl<K> KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            slots: Arc::new(DashMap::new()),
        }
    }

    pub async fn acquire(&self, key: K) -> KeyedLockGuard<K> {
        // The map entry must be released before awaiting the mutex.
        let slot = Arc::clone(
            self.slots
                .entry(key.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .value(),
        );

        // Built before waiting so a caller dropped mid-wait still releases
        // its slot through `Drop`.
        let mut held = KeyedLockGuard {
            key,
            slots: Arc::clone(&self.slots),
            guard: None,
        };
        held.guard = Some(slot.lock_owned().await);

        held
    }

    /// Number of keys currently held or awaited.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<K> Default for KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

pub struct KeyedLockGuard<K>
where
    K: Eq + Hash,
{
    key: K,
    slots: Slots<K>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl<K> Drop for KeyedLockGuard<K>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        self.guard.take();
        self.slots
            .remove_if(&self.key, |_, slot| Arc::strong_count(slot) == 1);
    }
}
