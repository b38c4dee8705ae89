//! Per-entity write serialization.
//!
//! Every mutating operation takes the guards of the entities it writes
//! before its first read and holds them until it returns. Guards are taken
//! in sorted key order, so two operations touching overlapping entities can
//! never deadlock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use hivemind_db::Collection;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Lock key for one stored entity.
pub fn entity_key(collection: Collection, id: &str) -> String {
    format!("{collection}/{id}")
}

/// Table of async mutexes keyed by `collection/id`.
#[derive(Debug, Default)]
pub struct EntityLocks {
    table: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

/// Guards held for the duration of one operation.
#[derive(Debug)]
pub struct EntityGuard {
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl EntityLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire every key in `keys` (duplicates are ignored).
    pub async fn acquire<I>(&self, keys: I) -> EntityGuard
    where
        I: IntoIterator<Item = String>,
    {
        let mut keys: Vec<String> = keys.into_iter().collect();
        keys.sort();
        keys.dedup();

        let mutexes: Vec<Arc<AsyncMutex<()>>> = {
            let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            // Entries nobody holds or waits on are only referenced by the table.
            table.retain(|_, m| Arc::strong_count(m) > 1);
            keys.iter()
                .map(|k| Arc::clone(table.entry(k.clone()).or_default()))
                .collect()
        };

        let mut guards = Vec::with_capacity(mutexes.len());
        for mutex in mutexes {
            guards.push(mutex.lock_owned().await);
        }
        EntityGuard { _guards: guards }
    }

    /// Number of keys currently tracked.
    pub fn tracked(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
