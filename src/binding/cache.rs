//! A caching decorator for bindings.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::binding::traits::Binding;

/// A binding that caches values retrieved from a delegate.
///
/// Only found values are cached: a miss re-queries the delegate on every
/// call, so an entry projected after the first lookup becomes visible on a
/// later one. Cached entries are never evicted or invalidated; wrap a
/// delegate only for as long as its content can be assumed unchanged.
pub struct CacheBinding {
    delegate: Box<dyn Binding>,
    cache: Mutex<HashMap<String, Vec<u8>>>,
}

impl CacheBinding {
    /// Wraps `delegate` with an empty cache.
    pub fn new(delegate: Box<dyn Binding>) -> Self {
        Self {
            delegate,
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // The map only ever holds verbatim delegate values, so it stays
        // coherent even if a panic poisoned the lock.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// The cached values are secrets; Debug shows only how many there are.
impl fmt::Debug for CacheBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheBinding")
            .field("delegate", &self.delegate)
            .field("cached_entries", &self.cache().len())
            .finish()
    }
}

impl Binding for CacheBinding {
    fn get_as_bytes(&self, key: &str) -> Option<Vec<u8>> {
        let mut cache = self.cache();

        if let Some(v) = cache.get(key) {
            return Some(v.clone());
        }

        // Holding the guard across the delegate call keeps concurrent
        // first-time lookups of one key down to a single delegate call.
        let v = self.delegate.get_as_bytes(key)?;
        cache.insert(key.to_string(), v.clone());
        Some(v)
    }

    fn name(&self) -> String {
        // Names are never cached; the delegate stays authoritative.
        self.delegate.name()
    }
}
