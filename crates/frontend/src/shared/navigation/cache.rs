//! In-memory TTL cache keyed by resolved navigation key.
//!
//! Entries are never evicted; a fresh fetch overwrites the slot in place.

use super::key::ResolvedKey;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// TTL applied when neither the view nor the entry declares one.
pub const DEFAULT_TTL_SECS: i64 = 30;

pub fn default_ttl() -> Duration {
    Duration::seconds(DEFAULT_TTL_SECS)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<D> {
    pub data: D,
    pub fetched_at: DateTime<Utc>,
    /// TTL recorded at write time. `None` falls back to the TTL supplied by
    /// the caller at check time.
    pub ttl: Option<Duration>,
}

impl<D> CacheEntry<D> {
    pub fn new(data: D, fetched_at: DateTime<Utc>, ttl: Option<Duration>) -> Self {
        Self {
            data,
            fetched_at,
            ttl,
        }
    }

    /// Stale at or after the TTL: fresh iff `now - fetched_at < ttl`.
    pub fn is_fresh(&self, now: DateTime<Utc>, fallback_ttl: Duration) -> bool {
        now - self.fetched_at < self.ttl.unwrap_or(fallback_ttl)
    }
}

#[derive(Debug, Clone)]
pub struct TtlCache<D> {
    entries: HashMap<ResolvedKey, CacheEntry<D>>,
}

impl<D> TtlCache<D> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &ResolvedKey) -> Option<&CacheEntry<D>> {
        self.entries.get(key)
    }

    /// Returns the entry only while it is fresh.
    pub fn get_fresh(
        &self,
        key: &ResolvedKey,
        now: DateTime<Utc>,
        fallback_ttl: Duration,
    ) -> Option<&CacheEntry<D>> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, fallback_ttl))
    }

    /// Replaces whatever was stored under `key`.
    pub fn set(&mut self, key: ResolvedKey, entry: CacheEntry<D>) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D> Default for TtlCache<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::key::test_support::TestMain;
    use super::super::key::NavKey;
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn key() -> ResolvedKey {
        NavKey::main_only(TestMain::Overview).resolve()
    }

    #[test]
    fn test_freshness_boundaries() {
        let ttl = Duration::seconds(30);
        let entry = CacheEntry::new("kpis", t0(), Some(ttl));
        let ms = Duration::milliseconds(1);

        assert!(entry.is_fresh(t0(), default_ttl()));
        assert!(entry.is_fresh(t0() + ttl - ms, default_ttl()));
        assert!(!entry.is_fresh(t0() + ttl, default_ttl()));
        assert!(!entry.is_fresh(t0() + ttl + ms, default_ttl()));
    }

    #[test]
    fn test_recorded_ttl_wins_over_fallback() {
        let entry = CacheEntry::new(1, t0(), Some(Duration::seconds(60)));
        let at = t0() + Duration::seconds(45);
        assert!(entry.is_fresh(at, Duration::seconds(10)));
    }

    #[test]
    fn test_fallback_ttl_used_without_recorded_ttl() {
        let entry = CacheEntry::new(1, t0(), None);
        let at = t0() + Duration::seconds(45);
        assert!(!entry.is_fresh(at, Duration::seconds(30)));
        assert!(entry.is_fresh(at, Duration::seconds(60)));
    }

    #[test]
    fn test_set_replaces_entry() {
        let mut cache = TtlCache::new();
        cache.set(key(), CacheEntry::new(vec![1, 2], t0(), None));
        let later = t0() + Duration::seconds(5);
        cache.set(key(), CacheEntry::new(vec![3], later, Some(default_ttl())));

        let entry = cache.get(&key()).unwrap();
        assert_eq!(entry.data, vec![3]);
        assert_eq!(entry.fetched_at, later);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_fresh_filters_stale() {
        let mut cache = TtlCache::new();
        assert!(cache.is_empty());
        cache.set(key(), CacheEntry::new("x", t0(), Some(Duration::seconds(30))));

        let fresh_at = t0() + Duration::seconds(29);
        let stale_at = t0() + Duration::seconds(30);
        assert!(cache.get_fresh(&key(), fresh_at, default_ttl()).is_some());
        assert!(cache.get_fresh(&key(), stale_at, default_ttl()).is_none());
        // Stale entries stay in place until overwritten.
        assert!(cache.get(&key()).is_some());
    }
}
