use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::hn_client::Item;

struct CacheEntry {
    item: Item,
    inserted_at: Instant,
}

/// TTL-bounded store of resolved items, shared across requests.
///
/// Individual `get`/`insert` calls are internally synchronized; there is no
/// atomicity across a get-then-insert sequence, so two concurrent misses for
/// the same id may both fetch and overwrite each other's entry. Records for
/// a given id are stable upstream, so the race is harmless.
pub struct ItemCache {
    entries: Mutex<HashMap<i64, CacheEntry>>,
    ttl: Duration,
}

impl ItemCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns the record for `id` if present and not past its TTL.
    /// Expired entries are evicted on lookup.
    pub fn get(&self, id: i64) -> Option<Item> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(&id) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => Some(entry.item.clone()),
            Some(_) => {
                entries.remove(&id);
                None
            }
            None => None,
        }
    }

    /// Stores `item` under `id`, stamped with the current instant.
    /// An existing entry for the same id is replaced, TTL restarted.
    pub fn insert(&self, id: i64, item: Item) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            id,
            CacheEntry {
                item,
                inserted_at: Instant::now(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, score: i64) -> Item {
        Item {
            id,
            title: Some(format!("story {id}")),
            by: Some("pg".to_string()),
            url: None,
            time: 1_700_000_000,
            score,
            descendants: 0,
        }
    }

    #[test]
    fn get_returns_inserted_item() {
        let cache = ItemCache::new(Duration::from_secs(60));
        cache.insert(7, item(7, 42));

        let hit = cache.get(7).unwrap();
        assert_eq!(hit.id, 7);
        assert_eq!(hit.score, 42);
    }

    #[test]
    fn get_misses_on_absent_id() {
        let cache = ItemCache::new(Duration::from_secs(60));
        assert!(cache.get(1).is_none());
    }

    #[test]
    fn expired_entry_behaves_as_absent() {
        let cache = ItemCache::new(Duration::from_millis(10));
        cache.insert(7, item(7, 42));

        std::thread::sleep(Duration::from_millis(25));
        assert!(cache.get(7).is_none());
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let cache = ItemCache::new(Duration::from_secs(60));
        cache.insert(7, item(7, 1));
        cache.insert(7, item(7, 2));

        assert_eq!(cache.get(7).unwrap().score, 2);
    }
}
