use serde::{Deserialize, Serialize};

use crate::store::PersistentStore;

/// One summarized article. `url` is the dedup key and is compared byte for
/// byte; no normalization of scheme, case, or trailing slashes. `length` is
/// the paragraph count that produced `summary`, i.e. the length of the last
/// fetch for this URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub url: String,
    pub summary: String,
    pub length: u32,
}

/// Ordered article history, most-recent-first, synchronized with a
/// persistent store. The in-memory list is the source of truth for the
/// session; the store is rehydrated once at construction and rewritten in
/// full after every mutation.
pub struct ArticleHistoryCache {
    records: Vec<ArticleRecord>,
    store: Box<dyn PersistentStore>,
}

impl ArticleHistoryCache {
    /// Rehydrate from the store. Missing, unreadable, or shape-mismatched
    /// data all degrade to an empty history.
    pub fn load(store: Box<dyn PersistentStore>) -> Self {
        let records = match store.get() {
            Some(bytes) => match serde_json::from_slice::<Vec<ArticleRecord>>(&bytes) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("discarding unparseable article history: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { records, store }
    }

    /// Insert-or-update keyed by URL: an existing record is replaced in
    /// place, keeping its position; a novel URL is prepended as the most
    /// recent entry. The updated history is written through to the store
    /// before returning.
    pub fn upsert(&mut self, record: ArticleRecord) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.url == record.url) {
            *existing = record;
        } else {
            self.records.insert(0, record);
        }
        self.persist();
    }

    /// All records, most-recent-first.
    pub fn all(&self) -> &[ArticleRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records and the stored copy.
    pub fn clear(&mut self) {
        self.records.clear();
        if let Err(e) = self.store.clear() {
            tracing::warn!("failed to clear persisted history: {}", e);
        }
    }

    // A write failure must not lose the in-memory update, so it is logged
    // and absorbed rather than propagated.
    fn persist(&mut self) {
        match serde_json::to_vec(&self.records) {
            Ok(bytes) => {
                if let Err(e) = self.store.set(&bytes) {
                    tracing::warn!("failed to persist article history: {}", e);
                }
            }
            Err(e) => tracing::warn!("failed to serialize article history: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Result};
    use crate::store::MemoryStore;

    /// Store whose writes always fail, as a full disk would.
    struct FailingStore;

    impl PersistentStore for FailingStore {
        fn get(&self) -> Option<Vec<u8>> {
            None
        }

        fn set(&mut self, _value: &[u8]) -> Result<()> {
            Err(AppError::Persistence("disk full".to_string()))
        }

        fn clear(&mut self) -> Result<()> {
            Err(AppError::Persistence("disk full".to_string()))
        }
    }

    fn record(url: &str, summary: &str, length: u32) -> ArticleRecord {
        ArticleRecord {
            url: url.to_string(),
            summary: summary.to_string(),
            length,
        }
    }

    #[test]
    fn load_with_no_prior_data_is_empty() {
        let cache = ArticleHistoryCache::load(Box::new(MemoryStore::new()));
        assert!(cache.is_empty());
    }

    #[test]
    fn load_with_corrupt_json_is_empty() {
        let store = MemoryStore::with_value(&b"{not json"[..]);
        let cache = ArticleHistoryCache::load(Box::new(store));
        assert!(cache.is_empty());
    }

    #[test]
    fn load_with_wrong_shape_is_empty() {
        // Syntactically valid JSON whose records are missing fields.
        let store = MemoryStore::with_value(&br#"[{"url": "http://a.test"}]"#[..]);
        let cache = ArticleHistoryCache::load(Box::new(store));
        assert!(cache.is_empty());
    }

    #[test]
    fn load_with_wrong_types_is_empty() {
        let store =
            MemoryStore::with_value(&br#"[{"url": 1, "summary": 2, "length": "three"}]"#[..]);
        let cache = ArticleHistoryCache::load(Box::new(store));
        assert!(cache.is_empty());
    }

    #[test]
    fn novel_url_is_inserted_at_head() {
        let mut cache = ArticleHistoryCache::load(Box::new(MemoryStore::new()));
        cache.upsert(record("http://a.test", "A", 3));
        cache.upsert(record("http://b.test", "B", 3));

        let urls: Vec<&str> = cache.all().iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["http://b.test", "http://a.test"]);
    }

    #[test]
    fn existing_url_is_updated_in_place() {
        let mut cache = ArticleHistoryCache::load(Box::new(MemoryStore::new()));
        cache.upsert(record("http://a.test", "A", 3));
        cache.upsert(record("http://b.test", "B", 3));
        cache.upsert(record("http://a.test", "A2", 5));

        // Re-summarizing "a" does not move it to the head.
        let urls: Vec<&str> = cache.all().iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["http://b.test", "http://a.test"]);
        assert_eq!(cache.all()[1], record("http://a.test", "A2", 5));
    }

    #[test]
    fn at_most_one_record_per_url() {
        let mut cache = ArticleHistoryCache::load(Box::new(MemoryStore::new()));
        for length in 1..=5 {
            cache.upsert(record("http://a.test", "A", length));
            cache.upsert(record("http://b.test", "B", length));
        }
        assert_eq!(cache.all().len(), 2);
    }

    #[test]
    fn urls_are_compared_verbatim() {
        // No normalization: a trailing slash makes a distinct record.
        let mut cache = ArticleHistoryCache::load(Box::new(MemoryStore::new()));
        cache.upsert(record("http://a.test", "A", 3));
        cache.upsert(record("http://a.test/", "A", 3));
        assert_eq!(cache.all().len(), 2);
    }

    #[test]
    fn upserts_round_trip_through_the_store() {
        let mut first = ArticleHistoryCache::load(Box::new(MemoryStore::new()));
        first.upsert(record("http://a.test", "A", 3));
        first.upsert(record("http://b.test", "B", 2));
        first.upsert(record("http://a.test", "A2", 5));

        let bytes = serde_json::to_vec(first.all()).unwrap();
        let second = ArticleHistoryCache::load(Box::new(MemoryStore::with_value(bytes)));
        assert_eq!(second.all(), first.all());
    }

    #[test]
    fn write_failure_keeps_the_in_memory_update() {
        // Persistence failures are absorbed: the session's in-memory history
        // is the source of truth even when the store cannot be written.
        let mut cache = ArticleHistoryCache::load(Box::new(FailingStore));

        cache.upsert(record("http://a.test", "A", 3));
        assert_eq!(cache.all(), &[record("http://a.test", "A", 3)]);

        cache.upsert(record("http://a.test", "A2", 5));
        assert_eq!(cache.all(), &[record("http://a.test", "A2", 5)]);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_empties_memory_and_store() {
        let mut cache = ArticleHistoryCache::load(Box::new(MemoryStore::new()));
        cache.upsert(record("http://a.test", "A", 3));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.store.get(), None);
    }
}
