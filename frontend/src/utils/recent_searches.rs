use crate::config;
use crate::error::FrontendError;
use serde::{Deserialize, Serialize};

/// Minimal string key-value storage, implemented by `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, FrontendError>;
    fn set(&self, key: &str, value: &str) -> Result<(), FrontendError>;
}

impl KeyValueStore for web_sys::Storage {
    fn get(&self, key: &str) -> Result<Option<String>, FrontendError> {
        self.get_item(key)
            .map_err(|e| FrontendError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FrontendError> {
        self.set_item(key, value)
            .map_err(|e| FrontendError::Storage(format!("{:?}", e)))
    }
}

/// Most-recent-first list of distinct search terms.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearchList(Vec<String>);

impl RecentSearchList {
    /// Puts `term` in front unless it is already listed. Returns whether the
    /// list changed.
    pub fn push_front_unique(&mut self, term: &str, limit: usize) -> bool {
        if self.0.iter().any(|existing| existing == term) {
            return false;
        }
        self.0.insert(0, term.to_string());
        self.0.truncate(limit);
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct RecentSearches<S> {
    store: S,
    key: String,
    limit: usize,
}

impl RecentSearches<web_sys::Storage> {
    /// Recent searches backed by the browser's `localStorage`.
    pub fn browser() -> Result<Self, FrontendError> {
        let storage = crate::utils::dom::window()?
            .local_storage()?
            .ok_or_else(|| FrontendError::Storage("localStorage is unavailable".to_string()))?;
        Ok(Self::new(storage))
    }
}

impl<S: KeyValueStore> RecentSearches<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: config::get_recent_searches_key().to_string(),
            limit: config::RECENT_SEARCHES_LIMIT,
        }
    }

    /// Stored list. A missing or unparsable value reads as empty.
    pub fn load(&self) -> Result<RecentSearchList, FrontendError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(RecentSearchList::default());
        };
        match serde_json::from_str::<RecentSearchList>(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                log::warn!("Ignoring unreadable recent searches under {}: {}", self.key, e);
                Ok(RecentSearchList::default())
            }
        }
    }

    /// Remembers `term`; only writes when the list actually changed.
    pub fn record(&self, term: &str) -> Result<bool, FrontendError> {
        let mut list = self.load()?;
        if !list.push_front_unique(term, self.limit) {
            return Ok(false);
        }
        let encoded = serde_json::to_string(&list)?;
        self.store.set(&self.key, &encoded)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        writes: Cell<usize>,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }

        fn raw(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl KeyValueStore for &MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, FrontendError> {
            Ok(self.raw(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), FrontendError> {
            self.writes.set(self.writes.get() + 1);
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, FrontendError> {
            Err(FrontendError::Storage("SecurityError".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), FrontendError> {
            Err(FrontendError::Storage("SecurityError".to_string()))
        }
    }

    fn key() -> &'static str {
        config::get_recent_searches_key()
    }

    #[test]
    fn keeps_the_five_most_recent_terms() {
        let store = MemoryStore::default();
        let recent = RecentSearches::new(&store);
        for term in ["logo", "web", "seo", "video", "copy", "app"] {
            assert!(recent.record(term).unwrap());
        }
        let list = recent.load().unwrap();
        assert_eq!(list.entries(), ["app", "copy", "video", "seo", "web"]);
        assert_eq!(
            store.raw(key()).unwrap(),
            r#"["app","copy","video","seo","web"]"#
        );
    }

    #[test]
    fn repeating_a_term_is_a_no_op() {
        let store = MemoryStore::default();
        let recent = RecentSearches::new(&store);
        assert!(recent.record("SEO").unwrap());
        assert!(!recent.record("SEO").unwrap());
        assert_eq!(recent.load().unwrap().entries(), ["SEO"]);
        assert_eq!(store.writes.get(), 1);
    }

    #[test]
    fn existing_terms_do_not_move_to_front() {
        let store = MemoryStore::with(key(), r#"["web","logo"]"#);
        let recent = RecentSearches::new(&store);
        assert!(!recent.record("logo").unwrap());
        assert_eq!(recent.load().unwrap().entries(), ["web", "logo"]);
    }

    #[test]
    fn missing_key_reads_as_empty() {
        let store = MemoryStore::default();
        assert!(RecentSearches::new(&store).load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_json_is_treated_as_empty_and_overwritten() {
        let store = MemoryStore::with(key(), "{not json");
        let recent = RecentSearches::new(&store);
        assert!(recent.load().unwrap().is_empty());
        assert!(recent.record("logo").unwrap());
        assert_eq!(store.raw(key()).unwrap(), r#"["logo"]"#);
    }

    #[test]
    fn json_null_reads_as_empty() {
        let store = MemoryStore::with(key(), "null");
        assert!(RecentSearches::new(&store).load().unwrap().is_empty());
    }

    #[test]
    fn storage_failures_propagate() {
        let recent = RecentSearches::new(BrokenStore);
        assert!(matches!(recent.load(), Err(FrontendError::Storage(_))));
        assert!(matches!(recent.record("seo"), Err(FrontendError::Storage(_))));
    }
}
