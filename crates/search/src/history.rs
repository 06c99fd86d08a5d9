//! Recent-search history.
//!
//! A small MRU list of prior queries. Persistence goes through the
//! [`KeyValueStore`] seam as a JSON string array under one fixed key;
//! whatever was persisted by a previous session is loaded on
//! construction, and a corrupt payload simply starts the history empty.

use tracing::warn;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Fixed key under which the history persists.
pub const RECENT_SEARCHES_KEY: &str = "wasel.recent_searches";

/// Most entries retained.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// MRU list of prior queries, most recent first.
pub struct RecentSearches {
    store: Box<dyn KeyValueStore>,
    entries: Vec<String>,
}

impl RecentSearches {
    /// Load persisted history from `store`; absent or corrupt state
    /// starts empty.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let entries = match store.get(RECENT_SEARCHES_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<String>>(&payload) {
                Ok(entries) => entries,
                Err(error) => {
                    warn!(%error, "discarding corrupt recent-search history");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!(%error, "failed to read recent-search history");
                Vec::new()
            }
        };

        Self { store, entries }
    }

    /// Most-recent-first snapshot.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Record a query. Blank input is ignored; an existing equal entry
    /// moves to the front instead of duplicating; the list never grows
    /// past [`MAX_RECENT_SEARCHES`].
    pub fn add(&mut self, query: &str) -> Result<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_RECENT_SEARCHES);
        self.persist()
    }

    /// Drop every entry and erase the persisted state.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.entries)?;
        self.store.set(RECENT_SEARCHES_KEY, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn empty() -> RecentSearches {
        RecentSearches::load(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_starts_empty() {
        assert!(empty().entries().is_empty());
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = empty();
        history.add("beirut").unwrap();
        history.add("TIC-007").unwrap();
        assert_eq!(history.entries(), ["TIC-007", "beirut"]);
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let mut history = empty();
        history.add("beirut").unwrap();
        history.add("71123456").unwrap();
        history.add("beirut").unwrap();
        assert_eq!(history.entries(), ["beirut", "71123456"]);
    }

    #[test]
    fn test_capped_at_five() {
        let mut history = empty();
        for query in ["a", "b", "c", "d", "e", "f"] {
            history.add(query).unwrap();
        }
        assert_eq!(history.entries(), ["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_blank_is_ignored() {
        let mut history = empty();
        history.add("   ").unwrap();
        history.add("").unwrap();
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let mut history = empty();
        history.add("  beirut  ").unwrap();
        assert_eq!(history.entries(), ["beirut"]);
    }

    #[test]
    fn test_clear_empties_and_persists() {
        let mut store = MemoryStore::new();
        store
            .set(RECENT_SEARCHES_KEY, r#"["beirut","saida"]"#)
            .unwrap();
        let mut history = RecentSearches::load(Box::new(store));
        assert_eq!(history.entries().len(), 2);

        history.clear().unwrap();
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_persisted_state_survives_reload() {
        let mut store = MemoryStore::new();
        store
            .set(RECENT_SEARCHES_KEY, r#"["zahle","tripoli"]"#)
            .unwrap();
        let history = RecentSearches::load(Box::new(store));
        assert_eq!(history.entries(), ["zahle", "tripoli"]);
    }

    #[test]
    fn test_corrupt_payload_loads_empty() {
        let mut store = MemoryStore::new();
        store.set(RECENT_SEARCHES_KEY, "not json at all").unwrap();
        let history = RecentSearches::load(Box::new(store));
        assert!(history.entries().is_empty());
    }
}
