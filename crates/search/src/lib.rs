//! Fuzzy multi-entity search for the Wasel dashboard.
//!
//! Powers the "search everything" dropdown: given a free-text query and
//! freshly fetched record collections, the engine classifies the
//! query's intent, scans each collection against a per-kind field
//! table, and merges everything into one relevance-ranked, capped
//! result list. There is no index; every call is a synchronous
//! in-memory scan sized for collections of hundreds to low thousands of
//! records.
//!
//! This crate provides:
//! - Tiered relevance scoring (exact > prefix > substring > fuzzy)
//! - Lebanese phone number canonicalization and matching
//! - Query intent classification (ids, phones, places)
//! - Per-kind scanners with weighted field tables
//! - A persisted recent-search history
//!
//! # Example
//!
//! ```
//! use wasel_search::{Collections, OrderCustomer, OrderRecord, SearchEngine};
//!
//! let orders = vec![OrderRecord {
//!     id: 1042,
//!     reference: None,
//!     customer: OrderCustomer {
//!         name: "Rami Khalil".to_string(),
//!         phone: "03 912 480".to_string(),
//!         secondary_phone: None,
//!         address: None,
//!         city: None,
//!         governorate: Some("Beirut".to_string()),
//!     },
//!     status: "in_transit".to_string(),
//!     order_type: "standard".to_string(),
//!     note: None,
//!     package_description: None,
//!     amount_usd: 25.0,
//!     amount_lbp: 2_250_000.0,
//!     created_at: None,
//! }];
//!
//! let engine = SearchEngine::in_memory();
//! let collections = Collections { orders: &orders, ..Collections::default() };
//!
//! let results = engine.search("1042", &collections);
//! assert_eq!(results[0].route, "/orders/1042");
//! ```

pub mod phone;

mod engine;
mod error;
mod fuzzy;
mod history;
mod query;
mod records;
mod relevance;
mod result;
mod scanner;
mod storage;

#[cfg(feature = "wasm")]
mod wasm;

pub use engine::{MAX_RESULTS, SearchEngine};
pub use error::{Result, SearchError};
pub use fuzzy::{FuzzyParams, subsequence_ratio};
pub use history::{MAX_RECENT_SEARCHES, RECENT_SEARCHES_KEY, RecentSearches};
pub use query::{MIN_PHONE_QUERY_DIGITS, PLACE_GAZETTEER, QueryIntent};
pub use records::{
    Collections, CustomerRecord, OrderCustomer, OrderRecord, PickupRecord, SETTINGS_PAGES,
    SettingsPageEntry, TicketRecord,
};
pub use relevance::{MatchTier, score_text, score_text_with};
pub use result::{Category, RecordRef, ResultMeta, SearchResult};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
