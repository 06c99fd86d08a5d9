//! The search facade: classify, scan, merge, rank.
//!
//! One engine call is a pure function of the query and the supplied
//! collections; nothing is cached between calls. The only mutable state
//! is the recent-search history, which the caller drives explicitly.

use tracing::debug;

use crate::error::Result;
use crate::fuzzy::FuzzyParams;
use crate::history::RecentSearches;
use crate::query::QueryIntent;
use crate::records::{Collections, SETTINGS_PAGES, SettingsPageEntry};
use crate::result::SearchResult;
use crate::scanner::{self, Scored};
use crate::storage::{KeyValueStore, MemoryStore};

/// Global cap on merged results.
pub const MAX_RESULTS: usize = 10;

/// Per-kind caps as (expanded, base) pairs. The expanded cap applies
/// when the kind's own intent flags are set.
const ORDERS_CAP: (usize, usize) = (8, 4);
const PICKUPS_CAP: (usize, usize) = (6, 3);
const CUSTOMERS_CAP: (usize, usize) = (6, 3);
const TICKETS_CAP: (usize, usize) = (6, 3);
const SETTINGS_CAP: usize = 2;

fn cap(pair: (usize, usize), expanded: bool) -> usize {
    if expanded { pair.0 } else { pair.1 }
}

/// Customers are only worth scanning when the query is not an id lookup.
fn customers_included(intent: &QueryIntent) -> bool {
    !intent.any_id_like()
}

/// Pickups drop out of a plain phone-number query; a pickup code or a
/// place mention brings them back.
fn pickups_included(intent: &QueryIntent) -> bool {
    !intent.phone_like || intent.pickup_id_like || intent.location_like
}

/// Cross-collection search over the Wasel dashboard's records.
///
/// # Example
/// ```
/// use wasel_search::{Collections, SearchEngine};
///
/// let engine = SearchEngine::in_memory();
/// let results = engine.search("beirut", &Collections::default());
/// assert!(results.is_empty());
/// ```
pub struct SearchEngine {
    settings_pages: &'static [SettingsPageEntry],
    fuzzy: FuzzyParams,
    recent: RecentSearches,
}

impl SearchEngine {
    /// Engine with the given history store and default tuning.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            settings_pages: SETTINGS_PAGES,
            fuzzy: FuzzyParams::default(),
            recent: RecentSearches::load(store),
        }
    }

    /// Engine whose history lives only for this process. Useful for
    /// tests and browser sessions with their own persistence.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Replace the fuzzy tier tuning.
    pub fn with_fuzzy_params(mut self, fuzzy: FuzzyParams) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Search every collection and return at most [`MAX_RESULTS`] hits,
    /// ranked by relevance.
    ///
    /// Synchronous and allocation-light: one linear scan per included
    /// kind, no index, no caching. A blank query returns nothing
    /// without scanning.
    pub fn search<'a>(&self, query: &str, collections: &Collections<'a>) -> Vec<SearchResult<'a>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let intent = QueryIntent::classify(query);
        debug!(?intent, query, "classified search query");

        let mut ranked: Vec<Scored<'a>> = Vec::new();

        ranked.extend(scanner::scan_orders(
            collections.orders,
            query,
            &self.fuzzy,
            cap(
                ORDERS_CAP,
                intent.order_id_like || intent.phone_like || intent.location_like,
            ),
        ));
        if pickups_included(&intent) {
            ranked.extend(scanner::scan_pickups(
                collections.pickups,
                query,
                &self.fuzzy,
                cap(PICKUPS_CAP, intent.pickup_id_like || intent.location_like),
            ));
        }
        if customers_included(&intent) {
            ranked.extend(scanner::scan_customers(
                collections.customers,
                query,
                &self.fuzzy,
                cap(CUSTOMERS_CAP, intent.phone_like),
            ));
        }
        ranked.extend(scanner::scan_tickets(
            collections.tickets,
            query,
            &self.fuzzy,
            cap(TICKETS_CAP, intent.ticket_id_like),
        ));
        ranked.extend(scanner::scan_settings(
            self.settings_pages,
            query,
            &self.fuzzy,
            SETTINGS_CAP,
        ));

        // Stable sort: equal scores keep the fixed kind order above
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(MAX_RESULTS);
        ranked.into_iter().map(|hit| hit.result).collect()
    }

    /// Record a query in the recent-search history.
    pub fn add_to_recent_searches(&mut self, query: &str) -> Result<()> {
        self.recent.add(query)
    }

    /// Drop the recent-search history, including its persisted state.
    pub fn clear_recent_searches(&mut self) -> Result<()> {
        self.recent.clear()
    }

    /// Most-recent-first snapshot of prior queries.
    pub fn recent_searches(&self) -> &[String] {
        self.recent.entries()
    }
}
