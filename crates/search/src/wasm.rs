//! WASM bindings for the search engine.
//!
//! The dashboard frontend calls these over a JSON boundary; history
//! persistence stays on the JavaScript side, so the engine here runs
//! with an in-memory store.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::engine::SearchEngine;
use crate::records::{Collections, CustomerRecord, OrderRecord, PickupRecord, TicketRecord};

/// Relevance score (0-100) of a text field against a query.
#[wasm_bindgen]
pub fn relevance_score(query: &str, text: &str) -> u32 {
    crate::relevance::score_text(text, query)
}

/// True when two phone representations denote a matching number.
#[wasm_bindgen]
pub fn phone_matches(a: &str, b: &str) -> bool {
    crate::phone::matches(a, b)
}

/// Percentage of query characters found in order within `text`.
#[wasm_bindgen]
pub fn fuzzy_ratio(query: &str, text: &str) -> f32 {
    crate::fuzzy::subsequence_ratio(text, query)
}

/// Search all collections and return ranked results as JSON.
///
/// `collections_json` is an object with optional `orders`, `pickups`,
/// `customers`, and `tickets` arrays. Malformed input returns `[]`
/// rather than throwing.
#[wasm_bindgen]
pub fn search_everything(query: &str, collections_json: &str) -> String {
    #[derive(Default, Deserialize)]
    #[serde(default)]
    struct Payload {
        orders: Vec<OrderRecord>,
        pickups: Vec<PickupRecord>,
        customers: Vec<CustomerRecord>,
        tickets: Vec<TicketRecord>,
    }

    let payload: Payload = match serde_json::from_str(collections_json) {
        Ok(payload) => payload,
        Err(_) => return "[]".to_string(),
    };

    let engine = SearchEngine::in_memory();
    let collections = Collections {
        orders: &payload.orders,
        pickups: &payload.pickups,
        customers: &payload.customers,
        tickets: &payload.tickets,
    };

    let results = engine.search(query, &collections);
    serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
}
