//! Query intent classification.
//!
//! Derives advisory hints from the raw query before any collection is
//! scanned. The hints widen or shrink per-kind result caps and decide
//! which kinds are worth scanning at all; they never filter matches
//! inside a kind that is scanned.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::phone;

/// Order reference codes like `REF-8F3K2`.
static ORDER_REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^REF-[A-Z0-9]+$").unwrap());

/// Pickup codes like `PIC-004`.
static PICKUP_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^PIC-\d{3}$").unwrap());

/// Ticket codes like `TIC-007`.
static TICKET_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^TIC-\d{3}$").unwrap());

/// Lebanese subscriber shape: optional country code or trunk zero, then
/// an assigned area or mobile digit (2 is unassigned in the plan).
static PHONE_SHAPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(961|0)?[13-9]\d+$").unwrap());

/// Queries with fewer digits than this are never treated as phone
/// numbers.
pub const MIN_PHONE_QUERY_DIGITS: usize = 6;

/// Place names that flag a query as location-directed.
pub const PLACE_GAZETTEER: [&str; 12] = [
    "beirut", "tripoli", "saida", "sidon", "tyre", "sour", "zahle", "jounieh", "byblos", "jbeil",
    "nabatieh", "baalbek",
];

/// Advisory intent flags derived from a query.
///
/// Flags are independent; several can hold at once ("pickup beirut"
/// is both pickup-directed and location-directed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryIntent {
    /// Looks like an order id or reference code
    pub order_id_like: bool,
    /// Looks like a pickup code
    pub pickup_id_like: bool,
    /// Looks like a ticket code
    pub ticket_id_like: bool,
    /// Looks like a Lebanese phone number
    pub phone_like: bool,
    /// Mentions a known place name
    pub location_like: bool,
}

impl QueryIntent {
    /// Classify a raw query. Blank input sets no flags.
    pub fn classify(query: &str) -> Self {
        let lowered = query.trim().to_lowercase();
        if lowered.is_empty() {
            return Self::default();
        }

        // Id lookups arrive as "#1042" or "# 1042"
        let remainder: String = lowered
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '#')
            .collect();
        let all_digits = !remainder.is_empty() && remainder.chars().all(|c| c.is_ascii_digit());

        let digits = phone::normalize(&lowered);
        let phone_like =
            digits.len() >= MIN_PHONE_QUERY_DIGITS && PHONE_SHAPE_RE.is_match(&digits);

        // A digit string long enough to be a phone number is classified
        // as one, not as an order id
        let order_id_like = (all_digits && !phone_like)
            || ORDER_REF_RE.is_match(&remainder)
            || lowered.starts_with("order");

        let pickup_id_like = PICKUP_CODE_RE.is_match(&remainder)
            || lowered.starts_with("pickup")
            || lowered.starts_with("pic");

        let ticket_id_like = TICKET_CODE_RE.is_match(&remainder)
            || lowered.starts_with("ticket")
            || lowered.starts_with("tic");

        let location_like = PLACE_GAZETTEER.iter().any(|place| lowered.contains(place));

        Self {
            order_id_like,
            pickup_id_like,
            ticket_id_like,
            phone_like,
            location_like,
        }
    }

    /// Any of the three id-directed flags.
    pub fn any_id_like(&self) -> bool {
        self.order_id_like || self.pickup_id_like || self.ticket_id_like
    }
}
