//! Search results returned to the caller.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::records::{
    CustomerRecord, OrderRecord, PickupRecord, SettingsPageEntry, TicketRecord,
};

/// The five searchable record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Delivery orders
    Orders,
    /// Pickup requests
    Pickups,
    /// Customer contacts
    Customers,
    /// Support tickets
    Tickets,
    /// Static settings pages
    Settings,
}

impl Category {
    /// Human-readable label for dropdown section headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Orders => "Orders",
            Category::Pickups => "Pickups",
            Category::Customers => "Customers",
            Category::Tickets => "Tickets",
            Category::Settings => "Settings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Back-reference to the record a result came from.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum RecordRef<'a> {
    /// A delivery order
    Order(&'a OrderRecord),
    /// A pickup request
    Pickup(&'a PickupRecord),
    /// A customer contact
    Customer(&'a CustomerRecord),
    /// A support ticket
    Ticket(&'a TicketRecord),
    /// A settings page
    Settings(&'a SettingsPageEntry),
}

impl RecordRef<'_> {
    /// The kind of record referenced.
    pub fn category(&self) -> Category {
        match self {
            RecordRef::Order(_) => Category::Orders,
            RecordRef::Pickup(_) => Category::Pickups,
            RecordRef::Customer(_) => Category::Customers,
            RecordRef::Ticket(_) => Category::Tickets,
            RecordRef::Settings(_) => Category::Settings,
        }
    }
}

/// Metadata surfaced alongside a result for dropdown rendering.
///
/// Every field is optional; kinds fill in what they have.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultMeta {
    /// Lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Contact number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Collectible amount in US dollars
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_usd: Option<f64>,
    /// Collectible amount in Lebanese pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_lbp: Option<f64>,
    /// Record subtype (order kind, vehicle, ticket category)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Reference, pickup, or ticket code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// One ranked hit.
///
/// The relevance score that ordered the list is internal and has
/// already been stripped by the time results reach the caller.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    /// The source record
    pub record: RecordRef<'a>,
    /// Which kind the record belongs to
    pub category: Category,
    /// Primary display line
    pub title: String,
    /// Secondary display line
    pub subtitle: String,
    /// Where selecting the result navigates
    pub route: String,
    /// Extra fields for dropdown rendering
    pub meta: ResultMeta,
}
