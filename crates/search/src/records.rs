//! Record types scanned by the engine.
//!
//! Collections are owned by the data layer and handed to the engine
//! fresh on every call; nothing here is cached or indexed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer details embedded in an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    /// Recipient name
    pub name: String,
    /// Primary contact number
    pub phone: String,
    /// Fallback contact number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_phone: Option<String>,
    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Governorate name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governorate: Option<String>,
}

/// A delivery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Numeric order id
    pub id: u64,
    /// Merchant-facing reference code, e.g. `REF-8F3K2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Recipient details
    pub customer: OrderCustomer,
    /// Lifecycle status, e.g. `in_transit`
    pub status: String,
    /// Order kind, e.g. `standard`, `express`, `return`
    pub order_type: String,
    /// Dispatcher note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// What is being shipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_description: Option<String>,
    /// Collectible amount in US dollars
    pub amount_usd: f64,
    /// Collectible amount in Lebanese pounds
    pub amount_lbp: f64,
    /// When the order was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A pickup request from a merchant location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupRecord {
    /// Pickup code, e.g. `PIC-004`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Location label, e.g. a shop or warehouse name
    pub location: String,
    /// Street address
    pub address: String,
    /// Person to ask for on site
    pub contact_person: String,
    /// On-site contact number
    pub contact_phone: String,
    /// Lifecycle status, e.g. `scheduled`
    pub status: String,
    /// Requested vehicle, e.g. `motorbike`, `van`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    /// Dispatcher note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A customer contact entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Contact name
    pub name: String,
    /// Primary contact number
    pub phone: String,
    /// Fallback contact number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_phone: Option<String>,
    /// Street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Governorate name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governorate: Option<String>,
}

/// A support ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Ticket code, e.g. `TIC-007`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Short summary
    pub title: String,
    /// Full ticket body
    pub content: String,
    /// Ticket category, e.g. `delivery_delay`
    pub category: String,
    /// Lifecycle status, e.g. `open`
    pub status: String,
    /// Structured issue description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_description: Option<String>,
}

/// A static settings page surfaced by global search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsPageEntry {
    /// Page title
    pub title: &'static str,
    /// One-line description
    pub subtitle: &'static str,
    /// Navigation target
    pub route: &'static str,
}

/// The settings pages reachable from search. Never fetched.
pub const SETTINGS_PAGES: &[SettingsPageEntry] = &[
    SettingsPageEntry {
        title: "Profile",
        subtitle: "Business details and contact information",
        route: "/settings/profile",
    },
    SettingsPageEntry {
        title: "Team Members",
        subtitle: "Invite and manage dispatcher accounts",
        route: "/settings/team",
    },
    SettingsPageEntry {
        title: "Delivery Zones",
        subtitle: "Coverage areas and zone pricing",
        route: "/settings/zones",
    },
    SettingsPageEntry {
        title: "Pricing",
        subtitle: "Delivery fees and exchange rates",
        route: "/settings/pricing",
    },
    SettingsPageEntry {
        title: "Notifications",
        subtitle: "SMS and email alert preferences",
        route: "/settings/notifications",
    },
    SettingsPageEntry {
        title: "Billing",
        subtitle: "Invoices and payout schedule",
        route: "/settings/billing",
    },
];

/// Borrowed record collections supplied fresh on every search call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collections<'a> {
    /// Delivery orders
    pub orders: &'a [OrderRecord],
    /// Pickup requests
    pub pickups: &'a [PickupRecord],
    /// Customer contacts
    pub customers: &'a [CustomerRecord],
    /// Support tickets
    pub tickets: &'a [TicketRecord],
}
