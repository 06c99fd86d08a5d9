//! Per-kind record scanners built on one table-driven scoring routine.
//!
//! Every kind declares an ordered field table (accessor, field kind,
//! weight); one generic routine applies the text scorer and the phone
//! matcher across the table and sums the contributions. Weights follow
//! field precision: codes and ids highest, names and titles next, free
//! text lowest. Phone fields contribute a fixed bonus instead of a
//! scorer value.

use std::borrow::Cow;

use crate::fuzzy::FuzzyParams;
use crate::phone;
use crate::records::{
    CustomerRecord, OrderRecord, PickupRecord, SettingsPageEntry, TicketRecord,
};
use crate::relevance;
use crate::result::{Category, RecordRef, ResultMeta, SearchResult};

/// How a field participates in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// Scored by the tiered text scorer; contributes score + weight
    Text,
    /// Matched by the phone matcher; contributes the weight as a fixed bonus
    Phone,
}

/// One scored field of a record kind.
struct FieldSpec<R: 'static> {
    kind: FieldKind,
    weight: u32,
    get: fn(&R) -> Option<Cow<'_, str>>,
}

/// A candidate result still carrying its internal relevance score.
pub(crate) struct Scored<'a> {
    pub score: u32,
    pub result: SearchResult<'a>,
}

/// Aggregate score of one record: the sum of every field contribution.
///
/// Absent optional fields contribute nothing. Returns `None` when no
/// field matched at all.
fn score_record<R>(
    record: &R,
    query: &str,
    fuzzy: &FuzzyParams,
    fields: &[FieldSpec<R>],
) -> Option<u32> {
    let mut total = 0u32;
    let mut matched = false;

    for field in fields {
        let Some(value) = (field.get)(record) else {
            continue;
        };
        match field.kind {
            FieldKind::Text => {
                let score = relevance::score_text_with(&value, query, fuzzy);
                if score > 0 {
                    total += score + field.weight;
                    matched = true;
                }
            }
            FieldKind::Phone => {
                if phone::matches(query, &value) {
                    total += field.weight;
                    matched = true;
                }
            }
        }
    }

    matched.then_some(total)
}

/// Scan one collection: score every record, keep the candidates, rank
/// them, and truncate to the kind's cap.
fn scan_kind<'a, R>(
    records: &'a [R],
    query: &str,
    fuzzy: &FuzzyParams,
    cap: usize,
    fields: &[FieldSpec<R>],
    build: fn(&'a R) -> SearchResult<'a>,
) -> Vec<Scored<'a>> {
    let mut hits: Vec<Scored<'a>> = records
        .iter()
        .filter_map(|record| {
            score_record(record, query, fuzzy, fields).map(|score| Scored {
                score,
                result: build(record),
            })
        })
        .collect();

    // Stable sort: equal scores keep scan order
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(cap);
    hits
}

static ORDER_FIELDS: &[FieldSpec<OrderRecord>] = &[
    FieldSpec {
        kind: FieldKind::Text,
        weight: 50,
        get: |o| Some(Cow::Owned(o.id.to_string())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 45,
        get: |o| o.reference.as_deref().map(Cow::Borrowed),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 35,
        get: |o| Some(Cow::Borrowed(o.customer.name.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Phone,
        weight: 90,
        get: |o| Some(Cow::Borrowed(o.customer.phone.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 20,
        get: |o| o.customer.city.as_deref().map(Cow::Borrowed),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 20,
        get: |o| o.customer.governorate.as_deref().map(Cow::Borrowed),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 15,
        get: |o| o.customer.address.as_deref().map(Cow::Borrowed),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 10,
        get: |o| Some(Cow::Borrowed(o.status.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 10,
        get: |o| Some(Cow::Borrowed(o.order_type.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 5,
        get: |o| o.note.as_deref().map(Cow::Borrowed),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 5,
        get: |o| o.package_description.as_deref().map(Cow::Borrowed),
    },
];

static PICKUP_FIELDS: &[FieldSpec<PickupRecord>] = &[
    FieldSpec {
        kind: FieldKind::Text,
        weight: 50,
        get: |p| p.code.as_deref().map(Cow::Borrowed),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 35,
        get: |p| Some(Cow::Borrowed(p.location.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 15,
        get: |p| Some(Cow::Borrowed(p.address.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 30,
        get: |p| Some(Cow::Borrowed(p.contact_person.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Phone,
        weight: 85,
        get: |p| Some(Cow::Borrowed(p.contact_phone.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 10,
        get: |p| Some(Cow::Borrowed(p.status.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 10,
        get: |p| p.vehicle_type.as_deref().map(Cow::Borrowed),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 5,
        get: |p| p.note.as_deref().map(Cow::Borrowed),
    },
];

static CUSTOMER_FIELDS: &[FieldSpec<CustomerRecord>] = &[
    FieldSpec {
        kind: FieldKind::Text,
        weight: 40,
        get: |c| Some(Cow::Borrowed(c.name.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Phone,
        weight: 90,
        get: |c| Some(Cow::Borrowed(c.phone.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Phone,
        weight: 85,
        get: |c| c.secondary_phone.as_deref().map(Cow::Borrowed),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 15,
        get: |c| c.address.as_deref().map(Cow::Borrowed),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 20,
        get: |c| c.city.as_deref().map(Cow::Borrowed),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 20,
        get: |c| c.governorate.as_deref().map(Cow::Borrowed),
    },
];

static TICKET_FIELDS: &[FieldSpec<TicketRecord>] = &[
    FieldSpec {
        kind: FieldKind::Text,
        weight: 50,
        get: |t| t.code.as_deref().map(Cow::Borrowed),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 35,
        get: |t| Some(Cow::Borrowed(t.title.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 10,
        get: |t| Some(Cow::Borrowed(t.content.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 15,
        get: |t| Some(Cow::Borrowed(t.category.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 10,
        get: |t| Some(Cow::Borrowed(t.status.as_str())),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 5,
        get: |t| t.issue_description.as_deref().map(Cow::Borrowed),
    },
];

static SETTINGS_FIELDS: &[FieldSpec<SettingsPageEntry>] = &[
    FieldSpec {
        kind: FieldKind::Text,
        weight: 30,
        get: |s| Some(Cow::Borrowed(s.title)),
    },
    FieldSpec {
        kind: FieldKind::Text,
        weight: 10,
        get: |s| Some(Cow::Borrowed(s.subtitle)),
    },
];

pub(crate) fn scan_orders<'a>(
    orders: &'a [OrderRecord],
    query: &str,
    fuzzy: &FuzzyParams,
    cap: usize,
) -> Vec<Scored<'a>> {
    scan_kind(orders, query, fuzzy, cap, ORDER_FIELDS, order_result)
}

pub(crate) fn scan_pickups<'a>(
    pickups: &'a [PickupRecord],
    query: &str,
    fuzzy: &FuzzyParams,
    cap: usize,
) -> Vec<Scored<'a>> {
    scan_kind(pickups, query, fuzzy, cap, PICKUP_FIELDS, pickup_result)
}

pub(crate) fn scan_customers<'a>(
    customers: &'a [CustomerRecord],
    query: &str,
    fuzzy: &FuzzyParams,
    cap: usize,
) -> Vec<Scored<'a>> {
    scan_kind(customers, query, fuzzy, cap, CUSTOMER_FIELDS, customer_result)
}

pub(crate) fn scan_tickets<'a>(
    tickets: &'a [TicketRecord],
    query: &str,
    fuzzy: &FuzzyParams,
    cap: usize,
) -> Vec<Scored<'a>> {
    scan_kind(tickets, query, fuzzy, cap, TICKET_FIELDS, ticket_result)
}

pub(crate) fn scan_settings<'a>(
    pages: &'a [SettingsPageEntry],
    query: &str,
    fuzzy: &FuzzyParams,
    cap: usize,
) -> Vec<Scored<'a>> {
    scan_kind(pages, query, fuzzy, cap, SETTINGS_FIELDS, settings_result)
}

fn order_result(order: &OrderRecord) -> SearchResult<'_> {
    let title = match &order.reference {
        Some(reference) => format!("Order #{} ({})", order.id, reference),
        None => format!("Order #{}", order.id),
    };
    let place = order
        .customer
        .city
        .as_deref()
        .or(order.customer.governorate.as_deref());
    let subtitle = match place {
        Some(place) => format!("{}, {}", order.customer.name, place),
        None => order.customer.name.clone(),
    };

    SearchResult {
        record: RecordRef::Order(order),
        category: Category::Orders,
        title,
        subtitle,
        route: format!("/orders/{}", order.id),
        meta: ResultMeta {
            status: Some(order.status.clone()),
            phone: Some(order.customer.phone.clone()),
            amount_usd: Some(order.amount_usd),
            amount_lbp: Some(order.amount_lbp),
            record_type: Some(order.order_type.clone()),
            date: order.created_at,
            code: order.reference.clone(),
        },
    }
}

fn pickup_result(pickup: &PickupRecord) -> SearchResult<'_> {
    let title = match &pickup.code {
        Some(code) => format!("Pickup {}", code),
        None => format!("Pickup from {}", pickup.location),
    };

    SearchResult {
        record: RecordRef::Pickup(pickup),
        category: Category::Pickups,
        title,
        subtitle: format!("{}, {}", pickup.location, pickup.address),
        route: match &pickup.code {
            Some(code) => format!("/pickups/{}", code),
            None => "/pickups".to_string(),
        },
        meta: ResultMeta {
            status: Some(pickup.status.clone()),
            phone: Some(pickup.contact_phone.clone()),
            record_type: pickup.vehicle_type.clone(),
            code: pickup.code.clone(),
            ..ResultMeta::default()
        },
    }
}

fn customer_result(customer: &CustomerRecord) -> SearchResult<'_> {
    SearchResult {
        record: RecordRef::Customer(customer),
        category: Category::Customers,
        title: customer.name.clone(),
        subtitle: customer.phone.clone(),
        route: format!("/customers/{}", phone::normalize(&customer.phone)),
        meta: ResultMeta {
            phone: Some(customer.phone.clone()),
            ..ResultMeta::default()
        },
    }
}

fn ticket_result(ticket: &TicketRecord) -> SearchResult<'_> {
    let subtitle = match &ticket.code {
        Some(code) => format!("{} ({})", code, ticket.category),
        None => ticket.category.clone(),
    };

    SearchResult {
        record: RecordRef::Ticket(ticket),
        category: Category::Tickets,
        title: ticket.title.clone(),
        subtitle,
        route: match &ticket.code {
            Some(code) => format!("/tickets/{}", code),
            None => "/tickets".to_string(),
        },
        meta: ResultMeta {
            status: Some(ticket.status.clone()),
            record_type: Some(ticket.category.clone()),
            code: ticket.code.clone(),
            ..ResultMeta::default()
        },
    }
}

fn settings_result(entry: &SettingsPageEntry) -> SearchResult<'_> {
    SearchResult {
        record: RecordRef::Settings(entry),
        category: Category::Settings,
        title: entry.title.to_string(),
        subtitle: entry.subtitle.to_string(),
        route: entry.route.to_string(),
        meta: ResultMeta::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{OrderCustomer, SETTINGS_PAGES};

    fn order(id: u64, name: &str, phone: &str, governorate: &str) -> OrderRecord {
        OrderRecord {
            id,
            reference: None,
            customer: OrderCustomer {
                name: name.to_string(),
                phone: phone.to_string(),
                secondary_phone: None,
                address: None,
                city: None,
                governorate: Some(governorate.to_string()),
            },
            status: "in_transit".to_string(),
            order_type: "standard".to_string(),
            note: None,
            package_description: None,
            amount_usd: 25.0,
            amount_lbp: 2_250_000.0,
            created_at: None,
        }
    }

    fn customer(name: &str, phone: &str) -> CustomerRecord {
        CustomerRecord {
            name: name.to_string(),
            phone: phone.to_string(),
            secondary_phone: None,
            address: None,
            city: None,
            governorate: None,
        }
    }

    #[test]
    fn test_exact_id_scores_exact_plus_weight() {
        let orders = vec![order(12345, "Rami", "03987654", "Beirut")];
        let hits = scan_orders(&orders, "12345", &FuzzyParams::default(), 8);
        assert_eq!(hits.len(), 1);
        // Exact text tier (100) + id weight (50)
        assert_eq!(hits[0].score, 150);
    }

    #[test]
    fn test_contributions_compound_across_fields() {
        let mut record = order(7, "Beirut Bikes", "03123456", "Beirut");
        record.customer.city = Some("Beirut".to_string());
        let orders = vec![record];
        let hits = scan_orders(&orders, "beirut", &FuzzyParams::default(), 8);
        // name prefix (90+35) + city exact (100+20) + governorate exact (100+20)
        assert_eq!(hits[0].score, 365);
    }

    #[test]
    fn test_phone_field_contributes_fixed_bonus() {
        let customers = vec![customer("Lina", "03 71 123 456")];
        let hits = scan_customers(&customers, "71123456", &FuzzyParams::default(), 6);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 90);
    }

    #[test]
    fn test_absent_optional_fields_never_match() {
        let customers = vec![customer("Karim", "81999000")];
        let hits = scan_customers(&customers, "saida", &FuzzyParams::default(), 6);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_cap_truncates_ranked_list() {
        let orders: Vec<OrderRecord> = (0..10)
            .map(|i| order(i, "Nour", "03123456", "Beirut"))
            .collect();
        let hits = scan_orders(&orders, "beirut", &FuzzyParams::default(), 4);
        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_equal_scores_keep_scan_order() {
        let orders: Vec<OrderRecord> = (0..3)
            .map(|i| order(100 + i, "Nour", "03123456", "Beirut"))
            .collect();
        let hits = scan_orders(&orders, "beirut", &FuzzyParams::default(), 8);
        let ids: Vec<String> = hits.iter().map(|h| h.result.route.clone()).collect();
        assert_eq!(ids, vec!["/orders/100", "/orders/101", "/orders/102"]);
    }

    #[test]
    fn test_higher_score_ranks_first() {
        let exact = order(1, "Nour", "03123456", "Beirut");
        let mut weaker = order(2, "Nour", "03123456", "Mount Lebanon");
        weaker.note = Some("deliver near beirut river".to_string());
        let orders = vec![weaker, exact];
        let hits = scan_orders(&orders, "beirut", &FuzzyParams::default(), 8);
        assert_eq!(hits[0].result.route, "/orders/1");
    }

    #[test]
    fn test_settings_scan() {
        let hits = scan_settings(SETTINGS_PAGES, "pricing", &FuzzyParams::default(), 2);
        assert!(!hits.is_empty());
        assert!(hits.len() <= 2);
        assert_eq!(hits[0].result.category, Category::Settings);
    }

    #[test]
    fn test_ticket_code_match() {
        let tickets = vec![TicketRecord {
            code: Some("TIC-007".to_string()),
            title: "Late delivery".to_string(),
            content: "Order arrived two days late".to_string(),
            category: "delivery_delay".to_string(),
            status: "open".to_string(),
            issue_description: None,
        }];
        let hits = scan_tickets(&tickets, "TIC-007", &FuzzyParams::default(), 6);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 150);
        assert_eq!(hits[0].result.route, "/tickets/TIC-007");
    }
}
