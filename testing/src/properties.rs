//! Property-based testing utilities using proptest.
//!
//! Strategies for ticket types, request lines and whole purchase requests.
//! The `admissible_*` strategies only produce requests that pass every
//! booking rule; the others may break any of them.

use proptest::collection::vec;
use proptest::prelude::*;
use ticket_purchase_core::{MAX_TICKETS_PER_PURCHASE, TicketType, TicketTypeRequest};

/// Any ticket type
pub fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop::sample::select(TicketType::ALL.to_vec())
}

/// A single request line with a quantity up to `max_quantity`
pub fn ticket_request(max_quantity: u32) -> impl Strategy<Value = TicketTypeRequest> {
    (ticket_type(), 0..=max_quantity)
        .prop_map(|(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity))
}

/// Up to eight arbitrary request lines
pub fn ticket_requests() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    vec(ticket_request(30), 0..8)
}

/// Requests without any adult line
pub fn requests_without_adults() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    vec(
        (prop::sample::select(vec![TicketType::Child, TicketType::Infant]), 1..=5_u32)
            .prop_map(|(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity)),
        0..4,
    )
}

/// Adult, child and infant counts that satisfy every booking rule:
/// at least one adult and at most [`MAX_TICKETS_PER_PURCHASE`] seated tickets.
pub fn admissible_counts() -> impl Strategy<Value = (u32, u32, u32)> {
    (1..=MAX_TICKETS_PER_PURCHASE).prop_flat_map(|adults| {
        (
            Just(adults),
            0..=(MAX_TICKETS_PER_PURCHASE - adults),
            0..=10_u32,
        )
    })
}

/// Request lines for the given counts. Zero child or infant counts are
/// left out so the booking never contains a zero total.
#[must_use]
pub fn requests_for(adults: u32, children: u32, infants: u32) -> Vec<TicketTypeRequest> {
    let mut requests = vec![TicketTypeRequest::adults(adults)];
    if children > 0 {
        requests.push(TicketTypeRequest::children(children));
    }
    if infants > 0 {
        requests.push(TicketTypeRequest::infants(infants));
    }
    requests
}

/// Seated counts above the per-purchase limit, with any number of infants
pub fn over_limit_counts() -> impl Strategy<Value = (u32, u32, u32)> {
    (0..=40_u32, 0..=40_u32, 0..=10_u32)
        .prop_filter("seated tickets must exceed the limit", |(adults, children, _)| {
            adults + children > MAX_TICKETS_PER_PURCHASE
        })
}
