//! Booking rules: ticket limits, aggregation and pricing.
//!
//! A purchase request is a list of [`TicketTypeRequest`] lines. Before any
//! gateway is called the lines are checked and folded into a [`TicketBooking`]:
//!
//! ```text
//! 1. seated tickets (everything but infants) must not exceed the limit
//! 2. seated lines are summed per ticket type
//! 3. no ticket type may total zero
//! 4. an adult ticket must be present
//! ```
//!
//! Infants are free and sit on an adult's lap, so they are neither priced nor
//! given a seat and never appear in a booking.

use crate::error::{InvalidPurchase, PurchaseResult};
use crate::types::{Money, TicketType, TicketTypeRequest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of seated tickets in a single purchase
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Seated tickets per ticket type, aggregated from a purchase request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketBooking {
    quantities: BTreeMap<TicketType, u32>,
}

impl TicketBooking {
    /// Sums the quantities of all seated request lines per ticket type.
    ///
    /// A type requested only with quantity zero is kept with a zero total;
    /// [`verify_booking`] rejects such bookings.
    #[must_use]
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        let mut quantities = BTreeMap::new();

        for request in requests.iter().filter(|r| r.ticket_type().occupies_seat()) {
            let total = quantities.entry(request.ticket_type()).or_insert(0_u32);
            *total = total.saturating_add(request.quantity());
        }

        Self { quantities }
    }

    /// Quantity booked for a ticket type (zero if absent)
    #[must_use]
    pub fn quantity(&self, ticket_type: TicketType) -> u32 {
        self.quantities.get(&ticket_type).copied().unwrap_or(0)
    }

    /// Whether the ticket type appears in the booking
    #[must_use]
    pub fn contains(&self, ticket_type: TicketType) -> bool {
        self.quantities.contains_key(&ticket_type)
    }

    /// First ticket type whose aggregated quantity is zero, if any
    #[must_use]
    pub fn zero_quantity_type(&self) -> Option<TicketType> {
        self.quantities
            .iter()
            .find(|(_, quantity)| **quantity == 0)
            .map(|(ticket_type, _)| *ticket_type)
    }

    /// Number of seats the booking needs
    #[must_use]
    pub fn total_seats(&self) -> u32 {
        self.quantities
            .values()
            .fold(0_u32, |total, quantity| total.saturating_add(*quantity))
    }

    /// Price of the booking at the fixed fares.
    ///
    /// Returns `None` if the amount overflows.
    #[must_use]
    pub fn amount(&self) -> Option<Money> {
        self.quantities
            .iter()
            .try_fold(Money::ZERO, |total, (ticket_type, quantity)| {
                total.checked_add(ticket_type.fare().checked_multiply(*quantity)?)
            })
    }

    /// Booked ticket types and quantities, adults first
    pub fn iter(&self) -> impl Iterator<Item = (TicketType, u32)> + '_ {
        self.quantities.iter().map(|(t, q)| (*t, *q))
    }
}

/// Total quantity of seated tickets across all request lines.
#[must_use]
pub fn seated_ticket_count(requests: &[TicketTypeRequest]) -> u64 {
    requests
        .iter()
        .filter(|r| r.ticket_type().occupies_seat())
        .map(|r| u64::from(r.quantity()))
        .sum()
}

/// Applies the booking rules to a purchase request.
///
/// # Errors
///
/// - [`InvalidPurchase::TicketLimitExceeded`] if more than
///   [`MAX_TICKETS_PER_PURCHASE`] seated tickets are requested
/// - [`InvalidPurchase::ZeroQuantity`] if a ticket type totals zero
/// - [`InvalidPurchase::AdultTicketRequired`] if no adult ticket is requested
pub fn verify_booking(requests: &[TicketTypeRequest]) -> PurchaseResult<TicketBooking> {
    let requested = seated_ticket_count(requests);
    if requested > u64::from(MAX_TICKETS_PER_PURCHASE) {
        return Err(InvalidPurchase::TicketLimitExceeded {
            requested,
            limit: MAX_TICKETS_PER_PURCHASE,
        });
    }

    let booking = TicketBooking::from_requests(requests);

    if let Some(ticket_type) = booking.zero_quantity_type() {
        return Err(InvalidPurchase::ZeroQuantity { ticket_type });
    }

    if !booking.contains(TicketType::Adult) {
        return Err(InvalidPurchase::AdultTicketRequired);
    }

    Ok(booking)
}

/// Price of a verified booking.
///
/// # Errors
///
/// Returns [`InvalidPurchase::AmountOverflow`] if the amount overflows.
pub fn calculate_amount(booking: &TicketBooking) -> PurchaseResult<Money> {
    booking.amount().ok_or(InvalidPurchase::AmountOverflow)
}
