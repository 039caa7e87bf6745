//! Business metrics for ticket purchases.
//!
//! # Exported Metrics
//!
//! ## Counters
//! - `ticketing_purchases_total{outcome}` - Purchases by outcome (`completed` or a rejection kind)
//! - `ticketing_purchase_revenue_total` - Currency units charged by completed purchases
//! - `ticketing_seats_reserved_total` - Seats reserved by completed purchases
//! - `ticketing_infant_tickets_total` - Infant tickets issued without a seat
//! - `ticketing_tickets_sold_total{ticket_type}` - Tickets sold per ticket type
//!
//! Without an installed recorder these calls are no-ops.

use crate::booking::TicketBooking;
use crate::error::InvalidPurchase;
use crate::types::TicketType;
use metrics::describe_counter;

/// Register all purchase metric descriptions.
///
/// Call once at startup, after installing a recorder.
pub fn register_purchase_metrics() {
    describe_counter!(
        "ticketing_purchases_total",
        "Total number of purchase attempts by outcome"
    );
    describe_counter!(
        "ticketing_purchase_revenue_total",
        "Total currency units charged by completed purchases"
    );
    describe_counter!(
        "ticketing_seats_reserved_total",
        "Total number of seats reserved"
    );
    describe_counter!(
        "ticketing_infant_tickets_total",
        "Total number of infant tickets issued without a seat"
    );
    describe_counter!(
        "ticketing_tickets_sold_total",
        "Total number of tickets sold by ticket type"
    );

    tracing::info!("Purchase metrics registered");
}

/// Record a completed purchase.
pub fn record_purchase_completed(amount: u64, seats: u32, infants: u64) {
    metrics::counter!("ticketing_purchases_total", "outcome" => "completed").increment(1);
    metrics::counter!("ticketing_purchase_revenue_total").increment(amount);
    metrics::counter!("ticketing_seats_reserved_total").increment(u64::from(seats));
    metrics::counter!("ticketing_infant_tickets_total").increment(infants);
    tracing::debug!(amount, seats, infants, "Recorded purchase_completed metric");
}

/// Record tickets sold per ticket type.
///
/// Infants are not part of the booking, so their count is passed separately.
pub fn record_tickets_sold(booking: &TicketBooking, infants: u64) {
    for (ticket_type, quantity) in booking.iter() {
        metrics::counter!("ticketing_tickets_sold_total", "ticket_type" => ticket_type.as_str())
            .increment(u64::from(quantity));
    }
    if infants > 0 {
        metrics::counter!(
            "ticketing_tickets_sold_total",
            "ticket_type" => TicketType::Infant.as_str()
        )
        .increment(infants);
    }
}

/// Record a refused or failed purchase.
pub fn record_purchase_rejected(error: &InvalidPurchase) {
    metrics::counter!("ticketing_purchases_total", "outcome" => error.kind()).increment(1);
    tracing::debug!(outcome = error.kind(), "Recorded purchase_rejected metric");
}
