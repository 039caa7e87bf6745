//! Wires configured gateways into a ticket service.

use crate::config::Config;
use std::sync::Arc;
use ticket_purchase_core::stubs::{
    StubAccountGateway, StubPaymentGateway, StubSeatReservationGateway,
};
use ticket_purchase_core::{PaymentGateway, PurchaseEnvironment, SeatReservationGateway, TicketServiceImpl};

/// Build the purchase environment described by `config`.
#[must_use]
pub fn build_environment(config: &Config) -> PurchaseEnvironment {
    let payments: Arc<dyn PaymentGateway> = if config.payment.simulate_failure {
        tracing::warn!("Payment gateway will reject every charge");
        Arc::new(StubPaymentGateway::failing())
    } else {
        Arc::new(StubPaymentGateway::new())
    };

    let seats: Arc<dyn SeatReservationGateway> = if config.seats.simulate_failure {
        tracing::warn!("Seat reservation gateway will reject every reservation");
        Arc::new(StubSeatReservationGateway::failing())
    } else {
        Arc::new(StubSeatReservationGateway::new())
    };

    PurchaseEnvironment::new(
        Arc::new(StubAccountGateway::with_balance(config.account.stub_balance)),
        payments,
        seats,
    )
}

/// Build a ticket service over the environment described by `config`.
#[must_use]
pub fn build_service(config: &Config) -> TicketServiceImpl {
    TicketServiceImpl::new(build_environment(config))
}
