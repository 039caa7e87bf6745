//! Purchase orchestration.
//!
//! [`TicketServiceImpl`] runs one purchase as a fixed pipeline:
//!
//! ```text
//! verify booking → price → validate account → check balance → charge → reserve seats
//! ```
//!
//! Every step is a hard gate: the first failure is returned and no later step
//! runs. Nothing is retried. A payment that succeeded is not reversed when the
//! seat reservation fails afterwards; the returned
//! [`InvalidPurchase::SeatReservation`] carries the amount that was charged.

use crate::booking::{TicketBooking, calculate_amount, verify_booking};
use crate::environment::PurchaseEnvironment;
use crate::error::{InvalidPurchase, PurchaseResult};
use crate::metrics;
use crate::types::{AccountId, Money, TicketType, TicketTypeRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a completed purchase
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// Account the tickets were bought for
    pub account_id: AccountId,
    /// Seated tickets per ticket type
    pub booking: TicketBooking,
    /// Infant tickets issued alongside the booking
    pub infants: u64,
    /// Amount charged
    pub amount: Money,
    /// Seats reserved
    pub seats: u32,
    /// When the purchase completed
    pub purchased_at: DateTime<Utc>,
}

/// Ticket purchasing entry point.
pub trait TicketService {
    /// Purchases the requested tickets for an account.
    ///
    /// Calling this twice with the same arguments performs two independent
    /// purchases.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchase`] if a booking rule is broken, the account is
    /// invalid or cannot pay, or a gateway call fails.
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseReceipt>;
}

/// Purchase orchestrator backed by injected gateways.
#[derive(Clone, Debug)]
pub struct TicketServiceImpl {
    env: PurchaseEnvironment,
}

impl TicketServiceImpl {
    /// Creates a new service over the given environment
    #[must_use]
    pub const fn new(env: PurchaseEnvironment) -> Self {
        Self { env }
    }

    fn run(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseReceipt> {
        let booking = verify_booking(requests)?;
        let amount = calculate_amount(&booking)?;
        let seats = booking.total_seats();

        tracing::debug!(?booking, amount = amount.units(), seats, "Booking verified");

        self.check_account(account_id, amount)?;
        self.make_payment(account_id, amount)?;
        self.make_reservation(account_id, seats, amount)?;

        Ok(PurchaseReceipt {
            account_id,
            booking,
            infants: infant_count(requests),
            amount,
            seats,
            purchased_at: self.env.clock.now(),
        })
    }

    fn check_account(&self, account_id: AccountId, amount: Money) -> PurchaseResult<()> {
        let accounts = &self.env.accounts;

        let valid = accounts
            .is_valid(account_id)
            .map_err(|source| InvalidPurchase::AccountLookup { source })?;
        if !valid {
            return Err(InvalidPurchase::InvalidAccount { account_id });
        }

        let balance = accounts
            .balance(account_id)
            .map_err(|source| InvalidPurchase::AccountLookup { source })?;
        if balance < amount {
            return Err(InvalidPurchase::InsufficientFunds {
                balance,
                required: amount,
            });
        }

        Ok(())
    }

    fn make_payment(&self, account_id: AccountId, amount: Money) -> PurchaseResult<()> {
        self.env
            .payments
            .charge(account_id, amount)
            .map_err(|source| InvalidPurchase::Payment { source })?;

        tracing::info!(amount = amount.units(), "Payment taken");
        Ok(())
    }

    fn make_reservation(
        &self,
        account_id: AccountId,
        seats: u32,
        charged: Money,
    ) -> PurchaseResult<()> {
        if let Err(source) = self.env.seats.reserve(account_id, seats) {
            tracing::error!(
                seats,
                charged = charged.units(),
                error = %source,
                "Seat reservation failed after payment was taken"
            );
            return Err(InvalidPurchase::SeatReservation { charged, source });
        }

        tracing::info!(seats, "Seats reserved");
        Ok(())
    }
}

impl TicketService for TicketServiceImpl {
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseReceipt> {
        let span = tracing::info_span!("purchase_tickets", %account_id, lines = requests.len());
        let _entered = span.enter();

        let result = self.run(account_id, requests);

        match &result {
            Ok(receipt) => {
                tracing::info!(
                    amount = receipt.amount.units(),
                    seats = receipt.seats,
                    infants = receipt.infants,
                    "Purchase completed"
                );
                metrics::record_purchase_completed(
                    receipt.amount.units(),
                    receipt.seats,
                    receipt.infants,
                );
                metrics::record_tickets_sold(&receipt.booking, receipt.infants);
            }
            Err(error) => {
                tracing::warn!(kind = error.kind(), %error, "Purchase rejected");
                metrics::record_purchase_rejected(error);
            }
        }

        result
    }
}

fn infant_count(requests: &[TicketTypeRequest]) -> u64 {
    requests
        .iter()
        .filter(|r| r.ticket_type() == TicketType::Infant)
        .map(|r| u64::from(r.quantity()))
        .sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gateway::{AccountGateway, GatewayError, GatewayResult};
    use crate::stubs::{StubPaymentGateway, StubSeatReservationGateway};
    use std::sync::Arc;

    struct UnreachableAccounts;

    impl AccountGateway for UnreachableAccounts {
        fn is_valid(&self, _account_id: AccountId) -> GatewayResult<bool> {
            Err(GatewayError::Timeout)
        }

        fn balance(&self, _account_id: AccountId) -> GatewayResult<Money> {
            Err(GatewayError::Timeout)
        }
    }

    fn family() -> [TicketTypeRequest; 3] {
        [
            TicketTypeRequest::adults(5),
            TicketTypeRequest::children(5),
            TicketTypeRequest::infants(5),
        ]
    }

    #[test]
    fn test_stubbed_purchase_succeeds() {
        let service = TicketServiceImpl::new(PurchaseEnvironment::stubbed());

        let receipt = service
            .purchase_tickets(AccountId::new(345_678), &family())
            .unwrap();

        assert_eq!(receipt.amount, Money::from_units(150));
        assert_eq!(receipt.seats, 10);
        assert_eq!(receipt.infants, 5);
        assert_eq!(receipt.booking.quantity(TicketType::Adult), 5);
    }

    #[test]
    fn test_stubbed_purchase_rejects_account_zero() {
        let service = TicketServiceImpl::new(PurchaseEnvironment::stubbed());

        let err = service
            .purchase_tickets(AccountId::new(0), &family())
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid account");
    }

    #[test]
    fn test_account_lookup_failure_is_wrapped() {
        let env = PurchaseEnvironment::new(
            Arc::new(UnreachableAccounts),
            Arc::new(StubPaymentGateway::new()),
            Arc::new(StubSeatReservationGateway::new()),
        );
        let service = TicketServiceImpl::new(env);

        let err = service
            .purchase_tickets(AccountId::new(1), &family())
            .unwrap_err();

        assert_eq!(
            err,
            InvalidPurchase::AccountLookup {
                source: GatewayError::Timeout
            }
        );
    }

    #[test]
    fn test_receipt_serializes() {
        let service = TicketServiceImpl::new(PurchaseEnvironment::stubbed());
        let receipt = service
            .purchase_tickets(AccountId::new(7), &[TicketTypeRequest::adults(1)])
            .unwrap();

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["amount"], 20);
        assert_eq!(json["booking"]["quantities"]["ADULT"], 1);
    }
}
