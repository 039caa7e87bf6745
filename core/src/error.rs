//! Purchase failure type.

use crate::gateway::GatewayError;
use crate::types::{AccountId, Money, TicketType};
use thiserror::Error;

/// Result of a purchase operation
pub type PurchaseResult<T> = Result<T, InvalidPurchase>;

/// Why a purchase was refused or could not be completed.
///
/// Every failure of [`TicketService::purchase_tickets`](crate::service::TicketService::purchase_tickets)
/// is reported through this type. Gateway failures keep the underlying
/// [`GatewayError`] as their source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPurchase {
    /// More seated tickets were requested than a single purchase allows
    #[error("Number of tickets exceeds the limit")]
    TicketLimitExceeded {
        /// Seated tickets requested
        requested: u64,
        /// Maximum seated tickets per purchase
        limit: u32,
    },

    /// A ticket type was requested with a total quantity of zero
    #[error("Number of tickets can't be 0")]
    ZeroQuantity {
        /// The offending ticket type
        ticket_type: TicketType,
    },

    /// Child or infant tickets were requested without an adult ticket
    #[error("Child/Infant ticket must be purchased with adult ticket")]
    AdultTicketRequired,

    /// The booking amount does not fit in a `Money` value
    #[error("Booking amount overflow")]
    AmountOverflow,

    /// The account service reported the account as invalid
    #[error("Invalid account")]
    InvalidAccount {
        /// Account that was rejected
        account_id: AccountId,
    },

    /// The account cannot cover the booking amount
    #[error("Insufficient funds from the account")]
    InsufficientFunds {
        /// Balance reported by the account service
        balance: Money,
        /// Amount the booking costs
        required: Money,
    },

    /// The account service failed while validating the account
    #[error("Something went wrong during account validation: {source}")]
    AccountLookup {
        /// Underlying gateway failure
        #[source]
        source: GatewayError,
    },

    /// The payment gateway failed to take the payment
    #[error("Something went wrong during making payment: {source}")]
    Payment {
        /// Underlying gateway failure
        #[source]
        source: GatewayError,
    },

    /// Seats could not be reserved. The payment has already been taken.
    #[error("Something went wrong during seats reservation: {source}")]
    SeatReservation {
        /// Amount that was charged before the reservation failed
        charged: Money,
        /// Underlying gateway failure
        #[source]
        source: GatewayError,
    },
}

impl InvalidPurchase {
    /// Stable label for logs and metrics
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TicketLimitExceeded { .. } => "ticket_limit_exceeded",
            Self::ZeroQuantity { .. } => "zero_quantity",
            Self::AdultTicketRequired => "adult_ticket_required",
            Self::AmountOverflow => "amount_overflow",
            Self::InvalidAccount { .. } => "invalid_account",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::AccountLookup { .. } => "account_lookup_failed",
            Self::Payment { .. } => "payment_failed",
            Self::SeatReservation { .. } => "seat_reservation_failed",
        }
    }

    /// True if the request itself broke a booking rule, as opposed to the
    /// account or a gateway refusing it
    #[must_use]
    pub const fn is_booking_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::TicketLimitExceeded { .. }
                | Self::ZeroQuantity { .. }
                | Self::AdultTicketRequired
                | Self::AmountOverflow
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_match_customer_facing_text() {
        let limit = InvalidPurchase::TicketLimitExceeded {
            requested: 30,
            limit: 20,
        };
        assert_eq!(limit.to_string(), "Number of tickets exceeds the limit");
        assert_eq!(
            InvalidPurchase::AdultTicketRequired.to_string(),
            "Child/Infant ticket must be purchased with adult ticket"
        );
        assert_eq!(
            InvalidPurchase::InvalidAccount {
                account_id: AccountId::new(0)
            }
            .to_string(),
            "Invalid account"
        );
    }

    #[test]
    fn test_gateway_failures_embed_cause() {
        let error = InvalidPurchase::Payment {
            source: GatewayError::rejected("card declined"),
        };

        assert_eq!(
            error.to_string(),
            "Something went wrong during making payment: Gateway rejected request: card declined"
        );
        assert!(error.source().is_some());
        assert_eq!(error.kind(), "payment_failed");
        assert!(!error.is_booking_rule_violation());
    }

    #[test]
    fn test_rule_violations() {
        assert!(InvalidPurchase::AdultTicketRequired.is_booking_rule_violation());
        assert!(
            InvalidPurchase::ZeroQuantity {
                ticket_type: TicketType::Child
            }
            .is_booking_rule_violation()
        );
    }
}
