//! Gateways to the external services a purchase depends on.
//!
//! The orchestrator never talks to account, payment or seat systems directly.
//! It calls these traits, and concrete implementations are injected through
//! the [`PurchaseEnvironment`](crate::environment::PurchaseEnvironment):
//!
//! - [`AccountGateway`]: account validity and balance lookups
//! - [`PaymentGateway`]: debits the purchase amount
//! - [`SeatReservationGateway`]: holds seats for the account
//!
//! All calls are synchronous request/response. Implementations that are shared
//! between purchases must do their own synchronization.
//!
//! # Implementations
//!
//! - [`stubs`](crate::stubs): stand-ins for the real services
//! - `ticket-purchase-testing`: recording and scripted doubles for tests

use crate::types::{AccountId, Money};
use thiserror::Error;

/// Gateway result
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure reported by an external gateway.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The service could not be reached
    #[error("Gateway unavailable: {reason}")]
    Unavailable {
        /// Why the service is unavailable
        reason: String,
    },

    /// The service answered but refused the operation
    #[error("Gateway rejected request: {reason}")]
    Rejected {
        /// Rejection reason given by the service
        reason: String,
    },

    /// The service did not answer in time
    #[error("Gateway timeout")]
    Timeout,
}

impl GatewayError {
    /// Creates an `Unavailable` error
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Creates a `Rejected` error
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Account service abstraction.
pub trait AccountGateway: Send + Sync {
    /// Reports whether the account may be used for purchases
    ///
    /// # Errors
    ///
    /// Returns error if the account service cannot answer
    fn is_valid(&self, account_id: AccountId) -> GatewayResult<bool>;

    /// Returns the funds available on the account
    ///
    /// An overdrawn account has no funds available and reports
    /// [`Money::ZERO`], so every purchase with a price is refused for it.
    ///
    /// # Errors
    ///
    /// Returns error if the account service cannot answer
    fn balance(&self, account_id: AccountId) -> GatewayResult<Money>;
}

/// Payment processor abstraction.
pub trait PaymentGateway: Send + Sync {
    /// Debits `amount` from the account
    ///
    /// # Errors
    ///
    /// Returns error if the charge fails
    fn charge(&self, account_id: AccountId, amount: Money) -> GatewayResult<()>;
}

/// Seat reservation abstraction.
pub trait SeatReservationGateway: Send + Sync {
    /// Reserves `seats` seats for the account
    ///
    /// # Errors
    ///
    /// Returns error if the seats cannot be reserved
    fn reserve(&self, account_id: AccountId, seats: u32) -> GatewayResult<()>;
}
