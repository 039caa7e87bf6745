//! Stand-in gateways for development.
//!
//! These play the part of the real account, payment and seat reservation
//! services until integrations exist. The account stub treats every positive
//! identifier as valid and reports a fixed balance; the payment and seat stubs
//! accept every request unless configured to fail.

use crate::gateway::{
    AccountGateway, GatewayError, GatewayResult, PaymentGateway, SeatReservationGateway,
};
use crate::types::{AccountId, Money};

/// Balance the account stub reports when none is configured
pub const DEFAULT_STUB_BALANCE: Money = Money::from_units(400);

/// Account gateway stub: positive ids are valid, balance is fixed.
#[derive(Clone, Debug)]
pub struct StubAccountGateway {
    balance: Money,
}

impl StubAccountGateway {
    /// Creates a stub reporting [`DEFAULT_STUB_BALANCE`]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            balance: DEFAULT_STUB_BALANCE,
        }
    }

    /// Creates a stub reporting the given balance for every account
    #[must_use]
    pub const fn with_balance(balance: Money) -> Self {
        Self { balance }
    }
}

impl Default for StubAccountGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountGateway for StubAccountGateway {
    fn is_valid(&self, account_id: AccountId) -> GatewayResult<bool> {
        Ok(account_id.is_positive())
    }

    fn balance(&self, account_id: AccountId) -> GatewayResult<Money> {
        tracing::trace!(%account_id, balance = self.balance.units(), "Stub balance lookup");
        Ok(self.balance)
    }
}

/// Payment gateway stub (succeeds unless told to fail)
#[derive(Clone, Debug, Default)]
pub struct StubPaymentGateway {
    fail: bool,
}

impl StubPaymentGateway {
    /// Creates a stub that accepts every charge
    #[must_use]
    pub const fn new() -> Self {
        Self { fail: false }
    }

    /// Creates a stub that rejects every charge
    #[must_use]
    pub const fn failing() -> Self {
        Self { fail: true }
    }
}

impl PaymentGateway for StubPaymentGateway {
    fn charge(&self, account_id: AccountId, amount: Money) -> GatewayResult<()> {
        if self.fail {
            return Err(GatewayError::rejected("simulated payment failure"));
        }

        tracing::info!(%account_id, amount = amount.units(), "Stub payment taken");
        Ok(())
    }
}

/// Seat reservation stub (succeeds unless told to fail)
#[derive(Clone, Debug, Default)]
pub struct StubSeatReservationGateway {
    fail: bool,
}

impl StubSeatReservationGateway {
    /// Creates a stub that accepts every reservation
    #[must_use]
    pub const fn new() -> Self {
        Self { fail: false }
    }

    /// Creates a stub that rejects every reservation
    #[must_use]
    pub const fn failing() -> Self {
        Self { fail: true }
    }
}

impl SeatReservationGateway for StubSeatReservationGateway {
    fn reserve(&self, account_id: AccountId, seats: u32) -> GatewayResult<()> {
        if self.fail {
            return Err(GatewayError::unavailable("simulated seat reservation failure"));
        }

        tracing::info!(%account_id, seats, "Stub seats reserved");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_account_validity_follows_id_sign() {
        let gateway = StubAccountGateway::new();

        assert!(gateway.is_valid(AccountId::new(345_678)).unwrap());
        assert!(!gateway.is_valid(AccountId::new(0)).unwrap());
        assert!(!gateway.is_valid(AccountId::new(-7)).unwrap());
    }

    #[test]
    fn test_stub_account_balance() {
        let gateway = StubAccountGateway::new();
        assert_eq!(gateway.balance(AccountId::new(1)).unwrap(), Money::from_units(400));

        let gateway = StubAccountGateway::with_balance(Money::from_units(15));
        assert_eq!(gateway.balance(AccountId::new(1)).unwrap(), Money::from_units(15));
    }

    #[test]
    fn test_failing_stubs() {
        let account = AccountId::new(1);

        assert!(StubPaymentGateway::new().charge(account, Money::from_units(20)).is_ok());
        assert!(matches!(
            StubPaymentGateway::failing().charge(account, Money::from_units(20)),
            Err(GatewayError::Rejected { .. })
        ));

        assert!(StubSeatReservationGateway::new().reserve(account, 2).is_ok());
        assert!(matches!(
            StubSeatReservationGateway::failing().reserve(account, 2),
            Err(GatewayError::Unavailable { .. })
        ));
    }
}
