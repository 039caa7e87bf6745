//! Ready-wired purchase environments for tests.

use crate::gateways::{
    CallLog, FixedAccountGateway, RecordingPaymentGateway, RecordingSeatReservationGateway,
};
use crate::mocks::{FixedClock, test_clock};
use std::sync::Arc;
use ticket_purchase_core::{
    AccountId, GatewayError, Money, PurchaseEnvironment, TicketServiceImpl,
};

/// A purchase environment built from test doubles that all record into one
/// [`CallLog`].
///
/// # Example
///
/// ```
/// use ticket_purchase_core::{AccountId, TicketService, TicketTypeRequest};
/// use ticket_purchase_testing::TestEnvironment;
///
/// let env = TestEnvironment::new();
/// let service = env.service();
///
/// service
///     .purchase_tickets(AccountId::new(1), &[TicketTypeRequest::adults(2)])
///     .map_err(|e| e.to_string())?;
///
/// assert_eq!(env.log.reservations(), vec![(AccountId::new(1), 2)]);
/// # Ok::<(), String>(())
/// ```
#[derive(Clone, Debug)]
pub struct TestEnvironment {
    /// Account gateway double
    pub accounts: FixedAccountGateway,
    /// Payment gateway double
    pub payments: RecordingPaymentGateway,
    /// Seat reservation gateway double
    pub seats: RecordingSeatReservationGateway,
    /// Calls received by all three doubles, in order
    pub log: CallLog,
    /// Clock stamped on receipts
    pub clock: FixedClock,
}

impl TestEnvironment {
    /// Valid accounts, default balance, gateways that always succeed
    #[must_use]
    pub fn new() -> Self {
        let log = CallLog::new();
        Self {
            accounts: FixedAccountGateway::with_log(log.clone()),
            payments: RecordingPaymentGateway::with_log(log.clone()),
            seats: RecordingSeatReservationGateway::with_log(log.clone()),
            log,
            clock: test_clock(),
        }
    }

    /// Every account reports `balance`
    #[must_use]
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.accounts = self.accounts.with_balance(balance);
        self
    }

    /// The account service rejects `account_id`
    #[must_use]
    pub fn with_invalid_account(mut self, account_id: AccountId) -> Self {
        self.accounts = self.accounts.with_invalid_account(account_id);
        self
    }

    /// The account service rejects every account
    #[must_use]
    pub fn with_all_accounts_invalid(mut self) -> Self {
        self.accounts = self.accounts.all_invalid();
        self
    }

    /// The account service fails every call
    #[must_use]
    pub fn with_failing_accounts(mut self, error: GatewayError) -> Self {
        self.accounts = self.accounts.failing_with(error);
        self
    }

    /// The payment gateway fails every charge
    #[must_use]
    pub fn with_failing_payments(mut self, error: GatewayError) -> Self {
        self.payments = self.payments.failing_with(error);
        self
    }

    /// The seat gateway fails every reservation
    #[must_use]
    pub fn with_failing_seats(mut self, error: GatewayError) -> Self {
        self.seats = self.seats.failing_with(error);
        self
    }

    /// Purchase environment over these doubles
    #[must_use]
    pub fn environment(&self) -> PurchaseEnvironment {
        PurchaseEnvironment::new(
            Arc::new(self.accounts.clone()),
            Arc::new(self.payments.clone()),
            Arc::new(self.seats.clone()),
        )
        .with_clock(Arc::new(self.clock.clone()))
    }

    /// Ticket service over these doubles
    #[must_use]
    pub fn service(&self) -> TicketServiceImpl {
        TicketServiceImpl::new(self.environment())
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
