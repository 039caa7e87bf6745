//! Scripted and recording gateway doubles.
//!
//! Every double writes the calls it receives into a [`CallLog`]. Doubles
//! created from the same log share it, which lets a test assert the exact
//! order in which the orchestrator talked to its collaborators.
//!
//! Clones share their log, so a test can hand one clone to the environment
//! and keep another for assertions.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Lock poisoning only follows a panicking test

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use ticket_purchase_core::{
    AccountGateway, AccountId, GatewayError, GatewayResult, Money, PaymentGateway,
    SeatReservationGateway,
};

/// A single call received by a gateway double
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayCall {
    /// `AccountGateway::is_valid`
    IsValid(AccountId),
    /// `AccountGateway::balance`
    Balance(AccountId),
    /// `PaymentGateway::charge`
    Charge {
        /// Account charged
        account_id: AccountId,
        /// Amount charged
        amount: Money,
    },
    /// `SeatReservationGateway::reserve`
    Reserve {
        /// Account the seats are for
        account_id: AccountId,
        /// Number of seats
        seats: u32,
    },
}

/// Ordered, shareable record of gateway calls.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<GatewayCall>>>,
}

impl CallLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call
    pub fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    /// All calls so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Whether no calls were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    /// Forget all recorded calls
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Charges attempted, including failed ones
    #[must_use]
    pub fn charges(&self) -> Vec<(AccountId, Money)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                GatewayCall::Charge { account_id, amount } => Some((*account_id, *amount)),
                _ => None,
            })
            .collect()
    }

    /// Reservations attempted, including failed ones
    #[must_use]
    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                GatewayCall::Reserve { account_id, seats } => Some((*account_id, *seats)),
                _ => None,
            })
            .collect()
    }
}

/// Account gateway with scripted answers.
///
/// By default every account is valid and holds [`FixedAccountGateway::DEFAULT_BALANCE`].
#[derive(Clone, Debug)]
pub struct FixedAccountGateway {
    valid: bool,
    balance: Money,
    invalid_accounts: HashSet<AccountId>,
    balances: HashMap<AccountId, Money>,
    failure: Option<GatewayError>,
    log: CallLog,
}

impl FixedAccountGateway {
    /// Balance reported unless overridden
    pub const DEFAULT_BALANCE: Money = Money::from_units(400);

    /// Create a gateway where every account is valid
    #[must_use]
    pub fn new() -> Self {
        Self::with_log(CallLog::new())
    }

    /// Create a gateway recording into an existing log
    #[must_use]
    pub fn with_log(log: CallLog) -> Self {
        Self {
            valid: true,
            balance: Self::DEFAULT_BALANCE,
            invalid_accounts: HashSet::new(),
            balances: HashMap::new(),
            failure: None,
            log,
        }
    }

    /// Report every account as invalid
    #[must_use]
    pub fn all_invalid(mut self) -> Self {
        self.valid = false;
        self
    }

    /// Report one account as invalid
    #[must_use]
    pub fn with_invalid_account(mut self, account_id: AccountId) -> Self {
        self.invalid_accounts.insert(account_id);
        self
    }

    /// Report `balance` for every account without its own balance
    #[must_use]
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }

    /// Report `balance` for one account
    #[must_use]
    pub fn with_account_balance(mut self, account_id: AccountId, balance: Money) -> Self {
        self.balances.insert(account_id, balance);
        self
    }

    /// Fail every call with `error`
    #[must_use]
    pub fn failing_with(mut self, error: GatewayError) -> Self {
        self.failure = Some(error);
        self
    }

    /// The log this gateway records into
    #[must_use]
    pub const fn log(&self) -> &CallLog {
        &self.log
    }

    fn check_failure(&self) -> GatewayResult<()> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

impl Default for FixedAccountGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountGateway for FixedAccountGateway {
    fn is_valid(&self, account_id: AccountId) -> GatewayResult<bool> {
        self.log.record(GatewayCall::IsValid(account_id));
        self.check_failure()?;
        Ok(self.valid && !self.invalid_accounts.contains(&account_id))
    }

    fn balance(&self, account_id: AccountId) -> GatewayResult<Money> {
        self.log.record(GatewayCall::Balance(account_id));
        self.check_failure()?;
        Ok(self.balances.get(&account_id).copied().unwrap_or(self.balance))
    }
}

/// Payment gateway that records every charge.
#[derive(Clone, Debug, Default)]
pub struct RecordingPaymentGateway {
    failure: Option<GatewayError>,
    log: CallLog,
}

impl RecordingPaymentGateway {
    /// Create a gateway that accepts every charge
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway recording into an existing log
    #[must_use]
    pub const fn with_log(log: CallLog) -> Self {
        Self { failure: None, log }
    }

    /// Fail every charge with `error`
    #[must_use]
    pub fn failing_with(mut self, error: GatewayError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Charges attempted, including failed ones
    #[must_use]
    pub fn charges(&self) -> Vec<(AccountId, Money)> {
        self.log.charges()
    }
}

impl PaymentGateway for RecordingPaymentGateway {
    fn charge(&self, account_id: AccountId, amount: Money) -> GatewayResult<()> {
        self.log.record(GatewayCall::Charge { account_id, amount });
        self.failure.clone().map_or(Ok(()), Err)
    }
}

/// Seat reservation gateway that records every reservation.
#[derive(Clone, Debug, Default)]
pub struct RecordingSeatReservationGateway {
    failure: Option<GatewayError>,
    log: CallLog,
}

impl RecordingSeatReservationGateway {
    /// Create a gateway that accepts every reservation
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway recording into an existing log
    #[must_use]
    pub const fn with_log(log: CallLog) -> Self {
        Self { failure: None, log }
    }

    /// Fail every reservation with `error`
    #[must_use]
    pub fn failing_with(mut self, error: GatewayError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Reservations attempted, including failed ones
    #[must_use]
    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.log.reservations()
    }
}

impl SeatReservationGateway for RecordingSeatReservationGateway {
    fn reserve(&self, account_id: AccountId, seats: u32) -> GatewayResult<()> {
        self.log.record(GatewayCall::Reserve { account_id, seats });
        self.failure.clone().map_or(Ok(()), Err)
    }
}
