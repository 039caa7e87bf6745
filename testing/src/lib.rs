//! # Ticket Purchase Testing
//!
//! Testing utilities and helpers for ticket purchase orchestration.
//!
//! This crate provides:
//! - Recording and scripted gateway doubles sharing one ordered [`CallLog`]
//! - [`TestEnvironment`]: a purchase environment wired to those doubles
//! - [`PurchaseTest`]: Given-When-Then harness for purchase scenarios
//! - Property-based testing strategies for ticket requests
//!
//! ## Example
//!
//! ```
//! use ticket_purchase_core::{AccountId, Money, TicketTypeRequest};
//! use ticket_purchase_testing::{GatewayCall, PurchaseTest};
//!
//! let account = AccountId::new(345_678);
//!
//! PurchaseTest::new()
//!     .when_purchasing(account, vec![TicketTypeRequest::adults(1)])
//!     .then_receipt(|receipt| assert_eq!(receipt.amount, Money::from_units(20)))
//!     .then_calls(move |calls| {
//!         assert_eq!(
//!             calls.last(),
//!             Some(&GatewayCall::Reserve { account_id: account, seats: 1 })
//!         );
//!     })
//!     .run();
//! ```

pub mod environment;
pub mod gateways;
pub mod properties;
pub mod purchase_test;

use chrono::{DateTime, Utc};
use ticket_purchase_core::Clock;

/// Mock implementations of environment traits.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making receipts reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use ticket_purchase_testing::mocks::FixedClock;
    /// use ticket_purchase_core::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticket_purchase_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use environment::TestEnvironment;
pub use gateways::{
    CallLog, FixedAccountGateway, GatewayCall, RecordingPaymentGateway,
    RecordingSeatReservationGateway,
};
pub use mocks::{FixedClock, test_clock};
pub use purchase_test::{PurchaseTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }
}
