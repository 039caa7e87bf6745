//! Injected dependencies for the purchase orchestrator.
//!
//! The orchestrator owns no collaborators of its own. Everything it calls is
//! handed in through a [`PurchaseEnvironment`], so production wiring and tests
//! differ only in which implementations they put in it.

use crate::gateway::{AccountGateway, PaymentGateway, SeatReservationGateway};
use crate::stubs::{StubAccountGateway, StubPaymentGateway, StubSeatReservationGateway};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Clock trait - abstracts time operations for testability
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Environment dependencies for the purchase orchestrator
#[derive(Clone)]
pub struct PurchaseEnvironment {
    /// Account validity and balance lookups
    pub accounts: Arc<dyn AccountGateway>,
    /// Payment processor
    pub payments: Arc<dyn PaymentGateway>,
    /// Seat reservation service
    pub seats: Arc<dyn SeatReservationGateway>,
    /// Clock for receipt timestamps
    pub clock: Arc<dyn Clock>,
}

impl PurchaseEnvironment {
    /// Creates a new `PurchaseEnvironment` using the system clock
    #[must_use]
    pub fn new(
        accounts: Arc<dyn AccountGateway>,
        payments: Arc<dyn PaymentGateway>,
        seats: Arc<dyn SeatReservationGateway>,
    ) -> Self {
        Self {
            accounts,
            payments,
            seats,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Environment wired entirely to the stub gateways
    #[must_use]
    pub fn stubbed() -> Self {
        Self::new(
            Arc::new(StubAccountGateway::new()),
            Arc::new(StubPaymentGateway::new()),
            Arc::new(StubSeatReservationGateway::new()),
        )
    }
}

impl std::fmt::Debug for PurchaseEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurchaseEnvironment").finish_non_exhaustive()
    }
}
