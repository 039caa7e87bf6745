//! Given-When-Then harness for purchase scenarios.

#![allow(clippy::module_name_repetitions)] // PurchaseTest is the natural name

use crate::environment::TestEnvironment;
use crate::gateways::GatewayCall;
use ticket_purchase_core::{
    AccountId, InvalidPurchase, PurchaseReceipt, TicketService, TicketTypeRequest,
};

/// Type alias for receipt assertion functions
type ReceiptAssertion = Box<dyn FnOnce(&PurchaseReceipt)>;

/// Type alias for error assertion functions
type ErrorAssertion = Box<dyn FnOnce(&InvalidPurchase)>;

/// Type alias for call log assertion functions
type CallAssertion = Box<dyn FnOnce(&[GatewayCall])>;

/// Fluent API for testing purchases with Given-When-Then syntax
///
/// # Example
///
/// ```
/// use ticket_purchase_core::{AccountId, Money, TicketTypeRequest};
/// use ticket_purchase_testing::{PurchaseTest, TestEnvironment};
///
/// PurchaseTest::new()
///     .given(TestEnvironment::new().with_balance(Money::from_units(30)))
///     .when_purchasing(AccountId::new(1), vec![TicketTypeRequest::adults(2)])
///     .then_error(|error| {
///         assert_eq!(error.to_string(), "Insufficient funds from the account");
///     })
///     .then_calls(|calls| assert_eq!(calls.len(), 2))
///     .run();
/// ```
pub struct PurchaseTest {
    environment: TestEnvironment,
    purchase: Option<(AccountId, Vec<TicketTypeRequest>)>,
    receipt_assertions: Vec<ReceiptAssertion>,
    error_assertions: Vec<ErrorAssertion>,
    call_assertions: Vec<CallAssertion>,
}

impl PurchaseTest {
    /// Create a new purchase test over a default [`TestEnvironment`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            environment: TestEnvironment::new(),
            purchase: None,
            receipt_assertions: Vec::new(),
            error_assertions: Vec::new(),
            call_assertions: Vec::new(),
        }
    }

    /// Set the environment the purchase runs in (Given)
    #[must_use]
    pub fn given(mut self, environment: TestEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the purchase to make (When)
    #[must_use]
    pub fn when_purchasing(mut self, account_id: AccountId, requests: Vec<TicketTypeRequest>) -> Self {
        self.purchase = Some((account_id, requests));
        self
    }

    /// Expect success and add an assertion about the receipt (Then)
    #[must_use]
    pub fn then_receipt<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&PurchaseReceipt) + 'static,
    {
        self.receipt_assertions.push(Box::new(assertion));
        self
    }

    /// Expect failure and add an assertion about the error (Then)
    #[must_use]
    pub fn then_error<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&InvalidPurchase) + 'static,
    {
        self.error_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the gateway calls made (Then)
    #[must_use]
    pub fn then_calls<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[GatewayCall]) + 'static,
    {
        self.call_assertions.push(Box::new(assertion));
        self
    }

    /// Run the purchase and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if no purchase was set, if the outcome contradicts the kind of
    /// assertions registered, or if any assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let (account_id, requests) = self
            .purchase
            .expect("Purchase must be set with when_purchasing()");

        let service = self.environment.service();
        let result = service.purchase_tickets(account_id, &requests);

        match result {
            Ok(receipt) => {
                assert!(
                    self.error_assertions.is_empty(),
                    "Expected purchase to fail, but it succeeded: {receipt:?}"
                );
                for assertion in self.receipt_assertions {
                    assertion(&receipt);
                }
            }
            Err(error) => {
                assert!(
                    self.receipt_assertions.is_empty(),
                    "Expected purchase to succeed, but it failed: {error}"
                );
                for assertion in self.error_assertions {
                    assertion(&error);
                }
            }
        }

        let calls = self.environment.log.calls();
        for assertion in self.call_assertions {
            assertion(&calls);
        }
    }
}

impl Default for PurchaseTest {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper assertions for gateway calls
pub mod assertions {
    use crate::gateways::GatewayCall;

    /// Assert that no money was taken and no seats were reserved
    ///
    /// # Panics
    ///
    /// Panics if a charge or reservation call is present.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_side_effects(calls: &[GatewayCall]) {
        assert!(
            !calls
                .iter()
                .any(|c| matches!(c, GatewayCall::Charge { .. } | GatewayCall::Reserve { .. })),
            "Expected no charge or reservation, but found: {calls:?}"
        );
    }

    /// Assert that no gateway was called at all
    ///
    /// # Panics
    ///
    /// Panics if any call is present.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_calls(calls: &[GatewayCall]) {
        assert!(calls.is_empty(), "Expected no gateway calls, but found: {calls:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticket_purchase_core::{Money, TicketType};

    #[test]
    fn test_purchase_test_success() {
        PurchaseTest::new()
            .when_purchasing(
                AccountId::new(42),
                vec![TicketTypeRequest::adults(1), TicketTypeRequest::children(2)],
            )
            .then_receipt(|receipt| {
                assert_eq!(receipt.amount, Money::from_units(40));
                assert_eq!(receipt.booking.quantity(TicketType::Child), 2);
            })
            .then_calls(|calls| assert_eq!(calls.len(), 4))
            .run();
    }

    #[test]
    fn test_purchase_test_rule_violation() {
        PurchaseTest::new()
            .when_purchasing(AccountId::new(42), vec![TicketTypeRequest::children(2)])
            .then_error(|error| assert_eq!(*error, InvalidPurchase::AdultTicketRequired))
            .then_calls(assertions::assert_no_calls)
            .run();
    }

    #[test]
    #[should_panic(expected = "Expected purchase to fail")]
    fn test_purchase_test_reports_unexpected_success() {
        PurchaseTest::new()
            .when_purchasing(AccountId::new(42), vec![TicketTypeRequest::adults(1)])
            .then_error(|_| {})
            .run();
    }
}
