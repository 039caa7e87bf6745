//! Configured service wiring tests.

#![allow(clippy::unwrap_used)]

use ticket_purchase_app::{Config, PurchaseCommand, build_service};
use ticket_purchase_core::{
    AccountId, GatewayError, InvalidPurchase, Money, TicketService, TicketTypeRequest,
};

fn config_with(vars: &'static [(&'static str, &'static str)]) -> Config {
    Config::from_lookup(|key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_string())
    })
}

#[test]
fn test_default_service_completes_family_purchase() {
    let service = build_service(&Config::default());
    let command = PurchaseCommand::parse(["345678", "ADULT=5", "CHILD=5", "INFANT=5"]).unwrap();

    let receipt = service
        .purchase_tickets(command.account_id, &command.requests)
        .unwrap();

    assert_eq!(receipt.amount, Money::from_units(150));
    assert_eq!(receipt.seats, 10);
}

#[test]
fn test_default_service_rejects_non_positive_accounts() {
    let service = build_service(&Config::default());

    let error = service
        .purchase_tickets(AccountId::new(-1), &[TicketTypeRequest::adults(1)])
        .unwrap_err();

    assert_eq!(error.to_string(), "Invalid account");
}

#[test]
fn test_configured_balance_is_enforced() {
    let service = build_service(&config_with(&[("ACCOUNT_STUB_BALANCE", "30")]));

    let error = service
        .purchase_tickets(AccountId::new(1), &[TicketTypeRequest::adults(2)])
        .unwrap_err();

    assert_eq!(
        error,
        InvalidPurchase::InsufficientFunds {
            balance: Money::from_units(30),
            required: Money::from_units(40),
        }
    );
}

#[test]
fn test_simulated_payment_failure() {
    let service = build_service(&config_with(&[("PAYMENT_SIMULATE_FAILURE", "true")]));

    let error = service
        .purchase_tickets(AccountId::new(1), &[TicketTypeRequest::adults(1)])
        .unwrap_err();

    assert!(matches!(
        error,
        InvalidPurchase::Payment {
            source: GatewayError::Rejected { .. }
        }
    ));
}

#[test]
fn test_simulated_seat_failure_reports_charge() {
    let service = build_service(&config_with(&[("SEAT_RESERVATION_SIMULATE_FAILURE", "true")]));

    let error = service
        .purchase_tickets(AccountId::new(1), &[TicketTypeRequest::adults(3)])
        .unwrap_err();

    assert!(matches!(
        error,
        InvalidPurchase::SeatReservation { charged, .. } if charged == Money::from_units(60)
    ));
}
