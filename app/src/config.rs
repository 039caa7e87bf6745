//! Configuration management for the purchase service.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use ticket_purchase_core::Money;
use ticket_purchase_core::stubs::DEFAULT_STUB_BALANCE;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    pub log: LogConfig,
    /// Account gateway configuration
    pub account: AccountConfig,
    /// Payment gateway configuration
    pub payment: PaymentConfig,
    /// Seat reservation gateway configuration
    pub seats: SeatReservationConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive (trace, debug, info, warn, error, per-target)
    pub filter: String,
}

/// Account gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Balance reported by the stub account gateway
    pub stub_balance: Money,
}

/// Payment gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Reject every charge (for exercising failure handling)
    pub simulate_failure: bool,
}

/// Seat reservation gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatReservationConfig {
    /// Reject every reservation (for exercising failure handling)
    pub simulate_failure: bool,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log: LogConfig {
                filter: lookup("RUST_LOG")
                    .unwrap_or_else(|| "info,ticket_purchase_core=debug".to_string()),
            },
            account: AccountConfig {
                stub_balance: lookup("ACCOUNT_STUB_BALANCE")
                    .and_then(|s| s.parse().ok())
                    .map_or(DEFAULT_STUB_BALANCE, Money::from_units),
            },
            payment: PaymentConfig {
                simulate_failure: lookup("PAYMENT_SIMULATE_FAILURE")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(false),
            },
            seats: SeatReservationConfig {
                simulate_failure: lookup("SEAT_RESERVATION_SIMULATE_FAILURE")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(false),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.log.filter, "info,ticket_purchase_core=debug");
        assert_eq!(config.account.stub_balance, Money::from_units(400));
        assert!(!config.payment.simulate_failure);
        assert!(!config.seats.simulate_failure);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("RUST_LOG", "warn"),
            ("ACCOUNT_STUB_BALANCE", "35"),
            ("PAYMENT_SIMULATE_FAILURE", "true"),
            ("SEAT_RESERVATION_SIMULATE_FAILURE", "true"),
        ]));

        assert_eq!(config.log.filter, "warn");
        assert_eq!(config.account.stub_balance, Money::from_units(35));
        assert!(config.payment.simulate_failure);
        assert!(config.seats.simulate_failure);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("ACCOUNT_STUB_BALANCE", "-5"),
            ("PAYMENT_SIMULATE_FAILURE", "yes"),
        ]));

        assert_eq!(config.account.stub_balance, Money::from_units(400));
        assert!(!config.payment.simulate_failure);
    }
}
