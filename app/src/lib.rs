//! Ticket purchase application shell.
//!
//! Configuration, tracing setup and gateway wiring for running the purchase
//! orchestrator outside of tests. The `purchase` binary is a thin wrapper
//! around these pieces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bootstrap;
pub mod cli;
pub mod config;

pub use bootstrap::{build_environment, build_service};
pub use cli::{CliError, PurchaseCommand};
pub use config::Config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &Config) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
