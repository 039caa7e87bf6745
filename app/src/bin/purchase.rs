//! Ticket Purchase Demo
//!
//! Purchases tickets against the stub gateways and prints the receipt.
//!
//! # Usage
//!
//! ```bash
//! # Family purchase for the default account
//! cargo run --bin purchase
//!
//! # Explicit purchase
//! cargo run --bin purchase -- 345678 ADULT=5 CHILD=5 INFANT=5
//!
//! # Exercise failure handling
//! PAYMENT_SIMULATE_FAILURE=true cargo run --bin purchase
//! ```

use std::process::ExitCode;
use ticket_purchase_app::{Config, PurchaseCommand, build_service, cli::USAGE, init_tracing};
use ticket_purchase_core::TicketService;
use ticket_purchase_core::metrics::register_purchase_metrics;

fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    init_tracing(&config);
    register_purchase_metrics();

    tracing::debug!(?config, "Configuration loaded");

    let command = match PurchaseCommand::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(error) => {
            eprintln!("{error}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let service = build_service(&config);

    match service.purchase_tickets(command.account_id, &command.requests) {
        Ok(receipt) => {
            match serde_json::to_string_pretty(&receipt) {
                Ok(json) => println!("{json}"),
                Err(error) => tracing::error!(%error, "Failed to render receipt"),
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Purchase failed: {error}");
            ExitCode::FAILURE
        }
    }
}
