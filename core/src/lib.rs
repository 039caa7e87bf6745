//! # Ticket Purchase Core
//!
//! Validation, pricing and orchestration of ticket purchases.
//!
//! A purchase names an account and a list of ticket lines (adult, child,
//! infant and a quantity each). The [`TicketServiceImpl`] checks the lines
//! against the booking rules, prices them at the fixed fares, confirms the
//! account can pay, takes the payment and reserves the seats:
//!
//! ```text
//! ┌──────────────┐   ┌──────────┐   ┌──────────────┐   ┌──────────┐   ┌──────────────┐
//! │ Booking rules│──▶│ Pricing  │──▶│   Account    │──▶│ Payment  │──▶│    Seat      │
//! │  (booking)   │   │          │   │   Gateway    │   │ Gateway  │   │ Reservation  │
//! └──────────────┘   └──────────┘   └──────────────┘   └──────────┘   └──────────────┘
//! ```
//!
//! The gateways are traits injected through a [`PurchaseEnvironment`].
//!
//! ## Example
//!
//! ```
//! use ticket_purchase_core::{
//!     AccountId, Money, PurchaseEnvironment, TicketService, TicketServiceImpl, TicketTypeRequest,
//! };
//!
//! let service = TicketServiceImpl::new(PurchaseEnvironment::stubbed());
//!
//! let receipt = service
//!     .purchase_tickets(
//!         AccountId::new(345_678),
//!         &[
//!             TicketTypeRequest::adults(2),
//!             TicketTypeRequest::children(1),
//!             TicketTypeRequest::infants(1),
//!         ],
//!     )
//!     .map_err(|e| e.to_string())?;
//!
//! assert_eq!(receipt.amount, Money::from_units(50));
//! assert_eq!(receipt.seats, 3);
//! # Ok::<(), String>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod booking;
pub mod environment;
pub mod error;
pub mod gateway;
pub mod metrics;
pub mod service;
pub mod stubs;
pub mod types;

pub use booking::{MAX_TICKETS_PER_PURCHASE, TicketBooking};
pub use environment::{Clock, PurchaseEnvironment, SystemClock};
pub use error::{InvalidPurchase, PurchaseResult};
pub use gateway::{
    AccountGateway, GatewayError, GatewayResult, PaymentGateway, SeatReservationGateway,
};
pub use service::{PurchaseReceipt, TicketService, TicketServiceImpl};
pub use types::*;
