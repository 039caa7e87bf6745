//! Domain types for ticket purchases.
//!
//! This module contains the value objects a purchase is built from: ticket
//! types and their fares, the per-line ticket requests supplied by callers,
//! account identifiers and money amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the account a purchase is made for.
///
/// Any integer is accepted here. Whether an identifier denotes a usable
/// account is decided by the [`AccountGateway`](crate::gateway::AccountGateway).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an `AccountId` from its raw value
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns true for strictly positive identifiers
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object
// ============================================================================

/// An amount of money in whole currency units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero currency units
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from whole currency units
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole currency units
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies money by a quantity with overflow checking
    #[must_use]
    pub fn checked_multiply(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(u64::from(quantity)).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}", self.0)
    }
}

// ============================================================================
// Ticket Types
// ============================================================================

/// Category of ticket a customer can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Adult ticket
    Adult,
    /// Child ticket
    Child,
    /// Infant ticket (sits on an adult's lap)
    Infant,
}

impl TicketType {
    /// All ticket types, in display order
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Fixed fare for one ticket of this type
    #[must_use]
    pub const fn fare(self) -> Money {
        match self {
            Self::Adult => Money::from_units(20),
            Self::Child => Money::from_units(10),
            Self::Infant => Money::ZERO,
        }
    }

    /// Whether a ticket of this type takes up a seat
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }

    /// Upper-case name used in logs and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a ticket type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown ticket type: {0}")]
pub struct UnknownTicketType(pub String);

impl FromStr for TicketType {
    type Err = UnknownTicketType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            _ => Err(UnknownTicketType(s.to_string())),
        }
    }
}

// ============================================================================
// Ticket Requests
// ============================================================================

/// A single line of a purchase: a ticket type and how many of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: u32,
}

impl TicketTypeRequest {
    /// Creates a new request line
    #[must_use]
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// Shorthand for an adult request line
    #[must_use]
    pub const fn adults(quantity: u32) -> Self {
        Self::new(TicketType::Adult, quantity)
    }

    /// Shorthand for a child request line
    #[must_use]
    pub const fn children(quantity: u32) -> Self {
        Self::new(TicketType::Child, quantity)
    }

    /// Shorthand for an infant request line
    #[must_use]
    pub const fn infants(quantity: u32) -> Self {
        Self::new(TicketType::Infant, quantity)
    }

    /// The requested ticket type
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// The requested number of tickets
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.ticket_type, self.quantity)
    }
}

/// Error returned when a `TYPE=QUANTITY` pair cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTicketRequestError {
    /// Input was not of the form `TYPE=QUANTITY`
    #[error("Expected TYPE=QUANTITY, got '{0}'")]
    Malformed(String),

    /// Ticket type was not recognised
    #[error(transparent)]
    UnknownType(#[from] UnknownTicketType),

    /// Quantity was not a non-negative integer
    #[error("Invalid ticket quantity '{0}'")]
    InvalidQuantity(String),
}

impl FromStr for TicketTypeRequest {
    type Err = ParseTicketRequestError;

    /// Parses `ADULT=2` style pairs (`:` is accepted as separator too).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((ticket_type, quantity)) = s.split_once(['=', ':']) else {
            return Err(ParseTicketRequestError::Malformed(s.to_string()));
        };

        let ticket_type = ticket_type.parse::<TicketType>()?;
        let quantity = quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseTicketRequestError::InvalidQuantity(quantity.to_string()))?;

        Ok(Self::new(ticket_type, quantity))
    }
}
