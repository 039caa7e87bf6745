//! Command-line parsing for the `purchase` binary.
//!
//! ```text
//! purchase <ACCOUNT_ID> [TYPE=QUANTITY]...
//! ```
//!
//! Without ticket pairs a family purchase (2 adults, 1 child, 1 infant) is made.

use thiserror::Error;
use ticket_purchase_core::{AccountId, ParseTicketRequestError, TicketTypeRequest};

/// Usage line printed on argument errors
pub const USAGE: &str = "usage: purchase <ACCOUNT_ID> [ADULT=n] [CHILD=n] [INFANT=n]";

/// Account used when none is given
pub const DEFAULT_ACCOUNT_ID: i64 = 345_678;

/// Argument errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    /// The account id was not an integer
    #[error("Invalid account id '{0}'")]
    InvalidAccountId(String),

    /// A ticket pair could not be parsed
    #[error(transparent)]
    InvalidTicket(#[from] ParseTicketRequestError),
}

/// A purchase requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseCommand {
    /// Account to purchase for
    pub account_id: AccountId,
    /// Ticket lines, in the order given
    pub requests: Vec<TicketTypeRequest>,
}

impl PurchaseCommand {
    /// Parse the arguments following the program name.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] if the account id or a ticket pair is malformed.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();

        let account_id = match args.next() {
            Some(raw) => {
                let raw = raw.as_ref();
                raw.trim()
                    .parse::<i64>()
                    .map(AccountId::new)
                    .map_err(|_| CliError::InvalidAccountId(raw.to_string()))?
            }
            None => AccountId::new(DEFAULT_ACCOUNT_ID),
        };

        let requests = args
            .map(|arg| arg.as_ref().parse::<TicketTypeRequest>())
            .collect::<Result<Vec<_>, _>>()?;

        let requests = if requests.is_empty() {
            vec![
                TicketTypeRequest::adults(2),
                TicketTypeRequest::children(1),
                TicketTypeRequest::infants(1),
            ]
        } else {
            requests
        };

        Ok(Self {
            account_id,
            requests,
        })
    }
}
