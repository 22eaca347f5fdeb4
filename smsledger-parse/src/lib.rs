//! smsledger-parse: bank notification message parsing.
//!
//! Turns raw Raiffeisen SMS text into [`smsledger_core::Transaction`]
//! records. Two message grammars are supported: card-transaction notices
//! ("Karta ...", split on `;`) and balance top-up notices ("Balans ...",
//! split on `.`).

pub mod datefmt;
pub mod money;
pub mod raiffeisen;

use std::fmt;

use thiserror::Error;

pub use raiffeisen::{ParseOutcome, ParsedMessage, RaiffeisenParser};

/// A message matched a known prefix but did not have the structure its
/// grammar requires. One malformed message never aborts a batch; callers
/// log it and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed {grammar} message: expected at least {expected} sections, found {found}")]
    MalformedMessage {
        grammar: &'static str,
        expected: usize,
        found: usize,
    },
}

/// A field whose extraction can fail independently of the rest of the
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CardNumber,
    Money,
    Date,
    Description,
    /// The composite card/date/amount pattern of a top-up notice.
    Operation,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::CardNumber => "card number",
            Field::Money => "amount/currency",
            Field::Date => "date",
            Field::Description => "description",
            Field::Operation => "top-up operation",
        };
        f.write_str(name)
    }
}

/// A recoverable per-field diagnostic. The affected field stays unset on
/// the transaction; the rest of the message still parses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldWarning {
    #[error("{0} pattern did not match")]
    Unmatched(Field),
    #[error("unknown currency code: {0}")]
    InvalidCurrency(String),
    #[error("unsupported date layout: {0}")]
    InvalidDate(String),
}

/// A message parser for one bank's notification format.
pub trait TransactionReportParser {
    fn parse(&self, message: &str) -> Result<ParseOutcome, ParseError>;
}
