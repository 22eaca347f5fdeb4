//! Raiffeisen notification grammars.
//!
//! CALL (card transaction), split on `;`:
//!   [0] Karta *6787
//!   [1] Provedena tranzakcija:5,00EUR
//!   [2] Data:16/07/2013
//!   [3] Mesto: SKYPE +44 870835190
//!   [4] Dostupny Ostatok: 127991,31RUB. Raiffeisenbank
//!
//! PUT (balance top-up), split on `.`:
//!   [0] Balans vashey karty *6787 popolnilsya 24/01/2014 na:49505,66RUB
//!   [1]  Dostupny Ostatok: 49834,88RUR
//!   [2]  Raiffeisenbank

use std::sync::LazyLock;

use log::{debug, info, warn};
use regex::Regex;
use smsledger_classify::BayesClassifier;
use smsledger_core::Transaction;

use crate::{Field, FieldWarning, ParseError, TransactionReportParser, datefmt, money};

const PUT_PREFIX: &str = "Balans";
const CALL_PREFIX: &str = "Karta";

/// A Call message must at least carry card, money, date and place sections;
/// the trailing balance section is ignored.
const CALL_SECTIONS: usize = 4;
/// A Put message is one operation sentence plus at least the balance
/// sentence.
const PUT_SECTIONS: usize = 2;

static CARD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Karta\s\*(\d{4})$").unwrap());
static PLACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*Mesto\s*:\s*(.*)$").unwrap());
static PUT_OPERATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Balans vashey karty\s+\*(\d{4})\s+popolnilsya\s+(\d{2}[./]\d{2}[./]\d{4})\s+na.*:\s*(\d+[,.]\d{2})\s*(\w{3})$",
    )
    .unwrap()
});

/// A successfully decoded message: the record plus any per-field
/// diagnostics that were absorbed along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMessage {
    pub transaction: Transaction,
    pub warnings: Vec<FieldWarning>,
}

/// Outcome of feeding one raw message to the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Transaction(ParsedMessage),
    /// The text is not a transaction notice at all. A normal skip, not an
    /// error.
    NotRecognized,
}

/// Parser for Raiffeisen card-transaction and top-up notices.
///
/// The classifier is an explicit construction-time dependency; without one
/// the parser still extracts every field except `category`.
pub struct RaiffeisenParser {
    classifier: Option<BayesClassifier>,
}

impl RaiffeisenParser {
    pub fn new(classifier: Option<BayesClassifier>) -> Self {
        Self { classifier }
    }

    fn parse_put(&self, body: &str) -> Result<ParsedMessage, ParseError> {
        let sections: Vec<&str> = body.split('.').collect();
        debug!("put message sections: {sections:?}");
        if sections.len() < PUT_SECTIONS {
            return Err(ParseError::MalformedMessage {
                grammar: "put",
                expected: PUT_SECTIONS,
                found: sections.len(),
            });
        }

        let mut transaction = Transaction::new(true);
        let mut warnings = Vec::new();

        match PUT_OPERATION.captures(sections[0]) {
            Some(caps) => {
                transaction.card_number = Some(caps[1].to_string());
                match datefmt::parse_date(&caps[2]) {
                    Some(date) => transaction.date = Some(date),
                    None => warnings.push(FieldWarning::InvalidDate(caps[2].to_string())),
                }
                match money::parse_amount(&caps[3]) {
                    Ok(amount) => transaction.amount = Some(amount),
                    Err(w) => warnings.push(w),
                }
                match money::validate_currency(&caps[4]) {
                    Ok(code) => transaction.currency = Some(code),
                    Err(w) => warnings.push(w),
                }
            }
            // Partial success: the record stays a bare top-up marker.
            None => warnings.push(FieldWarning::Unmatched(Field::Operation)),
        }

        info!("put - {transaction:?}");
        Ok(ParsedMessage {
            transaction,
            warnings,
        })
    }

    fn parse_call(&self, body: &str) -> Result<ParsedMessage, ParseError> {
        let sections: Vec<&str> = body.split(';').collect();
        debug!("call message sections: {sections:?}");
        if sections.len() < CALL_SECTIONS {
            return Err(ParseError::MalformedMessage {
                grammar: "call",
                expected: CALL_SECTIONS,
                found: sections.len(),
            });
        }

        let mut transaction = Transaction::new(false);
        let mut warnings = Vec::new();

        // Sections are independent: one miss leaves only its field unset.
        match CARD_NUMBER.captures(sections[0]) {
            Some(caps) => transaction.card_number = Some(caps[1].to_string()),
            None => warnings.push(FieldWarning::Unmatched(Field::CardNumber)),
        }

        match money::extract(sections[1]) {
            Ok(money) => {
                transaction.amount = Some(money.amount);
                transaction.currency = Some(money.currency);
            }
            Err(w) => warnings.push(w),
        }

        match sections[2].split(':').nth(1) {
            Some(raw) => match datefmt::parse_date(raw) {
                Some(date) => transaction.date = Some(date),
                None => warnings.push(FieldWarning::InvalidDate(raw.trim().to_string())),
            },
            None => warnings.push(FieldWarning::Unmatched(Field::Date)),
        }

        match PLACE.captures(sections[3]) {
            Some(caps) if !caps[1].trim().is_empty() => {
                let place = caps[1].to_string();
                if let Some(classifier) = &self.classifier {
                    match classifier.classify(&place) {
                        Ok(category) => transaction.category = Some(category),
                        Err(e) => warn!("classifier unavailable for {place:?}: {e}"),
                    }
                }
                transaction.description = Some(place);
            }
            _ => warnings.push(FieldWarning::Unmatched(Field::Description)),
        }

        info!("call - {transaction:?}");
        Ok(ParsedMessage {
            transaction,
            warnings,
        })
    }
}

impl TransactionReportParser for RaiffeisenParser {
    /// Decode one raw message. `message_id` is left for the caller to
    /// stamp.
    fn parse(&self, message: &str) -> Result<ParseOutcome, ParseError> {
        if message.starts_with(PUT_PREFIX) {
            Ok(ParseOutcome::Transaction(self.parse_put(message)?))
        } else if message.starts_with(CALL_PREFIX) {
            Ok(ParseOutcome::Transaction(self.parse_call(message)?))
        } else {
            debug!("undefined message: {message}");
            Ok(ParseOutcome::NotRecognized)
        }
    }
}
