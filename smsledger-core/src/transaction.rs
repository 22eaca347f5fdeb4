use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A transaction extracted from one bank notification message.
///
/// Every field except `is_put` is optional: the grammars absorb per-field
/// pattern misses instead of failing the whole message, so a record may be
/// only partially populated. Records are plain owned data and are not
/// mutated after the parser returns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Last four digits of the card, as printed in the message.
    pub card_number: Option<String>,
    /// Exact amount; always non-negative (the grammars only match unsigned
    /// decimals).
    pub amount: Option<Decimal>,
    /// ISO 4217 alphabetic code, validated before it is stored.
    pub currency: Option<String>,
    pub date: Option<NaiveDate>,
    /// True for a balance top-up notice, false for a card transaction.
    pub is_put: bool,
    /// Merchant/place text; card-transaction messages only.
    pub description: Option<String>,
    /// Spending category assigned by the classifier.
    pub category: Option<String>,
    /// Identifier of the source message, stamped by the caller after
    /// parsing. The parser itself never sets this.
    pub message_id: Option<i64>,
}

impl Transaction {
    pub fn new(is_put: bool) -> Self {
        Self {
            card_number: None,
            amount: None,
            currency: None,
            date: None,
            is_put,
            description: None,
            category: None,
            message_id: None,
        }
    }

    /// True when every parser-owned field is populated for this record's
    /// grammar (`message_id` is excluded; the category is caller-optional).
    pub fn is_complete(&self) -> bool {
        let common = self.card_number.is_some()
            && self.amount.is_some()
            && self.currency.is_some()
            && self.date.is_some();
        if self.is_put {
            common
        } else {
            common && self.description.is_some()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_is_empty() {
        let t = Transaction::new(true);
        assert!(t.is_put);
        assert_eq!(t.card_number, None);
        assert_eq!(t.amount, None);
        assert!(!t.is_complete());
    }

    #[test]
    fn test_completeness_per_grammar() {
        let mut t = Transaction::new(true);
        t.card_number = Some("6787".to_string());
        t.amount = Some(dec!(49505.66));
        t.currency = Some("RUB".to_string());
        t.date = NaiveDate::from_ymd_opt(2014, 1, 24);
        assert!(t.is_complete());

        // The same fields on a card transaction still need a description.
        t.is_put = false;
        assert!(!t.is_complete());
        t.description = Some("SKYPE +44 870835190".to_string());
        assert!(t.is_complete());
    }

    #[test]
    fn test_json_round_trip() {
        let mut t = Transaction::new(false);
        t.card_number = Some("6787".to_string());
        t.amount = Some(dec!(5.00));
        t.currency = Some("EUR".to_string());
        t.date = NaiveDate::from_ymd_opt(2013, 7, 16);
        t.description = Some("SKYPE +44 870835190".to_string());
        t.message_id = Some(42);

        let json = serde_json::to_string(&t).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
