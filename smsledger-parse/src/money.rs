//! Amount + currency extraction shared by both message grammars.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use smsledger_core::currency;

use crate::{Field, FieldWarning};

/// Label prefix up to the last `:`, then an unsigned decimal with exactly
/// two fractional digits (`,` or `.` separator), then a 3-letter code.
/// Matches the whole section, e.g. `Provedena tranzakcija:5,00EUR`.
static MONEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*:\s*(\d+[,.]\d{2})\s*(\w{3})$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

/// Parse a matched amount group. The `,` separator is normalized to `.`
/// before the numeric conversion, so `5,00` and `5.00` are the same value.
pub fn parse_amount(raw: &str) -> Result<Decimal, FieldWarning> {
    Decimal::from_str(&raw.replace(',', "."))
        .map_err(|_| FieldWarning::Unmatched(Field::Money))
}

/// Validate a matched currency group against the ISO 4217 table.
pub fn validate_currency(code: &str) -> Result<String, FieldWarning> {
    if currency::is_valid_code(code) {
        Ok(code.to_string())
    } else {
        Err(FieldWarning::InvalidCurrency(code.to_string()))
    }
}

/// Extract amount and currency from a labeled money section.
pub fn extract(section: &str) -> Result<Money, FieldWarning> {
    let caps = MONEY
        .captures(section)
        .ok_or(FieldWarning::Unmatched(Field::Money))?;
    Ok(Money {
        amount: parse_amount(&caps[1])?,
        currency: validate_currency(&caps[2])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_extract_call_section() {
        let money = extract("Provedena tranzakcija:5,00EUR").unwrap();
        assert_eq!(money.amount, dec!(5.00));
        assert_eq!(money.currency, "EUR");
    }

    #[test]
    fn test_separator_insensitive() {
        let comma = extract("na:5,00EUR").unwrap();
        let dot = extract("na:5.00EUR").unwrap();
        assert_eq!(comma, dot);
    }

    #[test]
    fn test_whitespace_between_label_and_amount() {
        let money = extract("Dostupny Ostatok: 127991,31RUB").unwrap();
        assert_eq!(money.amount, dec!(127991.31));
        assert_eq!(money.currency, "RUB");
    }

    #[test]
    fn test_invalid_currency_is_a_field_error() {
        assert_eq!(
            extract("na:5,00XYZ"),
            Err(FieldWarning::InvalidCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_unmatched_section() {
        assert_eq!(
            extract("Provedena tranzakcija"),
            Err(FieldWarning::Unmatched(Field::Money))
        );
        // One fractional digit is not a money amount.
        assert_eq!(
            extract("na:5,0EUR"),
            Err(FieldWarning::Unmatched(Field::Money))
        );
    }

    #[test]
    fn test_amount_is_never_negative() {
        // The pattern only admits unsigned decimals.
        assert_eq!(
            extract("na:-5,00EUR"),
            Err(FieldWarning::Unmatched(Field::Money))
        );
    }
}
