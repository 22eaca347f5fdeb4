//! CSV-backed transaction store.
//!
//! `analyze` loads previously stored records instead of re-parsing the
//! inbox when the store is non-empty. Unset fields are written as empty
//! columns. Dates use the `dd.mm.yyyy` output layout.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use smsledger_core::Transaction;

const HEADERS: [&str; 8] = [
    "message_id",
    "card_number",
    "amount",
    "currency",
    "date",
    "is_put",
    "description",
    "category",
];

const DATE_OUTPUT_FORMAT: &str = "%d.%m.%Y";

pub fn store_transactions(path: &Path, transactions: &[Transaction]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("opening store {}", path.display()))?;
    writer.write_record(HEADERS)?;
    for t in transactions {
        writer.write_record([
            t.message_id.map(|id| id.to_string()).unwrap_or_default(),
            t.card_number.clone().unwrap_or_default(),
            t.amount.map(|a| a.to_string()).unwrap_or_default(),
            t.currency.clone().unwrap_or_default(),
            t.date
                .map(|d| d.format(DATE_OUTPUT_FORMAT).to_string())
                .unwrap_or_default(),
            t.is_put.to_string(),
            t.description.clone().unwrap_or_default(),
            t.category.clone().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Load previously stored transactions. A missing store file is an empty
/// store, not an error.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening store {}", path.display()))?;
    let mut transactions = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() != HEADERS.len() {
            bail!(
                "store {}: row {} has {} columns, expected {}",
                path.display(),
                row + 1,
                record.len(),
                HEADERS.len()
            );
        }

        let field = |i: usize| record.get(i).unwrap_or("").trim();
        let optional = |i: usize| {
            let value = field(i);
            (!value.is_empty()).then(|| value.to_string())
        };

        let mut t = Transaction::new(
            field(5)
                .parse::<bool>()
                .with_context(|| format!("store row {}: bad is_put flag", row + 1))?,
        );
        t.message_id = match field(0) {
            "" => None,
            raw => Some(
                raw.parse()
                    .with_context(|| format!("store row {}: bad message id", row + 1))?,
            ),
        };
        t.card_number = optional(1);
        t.amount = match field(2) {
            "" => None,
            raw => Some(
                Decimal::from_str(raw)
                    .with_context(|| format!("store row {}: bad amount", row + 1))?,
            ),
        };
        t.currency = optional(3);
        t.date = match field(4) {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, DATE_OUTPUT_FORMAT)
                    .with_context(|| format!("store row {}: bad date", row + 1))?,
            ),
        };
        t.description = optional(6);
        t.category = optional(7);
        transactions.push(t);
    }

    Ok(transactions)
}
