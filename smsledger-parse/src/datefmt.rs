//! Date parsing for the two layouts the notifications use.
//!
//! Explicit format strings, no locale-sensitive platform formatter: the
//! same input must parse the same way on every host.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static SLASH_LAYOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d{2}/\d{2}/\d{4}\s*$").unwrap());
static DOT_LAYOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d{2}\.\d{2}\.\d{4}\s*$").unwrap());

/// Parse a date written as `dd/mm/yyyy` or `dd.mm.yyyy`, tolerating
/// surrounding whitespace. Any other layout, and any calendar-invalid
/// date, yields `None` — the caller leaves the date field unset rather
/// than failing the message.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let format = if SLASH_LAYOUT.is_match(text) {
        "%d/%m/%Y"
    } else if DOT_LAYOUT.is_match(text) {
        "%d.%m.%Y"
    } else {
        return None;
    };
    NaiveDate::parse_from_str(text.trim(), format).ok()
}
