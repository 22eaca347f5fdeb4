//! ISO 4217 alphabetic currency code validation.
//!
//! A static table instead of a platform currency registry, so validation
//! never depends on host locale data. Lookup is case-sensitive: codes are
//! uppercase on the wire and anything else is rejected.

/// Active ISO 4217 alphabetic codes, plus the historic `RUR` which live
/// Raiffeisen messages still use for balance lines. Sorted for binary
/// search.
const ISO_4217: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN",
    "BAM", "BBD", "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BRL",
    "BSD", "BTN", "BWP", "BYN", "BZD", "CAD", "CDF", "CHF", "CLP", "CNY",
    "COP", "CRC", "CUP", "CVE", "CZK", "DJF", "DKK", "DOP", "DZD", "EGP",
    "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GHS", "GIP", "GMD",
    "GNF", "GTQ", "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS", "INR",
    "IQD", "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF",
    "KPW", "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL",
    "LYD", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR",
    "MVR", "MWK", "MXN", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR",
    "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR",
    "RON", "RSD", "RUB", "RUR", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK",
    "SGD", "SHP", "SLE", "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL",
    "THB", "TJS", "TMT", "TND", "TOP", "TRY", "TTD", "TWD", "TZS", "UAH",
    "UGX", "USD", "UYU", "UZS", "VES", "VND", "VUV", "WST", "XAF", "XCD",
    "XOF", "XPF", "YER", "ZAR", "ZMW", "ZWG",
];

/// Returns true if `code` is a recognized ISO 4217 alphabetic code.
pub fn is_valid_code(code: &str) -> bool {
    ISO_4217.binary_search(&code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(ISO_4217.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_known_codes() {
        assert!(is_valid_code("EUR"));
        assert!(is_valid_code("RUB"));
        assert!(is_valid_code("USD"));
        // Historic code still seen in balance sections.
        assert!(is_valid_code("RUR"));
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert!(!is_valid_code("XYZ"));
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("EURO"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(!is_valid_code("eur"));
        assert!(!is_valid_code("Rub"));
    }
}
