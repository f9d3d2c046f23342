//! Built-in currency seed data.
//!
//! One entry per supported code. Divisors are minor units per major unit;
//! smallest denominations are in minor units (HKD has no coin below 10 cents,
//! CHF none below 5 rappen, THB none below 25 satang).

use crate::currency::Currency;

/// The built-in currency table.
pub(crate) fn currencies() -> Vec<Currency> {
    vec![
        Currency {
            code: "USD".to_string(),
            name: "United States Dollar".to_string(),
            symbol: "$".to_string(),
            subunit: "Cent".to_string(),
            minor_unit_divisor: 100,
            smallest_denomination: 1,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "840".to_string(),
        },
        Currency {
            code: "EUR".to_string(),
            name: "Euro".to_string(),
            symbol: "€".to_string(),
            subunit: "Cent".to_string(),
            minor_unit_divisor: 100,
            smallest_denomination: 1,
            symbol_first: false,
            decimal_separator: ",".to_string(),
            thousands_separator: ".".to_string(),
            iso_numeric: "978".to_string(),
        },
        Currency {
            code: "GBP".to_string(),
            name: "British Pound".to_string(),
            symbol: "£".to_string(),
            subunit: "Penny".to_string(),
            minor_unit_divisor: 100,
            smallest_denomination: 1,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "826".to_string(),
        },
        Currency {
            code: "JPY".to_string(),
            name: "Japanese Yen".to_string(),
            symbol: "¥".to_string(),
            subunit: String::new(),
            minor_unit_divisor: 1,
            smallest_denomination: 1,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "392".to_string(),
        },
        Currency {
            code: "TWD".to_string(),
            name: "New Taiwan Dollar".to_string(),
            symbol: "NT$".to_string(),
            subunit: String::new(),
            minor_unit_divisor: 1,
            smallest_denomination: 1,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "901".to_string(),
        },
        Currency {
            code: "HKD".to_string(),
            name: "Hong Kong Dollar".to_string(),
            symbol: "HK$".to_string(),
            subunit: "Cent".to_string(),
            minor_unit_divisor: 100,
            smallest_denomination: 10,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "344".to_string(),
        },
        Currency {
            code: "CHF".to_string(),
            name: "Swiss Franc".to_string(),
            symbol: "CHF".to_string(),
            subunit: "Rappen".to_string(),
            minor_unit_divisor: 100,
            smallest_denomination: 5,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "756".to_string(),
        },
        Currency {
            code: "IDR".to_string(),
            name: "Indonesian Rupiah".to_string(),
            symbol: "Rp".to_string(),
            subunit: "Sen".to_string(),
            minor_unit_divisor: 100,
            smallest_denomination: 100,
            symbol_first: true,
            decimal_separator: ",".to_string(),
            thousands_separator: ".".to_string(),
            iso_numeric: "360".to_string(),
        },
        Currency {
            code: "SGD".to_string(),
            name: "Singapore Dollar".to_string(),
            symbol: "$".to_string(),
            subunit: "Cent".to_string(),
            minor_unit_divisor: 100,
            smallest_denomination: 1,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "702".to_string(),
        },
        Currency {
            code: "VND".to_string(),
            name: "Vietnamese Dong".to_string(),
            symbol: "₫".to_string(),
            subunit: "Hào".to_string(),
            minor_unit_divisor: 10,
            smallest_denomination: 100,
            symbol_first: false,
            decimal_separator: ",".to_string(),
            thousands_separator: ".".to_string(),
            iso_numeric: "704".to_string(),
        },
        Currency {
            code: "KRW".to_string(),
            name: "South Korean Won".to_string(),
            symbol: "₩".to_string(),
            subunit: String::new(),
            minor_unit_divisor: 1,
            smallest_denomination: 1,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "410".to_string(),
        },
        Currency {
            code: "AUD".to_string(),
            name: "Australian Dollar".to_string(),
            symbol: "$".to_string(),
            subunit: "Cent".to_string(),
            minor_unit_divisor: 100,
            smallest_denomination: 5,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "036".to_string(),
        },
        Currency {
            code: "CAD".to_string(),
            name: "Canadian Dollar".to_string(),
            symbol: "$".to_string(),
            subunit: "Cent".to_string(),
            minor_unit_divisor: 100,
            smallest_denomination: 5,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "124".to_string(),
        },
        Currency {
            code: "CNY".to_string(),
            name: "Chinese Renminbi Yuan".to_string(),
            symbol: "¥".to_string(),
            subunit: "Fen".to_string(),
            minor_unit_divisor: 100,
            smallest_denomination: 1,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "156".to_string(),
        },
        Currency {
            code: "THB".to_string(),
            name: "Thai Baht".to_string(),
            symbol: "฿".to_string(),
            subunit: "Satang".to_string(),
            minor_unit_divisor: 100,
            smallest_denomination: 25,
            symbol_first: true,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            iso_numeric: "764".to_string(),
        },
    ]
}
