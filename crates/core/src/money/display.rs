//! Symbol and separator aware formatting.
//!
//! Rendering consumes the currency's registered display conventions: symbol
//! placement, decimal separator, and thousands separator. Separator and
//! placement rules are registry data, not engine logic.

use super::value::Money;

/// Options controlling [`Money::format_with`].
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Render zero amounts normally (`true`, the default) or suppress them
    /// to an empty string (`false`).
    pub show_zero: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { show_zero: true }
    }
}

impl Money {
    /// Formats this value with default options.
    #[must_use]
    pub fn format(&self) -> String {
        self.format_with(&FormatOptions::default())
    }

    /// Formats this value per the currency's display conventions.
    #[must_use]
    pub fn format_with(&self, options: &FormatOptions) -> String {
        if self.is_zero() && !options.show_zero {
            return String::new();
        }

        let currency = self.currency();
        let magnitude = self.minor_units().unsigned_abs();
        let divisor = currency.minor_unit_divisor.unsigned_abs();
        let major = group_thousands(magnitude / divisor, &currency.thousands_separator);

        let mut number = major;
        if divisor > 1 {
            let minor = magnitude % divisor;
            let width = usize::try_from(currency.exponent()).unwrap_or(0);
            number.push_str(&currency.decimal_separator);
            number.push_str(&format!("{minor:0width$}"));
        }

        let sign = if self.is_negative() { "-" } else { "" };
        if currency.symbol_first {
            format!("{sign}{}{number}", currency.symbol)
        } else {
            format!("{sign}{number} {}", currency.symbol)
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Groups the digits of a non-negative integer with the given separator.
fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}
