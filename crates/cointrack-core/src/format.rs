//! Locale-aware formatting of money, percentages, and chart dates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::ValidationError;

/// Marker rendered in place of a value that is missing or not computable.
pub const NOT_AVAILABLE: &str = "N/A";

/// Digit grouping and date ordering conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberLocale {
    /// Lakh/crore grouping (`12,34,567.89`), day-first dates.
    #[default]
    EnIn,
    /// Thousands grouping (`1,234,567.89`), month-first dates.
    EnUs,
}

impl NumberLocale {
    pub const ALL: [Self; 2] = [Self::EnIn, Self::EnUs];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnIn => "en-in",
            Self::EnUs => "en-us",
        }
    }
}

impl Display for NumberLocale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberLocale {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-in" => Ok(Self::EnIn),
            "en-us" => Ok(Self::EnUs),
            other => Err(ValidationError::InvalidLocale {
                value: other.to_owned(),
            }),
        }
    }
}

/// How derived records render monetary values and dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub locale: NumberLocale,
    /// Prefix placed before every formatted amount.
    pub currency_symbol: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            locale: NumberLocale::EnIn,
            currency_symbol: String::from("₹"),
        }
    }
}

/// Render a monetary amount with 2 fraction digits and locale grouping.
///
/// The symbol is a literal prefix, so negatives read `₹-1,234.50`.
/// Missing, zero, and non-finite amounts render as [`NOT_AVAILABLE`].
pub fn format_currency(amount: Option<f64>, options: &DisplayOptions) -> String {
    match amount {
        Some(value) if value.is_finite() && value != 0.0 => {
            format!("{}{}", options.currency_symbol, group_fixed(value, options.locale))
        }
        _ => String::from(NOT_AVAILABLE),
    }
}

/// Render an already-rounded percentage (`8.33%`) or the N/A marker.
pub fn format_percentage(change: Option<f64>) -> String {
    match change {
        Some(value) => format!("{value:.2}%"),
        None => String::from(NOT_AVAILABLE),
    }
}

/// Render an epoch-millisecond timestamp as a UTC calendar date.
pub fn format_date(timestamp_ms: i64, locale: NumberLocale) -> String {
    let nanos = i128::from(timestamp_ms) * 1_000_000;
    let Ok(datetime) = OffsetDateTime::from_unix_timestamp_nanos(nanos) else {
        return String::from(NOT_AVAILABLE);
    };

    let day = datetime.day();
    let month = u8::from(datetime.month());
    let year = datetime.year();

    match locale {
        NumberLocale::EnIn => format!("{day}/{month}/{year}"),
        NumberLocale::EnUs => format!("{month}/{day}/{year}"),
    }
}

/// Fixed 2-digit formatting with grouping separators.
fn group_fixed(value: f64, locale: NumberLocale) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let grouped = match locale {
        NumberLocale::EnUs => group_digits(integer, 3, 3),
        NumberLocale::EnIn => group_digits(integer, 3, 2),
    };

    // -0.001 rounds to 0.00 and must not keep its sign.
    let negative = value < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };

    format!("{sign}{grouped}.{fraction}")
}

/// Group an unsigned digit string: `first` digits on the right, then `rest`.
fn group_digits(digits: &str, first: usize, rest: usize) -> String {
    if digits.len() <= first {
        return digits.to_owned();
    }

    let (head, tail) = digits.split_at(digits.len() - first);
    let mut groups = vec![tail];
    let mut remaining = head;
    while remaining.len() > rest {
        let (left, right) = remaining.split_at(remaining.len() - rest);
        groups.push(right);
        remaining = left;
    }
    groups.push(remaining);
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(locale: NumberLocale) -> DisplayOptions {
        DisplayOptions {
            locale,
            currency_symbol: String::from("₹"),
        }
    }

    #[test]
    fn groups_indian_style() {
        let formatted = format_currency(Some(1_234_567.891), &options(NumberLocale::EnIn));
        assert_eq!(formatted, "₹12,34,567.89");
    }

    #[test]
    fn groups_thousands_style() {
        let formatted = format_currency(Some(1_234_567.891), &options(NumberLocale::EnUs));
        assert_eq!(formatted, "₹1,234,567.89");
    }

    #[test]
    fn small_amounts_keep_two_decimals() {
        assert_eq!(format_currency(Some(0.5), &options(NumberLocale::EnIn)), "₹0.50");
        assert_eq!(format_currency(Some(999.0), &options(NumberLocale::EnIn)), "₹999.00");
        assert_eq!(format_currency(Some(1000.0), &options(NumberLocale::EnIn)), "₹1,000.00");
        assert_eq!(format_currency(Some(100_000.0), &options(NumberLocale::EnIn)), "₹1,00,000.00");
    }

    #[test]
    fn missing_values_render_marker_not_zero() {
        let opts = options(NumberLocale::EnIn);
        assert_eq!(format_currency(None, &opts), NOT_AVAILABLE);
        assert_eq!(format_currency(Some(0.0), &opts), NOT_AVAILABLE);
        assert_eq!(format_currency(Some(f64::NAN), &opts), NOT_AVAILABLE);
    }

    #[test]
    fn negative_amounts_keep_symbol_as_prefix() {
        let formatted = format_currency(Some(-1234.5), &options(NumberLocale::EnUs));
        assert_eq!(formatted, "₹-1,234.50");
        assert_eq!(
            format_currency(Some(-123_456.0), &options(NumberLocale::EnIn)),
            "₹-1,23,456.00"
        );
    }

    #[test]
    fn percentage_uses_two_decimals() {
        assert_eq!(format_percentage(Some(8.33)), "8.33%");
        assert_eq!(format_percentage(Some(-0.5)), "-0.50%");
        assert_eq!(format_percentage(None), NOT_AVAILABLE);
    }

    #[test]
    fn formats_dates_per_locale() {
        // 2024-03-05T12:00:00Z
        let ts = 1_709_640_000_000;
        assert_eq!(format_date(ts, NumberLocale::EnIn), "5/3/2024");
        assert_eq!(format_date(ts, NumberLocale::EnUs), "3/5/2024");
    }

    #[test]
    fn out_of_range_date_is_marker() {
        assert_eq!(format_date(i64::MAX, NumberLocale::EnIn), NOT_AVAILABLE);
    }

    #[test]
    fn parses_locale() {
        assert_eq!("EN_IN".parse::<NumberLocale>(), Ok(NumberLocale::EnIn));
        assert!(matches!(
            "fr-fr".parse::<NumberLocale>(),
            Err(ValidationError::InvalidLocale { .. })
        ));
    }
}
