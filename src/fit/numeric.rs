//! Fitting numeric values into a fixed-width cell.
//!
//! Amounts are rendered with progressively less precision until one form
//! fits the width budget:
//!
//! 1. grouped, two fraction digits (`12,34,567.89`)
//! 2. grouped, rounded to an integer (`12,34,568`)
//! 3. thousands with a `K` suffix, for values of at least 1000 (`1234.6K`)
//! 4. scientific notation, for values of at least 10000 (`1.2e+6`)
//! 5. the first form, truncated with an ellipsis

use serde::{Deserialize, Serialize};

use super::decimal::{to_exponential, to_fixed, to_locale_fixed};
use super::truncate::truncate_text;
use crate::metrics::measure_text;

const ABBREVIATE_FROM: f64 = 1_000.0;
const SCIENTIFIC_FROM: f64 = 10_000.0;

/// How integer digits are grouped in locale output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// Last three digits, then pairs: `12,34,567`.
    #[default]
    Indian,
    /// Groups of three: `1,234,567`.
    Western,
}

/// Options for [`format_numeric_value_with`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericFormatOptions {
    #[serde(default)]
    pub grouping: DigitGrouping,
}

/// A value handed to the numeric formatter.
///
/// Mirrors what a form field or a fetched row can hold: a number, a number
/// that was already turned into text, nothing at all, or something else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
    #[default]
    Null,
    Other(serde_json::Value),
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Number(value)
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::Number(value as f64)
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        NumericValue::Text(value.to_string())
    }
}

impl From<String> for NumericValue {
    fn from(value: String) -> Self {
        NumericValue::Text(value)
    }
}

impl<T: Into<NumericValue>> From<Option<T>> for NumericValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(NumericValue::Null)
    }
}

/// Format `value` for a cell of `max_width` using the default options.
pub fn format_numeric_value(
    value: impl Into<NumericValue>,
    max_width: f64,
    font_size: f64,
) -> String {
    format_numeric_value_with(
        &value.into(),
        max_width,
        font_size,
        &NumericFormatOptions::default(),
    )
}

/// Format `value` for a cell of `max_width`, returning the first candidate
/// form that fits.
///
/// Text is measured as-is and truncated if it overflows. `Null`, non-finite
/// numbers and any other kind of value produce an empty string.
pub fn format_numeric_value_with(
    value: &NumericValue,
    max_width: f64,
    font_size: f64,
    options: &NumericFormatOptions,
) -> String {
    let number = match value {
        NumericValue::Number(n) if n.is_finite() => *n,
        NumericValue::Text(text) => return truncate_text(text, max_width, font_size),
        _ => return String::new(),
    };

    let candidates = numeric_candidates(number, options);
    if let Some(fit) = candidates
        .iter()
        .find(|c| measure_text(c, font_size) <= max_width)
    {
        return fit.clone();
    }
    truncate_text(&candidates[0], max_width, font_size)
}

/// The candidate forms for `number`, most precise first.
///
/// Always starts with the two-digit and integer locale forms; the `K` and
/// scientific forms are only present above their thresholds.
pub fn numeric_candidates(number: f64, options: &NumericFormatOptions) -> Vec<String> {
    let mut candidates = vec![
        to_locale_fixed(number, 2, options.grouping),
        to_locale_fixed(number, 0, options.grouping),
    ];
    if number >= ABBREVIATE_FROM {
        candidates.push(format!("{}K", to_fixed(number / 1000.0, 1)));
    }
    if number >= SCIENTIFIC_FROM {
        candidates.push(to_exponential(number, 1));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_order() {
        let candidates = numeric_candidates(1234567.891, &NumericFormatOptions::default());
        assert_eq!(
            candidates,
            vec!["12,34,567.89", "12,34,568", "1234.6K", "1.2e+6"]
        );
    }

    #[test]
    fn test_thresholds() {
        let opts = NumericFormatOptions::default();
        assert_eq!(numeric_candidates(999.99, &opts).len(), 2);
        assert_eq!(numeric_candidates(1000.0, &opts).len(), 3);
        assert_eq!(numeric_candidates(9999.0, &opts).len(), 3);
        assert_eq!(numeric_candidates(10000.0, &opts).len(), 4);
        assert_eq!(numeric_candidates(-50000.0, &opts).len(), 2);
    }

    #[test]
    fn test_fallback_chain() {
        assert_eq!(format_numeric_value(1234567.891, 60.0, 8.0), "12,34,567.89");
        assert_eq!(format_numeric_value(1234567.891, 40.0, 8.0), "12,34,568");
        assert_eq!(format_numeric_value(1234567.891, 30.0, 8.0), "1234.6K");
        assert_eq!(format_numeric_value(1234567.891, 25.0, 8.0), "1.2e+6");
        assert_eq!(format_numeric_value(1234567.891, 20.0, 8.0), "12,...");
    }

    #[test]
    fn test_western_grouping_option() {
        let opts = NumericFormatOptions {
            grouping: DigitGrouping::Western,
        };
        let out = format_numeric_value_with(&1234567.891.into(), 100.0, 8.0, &opts);
        assert_eq!(out, "1,234,567.89");
    }

    #[test]
    fn test_empty_and_invalid_inputs() {
        assert_eq!(format_numeric_value(NumericValue::Null, 100.0, 12.0), "");
        assert_eq!(format_numeric_value(None::<f64>, 100.0, 12.0), "");
        assert_eq!(format_numeric_value(f64::NAN, 100.0, 12.0), "");
        assert_eq!(format_numeric_value(f64::INFINITY, 100.0, 12.0), "");
        let other = NumericValue::Other(serde_json::json!(true));
        assert_eq!(format_numeric_value(other, 100.0, 12.0), "");
    }

    #[test]
    fn test_text_measured_as_is() {
        assert_eq!(format_numeric_value("N/A", 100.0, 10.0), "N/A");
        assert_eq!(format_numeric_value("Not applicable", 30.0, 10.0), "Not ...");
    }

    #[test]
    fn test_untagged_deserialize() {
        let v: NumericValue = serde_json::from_str("12.5").unwrap();
        assert_eq!(v, NumericValue::Number(12.5));
        let v: NumericValue = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(v, NumericValue::Text("12.5".into()));
        let v: NumericValue = serde_json::from_str("null").unwrap();
        assert_eq!(v, NumericValue::Null);
        let v: NumericValue = serde_json::from_str("[1]").unwrap();
        assert!(matches!(v, NumericValue::Other(_)));
    }
}
