//! Fitting text and numbers into a width budget.
//!
//! - Truncation with an ellipsis (truncate_text)
//! - Numeric fallback formatting (format_numeric_value)
//! - Greedy word wrapping (wrap_text)

mod decimal;
mod numeric;
mod truncate;
mod wrap;

pub use numeric::{
    format_numeric_value, format_numeric_value_with, numeric_candidates, DigitGrouping,
    NumericFormatOptions, NumericValue,
};
pub use truncate::{truncate_text, ELLIPSIS};
pub use wrap::wrap_text;
