//! textfit - glyph-width text measurement and fitting for document layout
//!
//! Measures text against a fixed advance-width table and fits strings and
//! amounts into width-limited cells. A live preview and a separately rendered
//! PDF that both use this table make identical truncation and formatting
//! decisions.
//!
//! # Example
//!
//! ```rust
//! use textfit::{format_numeric_value, measure_text, truncate_text};
//!
//! assert!((measure_text("Hello", 10.0) - 22.78).abs() < 1e-9);
//! assert_eq!(truncate_text("Supercalifragilistic", 50.0, 10.0), "Supercal...");
//! assert_eq!(format_numeric_value(1234567.891, 40.0, 8.0), "12,34,568");
//! ```
//!
//! # Operations
//!
//! - Measuring (measure_text, char_width)
//! - Truncating with an ellipsis (truncate_text)
//! - Fitting amounts (format_numeric_value)
//! - Word wrapping (wrap_text)

pub mod fit;
pub mod metrics;
pub mod types;

pub use fit::{
    format_numeric_value, format_numeric_value_with, numeric_candidates, truncate_text,
    wrap_text, DigitGrouping, NumericFormatOptions, NumericValue, ELLIPSIS,
};
pub use metrics::{char_width, measure_text, GlyphWidthTable};
pub use types::{FitRequest, FitResult, TableExport};

/// Execute a single request.
///
/// # Example
/// ```rust
/// let req = textfit::FitRequest::from_json(
///     r#"{"op":"truncate","text":"Supercalifragilistic","maxWidth":50,"fontSize":10}"#,
/// ).unwrap();
/// assert_eq!(textfit::run_request(&req).text, "Supercal...");
/// ```
pub fn run_request(request: &FitRequest) -> FitResult {
    let font_size = request.font_size();
    match request {
        FitRequest::Measure { text, .. } => {
            let text = text.clone().unwrap_or_default();
            let width = measure_text(&text, font_size);
            FitResult { text, width, lines: Vec::new() }
        }
        FitRequest::Truncate { text, max_width, .. } => {
            let text = truncate_text(text.as_deref().unwrap_or(""), *max_width, font_size);
            fitted(text, font_size)
        }
        FitRequest::Format { value, max_width, grouping, .. } => {
            let options = NumericFormatOptions { grouping: *grouping };
            let text = format_numeric_value_with(value, *max_width, font_size, &options);
            fitted(text, font_size)
        }
        FitRequest::Wrap { text, max_width, .. } => {
            let lines = wrap_text(text.as_deref().unwrap_or(""), *max_width, font_size);
            let width = lines
                .iter()
                .map(|line| measure_text(line, font_size))
                .fold(0.0, f64::max);
            FitResult { text: lines.join("\n"), width, lines }
        }
    }
}

fn fitted(text: String, font_size: f64) -> FitResult {
    let width = measure_text(&text, font_size);
    FitResult { text, width, lines: Vec::new() }
}
