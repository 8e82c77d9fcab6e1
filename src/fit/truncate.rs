//! Width-constrained truncation with an ellipsis marker.

use crate::metrics::measure_text;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Fit `text` into `max_width`, cutting it and appending [`ELLIPSIS`] if needed.
///
/// Text that already fits is returned unchanged, and empty text stays empty.
/// Otherwise the longest character prefix that fits alongside the marker is
/// kept. When no non-empty prefix fits, the marker alone is returned, even if
/// it overflows `max_width` on its own.
pub fn truncate_text(text: &str, max_width: f64, font_size: f64) -> String {
    if text.is_empty() {
        return String::new();
    }
    if measure_text(text, font_size) <= max_width {
        return text.to_string();
    }

    let available = max_width - measure_text(ELLIPSIS, font_size);

    // ends[k] is the byte length of the first k characters.
    let ends: Vec<usize> = std::iter::once(0)
        .chain(text.char_indices().skip(1).map(|(i, _)| i))
        .chain(std::iter::once(text.len()))
        .collect();

    let mut lo = 0;
    let mut hi = ends.len() - 1;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if measure_text(&text[..ends[mid]], font_size) <= available {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    if lo == 0 {
        return ELLIPSIS.to_string();
    }
    format!("{}{}", &text[..ends[lo]], ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(truncate_text("", 100.0, 12.0), "");
        assert_eq!(truncate_text("", 0.0, 12.0), "");
    }

    #[test]
    fn test_fitting_text_unchanged() {
        assert_eq!(truncate_text("Invoice #42", 100.0, 10.0), "Invoice #42");
    }

    #[test]
    fn test_longest_prefix_kept() {
        let out = truncate_text("Supercalifragilistic", 50.0, 10.0);
        assert_eq!(out, "Supercal...");
        assert!(measure_text(&out, 10.0) <= 50.0);
        assert!(measure_text("Supercali...", 10.0) > 50.0);
    }

    #[test]
    fn test_marker_alone_when_nothing_fits() {
        assert_eq!(truncate_text("Wide", 5.0, 10.0), "...");
        // Marker fits but no character does.
        assert_eq!(truncate_text("WWW", 9.0, 10.0), "...");
    }

    #[test]
    fn test_multibyte_prefix_on_char_boundary() {
        let out = truncate_text("₹₹₹₹₹₹₹₹₹₹", 25.0, 10.0);
        assert_eq!(out, "₹₹...");
    }

    #[test]
    fn test_rs_prefix_measured_atomically() {
        // The prefix "Rs" fits at 8.89, but "Rs..." measures 20.56 per character.
        let out = truncate_text("Rs 1,500.00", 20.0, 10.0);
        assert_eq!(out, "Rs...");
        assert!(measure_text(&out, 10.0) > 20.0);
    }

    #[test]
    fn test_idempotent() {
        for width in [0.0, 5.0, 9.0, 20.0, 50.0, 500.0] {
            let once = truncate_text("Supercalifragilistic", width, 10.0);
            assert_eq!(truncate_text(&once, width, 10.0), once);
        }
    }
}
