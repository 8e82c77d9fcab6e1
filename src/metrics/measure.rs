//! Width measurement against the glyph table.

use super::table::{GlyphWidthTable, DEFAULT_WIDTH};

/// Advance width of `text` at `font_size`.
///
/// Iterates UTF-16 code units, one table lookup per unit. A surrogate half
/// never matches an entry and is charged [`DEFAULT_WIDTH`], so characters
/// outside the Basic Multilingual Plane cost two default widths. The whole
/// string `"Rs"` is the single atomic exception.
pub fn measure_text(text: &str, font_size: f64) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let table = GlyphWidthTable::get();
    if let Some(width) = table.atomic_width(text) {
        return font_size * width;
    }

    let mut total = 0.0;
    for unit in text.encode_utf16() {
        let width = char::from_u32(u32::from(unit))
            .map(|ch| table.width_of(ch))
            .unwrap_or(DEFAULT_WIDTH);
        total += font_size * width;
    }
    total
}

/// Advance width of a single character at `font_size`.
pub fn char_width(ch: char, font_size: f64) -> f64 {
    let mut buf = [0u8; 4];
    measure_text(ch.encode_utf8(&mut buf), font_size)
}
