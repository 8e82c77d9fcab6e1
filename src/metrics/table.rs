//! Advance-width table for the document font at a font size of 1.
//!
//! The server-side PDF renderer carries the same numbers. Any edit here must
//! be mirrored there, otherwise previews and generated documents drift apart.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Width used for any character without an entry.
pub const DEFAULT_WIDTH: f64 = 0.556;

/// Width of a plain space, for callers that special-case whitespace.
pub const SPACE_WIDTH: f64 = 0.278;

/// The only multi-character key in the table.
pub const RS_KEY: &str = "Rs";

/// Combined width of [`RS_KEY`] when it is measured on its own.
pub const RS_WIDTH: f64 = 0.889;

const GLYPH_WIDTHS: &[(char, f64)] = &[
    // Narrow
    ('i', 0.278),
    ('j', 0.278),
    ('l', 0.278),
    ('t', 0.278),
    ('f', 0.278),
    ('I', 0.278),
    ('!', 0.278),
    ('|', 0.278),
    ('.', 0.278),
    (',', 0.278),
    (':', 0.278),
    (';', 0.278),
    ('\'', 0.278),
    ('`', 0.333),
    ('(', 0.333),
    (')', 0.333),
    ('[', 0.278),
    (']', 0.278),
    ('{', 0.334),
    ('}', 0.334),
    // Lowercase
    ('a', 0.500),
    ('b', 0.556),
    ('c', 0.500),
    ('d', 0.556),
    ('e', 0.500),
    ('g', 0.556),
    ('h', 0.556),
    ('k', 0.500),
    ('n', 0.556),
    ('o', 0.500),
    ('p', 0.556),
    ('q', 0.556),
    ('r', 0.500),
    ('s', 0.500),
    ('u', 0.556),
    ('v', 0.500),
    ('x', 0.500),
    ('y', 0.500),
    ('z', 0.500),
    // Uppercase
    ('A', 0.667),
    ('B', 0.667),
    ('C', 0.722),
    ('D', 0.722),
    ('E', 0.667),
    ('F', 0.611),
    ('G', 0.778),
    ('H', 0.722),
    ('J', 0.500),
    ('K', 0.667),
    ('L', 0.556),
    ('N', 0.722),
    ('O', 0.778),
    ('P', 0.667),
    ('Q', 0.778),
    ('R', 0.722),
    ('S', 0.667),
    ('T', 0.611),
    ('U', 0.722),
    ('V', 0.667),
    ('X', 0.667),
    ('Y', 0.667),
    ('Z', 0.611),
    // Digits
    ('0', 0.556),
    ('1', 0.556),
    ('2', 0.556),
    ('3', 0.556),
    ('4', 0.556),
    ('5', 0.556),
    ('6', 0.556),
    ('7', 0.556),
    ('8', 0.556),
    ('9', 0.556),
    // Wide
    ('m', 0.833),
    ('w', 0.722),
    ('W', 0.944),
    ('M', 0.833),
    // Symbols
    (' ', 0.278),
    ('-', 0.333),
    ('_', 0.556),
    ('=', 0.584),
    ('+', 0.584),
    ('*', 0.389),
    ('/', 0.278),
    ('\\', 0.278),
    ('@', 1.015),
    ('#', 0.556),
    ('$', 0.556),
    ('%', 0.889),
    ('^', 0.469),
    ('&', 0.667),
    ('~', 0.584),
    ('"', 0.355),
    ('<', 0.584),
    ('>', 0.584),
    ('?', 0.556),
    // Currency
    ('₹', 0.556),
];

lazy_static! {
    static ref TABLE: GlyphWidthTable = GlyphWidthTable {
        widths: GLYPH_WIDTHS.iter().copied().collect(),
    };
}

/// Immutable per-character advance widths.
#[derive(Debug)]
pub struct GlyphWidthTable {
    widths: HashMap<char, f64>,
}

impl GlyphWidthTable {
    /// The process-wide table.
    pub fn get() -> &'static GlyphWidthTable {
        &*TABLE
    }

    /// Width of `ch` at size 1, falling back to [`DEFAULT_WIDTH`].
    pub fn width_of(&self, ch: char) -> f64 {
        self.lookup(ch).unwrap_or(DEFAULT_WIDTH)
    }

    /// Width of `ch` only if it has an explicit entry.
    pub fn lookup(&self, ch: char) -> Option<f64> {
        self.widths.get(&ch).copied()
    }

    /// Width of a multi-character key measured as one unit.
    ///
    /// Only [`RS_KEY`] is registered; everything else returns `None`.
    pub fn atomic_width(&self, text: &str) -> Option<f64> {
        (text == RS_KEY).then_some(RS_WIDTH)
    }

    /// All single-character entries, sorted by character.
    pub fn entries(&self) -> Vec<(char, f64)> {
        let mut entries: Vec<(char, f64)> = self.widths.iter().map(|(c, w)| (*c, *w)).collect();
        entries.sort_by_key(|(c, _)| *c);
        entries
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}
