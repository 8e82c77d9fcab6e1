//! Glyph metrics for the document font.
//!
//! Widths are stored per unit of font size and scaled at measurement time.

mod measure;
mod table;

pub use measure::{char_width, measure_text};
pub use table::{GlyphWidthTable, DEFAULT_WIDTH, RS_KEY, RS_WIDTH, SPACE_WIDTH};
