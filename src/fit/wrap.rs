//! Greedy word wrapping against a width budget.

use crate::metrics::measure_text;

/// Break `text` into lines no wider than `max_width`.
///
/// Words are separated by whitespace and joined with single spaces. A word
/// that is wider than the budget on its own is split into character chunks;
/// a single character wider than the budget still gets its own line.
pub fn wrap_text(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let fits = |s: &str| measure_text(s, font_size) <= max_width;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() {
            let candidate = format!("{} {}", current, word);
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current.push_str(word);
            continue;
        }

        // Split a single too-long word into chunks.
        let mut chunk = String::new();
        for ch in word.chars() {
            chunk.push(ch);
            if !fits(&chunk) && chunk.chars().count() > 1 {
                chunk.pop();
                lines.push(std::mem::take(&mut chunk));
                chunk.push(ch);
            }
        }
        current = chunk;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
