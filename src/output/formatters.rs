//! Formatting utilities for terminal output

/// Lay out words in aligned columns
///
/// Column width follows the longest word; `width` is the target line width
/// in chars. Returns an empty string for an empty list.
#[must_use]
pub fn word_columns(words: &[String], width: usize) -> String {
    let Some(longest) = words.iter().map(|w| w.chars().count()).max() else {
        return String::new();
    };

    let cell = longest + 2;
    let per_row = (width / cell).max(1);

    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 && i % per_row == 0 {
            out.push('\n');
        }
        out.push_str(word);
        // Pad every cell but the last in a row
        if (i + 1) % per_row != 0 && i + 1 != words.len() {
            let pad = cell - word.chars().count();
            out.push_str(&" ".repeat(pad));
        }
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
