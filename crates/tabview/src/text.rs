#![forbid(unsafe_code)]

//! Display-width helpers for fitting cell text into fixed-width columns.
//!
//! Everything here measures terminal cells, not bytes or chars, and never
//! splits a grapheme cluster.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Marker appended to truncated cell text.
pub const ELLIPSIS: &str = "…";

/// Display width of `text` in terminal cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Truncate text to fit within `max_width` cells (no ellipsis).
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += grapheme_width;
    }

    result
}

/// Truncate text to fit within `max_width`, ending in `ellipsis` when
/// anything was cut.
///
/// If the ellipsis alone does not fit, the text is cut without it.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_width: usize, ellipsis: &str) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis_width = ellipsis.width();
    if ellipsis_width >= max_width {
        return truncate_to_width(text, max_width);
    }

    let mut result = truncate_to_width(text, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

/// Right-pad `text` with spaces up to `width` cells.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(current));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(current)));
    out
}

/// Truncate (with [`ELLIPSIS`]) and pad so the result is exactly `width`
/// cells wide.
///
/// A wide grapheme that straddles the boundary leaves a one-cell gap, which
/// is filled with a space.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    pad_to_width(&truncate_with_ellipsis(text, width, ELLIPSIS), width)
}
