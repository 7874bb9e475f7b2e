//! Text measuring and fitting helpers
//!
//! Widths are display columns, so CJK and emoji count as two.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns used when the terminal size is unknown
pub const FALLBACK_WIDTH: u16 = 100;

/// Cut text to `max_width` columns, marking the cut with an ellipsis
pub fn truncate(text: &str, max_width: usize) -> String {
    if text_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = char_width(ch);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Left-align text in a field of `width` columns, truncating if needed
pub fn pad_right(text: &str, width: usize) -> String {
    let fitted = truncate(text, width);
    let fill = width.saturating_sub(text_width(&fitted));
    format!("{fitted}{}", " ".repeat(fill))
}

/// Right-align text in a field of `width` columns, truncating if needed
pub fn pad_left(text: &str, width: usize) -> String {
    let fitted = truncate(text, width);
    let fill = width.saturating_sub(text_width(&fitted));
    format!("{}{fitted}", " ".repeat(fill))
}

/// Terminal width, or [`FALLBACK_WIDTH`] when stdout is not a terminal
pub fn terminal_width() -> u16 {
    crossterm::terminal::size()
        .map(|(cols, _)| cols)
        .unwrap_or(FALLBACK_WIDTH)
}

pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}
