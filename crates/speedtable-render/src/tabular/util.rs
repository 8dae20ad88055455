//! ANSI-aware text measurement and padding.
//!
//! Escape sequences are preserved in output but never count toward display
//! width, so already-styled text can be padded safely.

use console::{measure_text_width, pad_str, Alignment};

use super::types::Align;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// East Asian wide characters count as two columns.
///
/// # Example
///
/// ```rust
/// use speedtable_render::tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// ```rust
/// use speedtable_render::tabular::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use speedtable_render::tabular::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a string to `width` according to `align`. Never truncates.
pub fn pad(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(s, width),
        Align::Right => pad_left(s, width),
    }
}
