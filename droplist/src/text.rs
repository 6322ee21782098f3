use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Terminal display width of a string.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Terminal display width of a single character.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` down to at most `max_width` cells, appending an ellipsis when
/// anything had to be dropped.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > target {
            break;
        }
        result.push(ch);
        width += w;
    }

    result.push('…');
    result
}
