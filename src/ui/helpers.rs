//! Shared rendering utilities.
//!
//! All width arithmetic here counts characters, not bytes, so names and
//! bodies with non-ASCII text keep their columns aligned and never get cut
//! inside a code point.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending in `…` when cut.
///
/// # Examples
///
/// ```
/// use commentary::ui::helpers::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo wörld", 6), "héllo…");
/// assert_eq!(truncate_chars("short", 10), "short");
/// ```
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if char_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Collapses every whitespace run, newlines included, into one space.
#[must_use]
pub fn flatten_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Left padding that centres `text_width` within `cols`.
#[must_use]
pub const fn centre_padding(text_width: usize, cols: usize) -> usize {
    cols.saturating_sub(text_width) / 2
}

/// Prints `text` with character ranges drawn in the match highlight colors.
///
/// Ranges are `(start, end)` character indices, sorted and non-overlapping.
/// Selected rows skip highlighting so the selection colors stay intact. After
/// each highlighted span the row's base foreground `base_fg` is restored.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
    base_fg: &str,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(base_fg));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("ääääää", 4), "äää…");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
        assert_eq!(truncate_chars("abcd", 1), "…");
    }

    #[test]
    fn flatten_joins_lines() {
        assert_eq!(flatten_line("first line\nsecond\r\n  third"), "first line second third");
        assert_eq!(flatten_line("   "), "");
    }

    #[test]
    fn centring_never_underflows() {
        assert_eq!(centre_padding(10, 30), 10);
        assert_eq!(centre_padding(40, 30), 0);
    }
}
