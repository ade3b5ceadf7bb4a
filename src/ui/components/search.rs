//! Search input box.

use crate::ui::helpers::{char_width, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box.
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search box starting at `row` and returns the next free row.
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: query    │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// Long queries keep their tail visible, which is where the user is typing.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let prefix = " Search: ";
    let room = inner_width.saturating_sub(char_width(prefix));
    let query_len = char_width(&search.query);
    let query: String = if query_len > room {
        let tail: String = search.query.chars().skip(query_len - room + 1).collect();
        format!("…{tail}")
    } else {
        search.query.clone()
    };
    let search_text = truncate_chars(&format!("{prefix}{query}"), inner_width);
    let padding = inner_width.saturating_sub(char_width(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
