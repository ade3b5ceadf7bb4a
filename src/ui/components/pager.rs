//! Pager status line under the table.

use crate::ui::helpers::{char_width, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;

/// Renders the pager line at `row`, left-aligned with a one-space indent.
pub fn render_pager(row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) -> usize {
    let text = truncate_chars(&format!(" {}", pager.text), cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(char_width(&text))));
    print!("{}", Theme::reset());
    row + 1
}
