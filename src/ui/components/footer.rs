//! Footer help bar with centred keybinding hints.

use crate::ui::helpers::{centre_padding, char_width, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer at `row` and returns the next free row.
///
/// Hints wider than the terminal are truncated with an ellipsis.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_chars(&footer.keybindings, cols);
    let text_len = char_width(&help_text);
    let padding = centre_padding(text_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
