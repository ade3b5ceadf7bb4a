//! Full-screen message shown while loading or after a failed fetch.

use crate::ui::helpers::{centre_padding, char_width, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centred two-line message starting at row 6.
///
/// Errors use the theme's `error_fg`; everything else uses `empty_state_fg`.
/// The subtitle is dimmed.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = truncate_chars(&empty.message, cols);
    let msg_len = char_width(&message);
    let msg_padding = centre_padding(msg_len, cols);
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    position_cursor(6, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let subtitle = truncate_chars(&empty.subtitle, cols);
    let sub_len = char_width(&subtitle);
    let sub_padding = centre_padding(sub_len, cols);

    position_cursor(7, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
