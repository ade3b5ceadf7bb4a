//! Toast overlay in the top-right corner.

use crate::ui::helpers::{char_width, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastInfo;

/// First row of the toast stack, just under the header.
const TOAST_TOP_ROW: usize = 3;

/// Draws toasts stacked downward from the top-right, oldest first.
///
/// Drawn last so they sit on top of whatever is underneath.
pub fn render_toasts(toasts: &[ToastInfo], theme: &Theme, cols: usize) {
    for (offset, toast) in toasts.iter().enumerate() {
        let text = truncate_chars(&format!(" {} ", toast.text), cols.saturating_sub(2));
        let width = char_width(&text);
        let col = cols.saturating_sub(width + 1).max(1);

        position_cursor(TOAST_TOP_ROW + offset, col);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.toast_fg));
        print!("{}", Theme::bg(theme.colors.toast_bg(toast.kind)));
        print!("{text}");
        print!("{}", Theme::reset());
    }
}
