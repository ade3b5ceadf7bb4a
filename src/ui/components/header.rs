//! Header bar: centred title with the theme badge on the right.

use crate::ui::helpers::{centre_padding, char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// ```text
/// [padding]  Comments (300)  [padding] ☀ light
/// ```
///
/// On terminals too narrow for both, the badge is dropped.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = char_width(&header.title);
    let badge_len = char_width(&header.theme_badge);
    let show_badge = title_len + badge_len + 2 <= cols;
    let padding = centre_padding(title_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);

    if show_badge {
        let gap = cols.saturating_sub(padding + title_len + badge_len);
        print!("{}", " ".repeat(gap));
        print!("{}", Theme::fg(&theme.colors.badge_fg));
        print!("{}", Theme::bg(&theme.colors.badge_bg));
        print!("{}", header.theme_badge);
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    }

    print!("{}", Theme::reset());
    row + 1
}
