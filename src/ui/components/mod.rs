//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns the
//! next free row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with theme badge
//! - [`search`]: Search input box
//! - [`table`]: Comment table with column titles
//! - [`pager`]: Page position and sort summary
//! - [`form`]: Add/edit panel
//! - [`toast`]: Notification overlay
//! - [`empty`]: Full-screen loading and error message
//! - [`footer`]: Keybinding hints

mod empty;
mod footer;
mod form;
mod header;
mod pager;
mod search;
mod table;
mod toast;

pub use empty::render_empty_state;
pub use toast::render_toasts;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormInfo, UIViewModel};

use footer::render_footer;
use form::render_form;
use header::render_header;
use pager::render_pager;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the browsing layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, when open or a query is active]
/// [Column titles]
/// [Table Rows]
/// [Pager]
/// [Border]
/// [Footer]
/// ```
pub fn render_browse_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_table_headers(current_row, &vm.columns, theme);
    let _current_row = render_table_rows(current_row, &vm.display_items, theme, cols);

    render_bottom(vm, theme, cols, rows, true);
}

/// Renders the form layout: header, form panel, footer.
pub fn render_form_mode(vm: &UIViewModel, form: &FormInfo, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let _current_row = render_form(current_row + 1, form, theme, cols);

    render_bottom(vm, theme, cols, rows, false);
}

/// Pager (optional), border and footer pinned to the last three rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize, with_pager: bool) {
    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);

    if with_pager {
        render_pager(border_row.saturating_sub(1), &vm.pager, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
