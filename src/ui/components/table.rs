//! Comment table: ID, NAME, EMAIL and BODY columns.
//!
//! Column widths are fixed except BODY, which takes whatever is left. Cell
//! text arrives already truncated from the view model, so this module only
//! pads and colors.

use crate::app::state::{EMAIL_COLUMN_WIDTH, ID_COLUMN_WIDTH, NAME_COLUMN_WIDTH};
use crate::ui::helpers::{self, char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeaders, DisplayItem};

/// Renders the column titles and returns the next free row.
///
/// The sorted column carries its direction arrow, e.g. `NAME ↑`.
pub fn render_table_headers(row: usize, columns: &ColumnHeaders, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", pad(&columns.id, ID_COLUMN_WIDTH));
    print!("{}", pad(&columns.name, NAME_COLUMN_WIDTH));
    print!("{}", pad(&columns.email, EMAIL_COLUMN_WIDTH));
    print!("{}", columns.body);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every row and returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one record. Selected rows are filled to the full width so the
/// selection background spans the line.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        &theme.colors.text_normal
    };

    print!("{}", pad(&item.id, ID_COLUMN_WIDTH));

    helpers::render_highlighted_text(&item.name, &item.name_highlights, theme, item.is_selected, base_fg);
    print!("{}", " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(char_width(&item.name))));

    helpers::render_highlighted_text(&item.email, &item.email_highlights, theme, item.is_selected, base_fg);
    print!("{}", " ".repeat(EMAIL_COLUMN_WIDTH.saturating_sub(char_width(&item.email))));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.body);

    let line_len = ID_COLUMN_WIDTH + NAME_COLUMN_WIDTH + EMAIL_COLUMN_WIDTH + char_width(&item.body);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Left-aligns `text` in a `width`-character cell.
fn pad(text: &str, width: usize) -> String {
    let len = char_width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}
