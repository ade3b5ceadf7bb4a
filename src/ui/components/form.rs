//! Add/edit form panel.

use crate::ui::helpers::{centre_padding, char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormFieldInfo, FormInfo};

/// Widest the panel grows on large terminals.
const MAX_FORM_WIDTH: usize = 76;

/// Width reserved for field labels, including the required marker.
const LABEL_WIDTH: usize = 10;

/// Renders the bordered form panel starting at `row` and returns the next free row.
///
/// ```text
/// ┌ New comment ───────────────────────┐
/// │                                    │
/// │  Name*     Ada▏                    │
/// │  Email*    ada@example.com         │
/// │  Body*                             │
/// │  Post id   1                       │
/// │                                    │
/// └────────────────────────────────────┘
/// ```
pub fn render_form(row: usize, form: &FormInfo, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(4).min(MAX_FORM_WIDTH).max(LABEL_WIDTH + 8);
    let inner_width = width.saturating_sub(2);
    let left = centre_padding(width, cols) + 1;
    let border = &theme.colors.form_border;

    let title = format!(" {} ", form.title);
    let title_len = char_width(&title).min(inner_width.saturating_sub(1));
    let title: String = title.chars().take(title_len).collect();

    position_cursor(row, left);
    print!("{}", Theme::fg(border));
    print!("┌─");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.form_label_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(border));
    print!("{}┐", "─".repeat(inner_width.saturating_sub(title_len + 1)));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    current_row = render_blank_line(current_row, left, inner_width, border);
    for field in &form.fields {
        current_row = render_field(current_row, left, inner_width, field, theme);
    }
    current_row = render_blank_line(current_row, left, inner_width, border);

    position_cursor(current_row, left);
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    current_row + 1
}

fn render_blank_line(row: usize, left: usize, inner_width: usize, border: &str) -> usize {
    position_cursor(row, left);
    print!("{}", Theme::fg(border));
    print!("│{}│", " ".repeat(inner_width));
    print!("{}", Theme::reset());
    row + 1
}

/// One `label value` line. The focused field shows a cursor bar and keeps the
/// end of long values visible.
fn render_field(row: usize, left: usize, inner_width: usize, field: &FormFieldInfo, theme: &Theme) -> usize {
    let label = if field.is_required {
        format!("{}*", field.label)
    } else {
        field.label.clone()
    };
    let label_cell = format!("  {label:<LABEL_WIDTH$}");
    let value_room = inner_width.saturating_sub(char_width(&label_cell) + 1);

    let cursor = if field.is_focused { "▏" } else { "" };
    let value_len = char_width(&field.value) + char_width(cursor);
    let value: String = if value_len > value_room {
        let skip = value_len - value_room;
        if field.is_focused {
            field.value.chars().skip(skip).collect()
        } else {
            field.value.chars().take(char_width(&field.value) - skip).collect()
        }
    } else {
        field.value.clone()
    };
    let shown = char_width(&value) + char_width(cursor);

    position_cursor(row, left);
    print!("{}", Theme::fg(&theme.colors.form_border));
    print!("│");
    if field.is_focused {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(&theme.colors.form_label_fg));
    print!("{label_cell}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{value}{cursor}");
    print!(
        "{}",
        " ".repeat(inner_width.saturating_sub(char_width(&label_cell) + shown))
    );
    print!("{}", Theme::fg(&theme.colors.form_border));
    print!("│");
    print!("{}", Theme::reset());
    row + 1
}
