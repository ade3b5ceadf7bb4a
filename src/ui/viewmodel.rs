//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready data only: strings already truncated to their columns,
//! highlight ranges already clipped, colors resolved later from the theme.

use crate::app::notifications::ToastKind;
use crate::domain::FormField;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the table for the visible window of the current page.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub columns: ColumnHeaders,

    pub pager: PagerInfo,

    pub footer: FooterInfo,

    /// Set when the main area shows a message instead of the table
    /// (loading, fetch failure, no matches).
    pub empty_state: Option<EmptyState>,

    /// Set while the search bar is open.
    pub search_bar: Option<SearchBarInfo>,

    /// Set while the add/edit form is open.
    pub form: Option<FormInfo>,

    /// Live toasts, oldest first.
    pub toasts: Vec<ToastInfo>,
}

/// One row of the comment table.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Body flattened to a single line.
    pub body: String,
    pub is_selected: bool,
    /// Search match ranges in `name`, `(start, end)` character indices.
    pub name_highlights: Vec<(usize, usize)>,
    /// Search match ranges in `email`.
    pub email_highlights: Vec<(usize, usize)>,
}

/// Header bar contents.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Theme mode badge, e.g. `" ☾ dark "`.
    pub theme_badge: String,
}

/// Column titles, with the sort arrow on the active column.
#[derive(Debug, Clone)]
pub struct ColumnHeaders {
    pub id: String,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Status line under the table.
#[derive(Debug, Clone)]
pub struct PagerInfo {
    /// e.g. `"Page 2 of 30 · 10 per page · 300 comments"`.
    pub text: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Message shown instead of the table.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    /// Drawn with the error color when set.
    pub is_error: bool,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
}

/// Add/edit form panel.
#[derive(Debug, Clone)]
pub struct FormInfo {
    /// `"New comment"` or `"Edit comment #id"`.
    pub title: String,
    pub fields: Vec<FormFieldInfo>,
}

/// One labelled input of the form.
#[derive(Debug, Clone)]
pub struct FormFieldInfo {
    pub field: FormField,
    pub label: String,
    pub value: String,
    pub is_focused: bool,
    pub is_required: bool,
}

/// One toast banner.
#[derive(Debug, Clone)]
pub struct ToastInfo {
    pub kind: ToastKind,
    /// Message with its icon, e.g. `"✓ Comment added"`.
    pub text: String,
}
