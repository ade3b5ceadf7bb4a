//! Top-level rendering coordinator.
//!
//! Computes the view model from [`AppState`] with the active palette, then
//! picks a layout: full-screen message, form, or table. Toasts are drawn last
//! on top of the form and table layouts.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh frame per render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, state.theme(), rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(empty, theme, cols);
        return;
    }

    if let Some(form) = &vm.form {
        components::render_form_mode(vm, form, theme, cols, rows);
    } else {
        components::render_browse_mode(vm, theme, cols, rows);
    }

    components::render_toasts(&vm.toasts, theme, cols);
}
