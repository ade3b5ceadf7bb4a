//! Event handling and state transition logic.
//!
//! [`handle_event`] takes one [`Event`], mutates [`AppState`] through its
//! methods and returns whether a re-render is needed plus the actions to run.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, page events, `CyclePageSize`
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `ExitSearch`
//! - **Records**: `SortBy`, `NewRecord`, `EditSelected`, `DeleteSelected`
//! - **Form**: `NextField`, `PreviousField`, `Submit`, `Escape`
//! - **System**: `PermissionsResult`, `RecordsFetched`, `Tick`
//!
//! Until the feed has loaded, only system events and `CloseFocus` do
//! anything; there is nothing to browse while the loading or error screen is
//! up.

use super::modes::{InputMode, LoadState, ThemeMode};
use super::notifications::ToastKind;
use super::state::Mutation;
use crate::app::{Action, AppState};
use crate::domain::error::{CommentaryError, Result};
use crate::domain::SortKey;
use crate::source::{check_status, decode_records};
use chrono::{DateTime, Utc};
use zellij_tile::prelude::PermissionType;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the cursor down (wraps to the top of the page).
    KeyDown,
    /// Moves the cursor up (wraps to the bottom of the page).
    KeyUp,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Cycles the page size forward (`true`) or backward.
    CyclePageSize(bool),

    /// Opens the search bar.
    SearchMode,
    /// Typed character, routed to the search bar or the focused form field.
    Char(char),
    Backspace,
    /// Closes the search bar and clears the query.
    ExitSearch,

    /// Sorts by a key; repeating the active key flips the direction.
    SortBy(SortKey),
    /// Opens the empty form.
    NewRecord,
    /// Opens the form prefilled with the selected record.
    EditSelected,
    DeleteSelected,

    NextField,
    PreviousField,
    /// Enter: saves the form, or leaves search keeping the query.
    Submit,
    /// Cancels the form, clears the search, or both depending on mode.
    Escape,

    ToggleTheme,
    /// Hides the plugin pane.
    CloseFocus,

    /// Permissions granted by the user after the startup request.
    PermissionsResult {
        granted: Vec<PermissionType>,
    },

    /// HTTP response for the records request.
    RecordsFetched {
        status: u16,
        body: Vec<u8>,
    },

    /// Host timer fired.
    Tick,
}

/// Processes an event against the current wall clock.
///
/// # Errors
///
/// Returns store errors that cannot be reported to the user as a toast.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    handle_event_at(state, event, Utc::now())
}

/// Processes an event at a given instant, mutates state and returns
/// `(needs_render, actions)`.
///
/// # Errors
///
/// Returns store errors that cannot be reported to the user as a toast.
#[allow(clippy::too_many_lines)]
pub fn handle_event_at(
    state: &mut AppState,
    event: &Event,
    now: DateTime<Utc>,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CloseFocus => return Ok((false, vec![Action::CloseFocus])),
        Event::PermissionsResult { granted } => {
            if granted.contains(&PermissionType::WebAccess) {
                tracing::debug!(url = %state.request.url, "web access granted, fetching records");
                return Ok((true, vec![Action::FetchRecords(state.request.clone())]));
            }
            tracing::warn!("web access permission denied");
            state.load = LoadState::Failed(
                CommentaryError::Request("web access permission was denied".to_string()).to_string(),
            );
            return Ok((true, vec![]));
        }
        Event::RecordsFetched { status, body } => {
            let outcome = check_status(*status, body).and_then(|()| decode_records(body, state.record_limit));
            match outcome {
                Ok(records) => {
                    tracing::info!(status, count = records.len(), "records loaded");
                    state.load_records(records);
                }
                Err(e) => {
                    tracing::error!(status, error = %e, "records fetch failed");
                    state.load = LoadState::Failed(e.to_string());
                }
            }
            return Ok((true, vec![]));
        }
        Event::Tick => {
            let removed = state.toasts.expire(now);
            let actions = state
                .toasts
                .next_expiry_in(now)
                .map(Action::ScheduleTick)
                .into_iter()
                .collect();
            return Ok((removed, actions));
        }
        _ => {}
    }

    if state.load != LoadState::Ready {
        tracing::trace!("ignoring input while feed is not ready");
        return Ok((false, vec![]));
    }

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::NextPage => Ok((state.next_page(), vec![])),
        Event::PreviousPage => Ok((state.previous_page(), vec![])),
        Event::FirstPage => Ok((state.first_page(), vec![])),
        Event::LastPage => Ok((state.last_page(), vec![])),
        Event::CyclePageSize(forward) => {
            state.cycle_page_size(*forward);
            tracing::debug!(rows = state.page_size.rows(), "page size changed");
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search => {
                state.push_search_char(*c);
                Ok((true, vec![]))
            }
            InputMode::Form(field) => {
                state.form.field_mut(field).push(*c);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search => {
                state.pop_search_char();
                Ok((true, vec![]))
            }
            InputMode::Form(field) => Ok((state.form.field_mut(field).pop().is_some(), vec![])),
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.clear_search();
            Ok((true, vec![]))
        }
        Event::SortBy(key) => {
            state.sort_by(*key);
            tracing::debug!(sort = ?state.sort, "sort changed");
            Ok((true, vec![]))
        }
        Event::NewRecord => {
            state.begin_add();
            Ok((true, vec![]))
        }
        Event::EditSelected => Ok((state.begin_edit(), vec![])),
        Event::DeleteSelected => match state.delete_selected()? {
            Some(removed) => {
                tracing::debug!(id = removed.id, "record deleted");
                Ok((true, notify(state, ToastKind::Success, "Comment deleted", now)))
            }
            None => Ok((false, vec![])),
        },
        Event::NextField | Event::PreviousField => {
            let InputMode::Form(field) = state.input_mode else {
                return Ok((false, vec![]));
            };
            let next = if matches!(event, Event::NextField) {
                field.next()
            } else {
                field.previous()
            };
            state.input_mode = InputMode::Form(next);
            Ok((true, vec![]))
        }
        Event::Submit => match state.input_mode {
            InputMode::Form(_) => match state.submit_form(now) {
                Ok(mutation) => {
                    tracing::debug!(mutation = ?mutation, "form saved");
                    let message = match mutation {
                        Mutation::Added(_) => "Comment added",
                        Mutation::Updated(_) => "Comment updated",
                    };
                    Ok((true, notify(state, ToastKind::Success, message, now)))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "form rejected");
                    Ok((true, notify(state, ToastKind::Error, e.to_string(), now)))
                }
            },
            InputMode::Search => {
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((state.begin_edit(), vec![])),
        },
        Event::Escape => {
            match state.input_mode {
                InputMode::Form(_) => state.cancel_form(),
                InputMode::Search => {
                    state.input_mode = InputMode::Normal;
                    state.clear_search();
                }
                InputMode::Normal => state.clear_search(),
            }
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            let mode = state.toggle_theme();
            tracing::debug!(theme = mode.name(), palette = %state.theme().name, "theme toggled");
            let message = match mode {
                ThemeMode::Light => "Switched to light theme",
                ThemeMode::Dark => "Switched to dark theme",
            };
            Ok((true, notify(state, ToastKind::Info, message, now)))
        }
        Event::CloseFocus
        | Event::PermissionsResult { .. }
        | Event::RecordsFetched { .. }
        | Event::Tick => Ok((false, vec![])),
    }
}

fn notify(
    state: &mut AppState,
    kind: ToastKind,
    message: impl Into<String>,
    now: DateTime<Utc>,
) -> Vec<Action> {
    state
        .notify(kind, message, now)
        .map(Action::ScheduleTick)
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use crate::ui::theme::ThemePair;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).single().expect("valid timestamp")
    }

    fn body(count: usize) -> Vec<u8> {
        let records: Vec<Record> = (1..=count)
            .map(|i| Record {
                id: i64::try_from(i).expect("small id"),
                post_id: 1,
                name: format!("name {i}"),
                email: format!("user{i}@example.com"),
                body: "text".to_string(),
            })
            .collect();
        serde_json::to_vec(&records).expect("serializable")
    }

    fn loaded() -> AppState {
        let mut state = AppState::new(vec![], ThemePair::default());
        handle_event_at(&mut state, &Event::RecordsFetched { status: 200, body: body(12) }, at(0))
            .expect("handled");
        state
    }

    #[test]
    fn granted_permission_starts_the_fetch() {
        let mut state = AppState::new(vec![], ThemePair::default());
        let (_, actions) = handle_event_at(
            &mut state,
            &Event::PermissionsResult { granted: vec![PermissionType::WebAccess] },
            at(0),
        )
        .expect("handled");
        assert_eq!(actions, vec![Action::FetchRecords(state.request.clone())]);
    }

    #[test]
    fn denied_permission_fails_the_load() {
        let mut state = AppState::new(vec![], ThemePair::default());
        handle_event_at(&mut state, &Event::PermissionsResult { granted: vec![] }, at(0))
            .expect("handled");
        assert!(matches!(state.load, LoadState::Failed(_)));
    }

    #[test]
    fn error_status_replaces_the_ui() {
        let mut state = AppState::new(vec![], ThemePair::default());
        handle_event_at(&mut state, &Event::RecordsFetched { status: 503, body: vec![] }, at(0))
            .expect("handled");
        assert_eq!(state.load, LoadState::Failed("Request failed with status 503".to_string()));

        let (render, _) = handle_event_at(&mut state, &Event::KeyDown, at(0)).expect("handled");
        assert!(!render);
    }

    #[test]
    fn malformed_body_fails_the_load() {
        let mut state = AppState::new(vec![], ThemePair::default());
        handle_event_at(
            &mut state,
            &Event::RecordsFetched { status: 200, body: b"{not json".to_vec() },
            at(0),
        )
        .expect("handled");
        assert!(matches!(&state.load, LoadState::Failed(m) if m.starts_with("Could not decode comments")));
    }

    #[test]
    fn typing_routes_by_mode() {
        let mut state = loaded();
        handle_event_at(&mut state, &Event::Char('x'), at(0)).expect("handled");
        assert!(state.search_query.is_empty());

        handle_event_at(&mut state, &Event::SearchMode, at(0)).expect("handled");
        handle_event_at(&mut state, &Event::Char('9'), at(0)).expect("handled");
        assert_eq!(state.view.len(), 1);

        handle_event_at(&mut state, &Event::Submit, at(0)).expect("handled");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "9");

        handle_event_at(&mut state, &Event::Escape, at(0)).expect("handled");
        assert!(state.search_query.is_empty());
        assert_eq!(state.view.len(), 12);
    }

    #[test]
    fn form_round_trip_through_events() {
        let mut state = loaded();
        handle_event_at(&mut state, &Event::NewRecord, at(0)).expect("handled");
        for c in "Ada".chars() {
            handle_event_at(&mut state, &Event::Char(c), at(0)).expect("handled");
        }
        handle_event_at(&mut state, &Event::NextField, at(0)).expect("handled");
        for c in "ada@example.com".chars() {
            handle_event_at(&mut state, &Event::Char(c), at(0)).expect("handled");
        }

        let (_, actions) = handle_event_at(&mut state, &Event::Submit, at(0)).expect("handled");
        assert_eq!(actions, vec![Action::ScheduleTick(3.0)]);
        assert_eq!(state.toasts.visible()[0].message, "Body is required");
        assert!(matches!(state.input_mode, InputMode::Form(_)));

        handle_event_at(&mut state, &Event::NextField, at(0)).expect("handled");
        handle_event_at(&mut state, &Event::NextField, at(0)).expect("handled");
        handle_event_at(&mut state, &Event::PreviousField, at(0)).expect("handled");
        assert_eq!(state.input_mode, InputMode::Form(crate::domain::FormField::Body));
        for c in "hi".chars() {
            handle_event_at(&mut state, &Event::Char(c), at(0)).expect("handled");
        }
        let (_, actions) = handle_event_at(&mut state, &Event::Submit, at(1)).expect("handled");
        assert!(actions.is_empty());
        assert_eq!(state.store.len(), 13);
        assert_eq!(state.store.all()[0].name, "Ada");
    }

    #[test]
    fn delete_then_tick_expires_toast() {
        let mut state = loaded();
        let (_, actions) = handle_event_at(&mut state, &Event::DeleteSelected, at(0)).expect("handled");
        assert_eq!(actions, vec![Action::ScheduleTick(3.0)]);
        assert_eq!(state.store.len(), 11);

        let (render, actions) = handle_event_at(&mut state, &Event::Tick, at(3)).expect("handled");
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn theme_toggle_announces_the_new_mode() {
        let mut state = loaded();
        handle_event_at(&mut state, &Event::ToggleTheme, at(0)).expect("handled");
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert_eq!(state.toasts.visible()[0].message, "Switched to dark theme");
    }

    #[test]
    fn close_is_allowed_while_loading() {
        let mut state = AppState::new(vec![], ThemePair::default());
        let (_, actions) = handle_event_at(&mut state, &Event::CloseFocus, at(0)).expect("handled");
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
