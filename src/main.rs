//! Zellij plugin wrapper and entry point.
//!
//! Translates host events into library [`Event`]s, runs them through
//! [`handle_event`] and turns the returned [`Action`]s into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Permissions**: Request `WebAccess`; the grant triggers the fetch
//! 3. **Fetch**: `web_request` to the endpoint; the answer arrives as
//!    `WebRequestResult` tagged with our context
//! 4. **Update**: Keys, responses and timers become library events
//! 5. **Render**: Delegate to the library renderer
//!
//! # Keybindings
//!
//! Browsing:
//! - `j`/`k`/`Down`/`Up`: Move selection
//! - `l`/`h`/`Right`/`Left`/`PageDown`/`PageUp`: Next/previous page
//! - `g`/`G`/`Home`/`End`: First/last page
//! - `+`/`-`: Larger/smaller page size
//! - `/`: Search
//! - `1`/`2`: Sort by name/email (repeat to flip)
//! - `a`: Add, `e`/`Enter`: Edit, `d`: Delete
//! - `t`: Toggle light/dark
//! - `Esc`: Clear search, `q`: Close
//!
//! Search: type to filter, `Enter` keeps the query, `Esc` clears it.
//!
//! Form: `Tab`/`Shift+Tab` or `Down`/`Up` move between fields, `Enter`
//! saves, `Esc` cancels.
//!
//! `Ctrl+n`/`Ctrl+p` move the selection while browsing or searching.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use commentary::domain::SortKey;
use commentary::source::FetchRequest;
use commentary::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: commentary::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: commentary::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        commentary::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = commentary::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
            EventType::Timer,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                if !FetchRequest::is_response(&context) {
                    tracing::debug!("ignoring web response for another request");
                    return false;
                }
                tracing::debug!(status, body_len = body.len(), "records response received");
                Event::RecordsFetched { status, body }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                let granted = match status {
                    PermissionStatus::Granted => vec![PermissionType::WebAccess],
                    PermissionStatus::Denied => vec![],
                };
                Event::PermissionsResult { granted }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick,
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        commentary::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps a key press to an event for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            if matches!(self.app.input_mode, InputMode::Form(_)) {
                return None;
            }
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Normal => Self::map_normal_key(key),
            InputMode::Search => Some(match key.bare_key {
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Form(_) => Some(match key.bare_key {
                BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PreviousField,
                BareKey::Tab | BareKey::Down => Event::NextField,
                BareKey::Up => Event::PreviousField,
                BareKey::Enter => Event::Submit,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
        }
    }

    fn map_normal_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Right | BareKey::PageDown | BareKey::Char('l') => Event::NextPage,
            BareKey::Left | BareKey::PageUp | BareKey::Char('h') => Event::PreviousPage,
            BareKey::Home | BareKey::Char('g') => Event::FirstPage,
            BareKey::End | BareKey::Char('G') => Event::LastPage,
            BareKey::Char('+' | '=') => Event::CyclePageSize(true),
            BareKey::Char('-') => Event::CyclePageSize(false),
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('1') => Event::SortBy(SortKey::Name),
            BareKey::Char('2') => Event::SortBy(SortKey::Email),
            BareKey::Char('a') => Event::NewRecord,
            BareKey::Char('e') => Event::EditSelected,
            BareKey::Enter => Event::Submit,
            BareKey::Char('d') | BareKey::Delete => Event::DeleteSelected,
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchRecords(request) => {
                tracing::debug!(url = %request.url, "issuing records request");
                web_request(
                    request.url.as_str(),
                    HttpVerb::Get,
                    request.headers.clone(),
                    vec![],
                    request.context.clone(),
                );
            }
            Action::ScheduleTick(secs) => {
                tracing::trace!(secs, "scheduling toast tick");
                set_timeout(*secs);
            }
        }
    }
}
