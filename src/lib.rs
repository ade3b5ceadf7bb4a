//! Commentary: a Zellij plugin for browsing a remote comment feed.
//!
//! On load the plugin asks for web access, fetches the configured endpoint
//! once and keeps the first 300 comments in memory. From there everything is
//! local:
//! - Case-insensitive search over name, email and body
//! - Sorting by name or email, toggling direction on repeat
//! - Pagination with selectable page sizes
//! - Adding, editing and deleting comments (never sent back to the server)
//! - Light/dark theme toggle and toast notifications
//!
//! If the fetch fails the whole UI is replaced by the error message.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, actions                          │
//! │  - Toast queue                                      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store         │   │ Source        │
//! │ (ui/)         │   │ (store/)      │   │ (source/)     │
//! │ - Rendering   │   │ - In-memory   │   │ - Request     │
//! │ - Themes      │   │   records     │   │ - Decoding    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (record, query, form, errors)               │
//! │  Infrastructure (sandbox paths)                     │
//! │  Observability (OpenTelemetry → OTLP-JSON file)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/commentary.wasm" {
//!         endpoint "https://jsonplaceholder.typicode.com/comments"
//!         record_limit "300"
//!         page_size "10"
//!         theme "dark"
//!         light_theme "catppuccin-latte"
//!         dark_theme "~/.config/commentary/night.toml"
//!         toast_seconds "3"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use commentary::{handle_event, initialize, Config, Event, LoadState};
//!
//! let mut state = initialize(&Config::default());
//! let body = br#"[{"postId":1,"id":1,"name":"a","email":"a@x.io","body":"hi"}]"#;
//! handle_event(&mut state, &Event::RecordsFetched { status: 200, body: body.to_vec() })?;
//! assert_eq!(state.load, LoadState::Ready);
//! assert_eq!(state.view.len(), 1);
//! # Ok::<(), commentary::CommentaryError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod source;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, LoadState, ThemeMode};
pub use domain::{CommentaryError, Record, Result};
pub use ui::{Theme, ThemePair};

use app::notifications::{ToastQueue, DEFAULT_TOAST_SECONDS};
use domain::PageSize;
use source::{FetchRequest, DEFAULT_RECORD_LIMIT};
use std::collections::BTreeMap;
use ui::theme::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};

/// Endpoint fetched when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/comments";

/// Plugin configuration parsed from Zellij's KDL plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL returning a JSON array of comments.
    pub endpoint: String,

    /// Number of fetched comments kept. Default: 300
    pub record_limit: usize,

    /// Initial rows per page, one of 5, 10, 20 or 50. Default: 10
    pub page_size: PageSize,

    /// Mode the plugin starts in. Default: light
    pub theme_mode: ThemeMode,

    /// Built-in theme name or `.toml` path for light mode.
    pub light_theme: String,

    /// Built-in theme name or `.toml` path for dark mode.
    pub dark_theme: String,

    /// Seconds a toast stays visible. Default: 3
    pub toast_seconds: u64,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            record_limit: DEFAULT_RECORD_LIMIT,
            page_size: PageSize::default(),
            theme_mode: ThemeMode::default(),
            light_theme: DEFAULT_LIGHT_THEME.to_string(),
            dark_theme: DEFAULT_DARK_THEME.to_string(),
            toast_seconds: DEFAULT_TOAST_SECONDS,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses Zellij's configuration map, falling back to defaults for
    /// missing, blank or unparsable values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use commentary::{Config, ThemeMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "20".to_string());
    /// map.insert("theme".to_string(), "Dark".to_string());
    /// map.insert("record_limit".to_string(), "lots".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size.rows(), 20);
    /// assert_eq!(config.theme_mode, ThemeMode::Dark);
    /// assert_eq!(config.record_limit, 300);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        Self {
            endpoint: get("endpoint").map_or(defaults.endpoint, String::from),
            record_limit: get("record_limit")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(defaults.record_limit),
            page_size: get("page_size")
                .and_then(|s| s.parse::<usize>().ok())
                .and_then(PageSize::from_rows)
                .unwrap_or(defaults.page_size),
            theme_mode: get("theme")
                .and_then(ThemeMode::parse)
                .unwrap_or(defaults.theme_mode),
            light_theme: get("light_theme").map_or(defaults.light_theme, String::from),
            dark_theme: get("dark_theme").map_or(defaults.dark_theme, String::from),
            toast_seconds: get("toast_seconds")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(defaults.toast_seconds),
            trace_level: get("trace_level").map(String::from),
        }
    }
}

/// Builds the initial `AppState` for `config`.
///
/// Themes that fail to resolve fall back to the built-in default for their
/// mode. The state starts in the loading phase; the shim issues the fetch
/// once web access is granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing commentary plugin");

    let defaults = ThemePair::default();
    let resolve = |spec: &str, fallback: Theme| {
        Theme::resolve(spec).unwrap_or_else(|e| {
            tracing::warn!(theme = %spec, error = %e, "failed to load theme, using default");
            fallback
        })
    };
    let themes = ThemePair {
        light: resolve(&config.light_theme, defaults.light),
        dark: resolve(&config.dark_theme, defaults.dark),
    };

    let mut state = AppState::new(vec![], themes);
    state.page_size = config.page_size;
    state.theme_mode = config.theme_mode;
    state.toasts = ToastQueue::new(config.toast_seconds);
    state.request = FetchRequest::from_config(config);
    state.record_limit = config.record_limit;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn page_size_outside_the_choices_is_ignored() {
        let config = Config::from_zellij(&map(&[("page_size", "7")]));
        assert_eq!(config.page_size, PageSize::Ten);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = Config::from_zellij(&map(&[("endpoint", "  "), ("trace_level", "")]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "http://localhost:8080/comments"),
            ("theme", "dark"),
            ("page_size", "5"),
            ("record_limit", "25"),
            ("dark_theme", "catppuccin-frappe"),
            ("light_theme", "no-such-theme"),
        ]));
        let state = initialize(&config);

        assert_eq!(state.load, LoadState::Loading);
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert_eq!(state.theme().name, "catppuccin-frappe");
        assert_eq!(state.themes.light.name, DEFAULT_LIGHT_THEME);
        assert_eq!(state.page_size, PageSize::Five);
        assert_eq!(state.record_limit, 25);
        assert_eq!(state.request.url, "http://localhost:8080/comments");
    }
}
