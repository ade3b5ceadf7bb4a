//! Input, load and theme mode types for the application.
//!
//! These enums decide which keybindings are active, what the main screen
//! shows and which palette it is drawn with.
//!
//! # State Machine
//!
//! ```text
//!            '/'                 'a' / 'e'
//!  Search ◀──────── Normal ────────────────▶ Form(field)
//!    │  Esc / Enter   ▲     Enter (valid) / Esc   │
//!    └────────────────┘◀─────────────────────────┘
//! ```

use crate::domain::FormField;

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Browsing the table: navigation, paging, sorting and record commands.
    Normal,

    /// Typing into the search bar. Every keystroke re-filters the view.
    Search,

    /// Typing into the add/edit form; the field has keyboard focus.
    Form(FormField),
}

/// Progress of the one-shot startup fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Request issued (or waiting for permission), no answer yet.
    Loading,

    /// Records are in the store.
    Ready,

    /// The fetch failed; the message replaces the entire UI.
    Failed(String),
}

/// Which of the two palettes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name, as accepted by the `theme` configuration key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses `light` or `dark`, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}
