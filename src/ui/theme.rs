//! Theme management and ANSI escape sequence generation.
//!
//! The plugin always carries two palettes, one for light and one for dark mode,
//! and the `t` key flips between them. Each palette is either a built-in
//! Catppuccin flavour or a custom TOML file.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: Light theme (default light palette)
//! - `catppuccin-mocha`: Dark theme (default dark palette)
//! - `catppuccin-frappe`: Cooler dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! form_border = "#cba6f7"
//! form_label_fg = "#cba6f7"
//! badge_fg = "#1e1e2e"
//! badge_bg = "#89b4fa"
//! toast_fg = "#1e1e2e"
//! toast_success_bg = "#a6e3a1"
//! toast_info_bg = "#89b4fa"
//! toast_error_bg = "#f38ba8"
//! ```

use crate::app::modes::ThemeMode;
use crate::app::notifications::ToastKind;
use crate::domain::error::{CommentaryError, Result};
use crate::infrastructure::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in palette used for light mode unless configured otherwise.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Built-in palette used for dark mode unless configured otherwise.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, pager and other secondary text.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Loading and "no results" message color.
    pub empty_state_fg: String,
    /// Fetch failure message color.
    pub error_fg: String,

    pub form_border: String,
    pub form_label_fg: String,

    /// Theme mode badge in the header.
    pub badge_fg: String,
    pub badge_bg: String,

    pub toast_fg: String,
    pub toast_success_bg: String,
    pub toast_info_bg: String,
    pub toast_error_bg: String,
}

impl ThemeColors {
    /// Background color for a toast of the given kind.
    #[must_use]
    pub fn toast_bg(&self, kind: ToastKind) -> &str {
        match kind {
            ToastKind::Success => &self.toast_success_bg,
            ToastKind::Info => &self.toast_info_bg,
            ToastKind::Error => &self.toast_error_bg,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of the built-ins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commentary::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-mocha").unwrap();
    /// assert_eq!(theme.name, "catppuccin-mocha");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CommentaryError::Theme`] if the file cannot be read or does
    /// not parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            CommentaryError::Theme(format!(
                "failed to read theme file {}: {e}",
                path.as_ref().display()
            ))
        })?;

        toml::from_str(&contents)
            .map_err(|e| CommentaryError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Resolves a configured theme: a `.toml` path is read from disk, anything
    /// else is looked up among the built-ins.
    ///
    /// # Errors
    ///
    /// Returns [`CommentaryError::Theme`] for unknown names and unreadable files.
    pub fn resolve(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if Path::new(spec)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
        {
            return Self::from_file(expand_tilde(spec));
        }

        Self::from_name(spec).ok_or_else(|| CommentaryError::Theme(format!("unknown theme '{spec}'")))
    }

    /// Converts a hex color to RGB. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default light palette.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which would be a build defect.
    fn default() -> Self {
        Self::from_name(DEFAULT_LIGHT_THEME).expect("embedded catppuccin-latte theme parses")
    }
}

/// The light and dark palettes the user toggles between.
#[derive(Debug, Clone)]
pub struct ThemePair {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemePair {
    /// Palette for `mode`.
    #[must_use]
    pub const fn get(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for ThemePair {
    /// # Panics
    ///
    /// Panics if an embedded theme fails to parse, which would be a build defect.
    fn default() -> Self {
        Self {
            light: Theme::default(),
            dark: Theme::from_name(DEFAULT_DARK_THEME).expect("embedded catppuccin-mocha theme parses"),
        }
    }
}
