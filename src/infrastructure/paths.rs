//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is reachable under `/host`, which
//! points at the directory Zellij was started from (usually the user's home).

use std::path::PathBuf;

/// Returns the directory holding the plugin's trace file.
///
/// Resolves to `/host/.local/share/zellij/commentary`, i.e.
/// `~/.local/share/zellij/commentary` on the host when Zellij runs from home.
///
/// # Examples
///
/// ```
/// use commentary::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("zellij/commentary"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("commentary")
}

/// Rewrites a leading `~` to the sandbox `/host` mount.
///
/// # Examples
///
/// ```
/// use commentary::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
