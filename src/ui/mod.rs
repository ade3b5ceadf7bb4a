//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers (header, table, form, toasts, ...)
//! - [`helpers`]: Character-width utilities and match highlighting
//! - [`theme`]: Light/dark palettes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemePair};
pub use viewmodel::{
    ColumnHeaders, DisplayItem, EmptyState, FooterInfo, FormFieldInfo, FormInfo, HeaderInfo,
    PagerInfo, SearchBarInfo, ToastInfo, UIViewModel,
};
