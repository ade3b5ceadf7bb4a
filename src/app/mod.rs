//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (`main.rs`) and the domain, store and source
//! layers.
//!
//! ```text
//! Key / host event → Event → handle_event → AppState mutations → Actions → host calls
//!                                 ↑                                   │
//!                                 └──── WebRequestResult / Timer ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input, load and theme modes
//! - [`notifications`]: Toast queue with timed expiry
//! - [`state`]: Central application state and view model computation
//!
//! # Example
//!
//! ```rust
//! use commentary::app::{handle_event, AppState, Event};
//! use commentary::ui::theme::ThemePair;
//!
//! let mut state = AppState::new(vec![], ThemePair::default());
//! let (_render, actions) = handle_event(&mut state, &Event::CloseFocus)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), commentary::domain::CommentaryError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod notifications;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, handle_event_at, Event};
pub use modes::{InputMode, LoadState, ThemeMode};
pub use notifications::{Toast, ToastKind, ToastQueue};
pub use state::{AppState, Mutation};
