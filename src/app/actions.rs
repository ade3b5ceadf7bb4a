//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The handler returns a `Vec<Action>` after each event; the shim in
//! `main.rs` executes them in order against the Zellij host. Nothing in this
//! module touches the host itself, which keeps the handler testable off-wasm.

use crate::source::FetchRequest;

/// Commands produced by the event handler and executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the HTTP request for the comment feed.
    ///
    /// The response comes back as a `WebRequestResult` carrying the request's
    /// context map.
    FetchRecords(FetchRequest),

    /// Asks the host for a timer event after the given number of seconds.
    ///
    /// Used to expire toasts.
    ScheduleTick(f64),
}
