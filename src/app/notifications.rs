//! Toast notifications.
//!
//! Toasts are short banners confirming local mutations, theme switches and
//! validation failures. Each carries an expiry instant; the plugin shim
//! schedules a host timer while any toast is alive and the handler drops
//! expired ones on every tick.

use chrono::{DateTime, Duration, Utc};

/// Seconds a toast stays on screen when not configured otherwise.
pub const DEFAULT_TOAST_SECONDS: u64 = 3;

/// Upper bound on a toast's lifetime.
pub const MAX_TOAST_SECONDS: u64 = 3600;

/// Maximum number of toasts kept at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

/// Semantic kind of a toast, selecting its palette colors and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    /// Single-character icon prefixed to the message.
    #[must_use]
    pub const fn icon(self) -> char {
        match self {
            Self::Success => '✓',
            Self::Info => 'i',
            Self::Error => '✗',
        }
    }
}

/// A single notification banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

/// Live toasts, oldest first.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl ToastQueue {
    /// Creates an empty queue whose toasts live for `lifetime_secs`.
    #[must_use]
    pub fn new(lifetime_secs: u64) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            lifetime: Duration::seconds(i64::try_from(lifetime_secs.min(MAX_TOAST_SECONDS)).unwrap_or(0)),
        }
    }

    /// Adds a toast and returns its id.
    ///
    /// When the queue is full the oldest toast is dropped.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let message = message.into();
        tracing::debug!(toast_id = id, kind = ?kind, message = %message, "toast pushed");

        self.items.push(Toast {
            id,
            kind,
            message,
            expires_at: now + self.lifetime,
        });

        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }

        id
    }

    /// Drops every toast whose expiry is at or before `now`.
    ///
    /// Returns `true` if anything was removed.
    pub fn expire(&mut self, now: DateTime<Utc>) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.expires_at > now);
        let removed = before - self.items.len();
        if removed > 0 {
            tracing::trace!(removed, remaining = self.items.len(), "toasts expired");
        }
        removed > 0
    }

    /// Seconds from `now` until the earliest toast expires, `None` when empty.
    #[must_use]
    pub fn next_expiry_in(&self, now: DateTime<Utc>) -> Option<f64> {
        self.items.iter().map(|toast| toast.expires_at).min().map(|expiry| {
            #[allow(clippy::cast_precision_loss)]
            let millis = (expiry - now).num_milliseconds().max(0) as f64;
            millis / 1000.0
        })
    }

    /// Toasts currently on screen, oldest first.
    #[must_use]
    pub fn visible(&self) -> &[Toast] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_SECONDS)
    }
}
