//! The UI notification channel.
//!
//! Cart mutations emit short human-readable status messages for transient
//! display. Delivery is fire-and-forget; nothing waits on or reacts to a
//! notice.

/// A transient status message (title plus one-line detail).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Headline, e.g. "Added to cart".
    pub title: String,
    /// Supporting line, e.g. "Classic Cotton Tee (Teal, M) added to cart".
    pub detail: String,
}

impl Notice {
    /// Create a notice.
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Receiver for cart status messages.
pub trait Notifier {
    /// Deliver a notice. Must not fail; drop it if there is nowhere to show it.
    fn notify(&self, notice: Notice);
}

/// A notifier that discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notice: Notice) {}
}
