//! Notification surface.
//!
//! Transient success/error banners raised by gateway responses. The
//! notifier is owned by the app and passed by reference into render code;
//! there is no global channel. Expiry is computed against a caller-supplied
//! instant so it can be tested without sleeping.

use std::time::{Duration, Instant};

/// How long a banner stays visible.
const DISPLAY_TIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    raised_at: Instant,
}

/// Handle for raising and draining banners.
#[derive(Debug, Default)]
pub struct Notifier {
    notifications: Vec<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(NotificationKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(NotificationKind::Error, text.into());
    }

    fn push(&mut self, kind: NotificationKind, text: String) {
        tracing::debug!(?kind, %text, "notification raised");
        self.notifications.push(Notification {
            kind,
            text,
            raised_at: Instant::now(),
        });
    }

    /// Drop banners older than the display window, then return the rest
    /// in the order they were raised.
    pub fn visible(&mut self, now: Instant) -> &[Notification] {
        self.notifications
            .retain(|n| now.duration_since(n.raised_at) < DISPLAY_TIME);
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raised_banners_are_visible_in_order() {
        let mut notifier = Notifier::new();
        notifier.success("Todo added successfully!");
        notifier.error("Error creating resource");

        let visible = notifier.visible(Instant::now());
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].kind, NotificationKind::Success);
        assert_eq!(visible[0].text, "Todo added successfully!");
        assert_eq!(visible[1].kind, NotificationKind::Error);
    }

    #[test]
    fn banners_expire_after_the_display_window() {
        let mut notifier = Notifier::new();
        notifier.success("Todo deleted!");

        let later = Instant::now() + DISPLAY_TIME + Duration::from_secs(1);
        assert!(notifier.visible(later).is_empty());

        // Once dropped, a banner stays dropped.
        assert!(notifier.visible(Instant::now() + DISPLAY_TIME * 2).is_empty());
    }

    #[test]
    fn fresh_banners_survive_a_prune_of_stale_ones() {
        let mut notifier = Notifier::new();
        notifier.error("old");
        let later = Instant::now() + DISPLAY_TIME + Duration::from_secs(1);
        notifier.visible(later);

        notifier.success("new");
        let visible = notifier.visible(Instant::now());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "new");
    }
}
