//! Fire-and-forget notification channel.
//!
//! The engine side only ever constructs a [`Notification`] and hands it to a
//! [`Notify`] implementation; delivery has no acknowledgment and no effect on
//! engine state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    PushupReminder,
    StandReminder,
}

/// A user-facing reminder raised on an automatic state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub description: String,
}

impl Notification {
    /// Raised when a standing countdown runs out.
    pub fn pushup_reminder() -> Self {
        Self {
            kind: NotificationKind::PushupReminder,
            message: "Time to do push-ups!".into(),
            description: "Complete your push-ups before sitting down.".into(),
        }
    }

    /// Raised when a sitting countdown runs out.
    pub fn stand_reminder() -> Self {
        Self {
            kind: NotificationKind::StandReminder,
            message: "Time to stand up!".into(),
            description: "Your sitting interval is complete.".into(),
        }
    }
}

/// Delivery seam for notifications. Implementations must not block.
pub trait Notify: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Discards every notification.
pub struct NoopNotifier;

impl Notify for NoopNotifier {
    fn notify(&self, _notification: &Notification) {}
}

/// Buffers notifications for surfaces that poll instead of push.
#[derive(Default)]
pub struct BufferNotifier {
    buffer: std::sync::Mutex<Vec<Notification>>,
}

impl BufferNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every buffered notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *buffer)
    }
}

impl Notify for BufferNotifier {
    fn notify(&self, notification: &Notification) {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.push(notification.clone());
    }
}
