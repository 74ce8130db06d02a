//! Notification fan-out for editor and publication events
//!
//! Presentation layers subscribe with a weak reference and render incoming
//! notifications as toasts; dropped subscribers are pruned on the next
//! broadcast.

use std::sync::Weak;

use uuid::Uuid;

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A single toast-style notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// Stable identity so a presentation layer can dismiss or dedup
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Trait for components that want to be notified of editor events
pub trait EditorSubscriber: Send + Sync {
    fn on_notification(&self, notification: Notification);
}

/// Broadcast list of weak subscriber references
#[derive(Default)]
pub struct NotificationHub {
    subscribers: Vec<Weak<dyn EditorSubscriber>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Weak<dyn EditorSubscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Deliver to live subscribers, pruning dead weak references.
    pub fn broadcast(&mut self, notification: Notification) {
        self.subscribers.retain(|weak| {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_notification(notification.clone());
                true
            } else {
                false
            }
        });
    }
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("subscriber_count", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Notification>>,
    }

    impl EditorSubscriber for Recorder {
        fn on_notification(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }

    #[test]
    fn broadcast_reaches_live_subscribers() {
        let recorder = Arc::new(Recorder::default());
        let mut hub = NotificationHub::new();
        let subscriber: Arc<dyn EditorSubscriber> = recorder.clone();
        let weak: Weak<dyn EditorSubscriber> = Arc::downgrade(&subscriber);
        hub.subscribe(weak);

        hub.broadcast(Notification::success("guardado"));

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, NotificationKind::Success);
    }

    #[test]
    fn dead_subscribers_are_pruned() {
        let mut hub = NotificationHub::new();
        {
            let recorder = Arc::new(Recorder::default());
            let subscriber: Arc<dyn EditorSubscriber> = recorder.clone();
            let weak: Weak<dyn EditorSubscriber> = Arc::downgrade(&subscriber);
            hub.subscribe(weak);
        }
        hub.broadcast(Notification::error("se fue"));
        assert_eq!(format!("{hub:?}"), "NotificationHub { subscriber_count: 0 }");
    }
}
