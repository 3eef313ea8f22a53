use crate::models::Notification;
use flow_core::error::ClientError;
use std::time::Duration;
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 16;
const DISMISS_LABEL: &str = "OK";

/// Publishes transient notifications to whoever renders them.
///
/// Cloning shares the channel. Sending with no subscriber is not an error;
/// the message is simply dropped.
#[derive(Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notification>,
    duration: Duration,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender, duration }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn notify(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            tracing::debug!("Notification dropped, no subscribers");
        }
    }

    /// Report a failed operation: the backend's message when it sent one,
    /// otherwise `fallback`. Dismissible, auto-dismissed after the configured delay.
    pub fn notify_failure(&self, error: &ClientError, fallback: &str) {
        let message = error.user_message().unwrap_or_else(|| fallback.to_string());
        self.notify(
            Notification::error(message)
                .with_action(DISMISS_LABEL)
                .with_duration(self.duration),
        );
    }

    pub fn notify_success(&self, message: &str) {
        self.notify(Notification::info(message).with_duration(self.duration));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}
