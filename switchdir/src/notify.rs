//! User-facing notifications
//!
//! Detail views raise a transient error notification when the store
//! fails. Search failures never notify.

use tokio::sync::mpsc;
use tracing::warn;

/// Receiver of transient user notifications
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Show an error notification
    fn error(&self, message: &str);
}

/// Writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        warn!("{}", message);
    }
}

/// A notification waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// Forwards notifications over a channel, for a UI to display
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn error(&self, message: &str) {
        let notification = Notification {
            message: message.to_string(),
        };

        if self.tx.send(notification).is_err() {
            warn!("Notification dropped, no receiver: {}", message);
        }
    }
}
