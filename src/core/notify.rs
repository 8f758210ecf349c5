//! Fire-and-forget informational messages after successful mutations.
//!
//! The sink is purely decorative: no acknowledgment, no retry, and nothing
//! in the ledger or storage depends on it.

pub trait NotificationSink: Send {
    fn notify(&self, title: &str, body: &str);
}

/// Sink that routes notifications to the tracing log.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, title: &str, body: &str) {
        tracing::info!(title, body, "notification");
    }
}
