//! User-facing notifications
//!
//! Components that need to tell the user something receive a [`Notifier`] instead of
//! reaching for shared state. The terminal UI backs it with [`StatusNotifier`], a single
//! transient status line that expires on its own.

use std::time::{Duration, Instant};

use crate::error::ApiError;

/// Duration for success status messages (milliseconds)
pub const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
pub const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Info,
    Error,
}

impl MessageType {
    fn duration(&self) -> Duration {
        match self {
            MessageType::Success | MessageType::Info => {
                Duration::from_millis(STATUS_SUCCESS_DURATION_MS)
            }
            MessageType::Error => Duration::from_millis(STATUS_ERROR_DURATION_MS),
        }
    }
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub trait Notifier {
    fn notify(&mut self, text: &str, message_type: MessageType);

    fn success(&mut self, text: &str) {
        self.notify(text, MessageType::Success);
    }

    fn error(&mut self, text: &str) {
        self.notify(text, MessageType::Error);
    }

    /// Report a backend failure using its user-facing wording
    ///
    /// For a dashboard client that fetches the catalog over HTTP and turns failed
    /// responses into [`ApiError::from_response`]; file-based runs never reach it.
    fn api_error(&mut self, err: &ApiError) {
        self.notify(&err.user_message(), MessageType::Error);
    }

    /// Message to display right now, if the notifier keeps one
    fn current(&self) -> Option<&StatusMessage> {
        None
    }

    /// Drop an expired message. Returns true when the display needs a redraw.
    fn clear_expired(&mut self) -> bool {
        false
    }
}

/// Holds at most one message; a new message replaces the old one
#[derive(Debug, Default)]
pub struct StatusNotifier {
    current: Option<StatusMessage>,
}

impl StatusNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    /// Set a message with an explicit lifetime
    pub fn set(&mut self, text: impl Into<String>, message_type: MessageType, duration: Duration) {
        self.current = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + duration,
        });
    }

    /// Drop the message if it has expired. Returns true when something was cleared.
    pub fn clear_expired(&mut self) -> bool {
        let expired =
            self.current.as_ref().map(|msg| Instant::now() >= msg.expires_at).unwrap_or(false);
        if expired {
            self.current = None;
        }
        expired
    }
}

impl Notifier for StatusNotifier {
    fn notify(&mut self, text: &str, message_type: MessageType) {
        self.set(text, message_type, message_type.duration());
    }

    fn current(&self) -> Option<&StatusMessage> {
        StatusNotifier::current(self)
    }

    fn clear_expired(&mut self) -> bool {
        StatusNotifier::clear_expired(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;

    #[test]
    fn test_success_message() {
        let mut notifier = StatusNotifier::new();
        notifier.success("Copied");

        let msg = notifier.current().unwrap();
        assert_eq!(msg.text, "Copied");
        assert_eq!(msg.message_type, MessageType::Success);
        assert!(msg.expires_at > Instant::now());
    }

    #[test]
    fn test_message_replacement() {
        let mut notifier = StatusNotifier::new();
        notifier.success("first");
        notifier.error("second");

        let msg = notifier.current().unwrap();
        assert_eq!(msg.text, "second");
        assert_eq!(msg.message_type, MessageType::Error);
    }

    #[test]
    fn test_clear_expired() {
        let mut notifier = StatusNotifier::new();
        notifier.set("Expired", MessageType::Success, Duration::ZERO);
        std::thread::sleep(Duration::from_millis(1));

        assert!(notifier.clear_expired());
        assert!(notifier.current().is_none());
        assert!(!notifier.clear_expired());
    }

    #[test]
    fn test_clear_expired_keeps_active() {
        let mut notifier = StatusNotifier::new();
        notifier.set("Active", MessageType::Info, Duration::from_secs(10));

        assert!(!notifier.clear_expired());
        assert_eq!(notifier.current().unwrap().text, "Active");
    }

    #[test]
    fn test_api_error_uses_user_message() {
        let mut notifier = StatusNotifier::new();
        notifier.api_error(&ApiError::new(ApiErrorKind::Unauthorized, "token expired at 12:00"));

        let msg = notifier.current().unwrap();
        assert_eq!(msg.text, "Session expired, please sign in again");
        assert_eq!(msg.message_type, MessageType::Error);
    }
}
