use std::fmt;
use std::time::Duration;

/// Message shown whenever a request fails without a structured error body
pub const FAILURE_MESSAGE: &str = "Something went wrong while processing your request!";

const NOTE_DURATION: Duration = Duration::from_secs(3);
const FAILURE_DURATION: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Note,
    Failure,
}

/// A transient message for the client shell to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    pub duration: Duration,
}

impl Notification {
    pub fn note(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: NotificationKind::Note,
            text: text.into(),
            duration,
        }
    }

    /// Short confirmation after a successful request
    pub fn success(text: impl Into<String>) -> Self {
        Self::note(text, NOTE_DURATION)
    }

    /// Generic failure notice
    pub fn fail() -> Self {
        Self {
            kind: NotificationKind::Failure,
            text: FAILURE_MESSAGE.to_string(),
            duration: FAILURE_DURATION,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NotificationKind::Note => write!(f, "[note] {}", self.text),
            NotificationKind::Failure => write!(f, "[error] {}", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_is_generic_and_long_lived() {
        let notification = Notification::fail();

        assert_eq!(notification.kind, NotificationKind::Failure);
        assert_eq!(notification.text, FAILURE_MESSAGE);
        assert_eq!(notification.duration, Duration::from_secs(10));
        assert_eq!(notification.to_string(), format!("[error] {}", FAILURE_MESSAGE));
    }

    #[test]
    fn test_note_keeps_text_and_duration() {
        let notification = Notification::note("Saved", Duration::from_secs(1));

        assert_eq!(notification.to_string(), "[note] Saved");
        assert_eq!(notification.duration, Duration::from_secs(1));
    }
}
