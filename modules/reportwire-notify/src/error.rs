use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotificationError>;

/// Single error surface for notification dispatch.
///
/// Transport failures, malformed recipient configuration, and payload
/// construction problems all collapse into this one kind, carrying the
/// underlying cause text. The caller owns any retry or alerting policy.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct NotificationError(String);

impl NotificationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for NotificationError {
    fn from(err: reqwest::Error) -> Self {
        Self(format!("HTTP error occurred: {err}"))
    }
}

impl From<serde_json::Error> for NotificationError {
    fn from(err: serde_json::Error) -> Self {
        Self(format!("An error occurred: {err}"))
    }
}
