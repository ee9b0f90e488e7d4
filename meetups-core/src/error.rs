//! Error types for the meetups client.

use thiserror::Error;

/// Errors that can occur while talking to the events API or loading configuration.
///
/// Formatting problems never show up here: the time formatter degrades to
/// the original string instead of failing.
#[derive(Error, Debug)]
pub enum MeetupsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("{}", describe_status(*status, message.as_deref()))]
    Status { status: u16, message: Option<String> },

    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

fn describe_status(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("Request failed with status code {status}: {message}"),
        None => format!("Request failed with status code {status}"),
    }
}

impl MeetupsError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            MeetupsError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message the server put in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            MeetupsError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The server's own message when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Result type alias for meetups operations.
pub type MeetupsResult<T> = Result<T, MeetupsError>;
