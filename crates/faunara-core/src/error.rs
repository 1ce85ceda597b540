//! Application error types with request-flow classification

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Phrase the service uses when an image matches nothing in its database.
pub const NO_MATCH_PHRASE: &str = "No similar animal found";

/// Structured error code for the same condition, preferred over the phrase.
pub const NO_MATCH_CODE: &str = "no_match";

/// Shown when a failure carries no message of its own.
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// How a failed submission is classified for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Rejected locally before any network call
    Validation,
    /// The service answered without a JSON content type
    Transport,
    /// The service answered with a JSON `error`
    Domain,
    /// Anything else (connection failures, unreadable files, malformed JSON)
    Unknown,
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Request Flow Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Please fill at least one attribute.")]
    MissingAttributes,

    #[error("Server returned non-JSON response. Status: {status}. Response: {excerpt}")]
    Transport { status: u16, excerpt: String },

    #[error("{message}")]
    Domain {
        status: u16,
        message: String,
        code: Option<String>,
    },

    #[error("Failed to reach server: {message}")]
    Network { message: String },

    #[error("Could not read image {path}: {reason}")]
    ImageRead { path: PathBuf, reason: String },

    #[error("{message}")]
    Unknown { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn transport(status: u16, excerpt: impl Into<String>) -> Self {
        Self::Transport {
            status,
            excerpt: excerpt.into(),
        }
    }

    pub fn domain(status: u16, message: impl Into<String>, code: Option<String>) -> Self {
        Self::Domain {
            status,
            message: message.into(),
            code,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn image_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ImageRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Classify this error for rendering a failed submission
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::MissingAttributes => ErrorClass::Validation,
            Error::Transport { .. } => ErrorClass::Transport,
            Error::Domain { .. } => ErrorClass::Domain,
            _ => ErrorClass::Unknown,
        }
    }

    /// True when the service reported that nothing in its database matched.
    ///
    /// The structured code wins; the phrase match only exists for servers
    /// that do not send a code.
    pub fn is_no_match(&self) -> bool {
        match self {
            Error::Domain { message, code, .. } => match code.as_deref() {
                Some(code) => code == NO_MATCH_CODE,
                None => message.contains(NO_MATCH_PHRASE),
            },
            _ => false,
        }
    }

    /// Message shown to the user in a result panel
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    }
}

/// A failed submission reduced to what the UI needs.
///
/// `Error` is not `Clone`, so completions travel through the message loop as
/// this summary instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowError {
    pub class: ErrorClass,
    pub message: String,
    pub no_match: bool,
}

impl FlowError {
    pub fn is_no_match(&self) -> bool {
        self.no_match
    }
}

impl From<&Error> for FlowError {
    fn from(err: &Error) -> Self {
        Self {
            class: err.class(),
            message: err.user_message(),
            no_match: err.is_no_match(),
        }
    }
}

impl From<Error> for FlowError {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::transport(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err.to_string(),
            "Server returned non-JSON response. Status: 502. Response: <html>Bad Gateway</html>"
        );

        let err = Error::domain(400, "Name is required", None);
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.class(), ErrorClass::Unknown);
    }

    #[test]
    fn test_error_classes() {
        assert_eq!(Error::MissingAttributes.class(), ErrorClass::Validation);
        assert_eq!(Error::transport(500, "").class(), ErrorClass::Transport);
        assert_eq!(Error::domain(404, "x", None).class(), ErrorClass::Domain);
        assert_eq!(Error::network("refused").class(), ErrorClass::Unknown);
        assert_eq!(
            Error::image_read("/tmp/cat.png", "missing").class(),
            ErrorClass::Unknown
        );
    }

    #[test]
    fn test_no_match_by_phrase() {
        let err = Error::domain(404, "No similar animal found in database", None);
        assert!(err.is_no_match());

        let err = Error::domain(404, "No animals in database to compare", None);
        assert!(!err.is_no_match());
    }

    #[test]
    fn test_no_match_code_takes_precedence() {
        let err = Error::domain(404, "Nothing close enough", Some("no_match".to_string()));
        assert!(err.is_no_match());

        let err = Error::domain(
            404,
            "No similar animal found in database",
            Some("empty_database".to_string()),
        );
        assert!(!err.is_no_match());
    }

    #[test]
    fn test_no_match_only_for_domain_errors() {
        let err = Error::unknown("No similar animal found");
        assert!(!err.is_no_match());
    }

    #[test]
    fn test_user_message_falls_back_when_empty() {
        assert_eq!(Error::unknown("").user_message(), GENERIC_FAILURE);
        assert_eq!(Error::domain(500, "  ", None).user_message(), GENERIC_FAILURE);
        assert_eq!(Error::unknown("boom").user_message(), "boom");
    }

    #[test]
    fn test_flow_error_summary() {
        let flow = FlowError::from(Error::domain(
            404,
            "No similar animal found in database",
            None,
        ));
        assert_eq!(flow.class, ErrorClass::Domain);
        assert!(flow.is_no_match());
        assert_eq!(flow.message, "No similar animal found in database");

        let flow = FlowError::from(&Error::MissingAttributes);
        assert_eq!(flow.class, ErrorClass::Validation);
        assert!(!flow.no_match);
    }
}
