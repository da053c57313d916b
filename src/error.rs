//! Error types for gistcloak operations.
//!
//! This module defines [`GistError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems are reported before any network call is made
//! - API and git failures propagate unchanged and end the run
//! - Use `anyhow::Error` (via `GistError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gistcloak operations.
#[derive(Debug, Error)]
pub enum GistError {
    /// No `fetch` or `conceal` command was given.
    #[error("No command given (expected `fetch` or `conceal`)")]
    MissingCommand,

    /// No GitHub token was provided by flag or environment.
    #[error("No GitHub token given (use --github-token or set GITHUB_TOKEN)")]
    MissingToken,

    /// Throttle value was negative or not a number.
    #[error("Invalid throttle '{value}': {message}")]
    InvalidThrottle { value: String, message: String },

    /// A description or filename pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The gist API answered with a non-success status.
    #[error("GitHub API {method} {url} returned {status}: {message}")]
    Api {
        method: String,
        url: String,
        status: u16,
        message: String,
    },

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A git invocation failed.
    #[error("git {command} failed: {message}")]
    Git { command: String, message: String },

    /// Input log could not be used.
    #[error("Failed to read input log {path}: {message}")]
    InputLog { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON from the API.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GistError {
    /// Whether this error was raised while resolving options, before any I/O.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCommand
                | Self::MissingToken
                | Self::InvalidThrottle { .. }
                | Self::InvalidPattern { .. }
        )
    }
}

/// Result type alias for gistcloak operations.
pub type Result<T> = std::result::Result<T, GistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_mentions_flag_and_env() {
        let msg = GistError::MissingToken.to_string();
        assert!(msg.contains("--github-token"));
        assert!(msg.contains("GITHUB_TOKEN"));
    }

    #[test]
    fn invalid_throttle_displays_value() {
        let err = GistError::InvalidThrottle {
            value: "-5".into(),
            message: "must not be negative".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("-5"));
        assert!(msg.contains("must not be negative"));
    }

    #[test]
    fn api_error_displays_status_and_url() {
        let err = GistError::Api {
            method: "DELETE".into(),
            url: "https://api.github.com/gists/abc".into(),
            status: 404,
            message: "Not Found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("DELETE"));
        assert!(msg.contains("/gists/abc"));
        assert!(msg.contains("404"));
        assert!(msg.contains("Not Found"));
    }

    #[test]
    fn git_error_displays_command() {
        let err = GistError::Git {
            command: "push".into(),
            message: "permission denied".into(),
        };
        assert_eq!(err.to_string(), "git push failed: permission denied");
    }

    #[test]
    fn config_errors_are_classified() {
        assert!(GistError::MissingCommand.is_config_error());
        assert!(GistError::MissingToken.is_config_error());
        assert!(GistError::InvalidPattern {
            pattern: "(".into(),
            message: "unclosed group".into(),
        }
        .is_config_error());
        assert!(!GistError::Git {
            command: "clone".into(),
            message: "x".into(),
        }
        .is_config_error());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GistError = io_err.into();
        assert!(matches!(err, GistError::Io(_)));
    }
}
