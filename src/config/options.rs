//! Run options.
//!
//! [`RawOptions`] collects whatever the command line and environment
//! supplied; [`RawOptions::resolve`] fills in defaults and validates it into
//! an immutable [`Options`] value that is passed to every component.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{GistError, Result};
use crate::github::DEFAULT_API_URL;

use super::pattern::{GistFilter, GistPattern};

/// Default delay between remote calls.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(4000);

/// The operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// List matching public gists.
    Fetch,
    /// Replace gists with secret copies.
    Conceal,
}

impl CommandKind {
    /// Lowercase command name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Conceal => "conceal",
        }
    }
}

/// Description and filename filters applied by the lister.
#[derive(Debug, Clone, Default)]
pub struct GistFilters {
    pub description: GistFilter,
    pub filename: GistFilter,
}

/// Unvalidated options as supplied by flags and environment.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub command: Option<CommandKind>,
    pub token: Option<String>,
    pub throttle: Option<Duration>,
    pub description: Option<GistPattern>,
    pub filename: Option<GistPattern>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub api_url: Option<String>,
}

/// Validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Options {
    pub command: CommandKind,
    pub token: String,
    pub throttle: Duration,
    pub filters: GistFilters,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub api_url: String,
}

impl RawOptions {
    /// Apply defaults and validate.
    ///
    /// Fails when the command or token is missing.
    pub fn resolve(self) -> Result<Options> {
        let command = self.command.ok_or(GistError::MissingCommand)?;
        let token = self
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or(GistError::MissingToken)?;

        Ok(Options {
            command,
            token,
            throttle: self.throttle.unwrap_or(DEFAULT_THROTTLE),
            filters: GistFilters {
                description: self.description.into(),
                filename: self.filename.into(),
            },
            input: self.input,
            output: self.output,
            api_url: self
                .api_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

/// Parse a throttle given in milliseconds.
///
/// Fractional values are accepted. Negative, non-numeric and non-finite
/// values are rejected.
pub fn parse_throttle(text: &str) -> Result<Duration> {
    let invalid = |message: &str| GistError::InvalidThrottle {
        value: text.to_string(),
        message: message.to_string(),
    };

    let millis: f64 = text
        .trim()
        .parse()
        .map_err(|_| invalid("expected a number of milliseconds"))?;

    if !millis.is_finite() {
        return Err(invalid("expected a finite number of milliseconds"));
    }
    if millis < 0.0 {
        return Err(invalid("must not be negative"));
    }

    Ok(Duration::from_micros((millis * 1000.0) as u64))
}
