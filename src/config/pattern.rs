//! Description and filename filters.
//!
//! Patterns are accepted either as `/body/flags` or as a bare regex body,
//! and are compiled once when options are parsed.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::error::{GistError, Result};

/// A compiled user-supplied pattern.
///
/// # Example
///
/// ```
/// use gistcloak::config::GistPattern;
///
/// let pattern: GistPattern = "/^OUTPUT-/i".parse().unwrap();
/// assert_eq!(pattern.body(), "^OUTPUT-");
/// assert_eq!(pattern.flags(), "i");
/// assert!(pattern.is_match("output-1.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct GistPattern {
    body: String,
    flags: String,
    regex: Regex,
}

impl GistPattern {
    /// Parse pattern text leniently.
    ///
    /// `/body/flags` is split into body and flags when everything after the
    /// last slash is letters; any other text is used verbatim as the body.
    pub fn parse(text: &str) -> Result<Self> {
        let (body, flags) = split_delimited(text).unwrap_or((text, ""));
        Self::with_flags(body, flags)
    }

    /// Compile a body with an explicit flag string.
    pub fn with_flags(body: &str, flags: &str) -> Result<Self> {
        let mut builder = RegexBuilder::new(body);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'x' => {
                    builder.ignore_whitespace(true);
                }
                // No meaning for a yes/no match.
                'g' | 'y' | 'u' => {}
                other => {
                    return Err(GistError::InvalidPattern {
                        pattern: format!("/{}/{}", body, flags),
                        message: format!("unsupported flag '{}'", other),
                    });
                }
            }
        }

        let regex = builder.build().map_err(|e| GistError::InvalidPattern {
            pattern: body.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            body: body.to_string(),
            flags: flags.to_string(),
            regex,
        })
    }

    /// The regex body without delimiters.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The flag letters, empty for bare patterns.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Test a haystack against the compiled pattern.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl FromStr for GistPattern {
    type Err = GistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for GistPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.body, self.flags)
    }
}

fn split_delimited(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix('/')?;
    let close = rest.rfind('/')?;
    let (body, flags) = (&rest[..close], &rest[close + 1..]);
    if flags.chars().all(|c| c.is_ascii_alphabetic()) {
        Some((body, flags))
    } else {
        None
    }
}

/// A description or filename filter.
///
/// The default filter accepts everything, including gists without a
/// description or without files.
#[derive(Debug, Clone, Default)]
pub enum GistFilter {
    /// Match everything.
    #[default]
    Any,
    /// Match with a user-supplied pattern.
    Pattern(GistPattern),
}

impl GistFilter {
    /// Test a single value.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Pattern(pattern) => pattern.is_match(value),
        }
    }

    /// Test whether at least one of the values matches.
    pub fn matches_any<'a>(&self, mut values: impl Iterator<Item = &'a str>) -> bool {
        match self {
            Self::Any => true,
            Self::Pattern(pattern) => values.any(|v| pattern.is_match(v)),
        }
    }

    /// Whether this is the match-everything filter.
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl From<Option<GistPattern>> for GistFilter {
    fn from(pattern: Option<GistPattern>) -> Self {
        pattern.map(Self::Pattern).unwrap_or_default()
    }
}

impl fmt::Display for GistFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "<any>"),
            Self::Pattern(pattern) => write!(f, "{}", pattern),
        }
    }
}
