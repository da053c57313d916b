//! gistcloak - Turn public gists into secret ones.
//!
//! gistcloak lists a user's public gists, optionally filtered by regular
//! expressions on the description and file names, and can replace each of
//! them with a secret copy carrying the same files before deleting the
//! public original.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run options, throttle and filter patterns
//! - [`error`] - Error types and result aliases
//! - [`gists`] - Listing and concealing gists
//! - [`github`] - Gist API types and HTTP client
//! - [`report`] - Fetch/conceal reports and input logs
//! - [`transfer`] - Copying gist content through git
//! - [`ui`] - Spinners and styled status output
//!
//! # Example
//!
//! ```
//! use gistcloak::config::{GistFilter, GistPattern};
//!
//! let filter = GistFilter::from(Some(GistPattern::parse("/^output-/i").unwrap()));
//! assert!(filter.matches_any(["notes.md", "Output-1.txt"].into_iter()));
//! assert!(!filter.matches_any(["notes.md"].into_iter()));
//! ```
//!
//! For end-to-end runs against a mock API, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod gists;
pub mod github;
pub mod report;
pub mod transfer;
pub mod ui;

pub use error::{GistError, Result};
