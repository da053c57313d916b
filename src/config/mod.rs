//! Run configuration.
//!
//! - [`pattern`] - Description and filename filters
//! - [`options`] - Option resolution and validation

pub mod options;
pub mod pattern;

pub use options::{
    parse_throttle, CommandKind, GistFilters, Options, RawOptions, DEFAULT_THROTTLE,
};
pub use pattern::{GistFilter, GistPattern};
