//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are routed by [`CommandDispatcher`], which resolves the run
//! options once and hands the fetch and conceal commands a shared API
//! client.

pub mod completions;
pub mod conceal;
pub mod dispatcher;
pub mod fetch;

pub use completions::CompletionsCommand;
pub use conceal::ConcealCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use fetch::FetchCommand;
