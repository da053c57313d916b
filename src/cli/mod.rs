//! Command-line interface for gistcloak.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
