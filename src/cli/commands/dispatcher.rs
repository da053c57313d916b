//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::CommandKind;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::transfer::GitTransfer;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for status output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// Options are resolved and validated before the API client is built,
    /// so configuration errors never reach the network.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(Commands::Completions(args)) = &cli.command {
            let cmd = super::completions::CompletionsCommand::new(args.clone());
            return cmd.execute(ui);
        }

        let options = cli.raw_options().resolve()?;
        tracing::debug!(
            "Resolved options: command={} throttle={}ms description={} filename={}",
            options.command.name(),
            options.throttle.as_millis(),
            options.filters.description,
            options.filters.filename
        );

        let client = GitHubClient::with_base_url(&options.api_url, &options.token)?;
        tracing::debug!("Using API root {}", client.base_url());

        match options.command {
            CommandKind::Fetch => {
                let cmd = super::fetch::FetchCommand::new(&options, &client);
                cmd.execute(ui)
            }
            CommandKind::Conceal => {
                let transfer = GitTransfer::new(&options.token);
                let cmd = super::conceal::ConcealCommand::new(&options, &client, &transfer);
                cmd.execute(ui)
            }
        }
    }
}
