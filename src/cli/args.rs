//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Options are global so they
//! may appear before or after the command.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{parse_throttle, CommandKind, GistPattern, RawOptions};

/// gistcloak - Turn public gists into secret ones.
#[derive(Debug, Parser)]
#[command(name = "gistcloak")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Read gist ids to conceal from this log instead of listing
    #[arg(short, long, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// GitHub token with the gist scope
    #[arg(
        long = "github-token",
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        global = true,
        value_name = "TOKEN"
    )]
    pub github_token: Option<String>,

    /// Delay between API calls in milliseconds [default: 4000]
    #[arg(
        long = "github-throttle",
        env = "GITHUB_THROTTLE",
        global = true,
        value_name = "MS",
        value_parser = parse_throttle,
        allow_hyphen_values = true
    )]
    pub github_throttle: Option<Duration>,

    /// GitHub API root (for GitHub Enterprise)
    #[arg(
        long = "github-api-url",
        env = "GITHUB_API_URL",
        global = true,
        value_name = "URL"
    )]
    pub github_api_url: Option<String>,

    /// Only gists whose description matches (/pattern/flags or pattern)
    #[arg(
        long = "gist-description-match",
        global = true,
        value_name = "REGEX",
        value_parser = GistPattern::parse
    )]
    pub gist_description_match: Option<GistPattern>,

    /// Only gists with a file name that matches (/pattern/flags or pattern)
    #[arg(
        long = "gist-filename-match",
        global = true,
        value_name = "REGEX",
        value_parser = GistPattern::parse
    )]
    pub gist_filename_match: Option<GistPattern>,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List public gists matching the filters
    Fetch,

    /// Replace gists with secret copies and delete the public originals
    Conceal,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl Cli {
    /// Collect the run options given on the command line and environment.
    pub fn raw_options(&self) -> RawOptions {
        let command = match &self.command {
            Some(Commands::Fetch) => Some(CommandKind::Fetch),
            Some(Commands::Conceal) => Some(CommandKind::Conceal),
            Some(Commands::Completions(_)) | None => None,
        };

        RawOptions {
            command,
            token: self.github_token.clone(),
            throttle: self.github_throttle,
            description: self.gist_description_match.clone(),
            filename: self.gist_filename_match.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
            api_url: self.github_api_url.clone(),
        }
    }
}
