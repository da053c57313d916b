//! Fetch command implementation.
//!
//! Lists the user's public gists matching the description and filename
//! filters and writes a report of them.

use chrono::Utc;

use crate::config::Options;
use crate::error::Result;
use crate::gists::{GistLister, Throttle};
use crate::github::GistApi;
use crate::report::{format_fetch_report, report_header, write_report};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The fetch command implementation.
pub struct FetchCommand<'a> {
    options: &'a Options,
    api: &'a dyn GistApi,
}

impl<'a> FetchCommand<'a> {
    /// Create a new fetch command.
    pub fn new(options: &'a Options, api: &'a dyn GistApi) -> Self {
        Self { options, api }
    }
}

impl Command for FetchCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let lister = GistLister::new(
            self.api,
            &self.options.filters,
            Throttle::new(self.options.throttle),
        );

        let mut spinner = ui.start_spinner("Fetching gists");
        let mut found = 0;
        let listed = lister.list_with(|gist| {
            found += 1;
            spinner.set_message(&format!("Fetching gists ({} matched, last {})", found, gist.id));
        });
        let gists = match listed {
            Ok(gists) => gists,
            Err(e) => {
                spinner.finish_error("Fetching gists failed");
                return Err(e);
            }
        };
        spinner.finish_success(&format!("Found {} matching gists", gists.len()));

        let mut report = report_header("fetch", Utc::now());
        report.push_str(&format_fetch_report(&gists));
        write_report(&report, self.options.output.as_deref())?;

        if let Some(path) = &self.options.output {
            ui.success(&format!("Wrote {}", path.display()));
        }

        Ok(CommandResult::success())
    }
}
