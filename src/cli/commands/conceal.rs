//! Conceal command implementation.
//!
//! Replaces each chosen public gist with a secret copy holding the same
//! files, then deletes the original. Gists come from an input log when one
//! is given, otherwise from listing with the configured filters.

use chrono::Utc;

use crate::config::Options;
use crate::error::Result;
use crate::gists::{ConcealEvent, Concealer, GistLister, Throttle};
use crate::github::{ConcealedPair, GistApi, GistRef};
use crate::report::{
    format_conceal_report, format_incomplete_pair, read_input_log, report_header, write_report,
};
use crate::transfer::ContentTransfer;
use crate::ui::{SpinnerHandle, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The conceal command implementation.
pub struct ConcealCommand<'a> {
    options: &'a Options,
    api: &'a dyn GistApi,
    transfer: &'a dyn ContentTransfer,
}

impl<'a> ConcealCommand<'a> {
    /// Create a new conceal command.
    pub fn new(
        options: &'a Options,
        api: &'a dyn GistApi,
        transfer: &'a dyn ContentTransfer,
    ) -> Self {
        Self {
            options,
            api,
            transfer,
        }
    }

    fn collect_refs(&self, ui: &mut dyn UserInterface, throttle: Throttle) -> Result<Vec<GistRef>> {
        if let Some(input) = &self.options.input {
            let refs = read_input_log(input)?;
            ui.message(&format!("Read {} gist ids from {}", refs.len(), input.display()));
            return Ok(refs);
        }

        let lister = GistLister::new(self.api, &self.options.filters, throttle);
        let mut spinner = ui.start_spinner("Fetching gists");
        match lister.list() {
            Ok(gists) => {
                spinner.finish_success(&format!("Found {} matching gists", gists.len()));
                // Listing and concealing share one rate budget.
                if !gists.is_empty() {
                    throttle.pause();
                }
                Ok(gists.into_iter().map(GistRef::from).collect())
            }
            Err(e) => {
                spinner.finish_error("Fetching gists failed");
                Err(e)
            }
        }
    }

    fn write(&self, pairs: &[ConcealedPair], incomplete: Option<&ConcealedPair>) -> Result<()> {
        let mut report = report_header("conceal", Utc::now());
        report.push_str(&format_conceal_report(pairs));
        if let Some(pair) = incomplete {
            if !pairs.is_empty() {
                report.push('\n');
            }
            report.push_str(&format_incomplete_pair(pair));
        }
        write_report(&report, self.options.output.as_deref())
    }
}

impl Command for ConcealCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let throttle = Throttle::new(self.options.throttle);
        let refs = self.collect_refs(ui, throttle)?;

        if refs.is_empty() {
            ui.warning("No gists to conceal");
            self.write(&[], None)?;
            return Ok(CommandResult::success());
        }

        let concealer = Concealer::new(self.api, self.transfer, throttle);
        let mut pairs = Vec::new();
        let mut spinner: Option<Box<dyn SpinnerHandle>> = None;
        let mut incomplete: Option<ConcealedPair> = None;

        let outcome = concealer.conceal_all(refs, &mut pairs, |event| match event {
            ConcealEvent::Started { id, index, total } => {
                spinner = Some(ui.start_spinner(&format!(
                    "[{}/{}] Concealing {}",
                    index + 1,
                    total,
                    id
                )));
            }
            ConcealEvent::Concealed(pair) => {
                if let Some(mut s) = spinner.take() {
                    s.finish_success(&format!("{} -> {}", pair.source.id, pair.target.id));
                }
            }
            ConcealEvent::Incomplete(pair) => incomplete = Some(pair.clone()),
        });

        if let Err(e) = outcome {
            if let Some(mut s) = spinner.take() {
                s.finish_error("Concealing failed");
            }
            if let Some(pair) = &incomplete {
                ui.warning(&format!(
                    "Secret gist {} ({}) was left behind; {} was not deleted",
                    pair.target.id, pair.target.html_url, pair.source.id
                ));
            }
            if !pairs.is_empty() {
                ui.warning(&format!(
                    "{} gists were concealed before the failure",
                    pairs.len()
                ));
            }
            if !pairs.is_empty() || incomplete.is_some() {
                self.write(&pairs, incomplete.as_ref())?;
            }
            return Err(e);
        }

        self.write(&pairs, None)?;
        match &self.options.output {
            Some(path) => ui.success(&format!(
                "Concealed {} gists, wrote {}",
                pairs.len(),
                path.display()
            )),
            None => ui.success(&format!("Concealed {} gists", pairs.len())),
        }

        Ok(CommandResult::success())
    }
}
