//! Progress spinners.

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use super::theme::GistTheme;
use super::SpinnerHandle;

/// A progress spinner for long-running operations, drawn on stderr.
///
/// When the terminal cannot animate, [`ProgressSpinner::lines`] prints the
/// final status as a plain line instead.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: GistTheme,
    echo: Option<Term>,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: GistTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme,
            echo: None,
        }
    }

    /// Create a non-animated spinner that prints only its final status.
    pub fn lines(term: Term, theme: GistTheme) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme,
            echo: Some(term),
        }
    }

    /// Create a spinner that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: GistTheme::plain(),
            echo: None,
        }
    }

    fn finish_with(&mut self, line: String) {
        if let Some(term) = &self.echo {
            writeln!(&*term, "{}", line).ok();
            return;
        }
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }
}
