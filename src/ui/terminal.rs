//! Terminal UI on stderr.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, GistTheme, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface,
};

/// Terminal UI implementation.
///
/// Writes to stderr so that a report printed on stdout can be piped.
pub struct TerminalUI {
    term: Term,
    theme: GistTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GistTheme::new()
        } else {
            GistTheme::plain()
        };

        Self {
            term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() && self.term.is_term() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            if !self.mode.shows_status() {
                return Box::new(ProgressSpinner::hidden());
            }
            writeln!(self.term, "{}", message).ok();
            Box::new(ProgressSpinner::lines(self.term.clone(), self.theme.clone()))
        }
    }
}
