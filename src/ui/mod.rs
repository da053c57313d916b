//! Terminal status output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for styled status lines and spinners on stderr
//! - [`MockUI`] for capturing output in tests
//!
//! Reports are not written through the UI; they go to stdout or a file
//! via [`crate::report::write_report`] so status output never mixes in.
//!
//! # Example
//!
//! ```
//! use gistcloak::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Concealed 2 gists");
//! assert_eq!(ui.successes(), ["Concealed 2 gists"]);
//! ```

pub mod mock;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, GistTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}
