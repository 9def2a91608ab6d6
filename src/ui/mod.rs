//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the real terminal
//! - [`MockUI`] capturing output for tests
//! - [`render_report`] turning a [`CheckReport`] into lines
//!
//! The UI implementations print what they are given; deciding what to
//! show for an [`OutputMode`] is the renderer's job.
//!
//! [`CheckReport`]: crate::checker::CheckReport
//!
//! # Example
//!
//! ```
//! use layoutcheck::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_section("📄 Root files");
//! ui.status(StatusKind::Success, "Root build file: build.gradle");
//!
//! assert_eq!(ui.sections(), ["📄 Root files".to_string()]);
//! assert_eq!(ui.count(StatusKind::Success), 1);
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod report;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use output::OutputMode;
pub use report::render_report;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, LayoutTheme};

/// Trait for user interface output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a line prefixed with a status marker.
    fn status(&mut self, kind: StatusKind, msg: &str);

    /// Display an error (to stderr for terminals).
    fn error(&mut self, msg: &str);

    /// Show the run title.
    fn show_header(&mut self, title: &str);

    /// Show a category header.
    fn show_section(&mut self, title: &str);

    /// Show a separator rule.
    fn separator(&mut self);
}
