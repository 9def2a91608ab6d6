//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion, both by kind and as a plain-text transcript.

use super::theme::LayoutTheme;
use super::{OutputMode, StatusKind, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    statuses: Vec<(StatusKind, String)>,
    errors: Vec<String>,
    headers: Vec<String>,
    sections: Vec<String>,
    separators: usize,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Messages of status lines with the given kind.
    pub fn status_messages(&self, kind: StatusKind) -> Vec<&str> {
        self.statuses
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Number of status lines with the given kind.
    pub fn count(&self, kind: StatusKind) -> usize {
        self.statuses.iter().filter(|(k, _)| *k == kind).count()
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured category headers.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Number of separators shown.
    pub fn separators(&self) -> usize {
        self.separators
    }

    /// Everything shown, one entry per line, without colors.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        self.statuses.push((kind, msg.to_string()));
        self.transcript.push(kind.format(&LayoutTheme::plain(), msg));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.transcript.push(LayoutTheme::plain().format_header(title));
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
        self.transcript.push(LayoutTheme::plain().format_section(title));
    }

    fn separator(&mut self) {
        self.separators += 1;
        self.transcript.push(LayoutTheme::plain().format_separator());
    }
}
