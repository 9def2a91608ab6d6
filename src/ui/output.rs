//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, plus details for unusual failures.
    Verbose,
    /// Headers, every item line, banner and next steps.
    #[default]
    Normal,
    /// Failing items and the final banner only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows headers, passing items and guidance.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode explains why a failing path failed.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
