//! Visual theme and styling.

use console::Style;

/// Width of the `=` rule printed under the title and before the banner.
pub const SEPARATOR_WIDTH: usize = 50;

/// Styles used for check output.
#[derive(Debug, Clone)]
pub struct LayoutTheme {
    /// Style for passing items (green).
    pub success: Style,
    /// Style for the failure banner (orange).
    pub warning: Style,
    /// Style for failing items (red bold).
    pub error: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for the run title (bold magenta).
    pub header: Style,
    /// Style for category headers (bold).
    pub section: Style,
    /// Style for separators (dim).
    pub border: Style,
}

impl Default for LayoutTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            section: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            section: Style::new(),
            border: Style::new(),
        }
    }

    /// Format the run title.
    pub fn format_header(&self, title: &str) -> String {
        format!("{} {}", self.header.apply_to("🔍"), self.highlight.apply_to(title))
    }

    /// Format a category header.
    pub fn format_section(&self, title: &str) -> String {
        format!("{}", self.section.apply_to(format!("{}:", title)))
    }

    /// Format the separator rule.
    pub fn format_separator(&self) -> String {
        format!("{}", self.border.apply_to("=".repeat(SEPARATOR_WIDTH)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
