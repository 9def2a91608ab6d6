//! Status markers for report lines.

use super::theme::LayoutTheme;

/// Canonical status kinds used in check output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// The path exists.
    Success,
    /// The path is missing or of the wrong kind.
    Failed,
    /// Run-level warning (the failure banner).
    Warning,
    /// Run-level success (the success banner).
    Complete,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Complete => "🎉",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &LayoutTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Complete => theme.highlight.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &LayoutTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusKind; 4] = [
        StatusKind::Success,
        StatusKind::Failed,
        StatusKind::Warning,
        StatusKind::Complete,
    ];

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
        assert_eq!(StatusKind::Complete.icon(), "🎉");
    }

    #[test]
    fn plain_format_is_icon_space_message() {
        let theme = LayoutTheme::plain();
        assert_eq!(
            StatusKind::Failed.format(&theme, "Settings file: settings.gradle"),
            "✗ Settings file: settings.gradle"
        );
    }

    #[test]
    fn styled_contains_icon() {
        let theme = LayoutTheme::new();
        for kind in ALL {
            assert!(kind.styled(&theme).contains(kind.icon()));
        }
    }

    #[test]
    fn all_variants_have_unique_icons() {
        let mut icons: Vec<&str> = ALL.iter().map(|k| k.icon()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), ALL.len());
    }
}
