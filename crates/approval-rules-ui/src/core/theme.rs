//! Theme selection for the approval rules UI.

/// Light or dark presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference, accepting legacy prefixed names.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "light" | "approval-light" => Some(Self::Light),
            "dark" | "approval-dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn from_value_round_trips() {
        assert_eq!(ThemeMode::from_value("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_value("approval-light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_value("sepia"), None);
    }
}
