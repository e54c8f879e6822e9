//! UI preferences resolved at startup.
//!
//! # Design
//! - DOM-free so defaults and parsing are testable natively.
//! - Only presentation preferences live here; the rule itself is never stored.

use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// Default toast auto-dismiss delay in milliseconds.
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4000;

/// LocalStorage key for the preferred locale.
pub const LOCALE_KEY: &str = "approval_rules.locale";
/// LocalStorage key for the preferred theme.
pub const THEME_KEY: &str = "approval_rules.theme";

/// Presentation settings shared through context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Locale used for all visible strings.
    pub locale: LocaleCode,
    /// Light or dark presentation.
    pub theme: ThemeMode,
    /// Toast auto-dismiss delay in milliseconds.
    pub toast_timeout_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            theme: ThemeMode::default(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }
}

impl UiConfig {
    /// Resolve a config from raw stored values, falling back per field.
    ///
    /// The locale is taken from the stored preference first, then the
    /// browser language tag.
    #[must_use]
    pub fn resolve(
        stored_locale: Option<&str>,
        browser_language: Option<&str>,
        stored_theme: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let locale = stored_locale
            .and_then(LocaleCode::from_lang_tag)
            .or_else(|| browser_language.and_then(LocaleCode::from_lang_tag))
            .unwrap_or(defaults.locale);
        let theme = stored_theme
            .and_then(ThemeMode::from_value)
            .unwrap_or(defaults.theme);
        Self {
            locale,
            theme,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_english_light() {
        let config = UiConfig::default();
        assert_eq!(config.locale, LocaleCode::En);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.toast_timeout_ms, 4000);
    }

    #[test]
    fn stored_locale_wins_over_browser() {
        let config = UiConfig::resolve(Some("de"), Some("fr-FR"), None);
        assert_eq!(config.locale, LocaleCode::De);
    }

    #[test]
    fn browser_language_used_when_nothing_stored() {
        let config = UiConfig::resolve(None, Some("es-MX"), Some("dark"));
        assert_eq!(config.locale, LocaleCode::Es);
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn unknown_values_fall_back() {
        let config = UiConfig::resolve(Some("xx"), Some("zz"), Some("neon"));
        assert_eq!(config, UiConfig::default());
    }
}
