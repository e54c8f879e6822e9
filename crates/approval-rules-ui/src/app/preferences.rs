//! Browser-side loading of UI preferences.

use crate::core::config::{LOCALE_KEY, THEME_KEY, UiConfig};
use crate::core::theme::ThemeMode;
use crate::i18n::LocaleCode;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

/// Resolve preferences from LocalStorage and the navigator language.
pub(crate) fn load_config() -> UiConfig {
    let stored_locale = LocalStorage::get::<String>(LOCALE_KEY).ok();
    let stored_theme = LocalStorage::get::<String>(THEME_KEY).ok();
    let browser_language = window().navigator().language();
    let config = UiConfig::resolve(
        stored_locale.as_deref(),
        browser_language.as_deref(),
        stored_theme.as_deref(),
    );
    console::log!(
        "ui preferences loaded",
        config.locale.code(),
        config.theme.as_str()
    );
    config
}

pub(crate) fn apply_theme(theme: ThemeMode) {
    if let Some(root) = window().document().and_then(|doc| doc.document_element())
        && let Err(err) = root.set_attribute("data-theme", theme.as_str())
    {
        console::error!("theme attribute update failed", err);
    }
}

pub(crate) fn apply_locale(locale: LocaleCode) {
    if let Some(root) = window().document().and_then(|doc| doc.document_element())
        && let Err(err) = root.set_attribute("lang", locale.code())
    {
        console::error!("lang attribute update failed", err);
    }
}
