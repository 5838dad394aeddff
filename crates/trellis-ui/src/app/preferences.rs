//! Persistence and environment helpers for the gallery shell.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::document;
use trellis_core::config::LibraryConfig;
use trellis_core::theme::ThemeMode;

pub(crate) const THEME_KEY: &str = "trellis.theme";
/// Id of an optional `<script type="application/json">` holding the library config.
pub(crate) const CONFIG_ELEMENT_ID: &str = "trellis-config";

pub(crate) fn load_theme(fallback: ThemeMode) -> ThemeMode {
    LocalStorage::get::<String>(THEME_KEY)
        .map_or(fallback, |value| value.parse().unwrap_or(fallback))
}

pub(crate) fn persist_theme(theme: ThemeMode) {
    if let Err(err) = LocalStorage::set(THEME_KEY, theme.as_str()) {
        console::warn!(format!("failed to persist theme: {err}"));
    }
}

pub(crate) fn apply_theme(theme: ThemeMode) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Library config embedded in the host page, or defaults when absent or invalid.
pub(crate) fn load_library_config() -> LibraryConfig {
    let Some(raw) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return LibraryConfig::default();
    };
    LibraryConfig::from_json(&raw).unwrap_or_else(|err| {
        console::error!(format!("ignoring invalid {CONFIG_ELEMENT_ID}: {err}"));
        LibraryConfig::default()
    })
}
