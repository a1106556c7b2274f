//! Browser-side persistence and document updates for the theme preference.
//!
//! Every failure (no window, storage disabled, quota) is swallowed: the page
//! keeps rendering with the default mode.

use portfolio_shared::constants::THEME_STORAGE_KEY;
use portfolio_shared::ThemeMode;

#[cfg(target_arch = "wasm32")]
pub fn load_theme() -> ThemeMode {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    ThemeMode::from_preference(stored.as_deref())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_theme() -> ThemeMode {
    ThemeMode::from_preference(None)
}

/// Persists the mode and mirrors it onto the root `<html>` class.
pub fn apply_theme(mode: ThemeMode) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(html) = window.document().and_then(|d| d.document_element()) {
        html.set_class_name(mode.as_str());
    }
    match window.local_storage() {
        Ok(Some(storage)) => {
            if storage.set_item(THEME_STORAGE_KEY, mode.as_str()).is_err() {
                log::warn!("Could not persist theme preference");
            }
        }
        _ => log::debug!("Local storage unavailable, theme preference not persisted"),
    }
}
