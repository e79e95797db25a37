//! Dark/light theming. The mode is applied as a single `dark` class on the
//! document root before the first render so there is no flash, and the navbar
//! toggle is its only writer afterwards. Everything that needs the current
//! mode reads it from [`ThemeContext`].

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::window;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Stored preference wins; anything absent or unrecognized falls back to the
/// system preference.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> ThemeMode {
    match stored {
        Some("dark") => ThemeMode::Dark,
        Some("light") => ThemeMode::Light,
        _ => {
            if prefers_dark {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            }
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn stored_theme() -> Option<String> {
    local_storage()?.get_item(config::STORAGE_KEY_THEME).ok().flatten()
}

fn store_theme(mode: ThemeMode) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(config::STORAGE_KEY_THEME, mode.as_str());
    }
}

pub fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Sets or clears the `dark` marker class on the document root.
fn apply(mode: ThemeMode) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        let _ = if mode.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
    }
}

/// What the preference chain currently resolves to.
pub fn detect_mode() -> ThemeMode {
    resolve_initial(stored_theme().as_deref(), system_prefers_dark())
}

/// Called from `main()` before the renderer mounts.
pub fn apply_before_render() -> ThemeMode {
    let mode = detect_mode();
    apply(mode);
    mode
}

/// App-wide theme state, provided at the root. The toggle handler is the
/// single writer; dependent components read the mode here instead of
/// watching the document for class changes.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: UseStateHandle<ThemeMode>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn toggle(&self) {
        let next = self.mode.toggled();

        // Guard class smooths the color swap, dropped once the transition
        // has had time to finish.
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.class_list().add_1("theme-transitioning");
            let root = root.clone();
            Timeout::new(config::THEME_TRANSITION_MS, move || {
                let _ = root.class_list().remove_1("theme-transitioning");
            })
            .forget();
        }

        apply(next);
        store_theme(next);
        self.mode.set(next);
        info!("theme switched to {}", next.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins_over_system() {
        assert_eq!(resolve_initial(Some("dark"), false), ThemeMode::Dark);
        assert_eq!(resolve_initial(Some("light"), true), ThemeMode::Light);
    }

    #[test]
    fn absent_or_garbage_falls_back_to_system() {
        assert_eq!(resolve_initial(None, true), ThemeMode::Dark);
        assert_eq!(resolve_initial(None, false), ThemeMode::Light);
        assert_eq!(resolve_initial(Some("solarized"), true), ThemeMode::Dark);
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
