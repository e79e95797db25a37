//! Language routing: which language a visitor gets, how unprefixed URLs are
//! rewritten to carry one, and how the toggle re-targets the current path.
//!
//! Region-qualified tags (`en-US`) are truncated to their primary subtag
//! before every comparison, before persistence and before anything is written
//! into a URL. One representation, everywhere.

use log::info;
use wasm_bindgen::JsValue;
use web_sys::window;
use yew::prelude::*;

use crate::config;
use crate::translations;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Language {
    Zh,
    En,
}

/// Default when nothing else resolves.
pub const FALLBACK: Language = Language::Zh;

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    /// Toggle-button label, showing the active language.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Zh => "ZH",
            Language::En => "EN",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Language> {
        match normalize(tag).as_str() {
            "zh" => Some(Language::Zh),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// The other member of the two-language set.
    pub fn toggled(&self) -> Language {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }
}

/// Truncates a locale tag to its lowercased primary subtag: `en-US` -> `en`,
/// `zh_CN` -> `zh`. Idempotent.
pub fn normalize(tag: &str) -> String {
    let tag = tag.trim().to_ascii_lowercase();
    match tag.split(['-', '_']).next() {
        Some(primary) if !primary.is_empty() => primary.to_string(),
        _ => tag,
    }
}

fn first_segment(path: &str) -> Option<&str> {
    path.strip_prefix('/')?.split('/').next().filter(|s| !s.is_empty())
}

/// The language carried by the path's first segment, if it is a valid one.
pub fn path_language(path: &str) -> Option<Language> {
    first_segment(path).and_then(Language::from_tag)
}

/// First valid of: explicit path segment, persisted preference, system
/// locale, configured fallback. Total — always yields a language.
pub fn resolve_initial_language(
    path: &str,
    stored: Option<&str>,
    system: Option<&str>,
) -> Language {
    if let Some(lang) = path_language(path) {
        return lang;
    }
    if let Some(lang) = stored.and_then(|tag| Language::from_tag(tag)) {
        return lang;
    }
    if let Some(lang) = system.and_then(|tag| Language::from_tag(tag)) {
        return lang;
    }
    FALLBACK
}

/// Where an unprefixed path should be replaced to, or `None` when the path
/// already carries a valid language segment.
pub fn redirect_target(path: &str, resolved: Language) -> Option<String> {
    if path_language(path).is_some() {
        return None;
    }
    let rest = if path == "/" { "" } else { path };
    Some(format!("/{}{}", resolved.as_str(), rest))
}

/// Drops a leading `/{lang}` segment, keeping everything after it.
pub fn strip_language_prefix<'a>(path: &'a str, lang: Language) -> &'a str {
    if let Some(rest) = path.strip_prefix('/') {
        if let Some(rest) = rest.strip_prefix(lang.as_str()) {
            if rest.is_empty() || rest.starts_with('/') {
                return rest;
            }
        }
    }
    path
}

/// The same location under the other language, query and fragment carried
/// over verbatim. Applying this twice returns to the original path.
pub fn toggle_path(path: &str, current: Language, query: &str, fragment: &str) -> String {
    let next = current.toggled();
    let rest = strip_language_prefix(path, current);
    format!("/{}{}{}{}", next.as_str(), rest, query, fragment)
}

// ---- browser-facing adapters ------------------------------------------------

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok().flatten()
}

/// Persisted preference, if storage is reachable and holds one.
pub fn stored_language() -> Option<String> {
    local_storage()?.get_item(config::STORAGE_KEY_LANGUAGE).ok().flatten()
}

/// Best-effort write; storage being unavailable is not an error.
pub fn store_language(lang: Language) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(config::STORAGE_KEY_LANGUAGE, lang.as_str());
    }
}

pub fn system_language() -> Option<String> {
    window()?.navigator().language()
}

/// Preference chain for a request that carries no path language.
pub fn detect_language() -> Language {
    resolve_initial_language(
        "",
        stored_language().as_deref(),
        system_language().as_deref(),
    )
}

// ---- shared language state --------------------------------------------------

/// App-wide language state. Components read the active language and resolve
/// display strings through this; the toggle handlers are its only writers.
#[derive(Clone, PartialEq)]
pub struct LocaleContext {
    pub language: UseStateHandle<Language>,
}

impl LocaleContext {
    pub fn current(&self) -> Language {
        *self.language
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translations::translate(*self.language, key)
    }
}

/// Re-targets the current location to the other language, persists the new
/// preference and updates the shared state so rendered content re-translates
/// without a reload. The URL is rewritten in place (query and fragment kept).
pub fn switch_language(locale: &LocaleContext) {
    let current = locale.current();
    let next = current.toggled();

    if let Some(window) = window() {
        let location = window.location();
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let query = location.search().unwrap_or_default();
        let fragment = location.hash().unwrap_or_default();
        let target = toggle_path(&path, current, &query, &fragment);
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&target));
        }
    }

    store_language(next);
    locale.language.set(next);
    info!("language switched to {}", next.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_truncates_region_suffixes() {
        assert_eq!(normalize("en-US"), "en");
        assert_eq!(normalize("zh_CN"), "zh");
        assert_eq!(normalize("ZH-Hant-TW"), "zh");
        assert_eq!(normalize("en"), "en");
    }

    #[test]
    fn normalize_is_idempotent() {
        for tag in ["en-US", "zh_CN", "fr", "", "EN"] {
            assert_eq!(normalize(&normalize(tag)), normalize(tag));
        }
    }

    #[test]
    fn from_tag_accepts_region_qualified_tags_only_for_supported_languages() {
        assert_eq!(Language::from_tag("en-US"), Some(Language::En));
        assert_eq!(Language::from_tag("zh-CN"), Some(Language::Zh));
        assert_eq!(Language::from_tag("fr"), None);
        assert_eq!(Language::from_tag("english"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn resolution_prefers_path_then_stored_then_system() {
        assert_eq!(
            resolve_initial_language("/en/welcome", Some("zh"), Some("zh")),
            Language::En
        );
        assert_eq!(
            resolve_initial_language("/", Some("en"), Some("zh")),
            Language::En
        );
        assert_eq!(
            resolve_initial_language("/", None, Some("en-GB")),
            Language::En
        );
        assert_eq!(resolve_initial_language("/", None, None), FALLBACK);
        // Invalid entries fall through rather than win.
        assert_eq!(
            resolve_initial_language("/about", Some("klingon"), Some("fr")),
            FALLBACK
        );
    }

    #[test]
    fn redirect_prefixes_unprefixed_paths() {
        assert_eq!(redirect_target("/", Language::Zh), Some("/zh".to_string()));
        assert_eq!(
            redirect_target("/about", Language::Zh),
            Some("/zh/about".to_string())
        );
        assert_eq!(
            redirect_target("/welcome", Language::En),
            Some("/en/welcome".to_string())
        );
    }

    #[test]
    fn redirect_leaves_prefixed_paths_alone() {
        assert_eq!(redirect_target("/zh", Language::Zh), None);
        assert_eq!(redirect_target("/en/welcome", Language::Zh), None);
    }

    #[test]
    fn no_stored_preference_and_chinese_system_locale_lands_on_zh() {
        let resolved = resolve_initial_language("/about", None, Some("zh"));
        assert_eq!(
            redirect_target("/about", resolved),
            Some("/zh/about".to_string())
        );
    }

    #[test]
    fn toggle_keeps_query_and_fragment() {
        assert_eq!(
            toggle_path("/en/welcome", Language::En, "?x=1", "#y"),
            "/zh/welcome?x=1#y"
        );
        assert_eq!(toggle_path("/zh", Language::Zh, "", ""), "/en");
    }

    #[test]
    fn toggle_is_its_own_inverse_on_the_path() {
        let once = toggle_path("/en/welcome", Language::En, "", "");
        assert_eq!(once, "/zh/welcome");
        let twice = toggle_path(&once, Language::Zh, "", "");
        assert_eq!(twice, "/en/welcome");
    }

    #[test]
    fn strip_only_removes_a_whole_leading_segment() {
        assert_eq!(strip_language_prefix("/en/welcome", Language::En), "/welcome");
        assert_eq!(strip_language_prefix("/en", Language::En), "");
        // "ennui" starts with "en" but is not a language segment.
        assert_eq!(strip_language_prefix("/ennui", Language::En), "/ennui");
        assert_eq!(strip_language_prefix("/welcome", Language::En), "/welcome");
    }
}
