//! Fixed tuning values for the navigation chrome and persisted-state keys.

/// Scroll distance (px) over which the navbar collapse runs.
pub const NAV_SCROLL_RANGE: f64 = 100.0;

/// Viewport width (px) at or above which the inline menu row is shown.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

pub const NAV_EXPANDED_MAX_WIDTH: f64 = 1280.0;
pub const NAV_COMPACT_WIDTH_DESKTOP: f64 = 440.0;
pub const NAV_COMPACT_WIDTH_NARROW: f64 = 320.0;

pub const NAV_EXPANDED_HEIGHT: f64 = 64.0;
pub const NAV_COMPACT_HEIGHT: f64 = 52.0;

/// Mobile overlay entry/exit animation lengths, in seconds.
pub const MENU_OPEN_SECS: f64 = 0.4;
pub const MENU_CLOSE_SECS: f64 = 0.3;

/// How long the root keeps the transition guard class after a theme flip.
pub const THEME_TRANSITION_MS: u32 = 500;

pub const STORAGE_KEY_THEME: &str = "theme";
pub const STORAGE_KEY_LANGUAGE: &str = "language";
