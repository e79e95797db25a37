//! Pure math behind the navigation chrome: the scroll-driven collapse of the
//! navbar pill and the mobile overlay open/close machine. Nothing in here
//! touches the DOM; components sample scroll/viewport state and apply the
//! frames these functions return.

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewportClass {
    Desktop,
    Narrow,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width >= config::DESKTOP_MIN_WIDTH {
            ViewportClass::Desktop
        } else {
            ViewportClass::Narrow
        }
    }
}

/// Collapse progress for a given vertical scroll offset. 0 at the top,
/// 1 once the offset passes the activation range, linear in between.
pub fn progress(scroll_y: f64) -> f64 {
    (scroll_y / config::NAV_SCROLL_RANGE).clamp(0.0, 1.0)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// One logo slot of the cross-fade. `in_layout` is false once the node should
/// stop taking horizontal space entirely.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LogoFrame {
    pub opacity: f64,
    pub shift_x: f64,
    pub scale: f64,
    pub width: Option<f64>,
    pub in_layout: bool,
}

impl LogoFrame {
    pub fn style(&self) -> String {
        if !self.in_layout {
            return "display: none;".to_string();
        }
        let width = match self.width {
            Some(w) => format!(" width: {:.2}px; overflow: hidden;", w),
            None => String::new(),
        };
        format!(
            "display: flex; opacity: {:.3}; transform: translateX({:.2}px) scale({:.3});{}",
            self.opacity, self.shift_x, self.scale, width
        )
    }
}

/// Inline menu row collapse (desktop classification only).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MenuRowFrame {
    pub opacity: f64,
    pub scale: f64,
    pub width_factor: f64,
    pub in_layout: bool,
}

// Generous upper bound on the row's natural width; the factor anneals the
// cap down to zero so the container can tighten around it.
const MENU_ROW_MAX_WIDTH: f64 = 600.0;

impl MenuRowFrame {
    pub fn style(&self) -> String {
        if !self.in_layout {
            return "display: none;".to_string();
        }
        format!(
            "display: flex; opacity: {:.3}; transform: scale({:.3}); max-width: {:.2}px; overflow: hidden;",
            self.opacity,
            self.scale,
            self.width_factor * MENU_ROW_MAX_WIDTH
        )
    }
}

/// Concrete visual values for the navbar at one collapse progress. Purely a
/// function of `(progress, viewport)`; replaying the same inputs yields the
/// same frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavFrame {
    pub max_width: f64,
    pub height: f64,
    pub padding_x: f64,
    pub bg_alpha: f64,
    pub blur: f64,
    pub border_alpha: f64,
    pub full_logo: LogoFrame,
    pub compact_logo: LogoFrame,
    pub menu_row: Option<MenuRowFrame>,
}

// The compact logo only starts fading in at this point of the interval so
// both logos are never mid-transition at the same progress.
const COMPACT_LOGO_DELAY: f64 = 0.4;

const FULL_LOGO_WIDTH: f64 = 96.0;

pub fn navbar_frame(progress: f64, viewport: ViewportClass) -> NavFrame {
    let t = progress.clamp(0.0, 1.0);

    let compact_width = match viewport {
        ViewportClass::Desktop => config::NAV_COMPACT_WIDTH_DESKTOP,
        ViewportClass::Narrow => config::NAV_COMPACT_WIDTH_NARROW,
    };

    let full_logo = LogoFrame {
        opacity: lerp(1.0, 0.0, t),
        shift_x: lerp(0.0, -20.0, t),
        scale: lerp(1.0, 0.8, t),
        width: Some(lerp(FULL_LOGO_WIDTH, 0.0, t)),
        in_layout: t < 1.0,
    };

    let ct = ((t - COMPACT_LOGO_DELAY) / (1.0 - COMPACT_LOGO_DELAY)).clamp(0.0, 1.0);
    let compact_logo = LogoFrame {
        opacity: ct,
        shift_x: lerp(20.0, 0.0, ct),
        scale: lerp(0.5, 1.0, ct),
        width: None,
        in_layout: t > COMPACT_LOGO_DELAY,
    };

    let menu_row = match viewport {
        ViewportClass::Desktop => Some(MenuRowFrame {
            opacity: lerp(1.0, 0.0, t),
            scale: lerp(1.0, 0.9, t),
            width_factor: 1.0 - t,
            in_layout: t < 1.0,
        }),
        ViewportClass::Narrow => None,
    };

    NavFrame {
        max_width: lerp(config::NAV_EXPANDED_MAX_WIDTH, compact_width, t),
        height: lerp(config::NAV_EXPANDED_HEIGHT, config::NAV_COMPACT_HEIGHT, t),
        padding_x: lerp(1.0, 1.25, t),
        bg_alpha: lerp(0.0, 0.85, t),
        blur: lerp(0.0, 24.0, t),
        border_alpha: lerp(0.12, 0.25, t),
        full_logo,
        compact_logo,
        menu_row,
    }
}

impl NavFrame {
    pub fn container_style(&self) -> String {
        format!(
            "max-width: {:.2}px; height: {:.2}px; padding-left: {:.3}rem; padding-right: {:.3}rem; \
             background-color: rgba(var(--nav-surface-rgb), {:.3}); backdrop-filter: blur({:.2}px); \
             -webkit-backdrop-filter: blur({:.2}px); border-color: rgba(var(--nav-border-rgb), {:.3});",
            self.max_width,
            self.height,
            self.padding_x,
            self.padding_x,
            self.bg_alpha,
            self.blur,
            self.blur,
            self.border_alpha
        )
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Overlay visuals for one animation frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OverlayFrame {
    pub opacity: f64,
    pub shift_y: f64,
    pub in_layout: bool,
}

impl OverlayFrame {
    pub fn style(&self) -> String {
        if !self.in_layout {
            return "display: none;".to_string();
        }
        format!(
            "display: flex; opacity: {:.3}; transform: translateY({:.2}px);",
            self.opacity, self.shift_y
        )
    }
}

/// Mobile overlay machine. `toggle` flips intent; a flip mid-transition
/// reverses from the current interpolated value rather than the nominal
/// endpoint, so rapid toggling never snaps or tears.
pub struct MenuMotion {
    phase: MenuPhase,
    t: f64,
}

impl MenuMotion {
    pub fn new() -> Self {
        MenuMotion {
            phase: MenuPhase::Closed,
            t: 0.0,
        }
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    pub fn open_intent(&self) -> bool {
        matches!(self.phase, MenuPhase::Opening | MenuPhase::Open)
    }

    /// Overlay visibility in [0, 1]: 0 fully closed, 1 fully open.
    pub fn value(&self) -> f64 {
        match self.phase {
            MenuPhase::Closed => 0.0,
            MenuPhase::Open => 1.0,
            MenuPhase::Opening => ease_out_cubic(self.t),
            MenuPhase::Closing => 1.0 - ease_in_cubic(self.t),
        }
    }

    pub fn toggle(&mut self) {
        let value = self.value();
        if self.open_intent() {
            // 1 - t^3 == value  =>  t = cbrt(1 - value)
            self.phase = MenuPhase::Closing;
            self.t = (1.0 - value).cbrt();
        } else {
            // 1 - (1 - t)^3 == value  =>  t = 1 - cbrt(1 - value)
            self.phase = MenuPhase::Opening;
            self.t = 1.0 - (1.0 - value).cbrt();
        }
    }

    /// Dismissal request (menu links). No-op when already closed or closing.
    pub fn close(&mut self) {
        if self.open_intent() {
            self.toggle();
        }
    }

    /// Advances the transition clock by `dt` seconds. Returns true while the
    /// animation still has frames left.
    pub fn step(&mut self, dt: f64) -> bool {
        match self.phase {
            MenuPhase::Opening => {
                self.t += dt / config::MENU_OPEN_SECS;
                if self.t >= 1.0 {
                    self.t = 1.0;
                    self.phase = MenuPhase::Open;
                }
            }
            MenuPhase::Closing => {
                self.t += dt / config::MENU_CLOSE_SECS;
                if self.t >= 1.0 {
                    self.t = 1.0;
                    self.phase = MenuPhase::Closed;
                }
            }
            MenuPhase::Closed | MenuPhase::Open => {}
        }
        matches!(self.phase, MenuPhase::Opening | MenuPhase::Closing)
    }

    /// Fail-open path for a missing frame scheduler: jump straight to the
    /// resting state of the current intent.
    pub fn snap_to_rest(&mut self) {
        self.phase = if self.open_intent() {
            MenuPhase::Open
        } else {
            MenuPhase::Closed
        };
        self.t = 1.0;
    }

    /// Background scrolling is disallowed while the overlay is up or coming up.
    pub fn scroll_locked(&self) -> bool {
        matches!(self.phase, MenuPhase::Opening | MenuPhase::Open)
    }

    pub fn frame(&self) -> OverlayFrame {
        let value = self.value();
        OverlayFrame {
            opacity: value,
            shift_y: -20.0 * (1.0 - value),
            in_layout: self.phase != MenuPhase::Closed,
        }
    }
}

impl Default for MenuMotion {
    fn default() -> Self {
        MenuMotion::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn progress_clamps_at_both_ends() {
        assert_eq!(progress(-50.0), 0.0);
        assert_eq!(progress(0.0), 0.0);
        assert_eq!(progress(config::NAV_SCROLL_RANGE), 1.0);
        assert_eq!(progress(config::NAV_SCROLL_RANGE * 4.0), 1.0);
    }

    #[test]
    fn progress_is_monotone_in_scroll_offset() {
        let mut last = 0.0;
        for step in 0..=200 {
            let p = progress(step as f64);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn frame_is_pure_in_its_inputs() {
        for &vp in &[ViewportClass::Desktop, ViewportClass::Narrow] {
            for step in 0..=10 {
                let p = step as f64 / 10.0;
                assert_eq!(navbar_frame(p, vp), navbar_frame(p, vp));
            }
        }
    }

    #[test]
    fn expanded_endpoint() {
        let frame = navbar_frame(0.0, ViewportClass::Desktop);
        assert_eq!(frame.max_width, config::NAV_EXPANDED_MAX_WIDTH);
        assert_eq!(frame.height, config::NAV_EXPANDED_HEIGHT);
        assert_eq!(frame.full_logo.opacity, 1.0);
        assert!(frame.full_logo.in_layout);
        assert_eq!(frame.compact_logo.opacity, 0.0);
        assert!(!frame.compact_logo.in_layout);
        let row = frame.menu_row.unwrap();
        assert_eq!(row.opacity, 1.0);
        assert!(row.in_layout);
    }

    #[test]
    fn compact_endpoint_per_viewport() {
        let desktop = navbar_frame(1.0, ViewportClass::Desktop);
        assert_eq!(desktop.max_width, config::NAV_COMPACT_WIDTH_DESKTOP);
        assert_eq!(desktop.height, config::NAV_COMPACT_HEIGHT);
        assert_eq!(desktop.full_logo.opacity, 0.0);
        assert!(!desktop.full_logo.in_layout);
        assert_eq!(desktop.compact_logo.opacity, 1.0);
        assert_eq!(desktop.compact_logo.scale, 1.0);
        assert!(!desktop.menu_row.unwrap().in_layout);

        let narrow = navbar_frame(1.0, ViewportClass::Narrow);
        assert_eq!(narrow.max_width, config::NAV_COMPACT_WIDTH_NARROW);
        assert!(narrow.menu_row.is_none());
    }

    #[test]
    fn compact_logo_waits_for_its_slot() {
        let early = navbar_frame(0.3, ViewportClass::Narrow);
        assert_eq!(early.compact_logo.opacity, 0.0);
        assert!(!early.compact_logo.in_layout);

        let late = navbar_frame(0.7, ViewportClass::Narrow);
        assert!(late.compact_logo.opacity > 0.0);
        assert!(late.compact_logo.in_layout);
    }

    #[test]
    fn reclassification_only_changes_width_targets() {
        // Same progress, different viewport: heights agree, widths diverge.
        let d = navbar_frame(0.5, ViewportClass::Desktop);
        let n = navbar_frame(0.5, ViewportClass::Narrow);
        assert_eq!(d.height, n.height);
        assert!(d.max_width > n.max_width);
    }

    #[test]
    fn viewport_classification_threshold() {
        assert_eq!(ViewportClass::from_width(1024.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(1023.9), ViewportClass::Narrow);
    }

    #[test]
    fn toggle_parity_regardless_of_timing() {
        let mut menu = MenuMotion::new();
        for _ in 0..3 {
            menu.toggle();
        }
        assert!(menu.open_intent());
        menu.toggle();
        assert!(!menu.open_intent());

        // Same parity when transitions are allowed to finish in between.
        let mut menu = MenuMotion::new();
        for _ in 0..5 {
            menu.toggle();
            while menu.step(0.016) {}
        }
        assert!(menu.open_intent());
        assert_eq!(menu.phase(), MenuPhase::Open);
    }

    #[test]
    fn reversal_is_continuous() {
        let mut menu = MenuMotion::new();
        menu.toggle();
        menu.step(0.2); // mid-flight
        let before = menu.value();
        menu.toggle();
        assert!((menu.value() - before).abs() < EPS);

        // And again from a partially closed state.
        menu.step(0.1);
        let before = menu.value();
        menu.toggle();
        assert!((menu.value() - before).abs() < EPS);
    }

    #[test]
    fn transitions_settle_at_their_endpoints() {
        let mut menu = MenuMotion::new();
        menu.toggle();
        while menu.step(0.016) {}
        assert_eq!(menu.phase(), MenuPhase::Open);
        assert_eq!(menu.value(), 1.0);

        menu.toggle();
        while menu.step(0.016) {}
        assert_eq!(menu.phase(), MenuPhase::Closed);
        assert_eq!(menu.value(), 0.0);
        assert!(!menu.frame().in_layout);
    }

    #[test]
    fn scroll_lock_covers_opening_and_open_only() {
        let mut menu = MenuMotion::new();
        assert!(!menu.scroll_locked());
        menu.toggle();
        assert!(menu.scroll_locked()); // opening
        while menu.step(0.016) {}
        assert!(menu.scroll_locked()); // open
        menu.toggle();
        assert!(!menu.scroll_locked()); // closing
        while menu.step(0.016) {}
        assert!(!menu.scroll_locked()); // closed
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuMotion::new();
        menu.close();
        assert_eq!(menu.phase(), MenuPhase::Closed);

        menu.toggle();
        menu.close();
        assert_eq!(menu.phase(), MenuPhase::Closing);
        let value = menu.value();
        menu.close();
        assert_eq!(menu.phase(), MenuPhase::Closing);
        assert!((menu.value() - value).abs() < EPS);
    }

    #[test]
    fn snap_to_rest_lands_on_intent() {
        let mut menu = MenuMotion::new();
        menu.toggle();
        menu.step(0.1);
        menu.snap_to_rest();
        assert_eq!(menu.phase(), MenuPhase::Open);
        assert_eq!(menu.value(), 1.0);

        menu.toggle();
        menu.snap_to_rest();
        assert_eq!(menu.phase(), MenuPhase::Closed);
    }
}
