use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{self, LocaleContext};
use crate::motion::{self, MenuMotion, NavFrame, OverlayFrame, ViewportClass};
use crate::theme::ThemeContext;
use crate::Route;

const MENU_ITEMS: [(&str, &str); 4] = [
    ("nav.showcase", "#showcase"),
    ("nav.solutions", "#solutions"),
    ("nav.innovation", "#innovation"),
    ("nav.about", "#about"),
];

fn set_style(node: &NodeRef, style: &str) {
    if let Some(element) = node.cast::<Element>() {
        let _ = element.set_attribute("style", style);
    }
}

fn set_scroll_lock(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}

fn paint_navbar(
    frame: &NavFrame,
    container: &NodeRef,
    full_logo: &NodeRef,
    compact_logo: &NodeRef,
    menu_row: &NodeRef,
) {
    set_style(container, &frame.container_style());
    set_style(full_logo, &frame.full_logo.style());
    set_style(compact_logo, &frame.compact_logo.style());
    match &frame.menu_row {
        Some(row) => set_style(menu_row, &row.style()),
        None => set_style(menu_row, "display: none;"),
    }
}

fn paint_overlay(overlay: &NodeRef, frame: &OverlayFrame) {
    set_style(overlay, &frame.style());
}

fn settle_instantly(motion: &Rc<RefCell<MenuMotion>>, overlay: &NodeRef) {
    motion.borrow_mut().snap_to_rest();
    paint_overlay(overlay, &motion.borrow().frame());
    set_scroll_lock(motion.borrow().scroll_locked());
}

// Runs the overlay transition on the frame scheduler. Only one loop is live
// at a time: a toggle while a loop is running has already reversed the shared
// machine, and the live loop picks that up on its next tick. Without a frame
// scheduler the overlay snaps straight to its resting state.
fn drive_overlay(motion: Rc<RefCell<MenuMotion>>, overlay: NodeRef, running: Rc<RefCell<bool>>) {
    set_scroll_lock(motion.borrow().scroll_locked());
    if *running.borrow() {
        return;
    }

    let window = match window() {
        Some(w) => w,
        None => {
            settle_instantly(&motion, &overlay);
            return;
        }
    };

    let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let last_tick: Rc<RefCell<Option<f64>>> = Rc::new(RefCell::new(None));

    *running.borrow_mut() = true;
    *callback.borrow_mut() = Some(Closure::wrap(Box::new({
        let callback = callback.clone();
        let motion = motion.clone();
        let overlay = overlay.clone();
        let running = running.clone();
        let last_tick = last_tick.clone();
        move |now: f64| {
            let dt = match *last_tick.borrow() {
                Some(prev) => ((now - prev) / 1000.0).max(0.0),
                None => 0.0,
            };
            *last_tick.borrow_mut() = Some(now);

            let animating = motion.borrow_mut().step(dt);
            paint_overlay(&overlay, &motion.borrow().frame());
            set_scroll_lock(motion.borrow().scroll_locked());

            if animating {
                let rescheduled = web_sys::window().map_or(false, |win| {
                    match callback.borrow().as_ref() {
                        Some(cb) => win
                            .request_animation_frame(cb.as_ref().unchecked_ref())
                            .is_ok(),
                        None => false,
                    }
                });
                if rescheduled {
                    return;
                }
                // Scheduler went away mid-flight: fail open to the end state.
                motion.borrow_mut().snap_to_rest();
                paint_overlay(&overlay, &motion.borrow().frame());
                set_scroll_lock(motion.borrow().scroll_locked());
            }
            *running.borrow_mut() = false;
            callback.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    let scheduled = match callback.borrow().as_ref() {
        Some(cb) => window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_ok(),
        None => false,
    };
    if !scheduled {
        *running.borrow_mut() = false;
        callback.borrow_mut().take();
        settle_instantly(&motion, &overlay);
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let locale = use_context::<LocaleContext>().expect("locale context missing");
    let theme = use_context::<ThemeContext>().expect("theme context missing");

    let menu_open = use_state(|| false);
    let menu_motion = use_mut_ref(MenuMotion::new);
    let raf_running = use_mut_ref(|| false);

    let container_ref = use_node_ref();
    let full_logo_ref = use_node_ref();
    let compact_logo_ref = use_node_ref();
    let menu_row_ref = use_node_ref();
    let overlay_ref = use_node_ref();

    // Scroll + resize drive the collapse. Both recompute from the live
    // window values at invocation time, so a resize mid-scroll re-derives
    // from the current offset instead of replaying from zero.
    {
        let container_ref = container_ref.clone();
        let full_logo_ref = full_logo_ref.clone();
        let compact_logo_ref = compact_logo_ref.clone();
        let menu_row_ref = menu_row_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let apply: Rc<dyn Fn()> = Rc::new(move || {
                    if let Some(win) = web_sys::window() {
                        let scroll_y = win.scroll_y().unwrap_or(0.0);
                        let width = win
                            .inner_width()
                            .ok()
                            .and_then(|v| v.as_f64())
                            .unwrap_or(0.0);
                        let frame = motion::navbar_frame(
                            motion::progress(scroll_y),
                            ViewportClass::from_width(width),
                        );
                        paint_navbar(
                            &frame,
                            &container_ref,
                            &full_logo_ref,
                            &compact_logo_ref,
                            &menu_row_ref,
                        );
                    }
                });

                let scroll_callback = Closure::wrap(Box::new({
                    let apply = apply.clone();
                    move || (*apply)()
                }) as Box<dyn FnMut()>);
                let resize_callback = Closure::wrap(Box::new({
                    let apply = apply.clone();
                    move || (*apply)()
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial paint from wherever the page is restored to.
                (*apply)();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        let menu_motion = menu_motion.clone();
        let overlay_ref = overlay_ref.clone();
        let raf_running = raf_running.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_motion.borrow_mut().toggle();
            menu_open.set(menu_motion.borrow().open_intent());
            drive_overlay(menu_motion.clone(), overlay_ref.clone(), raf_running.clone());
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        let menu_motion = menu_motion.clone();
        let overlay_ref = overlay_ref.clone();
        let raf_running = raf_running.clone();
        Callback::from(move |_: MouseEvent| {
            menu_motion.borrow_mut().close();
            menu_open.set(false);
            drive_overlay(menu_motion.clone(), overlay_ref.clone(), raf_running.clone());
        })
    };

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            theme.toggle();
        })
    };

    let toggle_language = {
        let locale = locale.clone();
        Callback::from(move |_: MouseEvent| {
            i18n::switch_language(&locale);
        })
    };

    let home = Route::Home {
        lang: locale.current().as_str().to_string(),
    };

    html! {
        <>
            <nav class="top-nav">
                <div ref={container_ref} class="nav-pill">
                    <Link<Route> to={home} classes="nav-logo-link">
                        <div ref={full_logo_ref} class="logo-full">
                            <span class="logo-wordmark">{"Gudupao Spark"}</span>
                        </div>
                        <div ref={compact_logo_ref} class="logo-compact">
                            <span class="logo-mark">{"GS"}</span>
                        </div>
                    </Link<Route>>

                    <div ref={menu_row_ref} class="nav-menu-row">
                        {
                            MENU_ITEMS.iter().map(|(key, href)| html! {
                                <a key={*key} href={*href} class="nav-menu-link">
                                    {locale.t(key)}
                                </a>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="nav-actions">
                        <button class="nav-action lang-toggle" onclick={toggle_language}>
                            <svg width="16" height="16" viewBox="0 0 24 24" fill="none"
                                stroke="currentColor" stroke-width="2" stroke-linecap="round"
                                stroke-linejoin="round">
                                <circle cx="12" cy="12" r="10" />
                                <line x1="2" y1="12" x2="22" y2="12" />
                                <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" />
                            </svg>
                            <span class="lang-label">{locale.current().label()}</span>
                        </button>

                        <button class="nav-action theme-toggle" onclick={toggle_theme}>
                            {
                                if theme.is_dark() {
                                    html! {
                                        <svg width="19" height="19" viewBox="0 0 24 24" fill="none"
                                            stroke="currentColor" stroke-width="2.5" stroke-linecap="round"
                                            stroke-linejoin="round">
                                            <circle cx="12" cy="12" r="5" />
                                            <line x1="12" y1="1" x2="12" y2="3" />
                                            <line x1="12" y1="21" x2="12" y2="23" />
                                            <line x1="4.22" y1="4.22" x2="5.64" y2="5.64" />
                                            <line x1="18.36" y1="18.36" x2="19.78" y2="19.78" />
                                            <line x1="1" y1="12" x2="3" y2="12" />
                                            <line x1="21" y1="12" x2="23" y2="12" />
                                            <line x1="4.22" y1="19.78" x2="5.64" y2="18.36" />
                                            <line x1="18.36" y1="5.64" x2="19.78" y2="4.22" />
                                        </svg>
                                    }
                                } else {
                                    html! {
                                        <svg width="19" height="19" viewBox="0 0 24 24" fill="none"
                                            stroke="currentColor" stroke-width="2.5" stroke-linecap="round"
                                            stroke-linejoin="round">
                                            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" />
                                        </svg>
                                    }
                                }
                            }
                        </button>

                        <button class="nav-action menu-toggle" onclick={toggle_menu}>
                            {
                                if *menu_open {
                                    html! {
                                        <svg width="22" height="22" viewBox="0 0 24 24" fill="none"
                                            stroke="currentColor" stroke-width="2.5" stroke-linecap="round"
                                            stroke-linejoin="round">
                                            <line x1="18" y1="6" x2="6" y2="18" />
                                            <line x1="6" y1="6" x2="18" y2="18" />
                                        </svg>
                                    }
                                } else {
                                    html! {
                                        <svg width="22" height="22" viewBox="0 0 24 24" fill="none"
                                            stroke="currentColor" stroke-width="2.5" stroke-linecap="round"
                                            stroke-linejoin="round">
                                            <line x1="3" y1="6" x2="21" y2="6" />
                                            <line x1="3" y1="12" x2="21" y2="12" />
                                            <line x1="3" y1="18" x2="21" y2="18" />
                                        </svg>
                                    }
                                }
                            }
                        </button>
                    </div>
                </div>
            </nav>

            <div ref={overlay_ref} class="mobile-overlay">
                <div class="mobile-overlay-links">
                    {
                        MENU_ITEMS.iter().map(|(key, href)| html! {
                            <a key={*key} href={*href} class="mobile-overlay-link"
                                onclick={close_menu.clone()}>
                                {locale.t(key)}
                            </a>
                        }).collect::<Html>()
                    }
                </div>
                <div class="mobile-overlay-footer">
                    <div class="mobile-overlay-rule"></div>
                    <p>{locale.t("nav.tagline")}</p>
                </div>
            </div>

            <style>
                {r#"
                :root {
                    --nav-surface-rgb: 255, 255, 255;
                    --nav-border-rgb: 15, 23, 42;
                }

                .dark {
                    --nav-surface-rgb: 24, 24, 27;
                    --nav-border-rgb: 255, 255, 255;
                }

                .top-nav {
                    position: fixed;
                    top: 2rem;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    display: flex;
                    justify-content: center;
                    padding: 0 1.5rem;
                    pointer-events: none;
                }

                .nav-pill {
                    pointer-events: auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    width: 100%;
                    max-width: 1280px;
                    height: 64px;
                    padding: 0 1rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(var(--nav-border-rgb), 0.12);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.08);
                }

                .nav-logo-link {
                    display: flex;
                    align-items: center;
                    text-decoration: none;
                }

                .nav-logo-link:hover {
                    opacity: 0.8;
                }

                .logo-full {
                    display: flex;
                    align-items: center;
                    flex-shrink: 0;
                    height: 28px;
                    width: 96px;
                }

                .logo-wordmark {
                    font-size: 1rem;
                    font-weight: 900;
                    letter-spacing: -0.03em;
                    white-space: nowrap;
                    color: #111827;
                }

                .logo-compact {
                    display: none;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                    height: 32px;
                    width: 32px;
                    border-radius: 9999px;
                    background: linear-gradient(135deg, #dc2626, #ea580c);
                }

                .logo-mark {
                    font-size: 0.8rem;
                    font-weight: 900;
                    color: #ffffff;
                }

                .dark .logo-wordmark {
                    color: #f4f4f5;
                }

                .nav-menu-row {
                    display: flex;
                    align-items: center;
                    gap: 2.5rem;
                    margin: 0 auto;
                }

                .nav-menu-link {
                    font-size: 13px;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    text-decoration: none;
                    color: #6b7280;
                    white-space: nowrap;
                }

                .nav-menu-link:hover {
                    color: #000000;
                }

                .dark .nav-menu-link {
                    color: #9ca3af;
                }

                .dark .nav-menu-link:hover {
                    color: #ffffff;
                }

                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    flex-shrink: 0;
                }

                .nav-action {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.625rem;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    color: #374151;
                    cursor: pointer;
                }

                .nav-action:hover {
                    background: rgba(0, 0, 0, 0.05);
                }

                .nav-action:active {
                    transform: scale(0.9);
                }

                .dark .nav-action {
                    color: #d1d5db;
                }

                .dark .nav-action:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .lang-toggle {
                    padding: 0.5rem 0.75rem;
                }

                .lang-label {
                    font-size: 0.75rem;
                    font-weight: 900;
                    letter-spacing: -0.02em;
                }

                .menu-toggle {
                    display: none;
                }

                .mobile-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 90;
                    display: none;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 0 2rem;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(40px);
                    -webkit-backdrop-filter: blur(40px);
                }

                .dark .mobile-overlay {
                    background: rgba(0, 0, 0, 0.9);
                }

                .mobile-overlay-links {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                }

                .mobile-overlay-link {
                    font-size: 2.25rem;
                    font-weight: 900;
                    letter-spacing: -0.03em;
                    text-decoration: none;
                    color: #111827;
                }

                .mobile-overlay-link:hover {
                    color: #3b82f6;
                }

                .dark .mobile-overlay-link {
                    color: #ffffff;
                }

                .mobile-overlay-footer {
                    position: absolute;
                    bottom: 3rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }

                .mobile-overlay-rule {
                    height: 1px;
                    width: 3rem;
                    background: rgba(0, 0, 0, 0.1);
                }

                .dark .mobile-overlay-rule {
                    background: rgba(255, 255, 255, 0.1);
                }

                .mobile-overlay-footer p {
                    margin: 0;
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: #9ca3af;
                }

                @media (max-width: 1023px) {
                    .nav-menu-row {
                        display: none;
                    }

                    .menu-toggle {
                        display: flex;
                    }
                }
                "#}
            </style>
        </>
    }
}
