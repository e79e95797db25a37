use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod i18n;
mod motion;
mod theme;
mod translations;

mod components {
    pub mod footer;
    pub mod navbar;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod welcome;
}

use components::{footer::Footer, navbar::Navbar};
use i18n::{Language, LocaleContext};
use pages::{home::Home, not_found::NotFound, welcome::Welcome};
use theme::ThemeContext;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/:lang")]
    Home { lang: String },
    #[at("/:lang/welcome")]
    Welcome { lang: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Root => {
            html! { <LanguageRedirect path={"/".to_string()} /> }
        }
        Route::Home { lang } => match Language::from_tag(&lang) {
            Some(_) => {
                info!("Rendering Home page");
                html! { <Home /> }
            }
            // Not a language segment, so the whole path is unprefixed.
            None => html! { <LanguageRedirect path={format!("/{}", lang)} /> },
        },
        Route::Welcome { lang } => match Language::from_tag(&lang) {
            Some(_) => {
                info!("Rendering Welcome page");
                html! { <Welcome /> }
            }
            None => html! { <LanguageRedirect path={format!("/{}/welcome", lang)} /> },
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RedirectProps {
    pub path: String,
}

/// Replaces an unprefixed path with its language-prefixed form, resolved
/// from stored preference, then system locale, then the fallback.
#[function_component(LanguageRedirect)]
fn language_redirect(props: &RedirectProps) -> Html {
    let navigator = use_navigator().unwrap();
    let path = props.path.clone();

    use_effect_with_deps(
        move |_| {
            let resolved = i18n::detect_language();
            if let Some(target) = i18n::redirect_target(&path, resolved) {
                info!("redirecting {} -> {}", path, target);
                if let Some(route) = Route::recognize(&target).or_else(Route::not_found_route) {
                    navigator.replace(&route);
                }
            }
            || ()
        },
        (),
    );

    html! {}
}

fn route_language(route: &Route) -> Option<Language> {
    match route {
        Route::Home { lang } | Route::Welcome { lang } => Language::from_tag(lang),
        _ => None,
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    // Resolves from the live path first so a language-prefixed entry URL
    // renders in its language on the very first frame.
    let language = use_state(|| {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        i18n::resolve_initial_language(
            &path,
            i18n::stored_language().as_deref(),
            i18n::system_language().as_deref(),
        )
    });
    let mode = use_state(theme::detect_mode);

    let locale = LocaleContext {
        language: language.clone(),
    };
    let theme_ctx = ThemeContext { mode: mode.clone() };

    let route = use_route::<Route>();

    // The URL is authoritative: entering a language-prefixed route updates
    // the live language selection.
    {
        let language = language.clone();
        use_effect_with_deps(
            move |route: &Option<Route>| {
                if let Some(lang) = route.as_ref().and_then(route_language) {
                    if lang != *language {
                        language.set(lang);
                    }
                }
                || ()
            },
            route.clone(),
        );
    }

    let chrome_hidden = matches!(route, Some(Route::Welcome { .. }));

    html! {
        <ContextProvider<LocaleContext> context={locale}>
            <ContextProvider<ThemeContext> context={theme_ctx}>
                { if chrome_hidden { html! {} } else { html! { <Navbar /> } } }
                <Switch<Route> render={switch} />
                { if chrome_hidden { html! {} } else { html! { <Footer /> } } }
            </ContextProvider<ThemeContext>>
        </ContextProvider<LocaleContext>>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // Theme class goes on the root before the first paint.
    let mode = theme::apply_before_render();

    info!("Starting application ({} theme)", mode.as_str());
    yew::Renderer::<App>::new().render();
}
