use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::LocaleContext;
use crate::Route;

/// Minimal layout variant: no navigation chrome, just the greeting card.
#[function_component(Welcome)]
pub fn welcome() -> Html {
    let locale = use_context::<LocaleContext>().expect("locale context missing");

    let home = Route::Home {
        lang: locale.current().as_str().to_string(),
    };

    html! {
        <div class="welcome-page">
            <div class="welcome-card">
                <div class="welcome-mark">{"🐎"}</div>
                <h1>{locale.t("welcome.title")}</h1>
                <p>{locale.t("welcome.body")}</p>
                <Link<Route> to={home} classes="welcome-cta">
                    {locale.t("welcome.home")}
                </Link<Route>>
            </div>

            <style>
                {r#"
                .welcome-page {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 1.5rem;
                    background: linear-gradient(160deg, #fef2f2, #fff7ed);
                }

                .dark .welcome-page {
                    background: linear-gradient(160deg, #18181b, #0c0a09);
                }

                .welcome-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    max-width: 28rem;
                    padding: 3rem;
                    border-radius: 2rem;
                    border: 1px solid rgba(254, 202, 202, 0.5);
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(24px);
                    text-align: center;
                }

                .dark .welcome-card {
                    background: rgba(24, 24, 27, 0.7);
                    border-color: rgba(255, 255, 255, 0.1);
                }

                .welcome-mark {
                    font-size: 3rem;
                }

                .welcome-card h1 {
                    margin: 0;
                    font-size: 1.75rem;
                    font-weight: 900;
                    color: #111827;
                }

                .dark .welcome-card h1 {
                    color: #ffffff;
                }

                .welcome-card p {
                    margin: 0;
                    color: #6b7280;
                    line-height: 1.7;
                }

                .dark .welcome-card p {
                    color: #9ca3af;
                }

                .welcome-cta {
                    margin-top: 1rem;
                    padding: 0.875rem 2rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #dc2626, #ea580c);
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 20px 25px -5px rgba(239, 68, 68, 0.3);
                }

                .welcome-cta:hover {
                    transform: scale(1.05);
                }
                "#}
            </style>
        </div>
    }
}
