use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::LocaleContext;
use crate::Route;

/// Terminal state for unmatched paths; recovery is the home link, which goes
/// back through the language redirect.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let locale = use_context::<LocaleContext>().expect("locale context missing");

    html! {
        <div class="not-found-page">
            <h1 class="not-found-code">{"404"}</h1>
            <h2>{locale.t("error.notFound")}</h2>
            <p>{locale.t("error.notFoundDesc")}</p>
            <Link<Route> to={Route::Root} classes="not-found-cta">
                {locale.t("error.goHome")}
            </Link<Route>>

            <style>
                {r#"
                .not-found-page {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 70vh;
                    padding: 0 1.5rem;
                    text-align: center;
                }

                .not-found-code {
                    margin: 0 0 1rem;
                    font-size: 8rem;
                    font-weight: 900;
                    line-height: 1;
                    background: linear-gradient(90deg, #dc2626, #ea580c);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .not-found-page h2 {
                    margin: 0 0 1.5rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #111827;
                }

                .dark .not-found-page h2 {
                    color: #ffffff;
                }

                .not-found-page p {
                    max-width: 28rem;
                    margin: 0 0 2.5rem;
                    color: #6b7280;
                }

                .dark .not-found-page p {
                    color: #9ca3af;
                }

                .not-found-cta {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #dc2626, #ea580c);
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 20px 25px -5px rgba(239, 68, 68, 0.3);
                }

                .not-found-cta:hover {
                    transform: scale(1.05);
                }

                .not-found-cta:active {
                    transform: scale(0.95);
                }
                "#}
            </style>
        </div>
    }
}
