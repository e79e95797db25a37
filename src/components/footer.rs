use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::{self, LocaleContext};
use crate::theme::ThemeContext;

struct FooterLink {
    key: &'static str,
    href: Option<&'static str>,
}

struct FooterSection {
    title_key: &'static str,
    links: &'static [FooterLink],
}

const SECTIONS: [FooterSection; 3] = [
    FooterSection {
        title_key: "footer.company",
        links: &[
            FooterLink { key: "footer.about", href: Some("https://gudupao.top/about") },
            FooterLink { key: "footer.projects", href: Some("https://gudupao.top/projects") },
            FooterLink { key: "footer.contact", href: Some("https://gudupao.top/contact") },
        ],
    },
    FooterSection {
        title_key: "footer.follow",
        links: &[
            FooterLink { key: "X (Twitter)", href: Some("https://x.com/GudupaoSpark") },
            FooterLink { key: "GitHub", href: Some("https://github.com/GudupaoSpark") },
            FooterLink { key: "YouTube", href: Some("https://www.youtube.com/@GudupaoSpark") },
            FooterLink { key: "Bilibili", href: Some("https://space.bilibili.com/1016857888") },
            FooterLink { key: "QQ Group", href: Some("https://qm.qq.com/q/B3vKejsGBi") },
            FooterLink { key: "Discord", href: Some("https://discord.gg/SC78fv3ZRF") },
        ],
    },
    FooterSection {
        title_key: "footer.contactinfo",
        links: &[
            FooterLink { key: "official@gudupao.top", href: Some("mailto:official@gudupao.top") },
            FooterLink { key: "footer.address", href: None },
        ],
    },
];

const SOCIAL_ICONS: [(&str, &str); 5] = [
    ("Status", "https://status.gudupao.top/"),
    ("X", "https://x.com/GudupaoSpark"),
    ("GitHub", "https://github.com/GudupaoSpark"),
    ("YouTube", "https://www.youtube.com/@GudupaoSpark"),
    ("Bilibili", "https://space.bilibili.com/1016857888"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let locale = use_context::<LocaleContext>().expect("locale context missing");
    let theme = use_context::<ThemeContext>().expect("theme context missing");

    let current_year = chrono::Local::now().year();

    let toggle_language = {
        let locale = locale.clone();
        Callback::from(move |_: MouseEvent| {
            i18n::switch_language(&locale);
        })
    };

    // The brand mark follows the owned theme state, not a DOM observer.
    let logo_class = if theme.is_dark() {
        "footer-logo footer-logo-dark"
    } else {
        "footer-logo"
    };

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-socials">
                    {
                        SOCIAL_ICONS.iter().map(|(label, href)| html! {
                            <a key={*label} href={*href} target="_blank"
                                rel="noopener noreferrer" class="footer-social-link"
                                aria-label={*label}>
                                {*label}
                            </a>
                        }).collect::<Html>()
                    }
                </div>

                <div class="footer-main">
                    <div class="footer-sections">
                        {
                            SECTIONS.iter().map(|section| html! {
                                <div key={section.title_key} class="footer-section">
                                    <h4>{locale.t(section.title_key)}</h4>
                                    <ul>
                                        {
                                            section.links.iter().map(|link| html! {
                                                <li key={link.key}>
                                                    {
                                                        match link.href {
                                                            Some(href) => {
                                                                let external = href.starts_with("http");
                                                                html! {
                                                                    <a href={href}
                                                                        target={external.then_some("_blank")}
                                                                        rel={external.then_some("noopener noreferrer")}>
                                                                        {locale.t(link.key)}
                                                                    </a>
                                                                }
                                                            }
                                                            None => html! {
                                                                <span>{locale.t(link.key)}</span>
                                                            },
                                                        }
                                                    }
                                                </li>
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class={logo_class}>
                        {"Gudupao Spark"}
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} Gudupao Spark Inc. ", current_year)}{locale.t("footer.rights")}</p>
                    <button class="footer-lang-toggle" onclick={toggle_language}>
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="none"
                            stroke="currentColor" stroke-width="2" stroke-linecap="round"
                            stroke-linejoin="round">
                            <circle cx="12" cy="12" r="10" />
                            <line x1="2" y1="12" x2="22" y2="12" />
                            <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" />
                        </svg>
                        <span>{locale.current().label()}</span>
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    width: 100%;
                    background: #ffffff;
                    border-top: 2px solid #f4f4f5;
                }

                .dark .site-footer {
                    background: #09090b;
                    border-top-color: rgba(255, 255, 255, 0.05);
                }

                .footer-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }

                .footer-socials {
                    display: flex;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                }

                .footer-social-link {
                    padding: 0.375rem 0.75rem;
                    border-radius: 0.5rem;
                    font-size: 0.8rem;
                    font-weight: 700;
                    text-decoration: none;
                    color: #a1a1aa;
                }

                .footer-social-link:hover {
                    background: #fafafa;
                    color: #18181b;
                }

                .dark .footer-social-link:hover {
                    background: rgba(255, 255, 255, 0.05);
                    color: #f4f4f5;
                }

                .footer-main {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 2.5rem;
                    margin-bottom: 2rem;
                }

                .footer-sections {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    flex: 1;
                    width: 100%;
                    max-width: 42rem;
                }

                .footer-section h4 {
                    margin: 0 0 0.5rem;
                    font-size: 1rem;
                    font-weight: 900;
                    color: #18181b;
                }

                .dark .footer-section h4 {
                    color: #f4f4f5;
                }

                .footer-section ul {
                    margin: 0;
                    padding: 0;
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }

                .footer-section a,
                .footer-section span {
                    font-size: 1rem;
                    font-weight: 700;
                    text-decoration: none;
                    color: #a1a1aa;
                }

                .footer-section a:hover {
                    color: #2563eb;
                }

                .dark .footer-section a,
                .dark .footer-section span {
                    color: #71717a;
                }

                .dark .footer-section a:hover {
                    color: #60a5fa;
                }

                .footer-logo {
                    flex-shrink: 0;
                    font-size: 2rem;
                    font-weight: 900;
                    letter-spacing: -0.03em;
                    color: #18181b;
                    opacity: 0.9;
                }

                .footer-logo:hover {
                    opacity: 1;
                }

                .footer-logo-dark {
                    color: #f4f4f5;
                }

                .footer-bottom {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid #f4f4f5;
                }

                .dark .footer-bottom {
                    border-top-color: rgba(255, 255, 255, 0.05);
                }

                .footer-bottom p {
                    margin: 0;
                    font-size: 1rem;
                    font-weight: 700;
                    color: #a1a1aa;
                }

                .dark .footer-bottom p {
                    color: #52525b;
                }

                .footer-lang-toggle {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border: 1px solid #f4f4f5;
                    border-radius: 9999px;
                    background: #fafafa;
                    color: #3f3f46;
                    font-size: 0.875rem;
                    font-weight: 900;
                    cursor: pointer;
                }

                .footer-lang-toggle:hover {
                    background: #f4f4f5;
                }

                .dark .footer-lang-toggle {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.1);
                    color: #d4d4d8;
                }

                .dark .footer-lang-toggle:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                @media (min-width: 768px) {
                    .footer-sections {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .footer-bottom {
                        flex-direction: row;
                    }
                }

                @media (min-width: 1024px) {
                    .footer-main {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
