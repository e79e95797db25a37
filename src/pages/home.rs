use yew::prelude::*;

use crate::i18n::LocaleContext;

const FEATURE_ICONS: [&str; 6] = ["🐉", "⚡️", "🌏", "✨", "🚀", "🎨"];

#[function_component(Home)]
pub fn home() -> Html {
    let locale = use_context::<LocaleContext>().expect("locale context missing");

    html! {
        <div class="home-page">
            <div class="home-glow">
                <div class="home-glow-orb home-glow-top"></div>
                <div class="home-glow-orb home-glow-bottom"></div>
            </div>

            // Hero
            <section class="hero">
                <div class="hero-badge">
                    <span class="hero-badge-dot">
                        <span class="hero-badge-ping"></span>
                        <span class="hero-badge-core"></span>
                    </span>
                    <span class="hero-badge-text">{locale.t("hero.badge")}</span>
                </div>

                <h1 class="hero-title">
                    {locale.t("hero.title.top")}
                    <br />
                    <span class="hero-title-accent">{locale.t("hero.title.accent")}</span>
                </h1>

                <p class="hero-subtitle">
                    {locale.t("hero.subtitle.lead")}
                    <br />
                    <span class="hero-subtitle-highlight">{locale.t("hero.subtitle.highlight")}</span>
                    {locale.t("hero.subtitle.tail")}
                </p>

                <div class="hero-cta-group">
                    <button class="hero-cta-primary">
                        <span>{locale.t("hero.cta.primary")}</span>
                        <svg width="16" height="16" viewBox="0 0 24 24" fill="none"
                            stroke="currentColor" stroke-width="2" stroke-linecap="round"
                            stroke-linejoin="round">
                            <path d="M13 7l5 5m0 0l-5 5m5-5H6" />
                        </svg>
                    </button>
                    <button class="hero-cta-secondary">
                        {locale.t("hero.cta.secondary")}
                    </button>
                </div>
            </section>

            // Features
            <section id="features" class="features">
                <div class="section-heading">
                    <div class="section-tag section-tag-red">{locale.t("features.tag")}</div>
                    <h2>
                        {locale.t("features.title.pre")}
                        <span class="accent-red">{locale.t("features.title.accent")}</span>
                        {locale.t("features.title.post")}
                    </h2>
                    <p>{locale.t("features.subtitle")}</p>
                </div>

                <div class="features-grid">
                    {
                        (1..=6).map(|i| {
                            let title_key = format!("features.{}.title", i);
                            let desc_key = format!("features.{}.desc", i);
                            html! {
                                <div key={i} class="feature-card">
                                    <div class="feature-card-glow"></div>
                                    <div class="feature-icon">{FEATURE_ICONS[i - 1]}</div>
                                    <h3>{locale.t(&title_key).to_string()}</h3>
                                    <p>{locale.t(&desc_key).to_string()}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            // Showcase
            <section id="showcase" class="showcase">
                <div class="showcase-heading">
                    <div class="showcase-heading-text">
                        <div class="section-tag section-tag-orange">{locale.t("showcase.tag")}</div>
                        <h2>
                            {locale.t("showcase.title.pre")}
                            <span class="accent-orange">{locale.t("showcase.title.accent")}</span>
                            {locale.t("showcase.title.post")}
                        </h2>
                        <p>{locale.t("showcase.subtitle")}</p>
                    </div>
                    <button class="showcase-more">
                        {locale.t("showcase.more")}
                        <span class="showcase-more-arrow">{"→"}</span>
                    </button>
                </div>

                <div class="showcase-grid">
                    <div class="showcase-card showcase-card-featured">
                        <div class="showcase-card-shade"></div>
                        <div class="showcase-card-body">
                            <span class="showcase-card-tag">{locale.t("showcase.featured.tag")}</span>
                            <h3>{locale.t("showcase.featured.title")}</h3>
                            <p>{locale.t("showcase.featured.desc")}</p>
                        </div>
                    </div>
                    <div class="showcase-column">
                        <div class="showcase-card">
                            <div class="showcase-card-shade"></div>
                            <div class="showcase-card-body">
                                <h3>{locale.t("showcase.summit.title")}</h3>
                                <p class="showcase-card-sub">{locale.t("showcase.summit.sub")}</p>
                            </div>
                        </div>
                        <div class="showcase-card">
                            <div class="showcase-card-shade"></div>
                            <div class="showcase-card-body">
                                <h3>{locale.t("showcase.hackathon.title")}</h3>
                                <p class="showcase-card-sub">{locale.t("showcase.hackathon.sub")}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // About
            <section id="about" class="about">
                <div class="about-grid">
                    <div class="about-visual">
                        <div class="about-visual-glow"></div>
                        <div class="about-visual-card">{"2024 → 2026"}</div>
                    </div>
                    <div class="about-text">
                        <div class="section-tag section-tag-zinc">{locale.t("about.tag")}</div>
                        <h2>
                            {locale.t("about.title.pre")}
                            <span class="accent-gradient">{locale.t("about.title.accent")}</span>
                            {locale.t("about.title.post")}
                        </h2>
                        <p>{locale.t("about.body")}</p>
                        <div class="about-stats">
                            <div class="about-stat">
                                <div class="about-stat-value">{"10k+"}</div>
                                <div class="about-stat-label">{locale.t("about.stat.members")}</div>
                            </div>
                            <div class="about-stat">
                                <div class="about-stat-value">{"50+"}</div>
                                <div class="about-stat-label">{locale.t("about.stat.projects")}</div>
                            </div>
                            <div class="about-stat">
                                <div class="about-stat-value">{"100%"}</div>
                                <div class="about-stat-label">{locale.t("about.stat.passion")}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // Bottom ornament
            <div class="home-blessing">
                <div class="home-blessing-ornament">
                    <div class="home-blessing-line"></div>
                    <div class="home-blessing-dot"></div>
                    <div class="home-blessing-line"></div>
                </div>
                <p>{locale.t("home.blessing")}</p>
            </div>

            <div class="footer-spacer"></div>

            <style>
                {r#"
                .home-page {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    width: 100%;
                    min-height: 100vh;
                    overflow: hidden;
                }

                .home-glow {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    pointer-events: none;
                }

                .home-glow-orb {
                    position: absolute;
                    width: 50%;
                    height: 50%;
                    border-radius: 9999px;
                    background: linear-gradient(135deg, rgba(220, 38, 38, 0.2), rgba(234, 88, 12, 0.2));
                    filter: blur(120px);
                }

                .home-glow-top {
                    top: -20%;
                    left: -10%;
                }

                .home-glow-bottom {
                    bottom: -20%;
                    right: -10%;
                }

                .hero {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    max-width: 1280px;
                    padding: 12rem 1.5rem 8rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    margin-bottom: 2rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(254, 202, 202, 0.5);
                    background: rgba(255, 255, 255, 0.5);
                    backdrop-filter: blur(12px);
                }

                .dark .hero-badge {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.1);
                }

                .hero-badge-dot {
                    position: relative;
                    display: flex;
                    height: 0.625rem;
                    width: 0.625rem;
                }

                .hero-badge-ping {
                    position: absolute;
                    inset: 0;
                    border-radius: 9999px;
                    background: #ef4444;
                    opacity: 0.75;
                    animation: badge-ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                }

                .hero-badge-core {
                    position: relative;
                    display: inline-flex;
                    height: 0.625rem;
                    width: 0.625rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #ef4444, #f97316);
                }

                @keyframes badge-ping {
                    75%, 100% {
                        transform: scale(2);
                        opacity: 0;
                    }
                }

                .hero-badge-text {
                    font-size: 0.75rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    background: linear-gradient(90deg, #dc2626, #ea580c);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .hero-title {
                    margin: 0 0 2rem;
                    font-size: clamp(4rem, 12vw, 10rem);
                    font-weight: 900;
                    letter-spacing: -0.04em;
                    line-height: 0.9;
                    background: linear-gradient(180deg, #111827, #4b5563);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    user-select: none;
                }

                .dark .hero-title {
                    background: linear-gradient(180deg, #ffffff, rgba(255, 255, 255, 0.6));
                    -webkit-background-clip: text;
                    background-clip: text;
                }

                .hero-title-accent {
                    background: linear-gradient(90deg, #dc2626, #f97316, #dc2626);
                    background-size: 200% auto;
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    animation: gradient-slide 4s linear infinite;
                }

                @keyframes gradient-slide {
                    to {
                        background-position: 200% center;
                    }
                }

                .hero-subtitle {
                    max-width: 42rem;
                    margin: 0 0 3rem;
                    font-size: 1.25rem;
                    font-weight: 500;
                    line-height: 1.7;
                    color: #4b5563;
                }

                .dark .hero-subtitle {
                    color: #d1d5db;
                }

                .hero-subtitle-highlight {
                    color: #dc2626;
                }

                .dark .hero-subtitle-highlight {
                    color: #f87171;
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                }

                .hero-cta-primary {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #dc2626, #ea580c);
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    cursor: pointer;
                    box-shadow: 0 20px 25px -5px rgba(239, 68, 68, 0.3);
                }

                .hero-cta-primary:hover {
                    transform: scale(1.05);
                }

                .hero-cta-primary:active {
                    transform: scale(0.95);
                }

                .hero-cta-secondary {
                    padding: 1rem 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.4);
                    backdrop-filter: blur(24px);
                    color: #111827;
                    font-size: 0.875rem;
                    font-weight: 700;
                    cursor: pointer;
                }

                .dark .hero-cta-secondary {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.1);
                    color: #ffffff;
                }

                .features,
                .showcase,
                .about {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    max-width: 1280px;
                    padding: 6rem 1.5rem;
                    scroll-margin-top: 5rem;
                }

                .section-heading {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-tag {
                    display: inline-flex;
                    padding: 0.25rem 0.75rem;
                    margin-bottom: 1rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .section-tag-red {
                    background: rgba(239, 68, 68, 0.1);
                    color: #dc2626;
                }

                .section-tag-orange {
                    background: rgba(249, 115, 22, 0.1);
                    color: #ea580c;
                }

                .section-tag-zinc {
                    background: #f4f4f5;
                    color: #52525b;
                }

                .dark .section-tag-zinc {
                    background: rgba(255, 255, 255, 0.1);
                    color: #d4d4d8;
                }

                .section-heading h2,
                .showcase-heading h2,
                .about-text h2 {
                    margin: 0 0 1.5rem;
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 900;
                    color: #111827;
                }

                .dark .section-heading h2,
                .dark .showcase-heading h2,
                .dark .about-text h2 {
                    color: #ffffff;
                }

                .accent-red { color: #dc2626; }
                .accent-orange { color: #f97316; }

                .accent-gradient {
                    background: linear-gradient(90deg, #dc2626, #ea580c);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .section-heading p {
                    max-width: 42rem;
                    margin: 0;
                    font-size: 1.125rem;
                    color: #6b7280;
                }

                .dark .section-heading p {
                    color: #9ca3af;
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                .feature-card {
                    position: relative;
                    padding: 2rem;
                    border-radius: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(24px);
                    overflow: hidden;
                }

                .feature-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(239, 68, 68, 0.3);
                    box-shadow: 0 25px 50px -12px rgba(239, 68, 68, 0.1);
                }

                .dark .feature-card {
                    background: rgba(24, 24, 27, 0.4);
                    border-color: rgba(255, 255, 255, 0.05);
                }

                .feature-card-glow {
                    position: absolute;
                    right: -5rem;
                    top: -5rem;
                    width: 10rem;
                    height: 10rem;
                    border-radius: 9999px;
                    background: rgba(239, 68, 68, 0.1);
                    filter: blur(48px);
                }

                .feature-icon {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 1rem;
                    border: 1px solid #fee2e2;
                    background: linear-gradient(135deg, #fef2f2, #fff7ed);
                    font-size: 1.5rem;
                }

                .dark .feature-icon {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.1);
                }

                .feature-card h3 {
                    position: relative;
                    margin: 1.5rem 0 0.75rem;
                    font-size: 1.25rem;
                    font-weight: 900;
                    color: #111827;
                }

                .feature-card:hover h3 {
                    color: #dc2626;
                }

                .dark .feature-card h3 {
                    color: #ffffff;
                }

                .dark .feature-card:hover h3 {
                    color: #f87171;
                }

                .feature-card p {
                    position: relative;
                    margin: 0;
                    font-size: 0.875rem;
                    font-weight: 500;
                    line-height: 1.7;
                    color: #6b7280;
                }

                .dark .feature-card p {
                    color: #9ca3af;
                }

                .showcase-heading {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 3rem;
                    margin-bottom: 4rem;
                }

                .showcase-heading-text {
                    max-width: 36rem;
                    text-align: left;
                }

                .showcase-heading-text p {
                    margin: 0;
                    font-size: 1.125rem;
                    color: #6b7280;
                }

                .dark .showcase-heading-text p {
                    color: #9ca3af;
                }

                .showcase-more {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 9999px;
                    background: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    cursor: pointer;
                }

                .showcase-more:hover {
                    border-color: rgba(249, 115, 22, 0.5);
                    color: #ea580c;
                }

                .dark .showcase-more {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.1);
                    color: #f4f4f5;
                }

                .showcase-more-arrow {
                    display: inline-block;
                }

                .showcase-more:hover .showcase-more-arrow {
                    transform: translateX(4px);
                }

                .showcase-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .showcase-column {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .showcase-card {
                    position: relative;
                    flex: 1;
                    min-height: 200px;
                    border-radius: 2rem;
                    overflow: hidden;
                    background: linear-gradient(135deg, #7f1d1d, #9a3412);
                }

                .showcase-card-featured {
                    aspect-ratio: 4 / 3;
                    background: linear-gradient(135deg, #991b1b, #c2410c);
                }

                .showcase-card-shade {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.2), transparent);
                    opacity: 0.6;
                }

                .showcase-card:hover .showcase-card-shade {
                    opacity: 0.8;
                }

                .showcase-card-body {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    z-index: 20;
                    padding: 2rem;
                }

                .showcase-card-tag {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #fb923c;
                }

                .showcase-card-body h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.5rem;
                    font-weight: 900;
                    color: #ffffff;
                }

                .showcase-card-body p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .showcase-card-sub {
                    font-size: 0.75rem;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .about-visual {
                    position: relative;
                    order: 2;
                }

                .about-visual-glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 3rem;
                    background: linear-gradient(135deg, rgba(239, 68, 68, 0.2), rgba(249, 115, 22, 0.2));
                    filter: blur(48px);
                    transform: rotate(-6deg);
                }

                .about-visual-card {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    aspect-ratio: 4 / 3;
                    border-radius: 3rem;
                    border: 4px solid #ffffff;
                    background: linear-gradient(135deg, #fef2f2, #fff7ed);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    font-size: 2rem;
                    font-weight: 900;
                    color: #dc2626;
                }

                .dark .about-visual-card {
                    border-color: rgba(255, 255, 255, 0.1);
                    background: linear-gradient(135deg, #27272a, #18181b);
                    color: #f87171;
                }

                .about-text {
                    order: 1;
                }

                .about-text p {
                    margin: 0 0 2rem;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: #6b7280;
                }

                .dark .about-text p {
                    color: #9ca3af;
                }

                .about-stats {
                    display: flex;
                    gap: 2rem;
                }

                .about-stat-value {
                    margin-bottom: 0.25rem;
                    font-size: 1.875rem;
                    font-weight: 900;
                    color: #111827;
                }

                .dark .about-stat-value {
                    color: #ffffff;
                }

                .about-stat-label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #9ca3af;
                }

                .home-blessing {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                    padding-bottom: 6rem;
                }

                .home-blessing-ornament {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: rgba(252, 165, 165, 0.5);
                }

                .home-blessing-line {
                    width: 3rem;
                    height: 1px;
                    background: currentColor;
                }

                .home-blessing-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: currentColor;
                }

                .home-blessing p {
                    margin: 0;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: rgba(127, 29, 29, 0.4);
                }

                .dark .home-blessing p {
                    color: rgba(254, 202, 202, 0.4);
                }

                .footer-spacer {
                    height: 6rem;
                }

                @media (min-width: 768px) {
                    .features-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .showcase-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .footer-spacer {
                        height: 10rem;
                    }
                }

                @media (min-width: 1024px) {
                    .features-grid {
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .showcase-heading {
                        flex-direction: row;
                        align-items: center;
                    }

                    .about-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .about-visual {
                        order: 1;
                    }

                    .about-text {
                        order: 2;
                    }
                }
                "#}
            </style>
        </div>
    }
}
