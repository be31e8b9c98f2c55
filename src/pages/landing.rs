use chrono::Datelike;
use yew::prelude::*;

use crate::components::nav::Header;
use crate::components::showcase::FeatureShowcase;
use crate::config::SiteConfig;
use crate::pages::content::{
    DEMO_DURATION, SECTION_CONTACT, SECTION_DEMO, SECTION_FEATURES, SECTION_SOLUTIONS,
    SECTION_TECHNOLOGY, SOLUTION_POINTS, STATS, TECHNOLOGY_CARDS,
};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: SiteConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top on initial mount, unless we were linked to a section
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    let has_fragment = window
                        .location()
                        .hash()
                        .map(|hash| hash.len() > 1)
                        .unwrap_or(false);
                    if !has_fragment {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    let config = &props.config;
    let brand = &config.brand;
    let year = chrono::Utc::now().year();

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <div class="backdrop">
                <div class="blob blob-left"></div>
                <div class="blob blob-right"></div>
                <div class="blob blob-bottom"></div>
            </div>

            <Header brand={brand.clone()} />

            <main>
                <section class="hero">
                    <div class="container split">
                        <div class="hero-text fade-in-up">
                            <div class="badge"><i class="fas fa-wand-magic-sparkles"></i>{"Solving Real-World Power Grid Challenges"}</div>
                            <h1>
                                {"Real-Time Power Grid "}
                                <span class="accent">{"Oscillation Monitoring"}</span>
                            </h1>
                            <p class="lead">
                                {"Innovative solutions for real-time PMU analysis. Prevent blackouts before they happen with advanced multi-channel signal processing and AI-powered predictions."}
                            </p>
                            <div class="cta-row">
                                <a href={format!("#{}", SECTION_DEMO)} class="btn btn-primary">
                                    {"Schedule Demo"}<i class="fas fa-chevron-right"></i>
                                </a>
                                <a href={format!("#{}", SECTION_FEATURES)} class="btn btn-outline">
                                    {"Explore Features"}
                                </a>
                            </div>
                        </div>
                        <div class="media-frame fade-in">
                            <img src={config.media.hero.clone()} alt="PMU" />
                        </div>
                    </div>
                </section>

                <section id={SECTION_TECHNOLOGY} class="section section-tinted">
                    <div class="container">
                        <div class="section-heading">
                            <div class="badge"><i class="fas fa-brain"></i>{"Advanced Technology"}</div>
                            <h2>{"Cutting-Edge PMU Analysis"}</h2>
                            <p>{"Leverage state-of-the-art technology to capture power system dynamics and identify potential issues in real-time."}</p>
                        </div>
                        <div class="card-grid">
                            { for TECHNOLOGY_CARDS.iter().map(|card| html! {
                                <div class="card fade-in-up">
                                    <div class="icon-tile"><i class={card.icon}></i></div>
                                    <h3>{card.title}</h3>
                                    <p>{card.body}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id={SECTION_DEMO} class="section">
                    <div class="container">
                        <div class="section-heading">
                            <div class="badge"><i class="fas fa-globe"></i>{"Live Demo"}</div>
                            <h2>{"See Our Software in Action"}</h2>
                            <p>{format!("Watch how {}'s real-time monitoring system detects power grid oscillations and prevents potential blackouts before they occur.", brand)}</p>
                        </div>
                        <div class="video-frame">
                            <div class="video-placeholder">
                                <div class="play-button">
                                    <svg viewBox="0 0 24 24" fill="currentColor"><path d="M8 5v14l11-7z" /></svg>
                                </div>
                                <h3>{format!("{} Dashboard Demo", brand)}</h3>
                                <p>{"Watch a live demonstration of real-time PMU data analysis and oscillation detection in action."}</p>
                                <span class="chip"><i class="fas fa-clock"></i>{DEMO_DURATION}</span>
                            </div>
                        </div>
                        <p class="footnote">
                            <strong>{"Live recording"}</strong>
                            {" from our operations center showing real PMU data processing and anomaly detection."}
                        </p>
                    </div>
                </section>

                <FeatureShowcase config={config.clone()} />

                <section id={SECTION_SOLUTIONS} class="section section-tinted">
                    <div class="container split">
                        <div class="media-frame fade-in">
                            <img src={config.media.solutions.clone()} alt="PMU" />
                        </div>
                        <div class="solutions-text fade-in-up">
                            <div class="badge"><i class="fas fa-globe"></i>{"Enterprise Solutions"}</div>
                            <h2>{"Tailored for Your Grid Infrastructure"}</h2>
                            <p class="lead">
                                {format!("{} adapts to your specific grid configuration and requirements. Our flexible platform scales from local distribution networks to continental transmission systems.", brand)}
                            </p>
                            <ul class="bullets">
                                { for SOLUTION_POINTS.iter().map(|point| html! {
                                    <li>
                                        <i class="fas fa-chevron-right"></i>
                                        <div>
                                            <h4>{point.title}</h4>
                                            <p>{point.body}</p>
                                        </div>
                                    </li>
                                }) }
                            </ul>
                            <a href={format!("#{}", SECTION_DEMO)} class="btn btn-primary">
                                {"Learn More About Our Solutions"}<i class="fas fa-chevron-right"></i>
                            </a>
                        </div>
                    </div>
                </section>

                <section class="stats-band">
                    <div class="container stats-grid">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat fade-in-up">
                                <div class="stat-value">{stat.value}</div>
                                <p>{stat.label}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id={SECTION_CONTACT} class="section">
                    <div class="container contact">
                        <div class="badge"><i class="fas fa-wand-magic-sparkles"></i>{"Get Started Today"}</div>
                        <h2>{"Ready to Protect Your Grid?"}</h2>
                        <p class="lead">
                            {format!("Contact our team to schedule a personalized demonstration and see how {} can enhance your grid reliability.", brand)}
                        </p>
                        <div class="cta-row centered">
                            <a href={config.mailto_href()} class="btn btn-primary">{&config.contact_email}</a>
                            <a href={config.tel_href()} class="btn btn-outline">{&config.contact_phone}</a>
                        </div>
                        <p class="legal">
                            {format!("© {} {} Inc. All rights reserved.", year, brand)}
                            <a href="#">{"Privacy Policy"}</a>
                            <a href="#">{"Terms of Service"}</a>
                        </p>
                    </div>
                </section>
            </main>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        color: #0f172a;
        background: linear-gradient(to bottom, #f8fafc, #ffffff);
        font-family: Inter, system-ui, sans-serif;
    }
    .container {
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .backdrop {
        position: fixed;
        inset: 0;
        z-index: -1;
        overflow: hidden;
    }
    .blob {
        position: absolute;
        width: 24rem;
        height: 24rem;
        border-radius: 9999px;
        filter: blur(64px);
        opacity: 0.05;
        animation: blob 7s infinite;
    }
    .blob-left { top: 0; left: -1rem; background: #3b82f6; }
    .blob-right { top: 0; right: -1rem; background: #6366f1; animation-delay: 2s; }
    .blob-bottom { bottom: -2rem; left: 5rem; background: #3b82f6; animation-delay: 4s; }
    @keyframes blob {
        0%, 100% { transform: translate(0, 0) scale(1); }
        33% { transform: translate(30px, -50px) scale(1.1); }
        66% { transform: translate(-20px, 20px) scale(0.9); }
    }

    .site-header {
        position: sticky;
        top: 0;
        z-index: 50;
        border-bottom: 1px solid #e2e8f0;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(16px);
    }
    .header-bar {
        display: flex;
        height: 4rem;
        align-items: center;
        justify-content: space-between;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        text-decoration: none;
        color: inherit;
    }
    .brand-icon { color: #2563eb; font-size: 1.75rem; }
    .brand-name { font-size: 1.25rem; font-weight: 700; }
    .desktop-nav { display: none; align-items: center; gap: 2rem; }
    .nav-link {
        font-size: 0.875rem;
        font-weight: 500;
        color: #475569;
        text-decoration: none;
        transition: color 0.2s;
    }
    .nav-link:hover { color: #2563eb; }
    .menu-toggle {
        display: inline-flex;
        padding: 0.5rem;
        border: none;
        border-radius: 0.375rem;
        background: transparent;
        color: #94a3b8;
        font-size: 1.25rem;
        cursor: pointer;
    }
    .mobile-menu {
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
        padding: 0.75rem 1rem;
        border-top: 1px solid #e2e8f0;
        background: #ffffff;
    }
    .mobile-link {
        padding: 0.5rem 0.75rem;
        border-radius: 0.375rem;
        color: #334155;
        font-weight: 500;
        text-decoration: none;
    }
    .mobile-link:hover { background: #f8fafc; color: #2563eb; }
    .mobile-cta { margin-top: 1rem; justify-content: center; }

    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        height: 2.75rem;
        padding: 0 2rem;
        border-radius: 0.5rem;
        font-size: 0.875rem;
        font-weight: 500;
        text-decoration: none;
        transition: all 0.2s;
    }
    .btn-sm { height: 2.25rem; padding: 0 1.5rem; }
    .btn-primary { background: #2563eb; color: #ffffff; }
    .btn-primary:hover { background: #1d4ed8; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
    .btn-outline { border: 1px solid #cbd5e1; background: #ffffff; color: #334155; }
    .btn-outline:hover { background: #f8fafc; }

    .badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        width: fit-content;
        margin-bottom: 1rem;
        padding: 0.25rem 0.75rem;
        border: 1px solid #bfdbfe;
        border-radius: 9999px;
        background: #eff6ff;
        color: #1d4ed8;
        font-size: 0.875rem;
    }
    .accent { color: #2563eb; }
    .lead { font-size: 1.125rem; color: #475569; max-width: 600px; }

    .hero { padding: 5rem 0; overflow: hidden; }
    .hero h1 { font-size: 2.5rem; font-weight: 700; letter-spacing: -0.025em; line-height: 1.1; }
    .split { display: grid; gap: 3rem; align-items: center; }
    .cta-row { display: flex; flex-direction: column; gap: 1rem; margin-top: 2rem; }
    .cta-row.centered { justify-content: center; }
    .media-frame {
        position: relative;
        aspect-ratio: 4 / 3;
        overflow: hidden;
        border: 1px solid #e2e8f0;
        border-radius: 0.75rem;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    }
    .media-frame img { width: 100%; height: 100%; object-fit: cover; }

    .section { padding: 5rem 0; }
    .section-tinted { background: rgba(248, 250, 252, 0.5); border-top: 1px solid #e2e8f0; }
    .section-heading {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2, .solutions-text h2, .contact h2 {
        font-size: 2.25rem;
        font-weight: 700;
        letter-spacing: -0.025em;
    }
    .section-heading p { margin-top: 1rem; max-width: 700px; font-size: 1.125rem; color: #475569; }

    .card-grid { display: grid; gap: 2rem; max-width: 72rem; margin: 0 auto; }
    .card {
        padding: 2rem;
        border: 1px solid #e2e8f0;
        border-radius: 0.75rem;
        background: #ffffff;
        transition: all 0.2s;
    }
    .card:hover { transform: translateY(-4px); box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
    .card h3, .feature-row h3 { margin-bottom: 0.5rem; font-size: 1.25rem; font-weight: 700; }
    .card p { font-size: 0.875rem; color: #475569; }
    .icon-tile {
        display: inline-flex;
        flex-shrink: 0;
        width: 3rem;
        height: 3rem;
        margin-bottom: 1rem;
        align-items: center;
        justify-content: center;
        border-radius: 0.5rem;
        background: #dbeafe;
        color: #2563eb;
        font-size: 1.25rem;
    }

    .video-frame {
        position: relative;
        max-width: 64rem;
        margin: 0 auto;
        aspect-ratio: 16 / 9;
        overflow: hidden;
        border: 1px solid #e2e8f0;
        border-radius: 0.75rem;
        background: #f1f5f9;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .video-placeholder {
        position: absolute;
        inset: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .video-placeholder p { max-width: 28rem; font-size: 0.875rem; color: #475569; }
    .play-button {
        display: flex;
        width: 5rem;
        height: 5rem;
        margin-bottom: 1.5rem;
        align-items: center;
        justify-content: center;
        border-radius: 9999px;
        background: #2563eb;
        color: #ffffff;
        cursor: pointer;
    }
    .play-button svg { width: 2rem; height: 2rem; margin-left: 0.25rem; }
    .chip {
        display: inline-flex;
        align-items: center;
        gap: 0.25rem;
        margin-top: 1rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: #1e293b;
        color: #ffffff;
        font-size: 0.75rem;
    }
    .footnote { margin-top: 1.5rem; text-align: center; font-size: 0.875rem; color: #475569; }

    .showcase-grid { display: grid; gap: 4rem; align-items: start; }
    .feature-rows { display: flex; flex-direction: column; gap: 3rem; }
    .feature-row { display: flex; gap: 1.5rem; }
    .feature-row p { color: #475569; line-height: 1.625; }
    .showcase { position: relative; margin-top: 3rem; }
    .showcase-frame {
        position: relative;
        width: 100%;
        aspect-ratio: 16 / 10;
        overflow: hidden;
        border-radius: 0.75rem;
        background: #f1f5f9;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .showcase-image {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0;
        transition: opacity 0.7s;
    }
    .showcase-image.active { opacity: 1; }
    .showcase-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.1), transparent);
        pointer-events: none;
    }
    .showcase-caption {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.75rem;
        margin-top: 1.5rem;
        text-align: center;
    }
    .showcase-dots { display: flex; gap: 0.5rem; }
    .dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #cbd5e1;
        transition: background-color 0.3s;
    }
    .dot.active { background: #2563eb; }
    .caption-title { font-size: 1.125rem; font-weight: 600; }
    .caption-subtitle { font-size: 0.875rem; color: #475569; }

    .solutions-text { display: flex; flex-direction: column; gap: 2rem; }
    .bullets { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 1rem; }
    .bullets li { display: flex; align-items: flex-start; gap: 0.75rem; }
    .bullets i { color: #2563eb; margin-top: 0.25rem; }
    .bullets h4 { margin-bottom: 0.25rem; font-weight: 600; }
    .bullets p { font-size: 0.875rem; color: #475569; }

    .stats-band { padding: 5rem 0; border-top: 1px solid #e2e8f0; border-bottom: 1px solid #e2e8f0; background: #ffffff; }
    .stats-grid { display: grid; gap: 2rem; }
    .stat { text-align: center; }
    .stat-value { font-size: 2.25rem; font-weight: 700; color: #2563eb; }
    .stat p { margin-top: 0.5rem; font-size: 0.875rem; color: #475569; }

    .contact { max-width: 48rem; text-align: center; display: flex; flex-direction: column; align-items: center; }
    .legal { margin-top: 2rem; font-size: 0.75rem; color: #64748b; }
    .legal a { margin-left: 1rem; color: inherit; text-decoration: none; }
    .legal a:hover { color: #334155; }

    .fade-in { animation: fade-in 0.8s ease-out both; }
    .fade-in-up { animation: fade-in-up 0.8s ease-out both; }
    @keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
    @keyframes fade-in-up {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }

    @media (min-width: 640px) {
        .container { padding: 0 1.5rem; }
        .cta-row { flex-direction: row; }
        .hero h1 { font-size: 3rem; }
    }
    @media (min-width: 768px) {
        .desktop-nav { display: flex; }
        .menu-toggle, .mobile-menu { display: none; }
        .hero { padding: 8rem 0; }
        .section { padding: 7rem 0; }
        .card-grid, .stats-grid { grid-template-columns: repeat(2, 1fr); }
        .section-heading h2, .contact h2 { font-size: 3rem; }
    }
    @media (min-width: 1024px) {
        .container { padding: 0 2rem; }
        .hero { padding: 10rem 0; }
        .split, .showcase-grid { grid-template-columns: repeat(2, 1fr); gap: 4rem; }
        .card-grid { grid-template-columns: repeat(3, 1fr); }
        .stats-grid { grid-template-columns: repeat(4, 1fr); }
        .showcase { margin-top: 0; position: sticky; top: 6rem; }
    }
    @media (min-width: 1280px) {
        .hero h1 { font-size: 3.75rem; line-height: 1; }
    }
"#;
