use chrono::Datelike;
use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::audience_chart::{AudienceChart, AUDIENCE};
use crate::components::contact_form::ContactSection;
use crate::components::partnership_form::PartnershipModal;
use crate::config;
use crate::forms::partnership::PartnershipForm;
use crate::models::{PartnershipField, PricingTier, VideoType};
use crate::services::Services;

const SCROLLED_AFTER_PX: f64 = 20.0;

const SPONSORS: [(&str, &str); 8] = [
    ("Fliki AI", "Fliki-AI-Logo-removebg.png"),
    ("Vidnoz", "Vidnoz-Logo.png"),
    ("HitPaw", "HitPaw-Logo.webp"),
    ("Fotor", "Fotor-Logo.webp"),
    ("Stylar AI", "Stylar-AI.png"),
    ("Innaio", "Innaio-logo.png"),
    ("WPS Office", "Wps-Office.png"),
    ("Hocos", "Hocos-logo.png"),
];

struct MetricCard {
    title: &'static str,
    icon: &'static str,
    value: &'static str,
    growth: &'static str,
    details: [(&'static str, &'static str); 2],
}

const METRICS: [MetricCard; 3] = [
    MetricCard {
        title: "Monthly Views",
        icon: "📈",
        value: "100K",
        growth: "↑ 25%",
        details: [("Average Watch Time", "8:45"), ("Click-Through Rate", "12.5%")],
    },
    MetricCard {
        title: "Subscribers",
        icon: "👥",
        value: "18K",
        growth: "↑ 15%",
        details: [("Daily New Subscribers", "+250"), ("Subscriber Retention", "98.5%")],
    },
    MetricCard {
        title: "Engagement Rate",
        icon: "▶",
        value: "91%",
        growth: "↑ 5%",
        details: [("Average Likes", "15K per video"), ("Comment Rate", "8.5%")],
    },
];

// (title, url, views, topic, growth, badge)
const TOP_VIDEOS: [(&str, &str, &str, &str, &str, &str); 3] = [
    (
        "Create Your Own Talking Avatar Using Free Canva AI",
        "https://youtu.be/IhVOdnUTtCg",
        "466.4K views",
        "Canva's HeyGen Tutorial",
        "↑ 32%",
        "Trending",
    ),
    (
        "How to Create Professional Logo with Free AI Logo Maker",
        "https://youtu.be/CRf89MNwvWA",
        "247.3K views",
        "Text to Image",
        "↑ 28%",
        "Popular",
    ),
    (
        "Create 3D Animation Video Using Free AI Tool",
        "https://youtu.be/2ajvtaIISS8",
        "8K views",
        "Transform Image to Animation",
        "↑ 20%",
        "Growing",
    ),
];

struct Package {
    tier: PricingTier,
    title: &'static str,
    blurb: &'static str,
    perks: [&'static str; 3],
}

const PACKAGES: [Package; 2] = [
    Package {
        tier: PricingTier::DedicatedVideo,
        title: "Dedicated Video",
        blurb: "5-10 minute in-depth video promotion of your product or service",
        perks: ["Full product showcase", "Detailed feature walkthrough", "Live demonstration"],
    },
    Package {
        tier: PricingTier::ShortVideo,
        title: "Short Video",
        blurb: "60-second engaging short-form video promotion",
        perks: ["Quick product highlight", "Key features spotlight", "Call-to-action focus"],
    },
];

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "The walkthrough answered the questions our trial users kept asking. Sign-ups from the video outpaced our paid ads that month.",
        "Growth lead, AI video startup",
    ),
    (
        "Clear brief, fast turnaround and an audience that actually tries the tools they see.",
        "Marketing manager, design software company",
    ),
    (
        "The short was live within the week and still brings in traffic.",
        "Founder, productivity app",
    ),
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

/// Inline transform for a decorative blob trailing the cursor.
pub fn parallax_style(cursor: (i32, i32), divisor: i32, transition_s: f32) -> String {
    format!(
        "transform: translate({}px, {}px); transition: transform {}s ease-out;",
        cursor.0 / divisor,
        cursor.1 / divisor,
        transition_s
    )
}

pub fn mailto_link(subject: &str) -> String {
    format!("mailto:{}?subject={}", config::RECIPIENT_EMAIL, urlencoding::encode(subject))
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Render with the partnership modal already showing.
    #[prop_or_default]
    pub open_partnership: bool,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let services = use_context::<Services>().unwrap_or_else(Services::browser);
    let menu_open = use_state(|| false);
    let cursor = use_state(|| (0, 0));
    let (_, scroll_y) = use_window_scroll();
    let video_param = use_search_param("video".to_string());
    let refresh = use_force_update();

    let partnership = {
        let open = props.open_partnership;
        use_mut_ref(move || {
            let mut form = PartnershipForm::default();
            if open {
                let preset = video_param.as_deref().and_then(VideoType::from_slug);
                form.select_video_type(preset);
                form.open();
            }
            form
        })
    };

    let on_change = {
        let refresh = refresh.clone();
        Callback::from(move |_: ()| refresh.force_update())
    };
    let driver = services.driver(partnership.clone(), on_change);

    let open_partnership = {
        let partnership = partnership.clone();
        let refresh = refresh.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            partnership.borrow_mut().open();
            menu_open.set(false);
            refresh.force_update();
        })
    };

    let choose_package = |tier: PricingTier| {
        let partnership = partnership.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Package chosen: {}", tier);
            partnership.borrow_mut().choose_package(tier);
            refresh.force_update();
        })
    };

    let on_field = {
        let partnership = partnership.clone();
        let refresh = refresh.clone();
        Callback::from(move |(field, value): (PartnershipField, String)| {
            partnership.borrow_mut().set_field(field, value);
            refresh.force_update();
        })
    };

    let on_video_type = {
        let partnership = partnership.clone();
        let refresh = refresh.clone();
        Callback::from(move |video: Option<VideoType>| {
            partnership.borrow_mut().select_video_type(video);
            refresh.force_update();
        })
    };

    let on_submit = Callback::from(move |_: ()| {
        let driver = driver.clone();
        spawn_local(async move {
            let _ = driver.submit().await;
        });
    });

    let on_close = {
        let partnership = partnership.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            partnership.borrow_mut().close();
            refresh.force_update();
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let onmousemove = {
        let cursor = cursor.clone();
        Callback::from(move |e: MouseEvent| cursor.set((e.client_x(), e.client_y())))
    };

    let year = chrono::Local::now().year();
    let logo = config::sponsor_asset("The-Learn-Up-Logo.png");

    html! {
        <div class="landing-page" {onmousemove}>
            <div class="backdrop">
                <div class="liquid-blob" style={parallax_style(*cursor, 8, 0.5)}></div>
                <div class="glow-blob" style={parallax_style(*cursor, 10, 0.3)}></div>
                <div class="grid-pattern"></div>
            </div>

            <nav class={classes!("top-nav", is_scrolled(scroll_y).then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#home" class="nav-logo">
                        <img src={logo.clone()} alt="The Learn Up Logo" />
                        <span>{config::CHANNEL_NAME}</span>
                    </a>
                    <button class="burger-menu" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                    <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                        <a href="#home" class="nav-link" onclick={close_menu.clone()}>{"Home"}</a>
                        <a href="#performance" class="nav-link" onclick={close_menu.clone()}>{"Performance"}</a>
                        <a href="#" class="nav-link" onclick={open_partnership.clone()}>{"Contact"}</a>
                        <a href={config::CHANNEL_URL} target="_blank" rel="noopener noreferrer" class="primary-button small">
                            {"Visit Channel"}
                        </a>
                    </div>
                </div>
            </nav>

            <section id="home" class="hero">
                <h1>{"Elevate Your Brand with "}<span class="accent">{config::CHANNEL_NAME}</span></h1>
                <p class="hero-subtitle">
                    {"Partner with a premier tech education channel reaching millions of developers and tech enthusiasts worldwide."}
                </p>
                <div class="hero-cta-group">
                    <button class="primary-button" onclick={open_partnership.clone()}>{"Start Partnership →"}</button>
                    <a href={config::CHANNEL_URL} target="_blank" rel="noopener noreferrer" class="secondary-button">
                        {"Visit Channel"}
                    </a>
                </div>
            </section>

            <section id="performance" class="performance">
                <h2 class="section-title">{"Channel "}<span class="accent">{"Performance"}</span></h2>
                <div class="metric-grid">
                    { for METRICS.iter().map(|m| html! {
                        <div class="metric-card">
                            <div class="metric-head">
                                <h3>{m.title}</h3>
                                <span class="metric-icon">{m.icon}</span>
                            </div>
                            <p class="metric-value">{m.value}</p>
                            <p class="metric-growth">{m.growth}<span>{" vs last month"}</span></p>
                            { for m.details.iter().map(|(label, value)| html! {
                                <div class="metric-detail"><span>{*label}</span><span>{*value}</span></div>
                            }) }
                        </div>
                    }) }
                </div>
                <div class="insight-grid">
                    <div class="insight-card">
                        <h3>{"Audience Demographics"}</h3>
                        <AudienceChart />
                        <ul class="audience-legend">
                            { for AUDIENCE.iter().map(|(segment, share)| html! {
                                <li><span>{*segment}</span><span>{format!("{}%", share)}</span></li>
                            }) }
                        </ul>
                    </div>
                    <div class="insight-card">
                        <h3>{"Content Performance"}</h3>
                        { for TOP_VIDEOS.iter().map(|(title, url, views, topic, growth, badge)| html! {
                            <a href={*url} target="_blank" rel="noopener noreferrer" class="video-row">
                                <div>
                                    <p class="video-title">{*title}</p>
                                    <p class="video-meta">{format!("{} • {}", views, topic)}</p>
                                </div>
                                <div class="video-trend">
                                    <span>{*growth}</span>
                                    <span class="badge">{*badge}</span>
                                </div>
                            </a>
                        }) }
                    </div>
                </div>
            </section>

            <section id="pricing" class="pricing">
                <h2 class="section-title">{"Promotion "}<span class="accent">{"Pricing"}</span></h2>
                <div class="pricing-grid">
                    { for PACKAGES.iter().map(|p| html! {
                        <div class="pricing-card">
                            <h3>{format!("{} For ", p.title)}<span class="accent">{"YouTube"}</span></h3>
                            <span class="price">{format!("${}", p.tier.price_usd())}</span>
                            <p>{p.blurb}</p>
                            <ul>
                                { for p.perks.iter().map(|perk| html! { <li>{"✓ "}{*perk}</li> }) }
                            </ul>
                            <a href="#contact" class="primary-button wide" onclick={choose_package(p.tier)}>
                                {"Get Started"}
                            </a>
                        </div>
                    }) }
                </div>
            </section>

            <section class="testimonials">
                <h2 class="section-title">{"What Partners "}<span class="accent">{"Say"}</span></h2>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|(quote, who)| html! {
                        <figure class="testimonial">
                            <blockquote>{format!("“{}”", quote)}</blockquote>
                            <figcaption>{*who}</figcaption>
                        </figure>
                    }) }
                </div>
            </section>

            <section class="sponsors">
                <h2 class="section-title">{"Trusted by "}<span class="accent">{"Industry Leaders"}</span></h2>
                <p class="section-subtitle">
                    {"Seamlessly integrate with your existing tools and platforms. Our promotional services are trusted by leading technology providers and services."}
                </p>
                <div class="sponsor-grid">
                    { for SPONSORS.iter().map(|(name, file)| html! {
                        <img src={config::sponsor_asset(file)} alt={*name} loading="lazy" />
                    }) }
                </div>
            </section>

            <section id="contact" class="contact">
                <ContactSection />
            </section>

            <PartnershipModal
                form={partnership.borrow().clone()}
                {on_field}
                {on_video_type}
                {on_submit}
                {on_close}
            />

            <footer class="site-footer">
                <a href="#home" class="nav-logo">
                    <img src={logo} alt="The Learn Up Logo" />
                    <span>{config::CHANNEL_NAME}</span>
                </a>
                <a href={mailto_link("Sponsorship inquiry")}>{format!("✉ {}", config::RECIPIENT_EMAIL)}</a>
                <a href={config::CHANNEL_URL} target="_blank" rel="noopener noreferrer">{"YouTube Channel"}</a>
                <p class="copyright">{format!("© {} {}. All rights reserved.", year, config::CHANNEL_NAME)}</p>
            </footer>

            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #000;
        color: #e5e7eb;
        position: relative;
        overflow: hidden;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .accent { color: #06B6D4; }
    .small { font-size: 0.9rem; color: #9ca3af; }
    .backdrop {
        position: fixed;
        inset: 0;
        pointer-events: none;
        z-index: 0;
    }
    .liquid-blob {
        position: absolute;
        top: 25%;
        left: 25%;
        width: 600px;
        height: 600px;
        border-radius: 50%;
        background: radial-gradient(circle, rgba(6, 182, 212, 0.1), transparent 70%);
    }
    .glow-blob {
        position: absolute;
        top: 0;
        left: 0;
        width: 500px;
        height: 500px;
        border-radius: 50%;
        background: rgba(6, 182, 212, 0.2);
        filter: blur(64px);
    }
    .grid-pattern {
        position: absolute;
        inset: 0;
        background-image:
            linear-gradient(rgba(6, 182, 212, 0.03) 1px, transparent 1px),
            linear-gradient(to right, rgba(6, 182, 212, 0.03) 1px, transparent 1px);
        background-size: 100px 100px;
        opacity: 0.5;
    }
    .top-nav {
        position: fixed;
        width: 100%;
        z-index: 50;
        transition: all 0.5s;
    }
    .top-nav.scrolled {
        background: rgba(26, 26, 26, 0.9);
        backdrop-filter: blur(24px);
        box-shadow: 0 0 50px -12px rgba(6, 182, 212, 0.3);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: #fff;
        font-weight: bold;
        font-size: 1.25rem;
        text-decoration: none;
    }
    .nav-logo img { height: 2.5rem; border-radius: 50%; }
    .nav-right { display: flex; align-items: center; gap: 2rem; }
    .nav-link { color: #9ca3af; text-decoration: none; font-size: 0.9rem; }
    .nav-link:hover { color: #06B6D4; }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: #d1d5db;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .primary-button, .secondary-button {
        display: inline-block;
        padding: 0.9rem 1.8rem;
        border-radius: 0.75rem;
        font-weight: 800;
        color: #fff;
        text-decoration: none;
        border: none;
        cursor: pointer;
        transition: all 0.3s;
    }
    .primary-button {
        background: linear-gradient(to right, #06B6D4, #0891B2);
        box-shadow: 0 10px 15px -3px rgba(6, 182, 212, 0.2);
    }
    .primary-button:hover { transform: scale(1.02); box-shadow: 0 10px 15px -3px rgba(6, 182, 212, 0.5); }
    .primary-button:disabled { opacity: 0.5; cursor: not-allowed; }
    .primary-button.small { padding: 0.6rem 1.2rem; font-size: 0.85rem; }
    .primary-button.wide { width: 100%; text-align: center; }
    .secondary-button { border: 1px solid #2A2A2A; background: rgba(26, 26, 26, 0.8); }
    section {
        position: relative;
        z-index: 1;
        max-width: 1200px;
        margin: 0 auto;
        padding: 6rem 1.5rem;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .hero h1 { font-size: 4rem; color: #fff; line-height: 1.1; margin-bottom: 2rem; }
    .hero-subtitle { font-size: 1.25rem; color: #9ca3af; max-width: 42rem; margin-bottom: 3rem; }
    .hero-cta-group { display: flex; gap: 1.5rem; flex-wrap: wrap; justify-content: center; }
    .section-title { font-size: 2.75rem; color: #fff; text-align: center; margin-bottom: 4rem; }
    .section-subtitle { text-align: center; color: #9ca3af; max-width: 48rem; margin: -2rem auto 3rem; }
    .metric-grid, .pricing-grid, .testimonial-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 2rem;
    }
    .insight-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
        gap: 2rem;
        margin-top: 2rem;
    }
    .metric-card, .insight-card, .pricing-card, .testimonial, .glass-form, .thank-you-panel {
        background: rgba(26, 26, 26, 0.8);
        border: 1px solid #2A2A2A;
        border-radius: 1.5rem;
        padding: 2rem;
        backdrop-filter: blur(12px);
        box-shadow: 0 0 50px -12px rgba(6, 182, 212, 0.3);
    }
    .metric-head { display: flex; justify-content: space-between; align-items: center; }
    .metric-head h3 { color: #9ca3af; font-size: 1rem; }
    .metric-value { font-size: 3rem; font-weight: bold; color: #fff; margin: 0.5rem 0; }
    .metric-growth { color: #06B6D4; }
    .metric-growth span { color: #6b7280; }
    .metric-detail {
        display: flex;
        justify-content: space-between;
        border-top: 1px solid #2A2A2A;
        padding-top: 0.75rem;
        margin-top: 0.75rem;
        color: #9ca3af;
    }
    .audience-legend { list-style: none; padding: 0; }
    .audience-legend li { display: flex; justify-content: space-between; color: #9ca3af; padding: 0.25rem 0; }
    .video-row {
        display: flex;
        justify-content: space-between;
        gap: 1rem;
        padding: 1rem;
        border-radius: 1rem;
        color: inherit;
        text-decoration: none;
    }
    .video-row:hover { background: rgba(6, 182, 212, 0.05); }
    .video-title { color: #fff; font-weight: 600; }
    .video-meta { color: #6b7280; font-size: 0.85rem; }
    .video-trend { display: flex; flex-direction: column; align-items: flex-end; color: #06B6D4; }
    .badge { font-size: 0.75rem; color: #9ca3af; }
    .pricing-card h3 { color: #fff; font-size: 1.5rem; }
    .price { display: block; font-size: 3rem; font-weight: bold; color: #06B6D4; margin: 1rem 0; }
    .pricing-card ul { list-style: none; padding: 0; margin: 1.5rem 0 2rem; }
    .pricing-card li { color: #d1d5db; padding: 0.4rem 0; }
    .testimonial blockquote { color: #e5e7eb; font-style: italic; margin: 0 0 1rem; }
    .testimonial figcaption { color: #06B6D4; font-size: 0.9rem; }
    .sponsor-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
        gap: 2rem;
        align-items: center;
    }
    .sponsor-grid img { max-height: 3rem; margin: 0 auto; filter: grayscale(1); opacity: 0.7; transition: all 0.3s; }
    .sponsor-grid img:hover { filter: none; opacity: 1; }
    .contact-wrapper { max-width: 42rem; margin: 0 auto; }
    .glass-form { display: flex; flex-direction: column; gap: 1.5rem; }
    .form-group { display: flex; flex-direction: column; gap: 0.5rem; }
    .field-label { font-size: 0.9rem; color: #d1d5db; }
    .required-mark { color: #06B6D4; }
    .form-group input, .form-group textarea, .form-group select {
        padding: 1rem 1.25rem;
        border-radius: 0.75rem;
        background: rgba(0, 0, 0, 0.4);
        border: 2px solid #2A2A2A;
        color: #fff;
        font-size: 1rem;
    }
    .form-group input:focus, .form-group textarea:focus, .form-group select:focus {
        outline: none;
        border-color: #06B6D4;
    }
    .form-group textarea { resize: none; }
    .form-group select.derived { opacity: 0.7; cursor: default; }
    .form-notice { color: #f87171; font-size: 0.9rem; }
    .thank-you-panel { text-align: center; padding: 4rem 2rem; }
    .thank-you-panel h3 { font-size: 2rem; color: #fff; }
    .check-icon { font-size: 4rem; color: #06B6D4; }
    .modal-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.8);
        backdrop-filter: blur(4px);
        z-index: 60;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        overflow-y: auto;
    }
    .modal-shell { position: relative; max-width: 42rem; width: 100%; }
    .modal-form { max-height: 90vh; overflow-y: auto; }
    .modal-heading { text-align: center; }
    .modal-heading h2 { color: #fff; font-size: 2rem; }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        z-index: 1;
        background: none;
        border: none;
        color: #9ca3af;
        font-size: 1.25rem;
        cursor: pointer;
    }
    .modal-close:hover { color: #fff; }
    .site-footer {
        position: relative;
        z-index: 1;
        border-top: 1px solid #2A2A2A;
        padding: 3rem 1.5rem;
        display: flex;
        flex-wrap: wrap;
        gap: 2rem;
        align-items: center;
        justify-content: center;
    }
    .site-footer a { color: #9ca3af; text-decoration: none; }
    .site-footer a:hover { color: #06B6D4; }
    .copyright { width: 100%; text-align: center; color: #6b7280; font-size: 0.85rem; }
    @media (max-width: 768px) {
        .burger-menu { display: block; }
        .nav-right { display: none; }
        .nav-right.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 5rem;
            left: 0;
            right: 0;
            padding: 1.5rem;
            background: rgba(0, 0, 0, 0.95);
        }
        .hero h1 { font-size: 2.75rem; }
        .section-title { font-size: 2rem; }
        .insight-grid { grid-template-columns: 1fr; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_turns_solid_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn parallax_follows_cursor_at_a_fraction() {
        assert_eq!(
            parallax_style((800, 400), 8, 0.5),
            "transform: translate(100px, 50px); transition: transform 0.5s ease-out;"
        );
        assert_eq!(
            parallax_style((800, 400), 10, 0.3),
            "transform: translate(80px, 40px); transition: transform 0.3s ease-out;"
        );
    }

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_link("Sponsorship inquiry"),
            "mailto:thelearnuponline@gmail.com?subject=Sponsorship%20inquiry"
        );
    }

    #[test]
    fn pricing_cards_cover_every_package() {
        for video in VideoType::ALL {
            assert!(PACKAGES.iter().any(|p| p.tier == video.pricing_tier()));
        }
    }
}
