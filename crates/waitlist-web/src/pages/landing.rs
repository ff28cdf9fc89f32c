//! Landing Page

use leptos::ev;
use leptos::prelude::*;

use crate::components::{FeatureCard, StatCard, TestimonialCard};
use crate::content::{
    ARCHITECTURE, FEATURES, NAV_LINKS, SOLUTION, STATS, TESTIMONIALS, WAITLIST_COUNT,
};
use crate::form::{FormVariant, WaitlistForm};

/// Scroll offset past which the header gets its frosted background
const SCROLL_THRESHOLD: f64 = 20.0;

#[component]
pub fn LandingPage() -> impl IntoView {
    // Both forms edit the same address, so typing in one fills the other
    let email = RwSignal::new(String::new());

    view! {
        <div class="landing">
            <Header />
            <Hero email=email />

            <div class="sections">
                <section class="stats">
                    {STATS.iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
                </section>

                <section id="solution" class="solution">
                    <h2>"Your identity, always current."</h2>
                    <div class="pills">
                        {SOLUTION.iter().map(|f| view! { <FeatureCard feature=f /> }).collect_view()}
                    </div>
                </section>

                <section id="architecture" class="architecture">
                    <h2>"Built on trust, not trackers."</h2>
                    <div class="pills">
                        {ARCHITECTURE.iter().map(|f| view! { <FeatureCard feature=f /> }).collect_view()}
                    </div>
                </section>

                <section id="features" class="features">
                    <h2>"Everything you need"</h2>
                    <div class="feature-grid">
                        {FEATURES.iter().map(|f| view! { <FeatureCard feature=f /> }).collect_view()}
                    </div>
                </section>

                <section class="testimonials">
                    <h2>"Loved by builders"</h2>
                    <div class="testimonial-grid">
                        {TESTIMONIALS
                            .iter()
                            .map(|t| view! { <TestimonialCard testimonial=t /> })
                            .collect_view()}
                    </div>
                </section>

                <section id="builders" class="builders">
                    <h2>"For developers"</h2>
                    <p>"Signed webhooks, typed SDKs and a sandbox that mirrors production."</p>
                    <a href="#waitlist" class="btn">"Request API access"</a>
                </section>
            </div>

            <WaitlistCta email=email />
            <Footer />
        </div>
    }
}

/// Glyph on the mobile menu button
const fn menu_icon(open: bool) -> &'static str {
    if open { "✕" } else { "☰" }
}

/// Fixed header; turns frosted once the page scrolls
#[component]
fn Header() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        scrolled.set(y > SCROLL_THRESHOLD);
    });
    on_cleanup(move || handle.remove());

    view! {
        <header class="site-header" class:scrolled=move || scrolled.get()>
            <nav>
                <a href="#" class="brand">"✔ Verifyd"</a>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-controls="nav-links"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || menu_icon(menu_open.get())}
                </button>
                <div id="nav-links" class="nav-links" class:open=move || menu_open.get()>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href on:click=move |_| menu_open.set(false)>
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <a href="#waitlist" class="btn btn-primary">"✨ Early Access →"</a>
            </nav>
        </header>
    }
}

#[component]
fn Hero(email: RwSignal<String>) -> impl IntoView {
    view! {
        <section class="hero" aria-labelledby="hero-heading">
            <h1 id="hero-heading">
                "Update once."<br />
                <span class="highlight">"Everywhere knows."</span>
            </h1>
            <p class="tagline">
                "Verifyd keeps your address, contact details and identity in sync with every service you trust—on your terms."
            </p>

            <WaitlistForm email=email variant=FormVariant::Hero />

            <div class="social-proof">
                <span class="avatars">
                    {('A'..='E').map(|c| view! { <span class="avatar">{c.to_string()}</span> }).collect_view()}
                </span>
                <span>"Join "<strong>{WAITLIST_COUNT}</strong>" developers on the waitlist"</span>
            </div>
        </section>
    }
}

#[component]
fn WaitlistCta(email: RwSignal<String>) -> impl IntoView {
    view! {
        <section id="waitlist" class="waitlist-cta" aria-labelledby="waitlist-heading">
            <h2 id="waitlist-heading">
                "The Future of Identity Is Arriving. "
                <span class="highlight">"Be First in Line."</span>
            </h2>
            <p>"Launching Winter 2025. Secure early access for a smarter, synchronized digital life."</p>

            <WaitlistForm email=email variant=FormVariant::Cta />

            <p class="fine-print">
                "We respect your inbox. Only invites and essential updates. "
                <strong>"No spam, ever."</strong>
            </p>
            <div class="badges">
                <span>"🛡️ SOC 2 Compliant"</span>
                <span>"🔒 GDPR Ready"</span>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="brand">"✔ Verifyd"</span>
            <nav>
                <a href="#features">"Features"</a>
                <a href="#builders">"Developers"</a>
                <a href="#waitlist">"Waitlist"</a>
            </nav>
            <p>"© 2025 Verifyd. All rights reserved."</p>
        </footer>
    }
}
