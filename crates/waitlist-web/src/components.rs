//! UI Components

use leptos::prelude::*;
use waitlist_core::{FormState, SubmissionStatus};

use crate::content::{Feature, Stat, Testimonial};

/// Icon, title and blurb; used by the pills and the feature grid
#[component]
pub fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <div class="feature">
            <span class="feature-icon">{feature.icon}</span>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

#[component]
pub fn StatCard(stat: &'static Stat) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat-icon">{stat.icon}</span>
            <div class="stat-value">{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}

#[component]
pub fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <figure class="testimonial">
            <div class="stars">"★★★★★"</div>
            <blockquote>"\u{201c}"{testimonial.quote}"\u{201d}"</blockquote>
            <figcaption>
                <span class="avatar">{testimonial.avatar}</span>
                <span class="author">{testimonial.author}</span>
                <span class="role">{testimonial.role}</span>
            </figcaption>
        </figure>
    }
}

/// Status message under a waitlist form; nothing while Idle
#[component]
pub fn StatusLine(state: RwSignal<FormState>) -> impl IntoView {
    view! {
        {move || {
            let current = state.get();
            (current.status != SubmissionStatus::Idle).then(|| {
                let class = format!("status status-{}", current.status.as_str());
                view! { <span class=class>{current.message}</span> }
            })
        }}
    }
}
