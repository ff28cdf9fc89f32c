//! Waitlist Form
//!
//! Binds one `WaitlistController` to the DOM. The controller owns the
//! status; this component only mirrors it into a signal and feeds it the
//! input values.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use waitlist_core::email::normalize;
use waitlist_core::{
    FormState, SubmissionStatus, WaitlistConfig, WaitlistController, honeypot::HONEYPOT_FIELD,
    is_likely_automated,
};

use crate::components::StatusLine;

const INVALID_EMAIL_HINT: &str = "Please enter a valid email address.";

/// Address to hand the controller, or the hint to show instead.
///
/// Bot submissions pass through untouched; the controller drops them.
fn address_to_submit(raw: &str, trap: &str) -> Result<String, &'static str> {
    if is_likely_automated(trap) {
        return Ok(raw.to_owned());
    }
    normalize(raw).ok_or(INVALID_EMAIL_HINT)
}

/// Where the form sits on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    Hero,
    Cta,
}

impl FormVariant {
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Hero => "hero-email",
            Self::Cta => "waitlist-email",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Hero => "Enter your email for early access",
            Self::Cta => "Enter your primary email",
        }
    }

    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Hero => "Get Early Access →",
            Self::Cta => "Secure My Spot →",
        }
    }

    const fn class(self) -> &'static str {
        match self {
            Self::Hero => "waitlist-form waitlist-form-hero",
            Self::Cta => "waitlist-form waitlist-form-cta",
        }
    }
}

/// Email capture form with a hidden honeypot input
#[component]
pub fn WaitlistForm(email: RwSignal<String>, variant: FormVariant) -> impl IntoView {
    let config = WaitlistConfig::from_build_env();
    let controller = WaitlistController::with_options(config.backend(), config.controller_options());

    let form_state = RwSignal::new(controller.snapshot());
    let honeypot = RwSignal::new(String::new());
    let hint = RwSignal::new(None::<&'static str>);

    // Ends once the controller (and every clone of it) is dropped
    let mut updates = controller.subscribe();
    leptos::task::spawn_local(async move {
        while updates.changed().await.is_ok() {
            let state: FormState = updates.borrow_and_update().clone();
            form_state.set(state);
        }
    });

    // Leaving the page aborts whatever is still in flight
    on_cleanup({
        let controller = controller.clone();
        move || {
            controller.cancel();
        }
    });

    let submitting = move || form_state.with(|s| s.status == SubmissionStatus::Submitting);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let trap = honeypot.get_untracked();
        let address = match address_to_submit(&email.get_untracked(), &trap) {
            Ok(address) => address,
            Err(text) => {
                hint.set(Some(text));
                return;
            }
        };
        hint.set(None);

        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            controller.submit(&address, &trap).await;
        });
    };

    view! {
        <div class="waitlist">
            <form class=variant.class() on:submit=on_submit novalidate=true>
                <label for=variant.input_id() class="sr-only">"Email address"</label>
                <input
                    id=variant.input_id()
                    type="email"
                    required=true
                    autocomplete="email"
                    inputmode="email"
                    placeholder=variant.placeholder()
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    name=HONEYPOT_FIELD
                    class="hp-field"
                    tabindex="-1"
                    autocomplete="off"
                    aria-hidden="true"
                    prop:value=move || honeypot.get()
                    on:input=move |ev| honeypot.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=submitting
                    aria-busy=move || submitting().to_string()
                >
                    {move || if submitting() { "Securing…" } else { variant.button_label() }}
                </button>
            </form>
            <div class="waitlist-status" role="status" aria-live="polite">
                {move || hint.get().map(|text| view! { <span class="status status-hint">{text}</span> })}
                <StatusLine state=form_state />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_have_distinct_inputs() {
        assert_ne!(FormVariant::Hero.input_id(), FormVariant::Cta.input_id());
        assert_ne!(FormVariant::Hero.button_label(), FormVariant::Cta.button_label());
    }

    #[test]
    fn test_hint_is_only_for_bad_addresses() {
        assert_eq!(address_to_submit("a@", ""), Err(INVALID_EMAIL_HINT));
        assert_eq!(address_to_submit("", ""), Err(INVALID_EMAIL_HINT));
        assert_eq!(address_to_submit("a@example.com", "").as_deref(), Ok("a@example.com"));
    }

    #[test]
    fn test_address_is_normalized_before_submit() {
        assert_eq!(
            address_to_submit("  Jane@Example.COM ", "").as_deref(),
            Ok("Jane@example.com")
        );
    }

    #[test]
    fn test_bot_values_reach_the_controller_unchanged() {
        assert_eq!(address_to_submit("nope", "Acme").as_deref(), Ok("nope"));
    }
}
