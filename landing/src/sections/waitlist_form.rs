// Project Ara landing page, Leptos 0.8 edition
// Project Ara Web Team (c)2025

use leptos::html;
use leptos::prelude::*;

use super::reveal_on_scroll;
use crate::config::LandingConfig;
use crate::content::PRODUCT_NAME;
use crate::motion::presets::{SUCCESS, SUCCESS_ENTER, WAITLIST_ITEM, WAITLIST_STAGGER};
use crate::state::WaitlistState;
use crate::waitlist::{WaitlistClient, submit};

/// Email capture. Owns its own [`WaitlistState`]; a remount starts a fresh
/// form.
#[component]
pub fn WaitlistSection() -> impl IntoView {
    let client = use_context::<WaitlistClient>().unwrap_or_else(|| {
        let config = use_context::<LandingConfig>().unwrap_or_default();
        WaitlistClient::simulated(config.submit_latency())
    });
    let client = StoredValue::new(client);
    let state = RwSignal::new(WaitlistState::default());

    let node = NodeRef::<html::Section>::new();
    let shown = reveal_on_scroll(node, 0.0);
    let item = move |index: usize| WAITLIST_ITEM.style_at(shown.get(), WAITLIST_STAGGER, index);

    let busy = move || state.with(WaitlistState::is_busy);
    let submitted = move || state.with(WaitlistState::is_submitted);
    let send = move || submit(state, client.get_value());

    let failure = move || {
        state.with(|s| s.failure().cloned()).map(|err| {
            view! {
                <div class="error-message" role="alert">
                    <span>{err.to_string()}</span>
                    <button type="button" class="retry-button" on:click=move |_| send()>
                        "Try again"
                    </button>
                </div>
            }
        })
    };

    let success = move || {
        view! {
            <div class="success-message" role="status" style=SUCCESS.animation(SUCCESS_ENTER)>
                {format!("🎉 Welcome to the future! You'll be notified when {PRODUCT_NAME} launches.")}
            </div>
        }
    };

    view! {
        <section class="waitlist" id="waitlist" data-section="waitlist" node_ref=node>
            <h2 class="section-title gradient-text reveal" style=move || item(0)>
                "Join the Modular Revolution"
            </h2>
            <p class="waitlist-subtitle reveal" style=move || item(1)>
                {format!(
                    "Be among the first to experience the future of smartphones. Get exclusive early access to {PRODUCT_NAME} and help shape the modular ecosystem."
                )}
            </p>

            <Show when=move || !submitted() fallback=success>
                {failure}
                <form
                    class="waitlist-form reveal"
                    style=move || item(2)
                    on:submit=move |ev| {
                        ev.prevent_default();
                        send();
                    }
                >
                    <input
                        class="email-input"
                        type="email"
                        name="email"
                        placeholder="Enter your email for early access"
                        required
                        prop:value=move || state.with(|s| s.email().to_owned())
                        disabled=busy
                        on:input=move |ev| state.update(|s| s.set_email(event_target_value(&ev)))
                    />
                    <button type="submit" class="submit-button" disabled=busy aria-busy=move || busy().to_string()>
                        {move || {
                            if busy() {
                                view! { <span class="spinner" aria-hidden="true">"⟳"</span> }.into_any()
                            } else {
                                "Get Early Access".into_any()
                            }
                        }}
                    </button>
                </form>
                <p class="privacy-note reveal" style=move || item(3)>
                    "We respect your privacy. Unsubscribe at any time. No spam, just exclusive updates about our launch."
                </p>
            </Show>
        </section>
    }
}
