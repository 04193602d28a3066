// Project Ara landing page, Leptos 0.8 edition
// Project Ara Web Team (c)2025

use leptos::html;
use leptos::prelude::*;
use tracing::warn;

use super::reveal_on_scroll;
use crate::config::LandingConfig;
use crate::content::{TESTIMONIALS, Testimonial};
use crate::motion::presets::TESTIMONIAL_TITLE;
use crate::motion::use_interval;
use crate::state::{Rotation, SlideDirection, rotation_tick};

/// Auto-rotating quote carousel with dot indicators.
///
/// The interval lives exactly as long as this section. Dots jump straight to
/// a quote without restarting the interval.
#[component]
pub fn Testimonials() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let node = NodeRef::<html::Section>::new();
    let shown = reveal_on_scroll(node, 0.0);

    let rotation = match Rotation::for_len(TESTIMONIALS.len()) {
        Ok(rotation) => RwSignal::new(rotation),
        Err(err) => {
            warn!(%err, "testimonial carousel disabled");
            return ().into_any();
        }
    };
    use_interval(config.rotation_interval(), rotation_tick(rotation));

    let card = move || {
        let rotation = rotation.get();
        TESTIMONIALS.get(rotation.current()).map(|testimonial| {
            view! { <TestimonialCard testimonial=testimonial direction=rotation.direction() /> }
        })
    };

    view! {
        <section class="testimonials" id="testimonials" data-section="testimonials" node_ref=node>
            <h2
                class="section-title gradient-text reveal"
                style=move || TESTIMONIAL_TITLE.style(shown.get(), 0.0)
            >
                "What People Are Saying"
            </h2>

            <div class="carousel" aria-live="polite">
                {card}
            </div>

            <div class="carousel-dots" role="tablist">
                {(0..TESTIMONIALS.len())
                    .map(|index| {
                        let active = move || rotation.with(|r| r.current() == index);
                        view! {
                            <button
                                type="button"
                                class="dot"
                                class:active=active
                                role="tab"
                                aria-selected=move || active().to_string()
                                aria-label=format!("Show testimonial {}", index + 1)
                                on:click=move |_| {
                                    rotation.maybe_update(|r| r.select(index));
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
    .into_any()
}

/// The current quote. A new card is mounted for every position change, which
/// replays the slide-in in `direction`.
#[component]
fn TestimonialCard(testimonial: &'static Testimonial, direction: SlideDirection) -> impl IntoView {
    view! {
        <figure class=format!("testimonial-card {}", direction.class())>
            <blockquote class="testimonial-text">{format!("\"{}\"", testimonial.text)}</blockquote>
            <figcaption class="testimonial-author">
                <div class="author-avatar" aria-hidden="true">{testimonial.avatar}</div>
                <div class="author-info">
                    <h4 class="author-name">{testimonial.author}</h4>
                    <p class="author-title">{testimonial.title}</p>
                </div>
            </figcaption>
        </figure>
    }
}
