// Project Ara landing page, Leptos 0.8 edition
// Project Ara Web Team (c)2025

use leptos::prelude::*;

use crate::config::LandingConfig;
use crate::content::{HERO_IMAGE, PRODUCT_NAME};
use crate::motion::presets::{HERO_ITEM, HERO_PRODUCT, HERO_STAGGER, HERO_TITLE};
use crate::motion::scroll::{HERO_OPACITY, HERO_SCALE, HERO_Y_PCT};
use crate::motion::{scatter, use_entrance, use_pointer, use_scroll_metrics};

#[component]
pub fn Hero() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let circles = scatter(config.jitter_seed, config.floating_circles);

    let entered = use_entrance();
    let metrics = use_scroll_metrics();
    let pointer = use_pointer();

    // Fades, sinks and shrinks while the hero scrolls out.
    let stage_style = move || {
        let progress = metrics.get().hero_progress();
        format!(
            "transform:translateY({}%) scale({});opacity:{};",
            HERO_Y_PCT.apply(progress),
            HERO_SCALE.apply(progress),
            HERO_OPACITY.apply(progress),
        )
    };
    let tilt_style = move || {
        let (rotate_x, rotate_y) = pointer.get().tilt();
        format!("transform:rotateX({rotate_x}deg) rotateY({rotate_y}deg);")
    };
    let nudge_style = move || {
        let (x, y) = pointer.get().nudge();
        format!("transform:translate({x}px,{y}px);")
    };

    view! {
        <section class="hero" id="top" data-section="hero">
            <div class="hero-stage" style=stage_style>
                <div class="floating-elements" aria-hidden="true">
                    {circles
                        .into_iter()
                        .map(|circle| view! { <div class="floating-circle" style=circle.style()></div> })
                        .collect_view()}
                </div>

                <div class="hero-product-tilt" style=tilt_style>
                    <div
                        class="hero-product reveal"
                        role="img"
                        aria-label=format!("{PRODUCT_NAME} modular phone")
                        style=move || {
                            format!(
                                "background-image:url('{HERO_IMAGE}');{}",
                                HERO_PRODUCT.style_at(entered.get(), HERO_STAGGER, 0),
                            )
                        }
                    ></div>
                </div>

                <h1
                    class="hero-title reveal"
                    style=move || HERO_TITLE.style_at(entered.get(), HERO_STAGGER, 1)
                >
                    {PRODUCT_NAME}
                    <br />
                    "Modular Future"
                </h1>

                <p
                    class="hero-subtitle reveal"
                    style=move || HERO_ITEM.style_at(entered.get(), HERO_STAGGER, 2)
                >
                    "The world's first truly modular smartphone. Swap components like camera, battery, and speakers instantly. "
                    "Build your perfect device, your way."
                </p>

                <div style=nudge_style>
                    <a
                        href="#waitlist"
                        class="cta-button reveal"
                        style=move || HERO_ITEM.style_at(entered.get(), HERO_STAGGER, 3)
                    >
                        "Join the Waitlist"
                    </a>
                </div>
            </div>
        </section>
    }
}
