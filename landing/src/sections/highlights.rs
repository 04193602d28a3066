// Project Ara landing page, Leptos 0.8 edition
// Project Ara Web Team (c)2025

use leptos::html;
use leptos::prelude::*;

use super::reveal_on_scroll;
use crate::content::{HIGHLIGHTS, Highlight};
use crate::motion::presets::{
    FEATURE_ITEM, FEATURE_STAGGER, HIGHLIGHT_STAGGER, highlight_copy, highlight_image,
};

/// Blocks reveal once they are 100px inside the viewport.
const REVEAL_MARGIN: f64 = 100.0;

#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section class="highlights" id="highlights" data-section="highlights">
            {HIGHLIGHTS
                .iter()
                .enumerate()
                .map(|(index, highlight)| {
                    view! { <HighlightBlock highlight=highlight reverse=index % 2 == 1 /> }
                })
                .collect_view()}
        </section>
    }
}

/// Image and copy side by side; odd blocks swap sides.
#[component]
fn HighlightBlock(highlight: &'static Highlight, reverse: bool) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let shown = reveal_on_scroll(node, REVEAL_MARGIN);

    let copy = highlight_copy(reverse);
    let image = highlight_image(reverse);
    let class = if reverse { "highlight reverse" } else { "highlight" };

    view! {
        <div class=class node_ref=node>
            <div
                class="highlight-image reveal"
                role="img"
                aria-label=highlight.title
                style=move || {
                    format!("background-image:url('{}');{}", highlight.image, image.style(shown.get(), 0.0))
                }
            ></div>

            <div class="highlight-copy">
                <h2
                    class="highlight-title gradient-text reveal"
                    style=move || copy.style_at(shown.get(), HIGHLIGHT_STAGGER, 0)
                >
                    {highlight.title}
                </h2>
                <p
                    class="highlight-description reveal"
                    style=move || copy.style_at(shown.get(), HIGHLIGHT_STAGGER, 1)
                >
                    {highlight.description}
                </p>
                <ul class="feature-list">
                    {highlight
                        .features
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            // the list itself is the third staggered child
                            let delay = HIGHLIGHT_STAGGER.delay(2) + FEATURE_STAGGER.delay(index);
                            view! {
                                <li
                                    class="feature-item reveal"
                                    style=move || FEATURE_ITEM.style(shown.get(), delay)
                                >
                                    {*feature}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
