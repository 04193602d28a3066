// Project Ara landing page, Leptos 0.8 edition
// Project Ara Web Team (c)2025

use leptos::html;
use leptos::prelude::*;

use super::reveal_on_scroll;
use crate::content::{FOOTER_LINKS, PRODUCT_NAME, SOCIAL_LINKS};
use crate::motion::Stagger;
use crate::motion::presets::{FOOTER_ITEM, FOOTER_LINK, FOOTER_STAGGER, SOCIAL_ICON};

/// Year printed in the copyright line until the browser reports the real one.
const COPYRIGHT_YEAR: u32 = 2025;

/// Links and icons inside a row follow each other at this pace.
const ROW_STAGGER: f64 = 0.1;

#[component]
pub fn Footer() -> impl IntoView {
    let node = NodeRef::<html::Footer>::new();
    let shown = reveal_on_scroll(node, 50.0);

    let (year, set_year) = signal(COPYRIGHT_YEAR);
    Effect::new(move || {
        let current = js_sys::Date::new_0().get_full_year();
        set_year.set(current);
    });

    let item = move |index: usize| FOOTER_ITEM.style_at(shown.get(), FOOTER_STAGGER, index);
    let links = Stagger::new(FOOTER_STAGGER.delay(1), ROW_STAGGER);
    let socials = Stagger::new(FOOTER_STAGGER.delay(2), ROW_STAGGER);

    view! {
        <footer class="footer" data-section="footer" node_ref=node>
            <div class="footer-content">
                <div class="company-name gradient-text reveal" style=move || item(0)>
                    {PRODUCT_NAME}
                </div>

                <nav class="footer-links">
                    {FOOTER_LINKS
                        .iter()
                        .enumerate()
                        .map(|(index, link)| {
                            view! {
                                <a
                                    href=link.href
                                    class="footer-link reveal"
                                    style=move || FOOTER_LINK.style_at(shown.get(), links, index)
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="social-links">
                    {SOCIAL_LINKS
                        .iter()
                        .enumerate()
                        .map(|(index, social)| {
                            view! {
                                <div
                                    class="social-icon reveal"
                                    role="img"
                                    title=social.name
                                    aria-label=social.name
                                    style=move || SOCIAL_ICON.style_at(shown.get(), socials, index)
                                >
                                    {social.icon}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="copyright reveal" style=move || item(3)>
                    {move || format!("© {} {PRODUCT_NAME} by Google. All rights reserved.", year.get())}
                </p>
            </div>
        </footer>
    }
}
