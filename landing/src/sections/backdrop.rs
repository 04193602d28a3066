// Project Ara landing page, Leptos 0.8 edition
// Project Ara Web Team (c)2025

use leptos::prelude::*;

use crate::motion::scroll::BACKDROP_Y_PCT;
use crate::motion::use_scroll_metrics;

/// Fixed gradient behind every section, drifting with page scroll, plus a
/// breathing vignette (pure CSS).
#[component]
pub fn Backdrop() -> impl IntoView {
    let metrics = use_scroll_metrics();
    let drift = move || {
        let y = BACKDROP_Y_PCT.apply(metrics.get().page_progress());
        format!("transform:translateY({y}%);")
    };

    view! {
        <div class="backdrop" aria-hidden="true" style=drift></div>
        <div class="backdrop-overlay" aria-hidden="true"></div>
    }
}
