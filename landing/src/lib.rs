//! # ara-landing
//!
//! Landing page for Project Ara, the modular smartphone, built with
//! [Leptos](https://leptos.dev/) 0.8.
//!
//! The same component tree is mounted in the browser (`csr` feature, see
//! `main.rs`) and rendered to static HTML by the `ara-prerender` CLI (`ssr`
//! feature). Browser-only work (timers, window listeners, the waitlist
//! request) happens inside effects, which never run during server rendering.
//!
//! ## Layout
//!
//! - [`content`] - static copy: testimonials, modules, highlights, links
//! - [`state`] - rotation, selection and waitlist state machines
//! - [`waitlist`] - backend seam for waitlist signups
//! - [`motion`] - animation tables, scroll/pointer hooks, timers
//! - [`sections`] - one component per page section
//! - [`config`], [`telemetry`], [`error`], [`styles`] - the plumbing
//!
//! ---
//!
//! Project Ara Web Team (c)2025

pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod sections;
pub mod state;
pub mod styles;
pub mod telemetry;
pub mod waitlist;

use leptos::prelude::*;

pub use config::LandingConfig;
pub use error::{ConfigError, ContentError, WaitlistError};
pub use waitlist::{WaitlistBackend, WaitlistClient};

use sections::{Backdrop, Footer, Hero, Highlights, ModularShowcase, Testimonials, WaitlistSection};

/// Page sections in render order. Each section root carries a matching
/// `data-section` attribute.
pub const SECTION_ORDER: [&str; 6] = [
    "hero",
    "highlights",
    "showcase",
    "testimonials",
    "waitlist",
    "footer",
];

/// The whole page.
///
/// `config` is provided to every section through context together with the
/// waitlist client. Pass `client` to replace the simulated backend.
#[component]
pub fn App(
    #[prop(optional)] config: LandingConfig,
    #[prop(optional)] client: Option<WaitlistClient>,
) -> impl IntoView {
    let client = client.unwrap_or_else(|| WaitlistClient::simulated(config.submit_latency()));
    provide_context(config);
    provide_context(client);

    view! {
        <style>{styles::LANDING_CSS}{motion::presets::entrance_keyframes()}</style>
        <div class="page">
            <Backdrop />
            <Hero />
            <Highlights />
            <ModularShowcase />
            <Testimonials />
            <WaitlistSection />
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_order_is_fixed() {
        assert_eq!(SECTION_ORDER.first(), Some(&"hero"));
        assert_eq!(SECTION_ORDER.last(), Some(&"footer"));
        let unique: std::collections::HashSet<_> = SECTION_ORDER.iter().collect();
        assert_eq!(unique.len(), SECTION_ORDER.len());
    }
}
