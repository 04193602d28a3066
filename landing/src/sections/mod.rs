// Landing page sections
// Project Ara Web Team (c)2025

mod backdrop;
mod footer;
mod hero;
mod highlights;
mod showcase;
mod testimonials;
mod waitlist_form;

pub use backdrop::Backdrop;
pub use footer::Footer;
pub use hero::Hero;
pub use highlights::Highlights;
pub use showcase::ModularShowcase;
pub use testimonials::Testimonials;
pub use waitlist_form::WaitlistSection;

use leptos::html;
use leptos::prelude::*;

use crate::motion::{Bounds, use_reveal};

/// One-shot reveal for the element behind `node`, once it comes within
/// `margin` px of the viewport edges.
pub(crate) fn reveal_on_scroll<E>(node: NodeRef<E>, margin: f64) -> ReadSignal<bool>
where
    E: html::ElementType,
    E::Output: wasm_bindgen::JsCast + Clone + AsRef<web_sys::Element> + 'static,
{
    use_reveal(
        move || node.get_untracked().map(|el| Bounds::of(el.as_ref())),
        margin,
    )
}
