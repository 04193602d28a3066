// Project Ara landing page, Leptos 0.8 edition
// Project Ara Web Team (c)2025

use leptos::html;
use leptos::prelude::*;

use super::reveal_on_scroll;
use crate::content::{MODULES, Module, PRODUCT_NAME};
use crate::motion::presets::{
    MODULE_INFO, MODULE_INFO_ENTER, MODULE_SLOT, PHONE, SHOWCASE_ITEM, SHOWCASE_STAGGER,
};
use crate::state::Selection;

/// Interactive phone: one slot per module, click to inspect.
#[component]
pub fn ModularShowcase() -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let shown = reveal_on_scroll(node, 0.0);
    let selection = RwSignal::new(Selection::default());

    view! {
        <section class="showcase" id="modules" data-section="showcase" node_ref=node>
            <h2
                class="section-title gradient-text reveal"
                style=move || SHOWCASE_ITEM.style_at(shown.get(), SHOWCASE_STAGGER, 0)
            >
                "Interactive Modules"
            </h2>
            <p
                class="section-subtitle reveal"
                style=move || SHOWCASE_ITEM.style_at(shown.get(), SHOWCASE_STAGGER, 1)
            >
                {format!("Click on any module slot to see how {PRODUCT_NAME} adapts to your needs")}
            </p>

            <div class="phone-stage">
                <div
                    class="phone reveal"
                    style=move || PHONE.style_at(shown.get(), SHOWCASE_STAGGER, 2)
                >
                    {MODULES
                        .iter()
                        .map(|module| view! { <ModuleSlot module=module selection=selection shown=shown /> })
                        .collect_view()}
                </div>
            </div>

            {move || selection.get().module().map(|module| view! { <ModuleInfo module=module /> })}
        </section>
    }
}

#[component]
fn ModuleSlot(
    module: &'static Module,
    selection: RwSignal<Selection>,
    shown: ReadSignal<bool>,
) -> impl IntoView {
    let id = module.id;
    // slots pop in after the phone body
    let delay = SHOWCASE_STAGGER.delay(3);

    view! {
        <div class=format!("module-slot {}", module.position.class())>
            <button
                type="button"
                class="module-button reveal"
                class:active=move || selection.with(|s| s.is_selected(id))
                aria-pressed=move || selection.with(|s| s.is_selected(id)).to_string()
                aria-label=module.name
                data-module=id.as_str()
                style=move || MODULE_SLOT.style(shown.get(), delay)
                on:click=move |_| {
                    selection.update(|s| s.toggle(id));
                    tracing::debug!(module = %id, selected = ?selection.get_untracked().selected(), "module slot toggled");
                }
            >
                {module.icon}
            </button>
        </div>
    }
}

/// Details for the selected module. Re-mounted on every change of selection,
/// so the entrance animation replays.
#[component]
fn ModuleInfo(module: &'static Module) -> impl IntoView {
    view! {
        <div class="module-info" style=MODULE_INFO.animation(MODULE_INFO_ENTER)>
            <h3 class="module-name">{module.name}</h3>
            <p class="module-description">{module.description}</p>
            <ul class="module-specs">
                {module.specs.iter().map(|spec| view! { <li>{*spec}</li> }).collect_view()}
            </ul>
        </div>
    }
}
