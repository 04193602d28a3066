//! Recurring timers scoped to the calling component.

use std::time::Duration;

use leptos::prelude::*;
use tracing::warn;

/// Run `tick` every `period` while the calling component is mounted.
///
/// The interval is registered on mount and cleared with the component, so no
/// tick is delivered after teardown.
pub fn use_interval(period: Duration, tick: impl Fn() + Clone + 'static) {
    Effect::new(move || match set_interval_with_handle(tick.clone(), period) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => warn!(?err, ?period, "failed to register interval"),
    });
}
