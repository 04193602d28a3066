//! One-shot "entered the viewport" detection.

use leptos::ev;
use leptos::prelude::*;

/// Vertical extent of an element relative to the viewport, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn of(element: &web_sys::Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            top: rect.top(),
            bottom: rect.bottom(),
        }
    }

    /// Whether the element overlaps the viewport shrunk by `margin` px on
    /// the top and bottom edges.
    pub fn in_view(&self, viewport: f64, margin: f64) -> bool {
        self.top < viewport - margin && self.bottom > margin
    }
}

/// `true` from the first animation frame after mount.
///
/// Elements render in their hidden variant first, so flipping this a frame
/// later lets the CSS transition play.
pub fn use_entrance() -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);
    Effect::new(move || request_animation_frame(move || set_entered.set(true)));
    entered
}

/// Flip to `true` once the element reported by `bounds` scrolls into view,
/// and stay there.
///
/// `bounds` is polled on the first frame after mount and on every scroll
/// until the reveal happens.
pub fn use_reveal(
    bounds: impl Fn() -> Option<Bounds> + Clone + 'static,
    margin: f64,
) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    Effect::new(move || {
        let check = {
            let bounds = bounds.clone();
            move || {
                // disposed counts as revealed
                if revealed.try_get_untracked().unwrap_or(true) {
                    return;
                }
                let viewport = window()
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or_default();
                if bounds().is_some_and(|b| b.in_view(viewport, margin)) {
                    set_revealed.set(true);
                }
            }
        };
        request_animation_frame(check.clone());
        let handle = window_event_listener(ev::scroll, move |_| check());
        on_cleanup(move || handle.remove());
    });

    revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_element_is_in_view() {
        let bounds = Bounds {
            top: 100.0,
            bottom: 400.0,
        };
        assert!(bounds.in_view(800.0, 0.0));
    }

    #[test]
    fn below_the_fold_is_not_in_view() {
        let bounds = Bounds {
            top: 900.0,
            bottom: 1200.0,
        };
        assert!(!bounds.in_view(800.0, 0.0));
    }

    #[test]
    fn margin_shrinks_the_viewport() {
        let peeking = Bounds {
            top: 750.0,
            bottom: 1100.0,
        };
        assert!(peeking.in_view(800.0, 0.0));
        assert!(!peeking.in_view(800.0, 100.0));
    }

    #[test]
    fn scrolled_past_is_not_in_view() {
        let gone = Bounds {
            top: -600.0,
            bottom: -20.0,
        };
        assert!(!gone.in_view(800.0, 0.0));
    }
}
