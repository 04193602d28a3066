//! Pointer parallax for the hero.

use leptos::ev;
use leptos::prelude::*;

/// Pointer position as a percentage of the window, `0..=100` on each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        let pct = |value: f64, extent: f64| {
            if extent > 0.0 {
                (value / extent * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            }
        };
        Self {
            x: pct(client_x, width),
            y: pct(client_y, height),
        }
    }

    /// Product image tilt as `(rotate_x, rotate_y)` degrees.
    pub fn tilt(&self) -> (f64, f64) {
        (self.y * 0.1 - 5.0, self.x * 0.1 - 5.0)
    }

    /// Call-to-action drift as `(x, y)` px.
    pub fn nudge(&self) -> (f64, f64) {
        (self.x * 0.02 - 1.0, self.y * 0.02 - 1.0)
    }
}

/// Track the pointer over the window while the calling section is mounted.
pub fn use_pointer() -> ReadSignal<PointerPosition> {
    let (position, set_position) = signal(PointerPosition::default());

    Effect::new(move || {
        let handle = window_event_listener(ev::mousemove, move |event| {
            let window = window();
            let extent = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
            };
            set_position.set(PointerPosition::from_client(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                extent(window.inner_width()),
                extent(window.inner_height()),
            ));
        });
        on_cleanup(move || handle.remove());
    });

    position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_coordinates_become_percentages() {
        let p = PointerPosition::from_client(480.0, 270.0, 1920.0, 1080.0);
        assert_eq!(p, PointerPosition { x: 25.0, y: 25.0 });
    }

    #[test]
    fn zero_sized_window_yields_origin() {
        let p = PointerPosition::from_client(10.0, 10.0, 0.0, 0.0);
        assert_eq!(p, PointerPosition::default());
    }

    #[test]
    fn centered_pointer_cancels_tilt_and_nudge() {
        let center = PointerPosition { x: 50.0, y: 50.0 };
        assert_eq!(center.tilt(), (0.0, 0.0));
        assert_eq!(center.nudge(), (0.0, 0.0));
    }

    #[test]
    fn corners_tilt_five_degrees() {
        assert_eq!(PointerPosition::default().tilt(), (-5.0, -5.0));
        assert_eq!(PointerPosition { x: 100.0, y: 100.0 }.tilt(), (5.0, 5.0));
        assert_eq!(PointerPosition { x: 100.0, y: 0.0 }.nudge(), (1.0, -1.0));
    }
}
