//! Scroll-linked transforms.
//!
//! Progress is a clamped `0..=1` value derived from the scroll offset; a
//! [`Transform`] maps a slice of that progress onto an output range. These
//! only drive presentation and never feed back into section state.

use leptos::ev;
use leptos::prelude::*;

/// Linear, clamped mapping from an input range of progress to an output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl Transform {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn apply(&self, progress: f64) -> f64 {
        let (lo, hi) = self.input;
        let (from, to) = self.output;
        let t = if hi > lo {
            ((progress - lo) / (hi - lo)).clamp(0.0, 1.0)
        } else if progress >= lo {
            1.0
        } else {
            0.0
        };
        from + (to - from) * t
    }
}

/// Progress of `offset` through `start..end`, clamped to `0..=1`.
pub fn scroll_progress(offset: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if offset >= start { 1.0 } else { 0.0 };
    }
    ((offset - start) / (end - start)).clamp(0.0, 1.0)
}

/// Background drifts down by half its height across the whole page.
pub const BACKDROP_Y_PCT: Transform = Transform::new((0.0, 1.0), (0.0, 50.0));
pub const HERO_Y_PCT: Transform = Transform::new((0.0, 1.0), (0.0, 50.0));
pub const HERO_OPACITY: Transform = Transform::new((0.0, 0.5), (1.0, 0.0));
pub const HERO_SCALE: Transform = Transform::new((0.0, 0.5), (1.0, 0.8));

/// Snapshot of the window scroll position and extents, in px.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport: f64,
    pub document: f64,
}

impl ScrollMetrics {
    /// False until the first read from the window; every progress is 0 then.
    pub fn is_measured(&self) -> bool {
        self.viewport > 0.0
    }

    /// Whole page: top of page at the top of the viewport to bottom of page at
    /// the bottom of the viewport.
    pub fn page_progress(&self) -> f64 {
        if !self.is_measured() {
            return 0.0;
        }
        scroll_progress(self.offset, 0.0, self.document - self.viewport)
    }

    /// A region starting at `top` (page coordinates), from its top meeting the
    /// viewport top until its bottom leaves it.
    pub fn region_progress(&self, top: f64, height: f64) -> f64 {
        if !self.is_measured() {
            return 0.0;
        }
        scroll_progress(self.offset, top, top + height)
    }

    /// The hero fills the first viewport of the page.
    pub fn hero_progress(&self) -> f64 {
        self.region_progress(0.0, self.viewport)
    }

    fn read() -> Self {
        let window = window();
        let offset = window.scroll_y().unwrap_or_default();
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let document = document()
            .document_element()
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(viewport);
        Self {
            offset,
            viewport,
            document,
        }
    }
}

/// Live scroll metrics for the calling section.
///
/// The window listener is acquired on mount and released with the section.
/// Outside the browser the signal stays at its default.
pub fn use_scroll_metrics() -> ReadSignal<ScrollMetrics> {
    let (metrics, set_metrics) = signal(ScrollMetrics::default());

    Effect::new(move || {
        set_metrics.set(ScrollMetrics::read());
        let scroll = window_event_listener(ev::scroll, move |_| {
            set_metrics.set(ScrollMetrics::read());
        });
        let resize = window_event_listener(ev::resize, move |_| {
            set_metrics.set(ScrollMetrics::read());
        });
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
        });
    });

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(-50.0, 0.0, 100.0), 0.0);
        assert_eq!(scroll_progress(50.0, 0.0, 100.0), 0.5);
        assert_eq!(scroll_progress(500.0, 0.0, 100.0), 1.0);
    }

    #[test]
    fn degenerate_range_is_a_step() {
        assert_eq!(scroll_progress(0.0, 10.0, 10.0), 0.0);
        assert_eq!(scroll_progress(10.0, 10.0, 10.0), 1.0);
    }

    #[test]
    fn transform_is_monotonic_within_range() {
        let mut previous = HERO_OPACITY.apply(0.0);
        for step in 1..=100 {
            let value = HERO_OPACITY.apply(f64::from(step) / 100.0);
            assert!(value <= previous);
            previous = value;
        }
        assert_eq!(HERO_OPACITY.apply(0.25), 0.5);
        assert_eq!(HERO_OPACITY.apply(0.9), 0.0);
    }

    #[test]
    fn hero_scale_bottoms_out_at_half_progress() {
        assert_eq!(HERO_SCALE.apply(0.0), 1.0);
        assert!((HERO_SCALE.apply(0.5) - 0.8).abs() < 1e-9);
        assert!((HERO_SCALE.apply(1.0) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn page_progress_spans_scrollable_height() {
        let metrics = ScrollMetrics {
            offset: 1500.0,
            viewport: 1000.0,
            document: 4000.0,
        };
        assert_eq!(metrics.page_progress(), 0.5);
        assert_eq!(BACKDROP_Y_PCT.apply(metrics.page_progress()), 25.0);
        assert_eq!(metrics.hero_progress(), 1.0);
    }

    #[test]
    fn unmeasured_metrics_report_no_progress() {
        let metrics = ScrollMetrics::default();
        assert!(!metrics.is_measured());
        assert_eq!(metrics.page_progress(), 0.0);
        assert_eq!(metrics.hero_progress(), 0.0);
        assert_eq!(HERO_OPACITY.apply(metrics.hero_progress()), 1.0);
    }

    #[test]
    fn short_page_counts_as_fully_scrolled() {
        let metrics = ScrollMetrics {
            offset: 0.0,
            viewport: 1000.0,
            document: 800.0,
        };
        assert_eq!(metrics.page_progress(), 1.0);
    }
}
