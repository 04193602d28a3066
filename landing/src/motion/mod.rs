//! Motion layer: animation tables plus the browser hooks that drive them.
//!
//! Everything that touches `window` is acquired inside an `Effect` and
//! released through `on_cleanup`, so nothing leaks past its section and the
//! static prerender never reaches for browser APIs.

pub mod jitter;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod timers;
pub mod variants;

pub use jitter::{FloatingCircle, scatter};
pub use pointer::{PointerPosition, use_pointer};
pub use reveal::{Bounds, use_entrance, use_reveal};
pub use scroll::{ScrollMetrics, Transform, scroll_progress, use_scroll_metrics};
pub use timers::use_interval;
pub use variants::{Reveal, Stagger, Transition, Variant, presets};
