//! Local state owned by individual sections.
//!
//! The machines are plain data types; sections wrap them in `RwSignal`s.
//! Nothing here is shared between sections.

pub mod rotation;
pub mod selection;
pub mod waitlist;

pub use rotation::{Rotation, SlideDirection, rotation_tick};
pub use selection::Selection;
pub use waitlist::{SubmitPhase, Submission, WaitlistState};
