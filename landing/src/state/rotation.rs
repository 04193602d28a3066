//! Testimonial rotation: a cursor over a fixed, non-empty sequence.
//!
//! The carousel advances on a timer and can be jumped by the dot indicators.
//! A manual jump does not touch the timer, so the next tick still lands on the
//! original schedule.

use std::num::NonZeroUsize;

use leptos::prelude::*;

use crate::error::ContentError;

/// Which way the incoming card slides in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlideDirection {
    #[default]
    Forward,
    Backward,
}

impl SlideDirection {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Forward => "slide-forward",
            Self::Backward => "slide-backward",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    len: NonZeroUsize,
    current: usize,
    direction: SlideDirection,
}

impl Rotation {
    pub const fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            current: 0,
            direction: SlideDirection::Forward,
        }
    }

    /// Build a rotation for a sequence of `len` items.
    pub fn for_len(len: usize) -> Result<Self, ContentError> {
        NonZeroUsize::new(len)
            .map(Self::new)
            .ok_or(ContentError::EmptySequence)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.len.get()
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Periodic step, wrapping after the last item.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len.get();
        self.direction = SlideDirection::Forward;
    }

    /// Jump straight to `index`. Returns whether the position changed.
    pub fn select(&mut self, index: usize) -> bool {
        if self.check(index).is_err() || index == self.current {
            return false;
        }
        self.direction = if index > self.current {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        self.current = index;
        true
    }

    pub fn check(&self, index: usize) -> Result<usize, ContentError> {
        if index < self.len.get() {
            Ok(index)
        } else {
            Err(ContentError::IndexOutOfRange {
                index,
                len: self.len.get(),
            })
        }
    }
}

/// Timer callback advancing `rotation`.
///
/// Uses `try_update`, so a tick that fires after the owning section has been
/// disposed is silently dropped.
pub fn rotation_tick(rotation: RwSignal<Rotation>) -> impl Fn() + Clone + 'static {
    move || {
        if rotation.try_update(Rotation::advance).is_none() {
            tracing::debug!("rotation tick after teardown ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation(len: usize) -> Rotation {
        Rotation::for_len(len).unwrap()
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(Rotation::for_len(0), Err(ContentError::EmptySequence));
    }

    #[test]
    fn ticks_wrap_modulo_length() {
        for len in 1..=6 {
            let mut r = rotation(len);
            for k in 1..=13 {
                r.advance();
                assert_eq!(r.current(), k % len, "len={len} k={k}");
            }
        }
    }

    #[test]
    fn five_ticks_over_four_items_lands_on_one() {
        let mut r = rotation(4);
        (0..5).for_each(|_| r.advance());
        assert_eq!(r.current(), 1);
        assert_eq!(r.direction(), SlideDirection::Forward);
    }

    #[test]
    fn single_item_tick_is_noop() {
        let mut r = rotation(1);
        r.advance();
        assert_eq!(r.current(), 0);
    }

    #[test]
    fn select_sets_position_from_anywhere() {
        for start in 0..4 {
            for target in 0..4 {
                let mut r = rotation(4);
                (0..start).for_each(|_| r.advance());
                r.select(target);
                assert_eq!(r.current(), target);
            }
        }
    }

    #[test]
    fn select_derives_direction() {
        let mut r = rotation(4);
        assert!(r.select(3));
        assert_eq!(r.direction(), SlideDirection::Forward);
        assert!(r.select(1));
        assert_eq!(r.direction(), SlideDirection::Backward);
        assert!(!r.select(1));
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut r = rotation(4);
        r.advance();
        assert!(!r.select(4));
        assert_eq!(r.current(), 1);
        assert_eq!(
            r.check(9),
            Err(ContentError::IndexOutOfRange { index: 9, len: 4 })
        );
    }

    #[test]
    fn tick_after_teardown_does_not_mutate() {
        let owner = Owner::new();
        let (signal, tick) = owner.with(|| {
            let signal = RwSignal::new(rotation(4));
            (signal, rotation_tick(signal))
        });

        tick();
        assert_eq!(signal.get_untracked().current(), 1);

        owner.cleanup();
        tick();
        assert!(signal.try_get_untracked().is_none());
    }
}
