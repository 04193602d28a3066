//! Declarative entrance animations.
//!
//! A [`Reveal`] pairs a hidden and a visible [`Variant`] with the
//! [`Transition`] between them. Sections pick a preset, ask for the inline
//! style of the current state and let CSS transitions do the rest. Nested
//! children are offset with a [`Stagger`].

/// Target visual parameters of one animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub opacity: f64,
    /// Horizontal offset in px.
    pub x: f64,
    /// Vertical offset in px.
    pub y: f64,
    pub scale: f64,
    /// Degrees.
    pub rotate_y: f64,
    /// Blur radius in px.
    pub blur: f64,
    /// Letter spacing in em, when the variant animates typography.
    pub letter_spacing: Option<f64>,
}

impl Variant {
    /// Fully visible, untransformed.
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate_y: 0.0,
        blur: 0.0,
        letter_spacing: None,
    };

    pub fn css(&self) -> String {
        let mut css = format!(
            "opacity:{};transform:translate3d({}px,{}px,0) scale({}) rotateY({}deg);filter:blur({}px);",
            self.opacity, self.x, self.y, self.scale, self.rotate_y, self.blur
        );
        if let Some(spacing) = self.letter_spacing {
            css.push_str(&format!("letter-spacing:{spacing}em;"));
        }
        css
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Physically-flavoured motion. Unit mass; `duration` overrides the
    /// settling time estimate.
    Spring {
        stiffness: f64,
        damping: f64,
        duration: Option<f64>,
    },
    Tween {
        duration: f64,
        easing: &'static str,
    },
}

const OVERSHOOT: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";
const SETTLE: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

impl Transition {
    pub const fn spring(stiffness: f64, damping: f64) -> Self {
        Self::Spring {
            stiffness,
            damping,
            duration: None,
        }
    }

    pub const fn spring_for(stiffness: f64, damping: f64, duration: f64) -> Self {
        Self::Spring {
            stiffness,
            damping,
            duration: Some(duration),
        }
    }

    /// Seconds.
    pub fn duration(&self) -> f64 {
        match *self {
            Self::Spring {
                duration: Some(duration),
                ..
            } => duration,
            Self::Spring { damping, .. } if damping > 0.0 => (8.0 / damping).clamp(0.2, 1.5),
            Self::Spring { .. } => 1.5,
            Self::Tween { duration, .. } => duration,
        }
    }

    pub fn easing(&self) -> &'static str {
        match *self {
            Self::Spring {
                stiffness, damping, ..
            } => {
                let ratio = damping / (2.0 * stiffness.max(f64::EPSILON).sqrt());
                if ratio < 1.0 { OVERSHOOT } else { SETTLE }
            }
            Self::Tween { easing, .. } => easing,
        }
    }

    /// CSS `transition` declaration starting after `delay` seconds.
    pub fn css(&self, delay: f64) -> String {
        let duration = self.duration();
        let easing = self.easing();
        format!(
            "transition:opacity {duration}s {easing} {delay}s,transform {duration}s {easing} {delay}s,\
filter {duration}s {easing} {delay}s,letter-spacing {duration}s {easing} {delay}s;"
        )
    }
}

/// Delays for children of a staggered container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Stagger {
    pub const fn new(delay_children: f64, stagger_children: f64) -> Self {
        Self {
            delay_children,
            stagger_children,
        }
    }

    /// Start delay of the `index`-th child, seconds.
    pub fn delay(&self, index: usize) -> f64 {
        self.delay_children + index as f64 * self.stagger_children
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub hidden: Variant,
    pub visible: Variant,
    pub transition: Transition,
}

impl Reveal {
    /// Inline style for the current state. Hiding is immediate.
    pub fn style(&self, shown: bool, delay: f64) -> String {
        if shown {
            format!("{}{}", self.visible.css(), self.transition.css(delay))
        } else {
            self.hidden.css()
        }
    }

    pub fn style_at(&self, shown: bool, stagger: Stagger, index: usize) -> String {
        self.style(shown, stagger.delay(index))
    }

    /// `@keyframes` rule playing this reveal once, for elements that mount
    /// already shown.
    pub fn keyframes(&self, name: &str) -> String {
        format!(
            "@keyframes {name} {{ from {{ {} }} to {{ {} }} }}",
            self.hidden.css(),
            self.visible.css()
        )
    }

    /// Inline `animation` declaration for the rule built by [`Reveal::keyframes`].
    pub fn animation(&self, name: &str) -> String {
        format!(
            "animation:{name} {}s {} both;",
            self.transition.duration(),
            self.transition.easing()
        )
    }
}

/// Preset tables, one per kind of element on the page.
pub mod presets {
    use super::{Reveal, Stagger, Transition, Variant};

    const fn rise(y: f64, transition: Transition) -> Reveal {
        Reveal {
            hidden: Variant {
                opacity: 0.0,
                y,
                ..Variant::REST
            },
            visible: Variant::REST,
            transition,
        }
    }

    const fn pop(scale: f64, transition: Transition) -> Reveal {
        Reveal {
            hidden: Variant {
                opacity: 0.0,
                scale,
                ..Variant::REST
            },
            visible: Variant::REST,
            transition,
        }
    }

    pub const HERO_STAGGER: Stagger = Stagger::new(0.2, 0.3);
    pub const HERO_ITEM: Reveal = rise(100.0, Transition::spring(100.0, 12.0));
    pub const HERO_TITLE: Reveal = Reveal {
        hidden: Variant {
            opacity: 0.0,
            y: 100.0,
            letter_spacing: Some(0.5),
            ..Variant::REST
        },
        visible: Variant {
            letter_spacing: Some(-0.02),
            ..Variant::REST
        },
        transition: Transition::spring_for(100.0, 12.0, 1.0),
    };
    pub const HERO_PRODUCT: Reveal = Reveal {
        hidden: Variant {
            opacity: 0.0,
            scale: 0.5,
            rotate_y: -180.0,
            blur: 20.0,
            ..Variant::REST
        },
        visible: Variant::REST,
        transition: Transition::spring_for(80.0, 15.0, 1.2),
    };

    pub const HIGHLIGHT_STAGGER: Stagger = Stagger::new(0.3, 0.2);
    pub const FEATURE_STAGGER: Stagger = Stagger::new(0.0, 0.1);
    pub const FEATURE_ITEM: Reveal = Reveal {
        hidden: Variant {
            opacity: 0.0,
            x: -20.0,
            ..Variant::REST
        },
        visible: Variant::REST,
        transition: Transition::spring(100.0, 12.0),
    };

    /// Highlight copy slides in from the image side.
    pub fn highlight_copy(reverse: bool) -> Reveal {
        Reveal {
            hidden: Variant {
                opacity: 0.0,
                x: if reverse { 100.0 } else { -100.0 },
                blur: 10.0,
                ..Variant::REST
            },
            visible: Variant::REST,
            transition: Transition::spring_for(100.0, 15.0, 0.8),
        }
    }

    pub fn highlight_image(reverse: bool) -> Reveal {
        Reveal {
            hidden: Variant {
                opacity: 0.0,
                scale: 0.8,
                rotate_y: if reverse { -15.0 } else { 15.0 },
                ..Variant::REST
            },
            visible: Variant::REST,
            transition: Transition::spring_for(80.0, 20.0, 1.0),
        }
    }

    pub const SHOWCASE_STAGGER: Stagger = Stagger::new(0.3, 0.2);
    pub const SHOWCASE_ITEM: Reveal = rise(50.0, Transition::spring(100.0, 12.0));
    pub const PHONE: Reveal = pop(0.8, Transition::spring_for(80.0, 15.0, 1.0));
    pub const MODULE_SLOT: Reveal = pop(0.0, Transition::spring(150.0, 15.0));
    pub const MODULE_INFO: Reveal = Reveal {
        hidden: Variant {
            opacity: 0.0,
            y: 30.0,
            scale: 0.9,
            ..Variant::REST
        },
        visible: Variant::REST,
        transition: Transition::spring(150.0, 20.0),
    };

    pub const TESTIMONIAL_TITLE: Reveal = rise(50.0, Transition::spring_for(100.0, 15.0, 0.8));

    pub const WAITLIST_STAGGER: Stagger = Stagger::new(0.1, 0.2);
    pub const WAITLIST_ITEM: Reveal = rise(30.0, Transition::spring(100.0, 12.0));
    pub const SUCCESS: Reveal = pop(0.8, Transition::spring(150.0, 15.0));

    pub const FOOTER_STAGGER: Stagger = Stagger::new(0.2, 0.1);
    pub const FOOTER_ITEM: Reveal = rise(20.0, Transition::spring(100.0, 12.0));
    pub const FOOTER_LINK: Reveal = rise(10.0, Transition::spring(150.0, 15.0));
    pub const SOCIAL_ICON: Reveal = pop(0.0, Transition::spring(200.0, 15.0));

    pub const MODULE_INFO_ENTER: &str = "module-info-enter";
    pub const SUCCESS_ENTER: &str = "success-enter";

    /// Keyframe rules for the elements that appear on a state change rather
    /// than on scroll.
    pub fn entrance_keyframes() -> String {
        [(MODULE_INFO, MODULE_INFO_ENTER), (SUCCESS, SUCCESS_ENTER)]
            .iter()
            .map(|(reveal, name)| reveal.keyframes(name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::presets::*;
    use super::*;

    #[test]
    fn rest_variant_css() {
        assert_eq!(
            Variant::REST.css(),
            "opacity:1;transform:translate3d(0px,0px,0) scale(1) rotateY(0deg);filter:blur(0px);"
        );
    }

    #[test]
    fn letter_spacing_is_emitted_only_when_set() {
        assert!(HERO_TITLE.hidden.css().ends_with("letter-spacing:0.5em;"));
        assert!(!HERO_ITEM.hidden.css().contains("letter-spacing"));
    }

    #[test]
    fn explicit_spring_duration_wins() {
        assert_eq!(HERO_PRODUCT.transition.duration(), 1.2);
    }

    #[test]
    fn spring_duration_estimated_from_damping() {
        assert_eq!(Transition::spring(100.0, 16.0).duration(), 0.5);
        // stiff, barely damped springs are capped
        assert_eq!(Transition::spring(100.0, 1.0).duration(), 1.5);
        assert_eq!(Transition::spring(100.0, 100.0).duration(), 0.2);
    }

    #[test]
    fn underdamped_springs_overshoot() {
        assert_eq!(Transition::spring(100.0, 12.0).easing(), OVERSHOOT);
        assert_eq!(Transition::spring(100.0, 25.0).easing(), SETTLE);
        let tween = Transition::Tween {
            duration: 0.3,
            easing: "ease-in-out",
        };
        assert_eq!(tween.easing(), "ease-in-out");
    }

    #[test]
    fn stagger_offsets_children() {
        let stagger = Stagger::new(0.2, 0.3);
        assert_eq!(stagger.delay(0), 0.2);
        assert!((stagger.delay(2) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn hidden_state_has_no_transition() {
        let hidden = WAITLIST_ITEM.style(false, 0.5);
        assert!(hidden.starts_with("opacity:0;"));
        assert!(!hidden.contains("transition"));

        let shown = WAITLIST_ITEM.style(true, 0.5);
        assert!(shown.starts_with("opacity:1;"));
        assert!(shown.contains("transform 0.6666666666666666s"));
        assert!(shown.contains(" 0.5s,"));
    }

    #[test]
    fn entrance_keyframes_cover_state_driven_elements() {
        let css = entrance_keyframes();
        assert!(css.contains("@keyframes module-info-enter { from { opacity:0;"));
        assert!(css.contains("@keyframes success-enter"));
        assert!(!css.contains('>'));
        assert_eq!(
            SUCCESS.animation(SUCCESS_ENTER),
            format!(
                "animation:success-enter {}s cubic-bezier(0.34, 1.56, 0.64, 1) both;",
                8.0 / 15.0
            )
        );
    }

    #[test]
    fn highlight_presets_mirror_when_reversed() {
        assert_eq!(highlight_copy(false).hidden.x, -100.0);
        assert_eq!(highlight_copy(true).hidden.x, 100.0);
        assert_eq!(highlight_image(true).hidden.rotate_y, -15.0);
    }
}
