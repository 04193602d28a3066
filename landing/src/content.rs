//! Static copy for the landing page.
//!
//! Every table here is a process-wide constant; sections only read from them.
//! Selection and rotation state live in [`crate::state`], never on the records.

use std::fmt;

/// Product name used in titles, footer and metadata.
pub const PRODUCT_NAME: &str = "Project Ara";

/// Document title for the host page and the prerendered snapshot.
pub const PAGE_TITLE: &str = "Project Ara - Modular Smartphone Revolution";

/// Meta description for the host page and the prerendered snapshot.
pub const PAGE_DESCRIPTION: &str = "The world's first truly modular smartphone. Swap components instantly. \
Build your perfect device, your way. Join the revolution.";

/// Placeholder artwork until real product imagery is delivered.
pub const HERO_IMAGE: &str = "/placeholder.svg?height=300&width=200";
const HIGHLIGHT_IMAGE: &str = "/placeholder.svg?height=400&width=600";

/// A customer quote shown in the testimonial carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub title: &'static str,
    /// Initials rendered inside the avatar bubble.
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "Project Ara is the future of smartphones. Being able to swap out my camera module for \
different shoots has revolutionized my photography workflow.",
        author: "Alex Chen",
        title: "Professional Photographer",
        avatar: "AC",
    },
    Testimonial {
        text: "Finally, a phone that adapts to my needs instead of forcing me to adapt to it. \
The modular design is pure genius.",
        author: "Maria Rodriguez",
        title: "Tech Journalist, Wired",
        avatar: "MR",
    },
    Testimonial {
        text: "As a developer, having specialized modules for different projects is incredible. \
The health sensor module alone has opened up so many possibilities.",
        author: "David Kim",
        title: "App Developer",
        avatar: "DK",
    },
    Testimonial {
        text: "Project Ara isn't just a phone - it's a platform. The sustainability aspect alone \
makes this a game-changer for the industry.",
        author: "Sarah Johnson",
        title: "Environmental Tech Analyst",
        avatar: "SJ",
    },
];

/// Identifier of a hardware module in the interactive showcase.
///
/// The set is closed, so an unknown id can never reach the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleId {
    Camera,
    Battery,
    Speaker,
    Health,
}

impl ModuleId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Battery => "battery",
            Self::Speaker => "speaker",
            Self::Health => "health",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a module slot sits around the phone body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPosition {
    Top,
    Right,
    Bottom,
    Left,
}

impl SlotPosition {
    /// CSS modifier class for the slot.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Top => "slot-top",
            Self::Right => "slot-right",
            Self::Bottom => "slot-bottom",
            Self::Left => "slot-left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module {
    pub id: ModuleId,
    pub position: SlotPosition,
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub specs: &'static [&'static str],
}

pub const MODULES: &[Module] = &[
    Module {
        id: ModuleId::Camera,
        position: SlotPosition::Top,
        icon: "📷",
        name: "Pro Camera Module",
        description: "Professional-grade camera with optical zoom, night mode, and 4K video recording.",
        specs: &["50MP main sensor", "3x optical zoom", "Night mode", "4K 60fps video"],
    },
    Module {
        id: ModuleId::Battery,
        position: SlotPosition::Right,
        icon: "🔋",
        name: "Extended Battery",
        description: "Double your battery life with this high-capacity power module.",
        specs: &["5000mAh capacity", "Fast charging", "Wireless charging", "48hr battery life"],
    },
    Module {
        id: ModuleId::Speaker,
        position: SlotPosition::Bottom,
        icon: "🔊",
        name: "Audio Boost",
        description: "Premium speakers with enhanced bass and crystal-clear audio.",
        specs: &["Stereo speakers", "Enhanced bass", "Noise cancellation", "Hi-Fi audio"],
    },
    Module {
        id: ModuleId::Health,
        position: SlotPosition::Left,
        icon: "❤️",
        name: "Health Sensor",
        description: "Advanced health monitoring with heart rate, SpO2, and stress tracking.",
        specs: &["Heart rate monitor", "SpO2 sensor", "Stress tracking", "Sleep analysis"],
    },
];

/// Look up a module by id. `None` means the info panel renders nothing.
pub fn find_module(id: ModuleId) -> Option<&'static Module> {
    MODULES.iter().find(|module| module.id == id)
}

/// A two-column feature block in the highlights section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Modular Design Revolution",
        description: "Hot-swappable modules let you customize your phone like never before. Upgrade your \
camera for a photo shoot, swap in extra battery for long trips, or add specialized sensors for work.",
        features: &[
            "Hot-swappable modules",
            "Magnetic connections",
            "Universal module standard",
            "Endless customization",
        ],
        image: HIGHLIGHT_IMAGE,
    },
    Highlight {
        title: "Sustainable Technology",
        description: "Reduce electronic waste by upgrading only what you need. Keep your phone longer by \
replacing individual components instead of the entire device.",
        features: &[
            "Reduce e-waste by 80%",
            "Upgrade individual parts",
            "Longer device lifespan",
            "Eco-friendly materials",
        ],
        image: HIGHLIGHT_IMAGE,
    },
    Highlight {
        title: "Endless Possibilities",
        description: "From professional photography modules to health sensors, gaming controllers to \
projectors - the possibilities are limitless with our growing ecosystem.",
        features: &[
            "Professional camera modules",
            "Health & fitness sensors",
            "Gaming attachments",
            "Productivity tools",
        ],
        image: HIGHLIGHT_IMAGE,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { name: "About", href: "#" },
    FooterLink { name: "Privacy", href: "#" },
    FooterLink { name: "Terms", href: "#" },
    FooterLink { name: "Contact", href: "#" },
    FooterLink { name: "Support", href: "#" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub name: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: "𝕏", name: "Twitter" },
    SocialLink { icon: "📘", name: "Facebook" },
    SocialLink { icon: "📷", name: "Instagram" },
    SocialLink { icon: "💼", name: "LinkedIn" },
];
