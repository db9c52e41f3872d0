//! Tailwind rule sets used by the floating badge.

use crate::side::{Placement, Side};

/// Absolute, elevated flex column.
pub const SHARED_RULES: &[&str] = &["absolute", "z-50", "flex", "flex-col", "items-center"];

/// Pulse, hover scale-up and pointer cursor. Applied to every badge.
pub const EFFECT_RULES: &[&str] = &[
    "animate-pulse",
    "cursor-pointer",
    "transition-transform",
    "duration-300",
    "ease-in-out",
    "hover:scale-110",
];

pub const PILL_RULES: &[&str] = &[
    "mt-1",
    "rounded-full",
    "px-2",
    "py-0.5",
    "text-xs",
    "font-bold",
    "text-white",
    "border",
    "border-white/30",
    "shadow-md",
];

/// Pill background when no color override is given.
pub const DEFAULT_ACCENT: &str = "bg-red-500";

const LEFT_RULES: &[&str] = &["bottom-4", "left-4"];
const RIGHT_RULES: &[&str] = &["top-4", "right-4"];
const BOTTOM_RIGHT_RULES: &[&str] = &["bottom-4", "right-4"];

impl Side {
    pub fn position_rules(self) -> &'static [&'static str] {
        match self {
            Side::Left => LEFT_RULES,
            Side::Right => RIGHT_RULES,
            Side::BottomRight => BOTTOM_RIGHT_RULES,
        }
    }
}

impl Placement {
    pub fn position_rules(self) -> &'static [&'static str] {
        match self {
            Placement::Anchored(side) => side.position_rules(),
            Placement::Floating => &[],
        }
    }
}
