mod floating_badge;
mod overlay;

pub use floating_badge::{FloatingBadge, FloatingBadgeProps};
pub use overlay::{Overlay, OverlayProps};
