pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod mount;
pub mod request;
pub mod side;
pub mod style;

pub use components::{FloatingBadge, FloatingBadgeProps, Overlay, OverlayProps};
pub use error::{BadgeError, Result};
pub use request::{BadgeContent, DisplayRequest};
pub use side::{Placement, Side};
