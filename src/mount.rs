//! JavaScript entry points for hosts that mount badges into their own pages.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::components::{Overlay, OverlayProps};
use crate::config::{DeveloperConfig, OverlayConfig};
use crate::error::{BadgeError, Result};
use crate::logging::setup_logging;

fn find_root(selector: &str) -> Result<Element> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| BadgeError::Mount("no document available".to_string()))?;

    document
        .query_selector(selector)
        .map_err(|e| BadgeError::Mount(format!("invalid selector {:?}: {:?}", selector, e)))?
        .ok_or_else(|| BadgeError::Mount(format!("no element matches {:?}", selector)))
}

/// Renders the badges described by `config` into the first element matching
/// `selector`. The element should be positioned, or sit inside a positioned
/// ancestor, for the badge anchors to take effect.
#[wasm_bindgen(js_name = mountBadges)]
pub fn mount_badges(selector: &str, config: JsValue) -> std::result::Result<(), JsValue> {
    // Logging goes up before the badges are parsed so side fallbacks are seen.
    // A host page may have installed our logger already.
    let developer = DeveloperConfig::from_js(&config).unwrap_or_default();
    if let Err(e) = setup_logging(&developer) {
        log::debug!("{}", e);
    }

    let config = OverlayConfig::from_js(config)?;

    let root = find_root(selector)?;
    log::info!("Mounting {} badge(s) into {}", config.badges.len(), selector);

    yew::Renderer::<Overlay>::with_root_and_props(
        root,
        OverlayProps {
            badges: config.badges,
        },
    )
    .render();

    Ok(())
}
