use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::{BadgeError, Result};
use crate::request::{BadgeContent, DisplayRequest};
use crate::side::{Placement, Side};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeveloperConfig {
    pub logging: bool,
}

// Only the `developer` section of an overlay config; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeveloperSection {
    developer: DeveloperConfig,
}

impl DeveloperConfig {
    /// Reads just the `developer` section of an overlay config, so logging can
    /// be set up before the badges are parsed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str::<DeveloperSection>(json)
            .map(|section| section.developer)
            .map_err(|e| BadgeError::Config(e.to_string()))
    }

    pub fn from_js(value: &JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value::<DeveloperSection>(value.clone())
            .map(|section| section.developer)
            .map_err(|e| BadgeError::Config(e.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub developer: DeveloperConfig,
    pub badges: Vec<DisplayRequest>,
}

impl OverlayConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BadgeError::Config(e.to_string()))
    }

    /// Reads a configuration object handed over from JavaScript. `undefined`
    /// and `null` give the empty configuration.
    pub fn from_js(value: JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| BadgeError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| BadgeError::Config(e.to_string()))
    }

    /// One badge per anchor plus one with an unknown side, with developer
    /// logging on.
    pub fn demo() -> Self {
        let star = || BadgeContent::Text {
            text: "★".to_string(),
        };

        Self {
            developer: DeveloperConfig { logging: true },
            badges: vec![
                DisplayRequest::new(Side::Left, star()),
                DisplayRequest::new(Side::Right, star()).with_label("NEW"),
                DisplayRequest::new(Side::BottomRight, star())
                    .with_label("SALE")
                    .with_color("bg-blue-600"),
                DisplayRequest::new(Placement::parse("up"), star()),
            ],
        }
    }
}
