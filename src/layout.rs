//! Pure resolution of badge inputs into the classes and elements to render.

use crate::side::Placement;
use crate::style::{DEFAULT_ACCENT, EFFECT_RULES, PILL_RULES, SHARED_RULES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillLayout {
    pub text: String,
    pub background: String,
}

impl PillLayout {
    pub fn classes(&self) -> Vec<String> {
        PILL_RULES
            .iter()
            .map(|rule| rule.to_string())
            .chain(std::iter::once(self.background.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeLayout {
    pub placement: Placement,
    pub container: Vec<&'static str>,
    pub pill: Option<PillLayout>,
}

impl BadgeLayout {
    pub fn resolve(placement: Placement, label: Option<&str>, color: Option<&str>) -> Self {
        let background = color.unwrap_or(DEFAULT_ACCENT);

        let container = SHARED_RULES
            .iter()
            .chain(placement.position_rules())
            .chain(EFFECT_RULES)
            .copied()
            .collect();

        // An empty label renders like a missing one.
        let pill = label.filter(|text| !text.is_empty()).map(|text| PillLayout {
            text: text.to_string(),
            background: background.to_string(),
        });

        Self {
            placement,
            container,
            pill,
        }
    }

    /// Value for the container's `data-side` attribute.
    pub fn side_name(&self) -> Option<&'static str> {
        self.placement.side().map(|side| side.as_str())
    }
}
