//! Serializable badge descriptions, for badges that come from configuration
//! or from JavaScript rather than from `html!`.

use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::components::FloatingBadge;
use crate::side::Placement;

/// Stand-in for a badge's children when the badge is described as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BadgeContent {
    Text {
        text: String,
    },
    Image {
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
}

impl BadgeContent {
    pub fn render(&self) -> Html {
        match self {
            BadgeContent::Text { text } => html! {
                <span class="text-2xl leading-none">{ text.clone() }</span>
            },
            BadgeContent::Image { src, alt } => html! {
                <img
                    class="h-10 w-10 rounded-full object-cover"
                    src={src.clone()}
                    alt={alt.clone().unwrap_or_default()}
                />
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRequest {
    pub side: Placement,
    pub content: BadgeContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DisplayRequest {
    pub fn new(side: impl Into<Placement>, content: BadgeContent) -> Self {
        Self {
            side: side.into(),
            content,
            label: None,
            color: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn render(&self) -> Html {
        html! {
            <FloatingBadge
                side={self.side}
                label={self.label.clone().map(AttrValue::from)}
                color={self.color.clone().map(AttrValue::from)}
            >
                { self.content.render() }
            </FloatingBadge>
        }
    }
}
