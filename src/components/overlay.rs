use yew::prelude::*;

use crate::request::DisplayRequest;

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    #[prop_or_default]
    pub badges: Vec<DisplayRequest>,
}

/// Positioned ancestor for a set of configured badges.
#[function_component(Overlay)]
pub fn overlay(props: &OverlayProps) -> Html {
    html! {
        <div class="overlay relative h-full w-full">
            { for props.badges.iter().map(DisplayRequest::render) }
        </div>
    }
}
