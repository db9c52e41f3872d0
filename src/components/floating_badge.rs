use yew::prelude::*;

use crate::layout::BadgeLayout;
use crate::side::Placement;

#[derive(Properties, PartialEq)]
pub struct FloatingBadgeProps {
    /// Accepts a [`crate::Side`], a [`Placement`] or a raw side name.
    pub side: Placement,
    pub children: Children,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Background token for the label pill.
    #[prop_or_default]
    pub color: Option<AttrValue>,
}

/// Absolutely positioned badge that pulses and grows on hover, with an
/// optional label pill under its content.
///
/// The badge attaches no handlers of its own; wrap it or its children to make
/// it clickable.
#[function_component(FloatingBadge)]
pub fn floating_badge(props: &FloatingBadgeProps) -> Html {
    let layout = BadgeLayout::resolve(
        props.side,
        props.label.as_deref(),
        props.color.as_deref(),
    );

    let pill = layout.pill.as_ref().map(|pill| {
        html! {
            <span class={classes!(pill.classes())}>{ pill.text.clone() }</span>
        }
    });

    html! {
        <div class={classes!(layout.container.clone())} data-side={layout.side_name()}>
            { for props.children.iter() }
            { for pill }
        </div>
    }
}
