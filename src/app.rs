use yew::prelude::*;

use crate::components::Overlay;
use crate::config::OverlayConfig;

#[function_component(App)]
pub fn app() -> Html {
    let badges = use_memo((), |_| OverlayConfig::demo().badges);

    html! {
        <div class="relative h-screen w-screen bg-slate-900">
            <Overlay badges={(*badges).clone()} />
            <span class="status-text absolute inset-0 flex items-center justify-center text-slate-400">
                {"Hover a badge"}
            </span>
        </div>
    }
}
