use floating_badge_ui::{app::App, config::OverlayConfig, logging::setup_logging};

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = setup_logging(&OverlayConfig::demo().developer) {
        web_sys::console::error_1(&e.to_string().into());
    }

    yew::Renderer::<App>::new().render();
}
