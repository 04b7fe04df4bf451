//! Admin page client for the mode button.
//!
//! Mounts `ModeButton` into the page's `#app` element, or into `<body>` when
//! the page has no such element. The button fetches `/state` from the origin
//! that served the page.
//!
//! Build and serve with:
//!   cd apps/mode_client
//!   trunk serve --open

use leptos::prelude::*;
use mode_control::ModeButton;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let target = document()
        .get_element_by_id("app")
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());

    match target {
        Some(target) => leptos::mount::mount_to(target, App).forget(),
        None => {
            log::warn!("no #app element on the page, mounting to <body>");
            leptos::mount::mount_to_body(App);
        }
    }
}

#[component]
fn App() -> impl IntoView {
    view! { <ModeButton /> }
}
