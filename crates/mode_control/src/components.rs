use leptos::prelude::*;

use crate::hooks::use_current_mode;
use crate::view;

/// The "Virtualize" button.
///
/// Takes no props. On mount it asks the proxy for its current mode (see
/// [`use_current_mode`]) and tracks the answer in a `data-mode` attribute;
/// the visible label stays "Virtualize" whatever the mode.
///
/// ```rust,ignore
/// use leptos::prelude::*;
/// use mode_control::ModeButton;
///
/// leptos::mount::mount_to_body(|| view! { <ModeButton /> });
/// ```
#[component]
pub fn ModeButton() -> impl IntoView {
    let mode = use_current_mode();
    let button = Memo::new(move |_| view::render(&mode.get()));

    view! {
        <button
            class=move || button.get().class
            data-mode=move || mode.get().to_string()
        >
            {move || button.get().label}
        </button>
    }
}
