use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ModeControlConfig;
use crate::control::ModeControl;
use crate::error::ModeError;
use crate::host::DisplayHost;
use crate::mode::Mode;
use crate::source::HttpModeSource;

/// Re-renders by writing the new mode into a signal.
#[derive(Clone, Copy)]
struct SignalHost {
    mode: RwSignal<Mode>,
}

impl DisplayHost for SignalHost {
    fn request_rerender(&self, mode: &Mode) {
        if self.mode.try_set(mode.clone()).is_some() {
            log::debug!("[use_current_mode] mode signal already disposed, skipping re-render");
        }
    }
}

/// Hook tracking the proxy's current mode.
///
/// Returns a signal holding the default mode right away. The first time the
/// calling component is mounted a `GET` is sent to the configured endpoint and
/// the signal is updated with the answer, unless the component was unmounted
/// in the meantime.
///
/// Configuration is read from a [`ModeControlConfig`] in context, falling back
/// to the defaults. With [`FailurePolicy::Propagate`](crate::FailurePolicy)
/// a failed fetch is thrown into the JavaScript runtime as an uncaught error.
///
/// # Example
///
/// ```rust,ignore
/// use leptos::prelude::*;
/// use mode_control::use_current_mode;
///
/// #[component]
/// fn ModeBadge() -> impl IntoView {
///     let mode = use_current_mode();
///
///     view! { <span class="badge">{move || mode.get().to_string()}</span> }
/// }
/// ```
pub fn use_current_mode() -> ReadSignal<Mode> {
    mount_mode_control().0
}

/// Activate a control bound to a fresh signal and tie its deactivation to the
/// current owner.
fn mount_mode_control() -> (ReadSignal<Mode>, ModeControl<SignalHost>) {
    let config = use_context::<ModeControlConfig>().unwrap_or_default();
    let mode = RwSignal::new(Mode::default());
    let control = ModeControl::with_policy(SignalHost { mode }, config.failure_policy);

    let fetch = control.activate(&HttpModeSource::from_config(&config));
    spawn_local(async move {
        if let Err(err) = fetch.await {
            raise(err);
        }
    });

    on_cleanup({
        let control = control.clone();
        move || control.deactivate()
    });

    (mode.read_only(), control)
}

fn raise(err: ModeError) -> ! {
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen::throw_str(&err.to_string());

    #[cfg(not(target_arch = "wasm32"))]
    panic!("{err}");
}
