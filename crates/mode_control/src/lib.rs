//! # Mode Control
//!
//! A "Virtualize" button that keeps track of the proxy's current mode.
//!
//! When the button is mounted it shows the default mode (`virtualize`) and
//! asks the proxy's `/state` resource for the real one. The answer is applied
//! only if the button is still mounted when it arrives; once the button is
//! gone, late answers are dropped without touching any state.
//!
//! The lifecycle lives in [`ModeControl`], which knows nothing about any UI
//! framework: a host mounts it with [`ModeControl::activate`], removes it
//! with [`ModeControl::deactivate`], and gets a
//! [`DisplayHost::request_rerender`] call when the mode changes.
//! [`ModeButton`] is the Leptos host.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use mode_control::{FailurePolicy, ModeButton, ModeControlConfig};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     // Optional: the defaults fetch `/state` from the page origin.
//!     provide_context(
//!         ModeControlConfig::builder()
//!             .failure_policy(FailurePolicy::KeepDefault)
//!             .build(),
//!     );
//!
//!     view! { <ModeButton /> }
//! }
//! ```
//!
//! ## Without Leptos
//!
//! ```rust,ignore
//! use mode_control::{HttpModeSource, Mode, ModeControl};
//!
//! let control = ModeControl::new(|mode: &Mode| redraw(mode));
//! let fetch = control.activate(&HttpModeSource::new(url));
//! spawn(fetch);
//! // ... later, when the button goes away:
//! control.deactivate();
//! ```

mod components;
mod config;
mod control;
mod error;
mod hooks;
mod host;
mod liveness;
mod mode;
mod source;
mod view;

pub use components::ModeButton;
pub use config::{DEFAULT_ENDPOINT, FailurePolicy, ModeControlConfig, ModeControlConfigBuilder};
pub use control::{FetchOutcome, Lifecycle, ModeControl};
pub use error::ModeError;
pub use hooks::use_current_mode;
pub use host::DisplayHost;
pub use liveness::ActivationToken;
pub use mode::{Mode, ModeResponse};
pub use source::{HttpModeSource, ModeFuture, ModeSource, resolve_endpoint};
pub use view::{BUTTON_CLASS, BUTTON_LABEL, ButtonView, render};
