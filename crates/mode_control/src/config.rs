/// Path of the proxy's "current mode" resource.
pub const DEFAULT_ENDPOINT: &str = "/state";

/// What to do when fetching the current mode fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Hand the error back to the runtime driving the fetch.
    ///
    /// In the browser this surfaces as an uncaught exception.
    #[default]
    Propagate,
    /// Log the error and keep showing the default mode.
    KeepDefault,
}

/// Configuration for a [`ModeButton`](crate::ModeButton).
///
/// The button itself takes no props. Provide one of these through Leptos
/// context to override the defaults:
///
/// ```rust,ignore
/// use leptos::prelude::*;
/// use mode_control::{FailurePolicy, ModeButton, ModeControlConfig};
///
/// #[component]
/// fn Toolbar() -> impl IntoView {
///     provide_context(
///         ModeControlConfig::builder()
///             .base_url("http://localhost:8888")
///             .failure_policy(FailurePolicy::KeepDefault)
///             .build(),
///     );
///
///     view! { <ModeButton /> }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeControlConfig {
    /// Endpoint to `GET`. Relative paths are resolved against `base_url`.
    pub endpoint: String,
    /// Base URL for relative endpoints. In the browser this falls back to
    /// the page origin when unset.
    pub base_url: Option<String>,
    pub failure_policy: FailurePolicy,
}

impl ModeControlConfig {
    pub fn builder() -> ModeControlConfigBuilder {
        ModeControlConfigBuilder::new()
    }
}

impl Default for ModeControlConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            base_url: None,
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Builder for [`ModeControlConfig`].
#[derive(Clone, Debug, Default)]
pub struct ModeControlConfigBuilder {
    config: ModeControlConfig,
}

impl ModeControlConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    pub fn build(self) -> ModeControlConfig {
        self.config
    }
}
