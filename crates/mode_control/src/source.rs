//! Where the authoritative mode comes from.

use std::future::{self, Future};
use std::pin::Pin;

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::config::ModeControlConfig;
use crate::error::ModeError;
use crate::mode::ModeResponse;

/// Pending answer from a [`ModeSource`].
///
/// Not `Send`: in the browser it runs on the page's event loop.
pub type ModeFuture = Pin<Box<dyn Future<Output = Result<ModeResponse, ModeError>>>>;

/// A read-only source of the current mode.
///
/// Each call to [`fetch_current_mode`](ModeSource::fetch_current_mode) is one
/// outbound request. The returned future owns everything it needs, so it can
/// outlive the source.
pub trait ModeSource {
    fn fetch_current_mode(&self) -> ModeFuture;
}

/// A source that could not be built fails every fetch with the build error.
impl<S: ModeSource> ModeSource for Result<S, ModeError> {
    fn fetch_current_mode(&self) -> ModeFuture {
        match self {
            Ok(source) => source.fetch_current_mode(),
            Err(err) => Box::pin(future::ready(Err(err.clone()))),
        }
    }
}

/// Fetches the mode with a plain `GET` and decodes the JSON body.
#[derive(Clone, Debug)]
pub struct HttpModeSource {
    client: Client,
    url: Url,
}

impl HttpModeSource {
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    /// Build a source for the configured endpoint.
    pub fn from_config(config: &ModeControlConfig) -> Result<Self, ModeError> {
        let url = resolve_endpoint(&config.endpoint, config.base_url.as_deref())?;
        Ok(Self::new(url))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl ModeSource for HttpModeSource {
    fn fetch_current_mode(&self) -> ModeFuture {
        let request = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json");

        Box::pin(async move {
            let response = request.send().await?.error_for_status()?;
            Ok(response.json::<ModeResponse>().await?)
        })
    }
}

/// Turn a configured endpoint into an absolute URL.
///
/// Absolute endpoints are used as-is. Relative ones are joined onto
/// `base_url`, or onto the page origin when running in a browser.
pub fn resolve_endpoint(endpoint: &str, base_url: Option<&str>) -> Result<Url, ModeError> {
    let invalid = |error: String| ModeError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        error,
    };

    match Url::parse(endpoint) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = base_url
                .map(str::to_string)
                .or_else(page_origin)
                .ok_or_else(|| invalid("relative endpoint and no base URL".to_string()))?;
            let base = Url::parse(&base).map_err(|e| invalid(format!("bad base URL '{base}': {e}")))?;
            base.join(endpoint).map_err(|e| invalid(e.to_string()))
        }
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
