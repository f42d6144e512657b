use std::time::Duration;

use prefixwatch_core::WatchError;
use url::Url;

use crate::RipeStatConnector;

/// Default RIPEstat looking-glass endpoint.
pub const DEFAULT_BASE_URL: &str = "https://stat.ripe.net/data/looking-glass/data.json";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`RipeStatConnector`].
///
/// The orchestrator applies its own per-tick fetch deadline; the timeout
/// here is a transport-level backstop for use outside the watcher.
pub struct RipeStatBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for RipeStatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RipeStatBuilder {
    /// Start from the public RIPEstat endpoint with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("prefixwatch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Override the endpoint URL. Intended for tests against a local server.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the transport-level request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header sent to the endpoint.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when the base URL does not parse or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<RipeStatConnector, WatchError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| WatchError::invalid_config(format!("bad base url: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| WatchError::invalid_config(format!("http client: {e}")))?;
        Ok(RipeStatConnector { client, base_url })
    }
}
