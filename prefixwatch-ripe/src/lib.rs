//! prefixwatch-ripe
//!
//! Production `SnapshotFetcher` backed by the RIPEstat looking-glass API.
//! One GET per prefix per tick; the response document's `data` envelope
//! deserializes directly into the core `RawSnapshot` shape. Transport, HTTP
//! status, and body failures all normalize into `WatchError` variants so the
//! orchestrator can isolate them per prefix.
#![warn(missing_docs)]

mod builder;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use prefixwatch_core::{Prefix, RawSnapshot, SnapshotFetcher, WatchError};

pub use builder::{DEFAULT_BASE_URL, RipeStatBuilder};

/// Snapshot fetcher for the RIPEstat looking-glass endpoint.
#[derive(Debug)]
pub struct RipeStatConnector {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: Url,
}

/// Envelope of the looking-glass response; everything of interest lives
/// under `data`.
#[derive(Debug, Deserialize)]
struct LookingGlassDocument {
    #[serde(default)]
    data: RawSnapshot,
}

impl RipeStatConnector {
    /// Start building a connector against the public RIPEstat endpoint.
    #[must_use]
    pub fn builder() -> RipeStatBuilder {
        RipeStatBuilder::new()
    }
}

#[async_trait]
impl SnapshotFetcher for RipeStatConnector {
    fn name(&self) -> &'static str {
        "prefixwatch-ripe"
    }

    fn vendor(&self) -> &'static str {
        "RIPE NCC"
    }

    async fn fetch_routes(&self, prefix: &Prefix) -> Result<RawSnapshot, WatchError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(prefix = %prefix, url = %self.base_url, "fetching looking-glass snapshot");

        let resp = self
            .client
            .get(self.base_url.clone())
            .query(&[("resource", prefix.as_str())])
            .send()
            .await
            .map_err(|e| WatchError::fetch(prefix, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WatchError::fetch(
                prefix,
                format!("unexpected status {status}"),
            ));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| WatchError::fetch(prefix, e.to_string()))?;
        let doc: LookingGlassDocument = serde_json::from_str(&body)
            .map_err(|e| WatchError::decode(prefix, e.to_string()))?;
        Ok(doc.data)
    }
}
