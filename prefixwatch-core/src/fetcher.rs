//! The snapshot-fetcher seam and the raw record shapes it produces.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::WatchError;
use prefixwatch_types::Prefix;

/// One observed route for a prefix as reported by a collector peer.
///
/// Fields are optional on the wire: looking-glass documents occasionally
/// omit them, and a missing field must not abort deserialization of the
/// surrounding snapshot. The classifier decides per record whether it is
/// usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerRecord {
    /// ASN that originated the route, in bare decimal string form.
    #[serde(default)]
    pub asn_origin: Option<String>,
    /// Whitespace-delimited AS path, collector first, origin last. May
    /// contain consecutive repeats from path prepending.
    #[serde(default)]
    pub as_path: Option<String>,
}

impl PeerRecord {
    /// Convenience constructor for fixtures and tests.
    pub fn new(asn_origin: impl Into<String>, as_path: impl Into<String>) -> Self {
        Self {
            asn_origin: Some(asn_origin.into()),
            as_path: Some(as_path.into()),
        }
    }
}

/// One route collector's view of a prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorEntry {
    /// Collector identifier (e.g. `"RRC00"`).
    #[serde(default)]
    pub rrc: String,
    /// Collector location string, carried for display only.
    #[serde(default)]
    pub location: String,
    /// Peer observations reported by this collector.
    #[serde(default)]
    pub peers: Vec<PeerRecord>,
}

/// A raw routing snapshot for one prefix: the collection of collector views.
///
/// An empty collector list is a valid snapshot and classifies to an all-zero
/// `StatsSnapshot`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSnapshot {
    /// Collector entries, each with its own peer list.
    #[serde(default)]
    pub rrcs: Vec<CollectorEntry>,
}

impl RawSnapshot {
    /// Total number of peer records across all collectors, usable or not.
    #[must_use]
    pub fn peer_count(&self) -> usize {
        self.rrcs.iter().map(|c| c.peers.len()).sum()
    }
}

/// Connector trait implemented by snapshot providers.
///
/// Implementations perform the only blocking I/O in the system; the caller
/// bounds each call with its own deadline and treats an overrun as a fetch
/// failure for that prefix on that tick.
#[async_trait]
pub trait SnapshotFetcher: Send + Sync {
    /// A stable identifier for logs and error tagging
    /// (e.g. "prefixwatch-ripe", "prefixwatch-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch the current routing snapshot for `prefix`.
    async fn fetch_routes(&self, prefix: &Prefix) -> Result<RawSnapshot, WatchError>;
}
