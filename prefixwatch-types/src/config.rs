//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Asn, PrefixConfig};

/// Default history capacity per prefix.
pub const DEFAULT_MAX_POINTS: usize = 15;
/// Default tick cadence.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(120);
/// Default per-prefix fetch timeout within a tick.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Static configuration for a watch session, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Ordered set of monitored prefixes with their per-prefix settings.
    pub prefixes: Vec<PrefixConfig>,
    /// Distinguished origin ASNs tracked individually; all other origins
    /// fold into the catch-all counter.
    pub origins_of_interest: Vec<Asn>,
    /// History capacity per prefix.
    #[serde(default = "default_max_points")]
    pub max_points: usize,
    /// Tick cadence for the scheduler loop.
    #[serde(default = "default_poll_interval")]
    pub poll_interval: Duration,
    /// Per-prefix fetch deadline; an overrun counts as a fetch failure for
    /// that prefix on that tick.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: Duration,
}

const fn default_max_points() -> usize {
    DEFAULT_MAX_POINTS
}

const fn default_poll_interval() -> Duration {
    DEFAULT_POLL_INTERVAL
}

const fn default_fetch_timeout() -> Duration {
    DEFAULT_FETCH_TIMEOUT
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            prefixes: vec![],
            origins_of_interest: vec![],
            max_points: DEFAULT_MAX_POINTS,
            poll_interval: DEFAULT_POLL_INTERVAL,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}
