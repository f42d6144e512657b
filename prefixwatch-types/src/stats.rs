//! Classification results and history points.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::Asn;

/// Minute-granularity tick label used as the history dedup key.
///
/// Stamps are comparison keys, not physical time: two ticks landing in the
/// same wall-clock minute carry the same stamp and collapse to one history
/// point. Ordering follows chronology.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TickStamp(DateTime<Utc>);

impl TickStamp {
    /// Build a stamp from an instant, truncating to the minute.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let truncated = dt
            .with_second(0)
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(dt);
        Self(truncated)
    }

    /// The current minute.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// The underlying UTC instant (seconds and below are zero).
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for TickStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

/// Classification result for one prefix at one tick.
///
/// The counter domains are fixed when the snapshot is created: one origin
/// counter per configured origin of interest (plus `other_origins`), and one
/// upstream counter per ASN in the prefix's valid-upstream set. Counters for
/// categories that never matched stay present at zero, so renderers see a
/// stable category set across the whole history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Number of peer observations counted.
    pub total_paths: u64,
    /// Per-origin counters for the configured origins of interest.
    pub origins: BTreeMap<Asn, u64>,
    /// Observations whose origin matched none of the origins of interest.
    pub other_origins: u64,
    /// Per-upstream counters, keyed by the prefix's valid upstreams.
    pub upstreams: BTreeMap<Asn, u64>,
}

impl StatsSnapshot {
    /// An all-zero snapshot with the given counter domains.
    pub fn zeroed<O, U>(origins: O, upstreams: U) -> Self
    where
        O: IntoIterator<Item = Asn>,
        U: IntoIterator<Item = Asn>,
    {
        Self {
            total_paths: 0,
            origins: origins.into_iter().map(|a| (a, 0)).collect(),
            other_origins: 0,
            upstreams: upstreams.into_iter().map(|a| (a, 0)).collect(),
        }
    }

    /// Sum of all origin counters including the catch-all.
    ///
    /// Always equals `total_paths` for snapshots produced by the classifier.
    #[must_use]
    pub fn origin_sum(&self) -> u64 {
        self.origins.values().sum::<u64>() + self.other_origins
    }

    /// Sum of the upstream counters. At most `total_paths`.
    #[must_use]
    pub fn upstream_sum(&self) -> u64 {
        self.upstreams.values().sum()
    }
}

/// One stored `(stamp, stats)` pair in a prefix's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Minute label under which the stats were committed.
    pub stamp: TickStamp,
    /// The classification result.
    pub stats: StatsSnapshot,
}
