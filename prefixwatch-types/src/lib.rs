//! Prefixwatch-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod asn;
mod config;
mod prefix;
mod stats;

pub use asn::{Asn, AsnParseError};
pub use config::{WatchConfig, DEFAULT_FETCH_TIMEOUT, DEFAULT_MAX_POINTS, DEFAULT_POLL_INTERVAL};
pub use prefix::{Prefix, PrefixConfig};
pub use stats::{HistoryPoint, StatsSnapshot, TickStamp};
