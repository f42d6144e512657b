//! prefixwatch-core
//!
//! Core types, traits, and algorithms shared across the prefixwatch ecosystem.
//!
//! - `error`: the unified `WatchError` type.
//! - `fetcher`: the `SnapshotFetcher` trait and the raw looking-glass record
//!   shapes it produces.
//! - `classify`: the pure AS-path classifier turning a raw snapshot into a
//!   `StatsSnapshot`.
//! - `history`: the bounded, timestamp-deduplicating per-prefix history and
//!   the explicitly owned `HistoryStore`.
//!
//! Nothing in this crate performs I/O or blocks; connectors live in sibling
//! crates (`prefixwatch-ripe` for production, `prefixwatch-mock` for tests)
//! and the tick/scheduling machinery lives in `prefixwatch`.
#![warn(missing_docs)]

mod error;

/// AS-path classification of raw snapshots.
pub mod classify;
/// The `SnapshotFetcher` trait and raw record shapes.
pub mod fetcher;
/// Bounded per-prefix history and the owned history store.
pub mod history;

pub use classify::classify;
pub use error::WatchError;
pub use fetcher::{CollectorEntry, PeerRecord, RawSnapshot, SnapshotFetcher};
pub use history::{BoundedHistory, HistoryStore};

pub use prefixwatch_types::{
    Asn, AsnParseError, HistoryPoint, Prefix, PrefixConfig, StatsSnapshot, TickStamp, WatchConfig,
};
