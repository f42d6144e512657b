//! prefixwatch
//!
//! High-level orchestration for BGP prefix monitoring. A [`Watcher`] drives
//! one classification-and-commit cycle (a *tick*) across all configured
//! prefixes: it requests a routing snapshot per prefix from a pluggable
//! [`SnapshotFetcher`](prefixwatch_core::SnapshotFetcher), classifies each
//! snapshot by origin and adjacent upstream AS, and commits the result into
//! that prefix's bounded history. Per-prefix failures are isolated — a tick
//! always completes for every prefix it can reach and reports partial
//! results through a [`TickReport`].
//!
//! The scheduler loop ([`Watcher::run`]) repeats ticks on a fixed cadence
//! under a Tokio runtime and hands each result to a [`Renderer`]. Because a
//! duplicate tick stamp commits nothing, re-ticking without new data is safe
//! to trigger arbitrarily often.
#![warn(missing_docs)]

mod render;
mod scheduler;
mod watcher;

pub use render::{Renderer, StatusLine, TextRenderer};
pub use watcher::{TickReport, Watcher, WatcherBuilder};

pub use prefixwatch_core::{
    Asn, HistoryPoint, HistoryStore, Prefix, PrefixConfig, SnapshotFetcher, StatsSnapshot,
    TickStamp, WatchConfig, WatchError,
};
