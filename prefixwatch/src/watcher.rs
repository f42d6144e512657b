use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use prefixwatch_core::{classify, HistoryStore, SnapshotFetcher, WatchError};
use prefixwatch_types::{HistoryPoint, Prefix, StatsSnapshot, TickStamp, WatchConfig};

/// Outcome of one tick: per prefix, either the committed stats or the error
/// that kept that prefix's history unchanged.
#[derive(Debug)]
pub struct TickReport {
    /// Stamp the tick's successes were committed under.
    pub stamp: TickStamp,
    /// Per-prefix outcome, in configuration order of the prefix keys.
    pub results: BTreeMap<Prefix, Result<StatsSnapshot, WatchError>>,
}

impl TickReport {
    /// Successfully classified prefixes and their stats.
    pub fn successes(&self) -> impl Iterator<Item = (&Prefix, &StatsSnapshot)> {
        self.results
            .iter()
            .filter_map(|(p, r)| r.as_ref().ok().map(|s| (p, s)))
    }

    /// Prefixes whose fetch failed this tick, with the error.
    pub fn failures(&self) -> impl Iterator<Item = (&Prefix, &WatchError)> {
        self.results
            .iter()
            .filter_map(|(p, r)| r.as_ref().err().map(|e| (p, e)))
    }

    /// Whether every configured prefix produced stats this tick.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.results.values().all(Result::is_ok)
    }
}

/// Orchestrator owning the per-prefix histories and driving ticks.
///
/// `tick` takes `&mut self`, so commits are serialized by construction:
/// there is no way to start a second tick while one is committing.
pub struct Watcher {
    pub(crate) fetcher: Arc<dyn SnapshotFetcher>,
    pub(crate) config: WatchConfig,
    pub(crate) store: HistoryStore,
    pub(crate) ticks_completed: u64,
}

/// Builder for constructing a [`Watcher`] with validated configuration.
pub struct WatcherBuilder {
    fetcher: Option<Arc<dyn SnapshotFetcher>>,
    config: WatchConfig,
}

impl Default for WatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WatcherBuilder {
    /// Create a builder with an empty configuration and no fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fetcher: None,
            config: WatchConfig::default(),
        }
    }

    /// Set the snapshot fetcher. Required.
    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Arc<dyn SnapshotFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn with_config(mut self, config: WatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the per-prefix history capacity.
    #[must_use]
    pub const fn max_points(mut self, max_points: usize) -> Self {
        self.config.max_points = max_points;
        self
    }

    /// Override the tick cadence used by the scheduler loop.
    #[must_use]
    pub const fn poll_interval(mut self, interval: std::time::Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// Override the per-prefix fetch deadline within a tick.
    #[must_use]
    pub const fn fetch_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.fetch_timeout = timeout;
        self
    }

    /// Validate the configuration and build the `Watcher`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when no fetcher is set, the prefix set is
    /// empty or contains duplicates, no origins of interest are configured,
    /// or `max_points` is zero.
    pub fn build(self) -> Result<Watcher, WatchError> {
        let fetcher = self.fetcher.ok_or_else(|| {
            WatchError::invalid_config("no fetcher set; add one via with_fetcher(...)")
        })?;
        if self.config.prefixes.is_empty() {
            return Err(WatchError::invalid_config("no prefixes configured"));
        }
        if self.config.origins_of_interest.is_empty() {
            return Err(WatchError::invalid_config("no origins of interest configured"));
        }
        if self.config.max_points == 0 {
            return Err(WatchError::invalid_config("max_points must be at least 1"));
        }
        let mut seen: BTreeSet<&Prefix> = BTreeSet::new();
        for pc in &self.config.prefixes {
            if !seen.insert(&pc.prefix) {
                return Err(WatchError::invalid_config(format!(
                    "duplicate prefix: {}",
                    pc.prefix
                )));
            }
        }

        let store = HistoryStore::new(
            self.config.prefixes.iter().map(|pc| pc.prefix.clone()),
            self.config.max_points,
        );
        Ok(Watcher {
            fetcher,
            config: self.config,
            store,
            ticks_completed: 0,
        })
    }
}

impl Watcher {
    /// Start building a new `Watcher`.
    #[must_use]
    pub fn builder() -> WatcherBuilder {
        WatcherBuilder::new()
    }

    /// Run one tick under the current minute's stamp.
    pub async fn tick(&mut self) -> TickReport {
        self.tick_at(TickStamp::now()).await
    }

    /// Run one tick, committing successes under `stamp`.
    ///
    /// All prefix fetches are issued concurrently, each bounded by the
    /// configured fetch deadline; an overrun counts as a failure for that
    /// prefix only. Failed prefixes keep their history unchanged and the
    /// tick never aborts early. A success whose stamp duplicates the
    /// prefix's latest point classifies normally but commits nothing.
    pub async fn tick_at(&mut self, stamp: TickStamp) -> TickReport {
        let fetch_timeout = self.config.fetch_timeout;
        let origins = &self.config.origins_of_interest;
        let fetcher = &self.fetcher;

        let tasks = self.config.prefixes.iter().map(|prefix_cfg| async move {
            let prefix = prefix_cfg.prefix.clone();
            let outcome =
                match tokio::time::timeout(fetch_timeout, fetcher.fetch_routes(&prefix)).await {
                    Ok(Ok(snapshot)) => Ok(classify(&snapshot, prefix_cfg, origins)),
                    Ok(Err(e)) => Err(e),
                    Err(_elapsed) => Err(WatchError::fetch_timeout(&prefix)),
                };
            (prefix, outcome)
        });
        let outcomes = futures::future::join_all(tasks).await;

        let mut results = BTreeMap::new();
        for (prefix, outcome) in outcomes {
            match &outcome {
                Ok(stats) => {
                    let committed = self.store.append(&prefix, stamp, stats.clone());
                    tracing::debug!(
                        prefix = %prefix,
                        total_paths = stats.total_paths,
                        committed,
                        "classified snapshot"
                    );
                }
                Err(e) => {
                    tracing::warn!(prefix = %prefix, error = %e, "tick skipped prefix");
                }
            }
            results.insert(prefix, outcome);
        }

        self.ticks_completed += 1;
        let report = TickReport { stamp, results };
        tracing::info!(
            stamp = %report.stamp,
            ok = report.successes().count(),
            failed = report.failures().count(),
            tick = self.ticks_completed,
            "tick complete"
        );
        report
    }

    /// Stored points for `prefix`, oldest to newest.
    pub fn window(&self, prefix: &Prefix) -> impl Iterator<Item = &HistoryPoint> {
        self.store.window(prefix)
    }

    /// The latest committed point for `prefix`, if any.
    #[must_use]
    pub fn latest(&self, prefix: &Prefix) -> Option<&HistoryPoint> {
        self.store.latest(prefix)
    }

    /// Read access to the history store for renderers.
    #[must_use]
    pub const fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Number of ticks completed since construction.
    #[must_use]
    pub const fn ticks_completed(&self) -> u64 {
        self.ticks_completed
    }
}
