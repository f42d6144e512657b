//! Bounded per-prefix history and the explicitly owned history store.

use std::collections::{BTreeMap, VecDeque};

use prefixwatch_types::{HistoryPoint, Prefix, StatsSnapshot, TickStamp};

/// A FIFO sliding window of `(stamp, stats)` points for one prefix.
///
/// Capacity-limited and timestamp-deduplicating: an append whose stamp
/// equals the most recent stored stamp is a silent no-op, which makes
/// re-ticking without new data safe to call arbitrarily often. Eviction is
/// strictly oldest-first; recency is the only ordering criterion.
#[derive(Debug, Clone)]
pub struct BoundedHistory {
    max_points: usize,
    points: VecDeque<HistoryPoint>,
}

impl BoundedHistory {
    /// Create an empty history with the given capacity.
    #[must_use]
    pub fn new(max_points: usize) -> Self {
        Self {
            max_points,
            points: VecDeque::with_capacity(max_points),
        }
    }

    /// Append a point, unless `stamp` equals the latest stored stamp.
    ///
    /// Returns `true` when the point was committed. After a commit the
    /// oldest points are evicted until the length is back within capacity.
    pub fn append(&mut self, stamp: TickStamp, stats: StatsSnapshot) -> bool {
        if self.latest().is_some_and(|p| p.stamp == stamp) {
            return false;
        }
        self.points.push_back(HistoryPoint { stamp, stats });
        while self.points.len() > self.max_points {
            self.points.pop_front();
        }
        true
    }

    /// The most recently committed point.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryPoint> {
        self.points.back()
    }

    /// Stored points, oldest to newest. Shorter than `max_points` until
    /// enough ticks have elapsed.
    pub fn window(&self) -> impl Iterator<Item = &HistoryPoint> {
        self.points.iter()
    }

    /// Number of stored points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Configured capacity.
    #[must_use]
    pub const fn max_points(&self) -> usize {
        self.max_points
    }
}

/// Owned table of per-prefix histories, constructed once from configuration.
///
/// One history per configured prefix for the process lifetime; the tick
/// commit step is the single writer. There is no cross-prefix invariant —
/// renderers needing a common time axis align on stamps via
/// [`HistoryStore::aligned_window`], never on index position.
#[derive(Debug)]
pub struct HistoryStore {
    histories: BTreeMap<Prefix, BoundedHistory>,
}

impl HistoryStore {
    /// Create one empty history per prefix, each with capacity `max_points`.
    pub fn new<I>(prefixes: I, max_points: usize) -> Self
    where
        I: IntoIterator<Item = Prefix>,
    {
        Self {
            histories: prefixes
                .into_iter()
                .map(|p| (p, BoundedHistory::new(max_points)))
                .collect(),
        }
    }

    /// Commit a classification result for `prefix` under `stamp`.
    ///
    /// Returns `true` when a point was actually committed; `false` for a
    /// duplicate-stamp no-op or an unconfigured prefix.
    pub fn append(&mut self, prefix: &Prefix, stamp: TickStamp, stats: StatsSnapshot) -> bool {
        self.histories
            .get_mut(prefix)
            .is_some_and(|h| h.append(stamp, stats))
    }

    /// The history for `prefix`, if configured.
    #[must_use]
    pub fn history(&self, prefix: &Prefix) -> Option<&BoundedHistory> {
        self.histories.get(prefix)
    }

    /// Stored points for `prefix`, oldest to newest. Empty for unknown
    /// prefixes.
    pub fn window(&self, prefix: &Prefix) -> impl Iterator<Item = &HistoryPoint> {
        self.histories.get(prefix).into_iter().flat_map(BoundedHistory::window)
    }

    /// The latest point for `prefix`, if any.
    #[must_use]
    pub fn latest(&self, prefix: &Prefix) -> Option<&HistoryPoint> {
        self.histories.get(prefix).and_then(BoundedHistory::latest)
    }

    /// Number of stored points for `prefix`. Zero for unknown prefixes.
    #[must_use]
    pub fn len(&self, prefix: &Prefix) -> usize {
        self.histories.get(prefix).map_or(0, BoundedHistory::len)
    }

    /// Configured prefixes in store order.
    pub fn prefixes(&self) -> impl Iterator<Item = &Prefix> {
        self.histories.keys()
    }

    /// Union the stamps of the requested prefixes and report, per stamp in
    /// chronological order, the stats of every prefix holding a point there.
    ///
    /// Prefixes that missed a tick simply have no entry at that stamp, so a
    /// renderer sees explicit gaps instead of silently shifted series.
    #[must_use]
    pub fn aligned_window<'a>(
        &'a self,
        prefixes: &'a [Prefix],
    ) -> Vec<(TickStamp, BTreeMap<&'a Prefix, &'a StatsSnapshot>)> {
        let mut by_stamp: BTreeMap<TickStamp, BTreeMap<&Prefix, &StatsSnapshot>> = BTreeMap::new();
        for prefix in prefixes {
            let Some(history) = self.histories.get(prefix) else {
                continue;
            };
            for point in history.window() {
                by_stamp
                    .entry(point.stamp)
                    .or_default()
                    .insert(prefix, &point.stats);
            }
        }
        by_stamp.into_iter().collect()
    }
}
