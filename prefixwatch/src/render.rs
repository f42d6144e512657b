use std::time::Duration;

use prefixwatch_core::HistoryStore;
use prefixwatch_types::TickStamp;

use crate::TickReport;

/// Status fields accompanying every render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    /// Stamp of the most recent tick.
    pub last_updated: TickStamp,
    /// Ticks completed since the watcher started.
    pub ticks_completed: u64,
    /// Time until the next scheduled tick.
    pub next_tick_in: Duration,
}

/// Consumer of tick results at the rendering boundary.
///
/// Implementations draw from the store's per-prefix windows. When a common
/// time axis across prefixes is needed, align on stamps via
/// [`HistoryStore::aligned_window`] — after partial failures the windows
/// differ in length, and index-based alignment silently shifts time axes.
pub trait Renderer: Send {
    /// Draw the current state after a tick.
    fn render(&mut self, store: &HistoryStore, report: &TickReport, status: &StatusLine);
}

/// Headless renderer logging a compact per-prefix summary line.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Construct the text renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, store: &HistoryStore, report: &TickReport, status: &StatusLine) {
        for prefix in store.prefixes() {
            let line = match store.latest(prefix) {
                Some(point) => {
                    let upstreams: Vec<String> = point
                        .stats
                        .upstreams
                        .iter()
                        .map(|(asn, n)| format!("{asn}={n}"))
                        .collect();
                    format!(
                        "total={} other={} upstream[{}]",
                        point.stats.total_paths,
                        point.stats.other_origins,
                        upstreams.join(" ")
                    )
                }
                None => "no data yet".to_string(),
            };
            let stale = !report.results.get(prefix).is_some_and(|r| r.is_ok());
            tracing::info!(prefix = %prefix, stale, %line, "prefix status");
        }
        tracing::info!(
            last_updated = %status.last_updated,
            ticks = status.ticks_completed,
            next_tick_in_secs = status.next_tick_in.as_secs(),
            "watch status"
        );
    }
}
