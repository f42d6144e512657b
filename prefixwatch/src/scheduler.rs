use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::render::{Renderer, StatusLine};
use crate::watcher::Watcher;

impl Watcher {
    /// Drive ticks on the configured cadence until shutdown is signalled.
    ///
    /// The first tick fires immediately; subsequent ticks follow at
    /// `poll_interval`, with missed ticks delayed rather than bursted. The
    /// loop checks the shutdown signal only between ticks, so a tick that
    /// has started always finishes its commits — no partial tick is ever
    /// observable. Signal shutdown by sending `true` (or dropping the
    /// sender).
    pub async fn run<R: Renderer>(&mut self, renderer: &mut R, mut shutdown: watch::Receiver<bool>) {
        let poll_interval = self.config().poll_interval;
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let report = self.tick().await;
                    let status = StatusLine {
                        last_updated: report.stamp,
                        ticks_completed: self.ticks_completed(),
                        next_tick_in: poll_interval,
                    };
                    renderer.render(self.store(), &report, &status);
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("shutdown signalled, stopping watch loop");
                        break;
                    }
                }
            }
        }
    }
}
