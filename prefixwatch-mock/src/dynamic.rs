//! Test-scriptable mock driven from the outside through a controller handle.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use prefixwatch_core::{Prefix, RawSnapshot, SnapshotFetcher, WatchError};

/// Instruction for how a fetch should behave for a given prefix.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided snapshot immediately.
    Return(RawSnapshot),
    /// Fail immediately with the provided error.
    Fail(WatchError),
    /// Hang indefinitely (simulate a stalled fetch; the watcher's deadline
    /// turns this into a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    /// One-shot behaviors consumed front-first; take precedence over rules.
    queued: HashMap<Prefix, VecDeque<MockBehavior>>,
    /// Persistent per-prefix behaviors.
    rules: HashMap<Prefix, MockBehavior>,
    /// Every prefix fetched, in call order.
    calls: Vec<Prefix>,
}

/// Controller handle used by tests to drive the dynamic mock from outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the persistent behavior for fetches of a specific prefix.
    pub async fn set_routes(&self, prefix: Prefix, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(prefix, behavior);
    }

    /// Queue a one-shot behavior consumed by the next fetch of `prefix`,
    /// ahead of any persistent rule.
    pub async fn enqueue_routes(&self, prefix: Prefix, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.queued.entry(prefix).or_default().push_back(behavior);
    }

    /// Prefixes fetched so far, in call order.
    pub async fn calls(&self) -> Vec<Prefix> {
        self.state.lock().await.calls.clone()
    }

    /// Number of fetches observed for `prefix`.
    pub async fn fetch_count(&self, prefix: &Prefix) -> usize {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .filter(|p| *p == prefix)
            .count()
    }
}

/// Scriptable snapshot fetcher; behaviors are installed via the paired
/// [`DynamicMockController`].
pub struct DynamicMockFetcher {
    state: Arc<Mutex<InternalState>>,
}

/// Create a connected `(fetcher, controller)` pair.
#[must_use]
pub fn dynamic_fetcher() -> (Arc<DynamicMockFetcher>, DynamicMockController) {
    let state = Arc::new(Mutex::new(InternalState::default()));
    (
        Arc::new(DynamicMockFetcher {
            state: state.clone(),
        }),
        DynamicMockController { state },
    )
}

#[async_trait]
impl SnapshotFetcher for DynamicMockFetcher {
    fn name(&self) -> &'static str {
        "prefixwatch-mock-dynamic"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch_routes(&self, prefix: &Prefix) -> Result<RawSnapshot, WatchError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(prefix.clone());
            guard
                .queued
                .get_mut(prefix)
                .and_then(VecDeque::pop_front)
                .or_else(|| guard.rules.get(prefix).cloned())
        };

        match behavior {
            Some(MockBehavior::Return(snapshot)) => Ok(snapshot),
            Some(MockBehavior::Fail(err)) => Err(err),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!("pending future never resolves")
            }
            None => Err(WatchError::fetch(prefix, "no scripted behavior")),
        }
    }
}
