//! prefixwatch-mock
//!
//! Deterministic snapshot fetchers for tests and examples: a static
//! fixture-backed [`MockFetcher`] and a test-scriptable [`DynamicMockFetcher`]
//! driven from the outside through a controller handle.

use async_trait::async_trait;

use prefixwatch_core::{Prefix, RawSnapshot, SnapshotFetcher, WatchError};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockFetcher, DynamicMockController, MockBehavior, dynamic_fetcher};
pub use fixtures::{example_config, looking_glass_fixture};

/// Mock fetcher for CI-safe examples. Returns the same fixture snapshot for
/// every prefix; the magic prefix strings `"FAIL"` and `"TIMEOUT"` force a
/// fetch error and a slow response respectively.
pub struct MockFetcher;

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFetcher {
    /// Construct the fixture-backed mock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SnapshotFetcher for MockFetcher {
    fn name(&self) -> &'static str {
        "prefixwatch-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch_routes(&self, prefix: &Prefix) -> Result<RawSnapshot, WatchError> {
        match prefix.as_str() {
            "FAIL" => Err(WatchError::fetch(prefix, "forced failure")),
            "TIMEOUT" => {
                // Simulate latency; the watcher may time out depending on its
                // configured fetch deadline. Keep short so tests stay fast.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(looking_glass_fixture())
            }
            _ => Ok(looking_glass_fixture()),
        }
    }
}
