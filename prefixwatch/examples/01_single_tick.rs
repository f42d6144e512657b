mod common;

use common::get_fetcher;
use prefixwatch::Watcher;
use prefixwatch_mock::example_config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 1. Pick a fetcher (mock in CI when PREFIXWATCH_EXAMPLES_USE_MOCK is set).
    let fetcher = get_fetcher();

    // 2. Build the watcher with the six-prefix example configuration.
    let mut watcher = Watcher::builder()
        .with_fetcher(fetcher)
        .with_config(example_config())
        .build()?;

    // 3. Run a single tick and show the per-prefix outcome.
    let report = watcher.tick().await;
    for (prefix, stats) in report.successes() {
        println!(
            "{prefix}: total={} other={} upstreams={:?}",
            stats.total_paths, stats.other_origins, stats.upstreams
        );
    }
    for (prefix, err) in report.failures() {
        println!("{prefix}: FAILED ({err})");
    }

    Ok(())
}
