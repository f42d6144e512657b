use std::sync::Arc;

use prefixwatch::SnapshotFetcher;

#[must_use]
pub fn get_fetcher() -> Arc<dyn SnapshotFetcher> {
    if std::env::var("PREFIXWATCH_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Fetcher for CI) ---");
        Arc::new(prefixwatch_mock::MockFetcher::new())
    } else {
        Arc::new(
            prefixwatch_ripe::RipeStatConnector::builder()
                .build()
                .expect("default RIPEstat connector builds"),
        )
    }
}
