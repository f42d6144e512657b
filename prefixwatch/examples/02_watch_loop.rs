mod common;

use common::get_fetcher;
use prefixwatch::{TextRenderer, Watcher};
use prefixwatch_mock::example_config;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut watcher = Watcher::builder()
        .with_fetcher(get_fetcher())
        .with_config(example_config())
        .build()?;

    // Ctrl-C flips the shutdown flag; the loop finishes its current tick
    // and exits without a partial commit.
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(true);
        }
    });

    let mut renderer = TextRenderer::new();
    watcher.run(&mut renderer, rx).await;

    Ok(())
}
