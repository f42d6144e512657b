use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use prefixwatch::{HistoryStore, Renderer, StatusLine, TickReport, Watcher};
use prefixwatch_mock::{example_config, MockFetcher};

struct CountingRenderer {
    renders: Arc<AtomicUsize>,
    complete: Arc<AtomicUsize>,
}

impl Renderer for CountingRenderer {
    fn render(&mut self, _store: &HistoryStore, report: &TickReport, _status: &StatusLine) {
        self.renders.fetch_add(1, Ordering::SeqCst);
        if report.is_complete() {
            self.complete.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn loop_ticks_on_cadence_and_stops_on_shutdown() {
    let renders = Arc::new(AtomicUsize::new(0));
    let complete = Arc::new(AtomicUsize::new(0));
    let mut renderer = CountingRenderer {
        renders: renders.clone(),
        complete: complete.clone(),
    };

    let mut watcher = Watcher::builder()
        .with_fetcher(Arc::new(MockFetcher::new()))
        .with_config(example_config())
        .poll_interval(Duration::from_secs(120))
        .build()
        .unwrap();

    let (tx, rx) = watch::channel(false);
    let handle = tokio::spawn(async move {
        watcher.run(&mut renderer, rx).await;
        watcher.ticks_completed()
    });

    // First tick fires immediately; two more cadence periods follow.
    tokio::time::sleep(Duration::from_secs(250)).await;
    tx.send(true).expect("loop is still listening");
    let ticks = handle.await.expect("loop exits cleanly");

    assert_eq!(ticks, 3, "t=0s, t=120s, t=240s");
    assert_eq!(renders.load(Ordering::SeqCst), 3, "one render per tick");
    assert_eq!(complete.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_shutdown_sender_stops_the_loop() {
    let mut watcher = Watcher::builder()
        .with_fetcher(Arc::new(MockFetcher::new()))
        .with_config(example_config())
        .poll_interval(Duration::from_secs(120))
        .build()
        .unwrap();

    let (tx, rx) = watch::channel(false);
    let mut renderer = CountingRenderer {
        renders: Arc::new(AtomicUsize::new(0)),
        complete: Arc::new(AtomicUsize::new(0)),
    };
    let handle = tokio::spawn(async move {
        watcher.run(&mut renderer, rx).await;
    });

    tokio::time::sleep(Duration::from_secs(10)).await;
    drop(tx);
    handle.await.expect("loop exits when the sender is gone");
}
