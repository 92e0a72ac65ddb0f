//! # Live Feed Example
//!
//! Runs a feed for a few seconds with sped-up timers, logging every update
//! through the built-in `LogWriter` and counting updates per kind.
//!
//! ## Run
//! ```bash
//! RUST_LOG=info cargo run --example live_feed --features logging
//! ```

use std::{
    sync::Arc,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use crisisfeed::{EventKind, Feed, FeedConfig, LogWriter, Subscribe, UpdateEvent};
use tracing_subscriber::EnvFilter;

struct KindCounter {
    counts: [AtomicU64; 4],
}

impl KindCounter {
    fn new() -> Self {
        Self {
            counts: Default::default(),
        }
    }

    fn print_stats(&self) {
        println!();
        println!("Updates by kind:");
        for (i, kind) in EventKind::ALL.iter().enumerate() {
            let branch = if i + 1 == EventKind::ALL.len() { "└─►" } else { "├─►" };
            println!(
                " {branch} {:<16} {}",
                kind.as_str(),
                self.counts[i].load(Ordering::Relaxed)
            );
        }
    }
}

impl Subscribe for KindCounter {
    fn on_update(&self, update: &UpdateEvent) {
        if let Some(i) = EventKind::ALL.iter().position(|k| *k == update.kind()) {
            self.counts[i].fetch_add(1, Ordering::Relaxed);
        }
    }

    fn name(&self) -> &'static str {
        "kind-counter"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = FeedConfig {
        generator_period: Duration::from_millis(300),
        connectivity_period: Duration::from_secs(1),
        ..FeedConfig::default()
    };
    let feed = Feed::builder(cfg).build()?;

    let counter = Arc::new(KindCounter::new());
    let log = feed.subscribe(Arc::new(LogWriter::new()));
    let count = feed.subscribe(counter.clone());

    tokio::time::sleep(Duration::from_secs(6)).await;

    // operator reads the two newest updates
    for ev in feed.history().iter().take(2) {
        feed.acknowledge(&ev.id);
    }

    log.unsubscribe();
    count.unsubscribe();

    counter.print_stats();
    println!();
    println!("{}", feed.snapshot().to_json()?);
    println!("{:?}", feed.stats());
    Ok(())
}
