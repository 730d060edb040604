//! # Channel bridge with logging
//!
//! Runs a slow sequence on a background thread, reads part of it asynchronously
//! and then stops reading. The `LogWriter` subscriber prints the producer
//! lifecycle.
//!
//! ```bash
//! cargo run --example channel_bridge --features logging
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use seqflow::prelude::*;
use seqflow::{BridgeBuilder, BridgeConfig, LogWriter, Subscribe};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];

    // A "sensor" that takes a little while per reading.
    let sensor = iota(0u64, u64::MAX, 1).inspect(|_| thread::sleep(Duration::from_millis(50)));

    let token = CancellationToken::new();
    let mut bridge = BridgeBuilder::new(BridgeConfig::named("sensor"))
        .with_subscribers(subs)
        .spawn(sensor.map(|n| n * n), token.clone())?;

    let mut readings = (&mut bridge).take(5);
    while let Some(v) = readings.next().await {
        println!("reading: {v}");
    }

    // The reader still holds the channel; cancelling releases the producer.
    token.cancel();
    let (_rx, producer) = bridge.into_parts();
    let exit = producer.join().await?;
    println!("producer finished: {}", exit.as_label());

    Ok(())
}
