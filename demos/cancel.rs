//! # Cancellation
//!
//! A token cancelled from a timer stops both a synchronous traversal and a
//! channel bridge.
//!
//! ```bash
//! cargo run --example cancel
//! ```

use std::thread;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use seqflow::BridgeExit;
use seqflow::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Synchronous: the traversal runs on a blocking thread and is cut short.
    let token = CancellationToken::new();
    let timer = {
        let token = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(120)).await;
            token.cancel();
        })
    };
    let seen = tokio::task::spawn_blocking({
        let token = token.clone();
        move || {
            repeat_with(|| thread::sleep(Duration::from_millis(20)))
                .with_cancel(token)
                .count()
        }
    })
    .await?;
    timer.await?;
    println!("sync traversal saw {seen} ticks before cancellation");

    // Bridge: reader stops early, cancels, producer exits promptly.
    let token = CancellationToken::new();
    let mut bridge = to_chan(iota(1u32, 1_000_000, 1), token.clone())?;
    let mut sum = 0;
    while let Some(x) = bridge.recv().await {
        sum += x;
        if x == 10 {
            break;
        }
    }
    token.cancel();
    let exit = tokio::time::timeout(Duration::from_secs(1), bridge.join()).await??;
    assert_eq!(exit, BridgeExit::Cancelled);
    println!("bridge: summed {sum}, producer exit = {}", exit.as_label());

    Ok(())
}
