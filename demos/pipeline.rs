//! # Lazy pipelines
//!
//! Builds a few pipelines over in-memory data and shows that nothing past the
//! stop point is ever evaluated.
//!
//! ```bash
//! cargo run --example pipeline
//! ```

use std::cell::Cell;
use std::collections::BTreeMap;

use seqflow::prelude::*;

fn main() -> anyhow::Result<()> {
    let readings = vec![3, 3, 4, 7, 7, 7, 2, 2, 9];

    // Only as much of the source runs as the consumer asks for.
    let pulled = Cell::new(0);
    let first_big = from_iter(&readings)
        .inspect(|_| pulled.set(pulled.get() + 1))
        .find(|x| **x > 5);
    println!("first reading above 5: {first_big:?} (pulled {} elements)", pulled.get());

    // Run-length encoding.
    let rle = from_iter(&readings)
        .group_by_adjacent(|a, b| a == b)
        .map(|run| (*run[0], run.len()))
        .to_vec();
    println!("run lengths: {rle:?}");

    // Moving average over windows of three.
    let averages = from_iter(&readings)
        .windows(3)
        .map(|w| w.iter().copied().sum::<i32>() as f64 / 3.0)
        .to_vec();
    println!("moving average: {averages:?}");

    // Distinct consecutive values, joined with a separator.
    let joined: String = from_iter(readings.clone())
        .dedup()
        .map(|x| x.to_string())
        .intersperse("-".to_string())
        .fold(String::new(), |acc, s| acc + &s);
    println!("dedup: {joined}");

    // Paired sequences: index every reading, keep the odd positions.
    let by_slot: BTreeMap<usize, i32> = from_iter(readings.clone())
        .enumerate(0)
        .filter(|i, _| i % 2 == 1)
        .to_map()
        .into_iter()
        .collect();
    println!("odd slots: {by_slot:?}");

    // Combinatorics.
    let pairs = from_iter(vec!["a", "b", "c"]).combinations(2).to_vec();
    println!("pairs: {pairs:?}");
    let orders = once_with(|| vec![1, 2, 3]).flatten().permutations().count();
    println!("orderings of 3: {orders}");

    // An endless source is fine as long as something stops it.
    let round_robin = from_iter(vec!["east", "west"]).cycle().take(5).to_vec();
    println!("round robin: {round_robin:?}");

    // Lockstep: deltas against the previous day, compared with a baseline.
    let deltas = from_iter(readings.clone())
        .skip(1)
        .zip_with(readings.clone(), |today, yesterday| today - yesterday)
        .to_vec();
    println!("deltas: {deltas:?}");
    let baseline = vec![3, 3, 4, 7, 7, 8];
    println!("below baseline: {}", from_iter(&readings).lt_by(&baseline, |a, b| a < b));

    // Two sequences side by side, the second read through a pull cursor.
    let labels = from_iter(vec!["lo", "mid", "hi"]).pull()?;
    let labelled = iota(1, 100, 1).zip(labels).to_pairs();
    println!("labelled: {labelled:?}");

    Ok(())
}
