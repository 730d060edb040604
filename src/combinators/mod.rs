//! # Stateful combinators.
//!
//! Adapters that carry state across elements while still honoring the stop
//! signal: a lookback buffer, a running group, an index cursor.
//!
//! ## Rules
//! - Buffers are created inside `drive` and dropped when it returns, so every
//!   traversal starts clean.
//! - A buffer holds exactly the upstream elements consumed so far; nothing is
//!   pulled ahead of need.
//! - Once the consumer stops, no pending group or tail is flushed.
//! - Bad sizes (`0`, `k > n`) yield nothing.
//!
//! | Adapter                | State                         | Needs `Clone` |
//! |------------------------|-------------------------------|---------------|
//! | [`Windows`]            | last `n` elements             | yes           |
//! | [`Chunks`]             | current chunk                 | no            |
//! | [`GroupByAdjacent`]    | current run                   | no            |
//! | [`Dedup`], [`DedupBy`] | last yielded element          | yes           |
//! | [`DedupByKey`]         | key of last yielded element   | no            |
//! | [`Intersperse`]        | "first element seen" flag     | separator     |
//! | [`Cycle`]              | none (re-drives upstream)     | no            |
//! | [`Combinations`]       | materialized pool + indices   | yes           |
//! | [`Permutations`]       | materialized pool + counters  | yes           |
//! | [`Flatten`], [`FlattenSeq`] | none                     | no            |
//! | [`Zip`], [`ZipWith`], [`Interleave`] | right-hand iterator, kept across drives | no |

mod combinatorics;
mod cycle;
mod flatten;
mod group;
mod intersperse;
mod window;
mod zip;

pub use combinatorics::{Combinations, Permutations};
pub use cycle::Cycle;
pub use flatten::{Flatten, FlattenSeq};
pub use group::{Dedup, DedupBy, DedupByKey, GroupByAdjacent};
pub use intersperse::Intersperse;
pub use window::{Chunks, Windows};
pub use zip::{Interleave, Zip, ZipWith};
