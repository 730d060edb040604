//! # seqflow
//!
//! **seqflow** is a library of lazy, interruptible, push-based sequences.
//!
//! A sequence is a value you *drive*: it pushes elements into a consumer
//! callback, and the consumer answers each one with `true` (continue) or `false`
//! (stop). Adapters wrap sequences without running anything; a terminal
//! reducer drives the pipeline once, and no intermediate collections are built.
//!
//! ## Architecture
//! ```text
//!   sources                 adapters / combinators               terminals
//! ┌──────────────┐      ┌───────────────────────────────┐      ┌──────────────┐
//! │ from_iter    │      │ map filter take skip chain    │      │ to_vec fold  │
//! │ from_pairs   │ ───► │ windows chunks dedup cycle    │ ───► │ find any all │
//! │ iota repeat  │      │ group_by_adjacent permutations│      │ count min_by │
//! │ from_fn      │      │ with_cancel  boxed            │      │ partition    │
//! └──────────────┘      └───────────────────────────────┘      └──────────────┘
//!                                        │
//!                                        ▼ to_chan(seq, token)
//!                       ┌───────────────────────────────────┐
//!                       │ spawn_blocking producer           │
//!                       │  select!{ token.cancelled(),      │──► mpsc ──► Bridge
//!                       │           tx.send(x) }            │          (recv / Stream)
//!                       └───────────────────────────────────┘
//! ```
//!
//! ### Stop propagation
//! ```text
//! from_iter([1,2,3,4]).map(f).take(2).to_vec()
//!
//!   source ─ 1 ─► map ─ f(1) ─► take (1/2) ─► to_vec   → true
//!   source ─ 2 ─► map ─ f(2) ─► take (2/2) ─► to_vec   → false
//!   source returns; 3 and 4 are never produced, f never sees them
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                 |
//! |-------------------|----------------------------------------------------------|------------------------------------|
//! | **Protocol**      | Single and paired push sequences.                        | [`Seq`], [`Seq2`], [`from_fn`]     |
//! | **Sources**       | Collections, generators, channels.                       | [`sources`]                        |
//! | **Combinators**   | Stateful adapters that still stop precisely.             | [`Seq::windows`], [`Seq::dedup`]   |
//! | **Cancellation**  | Stop a traversal once an external token fires.           | [`Cancellation`], [`Cancellable`]  |
//! | **Lockstep**      | Zip, interleave and compare against an iterator.         | [`Seq::zip`], [`Seq::cmp_by`]      |
//! | **Bridge**        | Read a sequence from a bounded channel.                  | [`to_chan`], [`Bridge`]            |
//! | **Pull**          | Read a sequence one element at a time, no runtime.       | [`pull`], [`Pull`]                 |
//! | **Events**        | Observe bridge lifecycle through subscribers.            | [`Subscribe`], [`Event`]           |
//! | **Errors**        | Typed bridge failures.                                   | [`BridgeError`]                    |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogWriter` subscriber _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use seqflow::prelude::*;
//!
//! let runs = from_iter(vec![1, 1, 2, 2, 2, 3, 1])
//!     .group_by_adjacent(|a, b| a == b)
//!     .map(|run| (run[0], run.len()))
//!     .to_vec();
//! assert_eq!(runs, vec![(1, 2), (2, 3), (3, 1), (1, 1)]);
//!
//! let windows = iota(1, 6, 1).windows(3).to_vec();
//! assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
//! ```

mod adapters;
pub mod bridge;
mod combinators;
mod error;
pub mod events;
pub mod prelude;
mod seq;
pub mod sources;
pub mod subscribers;

// ---- Public re-exports ----

pub use adapters::{
    Chain, Enumerate, Exclude, Filter, FilterMap, Inspect, Keys, Map, MapWhile, Pairs, Scan,
    Skip, SkipWhile, SortedBy, StepBy, Take, TakeWhile, Tuples, Values,
};
pub use bridge::{
    Bridge, BridgeBuilder, BridgeConfig, BridgeExit, Cancellable, Cancellation, ProducerHandle,
    Pull, pull, pull2, to_chan, to_chan2,
};
pub use combinators::{
    Chunks, Combinations, Cycle, Dedup, DedupBy, DedupByKey, Flatten, FlattenSeq,
    GroupByAdjacent, Interleave, Intersperse, Permutations, Windows, Zip, ZipWith,
};
pub use error::BridgeError;
pub use events::{Event, EventKind};
pub use seq::{BoxSeq, BoxSeq2, DynSeq, DynSeq2, FromFn, FromFn2, Seq, Seq2, from_fn, from_fn2};
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
