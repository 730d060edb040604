//! Stateless adapters.
//!
//! Each adapter wraps an upstream sequence and transforms it one element at a
//! time. Where the single and paired variants behave identically (take, skip,
//! chain, ...) one struct implements both [`Seq`](crate::Seq) and
//! [`Seq2`](crate::Seq2), selected by what the upstream implements.
//!
//! ## Contents
//! - [`map`]: `Map`, `FilterMap`, `MapWhile`, `Inspect`, `Scan`
//! - [`filter`]: `Filter`, `Exclude`, `TakeWhile`, `SkipWhile`
//! - [`limit`]: `Take`, `Skip`, `StepBy`, `Enumerate`
//! - [`chain`]: `Chain`
//! - [`shape`]: `Keys`, `Values`, `Tuples`, `Pairs`, `SortedBy`

mod chain;
mod filter;
mod limit;
mod map;
mod shape;

pub use chain::Chain;
pub use filter::{Exclude, Filter, SkipWhile, TakeWhile};
pub use limit::{Enumerate, Skip, StepBy, Take};
pub use map::{FilterMap, Inspect, Map, MapWhile, Scan};
pub use shape::{Keys, Pairs, SortedBy, Tuples, Values};
