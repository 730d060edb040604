//! One-line import for building pipelines.
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! let total: i32 = iota(1, 5, 1).map(|x| x * 10).fold(0, |a, x| a + x);
//! assert_eq!(total, 100);
//! ```

pub use crate::bridge::{Cancellation, cancellable, pull, pull2, to_chan, to_chan2};
pub use crate::seq::{BoxSeq, BoxSeq2, Seq, Seq2, from_fn, from_fn2};
pub use crate::sources::{
    drain, empty, from_iter, from_map, from_pairs, from_receiver, from_slice_rev, iota,
    iota_inclusive, once, once_with, repeat, repeat_with,
};
