//! Sequence sources.
//!
//! ## Contents
//! - collections: restartable sources over cloneable collections, plus the
//!   one-shot [`drain`] over any iterator
//! - generators: [`empty`], [`once`], [`once_with`], [`repeat`], [`repeat_with`],
//!   [`iota`], [`iota_inclusive`] (counting with any [`Step`] type)
//! - channel: [`from_receiver`] over a tokio mpsc receiver (one-shot)
//!
//! Restartable sources yield the same elements on every drive. One-shot sources
//! wrap a resource that is consumed as it is read; once exhausted they yield nothing.

mod channel;
mod collections;
mod generators;

pub use channel::{FromReceiver, from_receiver};
pub use collections::{
    Drain, FromIter, FromPairs, FromSliceRev, drain, from_iter, from_map, from_pairs,
    from_slice_rev,
};
pub use generators::{
    Empty, Iota, Once, OnceWith, Repeat, RepeatWith, Step, empty, iota, iota_inclusive, once,
    once_with, repeat, repeat_with,
};
