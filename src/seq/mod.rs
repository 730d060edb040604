//! Producer/consumer protocol: the single- and paired-element sequence traits.
//!
//! A sequence is a value that, when driven, pushes elements into a consumer
//! callback. The consumer answers every element with a continue/stop flag;
//! `false` ends the whole traversal immediately.
//!
//! ## Contents
//! - [`Seq`] single-element sequences (`drive(|item| -> bool)`)
//! - [`Seq2`] paired sequences (`drive(|key, value| -> bool)`)
//! - [`from_fn`] / [`from_fn2`] closure-backed sequences
//! - [`BoxSeq`] / [`BoxSeq2`] type-erased sequences
//!
//! ## Protocol
//! ```text
//! consumer ──► seq.drive(consumer)
//!                 │
//!                 ├─► consumer(e0) → true
//!                 ├─► consumer(e1) → true
//!                 ├─► consumer(e2) → false ──► return (nothing else evaluated)
//!                 ...
//!                 └─► source exhausted ──► return
//! ```
//!
//! Every call to `drive` is an independent traversal. Sources backed by a
//! one-shot resource (a channel, a borrowed iterator) yield nothing once exhausted.

mod boxed;
mod from_fn;
mod pair;
mod single;

pub use boxed::{BoxSeq, BoxSeq2, DynSeq, DynSeq2};
pub use from_fn::{FromFn, FromFn2, from_fn, from_fn2};
pub use pair::Seq2;
pub use single::Seq;
