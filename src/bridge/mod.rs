//! # Concurrency bridge.
//!
//! Connects sequences to an externally owned cancellation signal and to tokio
//! channels.
//!
//! ## Contents
//! - [`Cancellation`], [`Cancellable`], [`cancellable`]: stop a traversal once a
//!   signal fires (synchronous, no runtime needed)
//! - [`to_chan`], [`to_chan2`], [`BridgeBuilder`]: run a sequence on a background
//!   thread and read it from a bounded channel
//! - [`Bridge`], [`ProducerHandle`], [`BridgeExit`]: reading side and completion signal
//! - [`BridgeConfig`]: name and capacities
//! - [`Pull`], [`pull`], [`pull2`]: read a sequence one element at a time from
//!   a plain thread (no runtime)
//!
//! ## Lifetime of the background producer
//! ```text
//!            ┌──── reader reads to the end ─────► Exhausted
//! producer ──┼──── token fires ─────────────────► Cancelled
//!            └──── reader dropped ──────────────► ReceiverClosed
//! ```
//! A reader that stops reading while still holding the channel must fire the
//! token (or drop the reader) for the producer to finish.

mod cancel;
mod chan;
mod config;
mod pull;

pub use cancel::{Cancellable, Cancellation, cancellable};
pub use chan::{Bridge, BridgeBuilder, BridgeExit, ProducerHandle, to_chan, to_chan2};
pub use config::BridgeConfig;
pub use pull::{Pull, pull, pull2};
