//! Bridge events: types and broadcast bus.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: the bridge producer (start and exit), `SubscriberSet`
//!   workers (overflow/panic).
//! - **Consumers**: the bridge listener task, which fans out to `SubscriberSet`.
//!
//! Events exist only for bridges built with subscribers; see
//! [`BridgeBuilder`](crate::bridge::BridgeBuilder).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
