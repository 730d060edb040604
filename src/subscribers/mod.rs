//! # Event subscribers for channel bridges.
//!
//! ```text
//! producer ── publish(Event) ──► Bus ──► listener ──► SubscriberSet
//!                                                        │
//!                                            ┌───────────┼───────────┐
//!                                            ▼           ▼           ▼
//!                                        LogWriter    Metrics     Custom
//! ```
//!
//! ## Contents
//! - [`Subscribe`] the extension trait
//! - [`SubscriberSet`] one bounded lane per subscriber
//! - `LogWriter` stdout printer (feature `logging`)

#[cfg(feature = "logging")]
mod log;
mod subscriber;
mod subscriber_set;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscriber::Subscribe;
pub use subscriber_set::SubscriberSet;
