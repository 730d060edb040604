//! # Observing a bridge.
//!
//! A bridge built with [`BridgeBuilder::with_subscribers`](crate::BridgeBuilder::with_subscribers)
//! reports the life of its producer as [`Event`]s:
//!
//! ```text
//! ProducerStarted ──► ProducerExhausted | ProducerCancelled | ReceiverClosed
//! ```
//!
//! Each [`Subscribe`] implementation sees those events on its own lane: a
//! bounded queue drained by a dedicated task. The producer never waits on a
//! subscriber. A lane that is full drops the event and the drop is reported as
//! `SubscriberOverflow`; a subscriber that panics is reported as
//! `SubscriberPanicked` and keeps receiving later events.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! use async_trait::async_trait;
//! use seqflow::{Event, EventKind, Subscribe};
//!
//! /// Adds up how many elements each finished bridge delivered.
//! #[derive(Default)]
//! struct Delivered(AtomicU64);
//!
//! #[async_trait]
//! impl Subscribe for Delivered {
//!     async fn on_event(&self, ev: &Event) {
//!         self.0.fetch_add(ev.sent.unwrap_or(0), Ordering::Relaxed);
//!     }
//!
//!     fn wants(&self, kind: EventKind) -> bool {
//!         kind.is_terminal()
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "delivered"
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};

/// Receiver of bridge events.
///
/// `on_event` runs on the subscriber's own task, so it may await I/O. It should
/// not block the thread.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles one event.
    async fn on_event(&self, event: &Event);

    /// Filters events before they are queued. Default: every kind.
    fn wants(&self, kind: EventKind) -> bool {
        let _ = kind;
        true
    }

    /// Name carried by overflow and panic reports about this subscriber.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Lane capacity, at least 1. Default: 256.
    fn queue_capacity(&self) -> usize {
        256
    }
}
