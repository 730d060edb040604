//! # Event bus for broadcasting bridge events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`]. The producer of a
//! bridge and the subscriber workers publish into it; a single listener task
//! fans events out to the [`SubscriberSet`](crate::SubscriberSet).
//!
//! ```text
//! Publishers:                        Listener (one per bridge):
//!   producer   ──┐
//!                ├────► Bus ───────► listener task ────► SubscriberSet
//!   sub workers ─┘  (broadcast chan)
//! ```
//!
//! ## Rules
//! - `publish()` never blocks.
//! - One ring buffer of `capacity` events is shared by all receivers.
//! - Slow receivers get `RecvError::Lagged(n)` and skip the `n` oldest items.
//! - Events sent while no receiver exists are lost.
//! - Receivers see `RecvError::Closed` once every `Bus` clone is dropped.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for bridge events.
///
/// Cheap to clone; clones share one channel.
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Event>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active receivers. Returns immediately.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver that will observe subsequent events only.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::broadcast::error::RecvError;

    use super::*;
    use crate::EventKind;

    #[tokio::test]
    async fn test_publish_reaches_receiver() {
        let bus = Bus::new(4);
        let mut rx = bus.subscribe();
        bus.publish(Event::new(EventKind::ProducerStarted).with_bridge("b"));

        let ev = rx.recv().await.unwrap();
        assert_eq!(ev.kind, EventKind::ProducerStarted);
        assert_eq!(ev.bridge.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_receiver_closes_with_last_bus() {
        let bus = Bus::new(1);
        let mut rx = bus.subscribe();
        drop(bus);
        assert!(matches!(rx.recv().await, Err(RecvError::Closed)));
    }

    #[tokio::test]
    async fn test_lagging_receiver_skips_oldest() {
        let bus = Bus::new(1);
        let mut rx = bus.subscribe();
        bus.publish(Event::new(EventKind::ProducerStarted));
        bus.publish(Event::new(EventKind::ProducerExhausted));

        assert!(matches!(rx.recv().await, Err(RecvError::Lagged(1))));
        assert_eq!(rx.recv().await.unwrap().kind, EventKind::ProducerExhausted);
    }
}
