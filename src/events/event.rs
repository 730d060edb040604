//! # Lifecycle events emitted by a channel bridge.
//!
//! The [`EventKind`] enum classifies event types across two categories:
//! - **Producer events**: the background producer started, or ended for one of
//!   three reasons (source exhausted, cancellation observed, receiver gone)
//! - **Subscriber events**: a subscriber fell behind or panicked
//!
//! The [`Event`] struct carries metadata such as timestamps, bridge name, the
//! number of elements delivered and reasons.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Use `seq` to restore the exact order when events are delivered out of order.
//!
//! ## Example
//! ```rust
//! use seqflow::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::ProducerCancelled)
//!     .with_bridge("numbers")
//!     .with_sent(3)
//!     .with_reason("token cancelled");
//!
//! assert_eq!(ev.kind, EventKind::ProducerCancelled);
//! assert_eq!(ev.bridge.as_deref(), Some("numbers"));
//! assert_eq!(ev.sent, Some(3));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of bridge events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Subscriber events ===
    /// Subscriber panicked during event processing.
    ///
    /// Sets:
    /// - `bridge`: subscriber name
    /// - `reason`: panic info/message
    SubscriberPanicked,

    /// Subscriber dropped an event (queue full or worker closed).
    ///
    /// Sets:
    /// - `bridge`: subscriber name
    /// - `reason`: reason string (e.g., "full", "closed")
    SubscriberOverflow,

    // === Producer lifecycle ===
    /// Background producer began driving the source.
    ///
    /// Sets:
    /// - `bridge`: bridge name
    ProducerStarted,

    /// Source ran out of elements; the channel is closed after the last one.
    ///
    /// Sets:
    /// - `bridge`: bridge name
    /// - `sent`: elements delivered into the channel
    ProducerExhausted,

    /// Cancellation was observed, either between elements or while a send
    /// was waiting for buffer space.
    ///
    /// Sets:
    /// - `bridge`: bridge name
    /// - `sent`: elements delivered into the channel
    ProducerCancelled,

    /// The receiving side was dropped; production stopped.
    ///
    /// Sets:
    /// - `bridge`: bridge name
    /// - `sent`: elements delivered into the channel
    ReceiverClosed,
}

impl EventKind {
    /// `true` for the three kinds that end a producer.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            EventKind::ProducerExhausted | EventKind::ProducerCancelled | EventKind::ReceiverClosed
        )
    }
}

/// Bridge event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,

    /// Human-readable reason (overflow details, panic payloads, etc.).
    pub reason: Option<Arc<str>>,
    /// Elements delivered into the channel so far.
    pub sent: Option<u64>,
    /// Name of the bridge (or subscriber, for subscriber events).
    pub bridge: Option<Arc<str>>,
    /// Event classification.
    pub kind: EventKind,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            kind,
            at: SystemTime::now(),
            reason: None,
            sent: None,
            bridge: None,
        }
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a bridge name.
    #[inline]
    pub fn with_bridge(mut self, bridge: impl Into<Arc<str>>) -> Self {
        self.bridge = Some(bridge.into());
        self
    }

    /// Attaches the delivered element count.
    #[inline]
    pub fn with_sent(mut self, n: u64) -> Self {
        self.sent = Some(n);
        self
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub fn subscriber_overflow(subscriber: &'static str, reason: &'static str) -> Self {
        Event::new(EventKind::SubscriberOverflow)
            .with_bridge(subscriber)
            .with_reason(format!("subscriber={subscriber} reason={reason}"))
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        Event::new(EventKind::SubscriberPanicked)
            .with_bridge(subscriber)
            .with_reason(info)
    }

    #[inline]
    pub fn is_subscriber_overflow(&self) -> bool {
        matches!(self.kind, EventKind::SubscriberOverflow)
    }

    #[inline]
    pub fn is_subscriber_panic(&self) -> bool {
        matches!(self.kind, EventKind::SubscriberPanicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new(EventKind::ProducerStarted);
        let b = Event::new(EventKind::ProducerExhausted);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_terminal_kinds() {
        assert!(EventKind::ProducerExhausted.is_terminal());
        assert!(EventKind::ProducerCancelled.is_terminal());
        assert!(EventKind::ReceiverClosed.is_terminal());
        assert!(!EventKind::ProducerStarted.is_terminal());
        assert!(!EventKind::SubscriberOverflow.is_terminal());
    }

    #[test]
    fn test_subscriber_helpers() {
        let ev = Event::subscriber_overflow("log", "full");
        assert!(ev.is_subscriber_overflow());
        assert_eq!(ev.bridge.as_deref(), Some("log"));
        assert_eq!(ev.reason.as_deref(), Some("subscriber=log reason=full"));

        let ev = Event::subscriber_panicked("log", "boom".into());
        assert!(ev.is_subscriber_panic());
    }
}
