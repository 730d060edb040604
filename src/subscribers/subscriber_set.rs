//! # Fan-out of bridge events to subscriber lanes.
//!
//! ```text
//! listener ── emit(ev) ──┬─ wants? ─► lane "log"     ─► task ─► on_event
//!                        ├─ wants? ─► lane "metrics" ─► task ─► on_event
//!                        └─ full  ──► Bus ◄─ SubscriberOverflow
//! ```
//!
//! `emit` never waits: it uses `try_send`. Each lane is FIFO; lanes are not
//! ordered relative to each other. Reports about a lane (overflow, panic) go
//! back onto the bus, so the other subscribers see them as well. An overflow
//! report that itself overflows is dropped silently.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

use crate::error::panic_message;
use crate::events::{Bus, Event, EventKind};
use crate::subscribers::Subscribe;

struct Lane {
    sub: Arc<dyn Subscribe>,
    queue: mpsc::Sender<Arc<Event>>,
    worker: JoinHandle<()>,
}

/// Subscribers of one bridge, each behind its own bounded lane.
pub struct SubscriberSet {
    lanes: Vec<Lane>,
    bus: Bus,
}

impl SubscriberSet {
    /// Opens a lane per subscriber. Lane reports are published on `bus`.
    ///
    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>, bus: Bus) -> Self {
        let lanes = subs
            .into_iter()
            .map(|sub| {
                let (queue, rx) = mpsc::channel(sub.queue_capacity().max(1));
                let worker = tokio::spawn(drain_lane(Arc::clone(&sub), rx, bus.clone()));
                Lane { sub, queue, worker }
            })
            .collect();
        Self { lanes, bus }
    }

    /// Number of subscribers.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// `true` without subscribers.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Queues `event` on every lane whose subscriber wants its kind.
    pub fn emit(&self, event: &Event) {
        let mut shared: Option<Arc<Event>> = None;
        for lane in &self.lanes {
            if !lane.sub.wants(event.kind) {
                continue;
            }
            let ev = Arc::clone(shared.get_or_insert_with(|| Arc::new(event.clone())));
            let reason = match lane.queue.try_send(ev) {
                Ok(()) => continue,
                Err(TrySendError::Full(_)) => "full",
                Err(TrySendError::Closed(_)) => "closed",
            };
            if event.kind != EventKind::SubscriberOverflow {
                self.bus.publish(Event::subscriber_overflow(lane.sub.name(), reason));
            }
        }
    }

    /// Closes every lane and waits until each subscriber has handled what was queued.
    pub async fn shutdown(self) {
        let workers: Vec<_> = self
            .lanes
            .into_iter()
            .map(|Lane { queue, worker, .. }| {
                drop(queue);
                worker
            })
            .collect();
        for worker in workers {
            let _ = worker.await;
        }
    }
}

async fn drain_lane(sub: Arc<dyn Subscribe>, mut rx: mpsc::Receiver<Arc<Event>>, bus: Bus) {
    while let Some(ev) = rx.recv().await {
        let handled = AssertUnwindSafe(sub.on_event(&ev)).catch_unwind().await;
        if let Err(payload) = handled {
            bus.publish(Event::subscriber_panicked(sub.name(), panic_message(&*payload)));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;

    struct Collect {
        seen: Arc<Mutex<Vec<EventKind>>>,
        terminal_only: bool,
    }

    #[async_trait]
    impl Subscribe for Collect {
        async fn on_event(&self, ev: &Event) {
            self.seen.lock().unwrap().push(ev.kind);
        }

        fn wants(&self, kind: EventKind) -> bool {
            !self.terminal_only || kind.is_terminal()
        }

        fn name(&self) -> &'static str {
            "collect"
        }
    }

    struct Boom;

    #[async_trait]
    impl Subscribe for Boom {
        async fn on_event(&self, _ev: &Event) {
            panic!("boom");
        }

        fn name(&self) -> &'static str {
            "boom"
        }
    }

    struct Stalled;

    #[async_trait]
    impl Subscribe for Stalled {
        async fn on_event(&self, _ev: &Event) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }

        fn name(&self) -> &'static str {
            "stalled"
        }

        fn queue_capacity(&self) -> usize {
            1
        }
    }

    fn collector(terminal_only: bool) -> (Arc<dyn Subscribe>, Arc<Mutex<Vec<EventKind>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sub: Arc<dyn Subscribe> = Arc::new(Collect {
            seen: Arc::clone(&seen),
            terminal_only,
        });
        (sub, seen)
    }

    #[tokio::test]
    async fn test_lane_preserves_order() {
        let (sub, seen) = collector(false);
        let set = SubscriberSet::new(vec![sub], Bus::new(8));
        assert_eq!(set.len(), 1);

        set.emit(&Event::new(EventKind::ProducerStarted));
        set.emit(&Event::new(EventKind::ProducerExhausted));
        set.shutdown().await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![EventKind::ProducerStarted, EventKind::ProducerExhausted]
        );
    }

    #[tokio::test]
    async fn test_wants_filters_before_queueing() {
        let (all, seen_all) = collector(false);
        let (terminal, seen_terminal) = collector(true);
        let set = SubscriberSet::new(vec![all, terminal], Bus::new(8));

        set.emit(&Event::new(EventKind::ProducerStarted));
        set.emit(&Event::new(EventKind::ProducerCancelled));
        set.shutdown().await;

        assert_eq!(seen_all.lock().unwrap().len(), 2);
        assert_eq!(*seen_terminal.lock().unwrap(), vec![EventKind::ProducerCancelled]);
    }

    #[tokio::test]
    async fn test_panic_is_reported_on_bus() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();
        let set = SubscriberSet::new(vec![Arc::new(Boom)], bus.clone());

        set.emit(&Event::new(EventKind::ProducerStarted));
        set.shutdown().await;

        let ev = rx.recv().await.unwrap();
        assert!(ev.is_subscriber_panic());
        assert_eq!(ev.bridge.as_deref(), Some("boom"));
        assert_eq!(ev.reason.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn test_full_lane_reports_overflow() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();
        let set = SubscriberSet::new(vec![Arc::new(Stalled)], bus.clone());

        // The worker has not run yet: the first event fills the queue.
        for _ in 0..3 {
            set.emit(&Event::new(EventKind::ProducerStarted));
        }

        let ev = rx.recv().await.unwrap();
        assert_eq!(ev.kind, EventKind::SubscriberOverflow);
        assert_eq!(ev.bridge.as_deref(), Some("stalled"));
        assert_eq!(ev.reason.as_deref(), Some("subscriber=stalled reason=full"));
    }
}
