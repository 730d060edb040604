//! # Channel bridge.
//!
//! Runs a sequence on a background blocking thread and exposes its elements as a
//! bounded tokio channel, under a [`CancellationToken`] owned by the caller.
//!
//! ```text
//! to_chan(seq, token)
//!     │
//!     └─► spawn_blocking ── producer ─────────────────────────────┐
//!            seq.drive(|x| {                                      │
//!               token fired?          → stop (Cancelled)          │
//!               select! {                                         │
//!                 token.cancelled()   → stop (Cancelled)          │
//!                 tx.send(x)          → continue                  │
//!                           (closed)  → stop (ReceiverClosed)     │
//!               }                                                 │
//!            })                        → (Exhausted)              │
//!            drop(tx)  ─── channel closed exactly once ───────────┘
//!
//! reader: bridge.recv().await / Stream  ◄── mpsc (capacity 1 by default)
//! ```
//!
//! ## Rules
//! - The producer is the only sender; the channel closes when it returns.
//! - A send blocked on a full buffer is abandoned as soon as the token fires,
//!   so a reader that stops reading and cancels never strands the producer.
//! - Dropping the reader also ends production at the next send.
//! - Cancellation wins over a send that could complete at the same moment.
//! - The producer never runs on an async worker thread.
//!
//! ## Events
//! Bridges built through [`BridgeBuilder::with_subscribers`] publish
//! `ProducerStarted` and one terminal event (`ProducerExhausted`,
//! `ProducerCancelled` or `ReceiverClosed`) carrying the number of delivered
//! elements. A listener task fans them out to the subscribers and finishes after
//! the producer does; [`ProducerHandle::join`] waits for both.
//!
//! ## Example
//! ```rust
//! use seqflow::prelude::*;
//! use seqflow::bridge::{BridgeExit, to_chan};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), seqflow::BridgeError> {
//! let token = CancellationToken::new();
//! let mut bridge = to_chan(iota(0, 1_000_000, 1), token.clone())?;
//!
//! assert_eq!(bridge.recv().await, Some(0));
//! assert_eq!(bridge.recv().await, Some(1));
//!
//! token.cancel();
//! assert_eq!(bridge.join().await?, BridgeExit::Cancelled);
//! # Ok(())
//! # }
//! ```

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::runtime::Handle;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{broadcast, mpsc};
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;

use super::config::BridgeConfig;
use crate::error::{BridgeError, panic_message};
use crate::events::{Bus, Event, EventKind};
use crate::subscribers::{Subscribe, SubscriberSet};
use crate::{Seq, Seq2};

/// How a producer ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeExit {
    /// Every element was delivered.
    Exhausted,
    /// The token fired before the source ran out.
    Cancelled,
    /// The reader went away before the source ran out.
    ReceiverClosed,
}

impl BridgeExit {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            BridgeExit::Exhausted => "exhausted",
            BridgeExit::Cancelled => "cancelled",
            BridgeExit::ReceiverClosed => "receiver_closed",
        }
    }

    fn event_kind(self) -> EventKind {
        match self {
            BridgeExit::Exhausted => EventKind::ProducerExhausted,
            BridgeExit::Cancelled => EventKind::ProducerCancelled,
            BridgeExit::ReceiverClosed => EventKind::ReceiverClosed,
        }
    }
}

/// Exposes `seq` as a channel with the default [`BridgeConfig`] and no subscribers.
///
/// Must be called from within a tokio runtime; otherwise returns
/// [`BridgeError::NoRuntime`].
pub fn to_chan<S>(seq: S, token: CancellationToken) -> Result<Bridge<S::Item>, BridgeError>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    BridgeBuilder::new(BridgeConfig::default()).spawn(seq, token)
}

/// Paired form of [`to_chan`]; elements arrive as `(key, value)` tuples.
pub fn to_chan2<S>(
    seq: S,
    token: CancellationToken,
) -> Result<Bridge<(S::Key, S::Value)>, BridgeError>
where
    S: Seq2 + Send + 'static,
    S::Key: Send + 'static,
    S::Value: Send + 'static,
{
    to_chan(seq.tuples(), token)
}

/// Builder for bridges with custom settings or event subscribers.
pub struct BridgeBuilder {
    cfg: BridgeConfig,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl BridgeBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: BridgeConfig) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Sets event subscribers. With none, no bus or listener is created.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Starts the producer for `seq` and returns the reading side.
    pub fn spawn<S>(self, seq: S, token: CancellationToken) -> Result<Bridge<S::Item>, BridgeError>
    where
        S: Seq + Send + 'static,
        S::Item: Send + 'static,
    {
        let handle = Handle::try_current().map_err(|_| BridgeError::NoRuntime)?;
        let (tx, rx) = mpsc::channel(self.cfg.capacity_clamped());

        let (reporter, listener) = if self.subscribers.is_empty() {
            (None, None)
        } else {
            let bus = Bus::new(self.cfg.bus_capacity_clamped());
            let done = CancellationToken::new();
            let set = SubscriberSet::new(self.subscribers, bus.clone());
            let listener = handle.spawn(listen(bus.subscribe(), set, done.clone()));
            let reporter = Reporter {
                bus,
                name: Arc::from(self.cfg.name.as_ref()),
                _done: done.drop_guard(),
            };
            (Some(reporter), Some(listener))
        };

        let producer = Producer {
            tx,
            token,
            rt: handle.clone(),
            reporter,
        };
        let task = handle.spawn_blocking(move || producer.run(seq));

        Ok(Bridge {
            rx,
            producer: ProducerHandle { task, listener },
        })
    }
}

/// Publishes producer events. Dropping it (on return or unwind) releases the listener.
struct Reporter {
    bus: Bus,
    name: Arc<str>,
    _done: tokio_util::sync::DropGuard,
}

impl Reporter {
    fn publish(&self, kind: EventKind, sent: Option<u64>) {
        let mut ev = Event::new(kind).with_bridge(Arc::clone(&self.name));
        if let Some(n) = sent {
            ev = ev.with_sent(n);
        }
        self.bus.publish(ev);
    }
}

struct Producer<T> {
    tx: mpsc::Sender<T>,
    token: CancellationToken,
    rt: Handle,
    reporter: Option<Reporter>,
}

impl<T: Send> Producer<T> {
    fn run<S>(self, mut seq: S) -> BridgeExit
    where
        S: Seq<Item = T>,
    {
        let Producer {
            tx,
            token,
            rt,
            reporter,
        } = self;
        if let Some(r) = &reporter {
            r.publish(EventKind::ProducerStarted, None);
        }

        let mut exit = BridgeExit::Exhausted;
        let mut sent = 0u64;
        if token.is_cancelled() {
            exit = BridgeExit::Cancelled;
        } else {
            seq.drive(|x| {
                if token.is_cancelled() {
                    exit = BridgeExit::Cancelled;
                    return false;
                }
                let delivered = rt.block_on(async {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => Err(BridgeExit::Cancelled),
                        res = tx.send(x) => res.map_err(|_| BridgeExit::ReceiverClosed),
                    }
                });
                match delivered {
                    Ok(()) => {
                        sent += 1;
                        true
                    }
                    Err(why) => {
                        exit = why;
                        false
                    }
                }
            });
        }
        drop(tx);

        if let Some(r) = &reporter {
            r.publish(exit.event_kind(), Some(sent));
        }
        exit
    }
}

/// Forwards bus events to the subscriber set until the producer is gone.
async fn listen(mut rx: broadcast::Receiver<Event>, set: SubscriberSet, done: CancellationToken) {
    loop {
        tokio::select! {
            biased;
            ev = rx.recv() => match ev {
                Ok(ev) => set.emit(&ev),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            },
            _ = done.cancelled() => break,
        }
    }
    // Whatever the producer published before exiting is already buffered.
    loop {
        match rx.try_recv() {
            Ok(ev) => set.emit(&ev),
            Err(TryRecvError::Lagged(_)) => continue,
            Err(_) => break,
        }
    }
    set.shutdown().await;
}

/// Reading side of a channel bridge.
///
/// Also a [`Stream`] of elements. Dropping it closes the channel, which ends
/// the producer at its next send.
pub struct Bridge<T> {
    rx: mpsc::Receiver<T>,
    producer: ProducerHandle,
}

impl<T> Bridge<T> {
    /// Receives the next element; `None` once the producer has finished and the
    /// buffer is drained.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// `true` once the producer thread has returned.
    pub fn is_finished(&self) -> bool {
        self.producer.is_finished()
    }

    /// Splits into the raw receiver and the producer handle.
    pub fn into_parts(self) -> (mpsc::Receiver<T>, ProducerHandle) {
        (self.rx, self.producer)
    }

    /// Stops reading and waits for the producer (and listener) to finish.
    ///
    /// Dropping the receiver first guarantees the producer cannot stay blocked
    /// on a send.
    pub async fn join(self) -> Result<BridgeExit, BridgeError> {
        let (rx, producer) = self.into_parts();
        drop(rx);
        producer.join().await
    }
}

impl<T> Stream for Bridge<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.rx.poll_recv(cx)
    }
}

/// Completion signal of a bridge producer.
pub struct ProducerHandle {
    task: JoinHandle<BridgeExit>,
    listener: Option<JoinHandle<()>>,
}

impl ProducerHandle {
    /// `true` once the producer thread has returned.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the producer, then for the event listener (if any) to flush
    /// every event to the subscribers.
    ///
    /// A producer failure wins over a listener failure.
    pub async fn join(self) -> Result<BridgeExit, BridgeError> {
        let exit = self.task.await.map_err(join_error);
        let flushed = match self.listener {
            Some(listener) => listener.await.map_err(listener_error),
            None => Ok(()),
        };
        let exit = exit?;
        flushed?;
        Ok(exit)
    }
}

fn join_error(err: JoinError) -> BridgeError {
    if err.is_panic() {
        BridgeError::ProducerPanicked {
            info: panic_message(&*err.into_panic()),
        }
    } else {
        BridgeError::ProducerAborted
    }
}

fn listener_error(err: JoinError) -> BridgeError {
    if err.is_panic() {
        BridgeError::ListenerPanicked {
            info: panic_message(&*err.into_panic()),
        }
    } else {
        BridgeError::ProducerAborted
    }
}
