//! # Pull cursor over a push sequence.
//!
//! [`Pull`] drives a sequence on a dedicated thread and hands out one element
//! per [`Iterator::next`] call. The worker computes an element only after it
//! has been asked for one, so the source never runs ahead of the reader.
//!
//! ```text
//! reader                     worker thread
//!   next() ── request ──────► drive: produce e0
//!          ◄───── e0 ──────── wait for request
//!   next() ── request ──────► produce e1
//!          ◄───── e1 ──────── wait for request
//!   drop   ── (closed) ─────► consumer returns false, drive ends
//! ```
//!
//! No runtime is involved; this is the synchronous counterpart of
//! [`to_chan`](crate::bridge::to_chan).

use std::panic;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use crate::error::{BridgeError, panic_message};
use crate::{Seq, Seq2};

/// Iterator that pulls elements out of a sequence running on its own thread.
///
/// Dropping the cursor releases the worker: its next wait for a request fails
/// and the traversal stops. Use [`Pull::stop`] to also wait for it.
#[must_use = "the worker thread idles until the cursor is read or dropped"]
pub struct Pull<T> {
    requests: Option<mpsc::Sender<()>>,
    items: mpsc::Receiver<T>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Pull<T> {
    pub(crate) fn spawn<S>(mut seq: S) -> Result<Self, BridgeError>
    where
        S: Seq<Item = T> + Send + 'static,
    {
        let (req_tx, req_rx) = mpsc::channel::<()>();
        let (item_tx, item_rx) = mpsc::channel::<T>();

        let worker = thread::Builder::new()
            .name("seqflow-pull".to_string())
            .spawn(move || {
                if req_rx.recv().is_err() {
                    return;
                }
                seq.drive(|x| item_tx.send(x).is_ok() && req_rx.recv().is_ok());
            })
            .map_err(BridgeError::Spawn)?;

        Ok(Self {
            requests: Some(req_tx),
            items: item_rx,
            worker: Some(worker),
        })
    }
}

impl<T> Pull<T> {
    /// Stops the traversal and waits for the worker thread to return.
    ///
    /// A source that panicked is reported as [`BridgeError::ProducerPanicked`].
    pub fn stop(mut self) -> Result<(), BridgeError> {
        self.requests = None;
        match self.worker.take() {
            Some(worker) => worker.join().map_err(|payload| BridgeError::ProducerPanicked {
                info: panic_message(&*payload),
            }),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> Option<T> {
        self.requests = None;
        if let Some(worker) = self.worker.take() {
            if let Err(payload) = worker.join() {
                panic::resume_unwind(payload);
            }
        }
        None
    }
}

impl<T> Iterator for Pull<T> {
    type Item = T;

    /// Asks the worker for the next element and waits for it.
    ///
    /// # Panics
    /// Re-raises a panic from the source on the reading thread.
    fn next(&mut self) -> Option<T> {
        let requests = self.requests.as_ref()?;
        if requests.send(()).is_err() {
            return self.finish();
        }
        match self.items.recv() {
            Ok(x) => Some(x),
            Err(_) => self.finish(),
        }
    }
}

impl<T> std::iter::FusedIterator for Pull<T> {}

/// Starts a [`Pull`] cursor over `seq`.
pub fn pull<S>(seq: S) -> Result<Pull<S::Item>, BridgeError>
where
    S: Seq + Send + 'static,
    S::Item: Send + 'static,
{
    Pull::spawn(seq)
}

/// Starts a [`Pull`] cursor over a paired sequence, yielding `(key, value)` tuples.
pub fn pull2<S>(seq: S) -> Result<Pull<(S::Key, S::Value)>, BridgeError>
where
    S: Seq2 + Send + 'static,
    S::Key: Send + 'static,
    S::Value: Send + 'static,
{
    seq.pull()
}
