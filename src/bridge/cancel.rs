//! # Cancellable sequences.
//!
//! [`Cancellable`] ties a sequence to an externally owned cancellation signal.
//! The library only reads the signal; it never creates or fires it.
//!
//! ## Rules
//! - A signal already fired before `drive` means the source is never started.
//! - Otherwise the signal is checked once per element, before that element
//!   reaches the consumer.
//! - Cancellation is sticky: every later drive of a wrapper built on a fired
//!   signal yields nothing.
//! - Work happening *inside* the source between two elements is not interrupted.
//!
//! ## Example
//! ```rust
//! use seqflow::prelude::*;
//! use tokio_util::sync::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let t = token.clone();
//! let got = iota(0, 100, 1)
//!     .inspect(move |x| if *x == 2 { t.cancel() })
//!     .with_cancel(token.clone())
//!     .to_vec();
//! assert_eq!(got, vec![0, 1]);
//! assert!(iota(0, 3, 1).with_cancel(token).to_vec().is_empty());
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

use crate::{Seq, Seq2};

/// Read-only view of a cancellation signal.
pub trait Cancellation {
    /// `true` once the signal has fired. Must never flip back to `false`.
    fn is_cancelled(&self) -> bool;
}

impl Cancellation for CancellationToken {
    fn is_cancelled(&self) -> bool {
        CancellationToken::is_cancelled(self)
    }
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<C: Cancellation + ?Sized> Cancellation for &C {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<C: Cancellation + ?Sized> Cancellation for Arc<C> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Sequence that stops once its signal fires.
/// See [`Seq::with_cancel`] and [`Seq2::with_cancel`].
pub struct Cancellable<S, C> {
    inner: S,
    token: C,
}

impl<S, C> Cancellable<S, C> {
    pub(crate) fn new(inner: S, token: C) -> Self {
        Self { inner, token }
    }

    /// The signal this sequence observes.
    pub fn token(&self) -> &C {
        &self.token
    }
}

/// Free-function form of [`Seq::with_cancel`].
pub fn cancellable<S, C>(seq: S, token: C) -> Cancellable<S, C>
where
    S: Seq,
    C: Cancellation,
{
    Cancellable::new(seq, token)
}

impl<S, C> Seq for Cancellable<S, C>
where
    S: Seq,
    C: Cancellation,
{
    type Item = S::Item;

    fn drive<F>(&mut self, mut consumer: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let token = &self.token;
        if token.is_cancelled() {
            return;
        }
        self.inner.drive(|x| !token.is_cancelled() && consumer(x))
    }
}

impl<S, C> Seq2 for Cancellable<S, C>
where
    S: Seq2,
    C: Cancellation,
{
    type Key = S::Key;
    type Value = S::Value;

    fn drive<F>(&mut self, mut consumer: F)
    where
        F: FnMut(S::Key, S::Value) -> bool,
    {
        let token = &self.token;
        if token.is_cancelled() {
            return;
        }
        self.inner.drive(|k, v| !token.is_cancelled() && consumer(k, v))
    }
}
