//! # Type-erased sequences
//!
//! Every adapter returns its own concrete type, so pipelines built from
//! different adapters cannot share a container. [`BoxSeq`] erases the type
//! behind the object-safe [`DynSeq`] trait (the generic `drive` of [`Seq`] is not
//! object safe). Boxed sequences are `Send` so they can cross into the bridge.

use super::{Seq, Seq2};

/// Object-safe view of a [`Seq`].
pub trait DynSeq<T> {
    /// Drives the sequence with a borrowed consumer.
    fn drive_dyn(&mut self, consumer: &mut dyn FnMut(T) -> bool);
}

impl<S: Seq> DynSeq<S::Item> for S {
    fn drive_dyn(&mut self, consumer: &mut dyn FnMut(S::Item) -> bool) {
        self.drive(consumer)
    }
}

/// Boxed, type-erased single-element sequence.
pub struct BoxSeq<'a, T> {
    inner: Box<dyn DynSeq<T> + Send + 'a>,
}

impl<'a, T> BoxSeq<'a, T> {
    /// Boxes `seq`. Same as [`Seq::boxed`].
    pub fn new<S>(seq: S) -> Self
    where
        S: Seq<Item = T> + Send + 'a,
    {
        Self {
            inner: Box::new(seq),
        }
    }
}

impl<T> Seq for BoxSeq<'_, T> {
    type Item = T;

    fn drive<F>(&mut self, mut consumer: F)
    where
        F: FnMut(T) -> bool,
    {
        self.inner.drive_dyn(&mut consumer)
    }
}

/// Object-safe view of a [`Seq2`].
pub trait DynSeq2<K, V> {
    /// Drives the paired sequence with a borrowed consumer.
    fn drive_dyn(&mut self, consumer: &mut dyn FnMut(K, V) -> bool);
}

impl<S: Seq2> DynSeq2<S::Key, S::Value> for S {
    fn drive_dyn(&mut self, consumer: &mut dyn FnMut(S::Key, S::Value) -> bool) {
        self.drive(consumer)
    }
}

/// Boxed, type-erased paired sequence.
pub struct BoxSeq2<'a, K, V> {
    inner: Box<dyn DynSeq2<K, V> + Send + 'a>,
}

impl<'a, K, V> BoxSeq2<'a, K, V> {
    /// Boxes `seq`. Same as [`Seq2::boxed`].
    pub fn new<S>(seq: S) -> Self
    where
        S: Seq2<Key = K, Value = V> + Send + 'a,
    {
        Self {
            inner: Box::new(seq),
        }
    }
}

impl<K, V> Seq2 for BoxSeq2<'_, K, V> {
    type Key = K;
    type Value = V;

    fn drive<F>(&mut self, mut consumer: F)
    where
        F: FnMut(K, V) -> bool,
    {
        self.inner.drive_dyn(&mut consumer)
    }
}
