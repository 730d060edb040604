//! Lockstep combinators: a pushed left side paired with a pulled right side.
//!
//! The right-hand side is any iterator. To pair two sequences, pull the second
//! one: `a.zip(b.pull()?)`. The right iterator lives in the adapter, so a second
//! drive continues where the first one left it.

use std::iter::Fuse;

use crate::{Seq, Seq2};

/// Left and right elements in lockstep. See [`Seq::zip`].
pub struct Zip<S, I> {
    inner: S,
    other: I,
}

impl<S, I> Zip<S, I> {
    pub(crate) fn new(inner: S, other: I) -> Self {
        Self { inner, other }
    }
}

impl<S, I> Seq2 for Zip<S, I>
where
    S: Seq,
    I: Iterator,
{
    type Key = S::Item;
    type Value = I::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item, I::Item) -> bool,
    {
        let other = &mut self.other;
        self.inner.drive(|x| match other.next() {
            Some(y) => consumer(x, y),
            None => false,
        })
    }
}

/// Left and right elements combined by a function. See [`Seq::zip_with`].
pub struct ZipWith<S, I, F> {
    inner: S,
    other: I,
    f: F,
}

impl<S, I, F> ZipWith<S, I, F> {
    pub(crate) fn new(inner: S, other: I, f: F) -> Self {
        Self { inner, other, f }
    }
}

impl<S, I, B, F> Seq for ZipWith<S, I, F>
where
    S: Seq,
    I: Iterator,
    F: FnMut(S::Item, I::Item) -> B,
{
    type Item = B;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(B) -> bool,
    {
        let other = &mut self.other;
        let f = &mut self.f;
        self.inner.drive(|x| match other.next() {
            Some(y) => consumer(f(x, y)),
            None => false,
        })
    }
}

/// Alternating elements, then the rest of the longer side. See [`Seq::interleave`].
pub struct Interleave<S, I> {
    inner: S,
    other: Fuse<I>,
}

impl<S, I: Iterator> Interleave<S, I> {
    pub(crate) fn new(inner: S, other: I) -> Self {
        Self {
            inner,
            other: other.fuse(),
        }
    }
}

impl<S, I> Seq for Interleave<S, I>
where
    S: Seq,
    I: Iterator<Item = S::Item>,
{
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let other = &mut self.other;
        let mut stopped = false;
        self.inner.drive(|x| {
            stopped = !consumer(x);
            if !stopped {
                if let Some(y) = other.next() {
                    stopped = !consumer(y);
                }
            }
            !stopped
        });
        if stopped {
            return;
        }
        for y in other {
            if !consumer(y) {
                return;
            }
        }
    }
}
