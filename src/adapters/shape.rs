//! Conversions between single and paired sequences, plus materializing sort.

use std::cmp::Ordering;

use crate::{Seq, Seq2};

/// Keys of a paired sequence. See [`Seq2::keys`].
pub struct Keys<S> {
    inner: S,
}

impl<S> Keys<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Seq2> Seq for Keys<S> {
    type Item = S::Key;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Key) -> bool,
    {
        self.inner.drive(|k, _| consumer(k))
    }
}

/// Values of a paired sequence. See [`Seq2::values`].
pub struct Values<S> {
    inner: S,
}

impl<S> Values<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Seq2> Seq for Values<S> {
    type Item = S::Value;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Value) -> bool,
    {
        self.inner.drive(|_, v| consumer(v))
    }
}

/// Paired sequence viewed as tuples. See [`Seq2::tuples`].
pub struct Tuples<S> {
    inner: S,
}

impl<S> Tuples<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Seq2> Seq for Tuples<S> {
    type Item = (S::Key, S::Value);

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut((S::Key, S::Value)) -> bool,
    {
        self.inner.drive(|k, v| consumer((k, v)))
    }
}

/// Tuple sequence viewed as pairs. See [`Seq::pairs`].
pub struct Pairs<S> {
    inner: S,
}

impl<S> Pairs<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S, K, V> Seq2 for Pairs<S>
where
    S: Seq<Item = (K, V)>,
{
    type Key = K;
    type Value = V;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(K, V) -> bool,
    {
        self.inner.drive(|(k, v)| consumer(k, v))
    }
}

/// Materializes upstream, sorts it, then yields in order.
/// See [`Seq::sorted_by`] and [`Seq2::sorted_by`].
pub struct SortedBy<S, F> {
    inner: S,
    cmp: F,
}

impl<S, F> SortedBy<S, F> {
    pub(crate) fn new(inner: S, cmp: F) -> Self {
        Self { inner, cmp }
    }
}

impl<S, F> Seq for SortedBy<S, F>
where
    S: Seq,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let mut items = (&mut self.inner).to_vec();
        items.sort_by(&mut self.cmp);
        for x in items {
            if !consumer(x) {
                return;
            }
        }
    }
}

impl<S, F> Seq2 for SortedBy<S, F>
where
    S: Seq2,
    F: FnMut(&(S::Key, S::Value), &(S::Key, S::Value)) -> Ordering,
{
    type Key = S::Key;
    type Value = S::Value;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Key, S::Value) -> bool,
    {
        let mut pairs = (&mut self.inner).to_pairs();
        pairs.sort_by(&mut self.cmp);
        for (k, v) in pairs {
            if !consumer(k, v) {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_tuples_pairs_round_trip_shape() {
        let tuples = from_pairs(vec![(1, 'a'), (2, 'b')]).tuples().to_vec();
        assert_eq!(tuples, vec![(1, 'a'), (2, 'b')]);

        let keys = from_iter(vec![(1, 'a'), (2, 'b')]).pairs().keys().to_vec();
        assert_eq!(keys, vec![1, 2]);
    }

    #[test]
    fn test_sorted_by_is_stable() {
        let sorted = from_iter(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')])
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .to_vec();
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_sorted_by_reverse() {
        let desc = from_iter(vec![3, 1, 4, 1, 5]).sorted_by(|a, b| b.cmp(a)).to_vec();
        assert_eq!(desc, vec![5, 4, 3, 1, 1]);
    }
}
