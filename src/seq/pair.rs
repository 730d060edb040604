//! # The paired (key/value) sequence trait.
//!
//! [`Seq2`] follows the same protocol as [`Seq`](crate::Seq) with a two-argument
//! consumer. It is a parallel abstraction, not `Seq<Item = (K, V)>`: map-like
//! sources hand out keys and values separately. Use [`Seq2::tuples`] and
//! [`Seq::pairs`](crate::Seq::pairs) to move between the two shapes.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::adapters::{
    Chain, Exclude, Filter, FilterMap, Inspect, Keys, Map, Skip, SortedBy, StepBy, Take, Tuples,
    Values,
};
use crate::bridge::{Cancellable, Cancellation, Pull};
use crate::error::BridgeError;
use crate::seq::BoxSeq2;

/// A restartable, push-based producer of key/value pairs.
///
/// ## Example
/// ```rust
/// use seqflow::prelude::*;
///
/// let doubled = from_pairs(vec![(1, "a"), (2, "b")])
///     .map(|k, v| (k * 2, v.repeat(2)))
///     .to_pairs();
/// assert_eq!(doubled, vec![(2, "aa".to_string()), (4, "bb".to_string())]);
/// ```
pub trait Seq2 {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// Pushes pairs into `consumer` until it returns `false` or the source is exhausted.
    fn drive<F>(&mut self, consumer: F)
    where
        F: FnMut(Self::Key, Self::Value) -> bool;

    // ---- Adapters ----

    /// Transforms every pair with `f`.
    fn map<K2, V2, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Key, Self::Value) -> (K2, V2),
    {
        Map::new(self, f)
    }

    /// Keeps pairs matching `pred`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Drops pairs matching `pred`.
    fn exclude<P>(self, pred: P) -> Exclude<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        Exclude::new(self, pred)
    }

    /// Maps and filters pairs in one step.
    fn filter_map<K2, V2, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Key, Self::Value) -> Option<(K2, V2)>,
    {
        FilterMap::new(self, f)
    }

    /// Calls `f` on each pair as it passes through.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Key, &Self::Value),
    {
        Inspect::new(self, f)
    }

    /// Yields at most `n` pairs.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Skips the first `n` pairs.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Yields every `step`-th pair; `0` yields nothing.
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        StepBy::new(self, step)
    }

    /// Yields all of `self`, then all of `other`.
    fn chain<U>(self, other: U) -> Chain<Self, U>
    where
        Self: Sized,
        U: Seq2<Key = Self::Key, Value = Self::Value>,
    {
        Chain::new(self, other)
    }

    /// Keys only.
    fn keys(self) -> Keys<Self>
    where
        Self: Sized,
    {
        Keys::new(self)
    }

    /// Values only.
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values::new(self)
    }

    /// Views the pairs as a [`Seq`](crate::Seq) of tuples.
    fn tuples(self) -> Tuples<Self>
    where
        Self: Sized,
    {
        Tuples::new(self)
    }

    /// Collects, sorts (stable) by `cmp` over both halves, and yields the pairs.
    fn sorted_by<F>(self, cmp: F) -> SortedBy<Self, F>
    where
        Self: Sized,
        F: FnMut(&(Self::Key, Self::Value), &(Self::Key, Self::Value)) -> Ordering,
    {
        SortedBy::new(self, cmp)
    }

    /// Sorted by key.
    fn order_by_key<F>(
        self,
        mut cmp: F,
    ) -> SortedBy<Self, impl FnMut(&(Self::Key, Self::Value), &(Self::Key, Self::Value)) -> Ordering>
    where
        Self: Sized,
        F: FnMut(&Self::Key, &Self::Key) -> Ordering,
    {
        SortedBy::new(self, move |a: &(Self::Key, Self::Value), b: &(Self::Key, Self::Value)| {
            cmp(&a.0, &b.0)
        })
    }

    /// Sorted by value.
    fn order_by_value<F>(
        self,
        mut cmp: F,
    ) -> SortedBy<Self, impl FnMut(&(Self::Key, Self::Value), &(Self::Key, Self::Value)) -> Ordering>
    where
        Self: Sized,
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        SortedBy::new(self, move |a: &(Self::Key, Self::Value), b: &(Self::Key, Self::Value)| {
            cmp(&a.1, &b.1)
        })
    }

    /// Stops producing once `token` is cancelled.
    fn with_cancel<C>(self, token: C) -> Cancellable<Self, C>
    where
        Self: Sized,
        C: Cancellation,
    {
        Cancellable::new(self, token)
    }

    /// Erases the concrete type.
    fn boxed<'a>(self) -> BoxSeq2<'a, Self::Key, Self::Value>
    where
        Self: Sized + Send + 'a,
    {
        BoxSeq2::new(self)
    }

    // ---- Terminal reducers ----

    /// Calls `f` on every pair.
    fn for_each<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Key, Self::Value),
    {
        self.drive(|k, v| {
            f(k, v);
            true
        })
    }

    /// Number of pairs.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut n = 0;
        self.drive(|_, _| {
            n += 1;
            true
        });
        n
    }

    /// Collects the pairs as tuples, in source order.
    fn to_pairs(mut self) -> Vec<(Self::Key, Self::Value)>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        self.drive(|k, v| {
            out.push((k, v));
            true
        });
        out
    }

    /// Collects into a `HashMap`; later keys overwrite earlier ones.
    fn to_map(mut self) -> HashMap<Self::Key, Self::Value>
    where
        Self: Sized,
        Self::Key: Eq + Hash,
    {
        let mut out = HashMap::new();
        self.drive(|k, v| {
            out.insert(k, v);
            true
        });
        out
    }

    /// Folds every pair into an accumulator.
    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Key, Self::Value) -> B,
    {
        crate::Seq::fold(self.tuples(), init, |acc, (k, v)| f(acc, k, v))
    }

    /// Folds using the first pair as the initial accumulator.
    fn reduce<F>(self, f: F) -> Option<(Self::Key, Self::Value)>
    where
        Self: Sized,
        F: FnMut((Self::Key, Self::Value), (Self::Key, Self::Value)) -> (Self::Key, Self::Value),
    {
        crate::Seq::reduce(self.tuples(), f)
    }

    /// First pair matching `pred`.
    fn find<P>(mut self, mut pred: P) -> Option<(Self::Key, Self::Value)>
    where
        Self: Sized,
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        let mut found = None;
        self.drive(|k, v| {
            if pred(&k, &v) {
                found = Some((k, v));
                return false;
            }
            true
        });
        found
    }

    /// `true` if any pair matches `pred`.
    fn any<P>(mut self, mut pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        let mut hit = false;
        self.drive(|k, v| {
            hit = pred(&k, &v);
            !hit
        });
        hit
    }

    /// `true` if every pair matches `pred`.
    fn all<P>(mut self, mut pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        let mut ok = true;
        self.drive(|k, v| {
            ok = pred(&k, &v);
            ok
        });
        ok
    }

    /// Pair at zero-based position `n`.
    fn nth(self, n: usize) -> Option<(Self::Key, Self::Value)>
    where
        Self: Sized,
    {
        crate::Seq::nth(self.tuples(), n)
    }

    /// Runs the sequence on its own thread and reads `(key, value)` tuples as
    /// an iterator. See [`Pull`].
    fn pull(self) -> Result<Pull<(Self::Key, Self::Value)>, BridgeError>
    where
        Self: Sized + Send + 'static,
        Self::Key: Send + 'static,
        Self::Value: Send + 'static,
    {
        Pull::spawn(self.tuples())
    }
}

impl<S: Seq2 + ?Sized> Seq2 for &mut S {
    type Key = S::Key;
    type Value = S::Value;

    fn drive<F>(&mut self, consumer: F)
    where
        F: FnMut(Self::Key, Self::Value) -> bool,
    {
        (**self).drive(consumer)
    }
}
