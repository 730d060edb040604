//! # The single-element sequence trait.
//!
//! [`Seq`] has one required method, [`Seq::drive`]. Everything else is a
//! provided method that either wraps the sequence in an adapter (lazy, nothing
//! runs until the result is driven) or drives it to produce a value (terminal).
//!
//! ## Rules
//! - A consumer returning `false` stops the traversal: no further elements are
//!   evaluated and no further side effects run.
//! - Adapters keep no state between drives; buffers live inside `drive`.
//! - Malformed sizes (`0` windows, chunks, steps, `k` out of range) yield nothing.
//! - Lockstep operations (`zip`, `interleave`, comparisons) push `self` and pull
//!   the other side from an iterator, one element per element of `self`.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::adapters::{
    Chain, Enumerate, Exclude, Filter, FilterMap, Inspect, Map, MapWhile, Pairs, Scan, Skip,
    SkipWhile, SortedBy, StepBy, Take, TakeWhile,
};
use crate::bridge::{Cancellable, Cancellation, Pull};
use crate::combinators::{
    Chunks, Combinations, Cycle, Dedup, DedupBy, DedupByKey, Flatten, FlattenSeq,
    GroupByAdjacent, Interleave, Intersperse, Permutations, Windows, Zip, ZipWith,
};
use crate::error::BridgeError;
use crate::seq::BoxSeq;

/// A restartable, push-based producer of elements.
///
/// ## Example
/// ```rust
/// use seqflow::prelude::*;
///
/// let squares_of_evens = from_iter(vec![1, 2, 3, 4, 5])
///     .filter(|x| x % 2 == 0)
///     .map(|x| x * x)
///     .to_vec();
/// assert_eq!(squares_of_evens, vec![4, 16]);
/// ```
pub trait Seq {
    /// Element type pushed into the consumer.
    type Item;

    /// Pushes elements into `consumer` in source order until it returns `false`
    /// or the source is exhausted.
    fn drive<F>(&mut self, consumer: F)
    where
        F: FnMut(Self::Item) -> bool;

    // ---- Stateless adapters ----

    /// Transforms every element with `f`.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Keeps elements matching `pred`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Drops elements matching `pred`.
    fn exclude<P>(self, pred: P) -> Exclude<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Exclude::new(self, pred)
    }

    /// Maps and filters in one step: `None` results are skipped.
    fn filter_map<B, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        FilterMap::new(self, f)
    }

    /// Calls `f` on each element as it passes through.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, f)
    }

    /// Yields at most `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Skips the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Yields every `step`-th element starting with the first; `0` yields nothing.
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        StepBy::new(self, step)
    }

    /// Yields elements while `pred` holds, then stops the traversal.
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    /// Skips elements while `pred` holds, then yields the rest.
    fn skip_while<P>(self, pred: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, pred)
    }

    /// Maps elements until `f` returns `None`.
    fn map_while<B, F>(self, f: F) -> MapWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        MapWhile::new(self, f)
    }

    /// Yields the running accumulator after folding each element into it.
    fn scan<B, F>(self, init: B, f: F) -> Scan<Self, B, F>
    where
        Self: Sized,
        B: Clone,
        F: FnMut(&B, Self::Item) -> B,
    {
        Scan::new(self, init, f)
    }

    /// Pairs each element with its index, counting from `start`.
    fn enumerate(self, start: usize) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self, start)
    }

    /// Yields all of `self`, then all of `other`.
    fn chain<U>(self, other: U) -> Chain<Self, U>
    where
        Self: Sized,
        U: Seq<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Views a sequence of `(K, V)` tuples as a [`Seq2`](crate::Seq2).
    fn pairs<K, V>(self) -> Pairs<Self>
    where
        Self: Sized + Seq<Item = (K, V)>,
    {
        Pairs::new(self)
    }

    /// Collects, sorts (stable) with `cmp`, and yields the sorted elements.
    fn sorted_by<F>(self, cmp: F) -> SortedBy<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        SortedBy::new(self, cmp)
    }

    /// Stops producing once `token` is cancelled. See [`Cancellable`].
    fn with_cancel<C>(self, token: C) -> Cancellable<Self, C>
    where
        Self: Sized,
        C: Cancellation,
    {
        Cancellable::new(self, token)
    }

    /// Erases the concrete type.
    fn boxed<'a>(self) -> BoxSeq<'a, Self::Item>
    where
        Self: Sized + Send + 'a,
    {
        BoxSeq::new(self)
    }

    // ---- Stateful combinators ----

    /// Sliding windows of exactly `n` consecutive elements (step 1).
    fn windows(self, n: usize) -> Windows<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Windows::new(self, n)
    }

    /// Disjoint chunks of up to `n` elements; the last one may be shorter.
    fn chunks(self, n: usize) -> Chunks<Self>
    where
        Self: Sized,
    {
        Chunks::new(self, n)
    }

    /// Maximal runs of adjacent elements for which `same(last, next)` holds.
    fn group_by_adjacent<F>(self, same: F) -> GroupByAdjacent<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        GroupByAdjacent::new(self, same)
    }

    /// Drops elements equal to the previously yielded one.
    fn dedup(self) -> Dedup<Self>
    where
        Self: Sized,
        Self::Item: Clone + PartialEq,
    {
        Dedup::new(self)
    }

    /// Drops elements `same` considers equivalent to the previously yielded one.
    fn dedup_by<F>(self, same: F) -> DedupBy<Self, F>
    where
        Self: Sized,
        Self::Item: Clone,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        DedupBy::new(self, same)
    }

    /// Drops elements whose key equals the key of the previously yielded one.
    fn dedup_by_key<K, F>(self, key: F) -> DedupByKey<Self, F>
    where
        Self: Sized,
        K: PartialEq,
        F: FnMut(&Self::Item) -> K,
    {
        DedupByKey::new(self, key)
    }

    /// Places a clone of `sep` between consecutive elements.
    fn intersperse(self, sep: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intersperse::new(self, sep)
    }

    /// Re-drives the sequence forever; an empty sequence yields nothing.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized,
    {
        Cycle::new(self)
    }

    /// All `k`-element combinations in lexicographic index order.
    fn combinations(self, k: usize) -> Combinations<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Combinations::new(self, k)
    }

    /// All full-length permutations (Heap's order).
    fn permutations(self) -> Permutations<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Permutations::new(self)
    }

    /// Flattens a sequence of collections.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoIterator,
    {
        Flatten::new(self)
    }

    /// Flattens a sequence of sequences.
    fn flatten_seq(self) -> FlattenSeq<Self>
    where
        Self: Sized,
        Self::Item: Seq,
    {
        FlattenSeq::new(self)
    }

    // ---- Lockstep ----

    /// Pairs each element with the next element of `other`; ends with the
    /// shorter side.
    ///
    /// ```rust
    /// use seqflow::prelude::*;
    ///
    /// let pairs = from_iter(vec![1, 2, 3]).zip(vec!["a", "b"]).to_pairs();
    /// assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    /// ```
    fn zip<I>(self, other: I) -> Zip<Self, I::IntoIter>
    where
        Self: Sized,
        I: IntoIterator,
    {
        Zip::new(self, other.into_iter())
    }

    /// Combines each element with the next element of `other` using `f`.
    fn zip_with<I, B, F>(self, other: I, f: F) -> ZipWith<Self, I::IntoIter, F>
    where
        Self: Sized,
        I: IntoIterator,
        F: FnMut(Self::Item, I::Item) -> B,
    {
        ZipWith::new(self, other.into_iter(), f)
    }

    /// Alternates elements of `self` and `other`, then yields what is left of
    /// the longer one.
    fn interleave<I>(self, other: I) -> Interleave<Self, I::IntoIter>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
    {
        Interleave::new(self, other.into_iter())
    }

    /// Runs the sequence on its own thread and reads it as an iterator.
    /// See [`Pull`].
    fn pull(self) -> Result<Pull<Self::Item>, BridgeError>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        Pull::spawn(self)
    }

    /// Lexicographic comparison with `other` using `cmp` per element pair.
    ///
    /// Stops at the first unequal pair. A sequence that is a strict prefix of
    /// the other compares as `Less`.
    fn cmp_by<I, F>(mut self, other: I, mut cmp: F) -> Ordering
    where
        Self: Sized,
        I: IntoIterator,
        F: FnMut(Self::Item, I::Item) -> Ordering,
    {
        let mut other = other.into_iter();
        let mut decided = None;
        self.drive(|x| {
            let ord = match other.next() {
                Some(y) => cmp(x, y),
                None => Ordering::Greater,
            };
            if ord != Ordering::Equal {
                decided = Some(ord);
            }
            decided.is_none()
        });
        match decided {
            Some(ord) => ord,
            None if other.next().is_some() => Ordering::Less,
            None => Ordering::Equal,
        }
    }

    /// Lexicographic comparison with `other` by the element order.
    fn cmp<I>(self, other: I) -> Ordering
    where
        Self: Sized,
        Self::Item: Ord,
        I: IntoIterator<Item = Self::Item>,
    {
        self.cmp_by(other, |a, b| Ord::cmp(&a, &b))
    }

    /// `true` if both sides have the same length and `eq` holds for every pair.
    /// Stops at the first mismatch.
    fn eq_by<I, F>(mut self, other: I, mut eq: F) -> bool
    where
        Self: Sized,
        I: IntoIterator,
        F: FnMut(Self::Item, I::Item) -> bool,
    {
        let mut other = other.into_iter();
        let mut equal = true;
        self.drive(|x| {
            equal = match other.next() {
                Some(y) => eq(x, y),
                None => false,
            };
            equal
        });
        equal && other.next().is_none()
    }

    /// `true` if both sides yield equal elements.
    fn eq<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoIterator,
        Self::Item: PartialEq<I::Item>,
    {
        self.eq_by(other, |a, b| a == b)
    }

    /// `true` if `self` sorts strictly before `other` under `less`.
    fn lt_by<I, F>(self, other: I, less: F) -> bool
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.cmp_by(other, ordering_from(less)) == Ordering::Less
    }

    /// `true` if `self` sorts before or equal to `other` under `less`.
    fn le_by<I, F>(self, other: I, less: F) -> bool
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.cmp_by(other, ordering_from(less)) != Ordering::Greater
    }

    /// `true` if `self` sorts strictly after `other` under `less`.
    fn gt_by<I, F>(self, other: I, less: F) -> bool
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.cmp_by(other, ordering_from(less)) == Ordering::Greater
    }

    /// `true` if `self` sorts after or equal to `other` under `less`.
    fn ge_by<I, F>(self, other: I, less: F) -> bool
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.cmp_by(other, ordering_from(less)) != Ordering::Less
    }

    // ---- Terminal reducers ----

    /// Calls `f` on every element.
    fn for_each<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.drive(|x| {
            f(x);
            true
        })
    }

    /// Number of elements.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut n = 0;
        self.drive(|_| {
            n += 1;
            true
        });
        n
    }

    /// Collects every element into a `Vec`.
    fn to_vec(mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        self.drive(|x| {
            out.push(x);
            true
        });
        out
    }

    /// Folds every element into an accumulator.
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = Some(init);
        self.drive(|x| {
            if let Some(a) = acc.take() {
                acc = Some(f(a, x));
            }
            true
        });
        match acc {
            Some(a) => a,
            // `f` unwinds past `drive` before the slot could stay empty.
            None => unreachable!("fold accumulator missing"),
        }
    }

    /// Folds using the first element as the initial accumulator.
    fn reduce<F>(mut self, mut f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut acc: Option<Self::Item> = None;
        self.drive(|x| {
            acc = Some(match acc.take() {
                Some(a) => f(a, x),
                None => x,
            });
            true
        });
        acc
    }

    /// First element matching `pred`.
    fn find<P>(mut self, mut pred: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        self.drive(|x| {
            if pred(&x) {
                found = Some(x);
                return false;
            }
            true
        });
        found
    }

    /// `true` if any element matches `pred`.
    fn any<P>(mut self, mut pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut hit = false;
        self.drive(|x| {
            hit = pred(&x);
            !hit
        });
        hit
    }

    /// `true` if every element matches `pred` (vacuously true when empty).
    fn all<P>(mut self, mut pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut ok = true;
        self.drive(|x| {
            ok = pred(&x);
            ok
        });
        ok
    }

    /// `true` if some element equals `needle`.
    fn contains(self, needle: &Self::Item) -> bool
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.any(|x| x == needle)
    }

    /// Element at zero-based position `n`.
    fn nth(mut self, n: usize) -> Option<Self::Item>
    where
        Self: Sized,
    {
        let mut index = 0;
        let mut found = None;
        self.drive(|x| {
            if index == n {
                found = Some(x);
                return false;
            }
            index += 1;
            true
        });
        found
    }

    /// Last element.
    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        let mut last = None;
        self.drive(|x| {
            last = Some(x);
            true
        });
        last
    }

    /// Index of the first element matching `pred`.
    fn position<P>(mut self, mut pred: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut index = 0;
        let mut found = None;
        self.drive(|x| {
            if pred(&x) {
                found = Some(index);
                return false;
            }
            index += 1;
            true
        });
        found
    }

    /// Index of the last element matching `pred`. Drives the whole sequence.
    fn rposition<P>(mut self, mut pred: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut index = 0;
        let mut found = None;
        self.drive(|x| {
            if pred(&x) {
                found = Some(index);
            }
            index += 1;
            true
        });
        found
    }

    /// Minimum by `cmp`; the first of several equal minima wins.
    fn min_by<F>(self, mut cmp: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|best, x| match cmp(&x, &best) {
            Ordering::Less => x,
            _ => best,
        })
    }

    /// Maximum by `cmp`; the last of several equal maxima wins.
    fn max_by<F>(self, mut cmp: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|best, x| match cmp(&x, &best) {
            Ordering::Less => best,
            _ => x,
        })
    }

    /// Counts matching and non-matching elements. Absent classes are omitted.
    fn count_by<P>(mut self, mut pred: P) -> HashMap<bool, usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut counts = HashMap::new();
        self.drive(|x| {
            *counts.entry(pred(&x)).or_insert(0) += 1;
            true
        });
        counts
    }

    /// Occurrences of each distinct element.
    fn counter(mut self) -> HashMap<Self::Item, usize>
    where
        Self: Sized,
        Self::Item: Eq + Hash,
    {
        let mut counts = HashMap::new();
        self.drive(|x| {
            *counts.entry(x).or_insert(0) += 1;
            true
        });
        counts
    }

    /// Splits into (matching, non-matching), each in source order.
    fn partition<P>(mut self, mut pred: P) -> (Vec<Self::Item>, Vec<Self::Item>)
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut left = Vec::new();
        let mut right = Vec::new();
        self.drive(|x| {
            if pred(&x) {
                left.push(x);
            } else {
                right.push(x);
            }
            true
        });
        (left, right)
    }

    /// `true` if every element matching `pred` precedes every element that does not.
    fn is_partitioned<P>(mut self, mut pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut in_tail = false;
        let mut ok = true;
        self.drive(|x| {
            if pred(&x) {
                if in_tail {
                    ok = false;
                    return false;
                }
            } else {
                in_tail = true;
            }
            true
        });
        ok
    }
}

fn ordering_from<T, F>(mut less: F) -> impl FnMut(T, T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    move |a, b| {
        if less(&a, &b) {
            Ordering::Less
        } else if less(&b, &a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<S: Seq + ?Sized> Seq for &mut S {
    type Item = S::Item;

    fn drive<F>(&mut self, consumer: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        (**self).drive(consumer)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::prelude::*;

    #[test]
    fn test_stop_signal_halts_side_effects() {
        let evaluated = Cell::new(0);
        let mut seq = from_iter(vec![1, 2, 3, 4, 5]).inspect(|_| evaluated.set(evaluated.get() + 1));

        let mut seen = Vec::new();
        seq.drive(|x| {
            seen.push(x);
            x != 3
        });

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(evaluated.get(), 3);
    }

    #[test]
    fn test_drive_through_mut_reference_restarts() {
        let mut seq = from_iter(vec!['a', 'b', 'c']);
        assert_eq!((&mut seq).take(2).to_vec(), vec!['a', 'b']);
        assert_eq!(seq.to_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_fold_and_reduce() {
        assert_eq!(from_iter(vec![1, 2, 3, 4]).fold(0, |a, x| a + x), 10);
        assert_eq!(from_iter(vec![1, 2, 3, 4]).reduce(|a, x| a * x), Some(24));
        assert_eq!(empty::<i32>().reduce(|a, x| a + x), None);
    }

    #[test]
    fn test_find_any_all_contains() {
        let s = || from_iter(vec![1, 2, 3, 4, 5]);
        assert_eq!(s().find(|x| *x > 3), Some(4));
        assert_eq!(s().find(|x| *x > 9), None);
        assert!(s().any(|x| *x == 5));
        assert!(!s().any(|x| *x == 6));
        assert!(s().all(|x| *x > 0));
        assert!(!s().all(|x| *x < 5));
        assert!(empty::<i32>().all(|_| false));
        assert!(s().contains(&2));
        assert!(!s().contains(&7));
    }

    #[test]
    fn test_any_stops_at_first_hit() {
        let visited = Cell::new(0);
        let hit = from_iter(vec![1, 2, 3, 4])
            .inspect(|_| visited.set(visited.get() + 1))
            .any(|x| *x == 2);
        assert!(hit);
        assert_eq!(visited.get(), 2);
    }

    #[test]
    fn test_nth_last_count() {
        let s = || from_iter(vec![10, 20, 30]);
        assert_eq!(s().nth(1), Some(20));
        assert_eq!(s().nth(3), None);
        assert_eq!(s().last(), Some(30));
        assert_eq!(s().count(), 3);
    }

    #[test]
    fn test_position_and_rposition() {
        assert_eq!(from_iter(vec![1, 2, 3, 4, 5]).position(|x| *x == 3), Some(2));
        assert_eq!(from_iter(vec![1, 2, 3, 4, 5]).position(|x| *x == 10), None);
        assert_eq!(from_iter(vec![1, 2, 3, 2, 5]).rposition(|x| *x == 2), Some(3));
        assert_eq!(from_iter(vec![1, 2, 3]).rposition(|x| *x == 10), None);
    }

    #[test]
    fn test_min_by_max_by() {
        let s = || from_iter(vec![3, 1, 4, 1, 5]);
        assert_eq!(s().min_by(|a, b| a.cmp(b)), Some(1));
        assert_eq!(s().max_by(|a, b| a.cmp(b)), Some(5));
        assert_eq!(empty::<i32>().min_by(|a, b| a.cmp(b)), None);

        let firsts = from_iter(vec![(1, 'a'), (0, 'b'), (0, 'c'), (2, 'd'), (2, 'e')]);
        assert_eq!(firsts.min_by(|a, b| a.0.cmp(&b.0)), Some((0, 'b')));
        let lasts = from_iter(vec![(1, 'a'), (2, 'd'), (2, 'e')]);
        assert_eq!(lasts.max_by(|a, b| a.0.cmp(&b.0)), Some((2, 'e')));
    }

    #[test]
    fn test_count_by_and_counter() {
        let counts = from_iter(vec![1, 2, 3, 4, 5]).count_by(|x| x % 2 == 0);
        assert_eq!(counts.get(&true), Some(&2));
        assert_eq!(counts.get(&false), Some(&3));
        assert!(empty::<i32>().count_by(|x| x % 2 == 0).is_empty());

        let freq = from_iter(vec![1, 2, 1, 3, 2, 1]).counter();
        assert_eq!(freq[&1], 3);
        assert_eq!(freq[&2], 2);
        assert_eq!(freq[&3], 1);
    }

    #[test]
    fn test_partition_and_is_partitioned() {
        let (even, odd) = from_iter(vec![1, 2, 3, 4, 5]).partition(|x| x % 2 == 0);
        assert_eq!(even, vec![2, 4]);
        assert_eq!(odd, vec![1, 3, 5]);

        assert!(from_iter(vec![2, 4, 1, 3, 5]).is_partitioned(|x| x % 2 == 0));
        assert!(!from_iter(vec![1, 2, 3, 4, 5]).is_partitioned(|x| x % 2 == 0));
        assert!(empty::<i32>().is_partitioned(|x| x % 2 == 0));
    }

    #[test]
    fn test_for_each_visits_all() {
        let mut sum = 0;
        from_iter(vec![1, 2, 3]).for_each(|x| sum += x);
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_cmp_by_lexicographic() {
        use std::cmp::Ordering;

        let s = |v: Vec<i32>| from_iter(v);
        assert_eq!(s(vec![1, 2, 3]).cmp(vec![1, 2, 3]), Ordering::Equal);
        assert_eq!(s(vec![1, 2]).cmp(vec![1, 3]), Ordering::Less);
        assert_eq!(s(vec![1, 3]).cmp(vec![1, 2]), Ordering::Greater);
        assert_eq!(s(vec![1, 2]).cmp(vec![1, 2, 3]), Ordering::Less);
        assert_eq!(s(vec![1, 2, 3]).cmp(vec![1, 2]), Ordering::Greater);
        assert_eq!(empty::<i32>().cmp(Vec::new()), Ordering::Equal);

        let by_len = from_iter(vec!["aa", "b"]).cmp_by(vec!["x", "yy"], |a, b| a.len().cmp(&b.len()));
        assert_eq!(by_len, Ordering::Greater);
    }

    #[test]
    fn test_cmp_stops_at_first_difference() {
        let visited = Cell::new(0);
        let ord = from_iter(vec![1, 9, 3, 4])
            .inspect(|_| visited.set(visited.get() + 1))
            .cmp(vec![1, 2, 3, 4]);
        assert_eq!(ord, std::cmp::Ordering::Greater);
        assert_eq!(visited.get(), 2);
    }

    #[test]
    fn test_eq_and_eq_by() {
        assert!(from_iter(vec![1, 2, 3]).eq(vec![1, 2, 3]));
        assert!(!from_iter(vec![1, 2, 3]).eq(vec![1, 2, 4]));
        assert!(!from_iter(vec![1, 2]).eq(vec![1, 2, 3]));
        assert!(!from_iter(vec![1, 2, 3]).eq(vec![1, 2]));
        assert!(empty::<i32>().eq(Vec::<i32>::new()));
        assert!(!empty::<i32>().eq(vec![1]));
        assert!(from_iter(vec![vec![1, 2], vec![3, 4]]).eq(vec![vec![1, 2], vec![3, 4]]));

        let same_len = |a: &str, b: &str| a.len() == b.len();
        assert!(from_iter(vec!["a", "bb"]).eq_by(vec!["x", "yy"], same_len));
        assert!(!from_iter(vec!["a", "bb"]).eq_by(vec!["x", "yyy"], same_len));
        assert!(!from_iter(vec!["a", "bb"]).eq_by(vec!["x", "yy", "zzz"], same_len));
        assert!(from_iter(vec!["Hello", "WORLD"]).eq_by(vec!["hello", "world"], |a: &str, b: &str| {
            a.eq_ignore_ascii_case(b)
        }));
    }

    #[test]
    fn test_eq_by_counts_every_pair_when_equal() {
        let calls = Cell::new(0);
        let equal = from_iter(vec!["a", "bb", "ccc"]).eq_by(vec!["x", "yy", "ddd"], |a: &str, b: &str| {
            calls.set(calls.get() + 1);
            a.len() == b.len()
        });
        assert!(equal);
        assert_eq!(calls.get(), 3);

        calls.set(0);
        let equal = from_iter(vec!["a", "bb", "ccc"]).eq_by(vec!["x", "yyy", "dddd"], |a: &str, b: &str| {
            calls.set(calls.get() + 1);
            a.len() == b.len()
        });
        assert!(!equal);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_ordering_predicates_with_less() {
        let less = |a: &i32, b: &i32| a < b;
        let s = |v: Vec<i32>| from_iter(v);

        assert!(s(vec![1, 2]).lt_by(vec![1, 3], less));
        assert!(!s(vec![1, 3]).lt_by(vec![1, 2], less));
        assert!(s(vec![1, 2]).lt_by(vec![1, 2, 3], less));
        assert!(!s(vec![1, 2]).lt_by(vec![1, 2], less));

        assert!(s(vec![1, 2]).le_by(vec![1, 2], less));
        assert!(s(vec![1, 2]).le_by(vec![1, 2, 3], less));
        assert!(!s(vec![1, 2, 3]).le_by(vec![1, 2], less));
        assert!(s(vec![1, 1]).le_by(vec![1, 2], less));
        assert!(s(vec![]).le_by(vec![], less));

        assert!(s(vec![1, 3]).gt_by(vec![1, 2], less));
        assert!(!s(vec![1, 2]).gt_by(vec![1, 2], less));

        assert!(s(vec![1, 2]).ge_by(vec![1, 2], less));
        assert!(s(vec![1, 2, 3]).ge_by(vec![1, 2], less));
        assert!(!s(vec![1, 2]).ge_by(vec![1, 2, 3], less));
        assert!(s(vec![]).ge_by(vec![], less));
    }
}
