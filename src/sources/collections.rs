use crate::{Seq, Seq2};

/// Restartable source over a cloneable collection. See [`from_iter`].
#[derive(Clone, Debug)]
pub struct FromIter<I> {
    items: I,
}

/// Wraps any cloneable `IntoIterator` as a restartable sequence.
///
/// Every drive iterates a fresh clone, so pass a borrow (`&vec`, `&map`) when
/// cloning the owner would be expensive.
///
/// ```rust
/// use seqflow::prelude::*;
///
/// let names = vec!["ann", "bob"];
/// let mut seq = from_iter(&names);
/// assert_eq!((&mut seq).count(), 2);
/// assert_eq!(seq.to_vec(), vec![&"ann", &"bob"]);
/// ```
pub fn from_iter<I>(items: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter { items }
}

impl<I> Seq for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(I::Item) -> bool,
    {
        for x in self.items.clone() {
            if !consumer(x) {
                return;
            }
        }
    }
}

/// Reverse-order source over a borrowed slice. See [`from_slice_rev`].
#[derive(Clone, Debug)]
pub struct FromSliceRev<'a, T> {
    items: &'a [T],
}

/// Yields clones of the slice elements from last to first.
pub fn from_slice_rev<T: Clone>(items: &[T]) -> FromSliceRev<'_, T> {
    FromSliceRev { items }
}

impl<T: Clone> Seq for FromSliceRev<'_, T> {
    type Item = T;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(T) -> bool,
    {
        for x in self.items.iter().rev() {
            if !consumer(x.clone()) {
                return;
            }
        }
    }
}

/// Restartable paired source. See [`from_pairs`] and [`from_map`].
#[derive(Clone, Debug)]
pub struct FromPairs<I> {
    items: I,
}

/// Wraps a cloneable collection of `(K, V)` tuples as a [`Seq2`], in source order.
pub fn from_pairs<I, K, V>(items: I) -> FromPairs<I>
where
    I: IntoIterator<Item = (K, V)> + Clone,
{
    FromPairs { items }
}

/// Wraps a map as a [`Seq2`].
///
/// Pass `&map` to iterate borrowed keys and values without cloning the map.
/// Order follows the map's own iteration order (arbitrary for `HashMap`).
pub fn from_map<M, K, V>(map: M) -> FromPairs<M>
where
    M: IntoIterator<Item = (K, V)> + Clone,
{
    FromPairs { items: map }
}

impl<I, K, V> Seq2 for FromPairs<I>
where
    I: IntoIterator<Item = (K, V)> + Clone,
{
    type Key = K;
    type Value = V;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(K, V) -> bool,
    {
        for (k, v) in self.items.clone() {
            if !consumer(k, v) {
                return;
            }
        }
    }
}

/// One-shot source pulling from an iterator. See [`drain`].
#[derive(Debug)]
pub struct Drain<I> {
    iter: I,
}

/// Adapts a "has more / take next" resource as a one-shot sequence.
///
/// A drive that stops early leaves the remaining elements in the iterator; the
/// next drive resumes from there. After exhaustion, drives yield nothing.
pub fn drain<I: Iterator>(iter: I) -> Drain<I> {
    Drain { iter }
}

impl<I: Iterator> Seq for Drain<I> {
    type Item = I::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(I::Item) -> bool,
    {
        for x in self.iter.by_ref() {
            if !consumer(x) {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};
    use std::sync::mpsc;

    use crate::prelude::*;

    #[test]
    fn test_from_iter_restartable() {
        let mut seq = from_iter(vec![1, 2, 3, 4, 5]);
        assert_eq!((&mut seq).to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
        assert!(from_iter(Vec::<i32>::new()).to_vec().is_empty());
    }

    #[test]
    fn test_from_slice_rev() {
        let data = [1, 2, 3];
        assert_eq!(from_slice_rev(&data).to_vec(), vec![3, 2, 1]);
        assert!(from_slice_rev::<i32>(&[]).to_vec().is_empty());

        let mut seen = Vec::new();
        from_slice_rev(&data).drive(|x| {
            seen.push(x);
            x != 2
        });
        assert_eq!(seen, vec![3, 2]);
    }

    #[test]
    fn test_from_map_contents() {
        let m: HashMap<i32, &str> = [(1, "a"), (2, "b")].into_iter().collect();
        let got = from_map(&m).map(|k, v| (*k, *v)).to_map();
        assert_eq!(got, m);
    }

    #[test]
    fn test_from_map_ordered_map_keeps_order() {
        let m: BTreeMap<&str, i32> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
        assert_eq!(from_map(&m).keys().to_vec(), vec![&"a", &"b", &"c"]);
    }

    #[test]
    fn test_from_map_early_stop() {
        let m: HashMap<i32, i32> = (0..10).map(|i| (i, i)).collect();
        let mut visits = 0;
        from_map(&m).drive(|_, _| {
            visits += 1;
            visits < 3
        });
        assert_eq!(visits, 3);
    }

    #[test]
    fn test_drain_is_one_shot() {
        let (tx, rx) = mpsc::channel();
        for i in 1..=3 {
            tx.send(i).unwrap();
        }
        drop(tx);

        let mut seq = drain(rx.into_iter());
        assert_eq!((&mut seq).to_vec(), vec![1, 2, 3]);
        assert!(seq.to_vec().is_empty());
    }

    #[test]
    fn test_drain_resumes_after_early_stop() {
        let mut seq = drain(1..=5);
        assert_eq!((&mut seq).take(2).to_vec(), vec![1, 2]);
        assert_eq!(seq.to_vec(), vec![3, 4, 5]);
    }
}
