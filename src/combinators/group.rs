use std::mem;

use crate::Seq;

/// Runs of adjacent equivalent elements. See [`Seq::group_by_adjacent`].
///
/// `same(last, next)` is called exactly once per adjacent upstream pair; a new
/// run begins when it returns `false`.
pub struct GroupByAdjacent<S, F> {
    inner: S,
    same: F,
}

impl<S, F> GroupByAdjacent<S, F> {
    pub(crate) fn new(inner: S, same: F) -> Self {
        Self { inner, same }
    }
}

impl<S, F> Seq for GroupByAdjacent<S, F>
where
    S: Seq,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    type Item = Vec<S::Item>;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(Vec<S::Item>) -> bool,
    {
        let same = &mut self.same;
        let mut run: Vec<S::Item> = Vec::new();
        let mut stopped = false;
        self.inner.drive(|x| {
            let extends = match run.last() {
                None => true,
                Some(last) => same(last, &x),
            };
            if extends {
                run.push(x);
                return true;
            }
            let done = mem::replace(&mut run, vec![x]);
            stopped = !consumer(done);
            !stopped
        });
        if !stopped && !run.is_empty() {
            let _ = consumer(run);
        }
    }
}

/// Adjacent de-duplication by equality. See [`Seq::dedup`].
pub struct Dedup<S> {
    inner: S,
}

impl<S> Dedup<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> Seq for Dedup<S>
where
    S: Seq,
    S::Item: Clone + PartialEq,
{
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let mut last: Option<S::Item> = None;
        self.inner.drive(|x| {
            if last.as_ref() == Some(&x) {
                return true;
            }
            last = Some(x.clone());
            consumer(x)
        })
    }
}

/// Adjacent de-duplication by a caller predicate. See [`Seq::dedup_by`].
pub struct DedupBy<S, F> {
    inner: S,
    same: F,
}

impl<S, F> DedupBy<S, F> {
    pub(crate) fn new(inner: S, same: F) -> Self {
        Self { inner, same }
    }
}

impl<S, F> Seq for DedupBy<S, F>
where
    S: Seq,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let same = &mut self.same;
        let mut last: Option<S::Item> = None;
        self.inner.drive(|x| {
            if let Some(prev) = &last {
                if same(prev, &x) {
                    return true;
                }
            }
            last = Some(x.clone());
            consumer(x)
        })
    }
}

/// Adjacent de-duplication by a derived key. See [`Seq::dedup_by_key`].
///
/// Only the key of the last yielded element is retained, so elements need not
/// be `Clone`.
pub struct DedupByKey<S, F> {
    inner: S,
    key: F,
}

impl<S, F> DedupByKey<S, F> {
    pub(crate) fn new(inner: S, key: F) -> Self {
        Self { inner, key }
    }
}

impl<S, K, F> Seq for DedupByKey<S, F>
where
    S: Seq,
    K: PartialEq,
    F: FnMut(&S::Item) -> K,
{
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let key = &mut self.key;
        let mut last: Option<K> = None;
        self.inner.drive(|x| {
            let k = key(&x);
            if last.as_ref() == Some(&k) {
                return true;
            }
            last = Some(k);
            consumer(x)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::prelude::*;

    #[test]
    fn test_group_by_adjacent_equality() {
        let groups = from_iter(vec![1, 1, 2, 2, 2, 3, 1])
            .group_by_adjacent(|a, b| a == b)
            .to_vec();
        assert_eq!(groups, vec![vec![1, 1], vec![2, 2, 2], vec![3], vec![1]]);
        assert!(empty::<i32>().group_by_adjacent(|a, b| a == b).to_vec().is_empty());
    }

    #[test]
    fn test_group_by_adjacent_compares_last_with_next() {
        let ascending_runs = from_iter(vec![1, 2, 3, 2, 5, 1])
            .group_by_adjacent(|last, next| next > last)
            .to_vec();
        assert_eq!(ascending_runs, vec![vec![1, 2, 3], vec![2, 5], vec![1]]);
    }

    #[test]
    fn test_group_by_adjacent_calls_predicate_once_per_pair() {
        let calls = Cell::new(0);
        let _ = from_iter(vec![1, 1, 2, 3, 3])
            .group_by_adjacent(|a, b| {
                calls.set(calls.get() + 1);
                a == b
            })
            .to_vec();
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_group_by_adjacent_stop_drops_pending_run() {
        let mut seen = Vec::new();
        from_iter(vec![1, 1, 2, 2, 3]).group_by_adjacent(|a, b| a == b).drive(|g| {
            seen.push(g);
            seen.len() < 2
        });
        assert_eq!(seen, vec![vec![1, 1], vec![2, 2]]);
    }

    #[test]
    fn test_dedup_compares_with_last_yielded() {
        assert_eq!(from_iter(vec![1, 1, 2, 2, 3, 1, 1]).dedup().to_vec(), vec![1, 2, 3, 1]);
        assert!(empty::<i32>().dedup().to_vec().is_empty());
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let inputs = vec![
            vec![],
            vec![1],
            vec![1, 1, 1],
            vec![1, 2, 1, 2],
            vec![3, 3, 1, 2, 2, 2, 3, 3],
        ];
        for input in inputs {
            let once = from_iter(input.clone()).dedup().to_vec();
            let twice = from_iter(input).dedup().dedup().to_vec();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_dedup_by_uses_last_yielded_not_last_seen() {
        // 1 is kept, 2 and 3 are within 2 of it, 4 is not; 5 is within 2 of 4.
        let got = from_iter(vec![1, 2, 3, 4, 5, 9])
            .dedup_by(|prev, next| next - prev <= 2)
            .to_vec();
        assert_eq!(got, vec![1, 4, 9]);
    }

    #[test]
    fn test_dedup_by_key() {
        let words = vec!["apple", "avocado", "banana", "blueberry", "apricot"];
        let got = from_iter(words)
            .dedup_by_key(|w| w.chars().next())
            .to_vec();
        assert_eq!(got, vec!["apple", "banana", "apricot"]);
    }

    #[test]
    fn test_dedup_by_key_length() {
        let got = from_iter(vec!["a", "b", "bb", "ccc", "dd", "e"])
            .dedup_by_key(|s| s.len())
            .to_vec();
        assert_eq!(got, vec!["a", "bb", "ccc", "dd", "e"]);
    }

    #[test]
    fn test_dedup_early_stop() {
        let mut seen = Vec::new();
        from_iter(vec![1, 1, 2, 3, 3, 4]).dedup().drive(|x| {
            seen.push(x);
            x < 2
        });
        assert_eq!(seen, vec![1, 2]);
    }
}
