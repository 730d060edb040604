use crate::Seq;

/// Sequence of collections, flattened. See [`Seq::flatten`].
pub struct Flatten<S> {
    inner: S,
}

impl<S> Flatten<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> Seq for Flatten<S>
where
    S: Seq,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(Self::Item) -> bool,
    {
        self.inner.drive(|batch| {
            for x in batch {
                if !consumer(x) {
                    return false;
                }
            }
            true
        })
    }
}

/// Sequence of sequences, flattened. See [`Seq::flatten_seq`].
///
/// A stop inside the active inner sequence ends the whole traversal at once;
/// later inner sequences are never driven.
pub struct FlattenSeq<S> {
    inner: S,
}

impl<S> FlattenSeq<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> Seq for FlattenSeq<S>
where
    S: Seq,
    S::Item: Seq,
{
    type Item = <S::Item as Seq>::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(Self::Item) -> bool,
    {
        self.inner.drive(|mut sub| {
            let mut stopped = false;
            sub.drive(|x| {
                stopped = !consumer(x);
                !stopped
            });
            !stopped
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::prelude::*;

    #[test]
    fn test_flatten_vectors() {
        let got = from_iter(vec![vec![1, 2], vec![], vec![3]]).flatten().to_vec();
        assert_eq!(got, vec![1, 2, 3]);
    }

    #[test]
    fn test_flatten_seq_of_seqs() {
        let got = iota(1, 4, 1).map(|n| iota(0, n, 1)).flatten_seq().to_vec();
        assert_eq!(got, vec![0, 0, 1, 0, 1, 2]);
    }

    #[test]
    fn test_flatten_seq_stops_mid_inner() {
        let started = Cell::new(0);
        let mut seen = Vec::new();
        from_iter(vec![vec![1, 2, 3], vec![4, 5]])
            .map(|v| {
                started.set(started.get() + 1);
                from_iter(v)
            })
            .flatten_seq()
            .drive(|x| {
                seen.push(x);
                x != 2
            });
        assert_eq!(seen, vec![1, 2]);
        assert_eq!(started.get(), 1);
    }

    #[test]
    fn test_flatten_early_stop() {
        let got = from_iter(vec![vec![1, 2], vec![3, 4]]).flatten().take(3).to_vec();
        assert_eq!(got, vec![1, 2, 3]);
    }
}
