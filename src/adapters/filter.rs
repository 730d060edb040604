use crate::{Seq, Seq2};

/// Keeps matching elements. See [`Seq::filter`] and [`Seq2::filter`].
pub struct Filter<S, P> {
    inner: S,
    pred: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(inner: S, pred: P) -> Self {
        Self { inner, pred }
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let pred = &mut self.pred;
        self.inner.drive(|x| if pred(&x) { consumer(x) } else { true })
    }
}

impl<S, P> Seq2 for Filter<S, P>
where
    S: Seq2,
    P: FnMut(&S::Key, &S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Key, S::Value) -> bool,
    {
        let pred = &mut self.pred;
        self.inner
            .drive(|k, v| if pred(&k, &v) { consumer(k, v) } else { true })
    }
}

/// Drops matching elements. See [`Seq::exclude`] and [`Seq2::exclude`].
pub struct Exclude<S, P> {
    inner: S,
    pred: P,
}

impl<S, P> Exclude<S, P> {
    pub(crate) fn new(inner: S, pred: P) -> Self {
        Self { inner, pred }
    }
}

impl<S, P> Seq for Exclude<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let pred = &mut self.pred;
        self.inner.drive(|x| if pred(&x) { true } else { consumer(x) })
    }
}

impl<S, P> Seq2 for Exclude<S, P>
where
    S: Seq2,
    P: FnMut(&S::Key, &S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Key, S::Value) -> bool,
    {
        let pred = &mut self.pred;
        self.inner
            .drive(|k, v| if pred(&k, &v) { true } else { consumer(k, v) })
    }
}

/// Yields while the predicate holds. See [`Seq::take_while`].
pub struct TakeWhile<S, P> {
    inner: S,
    pred: P,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(inner: S, pred: P) -> Self {
        Self { inner, pred }
    }
}

impl<S, P> Seq for TakeWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let pred = &mut self.pred;
        self.inner.drive(|x| pred(&x) && consumer(x))
    }
}

/// Skips while the predicate holds. See [`Seq::skip_while`].
pub struct SkipWhile<S, P> {
    inner: S,
    pred: P,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(inner: S, pred: P) -> Self {
        Self { inner, pred }
    }
}

impl<S, P> Seq for SkipWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(S::Item) -> bool,
    {
        let pred = &mut self.pred;
        let mut skipping = true;
        self.inner.drive(|x| {
            if skipping && pred(&x) {
                return true;
            }
            skipping = false;
            consumer(x)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_filter_and_exclude() {
        assert_eq!(iota(1, 7, 1).filter(|x| x % 2 == 0).to_vec(), vec![2, 4, 6]);
        assert_eq!(iota(1, 7, 1).exclude(|x| x % 2 == 0).to_vec(), vec![1, 3, 5]);
    }

    #[test]
    fn test_take_while() {
        assert_eq!(from_iter(vec![1, 2, 3, 4, 1]).take_while(|x| *x < 4).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_while_stops_upstream() {
        let mut pulled = 0;
        let _ = repeat_with(|| {
            pulled += 1;
            pulled
        })
        .take_while(|x| *x < 3)
        .to_vec();
        assert_eq!(pulled, 3);
    }

    #[test]
    fn test_skip_while_only_skips_prefix() {
        assert_eq!(
            from_iter(vec![1, 2, 3, 1, 2]).skip_while(|x| *x < 3).to_vec(),
            vec![3, 1, 2]
        );
    }
}
